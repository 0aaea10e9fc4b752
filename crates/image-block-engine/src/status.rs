/// Visual status of a block. Derived from the block data and upload
/// activity, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualStatus {
    Empty,
    Uploading,
    Filled,
}

/// Which parts of the block are shown for a given status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub select_button: bool,
    pub preloader: bool,
    pub media: bool,
    pub caption: bool,
}

impl VisualStatus {
    pub const ALL: [VisualStatus; 3] = [
        VisualStatus::Empty,
        VisualStatus::Uploading,
        VisualStatus::Filled,
    ];

    /// Suffix of the wrapper's status class, `image-tool--{modifier}`
    pub fn modifier(self) -> &'static str {
        match self {
            VisualStatus::Empty => "empty",
            VisualStatus::Uploading => "loading",
            VisualStatus::Filled => "filled",
        }
    }

    pub fn class_name(self) -> String {
        format!("image-tool--{}", self.modifier())
    }

    pub fn presentation(self) -> Presentation {
        match self {
            VisualStatus::Empty => Presentation {
                select_button: true,
                preloader: false,
                media: false,
                caption: false,
            },
            VisualStatus::Uploading => Presentation {
                select_button: false,
                preloader: true,
                media: false,
                caption: false,
            },
            VisualStatus::Filled => Presentation {
                select_button: false,
                preloader: false,
                media: true,
                caption: true,
            },
        }
    }
}

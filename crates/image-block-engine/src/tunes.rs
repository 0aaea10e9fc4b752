use image_block_config::Direction;

use crate::host::I18n;

pub const ICON_PICTURE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" fill="none" viewBox="0 0 24 24"><rect width="14" height="14" x="5" y="5" stroke="currentColor" stroke-width="2" rx="4"/><path stroke="currentColor" stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5.13968 15.32L8.69058 11.5661C9.02934 11.2036 9.48873 11 9.96774 11C10.4467 11 10.9061 11.2036 11.2449 11.5661L15.3871 16M13.5806 14.0664L15.0132 12.533C15.3519 12.1705 15.8113 11.9668 16.2903 11.9668C16.7693 11.9668 17.2287 12.1705 17.5675 12.533L18.841 13.9634"/><circle cx="13.5" cy="9.5" r="1.5" fill="currentColor"/></svg>"#;
pub const ICON_ALIGN_CENTER: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" fill="none" viewBox="0 0 24 24"><path stroke="currentColor" stroke-linecap="round" stroke-width="2" d="M18 7L6 7"/><path stroke="currentColor" stroke-linecap="round" stroke-width="2" d="M15 17H9"/><path stroke="currentColor" stroke-linecap="round" stroke-width="2" d="M17 12L7 12"/></svg>"#;
pub const ICON_ALIGN_LEFT: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" fill="none" viewBox="0 0 24 24"><path stroke="currentColor" stroke-linecap="round" stroke-width="2" d="M17 7L5 7"/><path stroke="currentColor" stroke-linecap="round" stroke-width="2" d="M17 17H5"/><path stroke="currentColor" stroke-linecap="round" stroke-width="2" d="M13 12L5 12"/></svg>"#;
pub const ICON_ALIGN_RIGHT: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" fill="none" viewBox="0 0 24 24"><path stroke="currentColor" stroke-linecap="round" stroke-width="2" d="M19 7L7 7"/><path stroke="currentColor" stroke-linecap="round" stroke-width="2" d="M19 17H7"/><path stroke="currentColor" stroke-linecap="round" stroke-width="2" d="M19 12L11 12"/></svg>"#;

/// Toolbox entry shown by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toolbox {
    pub icon: &'static str,
    pub title: &'static str,
}

pub const TOOLBOX: Toolbox = Toolbox {
    icon: ICON_PICTURE,
    title: "Image",
};

/// One alignment tune
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tune {
    pub direction: Direction,
    pub icon: &'static str,
    pub title: &'static str,
}

pub const TUNES: [Tune; 3] = [
    Tune {
        direction: Direction::Center,
        icon: ICON_ALIGN_CENTER,
        title: "Align center",
    },
    Tune {
        direction: Direction::FlexStart,
        icon: ICON_ALIGN_LEFT,
        title: "Align left",
    },
    Tune {
        direction: Direction::FlexEnd,
        icon: ICON_ALIGN_RIGHT,
        title: "Align right",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuneItem {
    pub direction: Direction,
    pub icon: &'static str,
    pub title: String,
    pub active: bool,
}

/// The block settings entry: an "Alignment" group with one radio item per tune
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuneMenu {
    pub icon: &'static str,
    pub label: String,
    pub items: Vec<TuneItem>,
}

impl TuneMenu {
    pub fn new(current: Direction, i18n: &dyn I18n) -> Self {
        Self {
            icon: ICON_ALIGN_CENTER,
            label: i18n.t("Alignment"),
            items: TUNES
                .iter()
                .map(|tune| TuneItem {
                    direction: tune.direction,
                    icon: tune.icon,
                    title: i18n.t(tune.title),
                    active: tune.direction == current,
                })
                .collect(),
        }
    }

    /// Make `direction` the only active item
    pub fn select(&mut self, direction: Direction) {
        for item in &mut self.items {
            item.active = item.direction == direction;
        }
    }

    pub fn active(&self) -> Option<Direction> {
        self.items.iter().find(|i| i.active).map(|i| i.direction)
    }
}

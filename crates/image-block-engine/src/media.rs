/// Pixel size reported by the host for a rendered element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Element used to display an uploaded source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    /// mp4 sources, played muted and looped like an animated image
    Video,
}

impl MediaKind {
    pub fn for_url(url: &str) -> Self {
        if url.ends_with(".mp4") {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            MediaKind::Image => "img",
            MediaKind::Video => "video",
        }
    }

    /// DOM event fired once the element has something to show
    pub fn loaded_event(self) -> &'static str {
        match self {
            MediaKind::Image => "load",
            MediaKind::Video => "loadeddata",
        }
    }
}

/// The rendered image (or video) element of a filled block
#[derive(Debug, Clone, PartialEq)]
pub struct MediaElement {
    url: String,
    kind: MediaKind,
    width: String,
    height: String,
    measured: Option<Size>,
    loaded: bool,
}

impl MediaElement {
    pub fn new(url: impl Into<String>, width: impl Into<String>, height: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            kind: MediaKind::for_url(&url),
            url,
            width: width.into(),
            height: height.into(),
            measured: None,
            loaded: false,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// Inline width style
    pub fn width(&self) -> &str {
        &self.width
    }

    /// Inline height style
    pub fn height(&self) -> &str {
        &self.height
    }

    pub fn measured(&self) -> Option<Size> {
        self.measured
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Boolean attributes beyond `src`
    pub fn flags(&self) -> &'static [&'static str] {
        match self.kind {
            MediaKind::Image => &[],
            MediaKind::Video => &["autoplay", "loop", "muted", "playsinline"],
        }
    }

    pub(crate) fn mark_loaded(&mut self) {
        self.loaded = true;
    }

    /// A new width invalidates the last measurement until the host lays the
    /// element out again
    pub(crate) fn set_width(&mut self, width: String) {
        self.width = width;
        self.measured = None;
    }

    pub(crate) fn set_measured(&mut self, size: Size) {
        self.measured = Some(size);
    }
}

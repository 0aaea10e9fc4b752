use std::sync::OnceLock;

use regex::Regex;

use crate::upload::FileUpload;

/// Content the host routes to the block when something is pasted or dropped
#[derive(Debug, Clone, PartialEq)]
pub enum PasteEvent {
    /// An `<img>` tag from pasted HTML
    Tag { src: String },
    /// Pasted text matching [`image_url_pattern`]
    Pattern { url: String },
    /// A pasted or dropped file
    File { file: FileUpload },
}

/// What the block should do with a paste
#[derive(Debug, Clone, PartialEq)]
pub enum PasteAction {
    UploadFile(FileUpload),
    UploadUrl(String),
    /// Local `blob:` reference that has to be fetched into a file first
    ResolveBlob(String),
}

impl PasteEvent {
    pub fn into_action(self) -> PasteAction {
        match self {
            PasteEvent::Tag { src } if is_blob_reference(&src) => PasteAction::ResolveBlob(src),
            PasteEvent::Tag { src } => PasteAction::UploadUrl(src),
            PasteEvent::Pattern { url } => PasteAction::UploadUrl(url),
            PasteEvent::File { file } => PasteAction::UploadFile(file),
        }
    }
}

/// Paste substitutions the block registers with the host
#[derive(Debug, Clone)]
pub struct PasteConfig {
    /// Tag name and the attributes kept from it
    pub tags: &'static [(&'static str, &'static [&'static str])],
    pub pattern: &'static Regex,
    pub mime_types: &'static [&'static str],
}

pub fn paste_config() -> PasteConfig {
    PasteConfig {
        tags: &[("img", &["src"])],
        pattern: image_url_pattern(),
        mime_types: &["image/*"],
    }
}

/// Links to common image formats, optionally with a simple query string
pub fn image_url_pattern() -> &'static Regex {
    static IMAGE_URL: OnceLock<Regex> = OnceLock::new();
    IMAGE_URL.get_or_init(|| {
        Regex::new(r"(?i)https?://\S+\.(gif|jpe?g|tiff|png|svg|webp)(\?[a-z0-9=]*)?$")
            .expect("Invalid image url regex")
    })
}

/// Images pasted from PDFs and similar sources arrive as `blob:` urls
pub fn is_blob_reference(src: &str) -> bool {
    src.starts_with("blob:")
}

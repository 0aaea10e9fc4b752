//! Services the host editor provides to a block.

use std::rc::Rc;

use async_trait::async_trait;

use crate::surface::{DetachedSurface, InputSurface};
use crate::upload::{FileUpload, UploadError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationStyle {
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub style: NotificationStyle,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            style: NotificationStyle::Error,
        }
    }
}

/// Transient user-visible messages
pub trait Notifier {
    fn show(&self, notification: Notification);
}

/// UI string lookup. The default returns the key itself.
pub trait I18n {
    fn t(&self, key: &str) -> String {
        key.to_string()
    }
}

pub struct IdentityI18n;

impl I18n for IdentityI18n {}

/// Native file selection dialog
#[async_trait(?Send)]
pub trait FilePicker {
    /// `accept` is a mime filter such as `image/*`. `None` on cancel.
    async fn pick(&self, accept: &str) -> Option<FileUpload>;
}

/// Turns a `blob:` reference from pasted HTML into file contents
#[async_trait(?Send)]
pub trait BlobResolver {
    async fn resolve(&self, src: &str) -> Result<FileUpload, UploadError>;
}

/// Everything a block receives from its host
#[derive(Clone)]
pub struct HostApi {
    pub notifier: Rc<dyn Notifier>,
    pub i18n: Rc<dyn I18n>,
    pub surface: Rc<dyn InputSurface>,
    pub picker: Option<Rc<dyn FilePicker>>,
    pub blobs: Option<Rc<dyn BlobResolver>>,
}

impl HostApi {
    pub fn new(notifier: Rc<dyn Notifier>) -> Self {
        Self {
            notifier,
            i18n: Rc::new(IdentityI18n),
            surface: Rc::new(DetachedSurface),
            picker: None,
            blobs: None,
        }
    }

    pub fn with_i18n(mut self, i18n: Rc<dyn I18n>) -> Self {
        self.i18n = i18n;
        self
    }

    pub fn with_surface(mut self, surface: Rc<dyn InputSurface>) -> Self {
        self.surface = surface;
        self
    }

    pub fn with_picker(mut self, picker: Rc<dyn FilePicker>) -> Self {
        self.picker = Some(picker);
        self
    }

    pub fn with_blob_resolver(mut self, blobs: Rc<dyn BlobResolver>) -> Self {
        self.blobs = Some(blobs);
        self
    }
}

//! Host services for blocks rendered with Dioxus, backed by signals.

use std::collections::HashSet;
use std::path::Path;

use async_trait::async_trait;
use dioxus::prelude::*;
use image_block_engine::{
    BlockId, FilePicker, FileUpload, ImageFile, InputSurface, Notification, Notifier, UploadError,
    UploadResponse, UploadTransport,
};

/// Queues notifications for the toast area
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    pub toasts: Signal<Vec<Notification>>,
}

impl Notifier for ToastNotifier {
    fn show(&self, notification: Notification) {
        let mut toasts = self.toasts;
        toasts.write().push(notification);
    }
}

/// Blocks currently asking the page to turn off text selection and native
/// dragging
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragSuppression {
    blocks: HashSet<BlockId>,
}

impl DragSuppression {
    pub fn set(&mut self, block: BlockId, suppressed: bool) {
        if suppressed {
            self.blocks.insert(block);
        } else {
            self.blocks.remove(&block);
        }
    }

    pub fn is_active(&self) -> bool {
        !self.blocks.is_empty()
    }
}

/// Pointer capture at window level. While any block suppresses native drag,
/// the page root turns off text selection and native dragging.
#[derive(Clone, Copy)]
pub struct WindowSurface {
    pub suppression: Signal<DragSuppression>,
}

impl InputSurface for WindowSurface {
    fn track_pointer(&self, block: BlockId) {
        log::debug!("Pointer captured by block {block}");
    }

    fn untrack_pointer(&self, block: BlockId) {
        log::debug!("Pointer released by block {block}");
    }

    fn suppress_native_drag(&self, block: BlockId, suppressed: bool) {
        // The capture may be released while the page is being torn down
        let mut suppression = self.suppression;
        if let Ok(mut blocks) = suppression.try_write() {
            blocks.set(block, suppressed);
        }
    }
}

/// Reads the file whose path was typed into the playground
#[derive(Clone, Copy)]
pub struct PathPicker {
    pub path: Signal<String>,
}

#[async_trait(?Send)]
impl FilePicker for PathPicker {
    async fn pick(&self, accept: &str) -> Option<FileUpload> {
        let typed = self.path.read().trim().to_string();
        if typed.is_empty() {
            return None;
        }

        let path = Path::new(&typed);
        let mime_type = mime_for_path(path);
        if !accepts(accept, mime_type) {
            log::warn!("{typed} is {mime_type}, which does not match {accept}");
            return None;
        }

        match std::fs::read(path) {
            Ok(bytes) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| typed.clone());
                Some(FileUpload::new(name, mime_type, bytes))
            }
            Err(e) => {
                log::warn!("Cannot read {typed}: {e}");
                None
            }
        }
    }
}

/// Upload transport for working without a backend: files become `data:`
/// urls and pasted urls are kept as they are.
pub struct LocalTransport;

#[async_trait(?Send)]
impl UploadTransport for LocalTransport {
    async fn upload_by_file(&self, file: &FileUpload) -> Result<UploadResponse, UploadError> {
        Ok(UploadResponse::success(ImageFile::new(file.preview_source())))
    }

    async fn upload_by_url(&self, url: &str) -> Result<UploadResponse, UploadError> {
        Ok(UploadResponse::success(ImageFile::new(url)))
    }
}

pub fn mime_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "tif" | "tiff" => "image/tiff",
        "mp4" => "video/mp4",
        _ => "application/octet-stream",
    }
}

/// Match a mime type against an `accept` filter such as `image/*,video/mp4`
pub fn accepts(filter: &str, mime_type: &str) -> bool {
    filter.split(',').map(str::trim).any(|pattern| {
        match pattern.strip_suffix("/*") {
            Some(family) => mime_type
                .split_once('/')
                .is_some_and(|(kind, _)| kind == family),
            None => pattern == mime_type,
        }
    })
}

use std::rc::Rc;

use crate::data::ImageFile;
use crate::host::FilePicker;
use crate::upload::transport::{FileUpload, UploadError, UploadTransport};

/// Identifies one started upload. Tokens increase monotonically per block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UploadToken(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum UploadRequest {
    File(FileUpload),
    Url(String),
}

/// An upload that has been started but not yet sent to the transport.
///
/// Holds no borrow of the block, so the network round trip can run while the
/// block keeps handling events.
pub struct PendingUpload {
    token: UploadToken,
    request: UploadRequest,
    transport: Rc<dyn UploadTransport>,
}

impl PendingUpload {
    pub fn token(&self) -> UploadToken {
        self.token
    }

    pub fn request(&self) -> &UploadRequest {
        &self.request
    }

    /// Run the transport. Always resolves; failures are carried in the result.
    pub async fn send(self) -> CompletedUpload {
        let response = match &self.request {
            UploadRequest::File(file) => self.transport.upload_by_file(file).await,
            UploadRequest::Url(url) => self.transport.upload_by_url(url).await,
        };

        CompletedUpload {
            token: self.token,
            result: response.and_then(|r| r.into_image()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletedUpload {
    pub token: UploadToken,
    pub result: Result<ImageFile, UploadError>,
}

pub struct UploadCoordinator {
    transport: Rc<dyn UploadTransport>,
    picker: Option<Rc<dyn FilePicker>>,
    accept: String,
    latest: u64,
}

impl UploadCoordinator {
    pub fn new(transport: Rc<dyn UploadTransport>, accept: impl Into<String>) -> Self {
        Self {
            transport,
            picker: None,
            accept: accept.into(),
            latest: 0,
        }
    }

    pub fn with_picker(mut self, picker: Option<Rc<dyn FilePicker>>) -> Self {
        self.picker = picker;
        self
    }

    /// Start a file upload. The local preview is returned before anything is sent.
    pub fn upload_by_file(&mut self, file: FileUpload) -> (String, PendingUpload) {
        let preview = file.preview_source();
        log::info!("Uploading file {} ({})", file.name, file.mime_type);
        (preview, self.start(UploadRequest::File(file)))
    }

    /// Start an upload of a remote image. There is no local preview.
    pub fn upload_by_url(&mut self, url: impl Into<String>) -> PendingUpload {
        let url = url.into();
        log::info!("Uploading image by url {url}");
        self.start(UploadRequest::Url(url))
    }

    /// Ask the host for a file matching the accepted mime types.
    ///
    /// `None` when no picker is available or the user cancelled.
    pub async fn pick_file(&self) -> Option<FileUpload> {
        let Some(picker) = &self.picker else {
            log::warn!("File selection requested but no file picker is available");
            return None;
        };
        picker.pick(&self.accept).await
    }

    pub fn is_current(&self, token: UploadToken) -> bool {
        token.0 == self.latest
    }

    /// Filter a completion down to the result that still matters.
    ///
    /// Completions of uploads superseded by a newer start are dropped.
    pub fn accept(&self, completed: CompletedUpload) -> Option<Result<ImageFile, UploadError>> {
        if !self.is_current(completed.token) {
            log::debug!(
                "Discarding completion of upload {:?}, superseded by {}",
                completed.token,
                self.latest
            );
            return None;
        }
        Some(completed.result)
    }

    fn start(&mut self, request: UploadRequest) -> PendingUpload {
        self.latest += 1;
        PendingUpload {
            token: UploadToken(self.latest),
            request,
            transport: Rc::clone(&self.transport),
        }
    }
}

use image_block_config::Direction;

use crate::data::{BlockData, ImageFile};
use crate::media::{MediaElement, Size};
use crate::status::VisualStatus;
use crate::upload::UploadError;

/// Owner of a block's data and visual status.
///
/// ```text
/// EMPTY --begin_upload--> UPLOADING --media_loaded--> FILLED
///   ^                         |                          |
///   +------upload failed------+<-------begin_upload------+
/// ```
#[derive(Debug, Clone)]
pub struct BlockStateMachine {
    data: BlockData,
    status: VisualStatus,
    preview: Option<String>,
    media: Option<MediaElement>,
    upload_pending: bool,
}

impl Default for BlockStateMachine {
    fn default() -> Self {
        Self {
            data: BlockData::default(),
            status: VisualStatus::Empty,
            preview: None,
            media: None,
            upload_pending: false,
        }
    }
}

impl BlockStateMachine {
    pub fn new(data: BlockData) -> Self {
        let mut state = Self::default();
        state.load(data);
        state
    }

    /// Replace all fields with `data`. A block with an image waits in
    /// `Uploading` until its media element reports it has loaded.
    pub fn load(&mut self, data: BlockData) {
        self.data = data;
        self.preview = None;
        self.media = None;
        self.upload_pending = false;
        if self.data.has_image() {
            self.fill_image();
        } else {
            self.set_status(VisualStatus::Empty);
        }
    }

    pub fn status(&self) -> VisualStatus {
        self.status
    }

    pub fn data(&self) -> &BlockData {
        &self.data
    }

    /// Placeholder shown while uploading
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn media(&self) -> Option<&MediaElement> {
        self.media.as_ref()
    }

    pub fn begin_upload(&mut self, preview: Option<String>) {
        self.preview = preview;
        self.upload_pending = true;
        self.set_status(VisualStatus::Uploading);
    }

    /// Apply the outcome of an upload.
    ///
    /// A failure leaves the stored image untouched, drops back to `Empty` and
    /// hands the error back for reporting.
    pub fn complete_upload(&mut self, result: Result<ImageFile, UploadError>) -> Result<(), UploadError> {
        self.upload_pending = false;
        match result {
            Ok(image) if !image.is_empty() => {
                self.data.image = image;
                self.fill_image();
                Ok(())
            }
            Ok(image) => {
                self.upload_failed();
                Err(UploadError::InvalidResponse(format!(
                    "file without url: {image:?}"
                )))
            }
            Err(err) => {
                self.upload_failed();
                Err(err)
            }
        }
    }

    /// The media element for `url` finished loading. While an upload is in
    /// flight the block keeps showing its preview.
    pub fn media_loaded(&mut self, url: &str) -> bool {
        let Some(media) = self.media.as_mut().filter(|m| m.url() == url) else {
            log::debug!("Ignoring load signal from stale media {url}");
            return false;
        };
        media.mark_loaded();
        if self.upload_pending {
            log::debug!("Media {url} loaded while an upload is running");
            return false;
        }
        self.preview = None;
        if self.status == VisualStatus::Uploading {
            self.set_status(VisualStatus::Filled);
            return true;
        }
        false
    }

    /// Size of the media element as laid out by the host
    pub fn media_measured(&mut self, size: Size) {
        if let Some(media) = self.media.as_mut() {
            media.set_measured(size);
        }
    }

    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.data.direction == direction {
            return false;
        }
        self.data.direction = direction;
        true
    }

    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.data.caption = caption.into();
    }

    /// Single entry point for size changes coming from resizing
    pub fn apply_live_width(&mut self, width: String) {
        if let Some(media) = self.media.as_mut() {
            media.set_width(width.clone());
        }
        self.data.width = width;
    }

    /// Data to persist. Width and height come from the rendered element when
    /// the host has measured it.
    pub fn snapshot(&self) -> BlockData {
        let mut data = self.data.clone();
        if let Some(size) = self.media.as_ref().and_then(MediaElement::measured) {
            data.width = format!("{}px", size.width.round());
            data.height = format!("{}px", size.height.round());
        }
        data
    }

    fn fill_image(&mut self) {
        // The host keeps the element when the url is unchanged, so its load
        // event will not fire again
        let same_source = self
            .media
            .as_ref()
            .filter(|m| m.url() == self.data.image.url)
            .map(MediaElement::is_loaded);

        match same_source {
            Some(true) => {
                self.preview = None;
                self.set_status(VisualStatus::Filled);
            }
            Some(false) => self.set_status(VisualStatus::Uploading),
            None => {
                self.media = Some(MediaElement::new(
                    self.data.image.url.clone(),
                    self.data.width.clone(),
                    self.data.height.clone(),
                ));
                self.set_status(VisualStatus::Uploading);
            }
        }
    }

    fn upload_failed(&mut self) {
        self.preview = None;
        self.set_status(VisualStatus::Empty);
    }

    fn set_status(&mut self, status: VisualStatus) {
        if self.status != status {
            log::debug!("Block status {:?} -> {:?}", self.status, status);
        }
        self.status = status;
    }
}

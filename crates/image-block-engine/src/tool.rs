use std::rc::Rc;

use image_block_config::{Direction, ToolConfig};
use thiserror::Error;

use crate::alignment::AlignmentController;
use crate::data::BlockData;
use crate::host::{FilePicker, HostApi, Notification};
use crate::media::Size;
use crate::paste::{PasteAction, PasteConfig, PasteEvent, paste_config};
use crate::resize::{Edge, MoveOutcome, Point, ResizeEngine};
use crate::state::BlockStateMachine;
use crate::status::VisualStatus;
use crate::surface::BlockId;
use crate::tunes::{TOOLBOX, TUNES, Toolbox, Tune, TuneMenu};
use crate::upload::{
    CompletedUpload, FileUpload, PendingUpload, UploadCoordinator, UploadError, UploadTransport,
};
use crate::view::{BlockView, ViewContext, render_block};

pub const UPLOAD_FAILED_MESSAGE: &str = "Couldn’t upload image. Please try another.";

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Malformed image block data: {0}")]
    InvalidData(#[from] serde_json::Error),
}

/// What the host passes when constructing a block
pub struct ToolContext {
    /// Previously saved data, `null` for a new block
    pub data: serde_json::Value,
    pub config: ToolConfig,
    pub api: HostApi,
    pub read_only: bool,
    /// Custom upload implementation replacing the endpoint transport
    pub uploader: Option<Rc<dyn UploadTransport>>,
}

impl ToolContext {
    pub fn new(data: serde_json::Value, config: ToolConfig, api: HostApi) -> Self {
        Self {
            data,
            config,
            api,
            read_only: false,
            uploader: None,
        }
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn with_uploader(mut self, uploader: Rc<dyn UploadTransport>) -> Self {
        self.uploader = Some(uploader);
        self
    }
}

/// The image block as seen by the host editor
pub struct ImageTool {
    id: BlockId,
    config: ToolConfig,
    api: HostApi,
    read_only: bool,
    state: BlockStateMachine,
    uploads: UploadCoordinator,
    resize: ResizeEngine,
    alignment: AlignmentController,
}

impl ImageTool {
    pub const IS_READ_ONLY_SUPPORTED: bool = true;

    pub fn toolbox() -> Toolbox {
        TOOLBOX
    }

    pub fn tunes() -> &'static [Tune] {
        &TUNES
    }

    pub fn paste_config() -> PasteConfig {
        paste_config()
    }

    pub fn new(ctx: ToolContext) -> Result<Self, ToolError> {
        let ToolContext {
            data,
            config,
            api,
            read_only,
            uploader,
        } = ctx;

        let data = BlockData::from_json(&data, config.direction)?;
        let transport = uploader.unwrap_or_else(|| default_transport(&config));
        let id = BlockId::new();

        let uploads =
            UploadCoordinator::new(transport, config.types.clone()).with_picker(api.picker.clone());
        let resize = ResizeEngine::new(id, Rc::clone(&api.surface), config.min_width);
        let alignment = AlignmentController::new(data.direction, read_only);

        log::debug!("Image block {id} created, has image: {}", data.has_image());

        Ok(Self {
            id,
            config,
            api,
            read_only,
            state: BlockStateMachine::new(data),
            uploads,
            resize,
            alignment,
        })
    }

    pub fn id(&self) -> BlockId {
        self.id
    }

    pub fn status(&self) -> VisualStatus {
        self.state.status()
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn render(&self) -> BlockView {
        render_block(
            &self.state,
            &self.alignment,
            &ViewContext {
                config: &self.config,
                i18n: self.api.i18n.as_ref(),
                read_only: self.read_only,
            },
        )
    }

    pub fn save(&self) -> BlockData {
        self.state.snapshot()
    }

    /// Saved data is only worth keeping when it points at an image
    pub fn validate(&self, saved: &BlockData) -> bool {
        saved.has_image()
    }

    pub fn render_tunes(&self) -> TuneMenu {
        TuneMenu::new(self.alignment.direction(), self.api.i18n.as_ref())
    }

    /// Apply an alignment picked in the tune menu
    pub fn set_direction(&mut self, direction: Direction) {
        if self.state.set_direction(direction) {
            log::debug!("Block {} aligned {direction}", self.id);
        }
        self.alignment.apply(direction);
    }

    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.state.set_caption(caption);
    }

    /// Picker registered by the host with the accept filter to open it with,
    /// for front ends that run the upload steps themselves
    pub fn file_picker(&self) -> Option<(Rc<dyn FilePicker>, String)> {
        self.api
            .picker
            .clone()
            .map(|picker| (picker, self.config.types.clone()))
    }

    /// Called by the host after the block was inserted from the toolbox
    pub async fn append_callback(&mut self) {
        self.upload_selected_file().await;
    }

    /// Click on the select-file button
    pub async fn upload_selected_file(&mut self) {
        if let Some(file) = self.uploads.pick_file().await {
            self.upload_file(file).await;
        }
    }

    pub async fn on_paste(&mut self, event: PasteEvent) {
        match event.into_action() {
            PasteAction::UploadFile(file) => self.upload_file(file).await,
            PasteAction::UploadUrl(url) => self.upload_url(url).await,
            PasteAction::ResolveBlob(src) => {
                let resolved = match &self.api.blobs {
                    Some(blobs) => blobs.resolve(&src).await,
                    None => Err(UploadError::Transport(format!(
                        "cannot read pasted {src}: no blob resolver available"
                    ))),
                };
                match resolved {
                    Ok(file) => self.upload_file(file).await,
                    Err(err) => self.report_failure(err),
                }
            }
        }
    }

    pub async fn upload_file(&mut self, file: FileUpload) {
        let pending = self.begin_file_upload(file);
        let completed = pending.send().await;
        self.finish_upload(completed);
    }

    pub async fn upload_url(&mut self, url: impl Into<String>) {
        let pending = self.begin_url_upload(url);
        let completed = pending.send().await;
        self.finish_upload(completed);
    }

    /// Show the local preview and hand back the upload to run
    pub fn begin_file_upload(&mut self, file: FileUpload) -> PendingUpload {
        let (preview, pending) = self.uploads.upload_by_file(file);
        self.state.begin_upload(Some(preview));
        pending
    }

    /// Show the pasted url as preview and hand back the upload to run
    pub fn begin_url_upload(&mut self, url: impl Into<String>) -> PendingUpload {
        let url = url.into();
        self.state.begin_upload(Some(url.clone()));
        self.uploads.upload_by_url(url)
    }

    pub fn finish_upload(&mut self, completed: CompletedUpload) {
        let Some(result) = self.uploads.accept(completed) else {
            return;
        };
        match self.state.complete_upload(result) {
            Ok(()) => log::info!("Image uploaded to {}", self.state.data().image.url),
            Err(err) => self.report_failure(err),
        }
    }

    /// The rendered media element fired its loaded event
    pub fn media_loaded(&mut self, url: &str) {
        self.state.media_loaded(url);
    }

    pub fn media_measured(&mut self, size: Size) {
        self.state.media_measured(size);
    }

    pub fn hover_enter(&mut self) {
        self.alignment.hover_enter();
    }

    pub fn hover_leave(&mut self) {
        self.alignment.hover_leave(self.resize.is_dragging());
    }

    /// Press on a resize handle. Ignored for handles that are not shown.
    pub fn press_handle(
        &mut self,
        edge: Edge,
        pointer: Point,
        wrapper_width_px: f64,
        parent_width_px: f64,
    ) -> bool {
        if self.read_only || !self.alignment.visible_handles().contains(edge) {
            return false;
        }
        self.resize
            .press(edge, pointer, wrapper_width_px, parent_width_px);
        true
    }

    pub fn pointer_move(&mut self, pointer: Point) -> MoveOutcome {
        let outcome = self.resize.pointer_move(pointer);
        if let MoveOutcome::Committed(commit) = outcome {
            self.state.apply_live_width(commit.css());
        }
        outcome
    }

    pub fn pointer_release(&mut self) {
        if self.resize.release() {
            self.alignment.drag_ended();
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.resize.is_dragging()
    }

    fn report_failure(&self, err: UploadError) {
        log::warn!("Image Tool: uploading failed because of {err}");
        self.api
            .notifier
            .show(Notification::error(self.api.i18n.t(UPLOAD_FAILED_MESSAGE)));
    }
}

#[cfg(feature = "http")]
fn default_transport(config: &ToolConfig) -> Rc<dyn UploadTransport> {
    Rc::new(crate::upload::EndpointTransport::from_config(config))
}

#[cfg(not(feature = "http"))]
fn default_transport(_config: &ToolConfig) -> Rc<dyn UploadTransport> {
    Rc::new(crate::upload::UnconfiguredTransport)
}

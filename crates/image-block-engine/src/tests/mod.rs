//! Test doubles for the host services a block depends on, plus block-level
//! scenarios driven through [`ImageTool`].

mod paste_handling;

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use async_trait::async_trait;
use image_block_config::ToolConfig;

use crate::host::{BlobResolver, FilePicker, HostApi, Notification, Notifier};
use crate::surface::{BlockId, InputSurface};
use crate::tool::{ImageTool, ToolContext};
use crate::upload::{FileUpload, UploadError, UploadResponse, UploadTransport};

/// A block wired to recording host services
pub struct Harness {
    pub tool: ImageTool,
    pub notifier: Rc<RecordingNotifier>,
    pub surface: Rc<RecordingSurface>,
    pub transport: Rc<ScriptedTransport>,
}

pub fn harness(data: serde_json::Value, config: ToolConfig, transport: ScriptedTransport) -> Harness {
    harness_with(data, config, transport, |api| api)
}

pub fn harness_with(
    data: serde_json::Value,
    config: ToolConfig,
    transport: ScriptedTransport,
    customize: impl FnOnce(HostApi) -> HostApi,
) -> Harness {
    let notifier = Rc::new(RecordingNotifier::default());
    let surface = Rc::new(RecordingSurface::default());
    let transport = Rc::new(transport);
    let api = customize(HostApi::new(notifier.clone()).with_surface(surface.clone()));

    let tool = ImageTool::new(ToolContext::new(data, config, api).with_uploader(transport.clone()))
        .expect("valid block data");

    Harness {
        tool,
        notifier,
        surface,
        transport,
    }
}

/// Transport answering from a fixed table keyed by url or file name.
/// Unknown keys fail as a transport error.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: HashMap<String, UploadResponse>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, key: &str, response: UploadResponse) -> Self {
        self.responses.insert(key.to_string(), response);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn answer(&self, key: &str) -> Result<UploadResponse, UploadError> {
        self.responses
            .get(key)
            .cloned()
            .ok_or_else(|| UploadError::Transport(format!("no route to {key}")))
    }
}

#[async_trait(?Send)]
impl UploadTransport for ScriptedTransport {
    async fn upload_by_file(&self, file: &FileUpload) -> Result<UploadResponse, UploadError> {
        self.calls.borrow_mut().push(format!("file:{}", file.name));
        self.answer(&file.name)
    }

    async fn upload_by_url(&self, url: &str) -> Result<UploadResponse, UploadError> {
        self.calls.borrow_mut().push(format!("url:{url}"));
        self.answer(url)
    }
}

pub struct FixedPicker {
    file: Option<FileUpload>,
    accepted: RefCell<Vec<String>>,
}

impl FixedPicker {
    pub fn new(file: Option<FileUpload>) -> Self {
        Self {
            file,
            accepted: RefCell::new(Vec::new()),
        }
    }

    pub fn accepted_filters(&self) -> Vec<String> {
        self.accepted.borrow().clone()
    }
}

#[async_trait(?Send)]
impl FilePicker for FixedPicker {
    async fn pick(&self, accept: &str) -> Option<FileUpload> {
        self.accepted.borrow_mut().push(accept.to_string());
        self.file.clone()
    }
}

#[derive(Default)]
pub struct RecordingSurface {
    tracked: RefCell<Vec<BlockId>>,
    suppressed: RefCell<HashSet<BlockId>>,
}

impl RecordingSurface {
    pub fn tracked(&self) -> Vec<BlockId> {
        self.tracked.borrow().clone()
    }

    pub fn is_suppressed(&self) -> bool {
        !self.suppressed.borrow().is_empty()
    }
}

impl InputSurface for RecordingSurface {
    fn track_pointer(&self, block: BlockId) {
        self.tracked.borrow_mut().push(block);
    }

    fn untrack_pointer(&self, block: BlockId) {
        self.tracked.borrow_mut().retain(|b| *b != block);
    }

    fn suppress_native_drag(&self, block: BlockId, suppressed: bool) {
        let mut blocks = self.suppressed.borrow_mut();
        if suppressed {
            blocks.insert(block);
        } else {
            blocks.remove(&block);
        }
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    shown: RefCell<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn shown(&self) -> Vec<Notification> {
        self.shown.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn show(&self, notification: Notification) {
        self.shown.borrow_mut().push(notification);
    }
}

pub struct StaticBlobs(pub Option<FileUpload>);

#[async_trait(?Send)]
impl BlobResolver for StaticBlobs {
    async fn resolve(&self, src: &str) -> Result<FileUpload, UploadError> {
        self.0
            .clone()
            .ok_or_else(|| UploadError::Transport(format!("blob {src} is gone")))
    }
}

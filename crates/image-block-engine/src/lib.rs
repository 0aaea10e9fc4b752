pub mod alignment;
pub mod data;
pub mod host;
pub mod media;
pub mod paste;
pub mod resize;
pub mod state;
pub mod status;
pub mod surface;
pub mod tool;
pub mod tunes;
pub mod upload;
pub mod view;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use alignment::{AlignmentController, HandleSet};
pub use data::{BlockData, ImageFile};
pub use host::{BlobResolver, FilePicker, HostApi, I18n, Notification, NotificationStyle, Notifier};
pub use image_block_config::{Direction, ToolConfig};
pub use media::{MediaKind, Size};
pub use paste::{PasteAction, PasteEvent};
pub use resize::{Edge, MoveOutcome, Point, Rejection, WidthCommit};
pub use state::BlockStateMachine;
pub use status::VisualStatus;
pub use surface::{BlockId, DetachedSurface, InputSurface};
pub use tool::{ImageTool, ToolContext, ToolError};
pub use tunes::{TuneItem, TuneMenu};
pub use upload::{CompletedUpload, FileUpload, PendingUpload, UploadError, UploadResponse, UploadTransport};
pub use view::BlockView;

pub mod block_tunes;
pub mod error_screen;
pub mod image_block;
pub mod notifications;

pub use block_tunes::BlockTunes;
pub use error_screen::ErrorScreen;
pub use image_block::{ImageBlock, spawn_upload};
pub use notifications::Toasts;

//! Dioxus front end for the image block: the block component, its alignment
//! tunes and host services backed by signals.

pub mod host;
pub mod ui;

pub use ui::components::{BlockTunes, ImageBlock};

//! Uploading images through a pluggable transport.
//!
//! A block starts an upload through the [`UploadCoordinator`], gets back a
//! [`PendingUpload`] that owns everything needed for the network round trip,
//! and hands the resulting [`CompletedUpload`] back to the coordinator. Only
//! the most recently started upload is allowed to change the block.

mod coordinator;
#[cfg(feature = "http")]
mod http;
mod transport;

pub use coordinator::{CompletedUpload, PendingUpload, UploadCoordinator, UploadRequest, UploadToken};
#[cfg(feature = "http")]
pub use http::EndpointTransport;
pub use transport::{FileUpload, UnconfiguredTransport, UploadError, UploadResponse, UploadTransport};

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::data::ImageFile;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UploadError {
    #[error("upload transport failed: {0}")]
    Transport(String),
    #[error("incorrect response: {0}")]
    InvalidResponse(String),
}

/// A file picked, pasted or dropped by the user
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Local `data:` URL shown while the real upload is in flight
    pub fn preview_source(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }
}

/// Reply format expected from an upload backend:
/// `{ "success": 1, "file": { "url": "...", ... } }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(
        default,
        serialize_with = "flag_as_number",
        deserialize_with = "number_or_bool"
    )]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<ImageFile>,
}

impl UploadResponse {
    pub fn success(file: ImageFile) -> Self {
        Self {
            success: true,
            file: Some(file),
        }
    }

    pub fn failure() -> Self {
        Self::default()
    }

    /// Accept the response only when it is flagged successful and carries a url
    pub fn into_image(self) -> Result<ImageFile, UploadError> {
        match self {
            UploadResponse {
                success: true,
                file: Some(file),
            } if !file.is_empty() => Ok(file),
            other => Err(UploadError::InvalidResponse(
                serde_json::to_string(&other).unwrap_or_else(|_| format!("{other:?}")),
            )),
        }
    }
}

fn flag_as_number<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*flag))
}

fn number_or_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Number(f64),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(b)) => b,
        Some(Flag::Number(n)) => n != 0.0,
        None => false,
    })
}

/// Backend that turns a file or a remote url into a stored image.
///
/// Implementations report every failure through the returned `Result`.
#[async_trait(?Send)]
pub trait UploadTransport {
    async fn upload_by_file(&self, file: &FileUpload) -> Result<UploadResponse, UploadError>;

    async fn upload_by_url(&self, url: &str) -> Result<UploadResponse, UploadError>;
}

/// Used when neither a custom uploader nor endpoints are available
pub struct UnconfiguredTransport;

#[async_trait(?Send)]
impl UploadTransport for UnconfiguredTransport {
    async fn upload_by_file(&self, _file: &FileUpload) -> Result<UploadResponse, UploadError> {
        Err(UploadError::Transport("no uploader configured".to_string()))
    }

    async fn upload_by_url(&self, _url: &str) -> Result<UploadResponse, UploadError> {
        Err(UploadError::Transport("no uploader configured".to_string()))
    }
}

use image_block_config::Direction;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Width and height of a block that never had a size committed
pub const DEFAULT_SIZE: &str = "100%";

/// Image descriptor returned by the upload backend.
///
/// Only `url` is interpreted. Anything else the backend sends is kept in
/// `extra` and written back untouched on save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageFile {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ImageFile {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            extra: Map::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.url.is_empty()
    }
}

/// Persisted fields of one image block.
///
/// The descriptor is stored under `file`; `image` is accepted when reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockData {
    #[serde(rename = "file", alias = "image", deserialize_with = "null_as_default")]
    pub image: ImageFile,
    #[serde(deserialize_with = "null_as_default")]
    pub caption: String,
    pub direction: Direction,
    pub width: String,
    pub height: String,
}

impl Default for BlockData {
    fn default() -> Self {
        Self {
            image: ImageFile::default(),
            caption: String::new(),
            direction: Direction::default(),
            width: DEFAULT_SIZE.to_string(),
            height: DEFAULT_SIZE.to_string(),
        }
    }
}

/// Shape of the data object the host hands to a new block. Everything is
/// optional and falsy values fall back to defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct IncomingData {
    #[serde(rename = "file", alias = "image", deserialize_with = "null_as_default")]
    image: ImageFile,
    caption: Option<String>,
    direction: Option<Direction>,
    width: Option<String>,
    height: Option<String>,
}

impl BlockData {
    pub fn with_image(image: ImageFile) -> Self {
        Self {
            image,
            ..Self::default()
        }
    }

    /// Parse host data, taking the direction from `default_direction` when the
    /// block has none of its own.
    pub fn from_json(value: &Value, default_direction: Direction) -> Result<Self, serde_json::Error> {
        if value.is_null() {
            return Ok(Self {
                direction: default_direction,
                ..Self::default()
            });
        }

        let incoming = IncomingData::deserialize(value)?;
        let size_or_default =
            |size: Option<String>| size.filter(|s| !s.is_empty()).unwrap_or_else(|| DEFAULT_SIZE.to_string());

        Ok(Self {
            image: incoming.image,
            caption: incoming.caption.unwrap_or_default(),
            direction: incoming.direction.unwrap_or(default_direction),
            width: size_or_default(incoming.width),
            height: size_or_default(incoming.height),
        })
    }

    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

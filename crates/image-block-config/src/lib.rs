use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid tool config: {0}")]
    InvalidToolConfig(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown alignment direction: {0:?}")]
pub struct UnknownDirection(pub String);

/// Horizontal alignment of the image inside its block.
///
/// The values are the flexbox alignment keywords that place the image
/// wrapper, which is also how they are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "center")]
    Center,
    #[serde(rename = "flex-start")]
    FlexStart,
    #[serde(rename = "flex-end")]
    FlexEnd,
}

impl Direction {
    /// Tune order as shown in the alignment menu
    pub const ALL: [Direction; 3] = [Direction::Center, Direction::FlexStart, Direction::FlexEnd];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Center => "center",
            Direction::FlexStart => "flex-start",
            Direction::FlexEnd => "flex-end",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownDirection(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Endpoints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_url: Option<String>,
}

/// Options recognised by the image tool.
///
/// Keys are camelCase so the same struct reads the host editor's JSON config
/// object and a TOML file. Every field has a default. Scalars come before
/// tables so the TOML output stays valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ToolConfig {
    /// Multipart field name the file is sent under
    pub field: String,
    /// Accept filter for the file picker
    pub types: String,
    pub caption_placeholder: String,
    /// Replaces the select-file button content when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_content: Option<String>,
    #[serde(alias = "defaultDirection")]
    pub direction: Direction,
    /// Pixel floor for interactive resizing
    pub min_width: f64,
    pub endpoints: Endpoints,
    pub additional_request_data: BTreeMap<String, String>,
    pub additional_request_headers: BTreeMap<String, String>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            field: "image".to_string(),
            types: "image/*".to_string(),
            caption_placeholder: "Caption".to_string(),
            button_content: None,
            direction: Direction::Center,
            min_width: 0.0,
            endpoints: Endpoints::default(),
            additional_request_data: BTreeMap::new(),
            additional_request_headers: BTreeMap::new(),
        }
    }
}

impl ToolConfig {
    /// Read the config object handed over by the host editor
    pub fn from_json(value: &serde_json::Value) -> Result<Self, ConfigError> {
        if value.is_null() {
            return Ok(Self::default());
        }
        Ok(Self::deserialize(value)?)
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        // The host's JSON config object can be saved as-is next to TOML configs
        if config_path.extension().is_some_and(|ext| ext == "json") {
            let value: serde_json::Value = serde_json::from_str(&content)?;
            return Self::from_json(&value).map(Some);
        }

        let config: ToolConfig =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }
}

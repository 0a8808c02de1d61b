//! Shared configuration for scrawl
//!
//! This crate is the single source of truth for the recognition endpoint,
//! the service credential, the requested result format and the canvas
//! style. Values come from, in increasing priority: built-in defaults, an
//! optional TOML file, and `SCRAWL_*` environment variables.

use std::fmt;
use std::path::Path;

use scrawl_ipc::ResultType;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default recognition endpoint
pub const DEFAULT_ENDPOINT: &str =
    "https://myscript-webservices.visionobjects.com/api/myscript/v2.0/equation/doSimpleRecognition.json";

/// Default canvas width in pixels
pub const DEFAULT_WIDTH: u32 = 800;

/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: u32 = 400;

/// Default pen width in pixels
pub const DEFAULT_LINE_WIDTH: f32 = 2.0;

/// Default pen colour (CSS colour string)
pub const DEFAULT_COLOR: &str = "blue";

/// Environment variable overriding [`RecognitionConfig::endpoint`]
pub const ENV_ENDPOINT: &str = "SCRAWL_ENDPOINT";

/// Environment variable overriding [`RecognitionConfig::api_key`]
pub const ENV_API_KEY: &str = "SCRAWL_API_KEY";

/// Environment variable overriding [`RecognitionConfig::result_type`]
pub const ENV_RESULT_TYPE: &str = "SCRAWL_RESULT_TYPE";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrawlConfig {
    pub recognition: RecognitionConfig,
    pub canvas: CanvasConfig,
}

impl ScrawlConfig {
    /// Parse a TOML document. Missing sections and keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.canvas.validate()?;
        Ok(config)
    }

    /// Load a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading config from {}", path.display());
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Apply `SCRAWL_*` overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup (the environment in production).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            self.recognition.endpoint = endpoint;
        }
        if let Some(api_key) = lookup(ENV_API_KEY) {
            self.recognition.api_key = api_key;
        }
        if let Some(result_type) = lookup(ENV_RESULT_TYPE) {
            self.recognition.result_type =
                result_type.parse().map_err(|_| ConfigError::InvalidValue {
                    key: ENV_RESULT_TYPE,
                    value: result_type.clone(),
                })?;
        }
        Ok(())
    }
}

/// Recognition service settings
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognitionConfig {
    /// Endpoint receiving the form POST
    pub endpoint: String,
    /// Opaque credential sent as `apiKey`
    pub api_key: String,
    /// Output format requested from the service
    pub result_type: ResultType,
    /// Drop responses older than the last applied one instead of letting
    /// the last response to arrive win
    pub discard_stale_responses: bool,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: String::new(),
            result_type: ResultType::default(),
            discard_stale_responses: false,
        }
    }
}

impl RecognitionConfig {
    /// Whether a credential has been configured
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl fmt::Debug for RecognitionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecognitionConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &if self.has_api_key() { "<redacted>" } else { "<unset>" })
            .field("result_type", &self.result_type)
            .field("discard_stale_responses", &self.discard_stale_responses)
            .finish()
    }
}

/// Canvas size and pen style
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Pen width in pixels
    pub line_width: f32,
    /// Pen colour
    pub color: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            line_width: DEFAULT_LINE_WIDTH,
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

impl CanvasConfig {
    /// Create a canvas config with the given dimensions and the default pen
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidValue {
                key: "canvas.width/height",
                value: format!("{}x{}", self.width, self.height),
            });
        }
        if self.line_width.is_nan() || self.line_width <= 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "canvas.line_width",
                value: self.line_width.to_string(),
            });
        }
        Ok(())
    }
}

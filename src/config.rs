//! Serializable build configuration.
//!
//! A [`BuildConfig`] describes where icons are read from, where components are
//! written to and which attributes become component defaults. Every field has
//! a default, so an empty JSON object is a valid configuration.
//!
//! # Example
//!
//! ```
//! use icon_codegen::BuildConfig;
//!
//! let config = BuildConfig::new()
//!     .with_icons_root("assets/icons")
//!     .with_attributes(["stroke-width", "stroke"]);
//!
//! let json = config.to_json().unwrap();
//! let restored = BuildConfig::from_json(&json).unwrap();
//! assert_eq!(restored.attributes, ["stroke-width", "stroke"]);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::transform::DEFAULT_ATTRIBUTES;

/// Style subdirectories built when none are configured.
pub const DEFAULT_STYLES: &[&str] = &["20/solid", "24/outline", "24/solid"];

/// Icon source root used when none is configured.
pub const DEFAULT_ICONS_ROOT: &str = "heroicons/optimized";

/// Maximum number of icons processed at once within a style.
pub const DEFAULT_CONCURRENCY: usize = 32;

// ============================================================================
// BuildConfig
// ============================================================================

/// Settings for one build run.
///
/// # JSON Format
///
/// ```json
/// {
///   "iconsRoot": "heroicons/optimized",
///   "outputRoot": ".",
///   "styles": ["20/solid", "24/outline", "24/solid"],
///   "attributes": ["stroke-width"],
///   "concurrency": 32,
///   "writeIndex": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct BuildConfig {
    /// Directory holding one subdirectory per style.
    pub icons_root: PathBuf,

    /// Directory under which `<package>/<style>/` trees are generated.
    pub output_root: PathBuf,

    /// Style subdirectories, relative to both roots.
    pub styles: Vec<String>,

    /// Root attributes moved into component defaults, in declaration order.
    pub attributes: Vec<String>,

    /// Maximum number of icons transformed at once within a style.
    pub concurrency: usize,

    /// Whether to write a barrel module next to the components.
    pub write_index: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            icons_root: PathBuf::from(DEFAULT_ICONS_ROOT),
            output_root: PathBuf::from("."),
            styles: DEFAULT_STYLES.iter().map(|s| s.to_string()).collect(),
            attributes: DEFAULT_ATTRIBUTES.iter().map(|s| s.to_string()).collect(),
            concurrency: DEFAULT_CONCURRENCY,
            write_index: false,
        }
    }
}

impl BuildConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_icons_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.icons_root = path.into();
        self
    }

    pub fn with_output_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_root = path.into();
        self
    }

    pub fn with_styles<I, S>(mut self, styles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.styles = styles.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes = attributes.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the per-style concurrency limit. Zero is raised to one.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_index(mut self, write_index: bool) -> Self {
        self.write_index = write_index;
        self
    }

    /// Concurrency limit actually used by the batch driver.
    pub fn effective_concurrency(&self) -> usize {
        self.concurrency.max(1)
    }

    /// Serializes the configuration to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the configuration to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(Error::io("failed to read config", path))?;
        Self::from_json(&json)
    }

    /// JSON schema of the configuration file.
    #[cfg(feature = "jsonschema")]
    pub fn json_schema() -> Result<String> {
        let schema = schemars::schema_for!(BuildConfig);
        Ok(serde_json::to_string_pretty(&schema)?)
    }
}

// ============================================================================
// Tests
// ============================================================================

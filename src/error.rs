//! Error type shared by every stage of the pipeline.

use std::path::PathBuf;

/// Errors produced while reading, transforming or writing icons.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file-system operation failed.
    #[error("{action} `{}`: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The SVG markup could not be tokenized.
    #[error("malformed SVG: {0}")]
    Xml(#[from] quick_xml::Error),

    /// An attribute on an SVG element could not be read.
    #[error("malformed SVG attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// Serializing the SVG back to text failed.
    #[error("failed to serialize SVG: {0}")]
    Serialize(#[from] std::io::Error),

    /// The document contains no element at all.
    #[error("SVG document has no root element")]
    MissingRoot,

    /// The root element is never closed.
    #[error("SVG root element `<{0}>` is not closed")]
    UnclosedRoot(String),

    /// The file name does not produce a valid identifier.
    #[error("`{file_name}` does not produce a valid component name (got `{derived}`)")]
    InvalidComponentName { file_name: String, derived: String },

    /// The build configuration could not be parsed.
    #[error("invalid build configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    /// Builds a `map_err` adapter attaching `action` and `path` to an I/O error.
    pub(crate) fn io(
        action: &'static str,
        path: impl Into<PathBuf>,
    ) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io {
            action,
            path,
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

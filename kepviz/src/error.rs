//! Error types for the kepviz library.
//!
//! All fallible operations in the library return [`Result`], with
//! `thiserror`-derived variants for the handful of failure paths the
//! tool distinguishes.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a kepviz error.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the kepviz library.
#[derive(Debug, Error)]
pub enum Error {
    /// A style file had an extension matching none of the supported formats.
    #[error("format of style file not recognized: {}", path.display())]
    UnsupportedStyleFormat {
        /// The offending style file.
        path: PathBuf,
    },

    /// A style file parsed, but its top level is not a key/value mapping.
    #[error("style file {} does not contain a key/value mapping", path.display())]
    StyleNotMapping {
        /// The offending style file.
        path: PathBuf,
    },

    /// A style file in Python-literal syntax could not be parsed.
    #[error("invalid literal mapping in {}: {source}", path.display())]
    StyleLiteral {
        /// The offending style file.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: crate::style::LiteralError,
    },

    /// A GIS runtime command failed or produced unusable output.
    #[error("{command} failed: {message}")]
    Gis {
        /// The GRASS command that failed.
        command: String,
        /// Captured stderr or a description of what went wrong.
        message: String,
    },

    /// A JSON serialization or parse error occurred.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A YAML parse error occurred.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The HTML template failed to render.
    #[error("template error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

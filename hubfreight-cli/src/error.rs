//! Error types emitted by the hubfreight CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use hubfreight_core::{CatalogError, OrderError, QuoteError};
use thiserror::Error;

/// Errors emitted by the hubfreight CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required positional path is missing after configuration merging.
    #[error("missing {field} path (pass the {field} path as an argument or set {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening the order file failed.
    #[error("failed to open order at {path:?}: {source}")]
    OpenOrder {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Order JSON could not be decoded.
    #[error("failed to parse order JSON at {path:?}: {source}")]
    ParseOrder {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The order names unknown products or carries invalid quantities.
    #[error("order in {path:?} is invalid: {source}")]
    InvalidOrder {
        path: Utf8PathBuf,
        #[source]
        source: OrderError,
    },
    /// Opening the catalog file failed.
    #[error("failed to open catalog at {path:?}: {source}")]
    OpenCatalog {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Catalog JSON could not be decoded.
    #[error("failed to parse catalog JSON at {path:?}: {source}")]
    ParseCatalog {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The catalog file decoded but its contents are inconsistent.
    #[error("catalog in {path:?} is invalid: {source}")]
    InvalidCatalog {
        path: Utf8PathBuf,
        #[source]
        source: CatalogError,
    },
    /// The quoter rejected the order.
    #[error("quote failed: {0}")]
    Quote(#[from] QuoteError),
    /// Serializing the quote failed.
    #[error("failed to serialize quote: {0}")]
    SerializeQuote(#[source] serde_json::Error),
    /// Writing the quote output failed.
    #[error("failed to write quote output: {0}")]
    WriteQuoteOutput(#[source] std::io::Error),
}

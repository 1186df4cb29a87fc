//! Error taxonomy for every step of the jsonx pipeline.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Every failure jsonx can hit. None of them are recovered from locally;
/// they bubble up to `main`, which reports and exits.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not resolve the home directory")]
    HomeDir,

    #[error("failed to read config file {}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write config file {}", .path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to open {}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid gzip data", .path.display())]
    GzipFormat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} does not contain a valid JSON document", .path.display())]
    JsonDecode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to create {}", .path.display())]
    FileCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode JSON into {}", .path.display())]
    JsonEncode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to finish writing {}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "output path {} is the input itself; pass --output to pick another destination",
        .path.display()
    )]
    SamePath { path: PathBuf },

    #[error("failed to open {} with {editor}", .path.display())]
    Launch {
        editor: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Usage(String),
}

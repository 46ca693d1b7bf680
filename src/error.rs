//! Error types for soapfmt
//!
//! Formatting and path resolution never fail. Errors only come from the
//! surface around them: reading and writing files, and loading settings.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[cfg(feature = "serde")]
    #[error("invalid settings in {}: {source}", .path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for soapfmt
pub type Result<T> = std::result::Result<T, Error>;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type for fixed-size log operations

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur opening, writing, or closing a fixed-size log
#[derive(Debug, Error)]
pub enum Error {
    #[error("max size should be > 0")]
    InvalidMaxSize,
    #[error("log closed")]
    Closed,
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to rotate to {}: {source}", path.display())]
    Rotate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("write failed after {written} bytes: {source}")]
    Write {
        written: usize,
        #[source]
        source: io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}

impl Error {
    /// Whether this is the error returned by a writer that was already closed
    pub fn is_closed(&self) -> bool {
        matches!(self, Error::Closed)
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        let kind = match &err {
            Error::Open { source, .. }
            | Error::Rotate { source, .. }
            | Error::Write { source, .. } => source.kind(),
            Error::Io(e) => e.kind(),
            Error::InvalidMaxSize | Error::Config(_) => io::ErrorKind::InvalidInput,
            Error::Closed => io::ErrorKind::Other,
        };
        io::Error::new(kind, err)
    }
}

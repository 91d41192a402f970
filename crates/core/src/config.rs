// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log configuration
//!
//! ```toml
//! path = "/var/log/app.log"
//! max_size = 10485760
//! ```

use crate::error::Error;
use crate::writer::RotatingWriter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where a fixed-size log lives and how much disk it may use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Base path; the log files are `<path>.A` and `<path>.B`
    pub path: PathBuf,
    /// Combined size of both files in bytes
    pub max_size: u64,
}

impl LogConfig {
    pub fn new(path: impl Into<PathBuf>, max_size: u64) -> Self {
        Self {
            path: path.into(),
            max_size,
        }
    }

    /// Parse a config from TOML content
    pub fn from_toml_str(content: &str) -> Result<Self, Error> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a TOML config file
    pub fn load(file: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(file)?;
        Self::from_toml_str(&content)
    }

    /// Open the writer this config describes
    pub fn open(&self) -> Result<RotatingWriter, Error> {
        RotatingWriter::open(&self.path, self.max_size)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

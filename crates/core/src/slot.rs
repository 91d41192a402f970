// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The two backing files of a fixed-size log

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// One of the two files a log alternates between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    A,
    B,
}

impl Slot {
    /// Suffix appended to the base path for this slot
    pub fn suffix(self) -> &'static str {
        match self {
            Slot::A => "A",
            Slot::B => "B",
        }
    }

    /// The slot rotation switches to
    pub fn other(self) -> Slot {
        match self {
            Slot::A => Slot::B,
            Slot::B => Slot::A,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Slot::A => 0,
            Slot::B => 1,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Paths of both slots, derived once from a base path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogPaths {
    paths: [PathBuf; 2],
}

impl LogPaths {
    /// Derive `<base>.A` and `<base>.B`.
    ///
    /// The suffix is appended to the whole file name, so `app.log` becomes
    /// `app.log.A` rather than replacing the `.log` extension.
    pub fn new(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        Self {
            paths: [with_suffix(base, Slot::A), with_suffix(base, Slot::B)],
        }
    }

    pub fn get(&self, slot: Slot) -> &Path {
        &self.paths[slot.index()]
    }
}

fn with_suffix(base: &Path, slot: Slot) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(".");
    name.push(slot.suffix());
    PathBuf::from(name)
}

#[cfg(test)]
#[path = "slot_tests.rs"]
mod tests;

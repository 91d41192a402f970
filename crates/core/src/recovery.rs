// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resume a log left behind by an earlier process.
//!
//! The slot with the most recent modification time is the one that was
//! receiving writes, and its on-disk size is how far it already is towards the
//! rotation threshold. Files are never created here unless neither exists.

use crate::error::Error;
use crate::slot::{LogPaths, Slot};
use std::fs::{File, Metadata, OpenOptions};
use std::io;
use std::path::Path;

/// The active slot chosen by the recovery scan
#[derive(Debug)]
pub(crate) struct Recovered {
    pub slot: Slot,
    pub file: File,
    pub written: u64,
}

/// Pick the active slot for `paths`, creating `.A` only for a fresh log
pub(crate) fn recover(paths: &LogPaths) -> Result<Recovered, Error> {
    let a = open_existing(paths.get(Slot::A))?;
    let b = open_existing(paths.get(Slot::B))?;

    let recovered = match (a, b) {
        (None, None) => {
            let path = paths.get(Slot::A);
            let file = open_truncated(path).map_err(|source| Error::Open {
                path: path.to_path_buf(),
                source,
            })?;
            Recovered {
                slot: Slot::A,
                file,
                written: 0,
            }
        }
        (Some(file), None) => resume(paths, Slot::A, file)?,
        (None, Some(file)) => resume(paths, Slot::B, file)?,
        (Some(file_a), Some(file_b)) => {
            let meta_a = metadata(paths, Slot::A, &file_a)?;
            let meta_b = metadata(paths, Slot::B, &file_b)?;
            // Ties go to B
            if modified(paths, Slot::A, &meta_a)? > modified(paths, Slot::B, &meta_b)? {
                Recovered {
                    slot: Slot::A,
                    file: file_a,
                    written: meta_a.len(),
                }
            } else {
                Recovered {
                    slot: Slot::B,
                    file: file_b,
                    written: meta_b.len(),
                }
            }
        }
    };

    tracing::trace!(
        slot = %recovered.slot,
        written = recovered.written,
        path = %paths.get(recovered.slot).display(),
        "resuming fixed-size log"
    );
    Ok(recovered)
}

/// Open (create, or empty an existing) file for appending
pub(crate) fn open_truncated(path: &Path) -> io::Result<File> {
    // OpenOptions refuses truncate together with append, so empty it after opening
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    file.set_len(0)?;
    Ok(file)
}

fn open_existing(path: &Path) -> Result<Option<File>, Error> {
    match OpenOptions::new().append(true).open(path) {
        Ok(file) => Ok(Some(file)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(Error::Open {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn resume(paths: &LogPaths, slot: Slot, file: File) -> Result<Recovered, Error> {
    let written = metadata(paths, slot, &file)?.len();
    Ok(Recovered {
        slot,
        file,
        written,
    })
}

fn metadata(paths: &LogPaths, slot: Slot, file: &File) -> Result<Metadata, Error> {
    file.metadata().map_err(|source| Error::Open {
        path: paths.get(slot).to_path_buf(),
        source,
    })
}

fn modified(
    paths: &LogPaths,
    slot: Slot,
    meta: &Metadata,
) -> Result<std::time::SystemTime, Error> {
    meta.modified().map_err(|source| Error::Open {
        path: paths.get(slot).to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "recovery_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Two-file rotating writer with a bounded on-disk footprint.
//!
//! Writes go to the active slot until it holds half the configured maximum.
//! The next write first truncates the other slot and switches to it, so the
//! inactive slot always holds the previous generation and at least half the
//! maximum of history survives every rotation.

use crate::error::Error;
use crate::recovery::{open_truncated, recover, Recovered};
use crate::slot::{LogPaths, Slot};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// A log sink that never keeps more than roughly `max_size` bytes on disk.
///
/// All state sits behind one mutex held for the whole of each call, file I/O
/// included, so concurrent writers see a strict total order of writes.
#[derive(Debug)]
pub struct RotatingWriter {
    paths: LogPaths,
    half_max: u64,
    state: Mutex<Option<Active>>,
}

#[derive(Debug)]
struct Active<W = File> {
    slot: Slot,
    file: W,
    /// Bytes in `file` since it was created or truncated
    written: u64,
}

impl RotatingWriter {
    /// Open the log at `base.A`/`base.B`, resuming whichever slot was written last.
    ///
    /// Only `base.A` is created, and only when neither file exists yet.
    pub fn open(base: impl AsRef<Path>, max_size: u64) -> Result<Self, Error> {
        if max_size == 0 {
            return Err(Error::InvalidMaxSize);
        }

        let paths = LogPaths::new(base);
        let Recovered {
            slot,
            file,
            written,
        } = recover(&paths)?;

        Ok(Self {
            paths,
            half_max: max_size / 2,
            state: Mutex::new(Some(Active {
                slot,
                file,
                written,
            })),
        })
    }

    /// Append `buf` to the active slot, rotating first if it is full.
    ///
    /// The threshold is checked once per call, so a single buffer is never
    /// split across slots; an oversized buffer lands whole in the fresh slot.
    /// On failure after some bytes reached disk, `Error::Write` carries the
    /// count and those bytes still count towards the rotation threshold.
    pub fn write(&self, buf: &[u8]) -> Result<usize, Error> {
        let mut state = self.lock();
        let active = state.as_mut().ok_or(Error::Closed)?;

        if active.written >= self.half_max {
            self.rotate(active)?;
        }
        active.append(buf)
    }

    /// Release the active file. Later calls fail with `Error::Closed`.
    pub fn close(&self) -> Result<(), Error> {
        let mut state = self.lock();
        let active = state.take().ok_or(Error::Closed)?;
        drop(active);
        Ok(())
    }

    pub fn paths(&self) -> &LogPaths {
        &self.paths
    }

    /// Size at which the active slot is rotated out
    pub fn half_max(&self) -> u64 {
        self.half_max
    }

    /// Slot currently receiving writes, `None` once closed
    pub fn active_slot(&self) -> Option<Slot> {
        self.lock().as_ref().map(|active| active.slot)
    }

    /// Bytes written to the active slot since its last truncation
    pub fn written(&self) -> Option<u64> {
        self.lock().as_ref().map(|active| active.written)
    }

    pub fn is_closed(&self) -> bool {
        self.lock().is_none()
    }

    /// Truncate the other slot and make it active.
    ///
    /// If the other slot cannot be opened nothing changes.
    fn rotate(&self, active: &mut Active) -> Result<(), Error> {
        let next = active.slot.other();
        let path = self.paths.get(next);
        let file = open_truncated(path).map_err(|source| Error::Rotate {
            path: path.to_path_buf(),
            source,
        })?;

        let previous = std::mem::replace(&mut active.file, file);
        drop(previous);
        active.slot = next;
        active.written = 0;
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Option<Active>> {
        // Every step leaves the state consistent, so a poisoned lock is still usable
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write> Active<W> {
    fn append(&mut self, buf: &[u8]) -> Result<usize, Error> {
        let mut done = 0;
        while done < buf.len() {
            match self.file.write(&buf[done..]) {
                Ok(0) => {
                    return Err(Error::Write {
                        written: done,
                        source: io::Error::from(io::ErrorKind::WriteZero),
                    });
                }
                Ok(n) => {
                    done += n;
                    self.written += n as u64;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(source) => {
                    return Err(Error::Write {
                        written: done,
                        source,
                    });
                }
            }
        }
        Ok(done)
    }
}

/// Stream adapter for formatting layers that expect `io::Write`.
///
/// A write either lands whole or fails; a part-way failure is reported as an
/// error rather than a short count, so `write_all` never retries the tail
/// into a freshly rotated slot.
impl Write for &RotatingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(RotatingWriter::write(*self, buf)?)
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.is_closed() {
            return Err(Error::Closed.into());
        }
        Ok(())
    }
}

impl Write for RotatingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Write::write(&mut &*self, buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Write::flush(&mut &*self)
    }
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;

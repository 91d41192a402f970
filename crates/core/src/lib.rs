// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fsl-core: logging to a pair of files with a fixed maximum size
//!
//! Writing starts in `<path>.A`. Once it holds half the maximum, the log
//! truncates `<path>.B` and continues there, then back to `.A`, and so on.
//! At least half the maximum of history is always kept, and the disk never
//! holds much more than the maximum.

mod config;
mod error;
mod recovery;
mod slot;
mod writer;

pub use config::LogConfig;
pub use error::Error;
pub use slot::{LogPaths, Slot};
pub use writer::RotatingWriter;

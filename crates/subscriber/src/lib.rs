// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Use a fixed-size log as the sink of a `tracing` subscriber

use fsl_core::{LogConfig, RotatingWriter};
use std::io;
use std::sync::Arc;
use thiserror::Error;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Layer};

/// Errors that can occur installing the log subscriber
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("log error: {0}")]
    Log(#[from] fsl_core::Error),
    #[error("failed to install subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// A rotating writer that can be handed to several layers or threads
#[derive(Debug, Clone)]
pub struct SharedWriter(Arc<RotatingWriter>);

impl SharedWriter {
    pub fn new(writer: RotatingWriter) -> Self {
        Self(Arc::new(writer))
    }

    pub fn get(&self) -> &RotatingWriter {
        &self.0
    }
}

impl From<RotatingWriter> for SharedWriter {
    fn from(writer: RotatingWriter) -> Self {
        Self::new(writer)
    }
}

impl io::Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::Write::write(&mut &*self.0, buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::Write::flush(&mut &*self.0)
    }
}

impl<'a> MakeWriter<'a> for SharedWriter {
    type Writer = &'a RotatingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        &self.0
    }
}

/// Plain-text `fmt` layer writing into `writer`.
///
/// Each event is formatted in full and handed over in a single write, so an
/// event never straddles a rotation.
pub fn fmt_layer<S>(writer: SharedWriter) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer().with_writer(writer).with_ansi(false)
}

/// Install a global subscriber logging to the fixed-size log in `config`.
///
/// Formatting happens on the caller, file I/O on a background worker. The
/// filter comes from `RUST_LOG` when set, otherwise `default_filter`. Hold the
/// returned guard until exit so buffered events are flushed.
pub fn init(config: &LogConfig, default_filter: &str) -> Result<WorkerGuard, SetupError> {
    let writer = SharedWriter::new(config.open()?);
    let (non_blocking, guard) = tracing_appender::non_blocking(writer);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .try_init()?;

    Ok(guard)
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

//! Lifecycle specs
//!
//! Verify construction rules, close semantics, and configuration.

use crate::prelude::*;

#[test]
fn zero_maximum_is_rejected_and_creates_nothing() {
    let log = LogDir::empty();

    let result = RotatingWriter::open(log.base(), 0);

    assert!(matches!(result, Err(Error::InvalidMaxSize)));
    assert_eq!(log.size(Slot::A), None);
    assert_eq!(log.size(Slot::B), None);
}

#[test]
fn new_log_creates_only_a() {
    let log = LogDir::empty();

    let _writer = log.open(20);

    assert_eq!(log.size(Slot::A), Some(0));
    assert_eq!(log.size(Slot::B), None);
}

#[test]
fn close_keeps_content_and_rejects_further_use() {
    let log = LogDir::empty();
    let writer = log.open(20);
    writer.write(LINE).unwrap();
    writer.close().unwrap();
    let mtime = log.mtime(Slot::A);

    let err = writer.write(LINE).unwrap_err();
    assert!(err.is_closed());
    assert_eq!(err.to_string(), "log closed");
    assert!(writer.close().unwrap_err().is_closed());

    assert_eq!(log.contents(Slot::A), LINE);
    assert_eq!(log.mtime(Slot::A), mtime);
}

#[test]
fn config_file_describes_the_log() {
    let log = LogDir::empty();
    let config = LogConfig::from_toml_str(&format!(
        "path = {:?}\nmax_size = 20\n",
        log.base().display().to_string()
    ))
    .unwrap();

    let writer = config.open().unwrap();
    for _ in 0..3 {
        writer.write(LINE).unwrap();
    }

    assert_eq!(log.size(Slot::A), Some(14));
    assert_eq!(log.size(Slot::B), Some(7));
}

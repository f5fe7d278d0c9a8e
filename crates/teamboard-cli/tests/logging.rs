//! Logging output format.
//!
//! The global subscriber can only be installed once per process, so this
//! binary holds a single test.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use teamboard_cli::logging::{LogConfig, LogFormat, init_logging_with_writer};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("capture lock poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn compact_lines_carry_timestamps() {
    let captured = Captured::default();
    let writer = captured.clone();
    let config = LogConfig {
        use_env_filter: false,
        with_timestamps: true,
        with_ansi: false,
        format: LogFormat::Compact,
        ..LogConfig::default()
    };
    init_logging_with_writer(&config, move || writer.clone());

    tracing::warn!("backup rejected");
    tracing::debug!("below the configured level");

    let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    let line = output.lines().next().expect("one log line");
    assert!(line.contains("WARN"), "{line}");
    assert!(line.ends_with("backup rejected"), "{line}");
    assert!(line.starts_with(|c: char| c.is_ascii_digit()), "{line}");
    assert!(!output.contains("below the configured level"));
}

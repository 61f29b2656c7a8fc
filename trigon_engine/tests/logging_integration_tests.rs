//! Integration tests for the global logging pipeline
//!
//! Installs a capturing logger and verifies that the trigon_* macros
//! route through it with the right severity, source, and location data.
//! Tests are serialized because the logger is process-global.

use serial_test::serial;
use std::sync::{Arc, Mutex};
use trigon_engine::trigon::log::{self, LogEntry, LogSeverity, Logger};
use trigon_engine::trigon::Error;
use trigon_engine::{
    trigon_bail, trigon_debug, trigon_err, trigon_error, trigon_info, trigon_trace, trigon_warn,
};

/// Logger that stores every entry for later inspection
#[derive(Clone)]
struct CapturingLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl CapturingLogger {
    fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }
}

impl Logger for CapturingLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

// ============================================================================
// MACRO ROUTING TESTS
// ============================================================================

#[test]
#[serial]
fn test_macros_route_through_global_logger() {
    let logger = CapturingLogger::new();
    log::set_logger(logger.clone());

    trigon_trace!("trigon::test", "trace {}", 1);
    trigon_debug!("trigon::test", "debug message");
    trigon_info!("trigon::test", "info message");
    trigon_warn!("trigon::test", "warn message");
    trigon_error!("trigon::test", "error message");

    let entries = logger.entries();
    assert_eq!(entries.len(), 5);

    assert_eq!(entries[0].severity, LogSeverity::Trace);
    assert_eq!(entries[1].severity, LogSeverity::Debug);
    assert_eq!(entries[2].severity, LogSeverity::Info);
    assert_eq!(entries[3].severity, LogSeverity::Warn);
    assert_eq!(entries[4].severity, LogSeverity::Error);

    assert_eq!(entries[0].source, "trigon::test");
    assert_eq!(entries[0].message, "trace 1");

    // Only ERROR entries carry file:line information
    assert!(entries[0].file.is_none());
    assert!(entries[0].line.is_none());
    assert!(entries[4].file.is_some());
    assert!(entries[4].line.is_some());

    log::reset_logger();
}

#[test]
#[serial]
fn test_error_entries_point_at_the_call_site() {
    let logger = CapturingLogger::new();
    log::set_logger(logger.clone());

    trigon_error!("trigon::test", "located error");

    let entries = logger.entries();
    assert_eq!(entries.len(), 1);
    let file = entries[0].file.unwrap();
    assert!(file.ends_with("logging_integration_tests.rs"));
    assert!(entries[0].line.unwrap() > 0);

    log::reset_logger();
}

// ============================================================================
// ERROR BUILDER MACRO TESTS
// ============================================================================

#[test]
#[serial]
fn test_trigon_err_logs_and_builds_error() {
    let logger = CapturingLogger::new();
    log::set_logger(logger.clone());

    let err = trigon_err!("trigon::test", "device lost: code {}", 42);

    match err {
        Error::BackendError(msg) => assert_eq!(msg, "device lost: code 42"),
        other => panic!("expected BackendError, got {:?}", other),
    }

    let entries = logger.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].severity, LogSeverity::Error);
    assert_eq!(entries[0].message, "device lost: code 42");

    log::reset_logger();
}

#[test]
#[serial]
fn test_trigon_bail_returns_early() {
    fn guarded(fail: bool) -> trigon_engine::trigon::Result<u32> {
        if fail {
            trigon_bail!("trigon::test", "guard tripped");
        }
        Ok(7)
    }

    let logger = CapturingLogger::new();
    log::set_logger(logger.clone());

    assert_eq!(guarded(false).unwrap(), 7);
    assert!(logger.entries().is_empty());

    let err = guarded(true).unwrap_err();
    assert!(matches!(err, Error::BackendError(_)));
    assert_eq!(logger.entries().len(), 1);

    log::reset_logger();
}

// ============================================================================
// LOGGER REPLACEMENT TESTS
// ============================================================================

#[test]
#[serial]
fn test_set_logger_replaces_previous_logger() {
    let first = CapturingLogger::new();
    log::set_logger(first.clone());
    trigon_info!("trigon::test", "to first");

    let second = CapturingLogger::new();
    log::set_logger(second.clone());
    trigon_info!("trigon::test", "to second");

    assert_eq!(first.entries().len(), 1);
    assert_eq!(second.entries().len(), 1);
    assert_eq!(second.entries()[0].message, "to second");

    log::reset_logger();
}

#[test]
#[serial]
fn test_reset_logger_detaches_capture() {
    let logger = CapturingLogger::new();
    log::set_logger(logger.clone());
    log::reset_logger();

    // Goes to the default console logger, not the capture
    trigon_info!("trigon::test", "after reset");
    assert!(logger.entries().is_empty());
}

#[test]
#[serial]
fn test_log_free_function() {
    let logger = CapturingLogger::new();
    log::set_logger(logger.clone());

    log::log(LogSeverity::Debug, "trigon::test", "direct call".to_string());
    log::log_detailed(
        LogSeverity::Error,
        "trigon::test",
        "detailed call".to_string(),
        file!(),
        line!(),
    );

    let entries = logger.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].message, "direct call");
    assert_eq!(entries[1].file, Some(file!()));

    log::reset_logger();
}

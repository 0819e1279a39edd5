//! # Mock Sink
//!
//! Utilities for testing wrapped callables.
//!
//! [`RecordingSink`] keeps every emitted message in memory. Hand one clone to
//! the [`CallLogger`](crate::CallLogger) and keep another to assert on:
//!
//! ```rust
//! use logger_helper::mock::RecordingSink;
//! use logger_helper::CallLogger;
//! use tracing::Level;
//!
//! let sink = RecordingSink::new();
//! let logger = CallLogger::new(sink.clone(), Level::DEBUG);
//! // ... wrap and call things ...
//! sink.assert_messages(&[]);
//! ```

use crate::sink::Sink;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::Level;

/// A sink that records `(level, message)` pairs.
#[derive(Clone, Default)]
pub struct RecordingSink {
    entries: Arc<Mutex<Vec<(Level, String)>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Recorded messages, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.entries().into_iter().map(|(_, message)| message).collect()
    }

    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Panics unless exactly `expected` was recorded, in order.
    pub fn assert_messages(&self, expected: &[&str]) {
        let messages = self.messages();
        if messages != expected {
            panic!(
                "Recorded messages differ.\n  expected: {:#?}\n  recorded: {:#?}",
                expected, messages
            );
        }
    }
}

impl Sink for RecordingSink {
    fn emit(&self, level: Level, message: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((level, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let sink = RecordingSink::new();
        let handle = sink.clone();
        sink.emit(Level::DEBUG, "first");
        sink.emit(Level::INFO, "second");

        assert_eq!(handle.len(), 2);
        handle.assert_messages(&["first", "second"]);
        assert_eq!(handle.entries()[1], (Level::INFO, "second".to_string()));

        handle.clear();
        assert!(sink.is_empty());
    }

    #[test]
    #[should_panic(expected = "Recorded messages differ")]
    fn test_assert_messages_panics_on_mismatch() {
        let sink = RecordingSink::new();
        sink.emit(Level::DEBUG, "actual");
        sink.assert_messages(&["expected"]);
    }
}

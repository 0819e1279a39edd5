//! # Sinks
//!
//! The engine never decides where messages go. It hands every formatted
//! message to a [`Sink`] together with the configured [`Level`].
//!
//! - [`TracingSink`] forwards to the `tracing` macros, so routing and
//!   filtering follow whatever subscriber is installed.
//! - Any `Fn(Level, &str) + Send + Sync` closure is a sink.
//! - [`crate::mock::RecordingSink`] captures messages for tests.

use tracing::{debug, error, info, trace, warn, Level};

/// Destination for formatted log messages.
pub trait Sink: Send + Sync {
    fn emit(&self, level: Level, message: &str);
}

impl<F> Sink for F
where
    F: Fn(Level, &str) + Send + Sync,
{
    fn emit(&self, level: Level, message: &str) {
        self(level, message)
    }
}

/// Emits every message as a `tracing` event under the `logger_helper` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn emit(&self, level: Level, message: &str) {
        if level == Level::ERROR {
            error!(target: "logger_helper", "{}", message);
        } else if level == Level::WARN {
            warn!(target: "logger_helper", "{}", message);
        } else if level == Level::INFO {
            info!(target: "logger_helper", "{}", message);
        } else if level == Level::DEBUG {
            debug!(target: "logger_helper", "{}", message);
        } else {
            trace!(target: "logger_helper", "{}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_closure_is_a_sink() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let captured = seen.clone();
        let sink = move |level: Level, message: &str| {
            captured.lock().unwrap().push((level, message.to_string()));
        };

        sink.emit(Level::WARN, "hello");
        assert_eq!(*seen.lock().unwrap(), vec![(Level::WARN, "hello".to_string())]);
    }

    #[test]
    fn test_tracing_sink_without_subscriber() {
        // No subscriber installed: the event is simply dropped.
        TracingSink.emit(Level::INFO, "nobody is listening");
    }
}

//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a `tracing-subscriber` fmt subscriber so that a
//! [`TracingSink`](crate::TracingSink) has somewhere to write.
//!
//! Verbosity follows the `RUST_LOG` environment variable:
//!
//! ```bash
//! # Call entries logged at INFO
//! RUST_LOG=info cargo run -p logger-helper-sample
//!
//! # Also show the engine's own diagnostics (wrapped classes, symbols)
//! RUST_LOG=debug cargo run -p logger-helper-sample
//!
//! # Only the call entries, nothing else
//! RUST_LOG=logger_helper=info cargo run -p logger-helper-sample
//! ```
//!
//! With `RUST_LOG=debug` the output looks like:
//!
//! ```text
//! DEBUG Wrapped symbol module="basic" symbol="basic_function"
//!  INFO Calling basic.basic_function(a = 9, b = 8, c = 7, d = 1, e = 2)
//!  INFO Returned "Test" from basic.basic_function
//! ```

/// Initializes a compact fmt subscriber filtered by `RUST_LOG`.
///
/// Calling it twice is harmless; the second call leaves the first subscriber in place.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}

//! # Logger Helper
//!
//! > **Verbose call logs for functions, methods, classes and whole namespaces.**
//!
//! This crate wraps callables in a transparent proxy that logs every call, then
//! either the return value or the error, without changing what the call does.
//!
//! ```text
//! Calling basic.basic_function(a = 10, b = 20, c = 40, d = "Test", e = 2)
//! Returned "Test" from basic.basic_function
//! ```
//!
//! ## Core Concepts
//!
//! ### Callables describe themselves
//! There is no runtime reflection to lean on, so every [`Callable`] carries
//! explicit [`Metadata`]: its module, qualified name, documentation and
//! declared [`Signature`]. The signature is what lets the engine turn a call
//! site ([`Args`]) back into `name = value` pairs, defaults included.
//!
//! ### Values are type-erased
//! Arguments and return values travel as [`Value`]s: anything that is
//! `Debug + Send + Sync + 'static`. The `Debug` form is what gets logged, so
//! strings show up quoted and numbers don't. Callers get their concrete type
//! back with [`Value::downcast_ref`].
//!
//! ### Errors pass straight through
//! A callable fails by returning a [`Raised`], which any
//! `std::error::Error` converts into with `?`. The wrapper logs the error's
//! type name and message and returns the very same `Raised`. Panics are
//! logged and then resumed.
//!
//! ### Wrapping never mutates
//! [`CallLogger::wrap_class`] builds a *new* [`Class`]; the original definition
//! stays as it was. [`CallLogger::wrap_namespace`] only rebinds names inside the
//! [`Namespace`] it is given.
//!
//! ## Module Tour
//!
//! - [`logger`]: the [`CallLogger`] engine and its entry points.
//! - [`wrapper`]: the [`WrappedCallable`] proxy.
//! - [`binder`]: reconstructs bound arguments from a call site.
//! - [`format`] and [`template`]: the configurable message [`Formats`].
//! - [`callable`], [`signature`], [`args`], [`value`]: the call model.
//! - [`class`] and [`namespace`]: classes, instances and module-like tables.
//! - [`sink`]: where messages go ([`Sink`], [`TracingSink`]).
//! - [`config`]: loading a [`LoggerConfig`] from TOML.
//! - [`mock`]: a [`RecordingSink`](mock::RecordingSink) for tests.
//! - [`tracing`](mod@tracing): subscriber setup.
//!
//! ## Quick Start
//!
//! ```rust
//! use logger_helper::mock::RecordingSink;
//! use logger_helper::{Args, CallLogger, Class, Namespace, Signature, Value};
//! use tracing::Level;
//!
//! let class = Class::builder("basic", "BasicClass")
//!     .method("method_1", Signature::new(), |_| Ok(Value::new("Test 1")))
//!     .build();
//! let mut module = Namespace::new("basic").with_class(class).with_data("property", 123);
//!
//! let sink = RecordingSink::new();
//! let logger = CallLogger::new(sink.clone(), Level::DEBUG);
//! logger.wrap_namespace(&mut module, None);
//!
//! let instance = module.class("BasicClass").unwrap().instantiate(&Args::new()).unwrap();
//! instance.call_method("method_1", &Args::new()).unwrap();
//!
//! sink.assert_messages(&[
//!     "Calling basic.BasicClass.method_1()",
//!     "Returned \"Test 1\" from basic.BasicClass.method_1",
//! ]);
//! ```

pub mod args;
pub mod binder;
pub mod callable;
pub mod class;
pub mod config;
pub mod error;
pub mod format;
pub mod logger;
pub mod mock;
pub mod namespace;
pub mod signature;
pub mod sink;
pub mod template;
pub mod tracing;
pub mod value;
pub mod wrapper;

// Re-export core types for convenience
pub use args::Args;
pub use binder::{bind_arguments, BoundArgument};
pub use callable::{resolve_name, Callable, Function};
pub use class::{Attribute, Class, ClassBuilder, Instance};
pub use config::LoggerConfig;
pub use error::{ArgumentError, AttributeError, Exception, Fault, LoggerError, Raised};
pub use format::{CallEvent, ExceptionEvent, Formats, ReturnEvent};
pub use logger::CallLogger;
pub use namespace::{Namespace, Symbol};
pub use signature::{Metadata, Parameter, ParameterKind, Signature};
pub use sink::{Sink, TracingSink};
pub use value::{Argument, Value};
pub use wrapper::WrappedCallable;

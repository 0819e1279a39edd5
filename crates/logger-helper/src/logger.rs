//! # The Call Logger
//!
//! [`CallLogger`] is the engine: it owns the [`Sink`], the log [`Level`] and the
//! [`Formats`], and exposes the wrapping entry points.
//!
//! | Entry point                          | Wraps                                         |
//! |--------------------------------------|-----------------------------------------------|
//! | [`CallLogger::wrap_function`]        | a free function                               |
//! | [`CallLogger::wrap_method`]          | a method (receiver left out of the log)       |
//! | [`CallLogger::wrap_class`]           | every non-dunder method, into a *new* class   |
//! | [`CallLogger::wrap_any`]             | a [`Symbol`], dispatching on its kind         |
//! | [`CallLogger::wrap_namespace`]       | a whole [`Namespace`], in place               |
//!
//! `CallLogger` is a cheap-clone handle; every wrapped callable holds one, so
//! format changes made after wrapping apply to the next invocation.
//!
//! ```rust
//! use logger_helper::mock::RecordingSink;
//! use logger_helper::{Args, Callable, CallLogger, Function, Signature, Value};
//! use tracing::Level;
//!
//! let sink = RecordingSink::new();
//! let logger = CallLogger::new(sink.clone(), Level::DEBUG);
//!
//! let greet = Function::new("demo", "greet", |args| {
//!     let name = args.require::<&str>(0, "name")?;
//!     Ok(Value::new(format!("Hello, {}!", name)))
//! })
//! .with_signature(Signature::new().param("name"));
//!
//! let greet = logger.wrap_function(greet);
//! greet.call(&Args::new().arg("Ada")).unwrap();
//!
//! sink.assert_messages(&[
//!     "Calling demo.greet(name = \"Ada\")",
//!     "Returned \"Hello, Ada!\" from demo.greet",
//! ]);
//! ```

use crate::args::Args;
use crate::binder::bind_arguments;
use crate::callable::{resolve_name, Callable};
use crate::class::{is_dunder, Attribute, Class};
use crate::config::LoggerConfig;
use crate::error::LoggerError;
use crate::format::{CallEvent, ExceptionEvent, Formats, ReturnEvent};
use crate::namespace::{Namespace, Symbol};
use crate::sink::Sink;
use crate::value::Value;
use crate::wrapper::WrappedCallable;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, trace, Level};

struct Inner {
    sink: Box<dyn Sink>,
    level: Level,
    formats: RwLock<Arc<Formats>>,
}

/// Logs calls to class methods and functions.
#[derive(Clone)]
pub struct CallLogger {
    inner: Arc<Inner>,
}

impl CallLogger {
    /// Creates a logger that writes to `sink` at `level`, with default formats.
    pub fn new(sink: impl Sink + 'static, level: Level) -> Self {
        Self::with_formats(sink, level, Formats::default())
    }

    pub fn with_formats(sink: impl Sink + 'static, level: Level, formats: Formats) -> Self {
        Self {
            inner: Arc::new(Inner {
                sink: Box::new(sink),
                level,
                formats: RwLock::new(Arc::new(formats)),
            }),
        }
    }

    /// Creates a logger from a validated [`LoggerConfig`].
    pub fn from_config(sink: impl Sink + 'static, config: &LoggerConfig) -> Result<Self, LoggerError> {
        config.validate()?;
        Ok(Self::with_formats(sink, config.level()?, config.formats.clone()))
    }

    pub fn level(&self) -> Level {
        self.inner.level
    }

    // --- Formats ---

    /// A snapshot of the current formats.
    pub fn formats(&self) -> Arc<Formats> {
        self.inner
            .formats
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_formats(&self, formats: Formats) {
        *self
            .inner
            .formats
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Arc::new(formats);
    }

    /// Edits the current formats in place.
    pub fn update_formats(&self, edit: impl FnOnce(&mut Formats)) {
        let mut guard = self
            .inner
            .formats
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        edit(Arc::make_mut(&mut *guard));
    }

    pub fn set_call_format(&self, format: impl Into<String>) {
        let format = format.into();
        self.update_formats(|f| f.call_log_format = format);
    }

    pub fn set_argument_format(&self, format: impl Into<String>) {
        let format = format.into();
        self.update_formats(|f| f.argument_format = format);
    }

    pub fn set_argument_separator(&self, separator: impl Into<String>) {
        let separator = separator.into();
        self.update_formats(|f| f.argument_separator = separator);
    }

    pub fn set_return_format(&self, format: impl Into<String>) {
        let format = format.into();
        self.update_formats(|f| f.return_log_format = format);
    }

    pub fn set_exception_format(&self, format: impl Into<String>) {
        let format = format.into();
        self.update_formats(|f| f.exception_log_format = format);
    }

    // --- Logging ---

    /// Logs a call to `callable` with `args`.
    pub fn log_call(&self, callable: &dyn Callable, args: &Args, member_call: bool) -> Result<(), LoggerError> {
        self.log_call_with(&self.formats(), callable, args, member_call)
    }

    /// Logs `value` as returned from `callable`.
    pub fn log_return(&self, callable: &dyn Callable, value: &Value) -> Result<(), LoggerError> {
        self.log_return_with(&self.formats(), callable, value)
    }

    /// Logs an error of kind `kind` raised by `callable`.
    pub fn log_exception(&self, callable: &dyn Callable, kind: &str, message: &str) -> Result<(), LoggerError> {
        self.log_exception_with(&self.formats(), callable, kind, message)
    }

    pub(crate) fn log_call_with(
        &self,
        formats: &Formats,
        callable: &dyn Callable,
        args: &Args,
        member_call: bool,
    ) -> Result<(), LoggerError> {
        let event = CallEvent {
            callable: resolve_name(callable),
            arguments: bind_arguments(callable, args, member_call)?,
        };
        self.emit(&formats.format_call(&event)?);
        Ok(())
    }

    pub(crate) fn log_return_with(
        &self,
        formats: &Formats,
        callable: &dyn Callable,
        value: &Value,
    ) -> Result<(), LoggerError> {
        let event = ReturnEvent {
            callable: resolve_name(callable),
            value: value.debug_display(),
        };
        self.emit(&formats.format_return(&event)?);
        Ok(())
    }

    pub(crate) fn log_exception_with(
        &self,
        formats: &Formats,
        callable: &dyn Callable,
        kind: &str,
        message: &str,
    ) -> Result<(), LoggerError> {
        let event = ExceptionEvent {
            callable: resolve_name(callable),
            kind: kind.to_string(),
            message: message.to_string(),
        };
        self.emit(&formats.format_exception(&event)?);
        Ok(())
    }

    fn emit(&self, message: &str) {
        self.inner.sink.emit(self.inner.level, message);
    }

    // --- Wrapping ---

    /// Wraps a shared callable.
    pub fn wrap(&self, callable: Arc<dyn Callable>, member_call: bool) -> WrappedCallable {
        WrappedCallable::new(self.clone(), callable, member_call)
    }

    /// Wraps a function.
    pub fn wrap_function(&self, function: impl Callable + 'static) -> WrappedCallable {
        self.wrap(Arc::new(function), false)
    }

    /// Wraps a method belonging to a class.
    ///
    /// The leading receiver is left out of the call entry, whether it is
    /// declared with [`Signature::with_receiver`](crate::Signature::with_receiver)
    /// or as a plain parameter named `self`.
    pub fn wrap_method(&self, method: impl Callable + 'static) -> WrappedCallable {
        self.wrap(Arc::new(method), true)
    }

    /// Wraps a class's methods (those that don't start and end with `__`).
    ///
    /// Returns a *copy* of the class; the original definition is left as it was.
    /// Inherited methods are wrapped onto the copy as well.
    pub fn wrap_class(&self, class: &Class) -> Class {
        let mut attributes = class.own_attributes().clone();
        let mut wrapped = 0usize;

        for (name, member) in class.members() {
            if is_dunder(&name) {
                continue;
            }
            if let Attribute::Callable(callable) = member {
                attributes.insert(name, Attribute::Callable(Arc::new(self.wrap(callable, true))));
                wrapped += 1;
            }
        }

        debug!(class = %resolve_name(class), wrapped, "Wrapped class");
        class.with_attributes(attributes)
    }

    /// Wraps a class or a function, failing for anything else.
    pub fn wrap_any(&self, symbol: Symbol) -> Result<Symbol, LoggerError> {
        match symbol {
            Symbol::Class(class) => Ok(Symbol::Class(self.wrap_class(&class))),
            Symbol::Function(function) => Ok(Symbol::Function(Arc::new(self.wrap(function, false)))),
            Symbol::Data(value) => Err(LoggerError::TypeMismatch {
                symbol: value.debug_display(),
            }),
        }
    }

    /// Wraps a namespace's classes and functions in place.
    ///
    /// With `symbols`, only bindings whose name is listed are wrapped. Data
    /// bindings are never touched.
    pub fn wrap_namespace(&self, namespace: &mut Namespace, symbols: Option<&[&str]>) {
        let module = namespace.name().to_string();

        for (name, symbol) in namespace.iter_mut() {
            if symbols.is_some_and(|allowed| !allowed.contains(&name.as_str())) {
                trace!(module = %module, symbol = %name, "Not in symbol list");
                continue;
            }
            if !symbol.is_callable() {
                continue;
            }
            if let Ok(wrapped) = self.wrap_any(symbol.clone()) {
                debug!(module = %module, symbol = %name, "Wrapped symbol");
                *symbol = wrapped;
            }
        }
    }
}

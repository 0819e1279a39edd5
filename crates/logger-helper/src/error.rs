//! # Errors
//!
//! This module defines the error types used throughout the crate.
//!
//! - [`LoggerError`]: failures of the engine itself (bad templates, unbindable
//!   calls, wrapping something that is not a class or a function).
//! - [`Raised`]: the opaque carrier for any error produced by a wrapped
//!   callable. The wrapper logs it and hands the *same* value back.
//! - [`ArgumentError`] and [`AttributeError`]: the errors callable bodies and
//!   instances produce when they are called with the wrong shape.

use std::any::type_name;
use std::error::Error;
use std::fmt;

/// Errors raised by the logging engine.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum LoggerError {
    /// A format template is malformed or references a token its slot does not provide.
    #[error("Malformed template {template:?}: {reason}")]
    Configuration { template: String, reason: String },

    /// `wrap_any` was handed something that is neither a class nor a function.
    #[error("{symbol} is not a class or a callable.")]
    TypeMismatch { symbol: String },

    /// No positional, keyword or default value exists for a declared parameter.
    #[error("Cannot bind parameter `{parameter}` of {callable}: no argument and no default")]
    Binding { callable: String, parameter: String },

    /// The logger configuration could not be read or parsed.
    #[error("Invalid configuration: {0}")]
    LoadConfig(String),
}

/// Errors produced when a callable body reads its arguments.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("missing required argument: '{0}'")]
    Missing(String),
    #[error("argument '{name}' is not a {expected}")]
    WrongType { name: String, expected: &'static str },
}

/// Raised when an instance is asked for an attribute it does not have.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("'{class}' object has no callable attribute '{name}'")]
pub struct AttributeError {
    pub class: String,
    pub name: String,
}

/// A general purpose error for callables that only need a message.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("{0}")]
pub struct Exception(pub String);

impl Exception {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Any error that can travel through a wrapped callable.
///
/// Implemented for every `std::error::Error + Send + Sync + 'static`; the blanket
/// impl captures the concrete type so the kind name survives type erasure.
pub trait Fault: Error + Send + Sync + 'static {
    /// Short type name of the concrete error, e.g. `ParseIntError`.
    fn kind(&self) -> &'static str;

    fn as_error(&self) -> &(dyn Error + Send + Sync + 'static);

    fn into_error(self: Box<Self>) -> Box<dyn Error + Send + Sync + 'static>;
}

impl<E: Error + Send + Sync + 'static> Fault for E {
    fn kind(&self) -> &'static str {
        short_type_name(type_name::<E>())
    }

    fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn Error + Send + Sync + 'static> {
        self
    }
}

/// An error raised by a callable.
///
/// Any error type converts into `Raised` with `?`, so callable bodies can use
/// their own error enums. `Raised` does not implement
/// `std::error::Error` itself; use [`Raised::as_error`] or
/// [`Raised::into_inner`] to get at the underlying error.
pub struct Raised {
    fault: Box<dyn Fault>,
}

impl Raised {
    pub fn new<E: Error + Send + Sync + 'static>(error: E) -> Self {
        Self {
            fault: Box::new(error),
        }
    }

    /// Shorthand for raising an [`Exception`] with the given message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(Exception::new(message))
    }

    /// The short type name of the underlying error.
    pub fn kind(&self) -> &'static str {
        self.fault.kind()
    }

    /// The underlying error's `Display` output.
    pub fn message(&self) -> String {
        self.fault.to_string()
    }

    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.fault.as_error()
    }

    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.as_error().downcast_ref::<E>()
    }

    pub fn is<E: Error + 'static>(&self) -> bool {
        self.downcast_ref::<E>().is_some()
    }

    pub fn into_inner(self) -> Box<dyn Error + Send + Sync + 'static> {
        self.fault.into_error()
    }
}

impl<E: Error + Send + Sync + 'static> From<E> for Raised {
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl fmt::Debug for Raised {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.fault, f)
    }
}

impl fmt::Display for Raised {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.fault, f)
    }
}

/// Strips the module path and generic arguments from a `type_name` result.
pub(crate) fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_is_short_type_name() {
        let raised = Raised::from("x".parse::<u32>().unwrap_err());
        assert_eq!(raised.kind(), "ParseIntError");

        let raised = Raised::msg("This is an exception");
        assert_eq!(raised.kind(), "Exception");
        assert_eq!(raised.message(), "This is an exception");
    }

    #[test]
    fn test_downcast_round_trip() {
        let raised = Raised::new(LoggerError::TypeMismatch {
            symbol: "\"Hello\"".into(),
        });
        assert!(raised.is::<LoggerError>());
        assert!(!raised.is::<Exception>());
        assert_eq!(
            raised.downcast_ref::<LoggerError>(),
            Some(&LoggerError::TypeMismatch {
                symbol: "\"Hello\"".into()
            })
        );
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name("core::num::error::ParseIntError"), "ParseIntError");
        assert_eq!(short_type_name("a::Wrapper<b::Inner>"), "Wrapper");
        assert_eq!(short_type_name("Plain"), "Plain");
    }
}

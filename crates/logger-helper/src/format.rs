//! # Formatting
//!
//! [`Formats`] holds the five configurable strings and renders the three
//! per-invocation events ([`CallEvent`], [`ReturnEvent`], [`ExceptionEvent`]).
//!
//! | Template                | Tokens                            |
//! |-------------------------|-----------------------------------|
//! | `call_log_format`       | `callable`, `args`                |
//! | `argument_format`       | `name`, `value`                   |
//! | `return_log_format`     | `callable`, `value`               |
//! | `exception_log_format`  | `callable`, `name`, `message`     |
//!
//! `argument_separator` is a plain string used to join the rendered arguments.

use crate::binder::BoundArgument;
use crate::error::LoggerError;
use crate::template;
use serde::{Deserialize, Serialize};

pub const CALL_TOKENS: &[&str] = &["callable", "args"];
pub const ARGUMENT_TOKENS: &[&str] = &["name", "value"];
pub const RETURN_TOKENS: &[&str] = &["callable", "value"];
pub const EXCEPTION_TOKENS: &[&str] = &["callable", "name", "message"];

/// The call being made.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallEvent {
    pub callable: String,
    pub arguments: Vec<BoundArgument>,
}

/// A normal return.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReturnEvent {
    pub callable: String,
    /// Debug-display of the returned value.
    pub value: String,
}

/// An error (or panic) escaping the callable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExceptionEvent {
    pub callable: String,
    pub kind: String,
    pub message: String,
}

/// Log message templates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Formats {
    pub call_log_format: String,
    pub argument_format: String,
    pub argument_separator: String,
    pub return_log_format: String,
    pub exception_log_format: String,
}

impl Default for Formats {
    fn default() -> Self {
        Self {
            call_log_format: "Calling {callable}({args})".to_string(),
            argument_format: "{name} = {value}".to_string(),
            argument_separator: ", ".to_string(),
            return_log_format: "Returned {value} from {callable}".to_string(),
            exception_log_format: "Exception {name} occurred in {callable}, \"{message}\"".to_string(),
        }
    }
}

impl Formats {
    /// Checks every template against the tokens its slot provides.
    pub fn validate(&self) -> Result<(), LoggerError> {
        template::validate(&self.call_log_format, CALL_TOKENS)?;
        template::validate(&self.argument_format, ARGUMENT_TOKENS)?;
        template::validate(&self.return_log_format, RETURN_TOKENS)?;
        template::validate(&self.exception_log_format, EXCEPTION_TOKENS)
    }

    pub fn format_call(&self, event: &CallEvent) -> Result<String, LoggerError> {
        let arguments = event
            .arguments
            .iter()
            .map(|argument| {
                template::render(
                    &self.argument_format,
                    &[("name", argument.name.as_str()), ("value", argument.value.as_str())],
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        let args = arguments.join(self.argument_separator.as_str());

        template::render(
            &self.call_log_format,
            &[("callable", event.callable.as_str()), ("args", args.as_str())],
        )
    }

    pub fn format_return(&self, event: &ReturnEvent) -> Result<String, LoggerError> {
        template::render(
            &self.return_log_format,
            &[("callable", event.callable.as_str()), ("value", event.value.as_str())],
        )
    }

    pub fn format_exception(&self, event: &ExceptionEvent) -> Result<String, LoggerError> {
        template::render(
            &self.exception_log_format,
            &[
                ("callable", event.callable.as_str()),
                ("name", event.kind.as_str()),
                ("message", event.message.as_str()),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call_event() -> CallEvent {
        CallEvent {
            callable: "tests.basic_function".into(),
            arguments: vec![
                BoundArgument::new("a", "10"),
                BoundArgument::new("d", "\"Test\""),
            ],
        }
    }

    #[test]
    fn test_default_formats() {
        let formats = Formats::default();
        assert!(formats.validate().is_ok());
        assert_eq!(
            formats.format_call(&call_event()).unwrap(),
            "Calling tests.basic_function(a = 10, d = \"Test\")"
        );
        assert_eq!(
            formats
                .format_return(&ReturnEvent {
                    callable: "tests.basic_function".into(),
                    value: "\"Test\"".into(),
                })
                .unwrap(),
            "Returned \"Test\" from tests.basic_function"
        );
        assert_eq!(
            formats
                .format_exception(&ExceptionEvent {
                    callable: "tests.exception_function".into(),
                    kind: "Exception".into(),
                    message: "This is an exception".into(),
                })
                .unwrap(),
            "Exception Exception occurred in tests.exception_function, \"This is an exception\""
        );
    }

    #[test]
    fn test_custom_formats() {
        let formats = Formats {
            call_log_format: "{callable}:{args}".into(),
            argument_format: "{name}={value}".into(),
            argument_separator: ",".into(),
            ..Formats::default()
        };
        assert_eq!(
            formats.format_call(&call_event()).unwrap(),
            "tests.basic_function:a=10,d=\"Test\""
        );
    }

    #[test]
    fn test_no_arguments_renders_empty_list() {
        let event = CallEvent {
            callable: "tests.BasicClass.method_1".into(),
            arguments: vec![],
        };
        assert_eq!(
            Formats::default().format_call(&event).unwrap(),
            "Calling tests.BasicClass.method_1()"
        );
    }

    #[test]
    fn test_token_from_other_slot_is_rejected() {
        let formats = Formats {
            return_log_format: "{message}".into(),
            ..Formats::default()
        };
        assert!(formats.validate().is_err());
        let event = ReturnEvent {
            callable: "f".into(),
            value: "1".into(),
        };
        assert!(matches!(
            formats.format_return(&event),
            Err(LoggerError::Configuration { .. })
        ));
    }
}

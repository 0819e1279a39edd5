//! # Argument Binding
//!
//! Reconstructs which value each declared parameter received at a call site,
//! so the call can be logged as `name = value` pairs.
//!
//! For every declared parameter, in order:
//!
//! 1. A leading receiver is skipped on member calls. A plain parameter named
//!    `self` in that position counts as the receiver too.
//! 2. A positional argument at the same index wins.
//! 3. Otherwise a keyword argument with the parameter's name.
//! 4. Otherwise the declared default.
//! 5. Otherwise the call cannot be bound and [`LoggerError::Binding`] is returned.
//!
//! Positional indices include the receiver: on a member call the instance sits
//! at index 0, so the first parameter after it reads index 1.

use crate::args::Args;
use crate::callable::{resolve_name, Callable};
use crate::error::LoggerError;
use crate::signature::{Parameter, ParameterKind, RECEIVER};
use crate::value::Value;
use std::fmt;

/// One `(parameter name, debug-display of its value)` pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundArgument {
    pub name: String,
    pub value: String,
}

impl BoundArgument {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Renders collected `**kwargs` as a map.
struct KeywordMap<'a>(Vec<(&'a str, &'a Value)>);

impl fmt::Debug for KeywordMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter().map(|(k, v)| (k, v))).finish()
    }
}

fn is_receiver(parameter: &Parameter) -> bool {
    parameter.is_receiver() || parameter.name() == RECEIVER
}

/// Binds `args` against the declared signature of `callable`.
pub fn bind_arguments(
    callable: &dyn Callable,
    args: &Args,
    member_call: bool,
) -> Result<Vec<BoundArgument>, LoggerError> {
    let parameters = callable.metadata().signature().parameters();
    let mut bound = Vec::with_capacity(parameters.len());
    // Parameters declared after `*args` can only be supplied by keyword.
    let mut keyword_only = false;

    for (index, parameter) in parameters.iter().enumerate() {
        let value = match parameter.kind() {
            ParameterKind::Receiver | ParameterKind::Named
                if member_call && index == 0 && is_receiver(parameter) =>
            {
                continue
            }
            ParameterKind::Variadic => {
                keyword_only = true;
                let rest: Vec<&Value> = args.positional().iter().skip(index).collect();
                format!("{:?}", rest)
            }
            ParameterKind::Keywords => {
                let unclaimed = args
                    .keywords()
                    .filter(|(name, _)| {
                        !parameters
                            .iter()
                            .any(|p| p.kind() == ParameterKind::Named && p.name() == *name)
                    })
                    .collect();
                format!("{:?}", KeywordMap(unclaimed))
            }
            ParameterKind::Receiver | ParameterKind::Named => {
                let positional = if keyword_only {
                    None
                } else {
                    args.positional().get(index)
                };
                positional
                    .or_else(|| args.keyword(parameter.name()))
                    .or_else(|| parameter.default())
                    .ok_or_else(|| LoggerError::Binding {
                        callable: resolve_name(callable),
                        parameter: parameter.name().to_string(),
                    })?
                    .debug_display()
            }
        };
        bound.push(BoundArgument::new(parameter.name(), value));
    }

    Ok(bound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callable::Function;
    use crate::signature::Signature;

    fn basic_function() -> Function {
        Function::new("tests", "basic_function", |_| Ok(Value::new("Test"))).with_signature(
            Signature::new()
                .param("a")
                .param("b")
                .param("c")
                .param_default("d", 1)
                .param_default("e", 2),
        )
    }

    fn pairs(bound: &[BoundArgument]) -> Vec<(&str, &str)> {
        bound
            .iter()
            .map(|b| (b.name.as_str(), b.value.as_str()))
            .collect()
    }

    #[test]
    fn test_positional_keyword_default_precedence() {
        let args = Args::new().arg(10).arg(20).kwarg("c", 40).kwarg("d", "Test");
        let bound = bind_arguments(&basic_function(), &args, false).unwrap();
        assert_eq!(
            pairs(&bound),
            vec![
                ("a", "10"),
                ("b", "20"),
                ("c", "40"),
                ("d", "\"Test\""),
                ("e", "2")
            ]
        );
    }

    #[test]
    fn test_positional_wins_over_keyword() {
        let args = Args::new().arg(1).arg(2).arg(3).kwarg("a", 99);
        let bound = bind_arguments(&basic_function(), &args, false).unwrap();
        assert_eq!(bound[0], BoundArgument::new("a", "1"));
    }

    #[test]
    fn test_missing_argument_is_binding_error() {
        let args = Args::new().arg(1);
        let err = bind_arguments(&basic_function(), &args, false).unwrap_err();
        assert_eq!(
            err,
            LoggerError::Binding {
                callable: "tests.basic_function".into(),
                parameter: "b".into()
            }
        );
    }

    #[test]
    fn test_member_call_skips_receiver() {
        let method = Function::new("tests", "method", |_| Ok(Value::unit()))
            .with_signature(Signature::new().param("x").with_receiver());
        let args = Args::new().arg("instance").arg(5);

        let bound = bind_arguments(&method, &args, true).unwrap();
        assert_eq!(pairs(&bound), vec![("x", "5")]);

        let bound = bind_arguments(&method, &args, false).unwrap();
        assert_eq!(pairs(&bound), vec![("self", "\"instance\""), ("x", "5")]);
    }

    #[test]
    fn test_member_call_skips_parameter_named_self() {
        let method = Function::new("tests", "method", |_| Ok(Value::unit()))
            .with_signature(Signature::new().param("self").param("x"));
        let args = Args::new().arg("instance").arg(5);

        let bound = bind_arguments(&method, &args, true).unwrap();
        assert_eq!(pairs(&bound), vec![("x", "5")]);
    }

    #[test]
    fn test_member_call_without_receiver_keeps_first_parameter() {
        let args = Args::new().arg(1).arg(2).arg(3);
        let bound = bind_arguments(&basic_function(), &args, true).unwrap();
        assert_eq!(bound.len(), 5);
        assert_eq!(bound[0], BoundArgument::new("a", "1"));
    }

    #[test]
    fn test_variadic_and_keywords() {
        let function = Function::new("tests", "spread", |_| Ok(Value::unit())).with_signature(
            Signature::new()
                .param("a")
                .variadic("args")
                .param_default("flag", false)
                .keywords("kwargs"),
        );
        let args = Args::new()
            .arg(1)
            .arg(2)
            .arg(3)
            .kwarg("flag", true)
            .kwarg("extra", "x");

        let bound = bind_arguments(&function, &args, false).unwrap();
        assert_eq!(
            pairs(&bound),
            vec![
                ("a", "1"),
                ("args", "[2, 3]"),
                ("flag", "true"),
                ("kwargs", "{\"extra\": \"x\"}")
            ]
        );
    }
}

//! # Signatures & Metadata
//!
//! Callables describe their own shape explicitly: an ordered list of
//! [`Parameter`]s (with optional defaults) wrapped in a [`Signature`], plus the
//! naming and documentation carried in [`Metadata`].
//!
//! The `Display` form of a signature mirrors how it would be declared:
//!
//! ```rust
//! use logger_helper::Signature;
//!
//! let signature = Signature::new()
//!     .param("a")
//!     .param("b")
//!     .param("c")
//!     .param_default("d", 1)
//!     .param_default("e", 2);
//! assert_eq!(signature.to_string(), "(a, b, c, d=1, e=2)");
//! ```

use crate::value::Value;
use std::any::Any;
use std::fmt::{self, Debug, Display};

/// Conventional name of the receiver parameter.
pub const RECEIVER: &str = "self";

/// How a parameter accepts its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParameterKind {
    /// The leading instance parameter of a method.
    Receiver,
    /// Positional-or-keyword parameter.
    Named,
    /// Collects the remaining positional arguments (`*args`).
    Variadic,
    /// Collects unclaimed keyword arguments (`**kwargs`).
    Keywords,
}

/// A declared parameter.
#[derive(Clone, Debug)]
pub struct Parameter {
    name: String,
    kind: ParameterKind,
    default: Option<Value>,
}

impl Parameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParameterKind::Named,
            default: None,
        }
    }

    pub fn with_default<T: Any + Debug + Send + Sync>(name: impl Into<String>, default: T) -> Self {
        Self {
            default: Some(Value::new(default)),
            ..Self::new(name)
        }
    }

    pub fn receiver() -> Self {
        Self {
            name: RECEIVER.to_string(),
            kind: ParameterKind::Receiver,
            default: None,
        }
    }

    pub fn variadic(name: impl Into<String>) -> Self {
        Self {
            kind: ParameterKind::Variadic,
            ..Self::new(name)
        }
    }

    pub fn keywords(name: impl Into<String>) -> Self {
        Self {
            kind: ParameterKind::Keywords,
            ..Self::new(name)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ParameterKind {
        self.kind
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn is_receiver(&self) -> bool {
        self.kind == ParameterKind::Receiver
    }
}

impl Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParameterKind::Variadic => write!(f, "*{}", self.name),
            ParameterKind::Keywords => write!(f, "**{}", self.name),
            ParameterKind::Receiver | ParameterKind::Named => match &self.default {
                Some(default) => write!(f, "{}={:?}", self.name, default),
                None => f.write_str(&self.name),
            },
        }
    }
}

/// Ordered parameter list of a callable.
#[derive(Clone, Debug, Default)]
pub struct Signature {
    parameters: Vec<Parameter>,
}

impl Signature {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn param(self, name: impl Into<String>) -> Self {
        self.push(Parameter::new(name))
    }

    pub fn param_default<T: Any + Debug + Send + Sync>(self, name: impl Into<String>, default: T) -> Self {
        self.push(Parameter::with_default(name, default))
    }

    pub fn variadic(self, name: impl Into<String>) -> Self {
        self.push(Parameter::variadic(name))
    }

    pub fn keywords(self, name: impl Into<String>) -> Self {
        self.push(Parameter::keywords(name))
    }

    /// Prepends a receiver unless one is already declared.
    pub fn with_receiver(mut self) -> Self {
        if !self.has_receiver() {
            self.parameters.insert(0, Parameter::receiver());
        }
        self
    }

    /// Drops a leading receiver, if any.
    pub fn without_receiver(mut self) -> Self {
        if self.has_receiver() {
            self.parameters.remove(0);
        }
        self
    }

    pub fn has_receiver(&self) -> bool {
        self.parameters.first().is_some_and(Parameter::is_receiver)
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (index, parameter) in self.parameters.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", parameter)?;
        }
        f.write_str(")")
    }
}

/// Name, location, documentation and signature of a callable.
#[derive(Clone, Debug)]
pub struct Metadata {
    name: String,
    module: String,
    qualname: String,
    doc: Option<String>,
    signature: Signature,
}

impl Metadata {
    pub fn new(module: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            qualname: name.clone(),
            name,
            module: module.into(),
            doc: None,
            signature: Signature::new(),
        }
    }

    /// Sets the dotted path of nested definitions, e.g. `BasicClass.method_1`.
    pub fn with_qualname(mut self, qualname: impl Into<String>) -> Self {
        self.qualname = qualname.into();
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn with_signature(mut self, signature: Signature) -> Self {
        self.signature = signature;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn qualname(&self) -> &str {
        &self.qualname
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// `module.qualname`.
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.module, self.qualname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_display() {
        let signature = Signature::new()
            .param("a")
            .param_default("name", "x")
            .variadic("args")
            .keywords("kwargs")
            .with_receiver();
        assert_eq!(signature.to_string(), "(self, a, name=\"x\", *args, **kwargs)");
        assert_eq!(signature.without_receiver().to_string(), "(a, name=\"x\", *args, **kwargs)");
    }

    #[test]
    fn test_with_receiver_is_idempotent() {
        let signature = Signature::new().with_receiver().with_receiver();
        assert_eq!(signature.len(), 1);
        assert!(signature.has_receiver());
    }

    #[test]
    fn test_metadata_full_name() {
        let metadata = Metadata::new("tests", "method_1").with_qualname("BasicClass.method_1");
        assert_eq!(metadata.name(), "method_1");
        assert_eq!(metadata.full_name(), "tests.BasicClass.method_1");
        assert_eq!(metadata.doc(), None);
    }
}

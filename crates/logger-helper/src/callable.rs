//! # Callables
//!
//! The [`Callable`] trait is the contract everything the engine can wrap must
//! satisfy: describe yourself ([`Metadata`]) and run with some [`Args`].
//!
//! [`Function`] is the general-purpose implementation: a closure plus the
//! metadata describing it. Classes ([`crate::Class`]) and wrapped callables
//! ([`crate::WrappedCallable`]) implement the trait as well, so they nest freely.

use crate::args::Args;
use crate::error::Raised;
use crate::signature::{Metadata, Signature};
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// Anything that can be invoked with [`Args`].
pub trait Callable: Send + Sync {
    /// Name, documentation and declared signature.
    fn metadata(&self) -> &Metadata;

    /// Invokes the callable.
    fn call(&self, args: &Args) -> Result<Value, Raised>;
}

impl<C: Callable + ?Sized> Callable for Arc<C> {
    fn metadata(&self) -> &Metadata {
        (**self).metadata()
    }

    fn call(&self, args: &Args) -> Result<Value, Raised> {
        (**self).call(args)
    }
}

impl fmt::Debug for dyn Callable + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<callable {}{}>", resolve_name(self), self.metadata().signature())
    }
}

/// The fully qualified display name of a callable: `module.qualname`.
pub fn resolve_name(callable: &dyn Callable) -> String {
    callable.metadata().full_name()
}

type Body = dyn Fn(&Args) -> Result<Value, Raised> + Send + Sync;

/// A callable built from a closure and explicit metadata.
///
/// ```rust
/// use logger_helper::{Args, Callable, Function, Signature, Value};
///
/// let add = Function::new("math", "add", |args: &Args| {
///     let a = args.require::<i32>(0, "a")?;
///     let b = args.require::<i32>(1, "b")?;
///     Ok(Value::new(a + b))
/// })
/// .with_signature(Signature::new().param("a").param("b"));
///
/// let sum = add.call(&Args::new().arg(2).kwarg("b", 3)).unwrap();
/// assert_eq!(sum.downcast_ref::<i32>(), Some(&5));
/// ```
#[derive(Clone)]
pub struct Function {
    metadata: Metadata,
    body: Arc<Body>,
}

impl Function {
    pub fn new<F>(module: impl Into<String>, name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&Args) -> Result<Value, Raised> + Send + Sync + 'static,
    {
        Self {
            metadata: Metadata::new(module, name),
            body: Arc::new(body),
        }
    }

    pub fn with_qualname(mut self, qualname: impl Into<String>) -> Self {
        self.metadata = self.metadata.with_qualname(qualname);
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.metadata = self.metadata.with_doc(doc);
        self
    }

    pub fn with_signature(mut self, signature: Signature) -> Self {
        self.metadata = self.metadata.with_signature(signature);
        self
    }
}

impl Callable for Function {
    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn call(&self, args: &Args) -> Result<Value, Raised> {
        (self.body)(args)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self as &dyn Callable, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic_function() -> Function {
        Function::new("tests", "basic_function", |_| Ok(Value::new("Test")))
            .with_doc("Test Docstring.")
            .with_signature(
                Signature::new()
                    .param("a")
                    .param("b")
                    .param("c")
                    .param_default("d", 1)
                    .param_default("e", 2),
            )
    }

    #[test]
    fn test_resolve_name() {
        assert_eq!(resolve_name(&basic_function()), "tests.basic_function");

        let method = Function::new("tests", "method_1", |_| Ok(Value::unit()))
            .with_qualname("BasicClass.method_1");
        assert_eq!(resolve_name(&method), "tests.BasicClass.method_1");
    }

    #[test]
    fn test_arc_delegates() {
        let shared: Arc<dyn Callable> = Arc::new(basic_function());
        assert_eq!(shared.metadata().doc(), Some("Test Docstring."));
        let value = shared.call(&Args::new()).unwrap();
        assert_eq!(value.downcast_ref::<&str>(), Some(&"Test"));
    }

    #[test]
    fn test_debug_shows_name_and_signature() {
        assert_eq!(
            format!("{:?}", basic_function()),
            "<callable tests.basic_function(a, b, c, d=1, e=2)>"
        );
    }
}

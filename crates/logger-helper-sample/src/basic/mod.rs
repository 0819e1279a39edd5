//! The `basic` module: a function with defaults, a failing function, a class
//! with two methods and a plain data binding.

use crate::error::BasicError;
use logger_helper::{Args, Class, Function, Instance, Namespace, Raised, Signature, Value};

pub const MODULE: &str = "basic";

/// `basic_function(a, b, c, d=1, e=2)`, always returns `"Test"`.
pub fn basic_function() -> Function {
    Function::new(MODULE, "basic_function", |_| Ok(Value::new("Test")))
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

/// `exception_function()`, always fails with [`BasicError::Deliberate`].
pub fn exception_function() -> Function {
    Function::new(MODULE, "exception_function", |_| Err(BasicError::Deliberate.into()))
        .with_doc("Raises an exception.")
}

fn numbered(args: &Args, n: u32) -> Result<Value, Raised> {
    let this = args.receiver::<Instance>()?;
    let value = this
        .get_as::<String>("value")
        .ok_or(BasicError::MissingValue)?;
    Ok(Value::new(format!("{} {}", value, n)))
}

/// `BasicClass`: `__init__` stores `value = "Test"`, `method_1` and
/// `method_2` return `"Test 1"` and `"Test 2"`.
pub fn basic_class() -> Class {
    Class::builder(MODULE, "BasicClass")
        .doc("A class with two methods.")
        .method("__init__", Signature::new(), |args| {
            args.receiver::<Instance>()?.set("value", "Test".to_string());
            Ok(Value::unit())
        })
        .method("method_1", Signature::new(), |args| numbered(args, 1))
        .method("method_2", Signature::new(), |args| numbered(args, 2))
        .build()
}

/// The whole module, with `property = 123`.
pub fn basic_module() -> Namespace {
    Namespace::new(MODULE)
        .with_function(basic_function())
        .with_function(exception_function())
        .with_class(basic_class())
        .with_data("property", 123)
}

#[cfg(test)]
mod tests {
    use super::*;
    use logger_helper::Callable;

    #[test]
    fn test_module_contents() {
        let module = basic_module();
        let names: Vec<&str> = module.names().collect();
        assert_eq!(
            names,
            vec!["BasicClass", "basic_function", "exception_function", "property"]
        );
    }

    #[test]
    fn test_methods_return_numbered_values() {
        let instance = basic_class().instantiate(&Args::new()).unwrap();
        let first = instance.call_method("method_1", &Args::new()).unwrap();
        assert_eq!(first.downcast_ref::<String>().map(String::as_str), Some("Test 1"));
    }

    #[test]
    fn test_exception_function_fails() {
        let err = exception_function().call(&Args::new()).unwrap_err();
        assert_eq!(err.downcast_ref::<BasicError>(), Some(&BasicError::Deliberate));
        assert_eq!(err.kind(), "BasicError");
    }
}

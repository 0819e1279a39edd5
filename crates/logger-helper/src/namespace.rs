//! # Namespaces
//!
//! A [`Namespace`] is a module-like table of named [`Symbol`]s: classes,
//! functions and plain data. [`crate::CallLogger::wrap_namespace`] rebinds the
//! class and function entries to wrapped versions in place; anything holding
//! the original objects keeps them.

use crate::args::Args;
use crate::callable::Callable;
use crate::class::Class;
use crate::error::{AttributeError, Raised};
use crate::value::Value;
use std::any::Any;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::Arc;

/// A top-level binding.
#[derive(Clone, Debug)]
pub enum Symbol {
    Class(Class),
    Function(Arc<dyn Callable>),
    Data(Value),
}

impl Symbol {
    pub fn function(callable: impl Callable + 'static) -> Self {
        Symbol::Function(Arc::new(callable))
    }

    pub fn data<T: Any + Debug + Send + Sync>(value: T) -> Self {
        Symbol::Data(Value::new(value))
    }

    pub fn is_callable(&self) -> bool {
        !matches!(self, Symbol::Data(_))
    }

    pub fn as_class(&self) -> Option<&Class> {
        match self {
            Symbol::Class(class) => Some(class),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Arc<dyn Callable>> {
        match self {
            Symbol::Function(function) => Some(function),
            _ => None,
        }
    }

    pub fn as_data(&self) -> Option<&Value> {
        match self {
            Symbol::Data(value) => Some(value),
            _ => None,
        }
    }
}

impl From<Class> for Symbol {
    fn from(class: Class) -> Self {
        Symbol::Class(class)
    }
}

/// A named table of symbols, iterated in name order.
#[derive(Clone, Debug)]
pub struct Namespace {
    name: String,
    bindings: BTreeMap<String, Symbol>,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bindings: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Binds a callable under its own name.
    pub fn with_function(mut self, callable: impl Callable + 'static) -> Self {
        let name = callable.metadata().name().to_string();
        self.insert(name, Symbol::function(callable));
        self
    }

    /// Binds a class under its own name.
    pub fn with_class(mut self, class: Class) -> Self {
        let name = class.name().to_string();
        self.insert(name, Symbol::Class(class));
        self
    }

    pub fn with_data<T: Any + Debug + Send + Sync>(mut self, name: impl Into<String>, value: T) -> Self {
        self.insert(name, Symbol::data(value));
        self
    }

    /// Binds `symbol` under `name`, returning the previous binding.
    pub fn insert(&mut self, name: impl Into<String>, symbol: Symbol) -> Option<Symbol> {
        self.bindings.insert(name.into(), symbol)
    }

    pub fn remove(&mut self, name: &str) -> Option<Symbol> {
        self.bindings.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.bindings.get(name)
    }

    pub fn class(&self, name: &str) -> Option<&Class> {
        self.get(name).and_then(Symbol::as_class)
    }

    pub fn function(&self, name: &str) -> Option<&Arc<dyn Callable>> {
        self.get(name).and_then(Symbol::as_function)
    }

    pub fn data(&self, name: &str) -> Option<&Value> {
        self.get(name).and_then(Symbol::as_data)
    }

    /// Calls the class or function bound to `name`.
    pub fn call(&self, name: &str, args: &Args) -> Result<Value, Raised> {
        match self.get(name) {
            Some(Symbol::Class(class)) => class.call(args),
            Some(Symbol::Function(function)) => function.call(args),
            _ => Err(AttributeError {
                class: self.name.clone(),
                name: name.to_string(),
            }
            .into()),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Symbol> {
        self.bindings.iter()
    }

    pub fn iter_mut(&mut self) -> btree_map::IterMut<'_, String, Symbol> {
        self.bindings.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

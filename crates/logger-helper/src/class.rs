//! # Classes & Instances
//!
//! A [`Class`] is an immutable, cheap-clone handle to a class definition: a
//! name, a list of base classes and an attribute table of methods and data.
//! Because definitions never change after [`ClassBuilder::build`], producing a
//! variant of a class (for example with every method wrapped) always means
//! building a *new* definition; holders of the original are unaffected.
//!
//! Calling a class creates an [`Instance`] and runs its `__init__`, if any.
//! Methods receive the instance as positional argument 0.
//!
//! ```rust
//! use logger_helper::{Args, Class, Instance, Signature, Value};
//!
//! let counter = Class::builder("demo", "Counter")
//!     .method("__init__", Signature::new(), |args| {
//!         args.receiver::<Instance>()?.set("count", 0u32);
//!         Ok(Value::unit())
//!     })
//!     .method("increment", Signature::new(), |args| {
//!         let this = args.receiver::<Instance>()?;
//!         let next = this.get_as::<u32>("count").unwrap_or(0) + 1;
//!         this.set("count", next);
//!         Ok(Value::new(next))
//!     })
//!     .build();
//!
//! let instance = counter.instantiate(&Args::new()).unwrap();
//! let value = instance.call_method("increment", &Args::new()).unwrap();
//! assert_eq!(value.downcast_ref::<u32>(), Some(&1));
//! ```

use crate::args::Args;
use crate::callable::{Callable, Function};
use crate::error::{AttributeError, Raised};
use crate::signature::{Metadata, Signature};
use crate::value::Value;
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt::{self, Debug};
use std::sync::{Arc, Mutex, PoisonError};

/// Name of the constructor hook.
pub const INIT: &str = "__init__";

/// True for `__reserved__`-style names, which are never wrapped.
pub fn is_dunder(name: &str) -> bool {
    name.starts_with("__") && name.ends_with("__")
}

/// An entry in a class's attribute table.
#[derive(Clone, Debug)]
pub enum Attribute {
    Callable(Arc<dyn Callable>),
    Data(Value),
}

impl Attribute {
    pub fn is_callable(&self) -> bool {
        matches!(self, Attribute::Callable(_))
    }

    pub fn as_callable(&self) -> Option<&Arc<dyn Callable>> {
        match self {
            Attribute::Callable(callable) => Some(callable),
            Attribute::Data(_) => None,
        }
    }

    pub fn as_data(&self) -> Option<&Value> {
        match self {
            Attribute::Data(value) => Some(value),
            Attribute::Callable(_) => None,
        }
    }
}

struct ClassDef {
    metadata: Metadata,
    bases: Vec<Class>,
    attributes: BTreeMap<String, Attribute>,
}

/// A class definition.
#[derive(Clone)]
pub struct Class {
    def: Arc<ClassDef>,
}

impl Class {
    pub fn builder(module: impl Into<String>, name: impl Into<String>) -> ClassBuilder {
        ClassBuilder::new(module, name)
    }

    pub fn name(&self) -> &str {
        self.def.metadata.name()
    }

    pub fn module(&self) -> &str {
        self.def.metadata.module()
    }

    pub fn qualname(&self) -> &str {
        self.def.metadata.qualname()
    }

    pub fn bases(&self) -> &[Class] {
        &self.def.bases
    }

    /// Attributes defined directly on this class.
    pub fn own_attributes(&self) -> &BTreeMap<String, Attribute> {
        &self.def.attributes
    }

    /// Looks an attribute up on this class, then its bases depth-first, left to right.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.def
            .attributes
            .get(name)
            .or_else(|| self.def.bases.iter().find_map(|base| base.attribute(name)))
    }

    /// Every attribute visible on this class, own definitions shadowing inherited ones.
    pub fn members(&self) -> BTreeMap<String, Attribute> {
        let mut members = BTreeMap::new();
        for base in self.def.bases.iter().rev() {
            members.extend(base.members());
        }
        members.extend(
            self.def
                .attributes
                .iter()
                .map(|(name, attribute)| (name.clone(), attribute.clone())),
        );
        members
    }

    pub fn method(&self, name: &str) -> Option<&Arc<dyn Callable>> {
        self.attribute(name).and_then(Attribute::as_callable)
    }

    /// Creates an instance and runs `__init__` with `args`.
    pub fn instantiate(&self, args: &Args) -> Result<Instance, Raised> {
        let instance = Instance::new(self.clone());
        if let Some(init) = self.method(INIT) {
            init.call(&args.with_receiver(Value::new(instance.clone())))?;
        }
        Ok(instance)
    }

    /// True when both handles point at the same definition.
    pub fn ptr_eq(&self, other: &Class) -> bool {
        Arc::ptr_eq(&self.def, &other.def)
    }

    /// A new definition with the same name and bases but a different attribute table.
    pub(crate) fn with_attributes(&self, attributes: BTreeMap<String, Attribute>) -> Class {
        Class {
            def: Arc::new(ClassDef {
                metadata: self.def.metadata.clone(),
                bases: self.def.bases.clone(),
                attributes,
            }),
        }
    }
}

impl Callable for Class {
    fn metadata(&self) -> &Metadata {
        &self.def.metadata
    }

    fn call(&self, args: &Args) -> Result<Value, Raised> {
        self.instantiate(args).map(Value::new)
    }
}

impl Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<class '{}'>", self.def.metadata.full_name())
    }
}

/// Builds a [`Class`].
pub struct ClassBuilder {
    module: String,
    qualname: String,
    doc: Option<String>,
    bases: Vec<Class>,
    attributes: BTreeMap<String, Attribute>,
}

impl ClassBuilder {
    pub fn new(module: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            qualname: name.into(),
            doc: None,
            bases: Vec::new(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn base(mut self, base: Class) -> Self {
        self.bases.push(base);
        self
    }

    /// Adds an instance method. A receiver is prepended to `signature`.
    pub fn method<F>(self, name: &str, signature: Signature, body: F) -> Self
    where
        F: Fn(&Args) -> Result<Value, Raised> + Send + Sync + 'static,
    {
        let function = self.member_function(name, body).with_signature(signature.with_receiver());
        self.function(name, function)
    }

    /// Adds a method that takes no receiver.
    pub fn static_method<F>(self, name: &str, signature: Signature, body: F) -> Self
    where
        F: Fn(&Args) -> Result<Value, Raised> + Send + Sync + 'static,
    {
        let function = self.member_function(name, body).with_signature(signature);
        self.function(name, function)
    }

    /// Adds a prebuilt callable under `name`, as-is.
    pub fn function(self, name: &str, callable: impl Callable + 'static) -> Self {
        self.attribute(name, Attribute::Callable(Arc::new(callable)))
    }

    pub fn data<T: Any + Debug + Send + Sync>(self, name: &str, value: T) -> Self {
        self.attribute(name, Attribute::Data(Value::new(value)))
    }

    pub fn attribute(mut self, name: &str, attribute: Attribute) -> Self {
        self.attributes.insert(name.to_string(), attribute);
        self
    }

    pub fn build(self) -> Class {
        // A class is called like its constructor, minus the receiver.
        let signature = self
            .attributes
            .get(INIT)
            .or_else(|| self.bases.iter().find_map(|base| base.attribute(INIT)))
            .and_then(Attribute::as_callable)
            .map(|init| init.metadata().signature().clone().without_receiver())
            .unwrap_or_default();

        let name = self
            .qualname
            .rsplit('.')
            .next()
            .unwrap_or(&self.qualname)
            .to_string();
        let mut metadata = Metadata::new(self.module, name)
            .with_qualname(self.qualname)
            .with_signature(signature);
        if let Some(doc) = self.doc {
            metadata = metadata.with_doc(doc);
        }

        Class {
            def: Arc::new(ClassDef {
                metadata,
                bases: self.bases,
                attributes: self.attributes,
            }),
        }
    }

    fn member_function<F>(&self, name: &str, body: F) -> Function
    where
        F: Fn(&Args) -> Result<Value, Raised> + Send + Sync + 'static,
    {
        Function::new(self.module.clone(), name, body)
            .with_qualname(format!("{}.{}", self.qualname, name))
    }
}

/// An instance of a [`Class`], with its own mutable fields.
///
/// Cloning an `Instance` yields another handle to the same object.
#[derive(Clone)]
pub struct Instance {
    class: Class,
    fields: Arc<Mutex<BTreeMap<String, Value>>>,
}

impl Instance {
    fn new(class: Class) -> Self {
        Self {
            class,
            fields: Arc::new(Mutex::new(BTreeMap::new())),
        }
    }

    pub fn class(&self) -> &Class {
        &self.class
    }

    /// Reads a field, falling back to a data attribute of the class.
    pub fn get(&self, name: &str) -> Option<Value> {
        let fields = self.fields.lock().unwrap_or_else(PoisonError::into_inner);
        fields
            .get(name)
            .cloned()
            .or_else(|| self.class.attribute(name).and_then(Attribute::as_data).cloned())
    }

    /// Reads a field and clones it out as `T`.
    pub fn get_as<T: Any + Clone>(&self, name: &str) -> Option<T> {
        self.get(name).and_then(|value| value.downcast_ref::<T>().cloned())
    }

    pub fn set<T: Any + Debug + Send + Sync>(&self, name: &str, value: T) {
        self.set_value(name, Value::new(value));
    }

    pub fn set_value(&self, name: &str, value: Value) {
        let mut fields = self.fields.lock().unwrap_or_else(PoisonError::into_inner);
        fields.insert(name.to_string(), value);
    }

    /// Calls a method of the instance's class.
    ///
    /// The instance is passed as the receiver when the method declares one.
    pub fn call_method(&self, name: &str, args: &Args) -> Result<Value, Raised> {
        let method = self.class.method(name).ok_or_else(|| AttributeError {
            class: self.class.name().to_string(),
            name: name.to_string(),
        })?;
        if method.metadata().signature().has_receiver() {
            method.call(&args.with_receiver(Value::new(self.clone())))
        } else {
            method.call(args)
        }
    }

    /// True when both handles refer to the same object.
    pub fn ptr_eq(&self, other: &Instance) -> bool {
        Arc::ptr_eq(&self.fields, &other.fields)
    }
}

impl Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} object>", self.class.metadata().full_name())
    }
}

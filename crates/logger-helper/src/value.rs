//! Type-erased values passed to and returned from callables.

use std::any::Any;
use std::fmt::{self, Debug};
use std::sync::Arc;

/// Anything that can be an argument or a return value.
///
/// Blanket-implemented; the `Debug` form is what ends up in the log.
pub trait Argument: Any + Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + Debug + Send + Sync> Argument for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A cheap-clone, type-erased value.
///
/// The `Debug` output of a `Value` is the `Debug` output of what it holds, so
/// `Value::new("Test")` renders as `"Test"` and `Value::new(10)` as `10`.
#[derive(Clone)]
pub struct Value(Arc<dyn Argument>);

impl Value {
    pub fn new<T: Any + Debug + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// The `()` value, returned by callables with nothing to return.
    pub fn unit() -> Self {
        Self::new(())
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.0).as_any().downcast_ref::<T>()
    }

    pub fn is<T: Any>(&self) -> bool {
        (*self.0).as_any().is::<T>()
    }

    /// Debug-display used for log entries.
    pub fn debug_display(&self) -> String {
        format!("{:?}", self)
    }

    /// True when both values share the same allocation.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&*self.0, f)
    }
}

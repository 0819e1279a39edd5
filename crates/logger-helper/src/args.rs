//! Call-site arguments: positional values followed by named keyword values.

use crate::error::ArgumentError;
use crate::value::Value;
use std::any::{type_name, Any};
use std::fmt::Debug;

/// The arguments supplied at a call site.
///
/// ```rust
/// use logger_helper::Args;
///
/// let args = Args::new().arg(10).arg(20).kwarg("c", 40).kwarg("d", "Test");
/// assert_eq!(args.positional().len(), 2);
/// assert_eq!(args.keyword("d").unwrap().debug_display(), "\"Test\"");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Args {
    positional: Vec<Value>,
    keywords: Vec<(String, Value)>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional argument.
    pub fn arg<T: Any + Debug + Send + Sync>(self, value: T) -> Self {
        self.value(Value::new(value))
    }

    /// Appends an already type-erased positional argument.
    pub fn value(mut self, value: Value) -> Self {
        self.positional.push(value);
        self
    }

    /// Sets a keyword argument, replacing an earlier one with the same name.
    pub fn kwarg<T: Any + Debug + Send + Sync>(self, name: impl Into<String>, value: T) -> Self {
        self.kwvalue(name, Value::new(value))
    }

    pub fn kwvalue(mut self, name: impl Into<String>, value: Value) -> Self {
        let name = name.into();
        match self.keywords.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.keywords.push((name, value)),
        }
        self
    }

    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    /// Keyword arguments in the order they were supplied.
    pub fn keywords(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.keywords.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn keyword(&self, name: &str) -> Option<&Value> {
        self.keywords
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.positional.len() + self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A copy of these arguments with `receiver` prepended as positional argument 0.
    pub fn with_receiver(&self, receiver: Value) -> Args {
        let mut positional = Vec::with_capacity(self.positional.len() + 1);
        positional.push(receiver);
        positional.extend(self.positional.iter().cloned());
        Args {
            positional,
            keywords: self.keywords.clone(),
        }
    }

    /// The value for a parameter declared at `index` with `name`, positional first.
    pub fn get(&self, index: usize, name: &str) -> Option<&Value> {
        self.positional.get(index).or_else(|| self.keyword(name))
    }

    /// Like [`Args::get`], but downcasts and reports what went wrong.
    pub fn require<T: Any>(&self, index: usize, name: &str) -> Result<&T, ArgumentError> {
        let value = self
            .get(index, name)
            .ok_or_else(|| ArgumentError::Missing(name.to_string()))?;
        value.downcast_ref::<T>().ok_or_else(|| ArgumentError::WrongType {
            name: name.to_string(),
            expected: type_name::<T>(),
        })
    }

    /// The receiver of a member call, downcast to `T`.
    pub fn receiver<T: Any>(&self) -> Result<&T, ArgumentError> {
        self.require::<T>(0, "self")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kwarg_replaces_existing() {
        let args = Args::new().kwarg("d", 1).kwarg("e", 2).kwarg("d", "Test");
        let names: Vec<&str> = args.keywords().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["d", "e"]);
        assert_eq!(args.keyword("d").unwrap().debug_display(), "\"Test\"");
    }

    #[test]
    fn test_with_receiver_prepends() {
        let args = Args::new().arg(1).kwarg("k", 2);
        let bound = args.with_receiver(Value::new("me"));
        assert_eq!(bound.positional().len(), 2);
        assert_eq!(bound.receiver::<&str>(), Ok(&"me"));
        assert_eq!(bound.require::<i32>(1, "x"), Ok(&1));
        assert_eq!(args.positional().len(), 1);
    }

    #[test]
    fn test_require_errors() {
        let args = Args::new().arg("text");
        assert_eq!(
            args.require::<i32>(1, "b"),
            Err(ArgumentError::Missing("b".into()))
        );
        assert!(matches!(
            args.require::<i32>(0, "a"),
            Err(ArgumentError::WrongType { .. })
        ));
    }
}

//! Placeholder allocation and the ordered placeholder→value map.

use indexmap::IndexMap;

use crate::value::Value;

/// Prefix of generated placeholder names.
const PARAMETER_PREFIX: &str = "P";

/// Owns the placeholder-naming sequence and the name→value map.
///
/// Placeholders are minted in a strictly increasing sequence per instance
/// and never reused; iteration order of the map is allocation order.
#[derive(Clone, Debug, Default)]
pub struct ParamMap {
    next_index: usize,
    values: IndexMap<String, Value>,
}

impl ParamMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint the next placeholder name: P1, P2, ...
    pub fn next_placeholder(&mut self) -> String {
        self.next_index += 1;
        format!("{PARAMETER_PREFIX}{}", self.next_index)
    }

    /// Insert a binding. A no-op if the key already exists.
    pub fn insert(&mut self, key: String, value: Value) {
        self.values.entry(key).or_insert(value);
    }

    /// Mint a fresh placeholder bound to `value` and return its name.
    pub fn allocate(&mut self, value: impl Into<Value>) -> String {
        let key = self.next_placeholder();
        self.insert(key.clone(), value.into());
        key
    }

    /// The bound value for a placeholder name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// The ordered placeholder→value map.
    pub fn as_map(&self) -> &IndexMap<String, Value> {
        &self.values
    }

    /// Number of bound placeholders.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no placeholder has been bound.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

//! Runtime values and the intermediate results of expression resolution.

use std::any::Any;
use std::sync::Arc;

use crate::error::{SqlWhereError, SqlWhereResult};

/// A resolved scalar, as stored in the parameter map.
///
/// The set is deliberately small and driver-independent so rendered queries
/// and their parameters can be asserted on directly.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Int(v.into())
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl<V: Into<Value>> From<Option<V>> for Value {
    fn from(v: Option<V>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

/// A shared, type-erased instance produced while resolving a member chain.
///
/// Keeps the concrete type name around so downcast failures can say what the
/// instance actually was.
#[derive(Clone)]
pub struct ObjectRef {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl ObjectRef {
    /// Wrap a concrete instance.
    pub fn new<O: Any + Send + Sync>(value: O) -> Self {
        Self {
            value: Arc::new(value),
            type_name: std::any::type_name::<O>(),
        }
    }

    /// Borrow the instance as its concrete type, if it is one.
    pub fn downcast_ref<O: Any>(&self) -> Option<&O> {
        self.value.downcast_ref()
    }

    /// The concrete type name captured at wrap time.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl std::fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ObjectRef").field(&self.type_name).finish()
    }
}

/// What value resolution yields: either a scalar ready for the parameter
/// map, or an instance that a further member access / call will consume.
#[derive(Clone, Debug)]
pub enum Resolved {
    Value(Value),
    Object(ObjectRef),
}

impl Resolved {
    /// A resolved scalar.
    pub fn scalar(v: impl Into<Value>) -> Self {
        Resolved::Value(v.into())
    }

    /// A resolved instance.
    pub fn object<O: Any + Send + Sync>(o: O) -> Self {
        Resolved::Object(ObjectRef::new(o))
    }

    /// Narrow to the scalar value.
    ///
    /// Fails when the chain never narrowed past an instance, since only
    /// scalars can be bound as parameters.
    pub fn into_value(self) -> SqlWhereResult<Value> {
        match self {
            Resolved::Value(v) => Ok(v),
            Resolved::Object(o) => Err(SqlWhereError::unsupported_shape(format!(
                "object of type {} where a scalar value is required",
                o.type_name()
            ))),
        }
    }
}

//! Predicate expression trees.
//!
//! `Expr` is the closed set of node shapes a predicate over a record type
//! can take. Field and call nodes carry their accessor (a typed getter or a
//! bound method) captured at construction time, so resolution never has to
//! introspect record types at runtime.

use std::any::Any;
use std::sync::Arc;

use crate::error::{SqlWhereError, SqlWhereResult};
use crate::ops::Operator;
use crate::value::{Resolved, Value};

/// Accessor bound into a field node at construction time.
///
/// Receives the resolved base instance (`None` for base-less reads such as
/// captured locals) and yields the member's resolved value.
#[derive(Clone)]
pub struct FieldReader(Arc<dyn Fn(Option<&Resolved>) -> SqlWhereResult<Resolved> + Send + Sync>);

impl FieldReader {
    /// Wrap a read closure.
    pub fn new<F>(read: F) -> Self
    where
        F: Fn(Option<&Resolved>) -> SqlWhereResult<Resolved> + Send + Sync + 'static,
    {
        Self(Arc::new(read))
    }

    /// Run the accessor against a resolved base.
    pub fn read(&self, base: Option<&Resolved>) -> SqlWhereResult<Resolved> {
        (self.0)(base)
    }
}

impl std::fmt::Debug for FieldReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FieldReader").field(&"<accessor>").finish()
    }
}

/// Method bound into a call node at construction time.
#[derive(Clone)]
pub struct Invoker(Arc<dyn Fn(&Resolved, &[Resolved]) -> SqlWhereResult<Resolved> + Send + Sync>);

impl Invoker {
    /// Wrap an invoke closure.
    pub fn new<F>(invoke: F) -> Self
    where
        F: Fn(&Resolved, &[Resolved]) -> SqlWhereResult<Resolved> + Send + Sync + 'static,
    {
        Self(Arc::new(invoke))
    }

    /// Run the bound method against a receiver and resolved arguments.
    pub fn invoke(&self, receiver: &Resolved, args: &[Resolved]) -> SqlWhereResult<Resolved> {
        (self.0)(receiver, args)
    }
}

impl std::fmt::Debug for Invoker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Invoker").field(&"<bound method>").finish()
    }
}

/// A node in a predicate expression tree.
#[derive(Clone, Debug)]
pub enum Expr {
    /// Comparison: left op right
    Compare {
        op: Operator,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Logical combination: left AND/OR right
    Logical {
        op: Operator,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Field access: a named member, optionally read off a base instance
    Field {
        name: String,
        base: Option<Box<Expr>>,
        read: Option<FieldReader>,
    },

    /// Constant: a value captured at tree construction
    Const(Resolved),

    /// Conversion: a transparent wrapper recording the coercion target
    Convert {
        inner: Box<Expr>,
        target: &'static str,
    },

    /// Call: a bound method over an optional target and argument nodes
    Call {
        target: Option<Box<Expr>>,
        args: Vec<Expr>,
        invoke: Invoker,
    },
}

fn expect_instance<B: Any>(resolved: &Resolved) -> SqlWhereResult<&B> {
    let obj = match resolved {
        Resolved::Object(o) => o,
        Resolved::Value(_) => {
            return Err(SqlWhereError::unsupported_shape(
                "member access on a scalar value",
            ));
        }
    };
    obj.downcast_ref::<B>().ok_or_else(|| {
        SqlWhereError::unsupported_shape(format!(
            "member access expecting {}, found {}",
            std::any::type_name::<B>(),
            obj.type_name()
        ))
    })
}

impl Expr {
    /// A reference to a field of the record type: resolvable to a name only.
    pub fn field(name: impl Into<String>) -> Self {
        Expr::Field {
            name: name.into(),
            base: None,
            read: None,
        }
    }

    /// A constant scalar.
    pub fn value(v: impl Into<Value>) -> Self {
        Expr::Const(Resolved::Value(v.into()))
    }

    /// A captured instance, for member chains and bound-method calls.
    pub fn object<O: Any + Send + Sync>(o: O) -> Self {
        Expr::Const(Resolved::object(o))
    }

    /// A base-less read: a captured local or other context-free getter.
    pub fn getter<V, F>(name: impl Into<String>, get: F) -> Self
    where
        V: Into<Value>,
        F: Fn() -> V + Send + Sync + 'static,
    {
        Expr::Field {
            name: name.into(),
            base: None,
            read: Some(FieldReader::new(move |_| Ok(Resolved::Value(get().into())))),
        }
    }

    /// A scalar member read off a base instance.
    ///
    /// # Example
    /// ```ignore
    /// let ctx = Expr::object(captured);
    /// let weapon = Expr::field_of(ctx, "weapon", |c: &Captured| c.weapon.clone());
    /// ```
    pub fn field_of<B, V, F>(base: Expr, name: impl Into<String>, get: F) -> Self
    where
        B: Any,
        V: Into<Value>,
        F: Fn(&B) -> V + Send + Sync + 'static,
    {
        Expr::Field {
            name: name.into(),
            base: Some(Box::new(base)),
            read: Some(FieldReader::new(move |instance| {
                let instance = instance.ok_or_else(|| {
                    SqlWhereError::unsupported_shape("field access without an instance")
                })?;
                Ok(Resolved::Value(get(expect_instance::<B>(instance)?).into()))
            })),
        }
    }

    /// An instance-valued member read, for the middle of a member chain.
    pub fn object_of<B, O, F>(base: Expr, name: impl Into<String>, get: F) -> Self
    where
        B: Any,
        O: Any + Send + Sync,
        F: Fn(&B) -> O + Send + Sync + 'static,
    {
        Expr::Field {
            name: name.into(),
            base: Some(Box::new(base)),
            read: Some(FieldReader::new(move |instance| {
                let instance = instance.ok_or_else(|| {
                    SqlWhereError::unsupported_shape("field access without an instance")
                })?;
                Ok(Resolved::object(get(expect_instance::<B>(instance)?)))
            })),
        }
    }

    /// A transparent conversion to `To` (numeric widening, boxing and such).
    pub fn convert<To: 'static>(inner: Expr) -> Self {
        Expr::Convert {
            inner: Box::new(inner),
            target: std::any::type_name::<To>(),
        }
    }

    /// A zero-argument method bound to a target instance.
    pub fn method<B, V, F>(target: Expr, invoke: F) -> Self
    where
        B: Any,
        V: Into<Value>,
        F: Fn(&B) -> V + Send + Sync + 'static,
    {
        Expr::Call {
            target: Some(Box::new(target)),
            args: Vec::new(),
            invoke: Invoker::new(move |receiver, _args| {
                Ok(Resolved::Value(invoke(expect_instance::<B>(receiver)?).into()))
            }),
        }
    }

    /// A target-less call over resolved arguments.
    ///
    /// The first argument doubles as the implicit receiver, so at least one
    /// argument is required at resolve time.
    pub fn call<V, F>(args: Vec<Expr>, invoke: F) -> Self
    where
        V: Into<Value>,
        F: Fn(&[Resolved]) -> SqlWhereResult<V> + Send + Sync + 'static,
    {
        Expr::Call {
            target: None,
            args,
            invoke: Invoker::new(move |_receiver, args| {
                Ok(Resolved::Value(invoke(args)?.into()))
            }),
        }
    }

    /// A comparison between two arbitrary nodes.
    pub fn compare(op: Operator, left: Expr, right: Expr) -> Self {
        Expr::Compare {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Comparison: self = value
    pub fn eq(self, value: impl Into<Value>) -> Self {
        Expr::compare(Operator::Eq, self, Expr::value(value))
    }

    /// Comparison: self != value
    pub fn ne(self, value: impl Into<Value>) -> Self {
        Expr::compare(Operator::Ne, self, Expr::value(value))
    }

    /// Comparison: self > value
    pub fn gt(self, value: impl Into<Value>) -> Self {
        Expr::compare(Operator::Gt, self, Expr::value(value))
    }

    /// Comparison: self < value
    pub fn lt(self, value: impl Into<Value>) -> Self {
        Expr::compare(Operator::Lt, self, Expr::value(value))
    }

    /// Comparison: self >= value
    pub fn gte(self, value: impl Into<Value>) -> Self {
        Expr::compare(Operator::Gte, self, Expr::value(value))
    }

    /// Comparison: self <= value
    pub fn lte(self, value: impl Into<Value>) -> Self {
        Expr::compare(Operator::Lte, self, Expr::value(value))
    }

    /// Logical combination: self AND other
    pub fn and(self, other: Expr) -> Self {
        Expr::Logical {
            op: Operator::And,
            left: Box::new(self),
            right: Box::new(other),
        }
    }

    /// Logical combination: self OR other
    pub fn or(self, other: Expr) -> Self {
        Expr::Logical {
            op: Operator::Or,
            left: Box::new(self),
            right: Box::new(other),
        }
    }

    /// The node shape's name, used in error payloads.
    pub fn kind(&self) -> &'static str {
        match self {
            Expr::Compare { .. } => "comparison",
            Expr::Logical { .. } => "logical combination",
            Expr::Field { .. } => "field access",
            Expr::Const(_) => "constant",
            Expr::Convert { .. } => "conversion",
            Expr::Call { .. } => "call",
        }
    }
}

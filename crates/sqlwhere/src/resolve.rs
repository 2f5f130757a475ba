//! Field-name and runtime-value resolution over predicate trees.
//!
//! Both walkers are eager: a fluent call resolves everything it needs before
//! touching query state, so captured values behave like a snapshot taken at
//! the call.

use crate::error::{SqlWhereError, SqlWhereResult};
use crate::expr::Expr;
use crate::value::Resolved;

/// Resolve the field name a node refers to.
///
/// Only field accesses qualify, possibly wrapped in conversions (boxing a
/// field selector inserts one).
pub fn resolve_name(expr: &Expr) -> SqlWhereResult<&str> {
    match expr {
        Expr::Field { name, .. } => Ok(name),
        Expr::Convert { inner, .. } => resolve_name(inner),
        other => Err(SqlWhereError::unsupported_shape(other.kind())),
    }
}

/// Resolve a node to its concrete runtime value.
pub fn resolve_value(expr: &Expr) -> SqlWhereResult<Resolved> {
    match expr {
        Expr::Const(v) => Ok(v.clone()),
        Expr::Convert { inner, .. } => resolve_value(inner),
        Expr::Field { base, read, .. } => {
            let read = read.as_ref().ok_or_else(|| {
                SqlWhereError::unsupported_shape("field access without a bound accessor")
            })?;
            let instance = match base {
                Some(base) => Some(resolve_value(base)?),
                None => None,
            };
            read.read(instance.as_ref())
        }
        Expr::Call {
            target,
            args,
            invoke,
        } => {
            let args: Vec<Resolved> = args.iter().map(resolve_value).collect::<Result<_, _>>()?;
            let receiver = match target {
                Some(target) => resolve_value(target)?,
                None => args.first().cloned().ok_or_else(|| {
                    SqlWhereError::unsupported_shape("call with neither target nor arguments")
                })?,
            };
            invoke.invoke(&receiver, &args)
        }
        other => Err(SqlWhereError::unsupported_shape(other.kind())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    struct Captured {
        weapon: String,
        owner: Owner,
    }

    struct Owner {
        id: i64,
    }

    fn captured() -> Captured {
        Captured {
            weapon: "Masamune".to_string(),
            owner: Owner { id: 7 },
        }
    }

    #[test]
    fn test_name_of_field() {
        assert_eq!(resolve_name(&Expr::field("first_name")).unwrap(), "first_name");
    }

    #[test]
    fn test_name_through_conversion() {
        let expr = Expr::convert::<i64>(Expr::field("id"));
        assert_eq!(resolve_name(&expr).unwrap(), "id");

        let nested = Expr::convert::<f64>(Expr::convert::<i64>(Expr::field("id")));
        assert_eq!(resolve_name(&nested).unwrap(), "id");
    }

    #[test]
    fn test_name_rejects_other_shapes() {
        let err = resolve_name(&Expr::value(10)).unwrap_err();
        assert!(matches!(
            err,
            SqlWhereError::UnsupportedShape(ref s) if s == "constant"
        ));
    }

    #[test]
    fn test_value_of_constant() {
        let resolved = resolve_value(&Expr::value(10)).unwrap();
        assert_eq!(resolved.into_value().unwrap(), Value::Int(10));
    }

    #[test]
    fn test_value_through_conversion() {
        let expr = Expr::convert::<i64>(Expr::value(10i32));
        let resolved = resolve_value(&expr).unwrap();
        assert_eq!(resolved.into_value().unwrap(), Value::Int(10));
    }

    #[test]
    fn test_value_of_captured_local() {
        let weapon = "Masamune".to_string();
        let expr = Expr::getter("weapon", move || weapon.clone());
        let resolved = resolve_value(&expr).unwrap();
        assert_eq!(
            resolved.into_value().unwrap(),
            Value::Text("Masamune".to_string())
        );
    }

    #[test]
    fn test_value_of_member_read() {
        let expr = Expr::field_of(Expr::object(captured()), "weapon", |c: &Captured| {
            c.weapon.clone()
        });
        let resolved = resolve_value(&expr).unwrap();
        assert_eq!(
            resolved.into_value().unwrap(),
            Value::Text("Masamune".to_string())
        );
    }

    #[test]
    fn test_value_of_member_chain() {
        let owner = Expr::object_of(Expr::object(captured()), "owner", |c: &Captured| Owner {
            id: c.owner.id,
        });
        let expr = Expr::field_of(owner, "id", |o: &Owner| o.id);
        let resolved = resolve_value(&expr).unwrap();
        assert_eq!(resolved.into_value().unwrap(), Value::Int(7));
    }

    #[test]
    fn test_value_of_bound_method() {
        let expr = Expr::method(Expr::object(captured()), |c: &Captured| {
            c.weapon.to_uppercase()
        });
        let resolved = resolve_value(&expr).unwrap();
        assert_eq!(
            resolved.into_value().unwrap(),
            Value::Text("MASAMUNE".to_string())
        );
    }

    #[test]
    fn test_value_of_call_over_arguments() {
        let expr = Expr::call(vec![Expr::value(2i64), Expr::value(3i64)], |args| {
            let mut sum = 0i64;
            for arg in args {
                match arg {
                    Resolved::Value(Value::Int(n)) => sum += n,
                    other => {
                        return Err(SqlWhereError::unsupported_shape(format!(
                            "non-integer argument: {other:?}"
                        )));
                    }
                }
            }
            Ok(sum)
        });
        let resolved = resolve_value(&expr).unwrap();
        assert_eq!(resolved.into_value().unwrap(), Value::Int(5));
    }

    #[test]
    fn test_call_requires_target_or_argument() {
        let expr = Expr::call(Vec::new(), |_| Ok(Value::Null));
        let err = resolve_value(&expr).unwrap_err();
        assert!(matches!(
            err,
            SqlWhereError::UnsupportedShape(ref s) if s.contains("neither target nor arguments")
        ));
    }

    #[test]
    fn test_value_rejects_bare_field_reference() {
        let err = resolve_value(&Expr::field("id")).unwrap_err();
        assert!(matches!(
            err,
            SqlWhereError::UnsupportedShape(ref s) if s.contains("without a bound accessor")
        ));
    }

    #[test]
    fn test_value_rejects_wrong_instance_type() {
        let expr = Expr::field_of(Expr::object(42i64), "weapon", |c: &Captured| {
            c.weapon.clone()
        });
        let err = resolve_value(&expr).unwrap_err();
        assert!(matches!(
            err,
            SqlWhereError::UnsupportedShape(ref s) if s.contains("expecting")
        ));
    }

    #[test]
    fn test_value_is_snapshotted_at_resolution() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicI64, Ordering};

        let counter = Arc::new(AtomicI64::new(1));
        let reader = Arc::clone(&counter);
        let expr = Expr::getter("counter", move || reader.load(Ordering::SeqCst));

        let first = resolve_value(&expr).unwrap().into_value().unwrap();
        counter.store(99, Ordering::SeqCst);
        let second = resolve_value(&expr).unwrap().into_value().unwrap();

        assert_eq!(first, Value::Int(1));
        assert_eq!(second, Value::Int(99));
    }
}

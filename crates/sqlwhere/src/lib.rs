//! # sqlwhere
//!
//! Typed predicate expressions rendered as parameterized SQL fragments.
//!
//! Filters over a record type are written as expression trees instead of
//! SQL text. The builder resolves field names and runtime values out of
//! each tree, binds every value to a generated placeholder, and renders a
//! `WHERE`/`ORDER BY`/`LIMIT`/`OFFSET` fragment through a dialect adapter.
//!
//! ## Features
//!
//! - **Typed predicates**: conditions are expression trees over a record type, not strings
//! - **Parameterized output**: every bound value gets a generated placeholder (`P1`, `P2`, ...)
//! - **Deterministic ordering**: conditions, sort terms and parameters keep call order
//! - **Pluggable dialects**: identifier and bind-marker formatting sit behind [`SqlAdapter`]
//! - **No execution**: rendering stops at the fragment; run it with your own driver
//!
//! ## Building a filter
//!
//! ```ignore
//! use sqlwhere::{Expr, Order, SqlWhere, Value};
//!
//! let mut filter = SqlWhere::<Employee>::new();
//! filter
//!     .and(Expr::field("id").lt(10))?
//!     .and(Expr::field("weapon").eq("Masamune"))?
//!     .order_by(Expr::field("id"), Order::Desc)?
//!     .limit(10);
//!
//! assert_eq!(
//!     filter.query(),
//!     "WHERE `id` < @P1 AND `weapon` = @P2 ORDER BY `id` DESC LIMIT 10",
//! );
//! assert_eq!(filter.parameters()["P1"], Value::Int(10));
//! ```
//!
//! One comparison per `and` call; compound `a && b` trees are rejected so
//! the condition sequence always mirrors the call sequence.

pub mod adapter;
pub mod builder;
pub mod error;
pub mod expr;
pub mod ops;
pub mod params;
pub mod resolve;
pub mod state;
pub mod value;

pub use adapter::{MySqlAdapter, SqlAdapter};
pub use builder::{Order, SqlWhere};
pub use error::{SqlWhereError, SqlWhereResult};
pub use expr::{Expr, FieldReader, Invoker};
pub use ops::{Operator, sql_operator};
pub use params::ParamMap;
pub use resolve::{resolve_name, resolve_value};
pub use state::QueryState;
pub use value::{ObjectRef, Resolved, Value};

// Re-export the ordered map type returned by `SqlWhere::parameters`.
pub use indexmap::IndexMap;

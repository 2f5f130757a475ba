//! The fluent builder over one query's worth of state.
//!
//! [`SqlWhere`] owns a [`QueryState`] and a dialect adapter, delegates
//! predicate handling to the resolvers in [`crate::resolve`], and renders
//! the accumulated fragment on demand. Rendering is a pure projection:
//! `query()` can be called any number of times and always reflects the
//! latest state.

use std::marker::PhantomData;

use indexmap::IndexMap;

use crate::adapter::{MySqlAdapter, SqlAdapter};
use crate::error::{SqlWhereError, SqlWhereResult};
use crate::expr::Expr;
use crate::ops::sql_operator;
use crate::resolve::{resolve_name, resolve_value};
use crate::state::QueryState;
use crate::value::Value;

/// Sort direction for [`SqlWhere::order_by`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

/// Fluent builder translating predicates over a record type `T` into a
/// parameterized `WHERE`/`ORDER BY`/`LIMIT`/`OFFSET` fragment.
///
/// Each instance owns its own condition sequence and placeholder counter;
/// instances are fully independent of one another. A failing call leaves
/// everything accumulated by earlier calls intact and adds nothing itself.
///
/// # Example
/// ```ignore
/// let mut filter = SqlWhere::<Employee>::new();
/// filter
///     .and(Expr::field("id").lt(10))?
///     .and(Expr::field("weapon").eq("Masamune"))?
///     .limit(10);
///
/// assert_eq!(filter.query(), "WHERE `id` < @P1 AND `weapon` = @P2 LIMIT 10");
/// ```
pub struct SqlWhere<T, A: SqlAdapter = MySqlAdapter> {
    state: QueryState,
    adapter: A,
    record: PhantomData<fn(T)>,
}

impl<T> SqlWhere<T> {
    /// Create an empty builder over the default MySQL adapter.
    pub fn new() -> Self {
        Self::with_adapter(MySqlAdapter)
    }

    /// Create a builder from an initial predicate.
    ///
    /// Equivalent to [`SqlWhere::new`] followed by one [`SqlWhere::and`]
    /// call.
    pub fn matching(predicate: Expr) -> SqlWhereResult<Self> {
        let mut builder = Self::new();
        builder.and(predicate)?;
        Ok(builder)
    }
}

impl<T> Default for SqlWhere<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A: SqlAdapter> SqlWhere<T, A> {
    /// Create an empty builder over a specific dialect adapter.
    pub fn with_adapter(adapter: A) -> Self {
        Self {
            state: QueryState::new(),
            adapter,
            record: PhantomData,
        }
    }

    /// Append one comparison condition.
    ///
    /// The predicate must be a single comparison whose left side names a
    /// field and whose right side resolves to a value. Compound predicates
    /// are rejected; call `and` once per condition instead:
    ///
    /// ```ignore
    /// // rejected: Expr::field("id").gt(123).and(Expr::field("name").eq("John"))
    /// builder.and(Expr::field("id").gt(123))?.and(Expr::field("name").eq("John"))?;
    /// ```
    ///
    /// The right side is resolved eagerly, so captured variables are read
    /// at this call and later mutation does not reach the query.
    pub fn and(&mut self, predicate: Expr) -> SqlWhereResult<&mut Self> {
        let (op, left, right) = match predicate {
            Expr::Compare { op, left, right } => (op, left, right),
            other => return Err(SqlWhereError::invalid_predicate(other.kind())),
        };
        let field = self.adapter.format_field(resolve_name(&left)?);
        let value = resolve_value(&right)?.into_value()?;
        let op = sql_operator(op)?;

        let placeholder = self.state.params_mut().allocate(value);
        let marker = self.adapter.format_parameter(&placeholder);
        self.state.push_condition(format!("{field} {op} {marker}"));
        Ok(self)
    }

    /// Append one membership condition: `field IN (...)`.
    ///
    /// One placeholder is allocated per value, preserving the input order.
    /// An empty value sequence renders verbatim as `field IN ()`, which
    /// most engines reject; callers that can hit the empty case should
    /// skip the call instead.
    pub fn in_list<V>(
        &mut self,
        field: Expr,
        values: impl IntoIterator<Item = V>,
    ) -> SqlWhereResult<&mut Self>
    where
        V: Into<Value>,
    {
        let field = self.adapter.format_field(resolve_name(&field)?);

        let markers: Vec<String> = values
            .into_iter()
            .map(|value| {
                let placeholder = self.state.params_mut().allocate(value);
                self.adapter.format_parameter(&placeholder)
            })
            .collect();
        self.state
            .push_condition(format!("{field} IN ({})", markers.join(",")));
        Ok(self)
    }

    /// Append one sort term. Terms keep their call order in the output.
    pub fn order_by(&mut self, field: Expr, order: Order) -> SqlWhereResult<&mut Self> {
        let field = self.adapter.format_field(resolve_name(&field)?);
        let term = match order {
            Order::Asc => field,
            Order::Desc => format!("{field} DESC"),
        };
        self.state.push_sort_term(term);
        Ok(self)
    }

    /// Set the row limit. Last write wins; 0 clears the segment.
    pub fn limit(&mut self, n: u64) -> &mut Self {
        self.state.set_limit(n);
        self
    }

    /// Set the row offset. Last write wins; 0 clears the segment.
    pub fn offset(&mut self, n: u64) -> &mut Self {
        self.state.set_offset(n);
        self
    }

    /// Render the SQL fragment from the current state.
    ///
    /// Absent segments are omitted entirely; an untouched builder renders
    /// the empty string.
    pub fn query(&self) -> String {
        let rendered = self.adapter.assemble(
            &self.state.where_clause(),
            &self.state.order_clause(),
            &self.state.limit_clause(),
            &self.state.offset_clause(),
        );

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "sqlwhere.sql",
            param_count = self.state.params().len(),
            sql = %rendered,
        );

        rendered
    }

    /// The placeholder→value bindings, in allocation order.
    ///
    /// The key set is exactly the set of placeholder names appearing in
    /// [`SqlWhere::query`].
    pub fn parameters(&self) -> &IndexMap<String, Value> {
        self.state.params().as_map()
    }
}

impl<T, A: SqlAdapter + Clone> Clone for SqlWhere<T, A> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            adapter: self.adapter.clone(),
            record: PhantomData,
        }
    }
}

impl<T, A: SqlAdapter> std::fmt::Debug for SqlWhere<T, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqlWhere").field("state", &self.state).finish()
    }
}

//! Per-query accumulation of conditions, sort terms, limit and offset.

use crate::params::ParamMap;

/// The mutable accumulator behind one builder instance.
///
/// Conditions and sort terms are append-only: once pushed, a fragment is
/// never edited or removed. `" AND "` separators are stored as elements of
/// the condition sequence itself, so rendering is a plain concatenation.
#[derive(Clone, Debug, Default)]
pub struct QueryState {
    conditions: Vec<String>,
    sort_terms: Vec<String>,
    limit: Option<u64>,
    offset: Option<u64>,
    params: ParamMap,
}

impl QueryState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rendered condition, preceded by an `" AND "` separator when
    /// it is not the first.
    pub fn push_condition(&mut self, condition: String) {
        if !self.conditions.is_empty() {
            self.conditions.push(" AND ".to_string());
        }
        self.conditions.push(condition);
    }

    /// Append a rendered sort term.
    pub fn push_sort_term(&mut self, term: String) {
        self.sort_terms.push(term);
    }

    /// Set the limit. Last write wins; 0 clears it.
    pub fn set_limit(&mut self, n: u64) {
        self.limit = (n != 0).then_some(n);
    }

    /// Set the offset. Last write wins; 0 clears it.
    pub fn set_offset(&mut self, n: u64) {
        self.offset = (n != 0).then_some(n);
    }

    /// The parameter map.
    pub fn params(&self) -> &ParamMap {
        &self.params
    }

    /// The parameter map, for allocation.
    pub fn params_mut(&mut self) -> &mut ParamMap {
        &mut self.params
    }

    /// `WHERE …` over the accumulated conditions, or empty.
    pub fn where_clause(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.conditions.concat())
        }
    }

    /// `ORDER BY …` over the accumulated sort terms, or empty.
    pub fn order_clause(&self) -> String {
        if self.sort_terms.is_empty() {
            String::new()
        } else {
            format!("ORDER BY {}", self.sort_terms.join(", "))
        }
    }

    /// `LIMIT n`, or empty when unset.
    pub fn limit_clause(&self) -> String {
        match self.limit {
            Some(n) => format!("LIMIT {n}"),
            None => String::new(),
        }
    }

    /// `OFFSET n`, or empty when unset.
    pub fn offset_clause(&self) -> String {
        match self.offset {
            Some(n) => format!("OFFSET {n}"),
            None => String::new(),
        }
    }
}

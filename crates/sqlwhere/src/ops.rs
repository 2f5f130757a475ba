//! The closed operator table mapping comparison/logical operators to SQL.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{SqlWhereError, SqlWhereResult};

/// Comparison and logical operators a predicate node can carry.
///
/// The set is closed; extending it means adding a variant and a row in the
/// operator table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal: `=`
    Eq,
    /// Not equal: `!=`
    Ne,
    /// Greater than: `>`
    Gt,
    /// Less than: `<`
    Lt,
    /// Greater than or equal: `>=`
    Gte,
    /// Less than or equal: `<=`
    Lte,
    /// Logical AND
    And,
    /// Logical OR
    Or,
}

fn operator_table() -> &'static HashMap<Operator, &'static str> {
    static TABLE: OnceLock<HashMap<Operator, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| {
        HashMap::from([
            (Operator::Eq, "="),
            (Operator::Ne, "!="),
            (Operator::Gt, ">"),
            (Operator::Lt, "<"),
            (Operator::Gte, ">="),
            (Operator::Lte, "<="),
            (Operator::And, "AND"),
            (Operator::Or, "OR"),
        ])
    })
}

/// Look up the SQL token for an operator.
pub fn sql_operator(op: Operator) -> SqlWhereResult<&'static str> {
    operator_table()
        .get(&op)
        .copied()
        .ok_or(SqlWhereError::UnsupportedOperator(op))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_tokens() {
        assert_eq!(sql_operator(Operator::Eq).unwrap(), "=");
        assert_eq!(sql_operator(Operator::Ne).unwrap(), "!=");
        assert_eq!(sql_operator(Operator::Gt).unwrap(), ">");
        assert_eq!(sql_operator(Operator::Lt).unwrap(), "<");
        assert_eq!(sql_operator(Operator::Gte).unwrap(), ">=");
        assert_eq!(sql_operator(Operator::Lte).unwrap(), "<=");
    }

    #[test]
    fn test_logical_tokens() {
        assert_eq!(sql_operator(Operator::And).unwrap(), "AND");
        assert_eq!(sql_operator(Operator::Or).unwrap(), "OR");
    }

    #[test]
    fn test_table_is_complete() {
        assert_eq!(operator_table().len(), 8);
    }
}

//! Dialect formatting behind clause assembly.
//!
//! The adapter is the only dialect-aware piece of the pipeline: it formats
//! identifiers and bind markers and joins the rendered clause segments.
//! Swapping adapters changes formatting only, never how conditions are
//! resolved or accumulated.

use heck::ToSnakeCase;

/// Formatting capabilities one SQL dialect implements.
///
/// Adapters are stateless and chosen once, at builder construction.
pub trait SqlAdapter {
    /// Apply identifier quoting and casing to a field name.
    fn format_field(&self, name: &str) -> String;

    /// Apply the bind-marker syntax to a placeholder name.
    fn format_parameter(&self, name: &str) -> String;

    /// Join the non-empty clause segments with single spaces.
    fn assemble(&self, conditions: &str, order: &str, limit: &str, offset: &str) -> String {
        let segments = [conditions, order, limit, offset];
        let non_empty: Vec<&str> = segments.into_iter().filter(|s| !s.is_empty()).collect();
        non_empty.join(" ")
    }
}

/// MySQL-style formatting: backtick-quoted snake_case identifiers and
/// `@`-prefixed bind markers.
#[derive(Clone, Copy, Debug, Default)]
pub struct MySqlAdapter;

impl SqlAdapter for MySqlAdapter {
    fn format_field(&self, name: &str) -> String {
        format!("`{}`", name.to_snake_case())
    }

    fn format_parameter(&self, name: &str) -> String {
        format!("@{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_is_quoted_and_snake_cased() {
        let adapter = MySqlAdapter;
        assert_eq!(adapter.format_field("FirstName"), "`first_name`");
        assert_eq!(adapter.format_field("firstName"), "`first_name`");
        assert_eq!(adapter.format_field("first_name"), "`first_name`");
    }

    #[test]
    fn test_parameter_marker() {
        assert_eq!(MySqlAdapter.format_parameter("P1"), "@P1");
    }

    #[test]
    fn test_assemble_joins_all_segments() {
        let sql = MySqlAdapter.assemble("WHERE `id` = @P1", "ORDER BY `id`", "LIMIT 10", "OFFSET 5");
        assert_eq!(sql, "WHERE `id` = @P1 ORDER BY `id` LIMIT 10 OFFSET 5");
    }

    #[test]
    fn test_assemble_skips_empty_segments() {
        let sql = MySqlAdapter.assemble("WHERE `id` = @P1", "", "LIMIT 10", "");
        assert_eq!(sql, "WHERE `id` = @P1 LIMIT 10");

        let sql = MySqlAdapter.assemble("", "ORDER BY `id`", "", "");
        assert_eq!(sql, "ORDER BY `id`");
    }

    #[test]
    fn test_assemble_of_nothing_is_empty() {
        assert_eq!(MySqlAdapter.assemble("", "", "", ""), "");
    }
}

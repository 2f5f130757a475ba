//! Swapping the dialect adapter changes formatting, nothing else.
//!
//! Run with:
//!   cargo run --example custom_adapter -p sqlwhere

use sqlwhere::{Expr, MySqlAdapter, Order, SqlAdapter, SqlWhere, SqlWhereResult};

/// ANSI-style formatting: double-quoted identifiers, `:`-prefixed markers.
#[derive(Clone, Copy, Debug, Default)]
struct AnsiAdapter;

impl SqlAdapter for AnsiAdapter {
    fn format_field(&self, name: &str) -> String {
        format!("\"{name}\"")
    }

    fn format_parameter(&self, name: &str) -> String {
        format!(":{name}")
    }
}

#[allow(dead_code)]
#[derive(Debug)]
struct Product {
    id: i64,
    price: i64,
    category: String,
}

impl Product {
    fn id() -> Expr {
        Expr::field("id")
    }

    fn price() -> Expr {
        Expr::field("price")
    }

    fn category() -> Expr {
        Expr::field("category")
    }
}

fn build<A: SqlAdapter>(adapter: A) -> SqlWhereResult<SqlWhere<Product, A>> {
    let mut filter = SqlWhere::with_adapter(adapter);
    filter
        .and(Product::price().gte(100))?
        .in_list(Product::category(), ["tools", "parts"])?
        .order_by(Product::id(), Order::Asc)?
        .limit(20);
    Ok(filter)
}

fn main() -> SqlWhereResult<()> {
    let mysql = build(MySqlAdapter)?;
    println!("mysql: {}", mysql.query());

    let ansi = build(AnsiAdapter)?;
    println!("ansi:  {}", ansi.query());

    println!("\nparameters (either adapter):");
    for (name, value) in mysql.parameters() {
        println!("  {name} = {value:?}");
    }

    Ok(())
}

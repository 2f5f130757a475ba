//! Filter building over a sample record type.
//!
//! Run with:
//!   cargo run --example basic -p sqlwhere

use sqlwhere::{Expr, Order, SqlWhere, SqlWhereResult};

#[allow(dead_code)]
#[derive(Debug)]
struct Employee {
    id: i64,
    first_name: String,
    weapon: String,
    created_at: i64,
}

impl Employee {
    fn id() -> Expr {
        Expr::field("id")
    }

    fn first_name() -> Expr {
        Expr::field("first_name")
    }

    fn weapon() -> Expr {
        Expr::field("weapon")
    }

    fn created_at() -> Expr {
        Expr::field("created_at")
    }
}

fn main() -> SqlWhereResult<()> {
    let names = vec!["A", "BBB", "CCCC"];

    let mut filter = SqlWhere::<Employee>::new();
    filter
        .and(Employee::created_at().gt(1_760_000_000i64))?
        .in_list(Employee::first_name(), names)?
        .order_by(Employee::id(), Order::Desc)?
        .order_by(Employee::first_name(), Order::Asc)?
        .offset(10)
        .limit(10);

    println!("query:\n  {}", filter.query());
    println!("parameters:");
    for (name, value) in filter.parameters() {
        println!("  {name} = {value:?}");
    }

    // Captured variables are read when the call is made, so the filter
    // holds a snapshot of `weapon`.
    let weapon = "Masamune".to_string();
    let by_weapon = SqlWhere::<Employee>::matching(Expr::compare(
        sqlwhere::Operator::Eq,
        Employee::weapon(),
        Expr::getter("weapon", move || weapon.clone()),
    ))?;

    println!("\nby weapon:\n  {}", by_weapon.query());
    println!("parameters:");
    for (name, value) in by_weapon.parameters() {
        println!("  {name} = {value:?}");
    }

    Ok(())
}

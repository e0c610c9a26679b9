//! Builds a users search and prints the CQL statement plus the JSON document
//! that would be bound as its parameter. Executing the statement is the
//! driver's job, not this crate's.

use lucex::prelude::*;

fn main() -> Result<(), lucex::SerializeError> {
    let expr = Expr::new()
        .filter([Rule::boolean_must([
            Rule::wildcard("name", "Ali*"),
            Rule::wildcard("food", "tu*"),
        ])])
        .sort_by("age", true);

    let statement = "SELECT name, gender, animal, age, food FROM users WHERE expr(users_index, ?)";
    let bound = expr.to_bytes()?;

    println!("statement: {statement}");
    println!("parameter: {expr}");
    println!("bound bytes: {}", bound.len());

    Ok(())
}

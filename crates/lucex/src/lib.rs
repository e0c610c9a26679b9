//! Fluent builder for Cassandra Lucene index search expressions.
//!
//! Builds the JSON document consumed by the Lucene index plugin through
//! `SELECT ... WHERE expr(<index_name>, ?)`. The crate owns only the query
//! algebra and its canonical encoding; transport, execution, and result
//! iteration belong to the CQL driver.
//!
//! ```rust,ignore
//! use lucex::prelude::*;
//!
//! let expr = Expr::new()
//!     .filter([Rule::boolean_must([
//!         Rule::wildcard("name", "Ali*"),
//!         Rule::wildcard("food", "tu*"),
//!     ])])
//!     .sort_by("age", true);
//!
//! // bind `expr.to_bytes()?` as the `?` parameter of the CQL statement
//! let json = expr.to_json()?;
//! ```

// public exports are one module level down
pub mod expr;
pub mod rule;
pub mod serialize;
pub mod sort;
pub mod value;

pub use expr::Expr;
pub use rule::Rule;
pub use serialize::SerializeError;
pub use sort::Sort;
pub use value::Value;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, encoders, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{expr::Expr, rule::Rule, sort::Sort, value::Value};
}

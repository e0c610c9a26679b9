use crate::serialize::is_false;
use serde::Serialize;

///
/// Sort
///
/// One per-field sort directive. `reverse` is omitted from the encoded
/// document when false, matching the plugin default of ascending order.
///
/// Field uniqueness within a sort list is an expression-level invariant,
/// enforced by `Expr::sort_by`, not here.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Sort {
    pub field: String,
    #[serde(skip_serializing_if = "is_false")]
    pub reverse: bool,
}

impl Sort {
    #[must_use]
    pub fn new(field: impl Into<String>, reverse: bool) -> Self {
        Self {
            field: field.into(),
            reverse,
        }
    }
}

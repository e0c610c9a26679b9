#[cfg(test)]
mod tests;

use crate::{
    rule::Rule,
    serialize::{self, SerializeError, is_false},
    sort::Sort,
};
use serde::Serialize;
use std::fmt;

///
/// Expr
///
/// Root search expression: query rules, filter rules, sort directives, and
/// the index refresh flag. All four are independent and independently
/// resettable; each is omitted from the encoded document when empty/false.
/// Output key order is fixed: `query`, `filter`, `sort`, `refresh`.
///
/// Plain mutable value with no internal synchronization. The intended usage
/// is build-then-serialize on one thread; callers sharing an `Expr` across
/// threads must provide their own guard.
///

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Expr {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    query: Vec<Rule>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    filter: Vec<Rule>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    sort: Vec<Sort>,
    #[serde(skip_serializing_if = "is_false")]
    refresh: bool,
}

impl Expr {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------

    #[must_use]
    pub fn query_rules(&self) -> &[Rule] {
        &self.query
    }

    #[must_use]
    pub fn filter_rules(&self) -> &[Rule] {
        &self.filter
    }

    #[must_use]
    pub fn sorts(&self) -> &[Sort] {
        &self.sort
    }

    #[must_use]
    pub const fn is_refresh(&self) -> bool {
        self.refresh
    }

    // ------------------------------------------------------------------
    // Builders
    // ------------------------------------------------------------------

    /// Append query rules in argument order. `None` entries are skipped.
    #[must_use]
    pub fn query<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Option<Rule>>,
    {
        self.query.extend(rules.into_iter().filter_map(Into::into));
        self
    }

    /// Append filter rules in argument order. `None` entries are skipped.
    #[must_use]
    pub fn filter<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Option<Rule>>,
    {
        self.filter.extend(rules.into_iter().filter_map(Into::into));
        self
    }

    /// Add a sort directive for `field`.
    ///
    /// At most one directive per field: if the field is already sorted, its
    /// `reverse` flag is updated in place and list order is preserved.
    #[must_use]
    pub fn sort_by(mut self, field: impl AsRef<str>, reverse: bool) -> Self {
        let field = field.as_ref();
        match self.sort.iter_mut().find(|s| s.field == field) {
            Some(existing) => existing.reverse = reverse,
            None => self.sort.push(Sort::new(field, reverse)),
        }
        self
    }

    /// Enable or disable forced index refresh before the search runs.
    #[must_use]
    pub const fn refresh(mut self, enabled: bool) -> Self {
        self.refresh = enabled;
        self
    }

    // ------------------------------------------------------------------
    // Resets
    // ------------------------------------------------------------------

    #[must_use]
    pub fn reset_query(mut self) -> Self {
        self.query.clear();
        self
    }

    #[must_use]
    pub fn reset_filter(mut self) -> Self {
        self.filter.clear();
        self
    }

    #[must_use]
    pub fn reset_sort(mut self) -> Self {
        self.sort.clear();
        self
    }

    /// Clear all rules and sorts and disable refresh.
    #[must_use]
    pub fn reset(self) -> Self {
        self.reset_filter().reset_query().reset_sort().refresh(false)
    }

    // ------------------------------------------------------------------
    // Encoding
    // ------------------------------------------------------------------

    /// Canonical JSON document for this expression.
    pub fn to_json(&self) -> Result<String, SerializeError> {
        serialize::to_string(self)
    }

    /// Canonical JSON document as raw bytes, for binding the expression as
    /// a CQL statement parameter. Byte-identical to [`Expr::to_json`].
    pub fn to_bytes(&self) -> Result<Vec<u8>, SerializeError> {
        serialize::to_vec(self)
    }
}

impl fmt::Display for Expr {
    /// Renders the canonical JSON document.
    ///
    /// `Display` cannot propagate an encoder failure, so it degrades to the
    /// empty string; fallible callers use [`Expr::to_json`] instead.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json().unwrap_or_default())
    }
}

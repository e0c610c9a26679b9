
use crate::{
    serialize::{is_false, is_zero},
    value::Value,
};
use serde::Serialize;

///
/// Rule
///
/// One query or filter clause, tagged on `type` in the output document.
/// Rules are immutable once constructed; composition happens only through
/// the `boolean_*` constructors, which nest rules by value.
///
/// Constructors perform no validation: field names and payloads are passed
/// through to the index verbatim, matching the plugin's own behavior of
/// rejecting malformed clauses server-side.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Rule {
    Match {
        field: String,
        value: Value,
    },
    Prefix {
        field: String,
        value: Value,
    },
    Fuzzy {
        field: String,
        value: Value,
    },
    Regexp {
        field: String,
        value: String,
    },
    Wildcard {
        field: String,
        value: String,
    },
    Phrase {
        field: String,
        values: Vec<Value>,
        #[serde(skip_serializing_if = "is_zero")]
        slop: u32,
    },
    Contains {
        field: String,
        values: Vec<Value>,
    },
    Range {
        field: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        lower: Option<Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        upper: Option<Value>,
        #[serde(skip_serializing_if = "is_false")]
        include_lower: bool,
        #[serde(skip_serializing_if = "is_false")]
        include_upper: bool,
    },
    All,
    Boolean {
        #[serde(skip_serializing_if = "Vec::is_empty")]
        must: Vec<Rule>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        should: Vec<Rule>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        not: Vec<Rule>,
    },
}

impl Rule {
    /// Match clause: exact value equality on one field.
    #[must_use]
    pub fn match_(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Match {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Prefix clause.
    #[must_use]
    pub fn prefix(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Prefix {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Fuzzy clause (Damerau-Levenshtein similarity).
    ///
    /// <https://github.com/Stratio/cassandra-lucene-index/blob/branch-3.0.10/doc/documentation.rst#fuzzy-search>
    #[must_use]
    pub fn fuzzy(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Fuzzy {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Regexp clause over a string pattern.
    ///
    /// <https://github.com/Stratio/cassandra-lucene-index/blob/branch-3.0.10/doc/documentation.rst#regexp-search>
    #[must_use]
    pub fn regexp(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Regexp {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Wildcard clause (`*` and `?` metacharacters).
    ///
    /// <https://github.com/Stratio/cassandra-lucene-index/blob/branch-3.0.10/doc/documentation.rst#wildcard-search>
    #[must_use]
    pub fn wildcard(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Wildcard {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Phrase clause: ordered word sequence with `slop` words permitted
    /// between them. A zero slop is the plugin default and is omitted from
    /// the encoded clause.
    ///
    /// <https://github.com/Stratio/cassandra-lucene-index/blob/branch-3.0.10/doc/documentation.rst#phrase-search>
    #[must_use]
    pub fn phrase<I>(field: impl Into<String>, values: I, slop: u32) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::Phrase {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
            slop,
        }
    }

    /// Contains clause: matches rows whose field holds any of `values`.
    #[must_use]
    pub fn contains<I>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::Contains {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Range clause with both bounds populated.
    #[must_use]
    pub fn range_all(
        field: impl Into<String>,
        lower: impl Into<Value>,
        upper: impl Into<Value>,
        include_lower: bool,
        include_upper: bool,
    ) -> Self {
        Self::Range {
            field: field.into(),
            lower: Some(lower.into()),
            upper: Some(upper.into()),
            include_lower,
            include_upper,
        }
    }

    /// Range clause bounded from below only.
    #[must_use]
    pub fn range_lower(
        field: impl Into<String>,
        lower: impl Into<Value>,
        inclusive: bool,
    ) -> Self {
        Self::Range {
            field: field.into(),
            lower: Some(lower.into()),
            upper: None,
            include_lower: inclusive,
            include_upper: false,
        }
    }

    /// Range clause bounded from above only.
    #[must_use]
    pub fn range_upper(
        field: impl Into<String>,
        upper: impl Into<Value>,
        inclusive: bool,
    ) -> Self {
        Self::Range {
            field: field.into(),
            lower: None,
            upper: Some(upper.into()),
            include_lower: false,
            include_upper: inclusive,
        }
    }

    /// Clause selecting every indexed row.
    #[must_use]
    pub const fn all() -> Self {
        Self::All
    }

    /// Boolean conjunction: every nested rule must match.
    ///
    /// Rules are kept in call order and never deduplicated.
    #[must_use]
    pub fn boolean_must<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = Rule>,
    {
        Self::Boolean {
            must: rules.into_iter().collect(),
            should: Vec::new(),
            not: Vec::new(),
        }
    }

    /// Boolean disjunction: at least one nested rule should match.
    #[must_use]
    pub fn boolean_should<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = Rule>,
    {
        Self::Boolean {
            must: Vec::new(),
            should: rules.into_iter().collect(),
            not: Vec::new(),
        }
    }

    /// Boolean negation: no nested rule may match.
    #[must_use]
    pub fn boolean_not<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = Rule>,
    {
        Self::Boolean {
            must: Vec::new(),
            should: Vec::new(),
            not: rules.into_iter().collect(),
        }
    }
}

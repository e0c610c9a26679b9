use crate::{expr::Expr, rule::Rule};
use proptest::prelude::*;

#[test]
fn new_expression_encodes_as_empty_document() {
    let expr = Expr::new();
    assert_eq!(expr.to_json().unwrap(), "{}");
}

#[test]
fn sort_without_reverse_encodes_field_only() {
    let expr = Expr::new().sort_by("created", false);
    assert_eq!(
        expr.to_json().unwrap(),
        r#"{"sort":[{"field":"created"}]}"#
    );
}

#[test]
fn sort_with_reverse_encodes_flag() {
    let expr = Expr::new().sort_by("created", true);
    assert_eq!(
        expr.to_json().unwrap(),
        r#"{"sort":[{"field":"created","reverse":true}]}"#
    );
}

#[test]
fn sort_by_updates_existing_field_in_place() {
    let expr = Expr::new().sort_by("created", false).sort_by("created", true);
    assert_eq!(expr.sorts().len(), 1);
    assert!(expr.sorts()[0].reverse);

    let expr = expr.sort_by("created", false);
    assert_eq!(expr.sorts().len(), 1);
    assert!(!expr.sorts()[0].reverse);
}

#[test]
fn sort_by_preserves_first_mention_order() {
    let expr = Expr::new()
        .sort_by("a", false)
        .sort_by("b", true)
        .sort_by("a", true);
    let fields: Vec<&str> = expr.sorts().iter().map(|s| s.field.as_str()).collect();
    assert_eq!(fields, ["a", "b"]);
}

#[test]
fn none_rules_are_skipped() {
    let expr = Expr::new().query([Some(Rule::all()), None, Some(Rule::match_("a", 1i64))]);
    assert_eq!(expr.query_rules().len(), 2);

    let expr = expr.filter([None::<Rule>]);
    assert_eq!(expr.filter_rules().len(), 0);
}

#[test]
fn query_and_filter_append_in_argument_order() {
    let expr = Expr::new()
        .query([Rule::match_("a", 1i64)])
        .query([Rule::match_("b", 2i64)]);
    assert_eq!(
        expr.to_json().unwrap(),
        r#"{"query":[{"type":"match","field":"a","value":1},{"type":"match","field":"b","value":2}]}"#
    );
}

#[test]
fn document_key_order_is_query_filter_sort_refresh() {
    let expr = Expr::new()
        .refresh(true)
        .sort_by("age", false)
        .filter([Rule::all()])
        .query([Rule::all()]);
    assert_eq!(
        expr.to_json().unwrap(),
        r#"{"query":[{"type":"all"}],"filter":[{"type":"all"}],"sort":[{"field":"age"}],"refresh":true}"#
    );
}

#[test]
fn refresh_false_is_omitted() {
    let expr = Expr::new().refresh(true).refresh(false);
    assert_eq!(expr.to_json().unwrap(), "{}");
}

#[test]
fn reset_round_trips_to_empty_document() {
    let expr = Expr::new()
        .query([Rule::wildcard("name", "Ali*")])
        .filter([Rule::range_lower("age", 18i64, true)])
        .sort_by("age", true)
        .refresh(true)
        .reset();
    assert_eq!(expr, Expr::new());
    assert_eq!(expr.to_json().unwrap(), "{}");
}

#[test]
fn partial_resets_are_independent() {
    let expr = Expr::new()
        .query([Rule::all()])
        .filter([Rule::all()])
        .sort_by("a", true)
        .reset_query();
    assert!(expr.query_rules().is_empty());
    assert_eq!(expr.filter_rules().len(), 1);
    assert_eq!(expr.sorts().len(), 1);

    let expr = expr.reset_filter().reset_sort();
    assert!(expr.filter_rules().is_empty());
    assert!(expr.sorts().is_empty());
}

#[test]
fn bytes_path_matches_string_path() {
    let expr = Expr::new()
        .filter([Rule::boolean_must([
            Rule::wildcard("name", "Ali*"),
            Rule::wildcard("food", "tu*"),
        ])])
        .sort_by("age", true);
    assert_eq!(expr.to_bytes().unwrap(), expr.to_json().unwrap().into_bytes());
}

#[test]
fn display_renders_canonical_json() {
    let expr = Expr::new().sort_by("created", true);
    assert_eq!(expr.to_string(), expr.to_json().unwrap());
}

#[test]
fn example_filter_matches_plugin_document_shape() {
    // The document bound into `SELECT ... WHERE expr(users_index, ?)`.
    let expr = Expr::new().filter([Rule::boolean_must([
        Rule::wildcard("name", "Ali*"),
        Rule::wildcard("food", "tu*"),
    ])]);
    assert_eq!(
        expr.to_json().unwrap(),
        r#"{"filter":[{"type":"boolean","must":[{"type":"wildcard","field":"name","value":"Ali*"},{"type":"wildcard","field":"food","value":"tu*"}]}]}"#
    );
}

// ----------------------------------------------------------------------
// Properties
// ----------------------------------------------------------------------

const FIELDS: [&str; 4] = ["a", "b", "c", "d"];

fn arb_field() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(FIELDS[0].to_string()),
        Just(FIELDS[1].to_string()),
        Just(FIELDS[2].to_string()),
        Just(FIELDS[3].to_string()),
    ]
}

proptest! {
    /// Sort fields stay unique, ordered by first mention, last write wins.
    #[test]
    fn sort_by_is_last_write_wins(ops in prop::collection::vec((arb_field(), any::<bool>()), 0..32)) {
        let mut expr = Expr::new();
        for (field, reverse) in &ops {
            expr = expr.sort_by(field, *reverse);
        }

        let mut expected: Vec<(String, bool)> = Vec::new();
        for (field, reverse) in &ops {
            match expected.iter_mut().find(|(f, _)| f == field) {
                Some((_, r)) => *r = *reverse,
                None => expected.push((field.clone(), *reverse)),
            }
        }

        let actual: Vec<(String, bool)> = expr
            .sorts()
            .iter()
            .map(|s| (s.field.clone(), s.reverse))
            .collect();
        prop_assert_eq!(actual, expected);
    }

    /// `reset` returns any mutated expression to the empty document.
    #[test]
    fn reset_always_restores_initial_state(
        fields in prop::collection::vec(arb_field(), 0..8),
        refresh in any::<bool>(),
    ) {
        let mut expr = Expr::new().refresh(refresh);
        for field in fields {
            expr = expr
                .query([Rule::match_(field.as_str(), 1i64)])
                .sort_by(field, true);
        }
        prop_assert_eq!(expr.reset(), Expr::new());
    }
}

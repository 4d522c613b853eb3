//! Tests for the formula editing helpers

use pretty_assertions::assert_eq;
use tagcalc::prelude::*;
use tagcalc::{search_term, unused_variables};

fn sample_table() -> VariableTable {
    VariableTable::new(vec![
        Variable::new("revenue", 5.0),
        Variable::new("cost", 2.0),
    ])
    .unwrap()
}

/// The last operand is replaced by the selected tag
#[test]
fn test_insert_tag() {
    assert_eq!(insert_tag("a + b", "x"), "a + [x]");
    assert_eq!(insert_tag("[revenue] / co", "cost"), "[revenue] / [cost]");
}

/// With nothing to replace, insertion is a silent no-op
#[test]
fn test_insert_tag_without_operand() {
    assert_eq!(insert_tag("", "x"), "");
    assert_eq!(insert_tag(" * ", "x"), " * ");
}

/// Autocomplete matches the trailing word as a case-insensitive substring
#[test]
fn test_filter_candidates() {
    let table = sample_table();
    assert_eq!(
        filter_candidates("total + re", &table),
        vec![Candidate {
            name: "revenue".into(),
            value: 5.0
        }]
    );
    assert_eq!(search_term("total + re"), "re");
    assert_eq!(filter_candidates("total + ", &table).len(), 2);
}

/// Swapping a tag only offers variables not already in the formula
#[test]
fn test_replace_tag_flow() {
    let table = sample_table();
    let formula = "[revenue] * 2";

    let options: Vec<_> = unused_variables(formula, &table)
        .into_iter()
        .map(|v| v.name.clone())
        .collect();
    assert_eq!(options, vec!["cost"]);

    let formula = replace_tag(formula, "revenue", "cost");
    assert_eq!(formula, "[cost] * 2");
    assert_eq!(calculate(&formula, &table).unwrap(), 4.0);
}

/// Typing, selecting and calculating through explicit state
#[test]
fn test_formula_state_session() {
    let table = sample_table();
    let mut state = FormulaState::new();

    state.set_formula("re");
    let labels: Vec<_> = state.candidates(&table).iter().map(|c| c.label()).collect();
    assert_eq!(labels, vec!["revenue = 5"]);

    state.select_candidate("revenue");
    state.set_formula(format!("{} ^ 2 - c", state.formula()));
    state.select_candidate("cost");
    assert_eq!(state.formula(), "[revenue] ^ 2 - [cost]");

    assert_eq!(state.calculate(&table).unwrap(), 23.0);
    assert_eq!(state.result(), Some(23.0));
}

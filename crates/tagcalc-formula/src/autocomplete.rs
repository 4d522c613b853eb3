//! Autocomplete filtering
//!
//! Advisory lookups for the formula editor. Nothing here affects evaluation.

use crate::tokenizer::tag_names;
use lazy_regex::regex;
use tagcalc_core::{Variable, VariableTable};

/// An autocomplete suggestion
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub name: String,
    pub value: f64,
}

impl Candidate {
    /// Display label, `"name = value"`
    pub fn label(&self) -> String {
        format!("{} = {}", self.name, self.value)
    }
}

impl From<&Variable> for Candidate {
    fn from(variable: &Variable) -> Self {
        Self {
            name: variable.name.clone(),
            value: variable.value,
        }
    }
}

/// The word being typed at the end of the formula
///
/// The longest trailing run of ASCII letters, digits and `_`; empty when the
/// formula is empty or ends in any other character.
pub fn search_term(formula: &str) -> &str {
    regex!(r"[A-Za-z0-9_]+$")
        .find(formula)
        .map_or("", |m| m.as_str())
}

/// Variables whose name contains the current search term, case-insensitively
///
/// Table order is preserved. An empty search term matches every variable.
///
/// # Example
/// ```rust
/// use tagcalc_core::{Variable, VariableTable};
/// use tagcalc_formula::filter_candidates;
///
/// let table = VariableTable::new(vec![
///     Variable::new("revenue", 5.0),
///     Variable::new("cost", 2.0),
/// ])
/// .unwrap();
///
/// let candidates = filter_candidates("total + re", &table);
/// assert_eq!(candidates.len(), 1);
/// assert_eq!(candidates[0].name, "revenue");
/// ```
pub fn filter_candidates(formula: &str, table: &VariableTable) -> Vec<Candidate> {
    let term = search_term(formula).to_lowercase();

    table
        .iter()
        .filter(|variable| variable.name.to_lowercase().contains(&term))
        .map(Candidate::from)
        .collect()
}

/// Variables not yet referenced by any tag in the formula, in table order
pub fn unused_variables<'t>(formula: &str, table: &'t VariableTable) -> Vec<&'t Variable> {
    let used = tag_names(formula);

    table
        .iter()
        .filter(|variable| !used.contains(&variable.name))
        .collect()
}

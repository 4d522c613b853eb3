//! Formula editing state
//!
//! The current formula and the last successful result, passed explicitly
//! between the input surface and the calculate action. The variable table is
//! never stored here; each operation that needs one takes it as an argument.

use crate::calculation::{calculate_with_options, CalculationOptions};
use tagcalc_core::{Variable, VariableTable};
use tagcalc_formula::{
    filter_candidates, insert_tag, replace_tag, unused_variables, Candidate, FormulaResult,
};

/// Formula text plus the last calculated result
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormulaState {
    formula: String,
    result: Option<f64>,
}

impl FormulaState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state holding a formula, with no result yet
    pub fn with_formula(formula: impl Into<String>) -> Self {
        Self {
            formula: formula.into(),
            result: None,
        }
    }

    /// The current formula
    pub fn formula(&self) -> &str {
        &self.formula
    }

    /// The last successful result, if any
    pub fn result(&self) -> Option<f64> {
        self.result
    }

    /// Replace the formula text (a direct user edit)
    pub fn set_formula(&mut self, formula: impl Into<String>) {
        self.formula = formula.into();
    }

    /// Autocomplete suggestions for the current formula
    pub fn candidates(&self, table: &VariableTable) -> Vec<Candidate> {
        filter_candidates(&self.formula, table)
    }

    /// Variables that could replace an existing tag (not used anywhere yet)
    pub fn replacement_options<'t>(&self, table: &'t VariableTable) -> Vec<&'t Variable> {
        unused_variables(&self.formula, table)
    }

    /// Accept an autocomplete suggestion: the last operand becomes `[name]`
    pub fn select_candidate(&mut self, name: &str) {
        self.formula = insert_tag(&self.formula, name);
    }

    /// Swap the first `[current]` tag for `[replacement]`
    pub fn replace_tag(&mut self, current: &str, replacement: &str) {
        self.formula = replace_tag(&self.formula, current, replacement);
    }

    /// Calculate the current formula with default options
    pub fn calculate(&mut self, table: &VariableTable) -> FormulaResult<f64> {
        self.calculate_with_options(table, &CalculationOptions::default())
    }

    /// Calculate the current formula
    ///
    /// On success the result is stored. On failure the previous result is
    /// kept and the error is returned for the caller to report.
    pub fn calculate_with_options(
        &mut self,
        table: &VariableTable,
        options: &CalculationOptions,
    ) -> FormulaResult<f64> {
        match calculate_with_options(&self.formula, table, options) {
            Ok(value) => {
                self.result = Some(value);
                Ok(value)
            }
            Err(e) => {
                tracing::debug!("Keeping previous result after failure: {}", e);
                Err(e)
            }
        }
    }
}

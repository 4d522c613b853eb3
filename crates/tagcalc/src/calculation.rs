//! End-to-end formula calculation
//!
//! Runs tokenize → substitute → normalize → evaluate against a variable table.
//!
//! # Example
//!
//! ```rust
//! use tagcalc::{calculate_with_options, CalculationOptions, Variable, VariableTable};
//!
//! let table = VariableTable::new(vec![Variable::new("x", 3.0)]).unwrap();
//! let options = CalculationOptions::default();
//! assert_eq!(calculate_with_options(" [x]^2 ", &table, &options).unwrap(), 9.0);
//! ```

use tagcalc_core::VariableTable;
use tagcalc_formula::{
    evaluate_with_options, normalize, substitute, tokenize, EvaluatorOptions, FormulaResult,
};

/// Options for formula calculation
#[derive(Debug, Clone)]
pub struct CalculationOptions {
    /// Options passed to the arithmetic evaluator
    pub evaluator: EvaluatorOptions,
    /// Trim surrounding whitespace before tokenizing (default: true)
    pub trim_formula: bool,
}

impl Default for CalculationOptions {
    fn default() -> Self {
        Self {
            evaluator: EvaluatorOptions::default(),
            trim_formula: true,
        }
    }
}

/// Calculate a formula with default options
pub fn calculate(formula: &str, table: &VariableTable) -> FormulaResult<f64> {
    calculate_with_options(formula, table, &CalculationOptions::default())
}

/// Calculate a formula with custom options
pub fn calculate_with_options(
    formula: &str,
    table: &VariableTable,
    options: &CalculationOptions,
) -> FormulaResult<f64> {
    let formula = if options.trim_formula {
        formula.trim()
    } else {
        formula
    };

    // Phase 1: Split into literals and tags
    let tokens = tokenize(formula);

    // Phase 2: Resolve every tag, or fail as a whole
    let substituted = substitute(&tokens, table)?;

    // Phase 3: Map `^` onto the evaluator's power operator
    let normalized = normalize(&substituted);
    tracing::debug!(
        "Calculating {:?}: {} tokens, normalized to {:?}",
        formula,
        tokens.len(),
        normalized
    );

    // Phase 4: Evaluate
    let value = evaluate_with_options(&normalized, &options.evaluator)?;
    tracing::debug!("Formula {:?} = {}", formula, value);

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagcalc_core::Variable;
    use tagcalc_formula::{ErrorKind, EvalError, FormulaError, SubstitutionError};

    fn table() -> VariableTable {
        VariableTable::new(vec![
            Variable::new("a", 2.0),
            Variable::new("b", 3.0),
            Variable::new("neg", -4.0),
            Variable::new("zero", 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_calculate() {
        assert_eq!(calculate("[a] + [b]", &table()).unwrap(), 5.0);
        assert_eq!(calculate("[a]^[b]", &table()).unwrap(), 8.0);
        assert_eq!(calculate("([a] + 1) * [b]", &table()).unwrap(), 9.0);
        assert_eq!(calculate("10", &table()).unwrap(), 10.0);
    }

    #[test]
    fn test_negative_variables_stay_atomic() {
        assert_eq!(calculate("[a] - [neg]", &table()).unwrap(), 6.0);
        assert_eq!(calculate("[neg]^2", &table()).unwrap(), 16.0);
        assert_eq!(calculate("-[a]^2", &table()).unwrap(), -4.0);
    }

    #[test]
    fn test_unknown_variable() {
        let err = calculate("[a] + [c]", &table()).unwrap_err();
        assert_eq!(
            err,
            FormulaError::Substitution(SubstitutionError::UnknownVariable("c".into()))
        );
    }

    #[test]
    fn test_division_by_zero() {
        let err = calculate("[a] / [zero]", &table()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NonFiniteResult);
    }

    #[test]
    fn test_syntax_error() {
        let err = calculate("[a] +", &table()).unwrap_err();
        assert!(matches!(err, FormulaError::Eval(EvalError::Syntax { .. })));
        assert_eq!(calculate("", &table()).unwrap_err().kind(), ErrorKind::SyntaxError);
    }

    #[test]
    fn test_untagged_names_are_syntax_errors() {
        let err = calculate("a + b", &table()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SyntaxError);
    }

    #[test]
    fn test_trim_option() {
        let options = CalculationOptions {
            trim_formula: false,
            ..Default::default()
        };
        // Whitespace is insignificant to the evaluator either way
        assert_eq!(calculate_with_options("  [a] ", &table(), &options).unwrap(), 2.0);
    }

    #[test]
    fn test_depth_option() {
        let options = CalculationOptions {
            evaluator: EvaluatorOptions { max_depth: 2 },
            ..Default::default()
        };
        assert!(calculate_with_options("(([a]))", &table(), &options).is_ok());
        assert_eq!(
            calculate_with_options("((([a])))", &table(), &options)
                .unwrap_err()
                .kind(),
            ErrorKind::SyntaxError
        );
    }
}

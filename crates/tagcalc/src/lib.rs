//! # tagcalc
//!
//! Evaluate arithmetic formulas that reference named variables.
//!
//! A formula is plain text such as `([revenue] - [cost]) / [revenue] ^ 2`,
//! where `[name]` refers to a variable from a [`VariableTable`]. The pipeline is:
//!
//! 1. Tokenize into literal text and tags
//! 2. Substitute each tag with its value (all tags must resolve)
//! 3. Normalize `^` into the evaluator's power operator
//! 4. Evaluate with an arithmetic-only parser; non-finite results are errors
//!
//! ## Example
//!
//! ```rust
//! use tagcalc::prelude::*;
//!
//! let table = VariableTable::new(vec![
//!     Variable::new("revenue", 10.0),
//!     Variable::new("cost", 4.0),
//! ])
//! .unwrap();
//!
//! assert_eq!(calculate("([revenue] - [cost]) * 2^2", &table).unwrap(), 24.0);
//!
//! let err = calculate("[revenue] / [missing]", &table).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::UnknownVariable);
//! ```

pub mod calculation;
pub mod prelude;
pub mod state;

// Re-export calculation types
pub use calculation::{calculate, calculate_with_options, CalculationOptions};
pub use state::FormulaState;

// Re-export core types
pub use tagcalc_core::{validate_name, Error, Result, Variable, VariableRecord, VariableTable};

// Re-export formula types
pub use tagcalc_formula::{
    evaluate, evaluate_with_options, filter_candidates, format_value, insert_tag, normalize,
    parse_expression, replace_tag, search_term, substitute, tag_names, tokenize,
    unused_variables, Candidate, CompiledExpression, ErrorKind, EvalError, EvaluatorOptions,
    FormulaError, FormulaResult, SubstitutionError, Token,
};

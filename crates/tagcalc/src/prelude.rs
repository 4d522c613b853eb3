//! Prelude module - common imports for tagcalc users
//!
//! ```rust
//! use tagcalc::prelude::*;
//! ```

pub use crate::{
    // Calculation
    calculate,
    calculate_with_options,
    CalculationOptions,
    EvaluatorOptions,

    // Editing helpers
    filter_candidates,
    insert_tag,
    replace_tag,
    Candidate,
    FormulaState,

    // Error types
    ErrorKind,
    FormulaError,
    FormulaResult,

    // Variable types
    Variable,
    VariableTable,
};

//! # tagcalc-formula
//!
//! Formula pipeline for tagcalc.
//!
//! This crate provides:
//! - Tag tokenizing (`"[a] + 1"` → `Tag("a")`, `Literal(" + 1")`)
//! - Substitution of tag values from a [`VariableTable`](tagcalc_core::VariableTable)
//! - Operator normalization (`^` → `**`)
//! - An arithmetic-only evaluator (`+ - * / **`, parentheses)
//! - Editing helpers: tag insertion, tag replacement and autocomplete filtering
//!
//! ## Example
//!
//! ```rust
//! use tagcalc_core::{Variable, VariableTable};
//! use tagcalc_formula::{evaluate, normalize, substitute, tokenize};
//!
//! let table = VariableTable::new(vec![Variable::new("base", 2.0)]).unwrap();
//! let tokens = tokenize("[base]^3 + 1");
//! let expr = normalize(&substitute(&tokens, &table).unwrap());
//! assert_eq!(evaluate(&expr).unwrap(), 9.0);
//! ```

pub mod ast;
pub mod autocomplete;
pub mod error;
pub mod evaluator;
pub mod insertion;
pub mod normalize;
pub mod parser;
pub mod substitute;
pub mod tokenizer;

pub use ast::{BinaryOperator, CompiledExpression, Instruction, UnaryOperator};
pub use autocomplete::{filter_candidates, search_term, unused_variables, Candidate};
pub use error::{ErrorKind, EvalError, FormulaError, FormulaResult, SubstitutionError};
pub use evaluator::{evaluate, evaluate_with_options, EvaluatorOptions};
pub use insertion::{insert_tag, replace_tag};
pub use normalize::{normalize, POWER_OPERATOR};
pub use parser::parse_expression;
pub use substitute::{format_value, substitute};
pub use tokenizer::{tag_names, tokenize, Token};

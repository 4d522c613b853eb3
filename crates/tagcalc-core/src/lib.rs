//! # tagcalc-core
//!
//! Core data structures for tagcalc.
//!
//! This crate provides the variable side of the formula pipeline:
//! - [`Variable`] - A named numeric value
//! - [`VariableTable`] - An ordered, validated, read-only snapshot of variables
//! - [`VariableRecord`] - One entry of the variable source payload
//!
//! ## Example
//!
//! ```rust
//! use tagcalc_core::{Variable, VariableTable};
//!
//! let table = VariableTable::new(vec![
//!     Variable::new("revenue", 5.0),
//!     Variable::new("cost", 2.0),
//! ])
//! .unwrap();
//!
//! assert_eq!(table.get("revenue"), Some(5.0));
//! assert_eq!(table.get("Revenue"), None);
//! ```

pub mod error;
pub mod source;
pub mod variable;

pub use error::{Error, Result};
pub use source::VariableRecord;
pub use variable::{validate_name, Variable, VariableTable};

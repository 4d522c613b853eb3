//! Formula error types

use thiserror::Error;

/// Result type for the end-to-end formula pipeline
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors raised while substituting tag values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubstitutionError {
    /// A tag names a variable that is not in the table
    #[error("Unknown variable: {0}")]
    UnknownVariable(String),
}

/// Errors raised while evaluating an arithmetic expression
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Expression does not match the arithmetic grammar
    #[error("Syntax error at position {position}: {message}")]
    Syntax { message: String, position: usize },

    /// Expression is well formed but its value is NaN or infinite
    #[error("Result is not a finite number: {0}")]
    NonFiniteResult(f64),
}

impl EvalError {
    pub(crate) fn syntax(message: impl Into<String>, position: usize) -> Self {
        EvalError::Syntax {
            message: message.into(),
            position,
        }
    }
}

/// Any failure of the formula pipeline
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormulaError {
    #[error(transparent)]
    Substitution(#[from] SubstitutionError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Error category, for callers that pick a user message per kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnknownVariable,
    SyntaxError,
    NonFiniteResult,
}

impl FormulaError {
    /// The category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            FormulaError::Substitution(SubstitutionError::UnknownVariable(_)) => {
                ErrorKind::UnknownVariable
            }
            FormulaError::Eval(EvalError::Syntax { .. }) => ErrorKind::SyntaxError,
            FormulaError::Eval(EvalError::NonFiniteResult(_)) => ErrorKind::NonFiniteResult,
        }
    }
}

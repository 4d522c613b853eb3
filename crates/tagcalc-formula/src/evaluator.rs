//! Expression evaluator
//!
//! Runs compiled postfix instructions on a value stack and rejects
//! non-finite results.

use crate::ast::{CompiledExpression, Instruction};
use crate::error::EvalError;
use crate::parser::parse_expression;

/// Options for expression evaluation
#[derive(Debug, Clone)]
pub struct EvaluatorOptions {
    /// Maximum nesting of parentheses, unary signs and exponents (default: 256)
    pub max_depth: usize,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self { max_depth: 256 }
    }
}

/// Evaluate a normalized arithmetic expression with default options
///
/// # Example
/// ```rust
/// use tagcalc_formula::{evaluate, EvalError};
///
/// assert_eq!(evaluate("(1+2)*3").unwrap(), 9.0);
/// assert!(matches!(evaluate("1/0"), Err(EvalError::NonFiniteResult(_))));
/// ```
pub fn evaluate(expr: &str) -> Result<f64, EvalError> {
    evaluate_with_options(expr, &EvaluatorOptions::default())
}

/// Evaluate a normalized arithmetic expression
pub fn evaluate_with_options(expr: &str, options: &EvaluatorOptions) -> Result<f64, EvalError> {
    let compiled = parse_expression(expr, options)?;
    let value = compiled.execute();

    tracing::trace!("Evaluated {:?} ({}) to {}", expr, compiled, value);

    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFiniteResult(value))
    }
}

impl CompiledExpression {
    /// Run the instructions and return the raw IEEE-754 result
    ///
    /// Intermediate infinities are allowed (`1/(1/0)` is `0`); only the final
    /// value is checked by [`evaluate`]. A malformed instruction list that
    /// underflows the stack yields NaN.
    pub fn execute(&self) -> f64 {
        let mut stack: Vec<f64> = Vec::with_capacity(self.instructions.len());

        for instruction in &self.instructions {
            match *instruction {
                Instruction::Push(n) => stack.push(n),
                Instruction::Unary(op) => {
                    let Some(operand) = stack.pop() else {
                        return f64::NAN;
                    };
                    stack.push(op.apply(operand));
                }
                Instruction::Binary(op) => {
                    let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                        return f64::NAN;
                    };
                    stack.push(op.apply(left, right));
                }
            }
        }

        match (stack.pop(), stack.is_empty()) {
            (Some(value), true) => value,
            _ => f64::NAN,
        }
    }
}

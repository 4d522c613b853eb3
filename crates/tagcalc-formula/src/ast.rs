//! Compiled expression types
//!
//! The parser emits a postfix (reverse Polish) instruction list instead of a
//! boxed tree, so evaluating or dropping a long operator chain never recurses.

use std::fmt;

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOperator {
    /// Apply the operator with IEEE-754 semantics
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOperator::Add => left + right,
            BinaryOperator::Subtract => left - right,
            BinaryOperator::Multiply => left * right,
            BinaryOperator::Divide => left / right,
            BinaryOperator::Power => power(left, right),
        }
    }

    /// Operator symbol in normalized syntax
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Power => "**",
        }
    }
}

/// `powf`, except `(±1) ** ±Infinity` is NaN rather than 1
fn power(base: f64, exponent: f64) -> f64 {
    if base.abs() == 1.0 && exponent.is_infinite() {
        f64::NAN
    } else {
        base.powf(exponent)
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Negate,
    Plus,
}

impl UnaryOperator {
    pub fn apply(self, operand: f64) -> f64 {
        match self {
            UnaryOperator::Negate => -operand,
            UnaryOperator::Plus => operand,
        }
    }
}

/// One step of a compiled expression
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instruction {
    /// Push a numeric literal
    Push(f64),
    /// Pop one operand, push the result
    Unary(UnaryOperator),
    /// Pop right then left operand, push the result
    Binary(BinaryOperator),
}

/// A parsed expression in postfix order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompiledExpression {
    pub instructions: Vec<Instruction>,
}

impl CompiledExpression {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

impl fmt::Display for CompiledExpression {
    /// Space-separated postfix form, e.g. `1 2 3 * +`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, instruction) in self.instructions.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match instruction {
                Instruction::Push(n) => write!(f, "{}", n)?,
                Instruction::Unary(UnaryOperator::Negate) => f.write_str("neg")?,
                Instruction::Unary(UnaryOperator::Plus) => f.write_str("pos")?,
                Instruction::Binary(op) => f.write_str(op.symbol())?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_edge_cases() {
        assert_eq!(BinaryOperator::Power.apply(2.0, 10.0), 1024.0);
        assert_eq!(BinaryOperator::Power.apply(2.0, -1.0), 0.5);
        assert!(BinaryOperator::Power.apply(1.0, f64::INFINITY).is_nan());
        assert!(BinaryOperator::Power.apply(-1.0, f64::NEG_INFINITY).is_nan());
        assert!(BinaryOperator::Power.apply(-8.0, 1.0 / 3.0).is_nan());
    }

    #[test]
    fn test_divide_ieee() {
        assert_eq!(BinaryOperator::Divide.apply(1.0, 0.0), f64::INFINITY);
        assert_eq!(BinaryOperator::Divide.apply(-1.0, 0.0), f64::NEG_INFINITY);
        assert!(BinaryOperator::Divide.apply(0.0, 0.0).is_nan());
    }
}

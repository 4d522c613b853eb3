//! Arithmetic expression parser
//!
//! A recursive descent parser for normalized expressions. The grammar is
//! deliberately closed: numeric literals, `+ - * / **`, parentheses and
//! whitespace. Anything else is a syntax error.
//!
//! ```text
//! expression     := additive
//! additive       := multiplicative (('+' | '-') multiplicative)*
//! multiplicative := unary (('*' | '/') unary)*
//! unary          := ('-' | '+') unary | power
//! power          := primary ('**' unary)?
//! primary        := number | '(' expression ')'
//! ```

use crate::ast::{BinaryOperator, CompiledExpression, Instruction, UnaryOperator};
use crate::error::EvalError;
use crate::evaluator::EvaluatorOptions;
use std::fmt;

/// Parse a normalized expression into postfix instructions
///
/// # Example
/// ```rust
/// use tagcalc_formula::{parse_expression, EvaluatorOptions};
///
/// let compiled = parse_expression("1 + 2 * 3", &EvaluatorOptions::default()).unwrap();
/// assert_eq!(compiled.to_string(), "1 2 3 * +");
/// ```
pub fn parse_expression(
    expr: &str,
    options: &EvaluatorOptions,
) -> Result<CompiledExpression, EvalError> {
    let mut parser = ExpressionParser::new(expr, options.max_depth)?;
    parser.parse_additive()?;

    // Make sure we consumed all input
    if parser.current != Token::Eof {
        return Err(EvalError::syntax(
            format!("Unexpected {} after expression", parser.current),
            parser.token_start,
        ));
    }

    Ok(parser.output)
}

/// Token types
#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    StarStar,

    // Delimiters
    LeftParen,
    RightParen,

    // End of input
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "number {}", n),
            Token::Plus => f.write_str("'+'"),
            Token::Minus => f.write_str("'-'"),
            Token::Star => f.write_str("'*'"),
            Token::Slash => f.write_str("'/'"),
            Token::StarStar => f.write_str("'**'"),
            Token::LeftParen => f.write_str("'('"),
            Token::RightParen => f.write_str("')'"),
            Token::Eof => f.write_str("end of expression"),
        }
    }
}

/// Expression parser
struct ExpressionParser<'a> {
    input: &'a str,
    pos: usize,
    current: Token,
    /// Byte offset where `current` starts
    token_start: usize,
    depth: usize,
    max_depth: usize,
    output: CompiledExpression,
}

impl<'a> ExpressionParser<'a> {
    fn new(input: &'a str, max_depth: usize) -> Result<Self, EvalError> {
        let mut parser = Self {
            input,
            pos: 0,
            current: Token::Eof,
            token_start: 0,
            depth: 0,
            max_depth,
            output: CompiledExpression::new(),
        };
        parser.advance_token()?;
        Ok(parser)
    }

    // === Token scanning ===

    fn advance_token(&mut self) -> Result<(), EvalError> {
        self.skip_whitespace();
        self.token_start = self.pos;
        self.current = self.scan_token()?;
        Ok(())
    }

    fn scan_token(&mut self) -> Result<Token, EvalError> {
        let c = match self.peek_char() {
            Some(c) => c,
            None => return Ok(Token::Eof),
        };

        let token = match c {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '/' => Token::Slash,
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            '*' => {
                self.advance();
                if self.peek_char() == Some('*') {
                    self.advance();
                    return Ok(Token::StarStar);
                }
                return Ok(Token::Star);
            }
            _ if c.is_ascii_digit()
                || (c == '.' && self.peek_char_at(1).map_or(false, |c| c.is_ascii_digit())) =>
            {
                return self.scan_number();
            }
            _ => {
                return Err(EvalError::syntax(
                    format!("Unexpected character '{}'", c),
                    self.pos,
                ))
            }
        };

        self.advance();
        Ok(token)
    }

    fn scan_number(&mut self) -> Result<Token, EvalError> {
        let start = self.pos;

        // Integer part
        self.skip_digits();

        // Decimal part
        if self.peek_char() == Some('.') {
            self.advance();
            self.skip_digits();
        }

        // Exponent part, only when digits follow
        if matches!(self.peek_char(), Some('e' | 'E')) {
            let digits_at = match self.peek_char_at(1) {
                Some('+' | '-') => 2,
                _ => 1,
            };
            if self
                .peek_char_at(digits_at)
                .map_or(false, |c| c.is_ascii_digit())
            {
                for _ in 0..digits_at {
                    self.advance();
                }
                self.skip_digits();
            }
        }

        let num_str = &self.input[start..self.pos];
        num_str
            .parse::<f64>()
            .map(Token::Number)
            .map_err(|e| EvalError::syntax(format!("Invalid number '{}': {}", num_str, e), start))
    }

    // === Helper methods ===

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_char_at(&self, offset: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(offset)
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_digits(&mut self) {
        while self.peek_char().map_or(false, |c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().map_or(false, |c| c.is_whitespace()) {
            self.advance();
        }
    }

    fn consume(&mut self) -> Result<Token, EvalError> {
        let token = std::mem::replace(&mut self.current, Token::Eof);
        self.advance_token()?;
        Ok(token)
    }

    fn expect(&mut self, expected: &Token) -> Result<(), EvalError> {
        if &self.current == expected {
            self.consume()?;
            Ok(())
        } else {
            Err(EvalError::syntax(
                format!("Expected {}, got {}", expected, self.current),
                self.token_start,
            ))
        }
    }

    fn enter(&mut self) -> Result<(), EvalError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(EvalError::syntax(
                format!("Expression nested deeper than {} levels", self.max_depth),
                self.token_start,
            ));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    // === Expression parsing with precedence ===
    // Precedence (lowest to highest):
    // 1. Addition/Subtraction: +, -
    // 2. Multiplication/Division: *, /
    // 3. Unary: -, +
    // 4. Exponentiation: ** (right associative, binds tighter than a leading minus)
    // 5. Primary: numbers, parentheses

    fn parse_additive(&mut self) -> Result<(), EvalError> {
        self.parse_multiplicative()?;

        loop {
            let op = match self.current {
                Token::Plus => BinaryOperator::Add,
                Token::Minus => BinaryOperator::Subtract,
                _ => break,
            };

            self.consume()?;
            self.parse_multiplicative()?;
            self.output.push(Instruction::Binary(op));
        }

        Ok(())
    }

    fn parse_multiplicative(&mut self) -> Result<(), EvalError> {
        self.parse_unary()?;

        loop {
            let op = match self.current {
                Token::Star => BinaryOperator::Multiply,
                Token::Slash => BinaryOperator::Divide,
                _ => break,
            };

            self.consume()?;
            self.parse_unary()?;
            self.output.push(Instruction::Binary(op));
        }

        Ok(())
    }

    fn parse_unary(&mut self) -> Result<(), EvalError> {
        let op = match self.current {
            Token::Minus => UnaryOperator::Negate,
            Token::Plus => UnaryOperator::Plus,
            _ => return self.parse_power(),
        };

        self.consume()?;
        self.enter()?;
        self.parse_unary()?;
        self.leave();
        self.output.push(Instruction::Unary(op));
        Ok(())
    }

    fn parse_power(&mut self) -> Result<(), EvalError> {
        self.parse_primary()?;

        if self.current == Token::StarStar {
            self.consume()?;
            self.enter()?;
            // Right associative; the exponent may carry its own sign
            self.parse_unary()?;
            self.leave();
            self.output.push(Instruction::Binary(BinaryOperator::Power));
        }

        Ok(())
    }

    fn parse_primary(&mut self) -> Result<(), EvalError> {
        match self.current {
            Token::Number(n) => {
                self.consume()?;
                self.output.push(Instruction::Push(n));
                Ok(())
            }

            Token::LeftParen => {
                self.consume()?;
                self.enter()?;
                self.parse_additive()?;
                self.leave();
                self.expect(&Token::RightParen)
            }

            Token::Eof => Err(EvalError::syntax(
                "Unexpected end of expression",
                self.token_start,
            )),

            _ => Err(EvalError::syntax(
                format!("Unexpected {}", self.current),
                self.token_start,
            )),
        }
    }
}

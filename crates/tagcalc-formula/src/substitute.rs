//! Tag substitution
//!
//! Replaces every tag with its value from a [`VariableTable`]. Substitution is
//! all-or-nothing: one unknown tag fails the whole formula.

use crate::error::SubstitutionError;
use crate::tokenizer::Token;
use tagcalc_core::VariableTable;

/// Canonical decimal form of a value
///
/// Shortest representation that parses back to the same `f64`, without
/// exponent notation or digit grouping (`5.0` → `"5"`, `1e-7` → `"0.0000001"`).
pub fn format_value(value: f64) -> String {
    format!("{}", value)
}

/// Substitute tag values and join the tokens into one expression string
///
/// Negative values are wrapped in parentheses so they stay a single operand
/// (`2-[x]` with `x = -3` becomes `2-(-3)`, and `[x]^2` becomes `(-3)^2`).
///
/// # Example
/// ```rust
/// use tagcalc_core::{Variable, VariableTable};
/// use tagcalc_formula::{substitute, tokenize};
///
/// let table = VariableTable::new(vec![Variable::new("a", 1.5)]).unwrap();
/// assert_eq!(substitute(&tokenize("[a] * 2"), &table).unwrap(), "1.5 * 2");
/// ```
pub fn substitute(tokens: &[Token], table: &VariableTable) -> Result<String, SubstitutionError> {
    let mut output = String::new();

    for token in tokens {
        match token {
            Token::Literal(text) => output.push_str(text),
            Token::Tag(name) => {
                let value = table.get(name).ok_or_else(|| {
                    tracing::trace!("Tag [{}] not found in variable table", name);
                    SubstitutionError::UnknownVariable(name.clone())
                })?;

                if value.is_sign_negative() {
                    output.push('(');
                    output.push_str(&format_value(value));
                    output.push(')');
                } else {
                    output.push_str(&format_value(value));
                }
            }
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;
    use pretty_assertions::assert_eq;
    use tagcalc_core::Variable;

    fn table() -> VariableTable {
        VariableTable::new(vec![
            Variable::new("price", 12.5),
            Variable::new("qty", 4.0),
            Variable::new("discount", -3.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_substitute_values() {
        let out = substitute(&tokenize("[price] * [qty]"), &table()).unwrap();
        assert_eq!(out, "12.5 * 4");
    }

    #[test]
    fn test_literals_verbatim() {
        let out = substitute(&tokenize("(1 + 2) ^ 3"), &table()).unwrap();
        assert_eq!(out, "(1 + 2) ^ 3");
    }

    #[test]
    fn test_negative_values_are_parenthesized() {
        let out = substitute(&tokenize("10-[discount]"), &table()).unwrap();
        assert_eq!(out, "10-(-3)");
    }

    #[test]
    fn test_unknown_variable_fails_whole_formula() {
        let err = substitute(&tokenize("[price] + [missing] + [qty]"), &table()).unwrap_err();
        assert_eq!(err, SubstitutionError::UnknownVariable("missing".into()));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let err = substitute(&tokenize("[Price]"), &table()).unwrap_err();
        assert_eq!(err, SubstitutionError::UnknownVariable("Price".into()));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(5.0), "5");
        assert_eq!(format_value(0.1), "0.1");
        assert_eq!(format_value(1e21), "1000000000000000000000");
        assert_eq!(format_value(1e-7), "0.0000001");
        assert_eq!(format_value(-2.5), "-2.5");
    }
}

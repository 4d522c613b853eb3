//! Tag insertion and replacement
//!
//! Editing helpers behind autocomplete selection and the per-tag
//! "swap variable" menu. Both operate on the raw formula text.

use lazy_regex::regex;

const OPERATORS: [&str; 4] = ["+", "-", "*", "/"];

/// Split a formula into alternating operand and separator segments
///
/// Separators are single `+ - * /` characters and whitespace runs. Every byte
/// of the input lands in exactly one segment.
fn segments(formula: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut last = 0;

    for m in regex!(r"[+\-*/]|\s+").find_iter(formula) {
        parts.push(&formula[last..m.start()]);
        parts.push(m.as_str());
        last = m.end();
    }
    parts.push(&formula[last..]);

    parts
}

/// Replace the last operand of a formula with `[variable_name]`
///
/// The operand is the last segment that is neither blank nor a bare operator,
/// which is normally the partial word being typed. Everything else, including
/// separators and trailing whitespace, is kept as is.
///
/// If the formula has no operand (empty, or only operators and whitespace) it
/// is returned unchanged.
///
/// # Example
/// ```rust
/// use tagcalc_formula::insert_tag;
///
/// assert_eq!(insert_tag("a + b", "x"), "a + [x]");
/// assert_eq!(insert_tag("[price] * qu", "qty"), "[price] * [qty]");
/// assert_eq!(insert_tag("", "x"), "");
/// ```
pub fn insert_tag(formula: &str, variable_name: &str) -> String {
    let parts = segments(formula);

    let target = parts.iter().rposition(|part| {
        let trimmed = part.trim();
        !trimmed.is_empty() && !OPERATORS.contains(&trimmed)
    });

    let Some(index) = target else {
        tracing::debug!("No operand to replace in {:?}", formula);
        return formula.to_string();
    };

    let tag = format!("[{}]", variable_name);
    tracing::debug!("Replacing operand {:?} with {}", parts[index], tag);

    let mut output = String::with_capacity(formula.len() + tag.len());
    for (i, part) in parts.iter().enumerate() {
        output.push_str(if i == index { tag.as_str() } else { *part });
    }
    output
}

/// Replace the first `[current]` tag with `[replacement]`
///
/// Returns the formula unchanged if `[current]` does not occur.
pub fn replace_tag(formula: &str, current: &str, replacement: &str) -> String {
    formula.replacen(
        &format!("[{}]", current),
        &format!("[{}]", replacement),
        1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_segments_cover_input() {
        assert_eq!(segments("a + b"), vec!["a", " ", "", "+", "", " ", "b"]);
        assert_eq!(segments(""), vec![""]);
        assert_eq!(segments("a  b").concat(), "a  b");
    }

    #[test]
    fn test_insert_replaces_last_operand() {
        assert_eq!(insert_tag("a + b", "x"), "a + [x]");
        assert_eq!(insert_tag("rev", "revenue"), "[revenue]");
        assert_eq!(insert_tag("2*co", "cost"), "2*[cost]");
    }

    #[test]
    fn test_insert_skips_trailing_operators_and_whitespace() {
        assert_eq!(insert_tag("a + ", "x"), "[x] + ");
        assert_eq!(insert_tag("a +", "x"), "[x] +");
        assert_eq!(insert_tag("a - b  ", "x"), "a - [x]  ");
    }

    #[test]
    fn test_insert_replaces_existing_tag() {
        assert_eq!(insert_tag("[a] + [b]", "c"), "[a] + [c]");
    }

    #[test]
    fn test_insert_keeps_parentheses_in_operand() {
        // Parentheses are not separators, so they belong to the operand
        assert_eq!(insert_tag("(a+b)", "x"), "(a+[x]");
        assert_eq!(insert_tag("2^ex", "x"), "[x]");
    }

    #[test]
    fn test_insert_is_noop_without_operand() {
        assert_eq!(insert_tag("", "x"), "");
        assert_eq!(insert_tag("   ", "x"), "   ");
        assert_eq!(insert_tag("+ - * /", "x"), "+ - * /");
    }

    #[test]
    fn test_replace_tag() {
        assert_eq!(replace_tag("[a] + [b]", "a", "c"), "[c] + [b]");
        assert_eq!(replace_tag("[a] + [a]", "a", "c"), "[c] + [a]");
        assert_eq!(replace_tag("[a] + 1", "b", "c"), "[a] + 1");
        assert_eq!(replace_tag("a + 1", "a", "c"), "a + 1");
    }
}

//! Operator normalization

/// The evaluator's exponentiation operator
pub const POWER_OPERATOR: &str = "**";

/// Rewrite the `^` power operator into [`POWER_OPERATOR`]
///
/// Nothing else is touched. The output contains no `^`, so applying this twice
/// is the same as applying it once.
pub fn normalize(expr: &str) -> String {
    expr.replace('^', POWER_OPERATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("2^3"), "2**3");
        assert_eq!(normalize("2 ^ 3 ^ 2"), "2 ** 3 ** 2");
        assert_eq!(normalize("1 + 2"), "1 + 2");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_existing_power_operator_untouched() {
        assert_eq!(normalize("2**3"), "2**3");
    }

    proptest! {
        #[test]
        fn prop_idempotent(s in ".*") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }
    }
}

//! Property-based tests for expression evaluation.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use magna_bigint::BigInt;

    use crate::eval;

    // Strategy for non-negative literals, so formatting stays in-grammar
    fn literal() -> impl Strategy<Value = i64> {
        0i64..1_000_000i64
    }

    fn non_zero_literal() -> impl Strategy<Value = i64> {
        1i64..1_000_000i64
    }

    proptest! {
        #[test]
        fn sum_matches_bigint(a in literal(), b in literal()) {
            let result = eval(&format!("{a} + {b}")).unwrap();
            prop_assert_eq!(result, BigInt::new(a) + BigInt::new(b));
        }

        #[test]
        fn precedence_matches_native(a in literal(), b in literal(), c in literal()) {
            let result = eval(&format!("{a} + {b} * {c}")).unwrap();
            prop_assert_eq!(result, BigInt::new(a) + BigInt::new(b) * BigInt::new(c));
        }

        #[test]
        fn parentheses_override_precedence(a in literal(), b in literal(), c in literal()) {
            let result = eval(&format!("({a} + {b}) * {c}")).unwrap();
            prop_assert_eq!(result, (BigInt::new(a) + BigInt::new(b)) * BigInt::new(c));
        }

        #[test]
        fn division_matches_checked_ops(a in literal(), b in non_zero_literal()) {
            let quotient = eval(&format!("{a} / {b}")).unwrap();
            let remainder = eval(&format!("{a} % {b}")).unwrap();
            let a = BigInt::new(a);
            let b = BigInt::new(b);
            prop_assert_eq!(quotient, a.checked_div(&b).unwrap());
            prop_assert_eq!(remainder, a.checked_rem(&b).unwrap());
        }

        #[test]
        fn whitespace_is_insignificant(a in literal(), b in literal()) {
            let spaced = eval(&format!("  {a}   +   {b} ")).unwrap();
            let tight = eval(&format!("{a}+{b}")).unwrap();
            prop_assert_eq!(spaced, tight);
        }
    }
}

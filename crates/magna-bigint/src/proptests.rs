//! Property-based tests for big integer arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::BigInt;

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1_000_000i64..1_000_000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1_000_000i64..=-1i64), (1i64..=1_000_000i64)]
    }

    // Strategy for canonical decimal strings, including multi-limb values
    fn decimal_string() -> impl Strategy<Value = String> {
        "-?(0|[1-9][0-9]{0,40})".prop_filter("negative zero is not canonical", |s| s != "-0")
    }

    proptest! {
        #[test]
        fn parse_display_round_trip(s in decimal_string()) {
            let value: BigInt = s.parse().unwrap();
            prop_assert_eq!(value.to_string(), s);
        }

        #[test]
        fn add_commutative(a in small_int(), b in small_int()) {
            let a = BigInt::new(a);
            let b = BigInt::new(b);
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn sub_antisymmetric(a in small_int(), b in small_int()) {
            let a = BigInt::new(a);
            let b = BigInt::new(b);
            prop_assert_eq!(&a - &b, -(&b - &a));
        }

        #[test]
        fn add_then_sub_cancels(a in small_int(), b in small_int()) {
            let a = BigInt::new(a);
            let b = BigInt::new(b);
            prop_assert_eq!((&a + &b) - &b, a);
        }

        #[test]
        fn arithmetic_matches_native(a in small_int(), b in small_int()) {
            let big_a = BigInt::new(a);
            let big_b = BigInt::new(b);
            prop_assert_eq!(&big_a + &big_b, BigInt::new(a + b));
            prop_assert_eq!(&big_a - &big_b, BigInt::new(a - b));
            prop_assert_eq!(&big_a * &big_b, BigInt::new(a * b));
        }

        #[test]
        fn div_rem_reconstructs(a in 0i64..1_000_000, b in non_zero_int()) {
            // The exact reconstruction law; the quotient truncates toward
            // zero, so it applies to non-negative dividends.
            let a = BigInt::new(a);
            let b = BigInt::new(b);
            let quotient = a.checked_div(&b).unwrap();
            let remainder = a.checked_rem(&b).unwrap();
            prop_assert_eq!(&quotient * &b + &remainder, a);
        }

        #[test]
        fn remainder_in_range_and_congruent(a in small_int(), b in non_zero_int()) {
            let a = BigInt::new(a);
            let b = BigInt::new(b);
            let remainder = a.checked_rem(&b).unwrap();

            prop_assert!(remainder >= BigInt::zero());
            prop_assert!(remainder < b.abs());
            // a and the remainder agree modulo b.
            let difference = &a - &remainder;
            prop_assert_eq!(difference.checked_rem(&b).unwrap(), BigInt::zero());
        }

        #[test]
        fn self_division_is_one(a in non_zero_int()) {
            let a = BigInt::new(a);
            prop_assert_eq!(a.checked_div(&a).unwrap(), BigInt::one());
        }

        #[test]
        fn ordering_matches_native(a in small_int(), b in small_int()) {
            let big_a = BigInt::new(a);
            let big_b = BigInt::new(b);
            prop_assert_eq!(big_a.cmp(&big_b), a.cmp(&b));
        }

        #[test]
        fn ordering_is_exclusive(a in small_int(), b in small_int()) {
            let a = BigInt::new(a);
            let b = BigInt::new(b);
            let relations = [a < b, a == b, a > b];
            prop_assert_eq!(relations.iter().filter(|&&holds| holds).count(), 1);
        }

        #[test]
        fn large_multiply_matches_i128(a in small_int(), b in small_int()) {
            // Products beyond i64 range still verifiable through i128.
            let scaled_a = i128::from(a) * 1_000_000_007;
            let product = scaled_a.to_string().parse::<BigInt>().unwrap() * BigInt::new(b);
            prop_assert_eq!(product.to_string(), (scaled_a * i128::from(b)).to_string());
        }
    }
}

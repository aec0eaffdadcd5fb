// ============================================================================
// Elbonian Numerals Library
// Validating converter between Arabic integers and additive Elbonian numerals
// ============================================================================

//! # Elbonian Numerals
//!
//! A validating converter between standard signed base-10 integers
//! ("Arabic" notation) and the additive, non-positional Elbonian notation
//! built from nine fixed-value symbols.
//!
//! ## Features
//!
//! - **Validation at construction** - a [`numeral::Converter`] only exists
//!   for input that passed every syntax, grammar and range check
//! - **Two notations, one value object** - Arabic integers in
//!   [-9999, 9999] and Elbonian strings over `{N, M, D, C, L, X, V, I, Z}`
//! - **Run-length and pairing rules** - additive symbols repeat at most
//!   three times, subtractive symbols at most twice, and a three-run of an
//!   additive symbol excludes its paired subtractive symbol
//! - **Pure queries** - conversion in both directions is side-effect-free
//!   and infallible on a validated value
//!
//! ## Example
//!
//! ```rust
//! use elbonian_numerals::prelude::*;
//!
//! // Arabic input converts to the minimal Elbonian form
//! let numeral = Converter::new("2202").unwrap();
//! assert_eq!(numeral.to_elbonian(), "MMCCII");
//!
//! // Elbonian input converts back by summing symbol values
//! let numeral = Converter::new("-MMCCII").unwrap();
//! assert_eq!(numeral.to_arabic(), -2202);
//!
//! // Rejected input never produces an instance
//! assert!(Converter::new("M M").is_err());
//! assert!(Converter::new("10000").is_err());
//! ```

pub mod numeral;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeral::{
        Converter, NumeralError, NumeralResult, SymbolClass, MAX_VALUE, MIN_VALUE,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use proptest::prelude::*;
    use quickcheck::QuickCheck;

    #[test]
    fn test_full_range_round_trip() {
        for value in MIN_VALUE..=MAX_VALUE {
            let elbonian = Converter::from_value(value).unwrap().to_elbonian();
            let reparsed = Converter::new(&elbonian).unwrap();
            assert_eq!(reparsed.to_arabic(), value, "via {:?}", elbonian);
        }
    }

    proptest! {
        #[test]
        fn test_round_trip_through_elbonian(value in MIN_VALUE..=MAX_VALUE) {
            let elbonian = Converter::from_value(value).unwrap().to_elbonian();
            let reparsed = Converter::new(&elbonian).unwrap();
            prop_assert_eq!(reparsed.to_arabic(), value);
        }

        #[test]
        fn test_round_trip_through_arabic_strings(value in MIN_VALUE..=MAX_VALUE) {
            let converter = Converter::new(&value.to_string()).unwrap();
            prop_assert_eq!(converter.to_arabic(), value);
        }

        #[test]
        fn test_out_of_bounds_always_rejected(
            value in prop_oneof![
                (i32::MIN..MIN_VALUE),
                (MAX_VALUE + 1..=i32::MAX),
            ]
        ) {
            prop_assert_eq!(
                Converter::from_value(value),
                Err(NumeralError::OutOfBounds(value))
            );
        }
    }

    #[test]
    fn test_minimal_forms_are_stable() {
        fn prop(seed: i32) -> bool {
            let span = MAX_VALUE - MIN_VALUE + 1;
            let value = MIN_VALUE + seed.rem_euclid(span);
            let minimal = Converter::from_value(value).unwrap().to_elbonian();
            let reparsed = Converter::new(&minimal).unwrap();
            reparsed.to_elbonian() == minimal && reparsed.to_arabic() == value
        }
        QuickCheck::new().tests(1000).quickcheck(prop as fn(i32) -> bool);
    }
}

//! Property-based tests for generated passwords.
//!
//! For any length and option combination, the password has exactly that many
//! characters and every character belongs to the permitted set.

use passgen::pass::charset::{SPECIALS, is_permitted};
use passgen::pass::{GenerationRequest, Generator, parse_length};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn length_is_exact(
        length in 0usize..512,
        caps in any::<bool>(),
        specials in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let mut generator = Generator::new(StdRng::seed_from_u64(seed));
        let pw = generator
            .generate(&GenerationRequest::new(length, caps, specials))
            .expect("generation should succeed");
        prop_assert_eq!(pw.len(), length);
    }

    #[test]
    fn characters_respect_options(
        length in 1usize..256,
        caps in any::<bool>(),
        specials in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let mut generator = Generator::new(StdRng::seed_from_u64(seed));
        let pw = generator
            .generate(&GenerationRequest::new(length, caps, specials))
            .expect("generation should succeed");

        for c in pw.as_str().chars() {
            prop_assert!(is_permitted(c, caps, specials), "{:?} not permitted", c);
            if !specials {
                prop_assert!(!SPECIALS.contains(&c));
            }
            if !caps {
                prop_assert!(!c.is_ascii_uppercase());
            }
        }
    }

    #[test]
    fn any_digit_string_parses(length in 0usize..1_000_000) {
        prop_assert_eq!(parse_length(&length.to_string()).unwrap(), length);
    }

    #[test]
    fn negative_numbers_never_parse(length in 1i64..1_000_000) {
        prop_assert!(parse_length(&(-length).to_string()).is_err());
    }
}

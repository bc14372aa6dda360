//! Unit tests for the password generator.
//!
//! Covers the concrete request scenarios, input validation, and injection of
//! the random source.

use passgen::ErrorKind;
use passgen::pass::charset::{SPECIALS, is_permitted};
use passgen::pass::{GenerationRequest, Generator, MAX_LENGTH, generate, parse_length};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rstest::rstest;

fn is_special(c: char) -> bool {
    SPECIALS.contains(&c)
}

// ─── Scenarios ───

#[test]
fn eight_characters_with_capitals_no_specials() {
    let pw = generate(8, true, false).unwrap();
    assert_eq!(pw.len(), 8);
    assert!(pw.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn zero_length_is_empty() {
    let pw = generate(0, true, true).unwrap();
    assert_eq!(pw.as_str(), "");
    assert!(pw.is_empty());
}

#[test]
fn twelve_characters_lowercase_with_specials() {
    let pw = generate(12, false, true).unwrap();
    assert_eq!(pw.len(), 12);
    assert!(!pw.as_str().chars().any(|c| c.is_ascii_uppercase()));
    assert!(
        pw.as_str()
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || is_special(c))
    );
}

#[test]
fn repeated_calls_differ() {
    let a = generate(5, true, true).unwrap();
    let b = generate(5, true, true).unwrap();
    assert_eq!(a.len(), 5);
    assert_eq!(b.len(), 5);
    // 77^5 outcomes; a collision here is not a realistic event.
    let c = generate(32, true, true).unwrap();
    let d = generate(32, true, true).unwrap();
    assert_ne!(c, d);
}

#[rstest]
#[case(1, false, false)]
#[case(1, true, true)]
#[case(64, false, false)]
#[case(64, true, false)]
#[case(64, false, true)]
#[case(64, true, true)]
#[case(4096, true, true)]
fn length_and_membership(#[case] length: usize, #[case] caps: bool, #[case] specials: bool) {
    let pw = generate(length, caps, specials).unwrap();
    assert_eq!(pw.len(), length);
    assert_eq!(pw.as_str().len(), length, "all characters are single-byte");
    for c in pw.as_str().chars() {
        assert!(is_permitted(c, caps, specials), "{c:?} not allowed");
    }
}

// ─── Validation ───

#[rstest]
#[case("-1")]
#[case("-100")]
#[case("")]
#[case("ten")]
#[case("3.0")]
#[case("-")]
#[case("18446744073709551615")]
#[case("18446744073709551616")]
#[case("10000000000000")]
fn rejects_non_integer_or_negative_length(#[case] input: &str) {
    let err = GenerationRequest::from_input(input, true, true).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidArgument(_)), "{err}");
}

#[test]
fn accepts_digit_lengths() {
    assert_eq!(parse_length("0").unwrap(), 0);
    assert_eq!(parse_length("007").unwrap(), 7);
    assert_eq!(
        GenerationRequest::from_input("20", false, true).unwrap(),
        GenerationRequest::new(20, false, true)
    );
}

#[test]
fn max_length_is_accepted_from_input() {
    assert_eq!(parse_length(&MAX_LENGTH.to_string()).unwrap(), MAX_LENGTH);
}

#[test]
fn oversized_request_fails_without_panicking() {
    let mut generator = Generator::new(StdRng::seed_from_u64(1));
    let err = generator
        .generate(&GenerationRequest::new(usize::MAX, true, true))
        .unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidArgument(_)), "{err}");

    // The generator stays usable after the failure.
    let pw = generator.generate(&GenerationRequest::new(8, true, true)).unwrap();
    assert_eq!(pw.len(), 8);
}

// ─── Injection ───

#[test]
fn same_seed_same_passwords() {
    let request = GenerationRequest::new(24, true, true);
    let mut a = Generator::new(StdRng::seed_from_u64(99));
    let mut b = Generator::new(StdRng::seed_from_u64(99));
    assert_eq!(a.generate(&request).unwrap(), b.generate(&request).unwrap());
}

#[test]
fn consecutive_draws_from_one_generator_differ() {
    let request = GenerationRequest::new(24, true, true);
    let mut generator = Generator::new(StdRng::seed_from_u64(99));
    let first = generator.generate(&request).unwrap();
    let second = generator.generate(&request).unwrap();
    assert_ne!(first, second);
}

#[test]
fn batch_passwords_are_independent() {
    let batch = Generator::system()
        .generate_batch(&GenerationRequest::new(20, true, true), 10)
        .unwrap();
    assert_eq!(batch.len(), 10);
    for (i, a) in batch.iter().enumerate() {
        for b in &batch[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

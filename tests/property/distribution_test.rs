//! Statistical checks on the production random source.
//!
//! Class proportions, letter frequencies and casing split are compared with
//! their expected values using wide tolerance bands (about ten standard
//! deviations) and a chi-square bound far beyond any sane significance level,
//! so a correct generator does not fail in practice.

use std::collections::HashMap;

use passgen::pass::charset::{CharClass, LETTERS, SPECIALS};
use passgen::pass::{GenerationRequest, Generator};

const SAMPLE: usize = 60_000;

fn class_counts(pw: &str) -> HashMap<CharClass, usize> {
    let mut counts = HashMap::new();
    for c in pw.chars() {
        *counts.entry(CharClass::of(c).expect("unknown character")).or_default() += 1;
    }
    counts
}

fn assert_near(actual: usize, expected: f64, tolerance: f64, what: &str) {
    let diff = (actual as f64 - expected).abs();
    assert!(
        diff <= tolerance,
        "{what}: got {actual}, expected {expected:.0} ± {tolerance:.0}"
    );
}

#[test]
fn three_classes_split_evenly_with_specials() {
    let pw = Generator::system()
        .generate(&GenerationRequest::new(SAMPLE, true, true))
        .unwrap();
    let counts = class_counts(pw.as_str());

    // sd = sqrt(n * 1/3 * 2/3) ≈ 115
    let expected = SAMPLE as f64 / 3.0;
    for class in [CharClass::Letter, CharClass::Digit, CharClass::Special] {
        assert_near(counts[&class], expected, 1_200.0, class.name());
    }
}

#[test]
fn two_classes_split_evenly_without_specials() {
    let pw = Generator::system()
        .generate(&GenerationRequest::new(SAMPLE, false, false))
        .unwrap();
    let counts = class_counts(pw.as_str());

    // sd = sqrt(n / 4) ≈ 122
    let expected = SAMPLE as f64 / 2.0;
    assert_near(counts[&CharClass::Letter], expected, 1_300.0, "letter");
    assert_near(counts[&CharClass::Digit], expected, 1_300.0, "digit");
    assert!(!counts.contains_key(&CharClass::Special));
}

#[test]
fn letters_are_uniform() {
    let pw = Generator::system()
        .generate(&GenerationRequest::new(SAMPLE * 2, false, false))
        .unwrap();

    let mut freq = [0usize; 26];
    let mut total = 0usize;
    for c in pw.as_str().chars().filter(|c| c.is_ascii_lowercase()) {
        freq[(c as u8 - b'a') as usize] += 1;
        total += 1;
    }
    assert!(freq.iter().all(|&n| n > 0), "every letter appears");

    let expected = total as f64 / LETTERS.len() as f64;
    let chi_square: f64 = freq
        .iter()
        .map(|&n| {
            let d = n as f64 - expected;
            d * d / expected
        })
        .sum();
    // 25 degrees of freedom: mean 25, p(chi2 > 100) is below 1e-10.
    assert!(chi_square < 100.0, "chi-square {chi_square:.1} too large");
}

#[test]
fn casing_splits_evenly() {
    let pw = Generator::system()
        .generate(&GenerationRequest::new(SAMPLE, true, false))
        .unwrap();

    let upper = pw.as_str().chars().filter(char::is_ascii_uppercase).count();
    let lower = pw.as_str().chars().filter(char::is_ascii_lowercase).count();
    let letters = upper + lower;

    // sd = sqrt(letters / 4) ≈ 87 for 30k letters
    assert_near(upper, letters as f64 / 2.0, 900.0, "uppercase");
    assert_near(lower, letters as f64 / 2.0, 900.0, "lowercase");
}

#[test]
fn digits_are_uniform() {
    let pw = Generator::system()
        .generate(&GenerationRequest::new(SAMPLE, false, false))
        .unwrap();

    let mut freq = [0usize; 10];
    for c in pw.as_str().chars().filter(char::is_ascii_digit) {
        freq[(c as u8 - b'0') as usize] += 1;
    }
    let total: usize = freq.iter().sum();
    let expected = total as f64 / 10.0;
    // sd = sqrt(total * 0.1 * 0.9) ≈ 52 for 30k digits
    for (digit, &n) in freq.iter().enumerate() {
        assert_near(n, expected, 550.0, &format!("digit {digit}"));
    }
}

#[test]
fn specials_are_uniform() {
    let pw = Generator::system()
        .generate(&GenerationRequest::new(SAMPLE, false, true))
        .unwrap();

    let mut freq = [0usize; SPECIALS.len()];
    for c in pw.as_str().chars() {
        if let Some(i) = SPECIALS.iter().position(|&s| s == c) {
            freq[i] += 1;
        }
    }
    assert!(freq.iter().all(|&n| n > 0), "every special appears");

    let total: usize = freq.iter().sum();
    let expected = total as f64 / SPECIALS.len() as f64;
    let chi_square: f64 = freq
        .iter()
        .map(|&n| {
            let d = n as f64 - expected;
            d * d / expected
        })
        .sum();
    // 14 degrees of freedom: mean 14, p(chi2 > 80) is below 1e-10.
    assert!(chi_square < 80.0, "chi-square {chi_square:.1} too large");
}

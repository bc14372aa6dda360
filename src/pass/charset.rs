//! Fixed character tables and character classes.

pub const LETTERS: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];
pub const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
pub const SPECIALS: [char; 15] = [
    '!', '@', '#', '$', '^', '&', '*', '.', '-', '_', '+', '=', ';', ':', '?',
];

/// Symbol group a single password character is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Letter,
    Digit,
    Special,
}

const WITHOUT_SPECIALS: [CharClass; 2] = [CharClass::Letter, CharClass::Digit];
const WITH_SPECIALS: [CharClass; 3] = [CharClass::Letter, CharClass::Digit, CharClass::Special];

impl CharClass {
    /// Classes a position may be drawn from, in draw-index order.
    pub fn available(allow_specials: bool) -> &'static [CharClass] {
        if allow_specials {
            &WITH_SPECIALS
        } else {
            &WITHOUT_SPECIALS
        }
    }

    pub fn table(self) -> &'static [char] {
        match self {
            CharClass::Letter => &LETTERS,
            CharClass::Digit => &DIGITS,
            CharClass::Special => &SPECIALS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Letter => "letter",
            CharClass::Digit => "digit",
            CharClass::Special => "special",
        }
    }

    /// Class of `c`, if it belongs to any table. Uppercase letters count as letters.
    pub fn of(c: char) -> Option<CharClass> {
        if LETTERS.contains(&c.to_ascii_lowercase()) {
            Some(CharClass::Letter)
        } else if DIGITS.contains(&c) {
            Some(CharClass::Digit)
        } else if SPECIALS.contains(&c) {
            Some(CharClass::Special)
        } else {
            None
        }
    }
}

/// Whether `c` may appear in a password generated with these options.
pub fn is_permitted(c: char, allow_capitals: bool, allow_specials: bool) -> bool {
    match CharClass::of(c) {
        Some(CharClass::Letter) => c.is_ascii_lowercase() || allow_capitals,
        Some(CharClass::Digit) => true,
        Some(CharClass::Special) => allow_specials,
        None => false,
    }
}

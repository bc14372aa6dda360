//! Password generation.

use std::fmt;

use rand::TryCryptoRng;
use tracing::{debug, instrument};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::charset::CharClass;
use crate::entropy::{self, SystemRandom, uniform_below};
use crate::error::{Error, ErrorKind, Result};

/// Parameters for one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub allow_capitals: bool,
    pub allow_specials: bool,
}

impl GenerationRequest {
    pub fn new(length: usize, allow_capitals: bool, allow_specials: bool) -> Self {
        Self {
            length,
            allow_capitals,
            allow_specials,
        }
    }

    /// Build a request from a length typed by the user.
    pub fn from_input(length: &str, allow_capitals: bool, allow_specials: bool) -> Result<Self> {
        Ok(Self::new(parse_length(length)?, allow_capitals, allow_specials))
    }
}

/// Longest password accepted from typed input.
pub const MAX_LENGTH: usize = 1 << 20;

/// Parse a user-supplied length. Only plain decimal digits up to
/// [`MAX_LENGTH`] are accepted.
pub fn parse_length(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_argument("length is required"));
    }
    if let Some(digits) = trimmed.strip_prefix('-')
        && !digits.is_empty()
        && digits.chars().all(|c| c.is_ascii_digit())
    {
        return Err(Error::invalid_argument(format!(
            "length must not be negative: {trimmed}"
        )));
    }
    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::invalid_argument(format!(
            "length must be a non-negative integer: {trimmed}"
        )));
    }
    match trimmed.parse() {
        Ok(length) if length <= MAX_LENGTH => Ok(length),
        _ => Err(Error::invalid_argument(format!(
            "length is too large: {trimmed} (max {MAX_LENGTH})"
        ))),
    }
}

/// A generated password. Wiped from memory when dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.len())
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Draws passwords from an owned secure random source.
pub struct Generator<R> {
    rng: R,
}

impl Generator<SystemRandom> {
    /// Generator backed by the operating system CSPRNG.
    pub fn system() -> Self {
        debug!(source = entropy::source_name(), "using system random source");
        Self::new(entropy::system())
    }
}

impl<R: TryCryptoRng> Generator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate one password of exactly `request.length` characters.
    ///
    /// Every position is drawn independently: first the class, then the
    /// symbol within it, then (for letters, when capitals are allowed) the
    /// casing.
    #[instrument(level = "debug", skip(self))]
    pub fn generate(&mut self, request: &GenerationRequest) -> Result<Password> {
        let classes = CharClass::available(request.allow_specials);
        if request.length > 0 {
            for class in classes {
                if class.table().is_empty() {
                    return Err(Error::new(ErrorKind::EmptyCharset(class.name().into())));
                }
            }
        }

        let mut password = String::new();
        password.try_reserve_exact(request.length).map_err(|_| {
            Error::invalid_argument(format!("length is too large: {}", request.length))
        })?;
        for _ in 0..request.length {
            match self.draw_char(classes, request.allow_capitals) {
                Ok(c) => password.push(c),
                Err(e) => {
                    password.zeroize();
                    return Err(e);
                }
            }
        }

        debug!(length = request.length, "password generated");
        Ok(Password(password))
    }

    /// Generate `count` independent passwords.
    pub fn generate_batch(
        &mut self,
        request: &GenerationRequest,
        count: usize,
    ) -> Result<Vec<Password>> {
        let mut batch = Vec::new();
        batch.try_reserve_exact(count).map_err(|_| {
            Error::invalid_argument(format!("too many passwords requested: {count}"))
        })?;
        for _ in 0..count {
            batch.push(self.generate(request)?);
        }
        Ok(batch)
    }

    fn draw_char(&mut self, classes: &[CharClass], allow_capitals: bool) -> Result<char> {
        let class = classes[uniform_below(&mut self.rng, classes.len())?];
        let table = class.table();
        let c = table[uniform_below(&mut self.rng, table.len())?];

        if class == CharClass::Letter && allow_capitals && uniform_below(&mut self.rng, 2)? == 1 {
            return Ok(c.to_ascii_uppercase());
        }
        Ok(c)
    }
}

/// Generate one password using the operating system CSPRNG.
pub fn generate(length: usize, allow_capitals: bool, allow_specials: bool) -> Result<Password> {
    Generator::system().generate(&GenerationRequest::new(length, allow_capitals, allow_specials))
}

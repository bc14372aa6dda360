//! Secure random source.
//!
//! Generators own the source they draw from; nothing in here keeps global
//! state. Production code uses the operating system CSPRNG, tests inject any
//! other `TryCryptoRng`.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::error::{Error, ErrorKind, Result};

/// Operating system CSPRNG (`getrandom`).
pub type SystemRandom = OsRng;

pub fn system() -> SystemRandom {
    OsRng
}

/// Name of the production entropy source.
pub fn source_name() -> &'static str {
    "OS CSPRNG (getrandom)"
}

/// Uniform integer in `[0, bound)`.
///
/// Rejection sampling over 64-bit draws keeps every value equally likely:
/// draws that fall in the incomplete last block are discarded and redrawn.
/// A failing source is reported as [`ErrorKind::Entropy`], never retried.
pub fn uniform_below<R: TryRngCore + ?Sized>(rng: &mut R, bound: usize) -> Result<usize> {
    if bound == 0 {
        return Err(Error::new(ErrorKind::EmptyCharset(
            "cannot draw from an empty range".into(),
        )));
    }

    let bound = bound as u64;
    // 2^64 mod bound
    let remainder = (u64::MAX - bound + 1) % bound;
    let limit = u64::MAX - remainder;

    loop {
        let value = rng
            .try_next_u64()
            .map_err(|e| Error::new(ErrorKind::Entropy(e.to_string())))?;
        if value <= limit {
            return Ok((value % bound) as usize);
        }
    }
}

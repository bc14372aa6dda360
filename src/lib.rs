//! Password generator with a terminal form and an append-only save file.
//!
//! The core is [`pass::Generator`]: each character is drawn independently
//! from an injected secure random source, first choosing its class (letter,
//! digit, or special when enabled), then the symbol, then for letters the
//! casing when capitals are enabled.
//!
//! ```
//! use passgen::pass::{self, charset};
//!
//! let pw = pass::generate(12, false, true).unwrap();
//! assert_eq!(pw.len(), 12);
//! assert!(pw.as_str().chars().all(|c| charset::is_permitted(c, false, true)));
//! ```

pub mod cli;
pub mod entropy;
pub mod error;
pub mod exits;
pub mod form;
pub mod pass;
pub mod settings;
pub mod terminal;

pub use error::{Error, ErrorKind, Result};

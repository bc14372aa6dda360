//! Password generation and output.

pub mod charset;
mod generate;
pub mod output;

pub use generate::{
    GenerationRequest, Generator, MAX_LENGTH, Password, generate, parse_length,
};

//! Saved generation defaults.

mod file;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::pass::GenerationRequest;
use crate::pass::output::DEFAULT_SAVE_FILE;

pub use file::default_path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub allow_capitals: bool,
    pub allow_specials: bool,
    pub save_file_path: String,
}

impl Settings {
    /// Load from the default settings path, writing defaults if the file is
    /// missing or malformed.
    pub fn load_from_file() -> Result<Self> {
        Self::load_from(default_path())
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let mut settings = Settings::default();
        file::load(&mut settings, path.as_ref())?;
        Ok(settings)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        file::save(self, path.as_ref())
    }

    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.pass_length, self.allow_capitals, self.allow_specials)
    }

    pub fn save_file(&self) -> PathBuf {
        PathBuf::from(&self.save_file_path)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 16,
            number_of_passwords: 1,
            allow_capitals: true,
            allow_specials: true,
            save_file_path: String::from(DEFAULT_SAVE_FILE),
        }
    }
}

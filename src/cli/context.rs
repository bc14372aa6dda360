//! CLI context - bundles settings, flags, and the generator.

use std::io;
use std::path::{Path, PathBuf};

use copypasta::{ClipboardContext, ClipboardProvider};
use rand::TryCryptoRng;
use tracing::{debug, info};

use super::{CliFlags, prompts};
use crate::entropy::SystemRandom;
use crate::error::{Error, ErrorKind, Result};
use crate::pass::output::{self, SaveRecord};
use crate::pass::{GenerationRequest, Generator, Password};
use crate::settings::{self, Settings};

/// Application context for CLI mode.
pub struct Context<R = SystemRandom> {
    pub settings: Settings,
    pub flags: CliFlags,
    generator: Generator<R>,
    settings_path: PathBuf,
}

impl Context<SystemRandom> {
    /// Load saved defaults and apply the command line on top of them.
    pub fn new(flags: CliFlags) -> Result<Self> {
        Self::with_generator(flags, settings::default_path(), Generator::system())
    }
}

impl<R: TryCryptoRng> Context<R> {
    pub fn with_generator(
        flags: CliFlags,
        settings_path: impl Into<PathBuf>,
        generator: Generator<R>,
    ) -> Result<Self> {
        let settings_path = settings_path.into();
        let saved = Settings::load_from(&settings_path).unwrap_or_else(|e| {
            prompts::warn(&format!("Failed to load settings: {e}"));
            Settings::default()
        });

        let mut context = Self {
            settings: saved,
            flags,
            generator,
            settings_path,
        };
        context.apply_flags()?;
        Ok(context)
    }

    /// Explicit flags override saved settings.
    fn apply_flags(&mut self) -> Result<()> {
        if let Some(ref length) = self.flags.length {
            self.settings.pass_length = crate::pass::parse_length(length)?;
        }
        if let Some(number) = self.flags.number {
            self.settings.number_of_passwords = number;
        }
        if let Some(capitals) = self.flags.capitals() {
            self.settings.allow_capitals = capitals;
        }
        if let Some(specials) = self.flags.specials() {
            self.settings.allow_specials = specials;
        }
        if let Some(ref path) = self.flags.output {
            self.settings.save_file_path = path.display().to_string();
        }
        debug!(settings = ?self.settings, "flags applied");
        Ok(())
    }

    pub fn request(&self) -> GenerationRequest {
        self.settings.request()
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Generate, then save, copy or print.
    pub fn run(&mut self) -> Result<()> {
        if self.flags.save_defaults {
            self.settings.save_to(&self.settings_path)?;
            prompts::defaults_saved(&self.settings_path);
        }

        let passwords = self.generate()?;

        if self.flags.save {
            self.save(&passwords)?;
        }

        if self.flags.clipboard {
            match copy_to_clipboard(&passwords) {
                Ok(()) => {
                    prompts::clipboard_copied(passwords.len());
                    return Ok(());
                }
                Err(e) => {
                    if !prompts::clipboard_fallback_prompt(&e.to_string()) {
                        return Err(e);
                    }
                }
            }
        }

        let stdout = io::stdout();
        output::write_passwords(&mut stdout.lock(), &passwords)
    }

    pub fn generate(&mut self) -> Result<Vec<Password>> {
        let request = self.request();
        let count = self.settings.number_of_passwords.max(1);
        info!(
            length = request.length,
            capitals = request.allow_capitals,
            specials = request.allow_specials,
            count,
            "generating"
        );
        self.generator.generate_batch(&request, count)
    }

    pub fn save(&self, passwords: &[Password]) -> Result<()> {
        let record = SaveRecord::new(
            self.flags.source.clone().unwrap_or_default(),
            self.flags.username.clone().unwrap_or_default(),
        );
        let path = self.settings.save_file();
        output::append_records(&path, &record, passwords)?;
        prompts::passwords_saved(passwords.len(), &path);
        Ok(())
    }
}

fn clipboard_error(e: impl std::fmt::Display) -> Error {
    Error::new(ErrorKind::Clipboard(e.to_string()))
}

fn copy_to_clipboard(passwords: &[Password]) -> Result<()> {
    let mut ctx = ClipboardContext::new().map_err(clipboard_error)?;
    // Moved into the clipboard, never cloned.
    let mut text = output::join_lines(passwords);
    ctx.set_contents(std::mem::take(&mut *text)).map_err(clipboard_error)
}

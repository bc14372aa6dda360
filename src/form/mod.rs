//! Interactive password form.
//!
//! Collects login source, username, length and the two character options,
//! generates on request and appends the result to the save file. Field
//! editing happens in raw mode; the form state itself has no terminal
//! dependency.

mod input;
mod text;

use std::path::Path;
use std::process::ExitCode;

use rand::TryCryptoRng;
use tracing::{debug, warn};

use crate::error::Result;
use crate::pass::output::{self, SaveRecord};
use crate::pass::{GenerationRequest, Generator, Password};
use crate::settings::Settings;
use crate::terminal::{clear, reset_terminal};

pub use input::Action;
pub use text::Message;

/// Values currently entered in the form, plus the last generated password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub source: String,
    pub username: String,
    /// Length as typed; validated on generate.
    pub length: String,
    pub allow_capitals: bool,
    pub allow_specials: bool,
    password: Option<Password>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            source: String::new(),
            username: String::new(),
            length: String::from("0"),
            allow_capitals: false,
            allow_specials: false,
            password: None,
        }
    }
}

impl FormState {
    pub fn password(&self) -> Option<&Password> {
        self.password.as_ref()
    }

    /// Validate the length and replace the shown password with a new one.
    /// On error the previous password stays.
    pub fn generate<R: TryCryptoRng>(&mut self, generator: &mut Generator<R>) -> Result<&Password> {
        let request =
            GenerationRequest::from_input(&self.length, self.allow_capitals, self.allow_specials)?;
        let password = generator.generate(&request)?;
        Ok(self.password.insert(password))
    }

    /// Append the current record and clear the form.
    /// Returns `false` without touching the file when nothing was generated.
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<bool> {
        let Some(ref password) = self.password else {
            return Ok(false);
        };
        let record = SaveRecord::new(self.source.clone(), self.username.clone());
        output::append_record(path, &record, password)?;
        self.clear();
        Ok(true)
    }

    /// Reset every field and drop the password.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Apply a field edit or toggle. Returns `false` for actions that are
    /// not edits.
    fn edit(&mut self, action: Action) -> bool {
        match action {
            Action::EditSource => {
                if let Some(s) = input::get_text_input("Login Source", &self.source) {
                    self.source = s;
                }
            }
            Action::EditUsername => {
                if let Some(s) = input::get_text_input("Existing Username", &self.username) {
                    self.username = s;
                }
            }
            Action::EditLength => {
                if let Some(s) = input::get_numeric_input("Password Length", &self.length) {
                    self.length = s;
                }
            }
            Action::ToggleCapitals => self.allow_capitals = !self.allow_capitals,
            Action::ToggleSpecials => self.allow_specials = !self.allow_specials,
            _ => return false,
        }
        true
    }
}

/// Run the form until the user quits.
pub fn run() -> ExitCode {
    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        warn!("failed to load settings: {e}");
        Settings::default()
    });
    let save_path = settings.save_file();

    let mut form = FormState::default();
    let mut generator = Generator::system();
    let mut message: Option<Message> = None;

    loop {
        clear();
        text::print_form(&form, &settings.save_file_path, message.as_ref());
        message = None;

        let action = input::read_action();
        debug!(?action, "form action");
        if form.edit(action) {
            continue;
        }

        match action {
            Action::Generate => {
                if let Err(e) = form.generate(&mut generator) {
                    message = Some(Message::Error(e.to_string()));
                }
            }
            Action::Save => {
                message = Some(match form.save(&save_path) {
                    Ok(true) => Message::Notice(format!(
                        "Saved to {} (plain text)",
                        save_path.display()
                    )),
                    Ok(false) => Message::Error("Generate a password first".into()),
                    Err(e) => Message::Error(e.to_string()),
                });
            }
            Action::Clear => form.clear(),
            Action::Quit => break,
            _ => {}
        }
    }

    clear();
    reset_terminal();
    ExitCode::SUCCESS
}

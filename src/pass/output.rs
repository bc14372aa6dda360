//! Password output: terminal lines and the append-only save file.
//!
//! The save file is plain text. Records are appended, never rewritten and
//! never encrypted.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use tracing::{debug, info};
use zeroize::Zeroizing;

use super::Password;
use crate::error::Result;

pub const DEFAULT_SAVE_FILE: &str = "savedpasswords.txt";

const SOURCE_LABEL: &str = "Login Source: ";
const USERNAME_LABEL: &str = "\nUsername: ";
const PASSWORD_LABEL: &str = "\nPassword: ";
const RECORD_END: &str = "\n\n";

/// Where a saved password is used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveRecord {
    pub source: String,
    pub username: String,
}

impl SaveRecord {
    pub fn new(source: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            username: username.into(),
        }
    }

    /// Text appended to the save file for `password`, blank line included.
    pub fn format(&self, password: &Password) -> Zeroizing<String> {
        let mut text = Zeroizing::new(String::with_capacity(self.formatted_len(password)));
        self.push_to(&mut text, password);
        text
    }

    fn formatted_len(&self, password: &Password) -> usize {
        SOURCE_LABEL.len()
            + self.source.len()
            + USERNAME_LABEL.len()
            + self.username.len()
            + PASSWORD_LABEL.len()
            + password.as_str().len()
            + RECORD_END.len()
    }

    /// Callers reserve `formatted_len` first so `out` never reallocates.
    fn push_to(&self, out: &mut String, password: &Password) {
        out.push_str(SOURCE_LABEL);
        out.push_str(&self.source);
        out.push_str(USERNAME_LABEL);
        out.push_str(&self.username);
        out.push_str(PASSWORD_LABEL);
        out.push_str(password.as_str());
        out.push_str(RECORD_END);
    }
}

/// All records for `passwords` in one buffer, wiped on drop.
fn records_text(record: &SaveRecord, passwords: &[Password]) -> Zeroizing<String> {
    let len = passwords.iter().map(|p| record.formatted_len(p)).sum();
    let mut text = Zeroizing::new(String::with_capacity(len));
    for password in passwords {
        record.push_to(&mut text, password);
    }
    text
}

/// Append one record to the save file, creating it (and its parent
/// directories) when missing.
pub fn append_record(path: impl AsRef<Path>, record: &SaveRecord, password: &Password) -> Result<()> {
    append_records(path, record, std::slice::from_ref(password))
}

/// Append one record per password, all under the same source and username.
pub fn append_records(
    path: impl AsRef<Path>,
    record: &SaveRecord,
    passwords: &[Password],
) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    let text = records_text(record, passwords);
    file.write_all(text.as_bytes())?;
    file.flush()?;

    info!(
        path = %path.display(),
        count = passwords.len(),
        source = %record.source,
        "saved password record(s)"
    );
    Ok(())
}

/// Write one password per line.
pub fn write_passwords<W: Write>(out: &mut W, passwords: &[Password]) -> Result<()> {
    for password in passwords {
        let mut line = Zeroizing::new(String::with_capacity(password.as_str().len() + 1));
        line.push_str(password.as_str());
        line.push('\n');
        out.write_all(line.as_bytes())?;
    }
    out.flush()?;
    debug!(count = passwords.len(), "passwords written");
    Ok(())
}

/// Passwords joined by newlines, for the clipboard. Wiped on drop.
pub fn join_lines(passwords: &[Password]) -> Zeroizing<String> {
    let len = passwords.iter().map(|p| p.as_str().len()).sum::<usize>()
        + passwords.len().saturating_sub(1);
    let mut text = Zeroizing::new(String::with_capacity(len));
    for (i, password) in passwords.iter().enumerate() {
        if i > 0 {
            text.push('\n');
        }
        text.push_str(password.as_str());
    }
    text
}

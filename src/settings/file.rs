//! Settings file persistence.
//!
//! One comma-separated line: length, count, capitals, specials, save path.
//! Commas and pipes inside the path are escaped with `|`.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::Settings;
use crate::error::{Error, ErrorKind, Result};
use crate::pass::parse_length;

const FIELD_COUNT: usize = 5;

pub fn save(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(settings_error)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(settings_error)?;

    let data = format!(
        "{},{},{},{},{}\n",
        settings.pass_length,
        settings.number_of_passwords,
        settings.allow_capitals,
        settings.allow_specials,
        escape(&settings.save_file_path),
    );

    file.write_all(data.as_bytes()).map_err(settings_error)?;
    debug!(path = %path.display(), "settings saved");
    Ok(())
}

pub fn load(settings: &mut Settings, path: &Path) -> Result<()> {
    if !path.exists() {
        debug!(path = %path.display(), "no settings file, writing defaults");
        return save(settings, path);
    }

    let file = OpenOptions::new().read(true).open(path).map_err(settings_error)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line).map_err(settings_error)?;

    let parts = split_escaped(line.trim_end_matches(['\n', '\r']), ',');
    if parts.len() != FIELD_COUNT {
        warn!(
            path = %path.display(),
            fields = parts.len(),
            "malformed settings file, restoring defaults"
        );
        *settings = Settings::default();
        return save(settings, path);
    }

    settings.pass_length = parse_length(&parts[0]).unwrap_or(settings.pass_length);
    settings.number_of_passwords = parts[1].parse().unwrap_or(settings.number_of_passwords);
    settings.allow_capitals = parts[2].parse().unwrap_or(settings.allow_capitals);
    settings.allow_specials = parts[3].parse().unwrap_or(settings.allow_specials);
    settings.save_file_path = parts[4].clone();

    Ok(())
}

/// `$PASSGEN_SETTINGS`, else `$HOME/.config/passgen/settings`.
pub fn default_path() -> PathBuf {
    if let Ok(path) = env::var("PASSGEN_SETTINGS")
        && !path.is_empty()
    {
        return PathBuf::from(path);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/passgen/settings")
}

fn settings_error(err: std::io::Error) -> Error {
    Error::new(ErrorKind::Settings(err.to_string()))
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == ',' || c == '|' {
            out.push('|');
        }
        out.push(c);
    }
    out
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);

    parts
}

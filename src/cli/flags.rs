use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Default, Parser)]
#[command(
    name = "passgen",
    version,
    about = "Generate passwords and keep a plain-text record of where they are used",
    long_about = r#"
Generates passwords from lowercase letters, digits and, optionally, capital
letters and the special characters ! @ # $ ^ & * . - _ + = ; : ?

Each character is drawn independently from the operating system CSPRNG:
first its class (letter, digit, special), then the symbol, then its casing.

Run without arguments on a terminal to open the interactive form.

Saved records are appended to a PLAIN-TEXT file. Nothing is encrypted.
"#
)]
pub struct CliFlags {
    /// Characters per password
    #[arg(short, long, value_name = "N", allow_hyphen_values = true)]
    pub length: Option<String>,

    /// How many passwords to generate
    #[arg(short, long, value_name = "N")]
    pub number: Option<usize>,

    /// Allow capital letters
    #[arg(short = 'C', long, overrides_with = "no_capitals")]
    pub capitals: bool,

    /// Lowercase letters only
    #[arg(long, overrides_with = "capitals")]
    pub no_capitals: bool,

    /// Allow special characters
    #[arg(short = 'S', long, overrides_with = "no_specials")]
    pub specials: bool,

    /// Letters and digits only
    #[arg(long, overrides_with = "specials")]
    pub no_specials: bool,

    /// Append the password(s) to the save file
    #[arg(short, long)]
    pub save: bool,

    /// Login source recorded with saved passwords
    #[arg(long, value_name = "SOURCE", requires = "save")]
    pub source: Option<String>,

    /// Username recorded with saved passwords
    #[arg(short, long, value_name = "NAME", requires = "save")]
    pub username: Option<String>,

    /// Save file path
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Suppress warnings and confirmations
    #[arg(short, long)]
    pub quiet: bool,

    /// Open the interactive form
    #[arg(short, long)]
    pub interactive: bool,

    /// Store length, count, casing, specials and save path as defaults
    #[arg(long)]
    pub save_defaults: bool,
}

impl CliFlags {
    pub fn capitals(&self) -> Option<bool> {
        toggle(self.capitals, self.no_capitals)
    }

    pub fn specials(&self) -> Option<bool> {
        toggle(self.specials, self.no_specials)
    }
}

fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

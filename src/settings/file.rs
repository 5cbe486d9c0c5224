//! Settings file persistence.
//!
//! One CSV line: `length,count,lower,upper,digits,symbols,symbol_set,
//! exclude_similar,exclude_ambiguous`.

use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::Settings;
use crate::csv::{Delimiter, tokenize, write_row};

const FIELDS: usize = 9;

pub fn save(path: &Path, settings: &Settings) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let pass = &settings.pass;
    let cells = [
        pass.length.to_string(),
        settings.number_of_passwords.to_string(),
        pass.lowercase.to_string(),
        pass.uppercase.to_string(),
        pass.digits.to_string(),
        pass.symbols.to_string(),
        pass.symbol_set.clone(),
        pass.exclude_similar.to_string(),
        pass.exclude_ambiguous.to_string(),
    ];

    let mut line = write_row(&cells, Delimiter::COMMA);
    line.push('\n');
    file.write_all(line.as_bytes())?;
    debug!(path = %path.display(), "settings saved");
    Ok(())
}

/// Fill `settings` from `path`. A missing or empty file leaves the
/// defaults; a line with the wrong field count is replaced by the current
/// values. Fields that fail to parse keep their current value.
pub fn load(path: &Path, settings: &mut Settings) -> std::io::Result<()> {
    if !path.exists() {
        return Ok(());
    }

    let text = std::fs::read_to_string(path)?;
    let rows = tokenize(&text, Delimiter::COMMA);
    let Some(parts) = rows.first() else {
        return Ok(());
    };

    if parts.len() != FIELDS {
        warn!(
            path = %path.display(),
            fields = parts.len(),
            "malformed settings file, rewriting defaults"
        );
        return save(path, settings);
    }

    let pass = &mut settings.pass;
    pass.length = parts[0].parse().unwrap_or(pass.length);
    settings.number_of_passwords = parts[1]
        .parse()
        .ok()
        .filter(|&n| n > 0)
        .unwrap_or(settings.number_of_passwords);
    pass.lowercase = parts[2].parse().unwrap_or(pass.lowercase);
    pass.uppercase = parts[3].parse().unwrap_or(pass.uppercase);
    pass.digits = parts[4].parse().unwrap_or(pass.digits);
    pass.symbols = parts[5].parse().unwrap_or(pass.symbols);
    pass.symbol_set = parts[6].clone();
    pass.exclude_similar = parts[7].parse().unwrap_or(pass.exclude_similar);
    pass.exclude_ambiguous = parts[8].parse().unwrap_or(pass.exclude_ambiguous);

    Ok(())
}

#[inline]
pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/swisskit/settings")
}

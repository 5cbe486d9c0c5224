//! Character classes and pool building.

use std::collections::HashSet;

use tracing::debug;

use crate::error::PassError;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,<.>/?";

/// Characters easily confused with one another when read.
pub const SIMILAR: &[char] = &['i', 'l', '1', 'L', 'o', '0', 'O'];

/// Characters that tend to break quoting in shells, configs and URLs.
pub const AMBIGUOUS: &[char] = &[
    '{', '}', '[', ']', '(', ')', '/', '\\', '\'', '"', '`', '~', ',', ';', ':', '.', '<', '>',
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digits,
        CharClass::Symbols,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Digits => "digits",
            CharClass::Symbols => "symbols",
        }
    }
}

/// What to generate. Defaults to the `strong` preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassConfig {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
    /// Alphabet used for the symbols class.
    pub symbol_set: String,
    pub exclude_similar: bool,
    pub exclude_ambiguous: bool,
}

impl PassConfig {
    pub fn is_enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => self.lowercase,
            CharClass::Uppercase => self.uppercase,
            CharClass::Digits => self.digits,
            CharClass::Symbols => self.symbols,
        }
    }

    pub fn alphabet(&self, class: CharClass) -> &str {
        match class {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Symbols => &self.symbol_set,
        }
    }

    fn keeps(&self, c: char) -> bool {
        (!self.exclude_similar || !SIMILAR.contains(&c))
            && (!self.exclude_ambiguous || !AMBIGUOUS.contains(&c))
    }
}

impl Default for PassConfig {
    fn default() -> Self {
        super::Preset::Strong.config()
    }
}

/// Filtered alphabets of the enabled classes plus their union.
#[derive(Debug, Clone)]
pub struct Pool {
    classes: Vec<(CharClass, Vec<char>)>,
    combined: Vec<char>,
}

impl Pool {
    /// Classes that survived filtering, in declaration order.
    pub fn classes(&self) -> impl Iterator<Item = (CharClass, &[char])> {
        self.classes.iter().map(|(c, chars)| (*c, chars.as_slice()))
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn combined(&self) -> &[char] {
        &self.combined
    }

    /// Whether `length` can hold one character of every class.
    pub fn check_length(&self, length: usize) -> Result<(), PassError> {
        let classes = self.class_count();
        match length {
            0 => Err(PassError::ZeroLength),
            n if n < classes => Err(PassError::LengthBelowClasses { length, classes }),
            _ => Ok(()),
        }
    }

    /// Size of the combined pool, for entropy estimates.
    pub fn size(&self) -> usize {
        self.combined.len()
    }
}

/// Filter each enabled class and drop the ones left empty.
///
/// Repeated characters are collapsed, within a class and across the union,
/// so a symbol set like `!!?` or one overlapping the letters does not weight
/// the fill. Fails with [`PassError::EmptyPool`] when nothing usable remains.
pub fn build(config: &PassConfig) -> Result<Pool, PassError> {
    let mut classes = Vec::new();

    for class in CharClass::ALL {
        if !config.is_enabled(class) {
            continue;
        }
        let chars = dedup(config.alphabet(class).chars().filter(|&c| config.keeps(c)));
        if chars.is_empty() {
            debug!(class = class.name(), "class empty after filtering, dropped");
            continue;
        }
        classes.push((class, chars));
    }

    if classes.is_empty() {
        return Err(PassError::EmptyPool);
    }

    let combined = dedup(classes.iter().flat_map(|(_, c)| c.iter().copied()));
    debug!(
        classes = classes.len(),
        size = combined.len(),
        "character pool built"
    );

    Ok(Pool { classes, combined })
}

/// Keep the first occurrence of each character.
fn dedup(chars: impl Iterator<Item = char>) -> Vec<char> {
    let mut seen = HashSet::new();
    chars.filter(|c| seen.insert(*c)).collect()
}

//! Named password templates.

use std::fmt;
use std::str::FromStr;

use super::charset::{PassConfig, SYMBOLS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Strong,
    ExtraStrong,
    Pin,
    Memorable,
    Website,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Strong,
        Preset::ExtraStrong,
        Preset::Pin,
        Preset::Memorable,
        Preset::Website,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Strong => "strong",
            Preset::ExtraStrong => "extra-strong",
            Preset::Pin => "pin",
            Preset::Memorable => "memorable",
            Preset::Website => "website",
        }
    }

    pub fn config(self) -> PassConfig {
        //                  len   lower  upper  digit  symbol similar ambiguous
        let (length, lowercase, uppercase, digits, symbols, exclude_similar, exclude_ambiguous) =
            match self {
                Preset::Strong => (16, true, true, true, true, true, false),
                Preset::ExtraStrong => (24, true, true, true, true, true, false),
                Preset::Pin => (6, false, false, true, false, false, false),
                Preset::Memorable => (20, true, true, true, false, true, false),
                Preset::Website => (12, true, true, true, true, false, true),
            };
        PassConfig {
            length,
            lowercase,
            uppercase,
            digits,
            symbols,
            symbol_set: SYMBOLS.to_string(),
            exclude_similar,
            exclude_ambiguous,
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase().replace(['_', ' '], "-");
        Preset::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Preset::ALL.iter().map(|p| p.name()).collect();
                format!("Unknown preset: {s} (expected one of {})", names.join(", "))
            })
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

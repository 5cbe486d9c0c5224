//! Saved password defaults.

mod file;

use std::path::{Path, PathBuf};

use crate::pass::PassConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass: PassConfig,
    pub number_of_passwords: usize,
}

impl Settings {
    pub fn path() -> PathBuf {
        file::default_path()
    }

    pub fn load_from_file() -> Result<Self, std::io::Error> {
        Self::load_from(&Self::path())
    }

    pub fn load_from(path: &Path) -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(path, &mut settings)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        file::save(path, self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass: PassConfig::default(),
            number_of_passwords: 1,
        }
    }
}

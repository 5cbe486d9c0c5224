//! Password command context: settings, flags, random source and clipboard.

use std::path::PathBuf;

use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::debug;
use zeroize::Zeroize;

use super::flags::PassFlags;
use super::{prompts, quiet};
use crate::error::{Error, Result};
use crate::pass::{self, Pool, strength};
use crate::rand::Rng;
use crate::settings::Settings;
use crate::terminal::{box_bottom, box_line, box_top, score_label};

pub struct Context {
    pub settings: Settings,
    pub flags: PassFlags,
    settings_path: PathBuf,
    rng: Rng,
}

impl Context {
    /// Resolve settings from the saved file (with `--saved`), the preset and
    /// the explicit flags, in that order.
    pub fn new(flags: PassFlags) -> Self {
        let mut settings = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        } else {
            Settings::default()
        };

        if let Some(preset) = flags.preset {
            settings.pass = preset.config();
        }

        let rng = if flags.hw { Rng::hardware() } else { Rng::new() };

        let mut ctx = Self {
            settings,
            flags,
            settings_path: Settings::path(),
            rng,
        };
        ctx.apply_flags();
        ctx
    }

    fn apply_flags(&mut self) {
        let pass = &mut self.settings.pass;
        let flags = &self.flags;

        if let Some(len) = flags.length {
            pass.length = len;
        }
        if let Some(num) = flags.number {
            self.settings.number_of_passwords = num;
        }
        if flags.no_lower {
            pass.lowercase = false;
        }
        if flags.no_upper {
            pass.uppercase = false;
        }
        if flags.no_digits {
            pass.digits = false;
        }
        if flags.no_symbols {
            pass.symbols = false;
        }
        if let Some(ref chars) = flags.symbols {
            pass.symbol_set = chars.clone();
            pass.symbols = !flags.no_symbols;
        }
        if flags.allow_similar {
            pass.exclude_similar = false;
        }
        if flags.no_ambiguous {
            pass.exclude_ambiguous = true;
        }
    }

    pub fn run(&mut self) -> Result<()> {
        // A configuration that cannot produce a password is never saved.
        let pool = pass::charset::build(&self.settings.pass)?;
        pool.check_length(self.settings.pass.length)?;

        if self.flags.save {
            self.settings.save_to(&self.settings_path)?;
            prompts::settings_saved(&self.settings_path);
        }

        if !self.rng.is_secure() {
            prompts::weak_source(self.rng.source_name());
        }

        let count = self.settings.number_of_passwords;
        debug!(count, length = self.settings.pass.length, "generating passwords");

        if self.flags.stats && !quiet::enabled() {
            self.print_stats(&pool);
        }

        if self.flags.clipboard {
            return self.to_clipboard(&pool, count);
        }

        match self.flags.output.as_deref() {
            Some(path) => {
                let path = PathBuf::from(path);
                let file = pass::output::open_append(&path)?;
                pass::output::write_batch(&pool, self.settings.pass.length, count, &mut self.rng, file)?;
                prompts::passwords_written(count, &path);
            }
            None => self.to_stdout(&pool, count)?,
        }
        Ok(())
    }

    fn to_stdout(&mut self, pool: &Pool, count: usize) -> Result<()> {
        let stdout = std::io::stdout();
        pass::output::write_batch(
            pool,
            self.settings.pass.length,
            count,
            &mut self.rng,
            stdout.lock(),
        )
    }

    fn to_clipboard(&mut self, pool: &Pool, count: usize) -> Result<()> {
        let mut ctx = match ClipboardContext::new() {
            Ok(c) => c,
            Err(e) => {
                debug!(error = %e, "clipboard unavailable");
                if prompts::clipboard_fallback_prompt() {
                    return self.to_stdout(pool, count);
                }
                return Ok(());
            }
        };

        let passwords =
            pass::output::collect_batch(pool, self.settings.pass.length, count, &mut self.rng)?;
        ctx.set_contents(passwords.to_string())
            .map_err(|e| Error::Clipboard(e.to_string()))?;

        if let Ok(mut retrieved) = ctx.get_contents() {
            retrieved.zeroize();
        }
        prompts::clipboard_copied();
        Ok(())
    }

    fn print_stats(&self, pool: &Pool) {
        let length = self.settings.pass.length;
        let bits = strength::entropy_bits(length, pool.size());
        let label = strength::entropy_label(bits);
        let classes: Vec<&str> = pool.classes().map(|(c, _)| c.name()).collect();

        box_top("Entropy");
        box_line(&format!("{:.1} bits ({})", bits, score_label(label, entropy_score(bits))));
        box_line(&format!(
            "Source: {} \u{2022} Charset: {} chars",
            self.rng.source_name(),
            pool.size()
        ));
        box_line(&format!("Classes: {}", classes.join(", ")));
        box_bottom();
        println!();
    }
}

/// Map entropy bands onto the 0..=5 colour scale.
fn entropy_score(bits: f64) -> u8 {
    match bits as u32 {
        0..=35 => 1,
        36..=59 => 2,
        60..=127 => 4,
        _ => 5,
    }
}

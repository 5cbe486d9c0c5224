//! `strength` subcommand.

use std::io::{self, BufRead};

use zeroize::Zeroizing;

use super::flags::StrengthFlags;
use super::quiet;
use crate::error::Result;
use crate::pass::strength::{self, Check, MAX_SCORE, Strength};
use crate::terminal::{box_bottom, box_line, box_top, score_label};

pub fn run(flags: StrengthFlags) -> Result<()> {
    let password = match flags.password {
        Some(p) => Zeroizing::new(p),
        None => read_first_line()?,
    };

    let checked = strength::check(&password);
    if quiet::enabled() {
        println!("{}", summary(&checked));
    } else {
        let meter = strength::evaluate(&password);
        print_box(&checked, &meter, password.chars().count());
    }
    Ok(())
}

fn read_first_line() -> io::Result<Zeroizing<String>> {
    let mut line = Zeroizing::new(String::new());
    io::stdin().lock().read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(line)
}

fn summary(c: &Check) -> String {
    format!("{}/100 {}", c.score, c.label)
}

fn print_box(c: &Check, meter: &Strength, length: usize) {
    box_top("Strength");
    box_line(&format!(
        "Score: {}/100 {}",
        c.score,
        score_label(c.label, c.level())
    ));
    box_line(&format!("Length: {length}"));
    box_line(&format!(
        "Meter: {}/{} {} \u{2022} Time to crack: {}",
        meter.score, MAX_SCORE, meter.label, meter.time_to_crack
    ));
    if !c.suggestions.is_empty() {
        box_line("");
        box_line("Suggestions:");
        for tip in &c.suggestions {
            box_line(&format!("  \u{2022} {tip}"));
        }
    }
    box_bottom();
}

//! Terminal output utilities.
//!
//! Box drawing, help option rows, and score colouring.

use std::io::{self, IsTerminal};

use crossterm::style::{Color, Stylize};

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    println!("│ {}{} │", content, " ".repeat(padding));
}

/// Print centered box content line: │          content          │
pub fn box_line_center(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let total_padding = inner_width.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    println!(
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    );
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Print a help option with flag and description, auto-wrapping if needed.
pub fn box_opt(flag: &str, desc: &str) {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 27;
    let desc_col = inner_width - flag_col;

    let flag_padded = format!("{:<width$}", flag, width = flag_col);
    let indent = " ".repeat(flag_col);

    for (i, line) in wrap(desc, desc_col).iter().enumerate() {
        let lead = if i == 0 { &flag_padded } else { &indent };
        let padding = desc_col.saturating_sub(line.chars().count());
        println!("│ {}{}{} │", lead, line, " ".repeat(padding));
    }
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Display width ignoring ANSI escape sequences.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Styled Output
// ============================================================================

/// Colour a strength label by score (0..=5) when stdout is a terminal.
pub fn score_label(label: &str, score: u8) -> String {
    if !io::stdout().is_terminal() {
        return label.to_string();
    }
    let color = match score {
        0 => Color::Red,
        1 => Color::DarkYellow,
        2 => Color::Yellow,
        3 => Color::Blue,
        4 => Color::Green,
        _ => Color::DarkGreen,
    };
    label.with(color).bold().to_string()
}

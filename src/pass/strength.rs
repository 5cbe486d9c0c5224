//! Password strength scoring and entropy estimates.

use std::collections::HashSet;

/// Characters the scorer counts as symbols.
const SCORED_SYMBOLS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

const LEVELS: [(&str, &str); 6] = [
    ("Very Weak", "Instantly"),
    ("Weak", "Minutes"),
    ("Fair", "Hours"),
    ("Good", "Days"),
    ("Strong", "Years"),
    ("Very Strong", "Centuries"),
];

pub const MAX_SCORE: u8 = (LEVELS.len() - 1) as u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength {
    pub score: u8,
    pub label: &'static str,
    pub time_to_crack: &'static str,
}

impl Strength {
    fn from_score(score: u8) -> Self {
        let score = score.min(MAX_SCORE);
        let (label, time_to_crack) = LEVELS[score as usize];
        Strength {
            score,
            label,
            time_to_crack,
        }
    }
}

/// Heuristic score from length and character variety.
///
/// +1 per length step (8, 12, 16, 20), +1 per class present, +1 past 20
/// characters; -1 for a run of three identical characters, -2 more when the
/// whole password is one repeated character. Clamped to `0..=5`.
pub fn evaluate(password: &str) -> Strength {
    if password.is_empty() {
        return Strength::from_score(0);
    }

    let length = password.chars().count();
    let mut score: u8 = [8, 12, 16, 20].iter().filter(|&&n| length >= n).count() as u8;

    let checks = [
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| SCORED_SYMBOLS.contains(c)),
        length > 20,
    ];
    score += checks.iter().filter(|&&hit| hit).count() as u8;

    if has_run(password, 3) {
        score = score.saturating_sub(1);
    }
    if is_single_char(password) {
        score = score.saturating_sub(2);
    }

    Strength::from_score(score)
}

fn has_run(s: &str, min: usize) -> bool {
    let mut prev = None;
    let mut run = 0;
    for c in s.chars() {
        if Some(c) == prev {
            run += 1;
        } else {
            prev = Some(c);
            run = 1;
        }
        if run >= min {
            return true;
        }
    }
    false
}

fn is_single_char(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => false,
    }
}

/// Entropy in bits of a uniform password over `pool_size` characters.
pub fn entropy_bits(length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}

pub fn entropy_label(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

// ============================================================================
// Checker
// ============================================================================

/// Substrings that mark a password as built from a common word or sequence.
/// Matched case-insensitively.
const COMMON_PATTERNS: [&str; 5] = ["password", "1234", "qwerty", "letmein", "admin"];

/// Result of [`check`]: a 0..=100 score with advice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub score: u8,
    pub label: &'static str,
    pub suggestions: Vec<&'static str>,
}

impl Check {
    /// Score folded onto the 0..=5 scale used for colouring.
    pub fn level(&self) -> u8 {
        (self.score / 20).min(MAX_SCORE)
    }
}

/// Score a password out of 100 and list what would improve it.
///
/// Length steps give 20/15/10 points (8, 12, 16 characters) and each class
/// present gives 10; anything outside `A-Za-z0-9` counts as a symbol. Fewer
/// than half unique characters costs 10, a common pattern costs 30.
pub fn check(password: &str) -> Check {
    if password.is_empty() {
        return Check {
            score: 0,
            label: check_label(0),
            suggestions: vec!["Use a longer password"],
        };
    }

    let length = password.chars().count();
    let mut score: i32 = 0;
    let mut suggestions = Vec::new();
    let mut award = |hit: bool, points: i32, advice: Option<&'static str>| {
        if hit {
            score += points;
        } else if let Some(advice) = advice {
            suggestions.push(advice);
        }
    };

    award(length >= 8, 20, Some("Use at least 8 characters"));
    award(length >= 12, 15, Some("Use 12+ characters for better security"));
    award(length >= 16, 10, None);
    award(
        password.chars().any(|c| c.is_ascii_lowercase()),
        10,
        Some("Include lowercase letters"),
    );
    award(
        password.chars().any(|c| c.is_ascii_uppercase()),
        10,
        Some("Include uppercase letters"),
    );
    award(
        password.chars().any(|c| c.is_ascii_digit()),
        10,
        Some("Include numbers"),
    );
    award(
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
        10,
        Some("Include symbols"),
    );

    let unique = password.chars().collect::<HashSet<_>>().len();
    if unique * 2 < length {
        score -= 10;
        suggestions.push("Avoid repeating characters");
    }

    let lower = password.to_lowercase();
    if COMMON_PATTERNS.iter().any(|p| lower.contains(p)) {
        score = (score - 30).max(0);
        suggestions.push("Avoid common words and patterns");
    }

    let score = score.clamp(0, 100) as u8;
    let mut seen = HashSet::new();
    suggestions.retain(|s| seen.insert(*s));

    Check {
        score,
        label: check_label(score),
        suggestions,
    }
}

fn check_label(score: u8) -> &'static str {
    match score {
        80.. => "Very strong",
        60..=79 => "Strong",
        40..=59 => "Fair",
        20..=39 => "Weak",
        _ => "Very weak",
    }
}

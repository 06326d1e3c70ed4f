//  ____ __        __     ____
// |  _ \\ \      / /__  / ___| ___ _ __
// | |_) |\ \ /\ / / _ \| |  _ / _ \ '_ \
// |  _ < \ V  V / (_) | |_| |  __/ | | |
// |_| \_\ \_/\_/ \___/ \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-03
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password strength analyzer

use std::collections::HashMap;

use regex::Regex;
use serde::Serialize;
use zxcvbn::{Score, zxcvbn};

/// Substring patterns that betray a guessable password.
const COMMON_PATTERNS: [&str; 8] = [
    r"\d{4}",
    "123+",
    "abc+",
    "qwerty",
    "password",
    "admin",
    "root",
    "user",
];

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

const LEET_CHARS: [char; 6] = ['@', '3', '1', '0', '5', '7'];

const WEAK_PASSWORDS: [&str; 15] = [
    "password", "123456", "password123", "admin", "qwerty", "letmein", "welcome", "monkey",
    "dragon", "master", "hello", "login", "pass", "shadow", "jordan",
];

fn charset_size(name: &str) -> u32 {
    match name {
        "lowercase" | "uppercase" => 26,
        "digits" => 10,
        "symbols" => 32,
        "space" => 1,
        _ => 0,
    }
}

/// Full analysis record for one password.
#[derive(Debug, Clone, Serialize)]
pub struct PasswordAnalysis {
    pub strength_score: u8,
    pub strength_level: String,
    pub entropy: f64,
    pub length: usize,
    pub character_sets: Vec<String>,
    pub patterns_found: Vec<String>,
    pub recommendations: Vec<String>,
    pub time_to_crack: String,
}

/// Scores a password from its length, character diversity, entropy and
/// detected weak patterns. Pure arithmetic, no I/O.
pub fn analyze_password(password: &str) -> PasswordAnalysis {
    if password.is_empty() {
        return PasswordAnalysis {
            strength_score: 0,
            strength_level: "Very Weak".to_string(),
            entropy: 0.0,
            length: 0,
            character_sets: Vec::new(),
            patterns_found: Vec::new(),
            recommendations: vec!["Password cannot be empty".to_string()],
            time_to_crack: "Instant".to_string(),
        };
    }

    let length = password.chars().count();
    let character_sets = identify_character_sets(password);
    let entropy = calculate_entropy(password, &character_sets);
    let patterns_found = detect_patterns(password);
    let strength_score = strength_score(length, &character_sets, entropy, &patterns_found, password);

    PasswordAnalysis {
        strength_score,
        strength_level: strength_level(strength_score).to_string(),
        entropy: (entropy * 100.0).round() / 100.0,
        length,
        character_sets: character_sets.clone(),
        patterns_found: patterns_found.clone(),
        recommendations: recommendations(length, &character_sets, &patterns_found, password),
        time_to_crack: estimate_crack_time(entropy),
    }
}

fn identify_character_sets(password: &str) -> Vec<String> {
    let mut sets = Vec::new();
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        sets.push("lowercase".to_string());
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        sets.push("uppercase".to_string());
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        sets.push("digits".to_string());
    }
    if password
        .chars()
        .any(|c| !c.is_ascii_alphanumeric() && !c.is_whitespace())
    {
        sets.push("symbols".to_string());
    }
    if password.contains(' ') {
        sets.push("space".to_string());
    }
    sets
}

/// Pool-size entropy blended with Shannon entropy, weighted 0.7 / 0.3.
fn calculate_entropy(password: &str, character_sets: &[String]) -> f64 {
    if password.is_empty() || character_sets.is_empty() {
        return 0.0;
    }

    let pool: u32 = character_sets.iter().map(|s| charset_size(s)).sum();
    let length = password.chars().count() as f64;
    let basic = length * (pool as f64).log2();

    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in password.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    let mut shannon = 0.0;
    for count in counts.values() {
        let p = *count as f64 / length;
        shannon -= p * p.log2();
    }

    basic * 0.7 + shannon * length * 0.3
}

fn detect_patterns(password: &str) -> Vec<String> {
    let mut found = Vec::new();
    let lower = password.to_lowercase();

    for pattern in COMMON_PATTERNS {
        let re = Regex::new(pattern).expect("pattern is valid");
        if re.is_match(&lower) {
            found.push(format!("Contains pattern: {pattern}"));
        }
    }

    if has_repeated_run(password, 3) {
        found.push("Repetitive characters".to_string());
    }

    for row in KEYBOARD_ROWS {
        let row_chars: Vec<char> = row.chars().collect();
        for window in row_chars.windows(3) {
            let needle: String = window.iter().collect();
            if lower.contains(&needle) {
                found.push("Keyboard pattern detected".to_string());
                break;
            }
        }
    }

    if password.chars().any(|c| LEET_CHARS.contains(&c)) {
        found.push("Leetspeak substitutions detected".to_string());
    }

    if Regex::new(r"(19|20)\d{2}")
        .expect("pattern is valid")
        .is_match(password)
    {
        found.push("Contains year".to_string());
    }

    if WEAK_PASSWORDS.contains(&lower.as_str()) {
        found.push("Common weak password".to_string());
    }

    found
}

fn has_repeated_run(password: &str, run: usize) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars.windows(run).any(|w| w.iter().all(|c| *c == w[0]))
}

fn strength_score(
    length: usize,
    character_sets: &[String],
    entropy: f64,
    patterns: &[String],
    password: &str,
) -> u8 {
    let mut score: f64 = 0.0;

    // 长度最高40分
    score += match length {
        12.. => 40.0,
        8..=11 => 30.0,
        6..=7 => 20.0,
        _ => (length * 2) as f64,
    };

    score += (character_sets.len() as f64 * 7.5).min(30.0);

    score += if entropy >= 60.0 {
        20.0
    } else if entropy >= 40.0 {
        15.0
    } else if entropy >= 25.0 {
        10.0
    } else {
        entropy / 4.0
    };

    score -= patterns.len() as f64 * 5.0;

    if WEAK_PASSWORDS.contains(&password.to_lowercase().as_str()) {
        score -= 30.0;
    }

    score.clamp(0.0, 100.0) as u8
}

pub fn strength_level(score: u8) -> &'static str {
    match score {
        80.. => "Very Strong",
        60..=79 => "Strong",
        40..=59 => "Moderate",
        20..=39 => "Weak",
        _ => "Very Weak",
    }
}

fn recommendations(
    length: usize,
    character_sets: &[String],
    patterns: &[String],
    password: &str,
) -> Vec<String> {
    let mut recs = Vec::new();

    if length < 8 {
        recs.push("Use at least 8 characters (12+ recommended)".to_string());
    } else if length < 12 {
        recs.push("Consider using 12+ characters for better security".to_string());
    }

    let has = |name: &str| character_sets.iter().any(|s| s == name);
    if !has("uppercase") {
        recs.push("Add uppercase letters".to_string());
    }
    if !has("lowercase") {
        recs.push("Add lowercase letters".to_string());
    }
    if !has("digits") {
        recs.push("Add numbers".to_string());
    }
    if !has("symbols") {
        recs.push("Add special characters (!@#$%^&*)".to_string());
    }

    if !patterns.is_empty() {
        recs.push("Avoid predictable patterns".to_string());
        if patterns.iter().any(|p| p.to_lowercase().contains("keyboard")) {
            recs.push("Avoid keyboard patterns (qwerty, asdf, etc.)".to_string());
        }
        if patterns
            .iter()
            .any(|p| p.to_lowercase().contains("repetitive"))
        {
            recs.push("Avoid repetitive characters".to_string());
        }
        if patterns.iter().any(|p| p.to_lowercase().contains("year")) {
            recs.push("Avoid using years or dates".to_string());
        }
    }

    if WEAK_PASSWORDS.contains(&password.to_lowercase().as_str()) {
        recs.push("Avoid common passwords".to_string());
    }

    if recs.is_empty() {
        recs.push("Your password is strong! Consider using a password manager.".to_string());
    }

    recs
}

/// Average-case crack time at 10^9 guesses per second.
fn estimate_crack_time(entropy: f64) -> String {
    if entropy <= 0.0 {
        return "Instant".to_string();
    }

    let guesses_per_second = 1e9_f64;
    let total_combinations = 2f64.powf(entropy);
    let seconds = total_combinations / (2.0 * guesses_per_second);

    if seconds < 1.0 {
        "Instant".to_string()
    } else if seconds < 60.0 {
        format!("{} seconds", seconds as u64)
    } else if seconds < 3600.0 {
        format!("{} minutes", (seconds / 60.0) as u64)
    } else if seconds < 86_400.0 {
        format!("{} hours", (seconds / 3600.0) as u64)
    } else if seconds < 31_536_000.0 {
        format!("{} days", (seconds / 86_400.0) as u64)
    } else if seconds < 31_536_000_000.0 {
        format!("{} years", (seconds / 31_536_000.0) as u64)
    } else {
        "Centuries".to_string()
    }
}

/// Second opinion from zxcvbn: rating, 0-4 score and suggestion text.
pub fn zxcvbn_assessment(password: &str) -> (String, u8, String) {
    let result = zxcvbn(password, &[]);
    let score = result.score();
    let feedback = result.feedback().map_or_else(String::new, |f| {
        f.suggestions()
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    });

    let rating = match score {
        Score::Zero => "Very Weak",
        Score::One => "Weak",
        Score::Two => "Moderate",
        Score::Three => "Strong",
        Score::Four => "Very Strong",
        _ => "Unknown",
    }
    .to_string();

    (rating, score as u8, feedback)
}

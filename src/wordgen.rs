//  ____ __        __     ____
// |  _ \\ \      / /__  / ___| ___ _ __
// | |_) |\ \ /\ / / _ \| |  _ / _ \ '_ \
// |  _ < \ V  V / (_) | |_| |  __/ | | |
// |_| \_\ \_/\_/ \___/ \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-02
// Version : 0.1.0
// License : Mulan PSL v2
//
// Custom wordlist generation engine

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use itertools::Itertools;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Number suffixes commonly tacked onto passwords.
pub const COMMON_NUMBERS: [&str; 8] = ["1", "12", "123", "1234", "01", "001", "2024", "2025"];

/// Prefixes glued in front of a token.
pub const PREFIXES: [&str; 5] = ["", "my", "the", "i", "love"];

/// Suffixes glued after a token.
pub const SUFFIXES: [&str; 10] = ["", "!", "!!", "123", "12", "1", "01", "001", "@", "#"];

/// Separators used when joining two tokens.
pub const SEPARATORS: [&str; 7] = ["", "_", "-", ".", "!", "@", "#"];

/// Tokens longer than this skip the full leetspeak product and only get
/// whole-character substitutions.
pub const LEET_PRODUCT_MAX_LEN: usize = 6;

/// Hard cap on the pairwise combination pool.
pub const COMBINATION_CAP: usize = 1000;

/// Shortest candidate admitted into a wordlist.
pub const MIN_WORD_LEN: usize = 3;

// 常见的leetspeak替换表
const LEET_SUBSTITUTIONS: [(char, &[char]); 9] = [
    ('a', &['@', '4']),
    ('e', &['3']),
    ('i', &['1', '!']),
    ('o', &['0']),
    ('s', &['5', '$']),
    ('t', &['7']),
    ('l', &['1']),
    ('g', &['9']),
    ('b', &['6']),
];

const LEET_MARKERS: [char; 6] = ['@', '3', '1', '0', '5', '7'];

/// Behavioral switches for one generation run.
///
/// The year window is derived from `reference_year`, which the caller
/// supplies once at the boundary. Identical seeds and an identical config
/// always produce an identical wordlist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub include_years: bool,
    pub include_leet: bool,
    pub include_combinations: bool,
    /// Result ceiling. 0 disables truncation.
    pub max_words: usize,
    pub reference_year: i32,
}

impl GenerationConfig {
    pub fn new(reference_year: i32) -> Self {
        Self {
            include_years: true,
            include_leet: true,
            include_combinations: true,
            max_words: 10_000,
            reference_year,
        }
    }

    /// Years from fifty behind up to four ahead of the reference year.
    pub fn year_window(&self) -> Vec<String> {
        (self.reference_year - 50..self.reference_year + 5)
            .map(|y| y.to_string())
            .collect()
    }
}

/// Raw seed lists as supplied by the caller.
#[derive(Debug, Clone, Default)]
pub struct SeedInput {
    pub names: Vec<String>,
    pub dates: Vec<String>,
    pub pets: Vec<String>,
    pub interests: Vec<String>,
}

impl SeedInput {
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
            && self.dates.is_empty()
            && self.pets.is_empty()
            && self.interests.is_empty()
    }
}

/// Strips everything outside `\w` and lower-cases what is left. May return
/// an empty string; callers drop empties before expansion.
pub fn normalize_token(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}

/// First character upper-cased, every remaining character lower-cased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

/// Pulls numeric fragments out of free-text date strings.
///
/// Each input may match several of the five formats; every captured group
/// from every match is kept. Non-numeric leftovers are filtered at the end,
/// so malformed inputs contribute nothing.
pub fn extract_date_tokens(dates: &[String]) -> Vec<String> {
    let patterns: Vec<Regex> = [
        r"(\d{4})",
        r"(\d{1,2})/(\d{1,2})/(\d{4})",
        r"(\d{1,2})-(\d{1,2})-(\d{4})",
        r"(\d{4})-(\d{1,2})-(\d{1,2})",
        r"(\d{1,2})\.(\d{1,2})\.(\d{4})",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("date pattern is valid"))
    .collect();

    let mut tokens = Vec::new();
    for date in dates {
        let date = date.trim();
        if date.is_empty() {
            continue;
        }
        for re in &patterns {
            for caps in re.captures_iter(date) {
                for group in caps.iter().skip(1).flatten() {
                    tokens.push(group.as_str().to_string());
                }
            }
        }
    }

    tokens.retain(|t| !t.is_empty() && t.chars().all(|c| c.is_ascii_digit()));
    tokens
}

/// All single-token variations of one normalized token: identity forms,
/// affix cross-product, number suffixes, year suffixes and leetspeak.
pub fn expand_variations(token: &str, config: &GenerationConfig) -> HashSet<String> {
    let mut variations = HashSet::new();
    if token.is_empty() {
        return variations;
    }

    let capitalized = capitalize(token);

    variations.insert(token.to_string());
    variations.insert(capitalized.clone());
    variations.insert(token.to_uppercase());

    for prefix in PREFIXES {
        for suffix in SUFFIXES {
            if prefix.is_empty() && suffix.is_empty() {
                continue; // identity forms already present
            }
            variations.insert(format!("{prefix}{token}{suffix}"));
            variations.insert(format!("{prefix}{capitalized}{suffix}"));
        }
    }

    for num in COMMON_NUMBERS {
        variations.insert(format!("{token}{num}"));
        variations.insert(format!("{capitalized}{num}"));
        variations.insert(format!("{num}{token}"));
    }

    if config.include_years {
        for year in config.year_window() {
            variations.insert(format!("{token}{year}"));
            variations.insert(format!("{capitalized}{year}"));
        }
    }

    if config.include_leet {
        variations.extend(leet_variations(token));
    }

    variations.retain(|v| v.chars().count() >= MIN_WORD_LEN);
    variations
}

fn substitutions_for(c: char) -> Option<&'static [char]> {
    LEET_SUBSTITUTIONS
        .iter()
        .find(|(original, _)| *original == c)
        .map(|(_, subs)| *subs)
}

/// Leetspeak variants of a lower-cased token.
///
/// Short tokens get the full per-character product; longer ones only get
/// whole-character substitutions, trading completeness for boundedness.
/// The unmodified token is never part of the result.
pub fn leet_variations(token: &str) -> HashSet<String> {
    let mut variations = HashSet::new();
    let chars: Vec<char> = token.chars().collect();

    if chars.len() <= LEET_PRODUCT_MAX_LEN {
        let options: Vec<Vec<char>> = chars
            .iter()
            .map(|&c| {
                let mut opts = vec![c];
                if let Some(subs) = substitutions_for(c) {
                    opts.extend_from_slice(subs);
                }
                opts
            })
            .collect();
        for combo in options.into_iter().multi_cartesian_product() {
            let leet: String = combo.into_iter().collect();
            if leet != token {
                variations.insert(capitalize(&leet));
                variations.insert(leet);
            }
        }
    } else {
        for (original, subs) in LEET_SUBSTITUTIONS {
            for &sub in subs {
                let leet = token.replace(original, &sub.to_string());
                if leet != token {
                    variations.insert(capitalize(&leet));
                    variations.insert(leet);
                }
            }
        }
    }

    variations
}

/// Pairwise combinations of the given tokens joined by every separator,
/// plain and capitalized, plus number and year suffixed forms.
///
/// The pool is collected in lexicographic order before the cap is applied,
/// so the surviving entries are the same on every run.
pub fn combine_tokens(tokens: &[String], config: &GenerationConfig) -> BTreeSet<String> {
    let mut combinations = BTreeSet::new();
    if tokens.len() < 2 {
        return combinations;
    }

    let years = config.year_window();
    for (i, first) in tokens.iter().enumerate() {
        for (j, second) in tokens.iter().enumerate() {
            if i == j {
                continue;
            }
            for sep in SEPARATORS {
                let combo = format!("{first}{sep}{second}");
                combinations.insert(capitalize(&combo));
                for num in &COMMON_NUMBERS[..3] {
                    combinations.insert(format!("{combo}{num}"));
                }
                if config.include_years {
                    for year in &years[..5] {
                        combinations.insert(format!("{combo}{year}"));
                    }
                }
                combinations.insert(combo);
            }
        }
    }

    // 控制组合爆炸
    if combinations.len() > COMBINATION_CAP {
        combinations = combinations.into_iter().take(COMBINATION_CAP).collect();
    }
    combinations
}

/// Relevance score used when the pool must be cut down to `max_words`.
/// The weights are opaque tuning values; change them and previously
/// truncated lists change with them.
pub fn relevance_score(word: &str, top_years: &[String]) -> i32 {
    let mut score = 0i32;

    let length = word.chars().count() as i32;
    score += (20 - length).max(0);

    if word.ends_with(|c: char| c.is_ascii_digit()) {
        score += 10;
    }

    if is_capitalized(word) {
        score += 5;
    }

    for year in top_years {
        if word.contains(year.as_str()) {
            score += 15;
            break;
        }
    }

    let leet_count = word.chars().filter(|c| LEET_MARKERS.contains(c)).count() as i32;
    score += (leet_count * 3).min(10);

    score
}

fn is_capitalized(word: &str) -> bool {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_uppercase() {
        return false;
    }
    let rest: Vec<char> = chars.collect();
    rest.iter().any(|c| c.is_lowercase() || c.is_uppercase())
        && !rest.iter().any(|c| c.is_uppercase())
}

/// Keeps the `max_words` best-scoring words. The input must already be
/// lexicographically sorted; the sort here is stable, so ties keep that
/// order and the cut is reproducible.
fn prioritize(words: Vec<String>, max_words: usize, top_years: &[String]) -> Vec<String> {
    let mut scored: Vec<(String, i32)> = words
        .into_iter()
        .map(|word| {
            let score = relevance_score(&word, top_years);
            (word, score)
        })
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
        .into_iter()
        .take(max_words)
        .map(|(word, _)| word)
        .collect()
}

/// Runs the full pipeline: normalize the seeds, expand every token,
/// optionally synthesize combinations, then sort and, when the pool
/// exceeds the ceiling, rank and truncate.
///
/// Empty or unusable seeds degrade to an empty result, never an error.
pub fn generate_wordlist(seeds: &SeedInput, config: &GenerationConfig) -> Vec<String> {
    let mut base_tokens: Vec<String> = Vec::new();
    for raw in seeds.names.iter().chain(&seeds.pets).chain(&seeds.interests) {
        let token = normalize_token(raw);
        if !token.is_empty() {
            base_tokens.push(token);
        }
    }
    base_tokens.extend(extract_date_tokens(&seeds.dates));

    let mut pool: HashSet<String> = HashSet::new();
    for token in &base_tokens {
        pool.extend(expand_variations(token, config));
    }

    if config.include_combinations && !base_tokens.is_empty() {
        let end = base_tokens.len().min(5);
        pool.extend(combine_tokens(&base_tokens[..end], config));
    }

    let mut wordlist: Vec<String> = pool
        .into_iter()
        .filter(|w| w.chars().count() >= MIN_WORD_LEN)
        .collect();
    wordlist.sort();

    if config.max_words > 0 && wordlist.len() > config.max_words {
        let years = config.year_window();
        wordlist = prioritize(wordlist, config.max_words, &years[..10]);
    }

    wordlist
}

/// Charset buckets over a finished wordlist.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CharsetDistribution {
    pub lowercase_only: usize,
    pub uppercase_only: usize,
    pub mixed_case: usize,
    pub with_numbers: usize,
    pub with_symbols: usize,
}

/// Descriptive statistics over a finished wordlist.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct WordlistStats {
    pub total_words: usize,
    pub avg_length: f64,
    pub min_length: usize,
    pub max_length: usize,
    pub unique_words: usize,
    pub charset_distribution: CharsetDistribution,
}

pub fn wordlist_stats(words: &[String]) -> WordlistStats {
    if words.is_empty() {
        return WordlistStats::default();
    }

    let lengths: Vec<usize> = words.iter().map(|w| w.chars().count()).collect();
    let total: usize = lengths.iter().sum();

    let mut distribution = CharsetDistribution::default();
    for word in words {
        let has_lower = word.chars().any(|c| c.is_lowercase());
        let has_upper = word.chars().any(|c| c.is_uppercase());
        let has_digit = word.chars().any(|c| c.is_ascii_digit());
        let has_symbol = word.chars().any(|c| !c.is_alphanumeric());

        if has_lower && !has_upper {
            distribution.lowercase_only += 1;
        } else if has_upper && !has_lower {
            distribution.uppercase_only += 1;
        } else if has_lower && has_upper {
            distribution.mixed_case += 1;
        }
        if has_digit {
            distribution.with_numbers += 1;
        }
        if has_symbol {
            distribution.with_symbols += 1;
        }
    }

    WordlistStats {
        total_words: words.len(),
        avg_length: (total as f64 / lengths.len() as f64 * 100.0).round() / 100.0,
        min_length: lengths.iter().copied().min().unwrap_or(0),
        max_length: lengths.iter().copied().max().unwrap_or(0),
        unique_words: words.iter().collect::<HashSet<_>>().len(),
        charset_distribution: distribution,
    }
}

/// Writes one word per line as UTF-8. I/O failure is reported on stderr
/// and folded into the boolean so callers can branch without unwinding.
pub fn export_wordlist(words: &[String], path: &Path) -> bool {
    match write_words(words, path) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Error exporting wordlist: {e:#}");
            false
        }
    }
}

fn write_words(words: &[String], path: &Path) -> anyhow::Result<()> {
    let file = fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for word in words {
        writeln!(writer, "{word}")?;
    }
    writer.flush()?;
    Ok(())
}

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
// Terminal report formatting

use colored::{ColoredString, Colorize};

use crate::analyzer::PasswordAnalysis;
use crate::wordgen::WordlistStats;

const BAR_WIDTH: usize = 40;

fn paint(text: &str, score: u8) -> ColoredString {
    match score {
        80.. => text.green(),
        60..=79 => text.blue(),
        40..=59 => text.yellow(),
        _ => text.red(),
    }
}

/// Prints the full analysis block for one password.
pub fn print_analysis(analysis: &PasswordAnalysis) {
    println!("\n{}", "=".repeat(60));
    println!("PASSWORD ANALYSIS RESULTS");
    println!("{}", "=".repeat(60));

    println!("Password Length: {} characters", analysis.length);
    println!(
        "Character Sets: {}",
        if analysis.character_sets.is_empty() {
            "None".to_string()
        } else {
            analysis.character_sets.join(", ")
        }
    );
    println!("Entropy: {:.2} bits", analysis.entropy);
    println!("Time to Crack: {}", analysis.time_to_crack);

    let label = format!(
        "{} ({}/100)",
        analysis.strength_level, analysis.strength_score
    );
    println!("\nStrength: {}", paint(&label, analysis.strength_score));
    print_strength_bar(analysis.strength_score);

    if !analysis.patterns_found.is_empty() {
        println!("\n⚠️  SECURITY ISSUES DETECTED:");
        for (i, pattern) in analysis.patterns_found.iter().enumerate() {
            println!("   {}. {}", i + 1, pattern);
        }
    }

    println!("\n💡 RECOMMENDATIONS:");
    for (i, rec) in analysis.recommendations.iter().enumerate() {
        println!("   {}. {}", i + 1, rec);
    }
    println!("{}", "=".repeat(60));
}

// 40格强度条
pub fn print_strength_bar(score: u8) {
    let filled = score as usize * BAR_WIDTH / 100;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));
    let gauge = format!("[{bar}] {score}%");
    println!("\nStrength Bar: {}", paint(&gauge, score));
}

/// Prints the stats block for a generated wordlist.
pub fn print_wordlist_stats(stats: &WordlistStats) {
    println!("\nWordlist Statistics:");
    println!("Total words: {}", stats.total_words);
    println!("Average length: {}", stats.avg_length);
    println!("Length range: {}-{}", stats.min_length, stats.max_length);
    println!("Unique words: {}", stats.unique_words);

    let dist = &stats.charset_distribution;
    println!("Lowercase only: {}", dist.lowercase_only);
    println!("Uppercase only: {}", dist.uppercase_only);
    println!("Mixed case: {}", dist.mixed_case);
    println!("With numbers: {}", dist.with_numbers);
    println!("With symbols: {}", dist.with_symbols);
}

/// Shows the first `limit` words and a count of the rest.
pub fn print_wordlist_preview(words: &[String], limit: usize) {
    println!("Generated {} words:", words.len());
    for (i, word) in words.iter().take(limit).enumerate() {
        println!("{:2}. {}", i + 1, word);
    }
    if words.len() > limit {
        println!("... and {} more words", words.len() - limit);
    }
}

use std::collections::BTreeMap;
use std::fs;

use crate::analyzer::{self, PasswordAnalysis};
use crate::display;

pub fn analyze_password(
    password: Option<String>,
    file: Option<String>,
    json: bool,
) -> Result<(), String> {
    match (password, file) {
        (Some(password), None) => analyze_single(&password, json),
        (None, Some(path)) => analyze_batch(&path, json),
        (Some(_), Some(_)) => Err("Provide either a password or --file, not both".to_string()),
        (None, None) => Err("Provide a password to analyze or --file for batch mode".to_string()),
    }
}

fn analyze_single(password: &str, json: bool) -> Result<(), String> {
    let analysis = analyzer::analyze_password(password);
    if json {
        let text = serde_json::to_string_pretty(&analysis)
            .map_err(|e| format!("Failed to serialize analysis: {}", e))?;
        println!("{}", text);
        return Ok(());
    }

    display::print_analysis(&analysis);

    let (rating, score, feedback) = analyzer::zxcvbn_assessment(password);
    println!("\nzxcvbn cross-check: {} (score: {}/4)", rating, score);
    if !feedback.is_empty() {
        println!("Suggestions: {}", feedback);
    }
    Ok(())
}

fn analyze_batch(path: &str, json: bool) -> Result<(), String> {
    let contents =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    let passwords: Vec<&str> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if passwords.is_empty() {
        return Err(format!("No passwords found in {}", path));
    }

    let results: Vec<(&str, PasswordAnalysis)> = passwords
        .iter()
        .map(|p| (*p, analyzer::analyze_password(p)))
        .collect();

    if json {
        let analyses: Vec<&PasswordAnalysis> = results.iter().map(|(_, a)| a).collect();
        let text = serde_json::to_string_pretty(&analyses)
            .map_err(|e| format!("Failed to serialize analyses: {}", e))?;
        println!("{}", text);
        return Ok(());
    }

    println!("Analyzing {} passwords from {}", results.len(), path);

    let avg_score: f64 = results
        .iter()
        .map(|(_, a)| a.strength_score as f64)
        .sum::<f64>()
        / results.len() as f64;

    let mut strength_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for (_, analysis) in &results {
        *strength_counts
            .entry(analyzer::strength_level(analysis.strength_score))
            .or_insert(0) += 1;
    }

    println!("\n{}", "=".repeat(60));
    println!("BATCH ANALYSIS RESULTS");
    println!("{}", "=".repeat(60));
    println!("Total passwords analyzed: {}", results.len());
    println!("Average strength score: {:.1}/100", avg_score);
    println!("\nStrength distribution:");
    for (level, count) in &strength_counts {
        let percentage = *count as f64 / results.len() as f64 * 100.0;
        println!("  {}: {} ({:.1}%)", level, count, percentage);
    }

    let weak: Vec<&(&str, PasswordAnalysis)> = results
        .iter()
        .filter(|(_, a)| a.strength_score < 40)
        .collect();
    if !weak.is_empty() {
        println!("\nWeakest passwords ({} found):", weak.len());
        for (i, (password, analysis)) in weak.iter().take(10).enumerate() {
            println!(
                "  {}. '{}' - {} ({}/100)",
                i + 1,
                password,
                analysis.strength_level,
                analysis.strength_score
            );
        }
        if weak.len() > 10 {
            println!("  ... and {} more", weak.len() - 10);
        }
    }

    Ok(())
}

use std::path::Path;

use chrono::{Datelike, Local};

use crate::display;
use crate::wordgen::{self, GenerationConfig, SeedInput};

/// Splits a comma-separated CLI list into trimmed, non-empty entries.
fn split_list(arg: Option<String>) -> Vec<String> {
    arg.map(|s| {
        s.split(',')
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

pub fn generate_wordlist(
    names: Option<String>,
    dates: Option<String>,
    pets: Option<String>,
    interests: Option<String>,
    no_years: bool,
    no_leet: bool,
    no_combinations: bool,
    max_words: usize,
    ref_year: Option<i32>,
    output: Option<String>,
    json: bool,
) -> Result<(), String> {
    let seeds = SeedInput {
        names: split_list(names),
        dates: split_list(dates),
        pets: split_list(pets),
        interests: split_list(interests),
    };
    if seeds.is_empty() {
        return Err(
            "At least one of --names, --dates, --pets or --interests is required".to_string(),
        );
    }

    // 参考年份只在这里取一次，生成核心不读系统时钟
    let reference_year = ref_year.unwrap_or_else(|| Local::now().year());

    let config = GenerationConfig {
        include_years: !no_years,
        include_leet: !no_leet,
        include_combinations: !no_combinations,
        max_words,
        reference_year,
    };

    let words = wordgen::generate_wordlist(&seeds, &config);
    let stats = wordgen::wordlist_stats(&words);

    if json {
        let payload = serde_json::json!({
            "words": words,
            "stats": stats,
        });
        let text = serde_json::to_string_pretty(&payload)
            .map_err(|e| format!("Failed to serialize result: {}", e))?;
        println!("{}", text);
    } else {
        display::print_wordlist_preview(&words, 20);
        display::print_wordlist_stats(&stats);
    }

    if let Some(path) = output {
        if wordgen::export_wordlist(&words, Path::new(&path)) {
            println!("Wordlist saved to {}", path);
        } else {
            return Err(format!("Failed to export wordlist to {}", path));
        }
    }

    Ok(())
}

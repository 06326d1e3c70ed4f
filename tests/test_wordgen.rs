use rwogen::wordgen::*;

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn config(
        include_years: bool,
        include_leet: bool,
        include_combinations: bool,
        max_words: usize,
    ) -> GenerationConfig {
        GenerationConfig {
            include_years,
            include_leet,
            include_combinations,
            max_words,
            reference_year: 2025,
        }
    }

    fn seeds_from_names(names: &[&str]) -> SeedInput {
        SeedInput {
            names: names.iter().map(|n| n.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token("John!"), "john");
        assert_eq!(normalize_token("  O'Malley "), "omalley");
        assert_eq!(normalize_token("Fluffy_2"), "fluffy_2");
        assert_eq!(normalize_token("!!!"), "");
    }

    #[test]
    fn test_generation_config_defaults() {
        let config = GenerationConfig::new(2025);
        assert!(config.include_years);
        assert!(config.include_leet);
        assert!(config.include_combinations);
        assert_eq!(config.max_words, 10_000);
        assert_eq!(config.reference_year, 2025);
    }

    #[test]
    fn test_year_window_bounds() {
        let config = config(true, false, false, 0);
        let years = config.year_window();
        assert_eq!(years.len(), 55);
        assert_eq!(years.first().unwrap(), "1975");
        assert_eq!(years.last().unwrap(), "2029");
    }

    #[test]
    fn test_single_token_variations() {
        let words = generate_wordlist(&seeds_from_names(&["Buddy"]), &config(false, false, false, 1000));
        for expected in [
            "buddy", "Buddy", "BUDDY", "buddy1", "buddy12", "buddy123", "1buddy", "mybuddy",
            "buddy!",
        ] {
            assert!(words.contains(&expected.to_string()), "missing {expected}");
        }
        assert!(words.iter().all(|w| w.chars().count() >= 3));
    }

    #[test]
    fn test_capitalized_forms_lowercase_the_tail() {
        let words = generate_wordlist(&seeds_from_names(&["BUDDY"]), &config(false, false, false, 0));
        assert!(words.contains(&"Buddy".to_string()));
        assert!(words.contains(&"BUDDY".to_string()));
        assert!(!words.contains(&"BUddy".to_string()));
    }

    #[test]
    fn test_no_duplicates() {
        let seeds = SeedInput {
            names: vec!["john".to_string(), "smith".to_string()],
            pets: vec!["buddy".to_string()],
            ..Default::default()
        };
        let words = generate_wordlist(&seeds, &config(true, true, true, 0));
        let unique: HashSet<&String> = words.iter().collect();
        assert_eq!(unique.len(), words.len());
    }

    #[test]
    fn test_deterministic_output() {
        let seeds = SeedInput {
            names: vec!["jennifer".to_string(), "michael".to_string()],
            pets: vec!["rex".to_string()],
            interests: vec!["chess".to_string()],
            ..Default::default()
        };
        let cfg = config(true, true, true, 500);
        assert_eq!(generate_wordlist(&seeds, &cfg), generate_wordlist(&seeds, &cfg));
    }

    #[test]
    fn test_leet_toggle() {
        let seeds = seeds_from_names(&["password"]);
        let without = generate_wordlist(&seeds, &config(false, false, false, 0));
        assert!(!without.contains(&"p@ssword".to_string()));

        let with = generate_wordlist(&seeds, &config(false, true, false, 0));
        assert!(with.contains(&"p@ssword".to_string()));
        assert!(with.contains(&"passw0rd".to_string()));
    }

    #[test]
    fn test_leet_product_for_short_tokens() {
        let variations = leet_variations("abc");
        for expected in ["@bc", "4bc", "a6c", "A6c", "@6c", "46c"] {
            assert!(variations.contains(expected), "missing {expected}");
        }
        assert!(!variations.contains("abc"));
        assert!(!variations.contains("Abc"));
        assert_eq!(variations.len(), 6);
    }

    #[test]
    fn test_leet_linear_pass_for_long_tokens() {
        let variations = leet_variations("password");
        for expected in ["p@ssword", "p4ssword", "pa55word", "pa$$word", "passw0rd", "P@ssword"] {
            assert!(variations.contains(expected), "missing {expected}");
        }
        // no cross-character mixing on the linear path
        assert!(!variations.contains("p@55w0rd"));
        assert_eq!(variations.len(), 10);
    }

    #[test]
    fn test_date_token_extraction() {
        let tokens = extract_date_tokens(&["12/15/1990".to_string()]);
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens.iter().filter(|t| *t == "1990").count(), 2);
        assert!(tokens.contains(&"12".to_string()));
        assert!(tokens.contains(&"15".to_string()));

        let iso = extract_date_tokens(&["1990-12-15".to_string()]);
        assert_eq!(iso.len(), 4);

        assert!(extract_date_tokens(&["next summer".to_string()]).is_empty());
        assert!(extract_date_tokens(&["   ".to_string()]).is_empty());
    }

    #[test]
    fn test_combinations() {
        let seeds = seeds_from_names(&["john", "smith"]);
        let words = generate_wordlist(&seeds, &config(false, false, true, 0));
        assert!(words.contains(&"john_smith".to_string()));
        assert!(words.contains(&"John_smith".to_string()));
        assert!(words.contains(&"john_smith123".to_string()));
        assert!(words.contains(&"smith_john".to_string()));
        assert!(!words.contains(&"John_Smith".to_string()));
    }

    #[test]
    fn test_combination_cap_is_deterministic() {
        let tokens: Vec<String> = ["alpha", "bravo", "charlie", "delta", "echo"]
            .iter()
            .map(|t| t.to_string())
            .collect();
        let cfg = config(true, true, true, 0);

        let first = combine_tokens(&tokens, &cfg);
        assert_eq!(first.len(), COMBINATION_CAP);
        assert_eq!(first, combine_tokens(&tokens, &cfg));

        // the cap keeps the lexicographically smallest entries
        let smallest = first.iter().next().unwrap().clone();
        assert!(first.iter().all(|w| *w >= smallest));
    }

    #[test]
    fn test_truncation_keeps_highest_scoring_words() {
        let seeds = SeedInput {
            names: vec!["jennifer".to_string(), "michael".to_string()],
            pets: vec!["buddy".to_string()],
            interests: vec!["football".to_string()],
            ..Default::default()
        };
        let full = generate_wordlist(&seeds, &config(true, true, true, 0));
        assert!(full.len() > 100);

        let truncated = generate_wordlist(&seeds, &config(true, true, true, 100));
        assert_eq!(truncated.len(), 100);

        let retained: HashSet<&String> = truncated.iter().collect();
        for word in &truncated {
            assert!(full.contains(word));
        }

        let years = config(true, true, true, 100).year_window();
        let top_years = &years[..10];
        let min_retained = truncated
            .iter()
            .map(|w| relevance_score(w, top_years))
            .min()
            .unwrap();
        let max_discarded = full
            .iter()
            .filter(|w| !retained.contains(w))
            .map(|w| relevance_score(w, top_years))
            .max()
            .unwrap();
        assert!(min_retained >= max_discarded);

        // output is ranked best-first once the ceiling kicks in
        let first_score = relevance_score(&truncated[0], top_years);
        let last_score = relevance_score(truncated.last().unwrap(), top_years);
        assert!(first_score >= last_score);
    }

    #[test]
    fn test_empty_input_yields_empty_result() {
        let words = generate_wordlist(&SeedInput::default(), &config(true, true, true, 1000));
        assert!(words.is_empty());
        assert_eq!(wordlist_stats(&words).total_words, 0);
    }

    #[test]
    fn test_min_length_holds_for_combinations_too() {
        let words = generate_wordlist(&seeds_from_names(&["ab", "c"]), &config(false, false, true, 0));
        assert!(words.contains(&"abc".to_string()));
        assert!(words.iter().all(|w| w.chars().count() >= MIN_WORD_LEN));
    }

    #[test]
    fn test_wordlist_stats() {
        let words: Vec<String> = ["abc", "ABC", "Abc1", "ab!"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        let stats = wordlist_stats(&words);
        assert_eq!(stats.total_words, 4);
        assert_eq!(stats.unique_words, 4);
        assert_eq!(stats.avg_length, 3.25);
        assert_eq!(stats.min_length, 3);
        assert_eq!(stats.max_length, 4);

        let dist = &stats.charset_distribution;
        assert_eq!(dist.lowercase_only, 2);
        assert_eq!(dist.uppercase_only, 1);
        assert_eq!(dist.mixed_case, 1);
        assert_eq!(dist.with_numbers, 1);
        assert_eq!(dist.with_symbols, 1);
    }
}

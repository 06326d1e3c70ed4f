use rwogen::analyzer::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password() {
        let analysis = analyze_password("");
        assert_eq!(analysis.strength_score, 0);
        assert_eq!(analysis.strength_level, "Very Weak");
        assert_eq!(analysis.length, 0);
        assert_eq!(analysis.time_to_crack, "Instant");
        assert_eq!(
            analysis.recommendations,
            vec!["Password cannot be empty".to_string()]
        );
    }

    #[test]
    fn test_common_weak_password() {
        let analysis = analyze_password("password");
        assert!(analysis.strength_score < 20);
        assert_eq!(analysis.strength_level, "Very Weak");
        assert!(analysis
            .patterns_found
            .contains(&"Common weak password".to_string()));
        assert!(analysis
            .patterns_found
            .contains(&"Contains pattern: password".to_string()));
        assert!(analysis
            .recommendations
            .contains(&"Avoid common passwords".to_string()));
    }

    #[test]
    fn test_strong_password() {
        let analysis = analyze_password("X9$mQ2#pL8@wR5!zK");
        assert!(analysis.strength_score >= 80);
        assert_eq!(analysis.strength_level, "Very Strong");
        assert_eq!(analysis.time_to_crack, "Centuries");
    }

    #[test]
    fn test_entropy_orders_passwords() {
        let weak = analyze_password("password");
        let strong = analyze_password("X9$mQ2#pL8@wR5!zK");
        assert!(weak.entropy < strong.entropy);
        assert!(weak.entropy > 0.0);
    }

    #[test]
    fn test_character_set_identification() {
        let analysis = analyze_password("Abc123 !");
        assert_eq!(
            analysis.character_sets,
            vec!["lowercase", "uppercase", "digits", "symbols", "space"]
        );
    }

    #[test]
    fn test_pattern_detection() {
        let analysis = analyze_password("qwerty1990");
        for expected in [
            "Contains pattern: qwerty",
            "Keyboard pattern detected",
            "Leetspeak substitutions detected",
            "Contains year",
        ] {
            assert!(
                analysis.patterns_found.contains(&expected.to_string()),
                "missing {expected}"
            );
        }
    }

    #[test]
    fn test_repetitive_characters() {
        let analysis = analyze_password("aaa111");
        assert!(analysis
            .patterns_found
            .contains(&"Repetitive characters".to_string()));
        assert!(analysis
            .recommendations
            .contains(&"Avoid repetitive characters".to_string()));
    }

    #[test]
    fn test_short_password_recommendations() {
        let analysis = analyze_password("abc");
        assert!(analysis
            .recommendations
            .contains(&"Use at least 8 characters (12+ recommended)".to_string()));
        assert!(analysis
            .recommendations
            .contains(&"Add uppercase letters".to_string()));
        assert!(analysis
            .recommendations
            .contains(&"Add numbers".to_string()));
    }

    #[test]
    fn test_strong_password_gets_positive_recommendation() {
        let analysis = analyze_password("K4p#Wm9q&Z6v");
        assert_eq!(
            analysis.recommendations,
            vec!["Your password is strong! Consider using a password manager.".to_string()]
        );
    }

    #[test]
    fn test_instant_crack_time_for_trivial_password() {
        let analysis = analyze_password("a");
        assert_eq!(analysis.time_to_crack, "Instant");
    }

    #[test]
    fn test_strength_level_buckets() {
        assert_eq!(strength_level(100), "Very Strong");
        assert_eq!(strength_level(80), "Very Strong");
        assert_eq!(strength_level(79), "Strong");
        assert_eq!(strength_level(59), "Moderate");
        assert_eq!(strength_level(39), "Weak");
        assert_eq!(strength_level(0), "Very Weak");
    }

    #[test]
    fn test_zxcvbn_assessment() {
        let (rating, score, _) = zxcvbn_assessment("password");
        assert_eq!(rating, "Very Weak");
        assert_eq!(score, 0);

        let (rating, score, _) = zxcvbn_assessment("correct horse battery staple");
        assert!(!rating.is_empty());
        assert!(score <= 4);
    }
}

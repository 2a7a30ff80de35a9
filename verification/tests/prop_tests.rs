use proptest::prelude::*;

use antifraude_nullables::NullRandom;
use antifraude_types::ScoreBand;
use antifraude_verification::{validators, ScoreEngine};

proptest! {
    /// Every string shaped like a CPF passes the format check, with or
    /// without separators.
    #[test]
    fn shaped_cpfs_are_valid(cpf in r"[0-9]{3}\.?[0-9]{3}\.?[0-9]{3}-?[0-9]{2}") {
        prop_assert!(validators::is_valid_cpf(&cpf));
    }

    /// Appending any non-digit garbage invalidates a CPF.
    #[test]
    fn trailing_garbage_invalidates_cpf(suffix in "[a-zA-Z ]{1,4}") {
        let cpf = format!("123.456.789-00{suffix}");
        prop_assert!(!validators::is_valid_cpf(&cpf));
    }

    /// Phone parity depends only on the last digit's evenness.
    #[test]
    fn parity_tracks_the_last_digit(prefix in r"\([0-9]{2}\) [0-9]{5}-[0-9]{3}", last in 0u32..10) {
        let phone = format!("{prefix}{last}");
        prop_assert_eq!(validators::phone_parity_ok(&phone), last % 2 == 0);
    }

    /// A CPF led by any digit 1-9 always scores inside that digit's band.
    #[test]
    fn score_stays_in_the_first_digit_band(first in 1u32..10, tail in "[0-9]{10}", seed in any::<u16>()) {
        let first = char::from_digit(first, 10).unwrap();
        let cpf = format!("{first}{tail}");
        let mut engine = ScoreEngine::new(Box::new(NullRandom::constant(seed % 1000)));
        let (lo, hi) = ScoreEngine::band_range(first).unwrap();
        let score = engine.calculate_score(&cpf);
        prop_assert!((lo..hi).contains(&score), "score {} outside [{}, {})", score, lo, hi);
    }

    /// Scoring is idempotent per CPF: the cached value is returned on every
    /// later call even as the random sequence moves on.
    #[test]
    fn scoring_is_idempotent_per_cpf(tail in "[0-9]{10}", seeds in prop::collection::vec(any::<u16>(), 2..6)) {
        let cpf = format!("5{tail}");
        let mut engine = ScoreEngine::new(Box::new(NullRandom::new(
            seeds.iter().map(|s| s % 1000).collect(),
        )));
        let first = engine.calculate_score(&cpf);
        for _ in 0..3 {
            prop_assert_eq!(engine.calculate_score(&cpf), first);
        }
    }

    /// Classification matches the band boundaries everywhere in [0, 1000).
    #[test]
    fn classification_matches_boundaries(value in 0u16..1000) {
        let expected = if value < 100 {
            ScoreBand::Suspect
        } else if value <= 300 {
            ScoreBand::VeryLow
        } else if value <= 500 {
            ScoreBand::Medium
        } else if value <= 700 {
            ScoreBand::Good
        } else {
            ScoreBand::VeryGood
        };
        prop_assert_eq!(ScoreEngine::classify(value).band, expected);
    }
}

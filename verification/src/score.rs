//! Score engine — maps a CPF's first digit to a score band and draws a
//! pseudo-random value within it.
//!
//! The draw goes through the [`RandomSource`] seam so tests can pin values.
//! A drawn score is cached per CPF, so re-verifying the same CPF is
//! idempotent; only the first verification of a given CPF consumes
//! randomness.

use antifraude_types::{RandomSource, ScoreBand, ScoreResult};
use rand::Rng;
use std::collections::HashMap;

/// Production randomness backed by the thread RNG.
pub struct SystemRandom;

impl RandomSource for SystemRandom {
    fn draw(&self, lo: u16, hi: u16) -> u16 {
        if lo >= hi {
            return lo;
        }
        rand::thread_rng().gen_range(lo..hi)
    }
}

/// Computes and caches scores per CPF.
pub struct ScoreEngine {
    random: Box<dyn RandomSource>,
    cache: HashMap<String, u16>,
}

impl ScoreEngine {
    pub fn new(random: Box<dyn RandomSource>) -> Self {
        Self {
            random,
            cache: HashMap::new(),
        }
    }

    pub fn with_system_random() -> Self {
        Self::new(Box::new(SystemRandom))
    }

    /// The half-open score range `[lo, hi)` selected by a CPF's first
    /// character. Any character outside '1'..='9' selects no band.
    pub fn band_range(first: char) -> Option<(u16, u16)> {
        match first {
            '1' => Some((300, 400)),
            '2' => Some((700, 800)),
            '3' => Some((100, 200)),
            '4' => Some((600, 700)),
            '5' => Some((900, 1000)),
            '6' => Some((500, 600)),
            '7' => Some((0, 100)),
            '8' => Some((200, 300)),
            '9' => Some((400, 500)),
            _ => None,
        }
    }

    /// Score for a CPF: drawn uniformly within the first digit's band, 0 for
    /// an empty CPF or one starting with any other character.
    ///
    /// The first call for a given CPF draws and caches; later calls return
    /// the cached value.
    pub fn calculate_score(&mut self, cpf: &str) -> u16 {
        if let Some(&cached) = self.cache.get(cpf) {
            return cached;
        }
        let score = match cpf.chars().next().and_then(Self::band_range) {
            Some((lo, hi)) => self.random.draw(lo, hi),
            None => 0,
        };
        self.cache.insert(cpf.to_string(), score);
        score
    }

    /// Bucket a score value into its band.
    pub fn classify(score: u16) -> ScoreResult {
        let band = match score {
            0..=99 => ScoreBand::Suspect,
            100..=300 => ScoreBand::VeryLow,
            301..=500 => ScoreBand::Medium,
            501..=700 => ScoreBand::Good,
            _ => ScoreBand::VeryGood,
        };
        ScoreResult {
            value: score,
            band,
            color: band.color(),
        }
    }

    /// Score and classify in one step.
    pub fn score_cpf(&mut self, cpf: &str) -> ScoreResult {
        Self::classify(self.calculate_score(cpf))
    }
}

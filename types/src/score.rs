//! Score bands — the qualitative buckets derived from a pseudo-random score.

use serde::{Deserialize, Serialize};

/// Qualitative bucket for a score value in `[0, 1000)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreBand {
    /// `value < 100`.
    Suspect,
    /// `100 <= value <= 300`.
    VeryLow,
    /// `300 < value <= 500`.
    Medium,
    /// `500 < value <= 700`.
    Good,
    /// `value > 700`.
    VeryGood,
}

/// How a band affects overall validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// The band fails CPF validation even when the format matched.
    Fail,
    /// Passes validation, flagged to the user.
    Warn,
    Ok,
}

/// Display color for the score message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreColor {
    Red,
    Yellow,
    Green,
}

impl ScoreBand {
    /// User-facing label, e.g. "Score Mediano".
    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Suspect => "Score Suspeito",
            ScoreBand::VeryLow => "Score Muito Abaixo",
            ScoreBand::Medium => "Score Mediano",
            ScoreBand::Good => "Score Bom",
            ScoreBand::VeryGood => "Score Muito Bom",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            ScoreBand::Suspect | ScoreBand::VeryLow => Severity::Fail,
            ScoreBand::Medium => Severity::Warn,
            ScoreBand::Good | ScoreBand::VeryGood => Severity::Ok,
        }
    }

    pub fn color(&self) -> ScoreColor {
        match self.severity() {
            Severity::Fail => ScoreColor::Red,
            Severity::Warn => ScoreColor::Yellow,
            Severity::Ok => ScoreColor::Green,
        }
    }
}

/// A computed score with its band and display color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub value: u16,
    pub band: ScoreBand,
    pub color: ScoreColor,
}

impl ScoreResult {
    /// Whether this score passes the band check (Warn and Ok bands pass).
    pub fn passes(&self) -> bool {
        self.band.severity() != Severity::Fail
    }
}

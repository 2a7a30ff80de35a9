//! Nullable random — deterministic draws for the score engine.

use antifraude_types::RandomSource;
use std::sync::Mutex;

/// A deterministic random source for testing.
///
/// Returns pre-configured values in order, folding each into the requested
/// range; the sequence wraps around when exhausted.
pub struct NullRandom {
    values: Mutex<Vec<u16>>,
    index: Mutex<usize>,
}

impl NullRandom {
    /// Create with a sequence of deterministic values.
    pub fn new(values: Vec<u16>) -> Self {
        assert!(!values.is_empty(), "NullRandom needs at least one value");
        Self {
            values: Mutex::new(values),
            index: Mutex::new(0),
        }
    }

    /// Create with a single value returned for every draw.
    pub fn constant(value: u16) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for NullRandom {
    fn draw(&self, lo: u16, hi: u16) -> u16 {
        let values = self.values.lock().unwrap();
        let mut idx = self.index.lock().unwrap();
        let value = values[*idx % values.len()];
        *idx += 1;
        if lo >= hi {
            return lo;
        }
        if (lo..hi).contains(&value) {
            value
        } else {
            lo + value % (hi - lo)
        }
    }
}

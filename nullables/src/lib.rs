//! Nullable infrastructure for deterministic testing.
//!
//! The flow's external dependencies (randomness, the biometric prompt, the
//! image picker) are abstracted behind traits in `antifraude-types`. This
//! crate provides test-friendly implementations that:
//! - Return deterministic, pre-configured values
//! - Can be controlled programmatically
//! - Never touch real hardware
//!
//! Usage: swap real implementations for nullables in tests.

pub mod biometric;
pub mod picker;
pub mod random;

pub use biometric::NullBiometric;
pub use picker::NullPicker;
pub use random::NullRandom;

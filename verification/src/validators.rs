//! Pure field validators — format and presence checks only.
//!
//! None of these is a real document check: the CPF validator matches the
//! visual pattern without verifying check digits, and the phone gate used by
//! the form is last-digit parity, not the display format.

use regex::Regex;
use std::sync::LazyLock;

static CPF_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{3}\.?\d{3}\.?\d{3}-?\d{2})$").expect("CPF pattern compiles")
});

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(\d{2}\) \d{5}-\d{4}$").expect("phone pattern compiles"));

/// Three groups of 3 digits with optional dot/dash separators, then 2 digits.
/// No checksum validation.
pub fn is_valid_cpf(cpf: &str) -> bool {
    CPF_PATTERN.is_match(cpf)
}

/// Display format `(DD) DDDDD-DDDD`.
///
/// Declared alongside the parity check; the form gate uses parity only.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

/// True iff the phone is non-empty, ends in a digit, and that digit is even.
/// This is the check that actually gates form success.
pub fn phone_parity_ok(phone: &str) -> bool {
    match phone.chars().last().and_then(|c| c.to_digit(10)) {
        Some(digit) => digit % 2 == 0,
        None => false,
    }
}

/// True iff the trimmed text is non-empty. Used for name and address.
pub fn required_text(text: &str) -> bool {
    !text.trim().is_empty()
}

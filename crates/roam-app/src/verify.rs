//! Checks for the simulated phone-verification gate.
//!
//! No message is ever sent.  A phone number is accepted if it looks like an
//! international number, and any six-digit code is accepted.

use std::fmt;

use crate::{AppError, AppResult};

/// Most digits an accepted phone number may carry.
const MAX_PHONE_DIGITS: usize = 16;

/// Length of a verification code.
pub const CODE_LEN: usize = 6;

/// A phone number with whitespace removed: an optional leading `+`, then a
/// non-zero digit, then up to fifteen more digits.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(input: &str) -> AppResult<Self> {
        let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        let digits = compact.strip_prefix('+').unwrap_or(&compact);

        let valid = matches!(digits.as_bytes().first(), Some(b'1'..=b'9'))
            && digits.len() <= MAX_PHONE_DIGITS
            && digits.bytes().all(|b| b.is_ascii_digit());

        if valid {
            Ok(PhoneNumber(compact))
        } else {
            Err(AppError::InvalidPhone(input.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The entered code with surrounding whitespace trimmed, if what remains is
/// exactly six ASCII digits.
pub fn parse_code(input: &str) -> Option<&str> {
    let code = input.trim();
    (code.len() == CODE_LEN && code.bytes().all(|b| b.is_ascii_digit())).then_some(code)
}

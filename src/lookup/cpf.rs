//! CPF search key handling.
//!
//! A CPF is treated as an opaque 11-digit lookup key. Inputs may arrive
//! masked (`000.000.000-00`) or raw; only the digits matter.

use std::fmt;
use std::str::FromStr;

/// Number of digits in a CPF.
pub const CPF_DIGITS: usize = 11;

/// Strip every non-digit character from the input.
///
/// Idempotent: normalizing an already-normalized string is a no-op.
pub fn normalize(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Error type for CPF parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CpfError {
    #[error("CPF must contain exactly 11 digits, got {0}")]
    InvalidLength(usize),
}

/// A validated CPF search key, stored in normalized (digits-only) form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cpf(String);

impl Cpf {
    /// The normalized 11-digit form.
    pub fn digits(&self) -> &str {
        &self.0
    }

    /// Render with the standard mask: `000.000.000-00`.
    pub fn masked(&self) -> String {
        format!(
            "{}.{}.{}-{}",
            &self.0[0..3],
            &self.0[3..6],
            &self.0[6..9],
            &self.0[9..11]
        )
    }
}

impl FromStr for Cpf {
    type Err = CpfError;

    /// Parse a CPF from raw user input, masked or not.
    ///
    /// The input is normalized first; anything that does not reduce to
    /// exactly 11 digits is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = normalize(s);
        if digits.len() != CPF_DIGITS {
            return Err(CpfError::InvalidLength(digits.len()));
        }
        Ok(Cpf(digits))
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

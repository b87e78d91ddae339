//! CPF (Cadastro de Pessoas Físicas) validation.
//!
//! A CPF is 11 digits: a 9-digit base followed by two modulo-11 check digits.

use serde::Serialize;

use storefront_core::{FieldIssue, ValueObject};

pub const CPF_LEN: usize = 11;

pub const DIGITS_MESSAGE: &str = "CPF must contain exactly 11 numeric digits";
pub const CHECKSUM_MESSAGE: &str = "CPF Invalid";

/// Returns `true` when `input` is a structurally valid CPF.
///
/// Every non-digit character is stripped first, so `"529.982.247-25"` and
/// `"52998224725"` are equivalent here.
pub fn is_valid_cpf(input: &str) -> bool {
    let digits: Vec<u8> = input
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();

    if digits.len() != CPF_LEN {
        return false;
    }

    // Repeated-digit numbers satisfy the arithmetic but are never issued.
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    check_digit(&digits[..9]) == digits[9] && check_digit(&digits[..10]) == digits[10]
}

/// Computes the check digit that follows `digits`.
///
/// Weights run from `digits.len() + 1` down to `2`; a result of 10 or 11
/// collapses to 0.
pub fn check_digit(digits: &[u8]) -> u8 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * (top - i as u32))
        .sum();

    match 11 - sum % 11 {
        10 | 11 => 0,
        d => d as u8,
    }
}

/// A CPF that passed schema validation: exactly 11 ASCII digits with valid
/// check digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Cpf(String);

impl Cpf {
    /// Validates a raw CPF field.
    ///
    /// Stricter than [`is_valid_cpf`]: formatting characters are rejected
    /// rather than stripped.
    pub fn parse(raw: &str) -> Result<Self, FieldIssue> {
        if raw.len() != CPF_LEN || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FieldIssue::new("cpf", DIGITS_MESSAGE));
        }
        if !is_valid_cpf(raw) {
            return Err(FieldIssue::new("cpf", CHECKSUM_MESSAGE));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Cpf {}

impl core::fmt::Display for Cpf {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

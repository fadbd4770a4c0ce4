use crate::errors::{AppError, AppResult};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// NFC-e QR codes carry the 44-digit access key in the `p=` query parameter.
static ACCESS_KEY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"p=(\d{44})").unwrap());

/// Brazilian business registration number (CNPJ), kept as its 14 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Ein(String);

impl Ein {
    pub const LEN: usize = 14;

    /// Build an EIN from any text holding exactly 14 digits once punctuation is removed.
    pub fn from_digits(text: &str) -> AppResult<Self> {
        let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();

        if digits.len() != Self::LEN {
            return Err(AppError::InvalidEin(format!(
                "'{}' has {} digits, expected {}",
                text.trim(),
                digits.len(),
                Self::LEN
            )));
        }

        Ok(Self(digits))
    }

    /// Extract the issuer EIN from a QR code URL.
    ///
    /// The access key layout is: state (2), year/month (4), CNPJ (14), ...
    pub fn from_access_key(text: &str) -> AppResult<Self> {
        let caps = ACCESS_KEY.captures(text).ok_or_else(|| {
            AppError::InvalidEin(format!("no 44-digit access key found in '{}'", text.trim()))
        })?;

        Ok(Self(caps[1][6..20].to_string()))
    }

    pub fn digits(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ein {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.0;
        write!(
            f,
            "{}.{}.{}/{}-{}",
            &d[0..2],
            &d[2..5],
            &d[5..8],
            &d[8..12],
            &d[12..14]
        )
    }
}

/// Interpret operator input: a scanned QR URL or a typed/pasted EIN.
pub fn extract_ein(text: &str) -> AppResult<Ein> {
    let text = text.trim();

    if text.starts_with("http") && text.contains("fazenda") {
        Ein::from_access_key(text)
    } else {
        Ein::from_digits(text)
    }
}

//! Textual representations of a RUT.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output style for [`Rut::format`](crate::Rut::format).
///
/// - `Full`: dots and dash (`12.345.678-9`)
/// - `OnlyDash`: dash only (`12345678-9`)
/// - `Escaped`: neither dots nor dash (`123456789`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RutFormat {
    /// Thousands separated by `.`, then `-` and the check digit.
    #[default]
    Full,
    /// Plain body, `-` and the check digit.
    OnlyDash,
    /// Body and check digit with no separator.
    Escaped,
}

impl RutFormat {
    pub const ALL: [RutFormat; 3] = [RutFormat::Full, RutFormat::OnlyDash, RutFormat::Escaped];

    /// Returns the canonical style name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RutFormat::Full => "FULL",
            RutFormat::OnlyDash => "ONLY_DASH",
            RutFormat::Escaped => "ESCAPED",
        }
    }

    pub(crate) fn render(self, number: u32, check_digit: char) -> String {
        match self {
            RutFormat::Full => format!("{}-{check_digit}", group_thousands(number)),
            RutFormat::OnlyDash => format!("{number}-{check_digit}"),
            RutFormat::Escaped => format!("{number}{check_digit}"),
        }
    }
}

impl fmt::Display for RutFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RutFormat {
    type Err = String;

    /// Parse a style name (case-insensitive, `-` and `_` interchangeable).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace('-', "_");

        match normalized.as_str() {
            "FULL" => Ok(RutFormat::Full),
            "ONLY_DASH" | "DASH" => Ok(RutFormat::OnlyDash),
            "ESCAPED" => Ok(RutFormat::Escaped),
            _ => Err(format!("Unknown RUT format: {s}")),
        }
    }
}

/// Render `number` with `.` between groups of three digits, from the right.
fn group_thousands(number: u32) -> String {
    let digits = number.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

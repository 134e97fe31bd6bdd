//! The `Rut` value type.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::checksum::{calc_check_digit, is_check_digit};
use crate::error::{Result, RutError};
use crate::format::RutFormat;

/// Numeric body: 1-8 digits without a leading zero, either ungrouped or with
/// every group of three (from the right) separated by `.`.
static NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[1-9][0-9]{0,7}|[1-9][0-9]{0,2}\.[0-9]{3}|[1-9][0-9]?\.[0-9]{3}\.[0-9]{3})$",
    )
    .expect("Invalid RUT number regex")
});

/// Largest numeric body that fits the 8-digit grammar.
pub const MAX_NUMBER: u32 = 99_999_999;

const THOUSANDS_SEPARATOR: char = '.';
const CHECK_DIGIT_SEPARATOR: char = '-';

/// Input treated as "no RUT" by [`Rut::parse`].
const ABSENT: &str = "0";

/// A Chilean RUT: numeric body plus check digit.
///
/// A `Rut` is always well formed (body in `1..=99_999_999`, check digit in
/// `0-9` or `k`), but it is not necessarily *valid*: use [`Rut::is_valid`]
/// to verify the check digit against the body.
///
/// Ordering follows the numeric body; the check digit only breaks ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rut {
    number: u32,
    check_digit: char,
}

impl Rut {
    /// Build a RUT from its body text and check digit text.
    ///
    /// The body may be grouped with dots (`"12.345.678"`); the check digit
    /// is case-insensitive and stored lowercase.
    ///
    /// ```
    /// use chilean_rut::Rut;
    ///
    /// let rut = Rut::new("15.605.286", "8").unwrap();
    /// assert_eq!(rut.number(), 15_605_286);
    /// assert!(rut.is_valid());
    /// ```
    pub fn new(number: &str, check_digit: &str) -> Result<Self> {
        if !NUMBER_REGEX.is_match(number) {
            return Err(invalid_number(number));
        }
        let check_digit = parse_check_digit(check_digit)?;
        let digits: String = number
            .chars()
            .filter(|ch| *ch != THOUSANDS_SEPARATOR)
            .collect();
        let number = digits.parse::<u32>().map_err(|_| invalid_number(number))?;
        Ok(Self {
            number,
            check_digit,
        })
    }

    /// Build a valid RUT from a numeric body, computing its check digit.
    pub fn from_number(number: u32) -> Result<Self> {
        if !(1..=MAX_NUMBER).contains(&number) {
            return Err(invalid_number(&number.to_string()));
        }
        Ok(Self::from_number_in_range(number))
    }

    /// Caller guarantees `number` is in `1..=MAX_NUMBER`.
    pub(crate) fn from_number_in_range(number: u32) -> Self {
        debug_assert!((1..=MAX_NUMBER).contains(&number));
        Self {
            number,
            check_digit: calc_check_digit(number),
        }
    }

    /// Build a RUT from already typed parts. The check digit is not verified
    /// against the body.
    pub fn from_parts(number: u32, check_digit: char) -> Result<Self> {
        if !(1..=MAX_NUMBER).contains(&number) {
            return Err(invalid_number(&number.to_string()));
        }
        if !is_check_digit(check_digit) {
            return Err(RutError::InvalidCheckDigit {
                input: check_digit.to_string(),
            });
        }
        Ok(Self {
            number,
            check_digit: check_digit.to_ascii_lowercase(),
        })
    }

    /// Parse a combined representation.
    ///
    /// Accepted forms: `12345678-k`, `12345678k`, `12.345.678-k`,
    /// `12.345.678k`, `12.345.678K`. The last character is always the check
    /// digit and a single dash before it is optional.
    ///
    /// An empty string and `"0"` are treated as "no RUT" and routed through
    /// construction with empty parts, which always fails with
    /// [`RutError::InvalidNumberFormat`]. This keeps the historical behavior
    /// even though it does not tell an absent RUT apart from a malformed one.
    pub fn parse(text: &str) -> Result<Self> {
        if text.is_empty() || text == ABSENT {
            return Self::new("", "");
        }
        let Some((split, _)) = text.char_indices().next_back() else {
            return Self::new("", "");
        };
        let (body, check_digit) = text.split_at(split);
        let body = body.strip_suffix(CHECK_DIGIT_SEPARATOR).unwrap_or(body);
        Self::new(body, check_digit)
    }

    /// Numeric body.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Check digit, always lowercase.
    pub fn check_digit(&self) -> char {
        self.check_digit
    }

    /// Split into `(number, check_digit)`.
    pub fn into_parts(self) -> (u32, char) {
        (self.number, self.check_digit)
    }

    /// Returns true if the check digit matches the one computed from the body.
    pub fn is_valid(&self) -> bool {
        calc_check_digit(self.number) == self.check_digit
    }

    pub fn format(&self, style: RutFormat) -> String {
        style.render(self.number, self.check_digit)
    }
}

fn invalid_number(input: &str) -> RutError {
    RutError::InvalidNumberFormat {
        input: input.to_string(),
    }
}

fn parse_check_digit(input: &str) -> Result<char> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if is_check_digit(ch) => Ok(ch.to_ascii_lowercase()),
        _ => Err(RutError::InvalidCheckDigit {
            input: input.to_string(),
        }),
    }
}

/// `{}` renders the full style (`15.605.286-8`), `{:#}` the dash-only style
/// (`15605286-8`).
impl fmt::Display for Rut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = if f.alternate() {
            RutFormat::OnlyDash
        } else {
            RutFormat::Full
        };
        f.write_str(&self.format(style))
    }
}

impl FromStr for Rut {
    type Err = RutError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Rut> for (u32, char) {
    fn from(rut: Rut) -> Self {
        rut.into_parts()
    }
}

impl serde::Serialize for Rut {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.format(RutFormat::OnlyDash))
    }
}

impl<'de> serde::Deserialize<'de> for Rut {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

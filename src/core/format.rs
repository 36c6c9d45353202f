//! Tick label number formatting.
//!
//! Two styles are supported, spelled the way .NET numeric format strings
//! spell them: `G<n>` keeps `n` significant digits and drops trailing zeros,
//! `F<n>` always prints `n` decimals.

use std::{fmt, str::FromStr};

use crate::core::{constants::DEFAULT_LABEL_PRECISION, error::ConfigError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelFormat {
    /// Shortest of fixed/scientific with `n` significant digits.
    General(usize),
    /// Fixed point with `n` decimals.
    Fixed(usize),
}

impl Default for LabelFormat {
    fn default() -> Self {
        Self::General(DEFAULT_LABEL_PRECISION)
    }
}

impl LabelFormat {
    #[must_use]
    pub fn format(self, value: f64) -> String {
        // -0 prints as 0
        let value = if value == 0.0 { 0.0 } else { value };
        match self {
            Self::Fixed(decimals) => {
                let s = format!("{value:.decimals$}");
                strip_negative_zero(s)
            }
            Self::General(precision) => format_general(value, precision.max(1)),
        }
    }
}

fn strip_negative_zero(s: String) -> String {
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_owned()
    } else {
        s
    }
}

fn format_general(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    // Round to `precision` significant digits first; the exponent of the
    // rounded value decides the notation.
    let sci = format!("{:.*e}", precision - 1, value);
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits = i32::try_from(precision).unwrap_or(i32::MAX);

    if exp >= -5 && exp < digits {
        let decimals = usize::try_from(digits - 1 - exp).unwrap_or(0);
        let fixed = format!("{value:.decimals$}");
        strip_negative_zero(trim_fraction(&fixed).to_owned())
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}E{sign}{:02}", trim_fraction(mantissa), exp.abs())
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

impl FromStr for LabelFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let kind = chars.next().map(|c| c.to_ascii_uppercase());
        let rest = chars.as_str();
        let bad = || ConfigError::InvalidFormat(s.to_owned());
        let digits = if rest.is_empty() {
            None
        } else {
            Some(rest.parse::<usize>().map_err(|_| bad())?)
        };
        match kind {
            Some('G') => Ok(Self::General(digits.unwrap_or(DEFAULT_LABEL_PRECISION))),
            Some('F') => Ok(Self::Fixed(digits.unwrap_or(2))),
            _ => Err(bad()),
        }
    }
}

impl fmt::Display for LabelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::General(n) => write!(f, "G{n}"),
            Self::Fixed(n) => write!(f, "F{n}"),
        }
    }
}

//! Zero-alloc ANSI colour wrapper used as the colour id of every cell.

use std::{fmt, str};

#[derive(Debug)]
pub enum ColorError {
    InvalidHexDigit,
    InvalidHexLength,
}

// --- AnsiCode ---
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnsiCode {
    Static(&'static str),
    Inline { buf: [u8; 20], len: u8 },
}

impl AnsiCode {
    pub const fn black() -> Self {
        Self::Static("\x1b[30m")
    }
    pub const fn dark_red() -> Self {
        Self::Static("\x1b[31m")
    }
    pub const fn dark_green() -> Self {
        Self::Static("\x1b[32m")
    }
    pub const fn dark_yellow() -> Self {
        Self::Static("\x1b[33m")
    }
    pub const fn dark_blue() -> Self {
        Self::Static("\x1b[34m")
    }
    pub const fn dark_magenta() -> Self {
        Self::Static("\x1b[35m")
    }
    pub const fn dark_cyan() -> Self {
        Self::Static("\x1b[36m")
    }
    pub const fn gray() -> Self {
        Self::Static("\x1b[37m")
    }
    pub const fn dark_gray() -> Self {
        Self::Static("\x1b[90m")
    }
    pub const fn red() -> Self {
        Self::Static("\x1b[91m")
    }
    pub const fn green() -> Self {
        Self::Static("\x1b[92m")
    }
    pub const fn yellow() -> Self {
        Self::Static("\x1b[93m")
    }
    pub const fn blue() -> Self {
        Self::Static("\x1b[94m")
    }
    pub const fn magenta() -> Self {
        Self::Static("\x1b[95m")
    }
    pub const fn cyan() -> Self {
        Self::Static("\x1b[96m")
    }
    pub const fn white() -> Self {
        Self::Static("\x1b[97m")
    }
    #[inline]
    pub const fn reset() -> Self {
        Self::Static("\x1b[0m")
    }

    /// True-colour escape `ESC[38;2;R;G;Bm`.
    #[must_use]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        let mut buf = [0u8; 20];
        buf[..7].copy_from_slice(b"\x1b[38;2;");
        let mut len = 7;

        for (i, v) in [r, g, b].into_iter().enumerate() {
            len += write_u8(&mut buf[len..], v);
            if i != 2 {
                buf[len] = b';';
                len += 1;
            }
        }
        buf[len] = b'm';
        len += 1;
        Self::Inline {
            buf,
            // at most 19 bytes: 7 + 3*3 + 2 + 1
            len: len as u8,
        }
    }

    /// Parse colour names or `#rrggbb`.  Falls back to hex parser on miss.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "black" => Ok(Self::black()),
            "darkred" => Ok(Self::dark_red()),
            "darkgreen" => Ok(Self::dark_green()),
            "darkyellow" => Ok(Self::dark_yellow()),
            "darkblue" => Ok(Self::dark_blue()),
            "darkmagenta" => Ok(Self::dark_magenta()),
            "darkcyan" => Ok(Self::dark_cyan()),
            "gray" | "grey" => Ok(Self::gray()),
            "darkgray" | "darkgrey" => Ok(Self::dark_gray()),
            "red" => Ok(Self::red()),
            "green" => Ok(Self::green()),
            "yellow" => Ok(Self::yellow()),
            "blue" => Ok(Self::blue()),
            "magenta" => Ok(Self::magenta()),
            "cyan" => Ok(Self::cyan()),
            "white" => Ok(Self::white()),
            _ => Self::from_hex(s),
        }
    }

    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim().trim_start_matches('#');
        if h.len() != 6 || !h.is_ascii() {
            return Err(ColorError::InvalidHexLength);
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHexDigit);
        Ok(Self::rgb(byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..])?))
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            // only ever filled with ASCII by `rgb`
            Self::Inline { buf, len } => str::from_utf8(&buf[..*len as usize]).unwrap_or(""),
        }
    }
}

/// Colours handed out to series that were added without a pen, in order.
pub const SERIES_PALETTE: [AnsiCode; 12] = [
    AnsiCode::blue(),
    AnsiCode::green(),
    AnsiCode::cyan(),
    AnsiCode::red(),
    AnsiCode::magenta(),
    AnsiCode::yellow(),
    AnsiCode::dark_blue(),
    AnsiCode::dark_green(),
    AnsiCode::dark_cyan(),
    AnsiCode::dark_red(),
    AnsiCode::dark_magenta(),
    AnsiCode::dark_yellow(),
];

/// Every named colour, for listings.
pub const NAMED_COLORS: [(&str, AnsiCode); 16] = [
    ("black", AnsiCode::black()),
    ("dark-red", AnsiCode::dark_red()),
    ("dark-green", AnsiCode::dark_green()),
    ("dark-yellow", AnsiCode::dark_yellow()),
    ("dark-blue", AnsiCode::dark_blue()),
    ("dark-magenta", AnsiCode::dark_magenta()),
    ("dark-cyan", AnsiCode::dark_cyan()),
    ("gray", AnsiCode::gray()),
    ("dark-gray", AnsiCode::dark_gray()),
    ("red", AnsiCode::red()),
    ("green", AnsiCode::green()),
    ("yellow", AnsiCode::yellow()),
    ("blue", AnsiCode::blue()),
    ("magenta", AnsiCode::magenta()),
    ("cyan", AnsiCode::cyan()),
    ("white", AnsiCode::white()),
];

// --- convenience conversions ---
impl<'a> From<&'a str> for AnsiCode {
    #[inline]
    fn from(s: &'a str) -> Self {
        // default to white on parse failure (no panics)
        AnsiCode::from_name(s).unwrap_or_else(|_| AnsiCode::white())
    }
}

impl From<&String> for AnsiCode {
    #[inline]
    fn from(s: &String) -> Self {
        AnsiCode::from(s.as_str())
    }
}

impl From<AnsiCode> for String {
    #[inline]
    fn from(c: AnsiCode) -> Self {
        c.as_str().to_owned()
    }
}

// --- Helpers ---
fn write_u8(dst: &mut [u8], mut n: u8) -> usize {
    let mut tmp = [0u8; 3];
    let mut i = 3;
    loop {
        i -= 1;
        tmp[i] = b'0' + n % 10;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    let len = 3 - i;
    dst[..len].copy_from_slice(&tmp[i..]);
    len
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wrap `text` in colour + reset sequence.
#[inline]
#[must_use]
pub fn colorize(c: &AnsiCode, text: &str) -> String {
    format!("{c}{text}{}", AnsiCode::reset())
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::InvalidHexDigit => f.write_str("invalid hex colour digit"),
            ColorError::InvalidHexLength => f.write_str("hex colour must be exactly 6 digits"),
        }
    }
}

impl std::error::Error for ColorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_escape_is_well_formed() {
        assert_eq!(AnsiCode::rgb(210, 5, 40).as_str(), "\x1b[38;2;210;5;40m");
    }

    #[test]
    fn names_and_hex_parse() {
        assert_eq!(AnsiCode::from_name("Dark-Gray").unwrap(), AnsiCode::dark_gray());
        assert_eq!(AnsiCode::from_name("#0a0B0c").unwrap(), AnsiCode::rgb(10, 11, 12));
        assert!(matches!(
            AnsiCode::from_name("#12"),
            Err(ColorError::InvalidHexLength)
        ));
        assert!(matches!(
            AnsiCode::from_hex("zz0000"),
            Err(ColorError::InvalidHexDigit)
        ));
    }

    #[test]
    fn palette_has_no_duplicates() {
        for (i, a) in SERIES_PALETTE.iter().enumerate() {
            assert!(!SERIES_PALETTE[i + 1..].contains(a));
        }
    }
}

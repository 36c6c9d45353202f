//! Braille dot packing.
//!
//! Every braille scalar U+2800..U+28FF is the blank pattern plus an 8-bit
//! dot mask, so adding a dot is a single OR on the code point.  Sub-cell
//! coordinates have `y = 0` at the bottom of the cell:
//!
//! ```text
//!   y=3  0x01 0x08
//!   y=2  0x02 0x10
//!   y=1  0x04 0x20
//!   y=0  0x40 0x80
//!        x=0  x=1
//! ```

/// Empty braille cell (⠀).
pub const BRAILLE_BLANK: char = '\u{2800}';
/// All eight dots set (⣿).
pub const BRAILLE_FULL: char = '\u{28FF}';

/// Left column dots, bottom to top.
const LEFT_MASKS: [u8; 4] = [0x40, 0x04, 0x02, 0x01];
/// Right column dots, bottom to top.
const RIGHT_MASKS: [u8; 4] = [0x80, 0x20, 0x10, 0x08];

#[inline]
#[must_use]
pub const fn is_braille(c: char) -> bool {
    c >= BRAILLE_BLANK && c <= BRAILLE_FULL
}

/// Bit for sub-position `(x, y)`, `None` outside the 2×4 cell.
#[inline]
#[must_use]
pub fn dot_mask(x: i32, y: i32) -> Option<u8> {
    let column = match x {
        0 => &LEFT_MASKS,
        1 => &RIGHT_MASKS,
        _ => return None,
    };
    usize::try_from(y).ok().and_then(|y| column.get(y).copied())
}

/// Turn on one dot of `current`; anything that is not braille counts as blank.
#[must_use]
pub fn add_dot(current: char, x: i32, y: i32) -> char {
    let base = if is_braille(current) {
        current
    } else {
        BRAILLE_BLANK
    };
    match dot_mask(x, y) {
        Some(mask) => char::from_u32(u32::from(base) | u32::from(mask)).unwrap_or(base),
        None => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_dots_match_unicode_layout() {
        assert_eq!(add_dot(' ', 0, 3), '⠁');
        assert_eq!(add_dot(' ', 0, 0), '⡀');
        assert_eq!(add_dot(' ', 1, 0), '⢀');
        assert_eq!(add_dot(' ', 1, 3), '⠈');
    }

    #[test]
    fn dots_accumulate_to_full_cell() {
        let mut c = ' ';
        for x in 0..2 {
            for y in 0..4 {
                c = add_dot(c, x, y);
            }
        }
        assert_eq!(c, BRAILLE_FULL);
    }

    #[test]
    fn masks_are_disjoint() {
        let mut seen = 0u8;
        for x in 0..2 {
            for y in 0..4 {
                let m = dot_mask(x, y).unwrap();
                assert_eq!(seen & m, 0);
                seen |= m;
            }
        }
        assert_eq!(seen, 0xFF);
        assert!(dot_mask(2, 0).is_none());
        assert!(dot_mask(0, 4).is_none());
        assert!(dot_mask(0, -1).is_none());
    }
}

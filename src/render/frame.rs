//! Terminal blit of a finished image.
//!
//! The whole frame is encoded into one byte buffer first and written with
//! a single `write_all`; a colour escape is only emitted when the colour
//! changes within a row, and every row ends with a reset.

use std::io::{Write, stdout};

use crate::{
    core::color::AnsiCode,
    render::image::Image,
};

const RESET_SEQ: &[u8] = b"\x1b[0m";

/// Encode `image` as ANSI text, top row first.
#[must_use]
pub fn encode_image(image: &Image) -> Vec<u8> {
    let width = usize::try_from(image.width()).unwrap_or(0);
    let height = usize::try_from(image.height()).unwrap_or(0);
    // 3 bytes per glyph is typical for box drawing / braille
    let mut buf = Vec::with_capacity(height * (width * 3 + 16));
    let mut utf8 = [0u8; 4];

    for row in image.rows_top_down() {
        let mut current: Option<AnsiCode> = None;
        for cell in row {
            if current != Some(cell.color) {
                buf.extend_from_slice(cell.color.as_str().as_bytes());
                current = Some(cell.color);
            }
            buf.extend_from_slice(cell.glyph.encode_utf8(&mut utf8).as_bytes());
        }
        buf.extend_from_slice(RESET_SEQ);
        buf.push(b'\n');
    }
    buf
}

pub fn write_image<W: Write>(image: &Image, out: &mut W) -> std::io::Result<()> {
    out.write_all(&encode_image(image))?;
    out.flush()
}

/// Blit to stdout.
pub fn print_image(image: &Image) -> std::io::Result<()> {
    let mut term = stdout().lock();
    write_image(image, &mut term)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colour_escapes_only_on_change() {
        let mut img = Image::new(3, 1).unwrap();
        img.set(1, 0, 'x', AnsiCode::red());
        img.set(2, 0, 'y', AnsiCode::red());
        let text = String::from_utf8(encode_image(&img)).unwrap();
        assert_eq!(text, "\x1b[97m \x1b[91mxy\x1b[0m\n");
    }

    #[test]
    fn rows_are_written_top_first() {
        let mut img = Image::new(1, 2).unwrap();
        img.set(0, 0, 'b', AnsiCode::white());
        img.set(0, 1, 't', AnsiCode::white());
        let mut out = Vec::new();
        write_image(&img, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "\x1b[97mt\x1b[0m\n\x1b[97mb\x1b[0m\n");
    }
}

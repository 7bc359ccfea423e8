// Software drawing utilities.
// Visual effects provided here:
// 1) Solid and outlined rectangles (prompt box, accept flash, block cursor).
// 2) A 5x7 bitmap font, scaled up in whole pixels. This is the built-in font
//    used when no TrueType font can be loaded, so text always shows up.

use crate::types::{FrameBuffer, Rgb};

/// Fill the rectangle with corners (x0,y0) and (x1,y1), both inclusive.
/// Visual: a solid block; parts outside the canvas are clipped.
pub fn fill_rect(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) {
    let xs = x0.max(0)..=x1.min(fb.width as i32 - 1);
    for y in y0.max(0)..=y1.min(fb.height as i32 - 1) {
        for x in xs.clone() {
            fb.pixels[y as usize * fb.width + x as usize] = color.packed();
        }
    }
}

/// Outline the rectangle (x0,y0)-(x1,y1), inclusive, with a border
/// `width` pixels thick growing inward.
pub fn stroke_rect(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, width: i32, color: Rgb) {
    for i in 0..width.max(0) {
        fill_rect(fb, x0 + i, y0 + i, x1 - i, y0 + i, color); // top
        fill_rect(fb, x0 + i, y1 - i, x1 - i, y1 - i, color); // bottom
        fill_rect(fb, x0 + i, y0 + i, x0 + i, y1 - i, color); // left
        fill_rect(fb, x1 - i, y0 + i, x1 - i, y1 - i, color); // right
    }
}

/* ---------- 5x7 bitmap font (printable ASCII) ---------- */

/// Glyph cell is 5 px wide plus 1 px spacing.
pub const GLYPH_ADVANCE: i32 = 6;
pub const GLYPH_ROWS: i32 = 7;

/// Return a 5x7 glyph bitmap for printable ASCII.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '!' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00000,0b00100),
        '"' => g!(0b01010,0b01010,0b01010,0b00000,0b00000,0b00000,0b00000),
        '#' => g!(0b01010,0b01010,0b11111,0b01010,0b11111,0b01010,0b01010),
        '$' => g!(0b00100,0b01111,0b10100,0b01110,0b00101,0b11110,0b00100),
        '%' => g!(0b11000,0b11001,0b00010,0b00100,0b01000,0b10011,0b00011),
        '&' => g!(0b01100,0b10010,0b10100,0b01000,0b10101,0b10010,0b01101),
        '\'' => g!(0b01100,0b00100,0b01000,0b00000,0b00000,0b00000,0b00000),
        '(' => g!(0b00010,0b00100,0b01000,0b01000,0b01000,0b00100,0b00010),
        ')' => g!(0b01000,0b00100,0b00010,0b00010,0b00010,0b00100,0b01000),
        '*' => g!(0b00000,0b00100,0b10101,0b01110,0b10101,0b00100,0b00000),
        '+' => g!(0b00000,0b00100,0b00100,0b11111,0b00100,0b00100,0b00000),
        ',' => g!(0b00000,0b00000,0b00000,0b00000,0b01100,0b00100,0b01000),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b01100,0b01100),
        '/' => g!(0b00000,0b00001,0b00010,0b00100,0b01000,0b10000,0b00000),

        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        ':' => g!(0b00000,0b01100,0b01100,0b00000,0b01100,0b01100,0b00000),
        ';' => g!(0b00000,0b01100,0b01100,0b00000,0b01100,0b00100,0b01000),
        '<' => g!(0b00010,0b00100,0b01000,0b10000,0b01000,0b00100,0b00010),
        '=' => g!(0b00000,0b00000,0b11111,0b00000,0b11111,0b00000,0b00000),
        '>' => g!(0b01000,0b00100,0b00010,0b00001,0b00010,0b00100,0b01000),
        '?' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b00000,0b00100),
        '@' => g!(0b01110,0b10001,0b00001,0b01101,0b10101,0b10101,0b01110),

        'A' => g!(0b01110,0b10001,0b10001,0b10001,0b11111,0b10001,0b10001),
        'B' => g!(0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'J' => g!(0b00111,0b00010,0b00010,0b00010,0b00010,0b10010,0b01100),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'N' => g!(0b10001,0b10001,0b11001,0b10101,0b10011,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'Q' => g!(0b01110,0b10001,0b10001,0b10001,0b10101,0b10010,0b01101),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),
        'Y' => g!(0b10001,0b10001,0b10001,0b01010,0b00100,0b00100,0b00100),
        'Z' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111),

        '[' => g!(0b01110,0b01000,0b01000,0b01000,0b01000,0b01000,0b01110),
        '\\' => g!(0b00000,0b10000,0b01000,0b00100,0b00010,0b00001,0b00000),
        ']' => g!(0b01110,0b00010,0b00010,0b00010,0b00010,0b00010,0b01110),
        '^' => g!(0b00100,0b01010,0b10001,0b00000,0b00000,0b00000,0b00000),
        '_' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b11111),
        '`' => g!(0b01000,0b00100,0b00010,0b00000,0b00000,0b00000,0b00000),

        'a' => g!(0b00000,0b00000,0b01110,0b00001,0b01111,0b10001,0b01111),
        'b' => g!(0b10000,0b10000,0b10110,0b11001,0b10001,0b10001,0b11110),
        'c' => g!(0b00000,0b00000,0b01110,0b10000,0b10000,0b10001,0b01110),
        'd' => g!(0b00001,0b00001,0b01101,0b10011,0b10001,0b10001,0b01111),
        'e' => g!(0b00000,0b00000,0b01110,0b10001,0b11111,0b10000,0b01110),
        'f' => g!(0b00110,0b01001,0b01000,0b11100,0b01000,0b01000,0b01000),
        'g' => g!(0b00000,0b01111,0b10001,0b10001,0b01111,0b00001,0b01110),
        'h' => g!(0b10000,0b10000,0b10110,0b11001,0b10001,0b10001,0b10001),
        'i' => g!(0b00100,0b00000,0b01100,0b00100,0b00100,0b00100,0b01110),
        'j' => g!(0b00010,0b00000,0b00110,0b00010,0b00010,0b10010,0b01100),
        'k' => g!(0b10000,0b10000,0b10010,0b10100,0b11000,0b10100,0b10010),
        'l' => g!(0b01100,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'm' => g!(0b00000,0b00000,0b11010,0b10101,0b10101,0b10001,0b10001),
        'n' => g!(0b00000,0b00000,0b10110,0b11001,0b10001,0b10001,0b10001),
        'o' => g!(0b00000,0b00000,0b01110,0b10001,0b10001,0b10001,0b01110),
        'p' => g!(0b00000,0b00000,0b11110,0b10001,0b11110,0b10000,0b10000),
        'q' => g!(0b00000,0b00000,0b01101,0b10011,0b01111,0b00001,0b00001),
        'r' => g!(0b00000,0b00000,0b10110,0b11001,0b10000,0b10000,0b10000),
        's' => g!(0b00000,0b00000,0b01110,0b10000,0b01110,0b00001,0b11110),
        't' => g!(0b01000,0b01000,0b11100,0b01000,0b01000,0b01001,0b00110),
        'u' => g!(0b00000,0b00000,0b10001,0b10001,0b10001,0b10011,0b01101),
        'v' => g!(0b00000,0b00000,0b10001,0b10001,0b10001,0b01010,0b00100),
        'w' => g!(0b00000,0b00000,0b10001,0b10001,0b10101,0b10101,0b01010),
        'x' => g!(0b00000,0b00000,0b10001,0b01010,0b00100,0b01010,0b10001),
        'y' => g!(0b00000,0b00000,0b10001,0b10001,0b01111,0b00001,0b01110),
        'z' => g!(0b00000,0b00000,0b11111,0b00010,0b00100,0b01000,0b11111),

        '{' => g!(0b00010,0b00100,0b00100,0b01000,0b00100,0b00100,0b00010),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        '}' => g!(0b01000,0b00100,0b00100,0b00010,0b00100,0b00100,0b01000),
        '~' => g!(0b00000,0b00000,0b01000,0b10101,0b00010,0b00000,0b00000),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y), each glyph pixel a `scale`x`scale` block.
/// Characters outside printable ASCII draw as '?'.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, scale: i32, color: Rgb) {
    let Some(rows) = glyph5x7(ch).or_else(|| glyph5x7('?')) else { return };
    for (ry, rowbits) in rows.iter().enumerate() {
        for rx in 0..5 {
            if (rowbits & (1 << (4 - rx))) != 0 {
                let px = x + rx * scale;
                let py = y + ry as i32 * scale;
                fill_rect(fb, px, py, px + scale - 1, py + scale - 1, color);
            }
        }
    }
}

/// Draw a text string using scaled 5x7 glyphs; returns the pen x after the last glyph.
/// Visual: blocky terminal-style text; every glyph advances 6*scale pixels.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, scale: i32, color: Rgb) -> i32 {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, scale, color);
        x += GLYPH_ADVANCE * scale;
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgb = Rgb(0, 0, 0);
    const RED: Rgb = Rgb(255, 0, 0);

    fn lit(fb: &FrameBuffer) -> usize {
        fb.pixels.iter().filter(|&&p| p != 0).count()
    }

    #[test]
    fn fill_rect_is_inclusive_and_clipped() {
        let mut fb = FrameBuffer::filled(10, 10, BLACK);
        fill_rect(&mut fb, 2, 3, 4, 5, RED);
        assert_eq!(lit(&fb), 9);
        assert_eq!(fb.get(2, 3), Some(RED));
        assert_eq!(fb.get(4, 5), Some(RED));
        assert_eq!(fb.get(5, 5), Some(BLACK));

        let mut fb = FrameBuffer::filled(10, 10, BLACK);
        fill_rect(&mut fb, -5, -5, 20, 0, RED);
        assert_eq!(lit(&fb), 10);
    }

    #[test]
    fn stroke_rect_leaves_interior_untouched() {
        let mut fb = FrameBuffer::filled(20, 20, BLACK);
        stroke_rect(&mut fb, 0, 0, 19, 19, 2, RED);
        assert_eq!(fb.get(0, 0), Some(RED));
        assert_eq!(fb.get(1, 10), Some(RED));
        assert_eq!(fb.get(18, 18), Some(RED));
        assert_eq!(fb.get(2, 2), Some(BLACK));
        assert_eq!(fb.get(10, 10), Some(BLACK));
        // 20x20 minus the 16x16 hole
        assert_eq!(lit(&fb), 400 - 256);
    }

    #[test]
    fn every_printable_ascii_char_has_a_glyph() {
        for code in 0x20u8..0x7F {
            assert!(glyph5x7(code as char).is_some(), "missing glyph for {:?}", code as char);
        }
    }

    #[test]
    fn text_advances_by_scaled_cell() {
        let mut fb = FrameBuffer::filled(200, 40, BLACK);
        let end = draw_text_5x7(&mut fb, 10, 5, "abc", 3, RED);
        assert_eq!(end, 10 + 3 * GLYPH_ADVANCE * 3);
        assert!(lit(&fb) > 0);
        // nothing left of the pen start or below the glyph rows
        for y in 0..40 {
            assert_eq!(fb.get(9, y), Some(BLACK));
        }
        for x in 0..200 {
            assert_eq!(fb.get(x, (5 + GLYPH_ROWS * 3) as usize), Some(BLACK));
        }
    }

    #[test]
    fn unknown_chars_fall_back_to_question_mark() {
        let mut a = FrameBuffer::filled(20, 10, BLACK);
        let mut b = FrameBuffer::filled(20, 10, BLACK);
        draw_text_5x7(&mut a, 0, 0, "\u{2603}", 1, RED);
        draw_text_5x7(&mut b, 0, 0, "?", 1, RED);
        assert!(a == b);
    }
}

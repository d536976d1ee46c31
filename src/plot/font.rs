use image::{Rgb, RgbImage};

/// Pixel scale applied to the 5x7 base glyphs.
const SCALE: u32 = 2;
/// Glyph advance in base pixels (5 columns + 1 spacing).
const ADVANCE: u32 = 6;

/// Width in pixels that `draw_text` will cover for `text`.
pub fn text_width(text: &str) -> u32 {
    text.chars().count() as u32 * ADVANCE * SCALE
}

/// Rasterizes `text` onto `img` with the top-left corner at `(x, y)`.
///
/// Letters are drawn uppercase from a built-in 5x7 bitmap font; characters
/// without a glyph advance as blanks. Pixels falling outside the image are
/// skipped.
pub fn draw_text(img: &mut RgbImage, text: &str, x: u32, y: u32, color: Rgb<u8>) {
    let mut pen_x = x;
    for c in text.chars() {
        let rows = glyph(c.to_ascii_uppercase());
        for (row_index, row) in rows.iter().enumerate() {
            for col in 0..5u32 {
                if row & (1 << (4 - col)) == 0 {
                    continue;
                }
                for dy in 0..SCALE {
                    for dx in 0..SCALE {
                        let px = pen_x + col * SCALE + dx;
                        let py = y + row_index as u32 * SCALE + dy;
                        if px < img.width() && py < img.height() {
                            img.put_pixel(px, py, color);
                        }
                    }
                }
            }
        }
        pen_x += ADVANCE * SCALE;
    }
}

/// 5x7 bitmap for one character, one byte per row, bit 4 = leftmost column.
fn glyph(c: char) -> [u8; 7] {
    match c {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        ':' => [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000],
        '#' => [0b01010, 0b01010, 0b11111, 0b01010, 0b11111, 0b01010, 0b01010],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        _ => [0; 7],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: Rgb<u8> = Rgb([0, 0, 0]);
    const PAPER: Rgb<u8> = Rgb([255, 255, 255]);

    #[test]
    fn test_draw_text_rasterizes_glyph_pixels() {
        let mut img = RgbImage::from_pixel(40, 20, PAPER);

        draw_text(&mut img, "T", 0, 0, INK);

        // Top row of 'T' is fully set: columns 0..5 at scale 2.
        for col in 0..10 {
            assert_eq!(*img.get_pixel(col, 0), INK);
        }
        // Second glyph row only has the middle column.
        assert_eq!(*img.get_pixel(4, 2), INK);
        assert_eq!(*img.get_pixel(0, 2), PAPER);
    }

    #[test]
    fn test_lowercase_maps_to_uppercase() {
        let mut upper = RgbImage::from_pixel(20, 20, PAPER);
        let mut lower = RgbImage::from_pixel(20, 20, PAPER);

        draw_text(&mut upper, "A", 0, 0, INK);
        draw_text(&mut lower, "a", 0, 0, INK);

        assert_eq!(upper.as_raw(), lower.as_raw());
    }

    #[test]
    fn test_unknown_characters_advance_as_blanks() {
        let mut img = RgbImage::from_pixel(60, 20, PAPER);

        draw_text(&mut img, "?1", 0, 0, INK);

        // The '?' cell stays blank; '1' lands one advance further.
        for px in 0..12 {
            for py in 0..14 {
                assert_eq!(*img.get_pixel(px, py), PAPER);
            }
        }
        // '1' top row pixel: glyph column 2 at scale 2, one advance in.
        assert_eq!(*img.get_pixel(12 + 2 * 2, 0), INK);
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width(""), 0);
        assert_eq!(text_width("LOSS"), 48);
    }

    #[test]
    fn test_out_of_bounds_drawing_is_clipped() {
        let mut img = RgbImage::from_pixel(8, 8, PAPER);

        draw_text(&mut img, "WWWW", 0, 0, INK);
    }
}

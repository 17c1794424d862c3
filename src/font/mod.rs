use crate::field::{Field, Rgb};

/// Tiny 3x5 pixel font for the date and weekday lines. Rows are 3-bit
/// masks, most significant bit on the left.
pub const GLYPH_WIDTH: i32 = 3;
pub const GLYPH_HEIGHT: i32 = 5;
pub const LETTER_SPACING: i32 = 1;

type Glyph = [u8; 5];

/// Unmarked day in the marked-weekday row.
pub const MARK_DOT: Glyph = [0b000, 0b000, 0b010, 0b000, 0b000];
/// Current day in the marked-weekday row.
pub const MARK_BLOCK: Glyph = [0b000, 0b111, 0b111, 0b111, 0b000];

pub fn glyph(ch: char) -> Option<&'static Glyph> {
    let g: &Glyph = match ch {
        '0' => &[0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => &[0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => &[0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => &[0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => &[0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => &[0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => &[0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => &[0b111, 0b001, 0b010, 0b010, 0b010],
        '8' => &[0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => &[0b111, 0b101, 0b111, 0b001, 0b111],
        'A' => &[0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => &[0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => &[0b111, 0b100, 0b100, 0b100, 0b111],
        'D' => &[0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => &[0b111, 0b100, 0b111, 0b100, 0b111],
        'F' => &[0b111, 0b100, 0b111, 0b100, 0b100],
        'G' => &[0b111, 0b100, 0b101, 0b101, 0b111],
        'H' => &[0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => &[0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => &[0b111, 0b010, 0b010, 0b010, 0b110],
        'K' => &[0b101, 0b101, 0b110, 0b101, 0b101],
        'L' => &[0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => &[0b101, 0b111, 0b111, 0b101, 0b101],
        'N' => &[0b110, 0b101, 0b101, 0b101, 0b101],
        'O' => &[0b111, 0b101, 0b101, 0b101, 0b111],
        'P' => &[0b111, 0b101, 0b111, 0b100, 0b100],
        'Q' => &[0b111, 0b101, 0b101, 0b111, 0b001],
        'R' => &[0b111, 0b101, 0b110, 0b101, 0b101],
        'S' => &[0b111, 0b100, 0b111, 0b001, 0b111],
        'T' => &[0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => &[0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => &[0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => &[0b101, 0b101, 0b111, 0b111, 0b101],
        'X' => &[0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => &[0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => &[0b111, 0b001, 0b010, 0b100, 0b111],
        _ => return None,
    };
    Some(g)
}

/// Pixel width of a string, one spacing column between glyphs.
pub fn text_width(text: &str) -> i32 {
    let n = text.chars().count() as i32;
    if n == 0 {
        0
    } else {
        n * GLYPH_WIDTH + (n - 1) * LETTER_SPACING
    }
}

pub fn draw_glyph(field: &mut Field, g: &Glyph, x: i32, y: i32, color: Rgb) {
    for (row, bits) in g.iter().enumerate() {
        for col in 0..GLYPH_WIDTH {
            if bits >> (GLYPH_WIDTH - 1 - col) & 1 != 0 {
                field.draw(x + col, y + row as i32, color);
            }
        }
    }
}

pub fn draw_text(field: &mut Field, x: i32, y: i32, text: &str, color: Rgb) {
    let mut cx = x;
    for ch in text.chars() {
        if let Some(g) = glyph(ch) {
            draw_glyph(field, g, cx, y, color);
        }
        cx += GLYPH_WIDTH + LETTER_SPACING;
    }
}

/// Draw text and advance `offset` past it plus `trailing` extra columns.
pub fn draw_text_move(
    field: &mut Field,
    offset: &mut i32,
    y: i32,
    text: &str,
    color: Rgb,
    trailing: i32,
) {
    draw_text(field, *offset, y, text, color);
    *offset += text_width(text) + trailing;
}

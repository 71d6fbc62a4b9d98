//! Built-in 5x7 bitmap font, the last resort of every font chain.
//!
//! Each glyph sits in an 8 pixel cell (5 columns of ink plus spacing, 7 rows
//! of ink) and is scaled by a whole-number factor so edges stay crisp.

/// Ink columns per glyph.
pub const GLYPH_WIDTH: u32 = 5;
/// Ink rows per glyph.
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance per glyph, in unscaled pixels.
pub const ADVANCE: u32 = GLYPH_WIDTH + 1;
/// Nominal cell height used to map a pixel size onto a scale factor.
pub const CELL: u32 = 8;

pub type Glyph = [u8; GLYPH_HEIGHT as usize];

/// Whole-number scale factor for a requested pixel size.
pub fn scale_for(px: u32) -> u32 {
    (px / CELL).max(1)
}

/// Rows of a glyph, most significant of the low five bits on the left.
/// Lowercase letters fold to uppercase; unsupported characters have no ink.
pub fn glyph(c: char) -> Option<&'static Glyph> {
    let glyph = match c.to_ascii_uppercase() {
        'A' => &A,
        'B' => &B,
        'C' => &C,
        'D' => &D,
        'E' => &E,
        'F' => &F,
        'G' => &G,
        'H' => &H,
        'I' => &I,
        'J' => &J,
        'K' => &K,
        'L' => &L,
        'M' => &M,
        'N' => &N,
        'O' => &O,
        'P' => &P,
        'Q' => &Q,
        'R' => &R,
        'S' => &S,
        'T' => &T,
        'U' => &U,
        'V' => &V,
        'W' => &W,
        'X' => &X,
        'Y' => &Y,
        'Z' => &Z,
        '0' => &D0,
        '1' => &D1,
        '2' => &D2,
        '3' => &D3,
        '4' => &D4,
        '5' => &D5,
        '6' => &D6,
        '7' => &D7,
        '8' => &D8,
        '9' => &D9,
        '-' => &DASH,
        _ => return None,
    };
    Some(glyph)
}

/// Calls `plot(x, y)` for every lit pixel of `text` laid out from the origin
/// at the given scale factor.
pub fn for_each_pixel<F: FnMut(i32, i32)>(text: &str, scale: u32, mut plot: F) {
    let scale = scale as i32;
    for (index, c) in text.chars().enumerate() {
        let Some(rows) = glyph(c) else {
            continue;
        };
        let cell_x = index as i32 * ADVANCE as i32 * scale;
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                    continue;
                }
                let x0 = cell_x + col as i32 * scale;
                let y0 = row as i32 * scale;
                for dy in 0..scale {
                    for dx in 0..scale {
                        plot(x0 + dx, y0 + dy);
                    }
                }
            }
        }
    }
}

const A: Glyph = [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001];
const B: Glyph = [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110];
const C: Glyph = [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110];
const D: Glyph = [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110];
const E: Glyph = [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111];
const F: Glyph = [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000];
const G: Glyph = [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111];
const H: Glyph = [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001];
const I: Glyph = [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110];
const J: Glyph = [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100];
const K: Glyph = [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001];
const L: Glyph = [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111];
const M: Glyph = [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001];
const N: Glyph = [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001];
const O: Glyph = [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110];
const P: Glyph = [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000];
const Q: Glyph = [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101];
const R: Glyph = [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001];
const S: Glyph = [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110];
const T: Glyph = [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100];
const U: Glyph = [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110];
const V: Glyph = [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100];
const W: Glyph = [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010];
const X: Glyph = [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001];
const Y: Glyph = [0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100];
const Z: Glyph = [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111];
const D0: Glyph = [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110];
const D1: Glyph = [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110];
const D2: Glyph = [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111];
const D3: Glyph = [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110];
const D4: Glyph = [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010];
const D5: Glyph = [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110];
const D6: Glyph = [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110];
const D7: Glyph = [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000];
const D8: Glyph = [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110];
const D9: Glyph = [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100];
const DASH: Glyph = [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000];

//! Advance widths for the built-in Helvetica faces.
//!
//! Values are the Adobe core-font AFM widths in thousandths of an em,
//! indexed by WinAnsi code for the printable ASCII range. Helvetica-Oblique
//! shares the upright metrics.

use crate::style::FontFace;

const FIRST: u32 = 0x20;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // { | } ~
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

/// Width of `c` in thousandths of an em.
pub fn glyph_width(c: char, font: FontFace) -> u16 {
    let bold = font == FontFace::Bold;
    let table = if bold { &HELVETICA_BOLD } else { &HELVETICA };
    let code = c as u32;
    if (FIRST..FIRST + table.len() as u32).contains(&code) {
        return table[(code - FIRST) as usize];
    }
    match (c, bold) {
        ('\u{a0}', _) => 278,
        ('\u{2022}', _) => 350,
        ('\u{2013}', _) => 556,
        ('\u{2014}' | '\u{2026}', _) => 1000,
        ('\u{2018}' | '\u{2019}', false) => 222,
        ('\u{2018}' | '\u{2019}', true) => 278,
        ('\u{201c}' | '\u{201d}', false) => 333,
        ('\u{201c}' | '\u{201d}', true) => 500,
        // Latin-1 letters sit close to the lowercase average
        (c, false) if (c as u32) <= 0xff => 556,
        (c, true) if (c as u32) <= 0xff => 611,
        // Outside WinAnsi: assume a full em so lines never overrun
        _ => 1000,
    }
}

/// Advance width of `text` set in `font` at `size` points.
pub fn text_width(text: &str, font: FontFace, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(glyph_width(c, font))).sum();
    units as f32 * size / 1000.0
}

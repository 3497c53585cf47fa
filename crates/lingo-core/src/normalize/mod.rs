//! Script-aware character folding.
//!
//! [`normalize`] maps each character to its canonical representative
//! before any n-gram counting: Basic Latin noise becomes a space
//! boundary, scripts that act as one undifferentiated signal (kana,
//! bopomofo, hangul) fold to a single representative, and CJK
//! ideographs fold per equivalence class. [`normalize_vietnamese`]
//! recombines combining diacritics ahead of the per-character pass.

mod cjk;
mod viet;

use std::borrow::Cow;

/// Latin-1 punctuation that reads as a word boundary (NBSP, guillemets,
/// degree sign).
const LATIN1_EXCLUDE: [char; 4] = ['\u{00A0}', '\u{00AB}', '\u{00B0}', '\u{00BB}'];

/// Folds one character to its canonical representative. Pure; first
/// matching Unicode block wins, unlisted characters pass through.
pub fn normalize(ch: char) -> char {
    match ch {
        // Basic Latin: letters only, everything else is a boundary
        '\u{0000}'..='\u{007F}' => {
            if ch.is_ascii_alphabetic() {
                ch
            } else {
                ' '
            }
        }
        // Latin-1 Supplement
        '\u{0080}'..='\u{00FF}' => {
            if LATIN1_EXCLUDE.contains(&ch) {
                ' '
            } else {
                ch
            }
        }
        // Latin Extended-B: Romanian comma-below folds to cedilla
        '\u{0219}' => '\u{015F}',
        '\u{021B}' => '\u{0163}',
        // Arabic: Farsi yeh folds to Arabic yeh
        '\u{06CC}' => '\u{064A}',
        // Latin Extended Additional: Vietnamese precomposed range
        '\u{1EA0}'..='\u{1EFF}' => '\u{1EC3}',
        // General Punctuation
        '\u{2000}'..='\u{206F}' => ' ',
        // Kana, bopomofo and hangul count as script-level signal
        '\u{3040}'..='\u{309F}' => '\u{3042}',
        '\u{30A0}'..='\u{30FF}' => '\u{30A2}',
        '\u{3100}'..='\u{312F}' | '\u{31A0}'..='\u{31BF}' => '\u{3105}',
        '\u{4E00}'..='\u{9FFF}' => cjk::fold(ch),
        '\u{AC00}'..='\u{D7AF}' => '\u{AC00}',
        _ => ch,
    }
}

/// Replaces every base-letter + combining-mark pair with the matching
/// precomposed character. Idempotent; input without such pairs is
/// returned as-is.
pub fn normalize_vietnamese(text: &str) -> Cow<'_, str> {
    let mut out: Option<String> = None;
    let mut chars = text.char_indices().peekable();
    while let Some((idx, ch)) = chars.next() {
        if let Some(&(_, next)) = chars.peek() {
            if let Some(composed) = viet::compose(ch, next) {
                let buf = out.get_or_insert_with(|| String::from(&text[..idx]));
                buf.push(composed);
                chars.next();
                continue;
            }
        }
        if let Some(buf) = out.as_mut() {
            buf.push(ch);
        }
    }
    match out {
        Some(buf) => Cow::Owned(buf),
        None => Cow::Borrowed(text),
    }
}

use crate::consts::N_GRAM;
use crate::normalize::normalize;

/// Sliding window over the last [`N_GRAM`] normalized characters.
///
/// The window starts on a space sentinel so the first character sits on
/// a word boundary, and it suppresses extraction inside runs of
/// uppercase letters (acronyms and proper nouns carry little language
/// signal).
#[derive(Debug, Clone)]
pub struct NGram {
    buf: [char; N_GRAM],
    len: usize,
    capital_word: bool,
}

impl NGram {
    pub fn new() -> Self {
        Self {
            buf: [' '; N_GRAM],
            len: 1,
            capital_word: false,
        }
    }

    /// Pushes one character through [`normalize`] into the window.
    /// Crossing a boundary resets the window; repeated boundaries are
    /// collapsed.
    pub fn add_char(&mut self, ch: char) {
        let ch = normalize(ch);
        let last = self.buf[self.len - 1];
        if last == ' ' {
            self.buf[0] = ' ';
            self.len = 1;
            self.capital_word = false;
            if ch == ' ' {
                return;
            }
        } else if self.len >= N_GRAM {
            self.buf.rotate_left(1);
            self.len = N_GRAM - 1;
        }
        self.buf[self.len] = ch;
        self.len += 1;

        if ch.is_uppercase() {
            if last.is_uppercase() {
                self.capital_word = true;
            }
        } else {
            self.capital_word = false;
        }
    }

    /// The trailing `n` characters as a gram, or `None` when no valid
    /// gram exists: capitalized-word mode, `n` out of `1..=N_GRAM`, a
    /// window shorter than `n`, or a lone boundary for `n == 1`.
    pub fn gram(&self, n: usize) -> Option<String> {
        if self.capital_word || n == 0 || n > N_GRAM || self.len < n {
            return None;
        }
        if n == 1 {
            let ch = self.buf[self.len - 1];
            if ch == ' ' {
                return None;
            }
            return Some(ch.to_string());
        }
        Some(self.buf[self.len - n..self.len].iter().collect())
    }
}

impl Default for NGram {
    fn default() -> Self {
        Self::new()
    }
}

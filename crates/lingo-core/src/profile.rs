use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};

use crate::consts::N_GRAM;
use crate::ngram::NGram;
use crate::normalize::normalize_vietnamese;

/// Floor for the pruning threshold.
const MINIMUM_FREQ: u32 = 2;
/// Divisor turning the 1-gram total into the pruning threshold.
const LESS_FREQ_RATIO: u32 = 100_000;

/// Trained per-language n-gram statistics.
///
/// `freq` maps each gram of length 1..=[`N_GRAM`] to its occurrence
/// count; `n_words[i]` is the running total of grams of length `i + 1`,
/// kept in sync when grams are pruned. This is also the profile's
/// serialized import/export shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LangProfile {
    pub name: String,
    pub freq: FnvHashMap<String, u32>,
    pub n_words: [u32; N_GRAM],
}

impl LangProfile {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Counts one gram. Ignored when the profile is unnamed or the gram
    /// length is out of range.
    pub fn add(&mut self, gram: &str) {
        if self.name.is_empty() {
            return;
        }
        let slot = match gram_len_slot(gram) {
            Some(slot) => slot,
            None => return,
        };
        self.n_words[slot] += 1;
        *self.freq.entry(gram.to_string()).or_insert(0) += 1;
    }

    /// Accumulates every 1..=[`N_GRAM`]-gram of `text`.
    pub fn update(&mut self, text: &str) {
        let text = normalize_vietnamese(text);
        let mut window = NGram::new();
        for ch in text.chars() {
            window.add_char(ch);
            for n in 1..=N_GRAM {
                if let Some(gram) = window.gram(n) {
                    self.add(&gram);
                }
            }
        }
    }

    /// Drops low-signal grams: first anything at or below a
    /// corpus-size-scaled count threshold, then every Latin-containing
    /// gram when the surviving Latin share of 1-grams is under a third
    /// (incidental romanization in a non-Latin-script language).
    /// The phases run in this order; the Latin decision reads
    /// post-threshold counts.
    pub fn prune(&mut self) {
        if self.name.is_empty() {
            return;
        }
        let threshold = (self.n_words[0] / LESS_FREQ_RATIO).max(MINIMUM_FREQ);

        let Self { freq, n_words, .. } = self;
        let mut roman = 0u32;
        freq.retain(|gram, count| {
            if *count <= threshold {
                if let Some(slot) = gram_len_slot(gram) {
                    n_words[slot] -= *count;
                }
                return false;
            }
            if is_single_roman(gram) {
                roman += *count;
            }
            true
        });

        if roman < n_words[0] / 3 {
            freq.retain(|gram, count| {
                if gram.chars().any(|c| c.is_ascii_alphabetic()) {
                    if let Some(slot) = gram_len_slot(gram) {
                        n_words[slot] -= *count;
                    }
                    return false;
                }
                true
            });
        }
    }
}

fn gram_len_slot(gram: &str) -> Option<usize> {
    let len = gram.chars().count();
    if (1..=N_GRAM).contains(&len) {
        Some(len - 1)
    } else {
        None
    }
}

fn is_single_roman(gram: &str) -> bool {
    let mut chars = gram.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if c.is_ascii_alphabetic()
    )
}

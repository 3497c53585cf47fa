use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::config::DetectorOptions;
use crate::consts::{
    ALPHA_WIDTH, BASE_FREQ, CONV_THRESHOLD, ITERATION_LIMIT, N_GRAM, PROB_THRESHOLD, UNKNOWN_LANG,
};
use crate::error::{LingoError, LingoResult};
use crate::ngram::NGram;
use crate::normalize::normalize_vietnamese;
use crate::registry::ProfileRegistry;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://[-_.?&~;+=/#0-9A-Za-z]{1,2076}").expect("url pattern")
});
static MAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[-_.0-9A-Za-z]{1,64}@[-_0-9A-Za-z]{1,255}[-_.0-9A-Za-z]{1,255}")
        .expect("mail pattern")
});

/// One ranked detection candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Language {
    pub lang: String,
    pub prob: f64,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:?}", self.lang, self.prob)
    }
}

/// Single-use detection session bound to a [`ProfileRegistry`].
///
/// Append text, then read the ranked result. The probability vector is
/// computed once and cached; text appended afterwards changes nothing.
/// Start a fresh session per unrelated input.
#[derive(Debug)]
pub struct Detector<'a> {
    registry: &'a ProfileRegistry,
    text: String,
    text_len: usize,
    lang_prob: Option<Vec<f64>>,
    prior: Option<Vec<f64>>,
    alpha: f64,
    trials: usize,
    max_text_length: usize,
    rng: fastrand::Rng,
}

impl<'a> Detector<'a> {
    pub(crate) fn new(registry: &'a ProfileRegistry, options: DetectorOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Self {
            registry,
            text: String::new(),
            text_len: 0,
            lang_prob: None,
            prior: None,
            alpha: options.alpha,
            trials: options.trials,
            max_text_length: options.max_text_length,
            rng,
        }
    }

    /// Biases trial initialization away from uniform. Keys are language
    /// names; languages absent from the map get zero weight. Weights
    /// must be non-negative and sum to a positive value; they are
    /// renormalized to sum to 1.
    pub fn set_prior(&mut self, prior: &HashMap<String, f64>) -> LingoResult<()> {
        let langs = self.registry.languages();
        let mut weights = vec![0.0; langs.len()];
        let mut sum = 0.0;
        for (i, lang) in langs.iter().enumerate() {
            if let Some(&p) = prior.get(lang) {
                if p < 0.0 {
                    return Err(LingoError::InvalidPrior(format!(
                        "negative weight {} for '{}'",
                        p, lang
                    )));
                }
                weights[i] = p;
                sum += p;
            }
        }
        if sum <= 0.0 {
            return Err(LingoError::InvalidPrior(
                "at least one weight must be positive".to_string(),
            ));
        }
        for w in &mut weights {
            *w /= sum;
        }
        self.prior = Some(weights);
        Ok(())
    }

    /// Adds text to the session buffer. URLs and mail addresses are
    /// blanked, Vietnamese marks recomposed, space runs collapsed.
    /// Characters past `max_text_length` are dropped.
    pub fn append(&mut self, text: &str) {
        let text = URL_RE.replace_all(text, " ");
        let text = MAIL_RE.replace_all(&text, " ");
        let text = normalize_vietnamese(&text);
        let mut pre = '\0';
        for ch in text.chars() {
            if self.text_len >= self.max_text_length {
                break;
            }
            if ch != ' ' || pre != ' ' {
                self.text.push(ch);
                self.text_len += 1;
            }
            pre = ch;
        }
    }

    /// Best single guess, or [`UNKNOWN_LANG`] when nothing clears the
    /// probability threshold.
    pub fn detect(&mut self) -> LingoResult<String> {
        let ranked = self.probabilities()?;
        Ok(ranked
            .into_iter()
            .next()
            .map(|language| language.lang)
            .unwrap_or_else(|| UNKNOWN_LANG.to_string()))
    }

    /// Ranked candidates above the probability threshold, best first.
    /// The underlying vector is computed on first call and cached.
    pub fn probabilities(&mut self) -> LingoResult<Vec<Language>> {
        if self.lang_prob.is_none() {
            self.detect_block()?;
        }
        let lang_prob = self.lang_prob.as_deref().unwrap_or(&[]);
        Ok(self.rank(lang_prob))
    }

    fn detect_block(&mut self) -> LingoResult<()> {
        self.clean_text();
        let grams = self.extract_ngrams();
        if grams.is_empty() {
            return Err(LingoError::CannotDetect);
        }

        let mut lang_prob = vec![0.0; self.registry.languages().len()];
        for trial in 0..self.trials {
            let mut prob = self.init_probability();
            let alpha = self.alpha + sample_gaussian(&mut self.rng) * ALPHA_WIDTH;

            let mut i = 0usize;
            loop {
                let pick = self.rng.usize(..grams.len());
                self.update_lang_prob(&mut prob, &grams[pick], alpha);
                if i % 5 == 0 {
                    if normalize_prob(&mut prob) > CONV_THRESHOLD || i >= ITERATION_LIMIT {
                        break;
                    }
                    if tracing::enabled!(tracing::Level::DEBUG) {
                        debug!("> {:?}", self.rank(&prob));
                    }
                }
                i += 1;
            }
            for (total, p) in lang_prob.iter_mut().zip(&prob) {
                *total += p / self.trials as f64;
            }
            if tracing::enabled!(tracing::Level::DEBUG) {
                debug!("==> trial {}: {:?}", trial, self.rank(&prob));
            }
        }
        self.lang_prob = Some(lang_prob);
        Ok(())
    }

    /// Strips stray ASCII letters when the buffer is dominated by
    /// non-Latin script; incidental romanization carries no signal.
    fn clean_text(&mut self) {
        let mut latin = 0usize;
        let mut non_latin = 0usize;
        for ch in self.text.chars() {
            if ('A'..='z').contains(&ch) {
                latin += 1;
            } else if ch >= '\u{0300}' && !('\u{1E00}'..='\u{1EFF}').contains(&ch) {
                non_latin += 1;
            }
        }
        if latin * 2 < non_latin {
            self.text.retain(|ch| !('A'..='z').contains(&ch));
        }
    }

    /// Every gram of the buffer that the registry knows, in order of
    /// appearance, duplicates retained.
    fn extract_ngrams(&self) -> Vec<String> {
        let mut grams = Vec::new();
        let mut window = NGram::new();
        for ch in self.text.chars() {
            window.add_char(ch);
            for n in 1..=N_GRAM {
                if let Some(gram) = window.gram(n) {
                    if self.registry.gram_probs(&gram).is_some() {
                        grams.push(gram);
                    }
                }
            }
        }
        grams
    }

    fn init_probability(&self) -> Vec<f64> {
        match &self.prior {
            Some(prior) => prior.clone(),
            None => {
                let n = self.registry.languages().len();
                vec![1.0 / n as f64; n]
            }
        }
    }

    fn update_lang_prob(&self, prob: &mut [f64], gram: &str, alpha: f64) -> bool {
        let gram_probs = match self.registry.gram_probs(gram) {
            Some(probs) => probs,
            None => return false,
        };
        let weight = alpha / BASE_FREQ;
        for (p, gram_prob) in prob.iter_mut().zip(gram_probs) {
            *p *= weight + gram_prob;
        }
        true
    }

    /// Candidates above [`PROB_THRESHOLD`], inserted before the first
    /// strictly smaller probability (ties keep scan order).
    fn rank(&self, lang_prob: &[f64]) -> Vec<Language> {
        let langs = self.registry.languages();
        let mut ranked: Vec<Language> = Vec::new();
        for (i, &prob) in lang_prob.iter().enumerate() {
            if prob > PROB_THRESHOLD {
                let pos = ranked
                    .iter()
                    .position(|entry| entry.prob < prob)
                    .unwrap_or(ranked.len());
                ranked.insert(
                    pos,
                    Language {
                        lang: langs[i].clone(),
                        prob,
                    },
                );
            }
        }
        ranked
    }
}

/// One standard Gaussian deviate (Box-Muller).
fn sample_gaussian(rng: &mut fastrand::Rng) -> f64 {
    let angle = std::f64::consts::PI * rng.f64();
    let distance = (-2.0 * rng.f64().ln()).sqrt();
    angle.cos() * distance
}

/// Scales `prob` in place to sum to 1 and returns the maximum entry.
fn normalize_prob(prob: &mut [f64]) -> f64 {
    let sum: f64 = prob.iter().sum();
    let mut max = 0.0;
    for p in prob.iter_mut() {
        let q = *p / sum;
        if q > max {
            max = q;
        }
        *p = q;
    }
    max
}

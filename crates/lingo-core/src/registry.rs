// ===== lingo/crates/lingo-core/src/registry.rs =====
use fnv::FnvHashMap;
use tracing::debug;

use crate::config::DetectorOptions;
use crate::consts::N_GRAM;
use crate::detector::Detector;
use crate::error::{LingoError, LingoResult};
use crate::profile::LangProfile;

/// Loaded language profiles merged into one gram-to-probability index.
///
/// Load every profile up front, then share the registry immutably across
/// any number of detector sessions. Each gram maps to a dense vector of
/// per-language relative frequencies, index-aligned with [`languages`].
///
/// [`languages`]: ProfileRegistry::languages
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    langs: Vec<String>,
    gram_probs: FnvHashMap<String, Vec<f64>>,
}

impl ProfileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a complete batch of profiles. The batch
    /// must hold at least two distinctly named profiles.
    pub fn from_profiles(profiles: &[LangProfile]) -> LingoResult<Self> {
        if profiles.len() < 2 {
            return Err(LingoError::InsufficientProfiles(profiles.len()));
        }
        let mut registry = Self::new();
        let total = profiles.len();
        for (index, profile) in profiles.iter().enumerate() {
            registry.add_profile(profile, index, total)?;
        }
        Ok(registry)
    }

    /// Merges one profile as language `index` of a batch of `total`.
    ///
    /// Probability vectors are allocated at `total` width up front and
    /// never resized, so `total` must be the final batch size. A gram's
    /// entry is its count divided by the profile's same-length total.
    pub fn add_profile(
        &mut self,
        profile: &LangProfile,
        index: usize,
        total: usize,
    ) -> LingoResult<()> {
        if self.langs.iter().any(|lang| lang == &profile.name) {
            return Err(LingoError::DuplicateLanguage(profile.name.clone()));
        }
        self.langs.push(profile.name.clone());
        for (gram, &count) in &profile.freq {
            let slot = match gram.chars().count() {
                len @ 1..=N_GRAM => len - 1,
                _ => continue,
            };
            let probs = self
                .gram_probs
                .entry(gram.clone())
                .or_insert_with(|| vec![0.0; total]);
            probs[index] = f64::from(count) / f64::from(profile.n_words[slot]);
        }
        debug!(
            "merged profile '{}' ({} grams) at index {}/{}",
            profile.name,
            profile.freq.len(),
            index,
            total
        );
        Ok(())
    }

    /// Drops every loaded profile. Required before loading an unrelated
    /// language set into the same value.
    pub fn clear(&mut self) {
        self.langs.clear();
        self.gram_probs.clear();
    }

    /// Language names in load order; probability vectors align with this.
    pub fn languages(&self) -> &[String] {
        &self.langs
    }

    pub(crate) fn gram_probs(&self, gram: &str) -> Option<&[f64]> {
        self.gram_probs.get(gram).map(Vec::as_slice)
    }

    /// Starts a detection session with default options.
    pub fn detector(&self) -> LingoResult<Detector<'_>> {
        self.detector_with(DetectorOptions::default())
    }

    /// Starts a detection session with explicit options.
    pub fn detector_with(&self, options: DetectorOptions) -> LingoResult<Detector<'_>> {
        if self.langs.is_empty() {
            return Err(LingoError::NeedsProfile);
        }
        Ok(Detector::new(self, options))
    }
}

use clap::Args;
use serde::{Deserialize, Serialize};

use crate::consts::{ALPHA_DEFAULT, MAX_TEXT_LENGTH_DEFAULT, TRIALS_DEFAULT};

/// Tunables for a single detection session. Flattened into the CLI's
/// subcommands and accepted by [`crate::ProfileRegistry::detector_with`].
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorOptions {
    /// Additive smoothing parameter blended into every probability update.
    #[arg(long, default_value_t = ALPHA_DEFAULT)]
    pub alpha: f64,

    /// Maximum number of characters kept in the text buffer; appends past
    /// the cap are ignored.
    #[arg(long, default_value_t = MAX_TEXT_LENGTH_DEFAULT)]
    pub max_text_length: usize,

    /// Number of independent randomized trials averaged per detection.
    #[arg(long, default_value_t = TRIALS_DEFAULT)]
    pub trials: usize,

    /// Seed for the session's random generator. Unset means
    /// non-deterministic output.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for DetectorOptions {
    fn default() -> Self {
        Self {
            alpha: ALPHA_DEFAULT,
            max_text_length: MAX_TEXT_LENGTH_DEFAULT,
            trials: TRIALS_DEFAULT,
            seed: None,
        }
    }
}

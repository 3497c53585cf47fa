// ===== lingo/crates/lingo-core/src/consts.rs =====
/// Maximum n-gram length tracked by the window (1-, 2- and 3-grams).
pub const N_GRAM: usize = 3;

/// Hard cap on probability-update picks per trial; the only bound on
/// worst-case detection latency.
pub const ITERATION_LIMIT: usize = 1000;

/// Languages below this probability are dropped from the ranked result.
pub const PROB_THRESHOLD: f64 = 0.1;

/// A trial stops early once the best language exceeds this probability.
pub const CONV_THRESHOLD: f64 = 0.99999;

/// Divisor applied to alpha in each update step (`alpha / BASE_FREQ` is
/// the additive smoothing floor).
pub const BASE_FREQ: f64 = 10000.0;

/// Standard deviation of the per-trial Gaussian perturbation of alpha.
pub const ALPHA_WIDTH: f64 = 0.05;

/// Default smoothing parameter (Expected-Likelihood-Estimate style).
pub const ALPHA_DEFAULT: f64 = 0.5;

/// Default cap on the accumulated text buffer, in characters.
pub const MAX_TEXT_LENGTH_DEFAULT: usize = 10_000;

/// Default number of independent randomized trials per detection.
pub const TRIALS_DEFAULT: usize = 7;

/// Sentinel language name returned when nothing clears [`PROB_THRESHOLD`].
pub const UNKNOWN_LANG: &str = "unknown";

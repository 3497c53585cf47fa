// Statistical language detection: profiles of 1..3-gram frequencies,
// merged into a shared registry, queried by a randomized ensemble
// estimator.

pub mod config;
pub mod consts;
pub mod detector;
pub mod error;
pub mod ngram;
pub mod normalize;
pub mod profile;
pub mod registry;

pub use config::DetectorOptions;
pub use detector::{Detector, Language};
pub use error::{LingoError, LingoResult};
pub use profile::LangProfile;
pub use registry::ProfileRegistry;

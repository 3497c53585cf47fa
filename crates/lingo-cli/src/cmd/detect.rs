use std::fs;
use std::path::Path;

use clap::Args;
use lingo_core::{DetectorOptions, LingoError, LingoResult};
use tracing::info;

use crate::loader;

#[derive(Args, Debug, Clone)]
pub struct DetectArgs {
    /// Text files to classify.
    #[arg(required = true)]
    pub files: Vec<String>,

    #[command(flatten)]
    pub options: DetectorOptions,
}

pub fn run(args: DetectArgs, profile_dir: &str) -> LingoResult<()> {
    let registry = loader::load_profiles(Path::new(profile_dir))?;
    info!("🔎 Detecting over {} file(s)", args.files.len());

    for path in &args.files {
        let text = fs::read_to_string(path)?;
        let mut detector = registry.detector_with(args.options.clone())?;
        detector.append(&text);

        match detector.probabilities() {
            Ok(ranked) if !ranked.is_empty() => {
                let columns = ranked
                    .iter()
                    .map(|lang| lang.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                println!("{}: {}", path, columns);
            }
            // No candidate over the threshold, or no scoreable grams at
            // all: report the file as unknown rather than aborting the
            // batch.
            Ok(_) | Err(LingoError::CannotDetect) => println!("{}: unknown", path),
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

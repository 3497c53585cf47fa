// ===== lingo/crates/lingo-cli/src/cmd/batch.rs =====
use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use clap::Args;
use lingo_core::consts::UNKNOWN_LANG;
use lingo_core::{DetectorOptions, LingoError, LingoResult, ProfileRegistry};
use rayon::prelude::*;
use tracing::info;

use crate::loader;
use crate::reports::{self, LangTally};

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// Labelled test data: one `lang<TAB>text` row per line.
    pub data: String,

    #[command(flatten)]
    pub options: DetectorOptions,
}

fn csv_io(err: csv::Error) -> LingoError {
    LingoError::ImportIo(io::Error::other(err))
}

pub fn run(args: BatchArgs, profile_dir: &str) -> LingoResult<()> {
    let registry = loader::load_profiles(Path::new(profile_dir))?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_path(&args.data)
        .map_err(csv_io)?;

    let mut rows: Vec<(String, String)> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_io)?;
        if let (Some(lang), Some(text)) = (record.get(0), record.get(1)) {
            rows.push((lang.to_string(), text.to_string()));
        }
    }
    info!("🧪 Scoring {} rows against {} languages", rows.len(), registry.languages().len());

    let guesses: Vec<(String, String)> = rows
        .par_iter()
        .enumerate()
        .map(|(i, (expected, text))| {
            let guess = detect_row(&registry, &args.options, i, text);
            (expected.clone(), guess)
        })
        .collect();

    let mut tallies: BTreeMap<String, LangTally> = BTreeMap::new();
    for (expected, guess) in &guesses {
        let tally = tallies.entry(expected.clone()).or_default();
        tally.total += 1;
        if guess == expected {
            tally.hits += 1;
        } else {
            *tally.confusions.entry(guess.clone()).or_insert(0) += 1;
        }
    }

    reports::accuracy(&tallies);
    Ok(())
}

fn detect_row(
    registry: &ProfileRegistry,
    options: &DetectorOptions,
    row: usize,
    text: &str,
) -> String {
    let mut options = options.clone();
    // Row-index-derived seeds keep parallel runs reproducible.
    if let Some(seed) = options.seed {
        options.seed = Some(seed + row as u64);
    }
    registry
        .detector_with(options)
        .and_then(|mut detector| {
            detector.append(text);
            detector.detect()
        })
        .unwrap_or_else(|_| UNKNOWN_LANG.to_string())
}

use std::fs::File;
use std::io::{BufRead, BufReader};

use clap::Args;
use lingo_core::{LangProfile, LingoResult};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct TrainArgs {
    /// Language code written into the profile's `name` field.
    #[arg(short, long)]
    pub lang: String,

    /// Plain-text training corpus, read line by line.
    pub corpus: String,

    /// Output profile file; defaults to the language code.
    #[arg(short, long)]
    pub out: Option<String>,
}

pub fn run(args: TrainArgs) -> LingoResult<()> {
    info!("🏋️  Training '{}' from {}", args.lang, args.corpus);

    let file = File::open(&args.corpus)?;
    let mut profile = LangProfile::new(&args.lang);
    for line in BufReader::new(file).lines() {
        profile.update(&line?);
    }
    info!(
        "    raw: {} distinct grams, n_words = {:?}",
        profile.freq.len(),
        profile.n_words
    );

    profile.prune();
    info!(
        "    pruned: {} distinct grams, n_words = {:?}",
        profile.freq.len(),
        profile.n_words
    );

    let out = args.out.unwrap_or_else(|| args.lang.clone());
    serde_json::to_writer(File::create(&out)?, &profile)?;
    info!("💾 Wrote {}", out);
    Ok(())
}

use clap::{Parser, Subcommand};
use std::process;
use tracing::error;

mod cmd;
mod loader;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding trained profile files.
    #[arg(global = true, short = 'd', long, default_value = "profiles")]
    profiles: String,

    /// Emit per-trial rankings and registry merge diagnostics.
    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Detect the language of one or more text files.
    Detect(cmd::detect::DetectArgs),
    /// Train a language profile from a plain-text corpus.
    Train(cmd::train::TrainArgs),
    /// Evaluate detection accuracy over a labelled TSV data set.
    BatchTest(cmd::batch::BatchArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let result = match cli.command {
        Commands::Detect(args) => cmd::detect::run(args, &cli.profiles),
        Commands::Train(args) => cmd::train::run(args),
        Commands::BatchTest(args) => cmd::batch::run(args, &cli.profiles),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}

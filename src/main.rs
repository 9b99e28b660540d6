use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use speechscore::{analyze, read_request_file, render_summary, AnalysisRequest};

#[derive(Parser)]
#[command(name = "speechscore")]
#[command(author, version, about = "Speech transcript confidence scoring", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a request file and emit the full report
    Analyze {
        /// Input request file (JSON with transcript, language, optional
        /// languageSegments)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the report (JSON); stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print a human-readable summary instead of JSON on stdout
        #[arg(long)]
        summary: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Score a transcript given directly on the command line
    Score {
        /// The transcript text
        #[arg(short, long)]
        text: String,

        /// Language code (en, te, hi)
        #[arg(short, long, default_value = "en")]
        language: String,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            output,
            summary,
            verbose,
        } => {
            setup_logging(verbose);
            analyze_request_file(input, output, summary)
        }
        Commands::Score {
            text,
            language,
            verbose,
        } => {
            setup_logging(verbose);
            score_text(text, language)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn analyze_request_file(input: PathBuf, output: Option<PathBuf>, summary: bool) -> Result<()> {
    info!("Loading request from {:?}", input);
    let request = read_request_file(&input).context("Failed to load request")?;

    info!(
        "Analyzing {} words ({} segments)",
        request.transcript.split_whitespace().count(),
        request.language_segments.len()
    );
    let report = analyze(&request).context("Analysis failed")?;

    info!(
        "Confidence {:.2}%, {} low-confidence segments",
        report.confidence_score,
        report.low_confidence_segments.len()
    );

    if let Some(path) = &output {
        report.write_json(path)?;
        info!("Report written to {:?}", path);
    }

    if summary {
        print!("{}", render_summary(&report));
    } else if output.is_none() {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

fn score_text(text: String, language: String) -> Result<()> {
    let request = AnalysisRequest::new(text, language);
    let report = analyze(&request).context("Analysis failed")?;
    print!("{}", render_summary(&report));
    Ok(())
}

//! Implementation of the `haze score` command.

use clap::Args;
use haze::similarity::{per_word_scores, score};
use haze::WordScore;
use miette::Result;
use serde::Serialize;

use super::common::print_json;
use crate::output::table::format_word_table;

/// Arguments for the score command.
#[derive(Debug, Args)]
pub struct ScoreArgs {
    /// Original text
    pub original: String,

    /// Text to compare against the original
    pub transformed: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for score results.
#[derive(Serialize)]
struct ScoreJson {
    similarity: f64,
    word_scores: Vec<WordScore>,
}

/// Run the score command.
pub fn run_score(args: ScoreArgs) -> Result<i32> {
    let output = ScoreJson {
        similarity: score(&args.original, &args.transformed),
        word_scores: per_word_scores(&args.original, &args.transformed),
    };

    if args.json {
        print_json(&output)?;
    } else {
        println!("{:.1}% similar", output.similarity * 100.0);
        if !output.word_scores.is_empty() {
            println!("{}", format_word_table(&output.word_scores));
        }
    }
    Ok(exitcode::OK)
}

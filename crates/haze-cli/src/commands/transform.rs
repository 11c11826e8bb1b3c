//! Implementation of the `haze transform` command.

use clap::Args;
use haze::{LanguageTag, TransformMethod, TransformationRequest, TransformationResult};
use miette::Result;
use owo_colors::{OwoColorize, Stream};

use super::common::{print_json, report_failure, HazerArgs};
use crate::output::table::{format_chain_table, format_word_table};

/// Arguments for the transform command.
#[derive(Debug, Args)]
pub struct TransformArgs {
    /// Text to haze
    pub text: String,

    /// Language the text is written in (name or code, e.g. english or en)
    #[arg(long)]
    pub from: LanguageTag,

    /// Language to bridge through
    #[arg(long)]
    pub via: LanguageTag,

    /// fuzzy, translate or hybrid
    #[arg(long, default_value_t = TransformMethod::Hybrid)]
    pub method: TransformMethod,

    #[command(flatten)]
    pub hazer: HazerArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the transform command.
pub fn run_transform(args: TransformArgs) -> Result<i32> {
    let hazer = args.hazer.build()?;
    let request = TransformationRequest::new(args.text, args.from, args.via, args.method);

    match hazer.transform(&request) {
        Ok(result) => {
            if args.json {
                print_json(&result)?;
            } else {
                print_result(&result);
            }
            Ok(exitcode::OK)
        }
        Err(e) => Ok(report_failure(&e, args.json)),
    }
}

fn print_result(result: &TransformationResult) {
    println!(
        "{}",
        result
            .bridged_text
            .if_supports_color(Stream::Stdout, |s| s.bold())
    );
    println!();

    let fallback = if result.fell_back() {
        ", fell back from hybrid"
    } else {
        ""
    };
    println!(
        "{} by {}{}, {:.1}% similar",
        result.route(),
        result.method_used,
        fallback,
        result.similarity * 100.0
    );
    println!("{}", format_chain_table(&result.chain));
    if !result.word_scores.is_empty() {
        println!("{}", format_word_table(&result.word_scores));
    }
}

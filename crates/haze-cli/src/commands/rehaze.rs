//! Implementation of the `haze rehaze` command.

use clap::Args;
use haze::{LanguageTag, RehazeOptions, RehazeStop, TransformMethod, TransformationRequest};
use miette::Result;

use super::common::{print_json, report_failure, HazerArgs};
use crate::output::table::format_iteration_table;

/// Arguments for the rehaze command.
#[derive(Debug, Args)]
pub struct RehazeArgs {
    /// Text to haze
    pub text: String,

    /// Language the text is written in
    #[arg(long)]
    pub from: LanguageTag,

    /// Language to bridge through
    #[arg(long)]
    pub via: LanguageTag,

    /// fuzzy, translate or hybrid
    #[arg(long, default_value_t = TransformMethod::Hybrid)]
    pub method: TransformMethod,

    /// Most round trips to run
    #[arg(long, default_value_t = 20)]
    pub max_iterations: usize,

    /// Stop once consecutive outputs are at least this similar (0 to 1)
    #[arg(long, default_value_t = 0.96)]
    pub threshold: f64,

    #[command(flatten)]
    pub hazer: HazerArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the rehaze command.
pub fn run_rehaze(args: RehazeArgs) -> Result<i32> {
    let hazer = args.hazer.build()?;
    let request = TransformationRequest::new(args.text, args.from, args.via, args.method);
    let options = RehazeOptions::builder()
        .max_iterations(args.max_iterations)
        .similarity_threshold(args.threshold)
        .build();

    let report = match hazer.rehaze(&request, &options) {
        Ok(report) => report,
        Err(e) => return Ok(report_failure(&e, args.json)),
    };

    if args.json {
        print_json(&report)?;
    } else {
        println!("{}", format_iteration_table(&report.iterations));
        let count = report.iterations.len();
        match report.stop {
            RehazeStop::Converged => println!("Converged after {count} iterations"),
            RehazeStop::IterationLimit => {
                println!("Stopped after {count} iterations without converging");
            }
            RehazeStop::EmptyOutput => {
                println!("Stopped after {count} iterations: the output was empty");
            }
            RehazeStop::OutputTooLong { length, max } => println!(
                "Stopped after {count} iterations: the output grew to {length} characters, \
                 limit is {max}"
            ),
        }
        println!("{}", report.final_text);
    }
    Ok(exitcode::OK)
}

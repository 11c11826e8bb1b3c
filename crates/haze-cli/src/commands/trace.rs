//! Implementation of the `haze trace` command.

use std::path::PathBuf;

use clap::Args;
use haze::similarity::words;
use haze::{HazeError, LanguageTag};
use miette::Result;
use serde::Serialize;

use super::common::{load_rules, print_json, report_failure};
use crate::output::table::format_trace_table;

/// Arguments for the trace command.
#[derive(Debug, Args)]
pub struct TraceArgs {
    /// A single word to trace
    pub word: String,

    /// Language the word is written in
    #[arg(long)]
    pub from: LanguageTag,

    /// Language to bridge through
    #[arg(long)]
    pub via: LanguageTag,

    /// Rule file to use instead of the built-in rules
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one rule that fired.
#[derive(Serialize)]
struct HitJson<'a> {
    from: LanguageTag,
    to: LanguageTag,
    pattern: String,
    replacement: &'a str,
    before: &'a str,
    after: &'a str,
}

/// Run the trace command.
pub fn run_trace(args: TraceArgs) -> Result<i32> {
    if words(&args.word).len() != 1 {
        eprintln!("Expected a single word, got '{}'", args.word);
        return Ok(exitcode::USAGE);
    }

    let table = load_rules(args.rules.as_deref())?;
    let (forward, backward) = match (
        table.get(args.from, args.via),
        table.get(args.via, args.from),
    ) {
        (Some(forward), Some(backward)) => (forward, backward),
        (None, _) => return Ok(unsupported(args.from, args.via, args.json)),
        (Some(_), None) => return Ok(unsupported(args.via, args.from, args.json)),
    };

    let bridged = forward.apply_word(&args.word);
    let stages = vec![
        (args.from, args.via, forward.trace_word(&args.word)),
        (args.via, args.from, backward.trace_word(&bridged)),
    ];

    if args.json {
        let hits: Vec<HitJson<'_>> = stages
            .iter()
            .flat_map(|(from, to, hits)| {
                hits.iter().map(move |hit| HitJson {
                    from: *from,
                    to: *to,
                    pattern: hit.rule.written_pattern(),
                    replacement: &hit.rule.replacement,
                    before: &hit.before,
                    after: &hit.after,
                })
            })
            .collect();
        print_json(&hits)?;
        return Ok(exitcode::OK);
    }

    println!("{}", format_trace_table(&stages));
    println!(
        "{} → {} → {}",
        args.word,
        bridged,
        backward.apply_word(&bridged)
    );
    Ok(exitcode::OK)
}

fn unsupported(source_lang: LanguageTag, bridge_lang: LanguageTag, json: bool) -> i32 {
    let error = HazeError::UnsupportedLanguagePair {
        source_lang,
        bridge_lang,
    };
    report_failure(&error, json)
}

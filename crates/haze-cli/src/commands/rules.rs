//! Implementation of the `haze rules` command.

use std::path::PathBuf;

use clap::Args;
use haze::rules::RuleSet;
use miette::Result;

use super::common::{load_rules, print_json};
use crate::output::table::format_pairs_table;

/// Arguments for the rules command.
#[derive(Debug, Args)]
pub struct RulesArgs {
    /// Rule file to validate; lists the built-in rules when omitted
    pub file: Option<PathBuf>,

    /// Output the rule sets as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the rules command.
pub fn run_rules(args: RulesArgs) -> Result<i32> {
    let table = load_rules(args.file.as_deref())?;

    if args.json {
        let sets: Vec<&RuleSet> = table.rule_sets().collect();
        print_json(&sets)?;
        return Ok(exitcode::OK);
    }

    println!("{}", format_pairs_table(&table));
    let origin = args
        .file
        .as_ref()
        .map_or_else(|| "built-in rules".to_string(), |path| path.display().to_string());
    println!("{} directions in {}", table.len(), origin);
    Ok(exitcode::OK)
}

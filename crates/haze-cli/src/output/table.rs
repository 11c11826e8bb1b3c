//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use haze::rules::{RuleHit, RuleTable};
use haze::{ChainStep, LanguageTag, RehazeIteration, WordScore};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

fn percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// Format the stages of a round trip.
pub fn format_chain_table(chain: &[ChainStep]) -> Table {
    let mut table = new_table(vec!["Step", "Method", "Input", "Output", "Changed"]);
    for step in chain {
        table.add_row(vec![
            format!("{} → {}", step.from, step.to),
            step.method.to_string(),
            step.input.clone(),
            step.output.clone(),
            if step.changed() { "yes" } else { "no" }.to_string(),
        ]);
    }
    table
}

/// Format per-word similarity.
pub fn format_word_table(scores: &[WordScore]) -> Table {
    let mut table = new_table(vec!["Word", "Became", "Similarity", "Sounds alike"]);
    for score in scores {
        table.add_row(vec![
            score.word.clone(),
            score.aligned.clone(),
            percent(score.score),
            percent(score.phonetic),
        ]);
    }
    table
}

/// Format the iterations of a rehaze run.
pub fn format_iteration_table(iterations: &[RehazeIteration]) -> Table {
    let mut table = new_table(vec!["#", "Output", "Similarity to previous", "Method"]);
    for iteration in iterations {
        table.add_row(vec![
            iteration.index.to_string(),
            iteration.output.clone(),
            iteration
                .similarity_to_previous
                .map_or_else(|| "-".to_string(), percent),
            iteration.method_used.to_string(),
        ]);
    }
    table
}

/// Format the directions a rule table covers.
pub fn format_pairs_table(rules: &RuleTable) -> Table {
    let mut table = new_table(vec!["Source", "Bridge", "Rules", "Round trip"]);
    for set in rules.rule_sets() {
        let round_trip = if rules.supports_round_trip(set.source, set.bridge) {
            "yes"
        } else {
            "no"
        };
        table.add_row(vec![
            set.source.to_string(),
            set.bridge.to_string(),
            set.len().to_string(),
            round_trip.to_string(),
        ]);
    }
    table
}

/// Format the rules that fired on one word, stage by stage.
pub fn format_trace_table(stages: &[(LanguageTag, LanguageTag, Vec<RuleHit<'_>>)]) -> Table {
    let mut table = new_table(vec!["Step", "Rule", "Before", "After"]);
    for (from, to, hits) in stages {
        for hit in hits {
            table.add_row(vec![
                format!("{from} → {to}"),
                hit.rule.to_string(),
                hit.before.clone(),
                hit.after.clone(),
            ]);
        }
    }
    table
}

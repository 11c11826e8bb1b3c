//! CLI command implementations.

mod common;
mod rehaze;
mod rules;
mod score;
mod trace;
mod transform;

pub use rehaze::{run_rehaze, RehazeArgs};
pub use rules::{run_rules, RulesArgs};
pub use score::{run_score, ScoreArgs};
pub use trace::{run_trace, TraceArgs};
pub use transform::{run_transform, TransformArgs};

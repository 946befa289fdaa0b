//! End-to-end generation pipeline.
//!
//! One function from (library, answers, timestamp) to a finished
//! script: parse the target OS and risk level, select the applicable
//! rules, render. The timestamp is injected so callers control
//! reproducibility.

pub mod error;

pub use error::GenerateError;

use chrono::{DateTime, Utc};
use log::info;

use crate::questionnaire::AnswerSet;
use crate::render::{self, GeneratedScript};
use crate::rules::RuleLibrary;
use crate::selection;

/// Generate a hardening script for the recorded answers
pub fn generate(
    library: &RuleLibrary,
    answers: &AnswerSet,
    now: DateTime<Utc>,
) -> Result<GeneratedScript, GenerateError> {
    let os = selection::target_os(answers)?;
    let risk_level = selection::target_risk_level(answers)?;
    let rules = selection::select_rules(library, answers)?;

    let script = render::render_script(os, risk_level, &rules, now);
    info!(
        "generated {} ({} rules, {} bytes) for os={} risk={}",
        script.filename,
        script.rule_count,
        script.size(),
        os,
        risk_level
    );
    Ok(script)
}

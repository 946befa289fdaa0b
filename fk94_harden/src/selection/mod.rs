//! Rule selection — the core filtering algorithm.
//!
//! Pure function of (answers, library): no I/O, no shared state, and
//! library order is the only ordering. Calling it twice with identical
//! inputs yields identical, order-stable output.

pub mod error;

pub use error::SelectionError;

use log::debug;

use crate::questionnaire::{AnswerSet, QUESTION_OS, QUESTION_RISK_LEVEL};
use crate::rules::{HardeningRule, Os, RiskLevel, RuleLibrary};

/// Parse the required `os` answer
pub fn target_os(answers: &AnswerSet) -> Result<Os, SelectionError> {
    let value = answers
        .get(QUESTION_OS)
        .ok_or_else(|| SelectionError::missing(QUESTION_OS))?;
    value
        .parse()
        .map_err(|_| SelectionError::invalid(QUESTION_OS, value))
}

/// Parse the required `risk_level` answer
pub fn target_risk_level(answers: &AnswerSet) -> Result<RiskLevel, SelectionError> {
    let value = answers
        .get(QUESTION_RISK_LEVEL)
        .ok_or_else(|| SelectionError::missing(QUESTION_RISK_LEVEL))?;
    value
        .parse()
        .map_err(|_| SelectionError::invalid(QUESTION_RISK_LEVEL, value))
}

/// Select the applicable rules, preserving library order
///
/// A rule is included iff the target OS is in its OS set with a
/// non-empty command body, the risk level is in its risk set, and
/// every extra condition is satisfied by the recorded answers. An
/// unanswered condition question fails that condition; it is not an
/// error. Zero matches is a valid (empty) result.
pub fn select_rules<'a>(
    library: &'a RuleLibrary,
    answers: &AnswerSet,
) -> Result<Vec<&'a HardeningRule>, SelectionError> {
    let os = target_os(answers)?;
    let risk_level = target_risk_level(answers)?;

    let selected: Vec<&HardeningRule> = library
        .iter()
        .filter(|rule| {
            let included = rule_applies(rule, os, risk_level, answers);
            debug!(
                "rule '{}': {}",
                rule.id,
                if included { "included" } else { "excluded" }
            );
            included
        })
        .collect();

    debug!(
        "selected {} of {} rules for os={} risk={}",
        selected.len(),
        library.len(),
        os,
        risk_level
    );
    Ok(selected)
}

fn rule_applies(rule: &HardeningRule, os: Os, risk_level: RiskLevel, answers: &AnswerSet) -> bool {
    // OS gating dominates: in scope AND a non-empty body for the target
    if !rule.applicable_to_os(os) {
        return false;
    }

    if !rule.targets_risk(risk_level) {
        return false;
    }

    // Conditions are conjunctive; vacuously true when absent
    rule.conditions
        .iter()
        .all(|condition| condition.is_satisfied_by(answers.get(&condition.question_id)))
}

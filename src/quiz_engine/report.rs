use serde_json::{json, Value};

use crate::quiz_engine::{
    error::Result,
    models::{Outcome, SessionReport},
};

/// JSON view of a finished session, entries numbered in play order.
pub fn to_json(report: &SessionReport) -> Value {
    let entries: Vec<Value> = report
        .results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            json!({
                "position": i + 1,
                "title": r.title,
                "outcome": r.outcome,
                "solved": r.outcome == Outcome::Correct,
                "variants_shown": r.variants_shown,
            })
        })
        .collect();

    json!({
        "total": report.score.total,
        "correct": report.score.correct,
        "incorrect": report.score.incorrect,
        "verdict": report.score.verdict(),
        "entries": entries,
    })
}

pub fn to_pretty_string(report: &SessionReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_json(report))?)
}

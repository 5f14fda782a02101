//! The pure repair pipeline: fold the curated rules, in order, over a text
//! buffer. Stateless and deterministic; all file handling lives in the `io`
//! and `api` modules.
use std::borrow::Cow;

use serde::Serialize;

use crate::core::rules::RULES;

/// How many occurrences a single rule rewrote during one pipeline run.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RuleHit {
    pub rule: &'static str,
    pub count: usize,
}

/// Apply every rule in order and report which ones fired.
///
/// Rules whose pattern does not occur are no-ops and are omitted from the
/// hit list. Captured inner content (interpolation expressions, attribute
/// values) is carried into the replacement verbatim.
pub fn repair_text_detailed(input: &str) -> (String, Vec<RuleHit>) {
    let mut hits = Vec::new();
    let mut text = Cow::Borrowed(input);

    for rule in RULES.iter() {
        let count = rule.match_count(&text);
        if count == 0 {
            continue;
        }
        text = Cow::Owned(rule.apply(&text).into_owned());
        hits.push(RuleHit {
            rule: rule.name(),
            count,
        });
    }

    (text.into_owned(), hits)
}

/// Apply every rule in order.
///
/// Identity on text containing none of the corruption patterns; applying
/// the pipeline twice yields the same result as applying it once, since no
/// rule's replacement re-matches its own pattern.
pub fn repair_text(input: &str) -> String {
    repair_text_detailed(input).0
}

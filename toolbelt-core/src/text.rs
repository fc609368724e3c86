//! Text case transforms — upper, lower, title, reverse.

use serde::{Deserialize, Serialize};

/// Which case transform to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseAction {
    Upper,
    Lower,
    Title,
    Reverse,
}

impl CaseAction {
    pub fn label(self) -> &'static str {
        match self {
            CaseAction::Upper => "UPPERCASE",
            CaseAction::Lower => "lowercase",
            CaseAction::Title => "Title Case",
            CaseAction::Reverse => "Reverse",
        }
    }
}

/// Apply a case transform to the whole input.
pub fn transform(input: &str, action: CaseAction) -> String {
    match action {
        CaseAction::Upper => input.to_uppercase(),
        CaseAction::Lower => input.to_lowercase(),
        CaseAction::Title => title_case(input),
        CaseAction::Reverse => input.chars().rev().collect(),
    }
}

/// Title-case every whitespace-delimited word: first alphabetic character
/// uppercased, the rest lowercased. Whitespace runs are preserved verbatim.
fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for c in input.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            at_word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

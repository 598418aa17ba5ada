//! Signal extraction — the eight boolean checks the rubric tables consume.
//!
//! Each signal is a cheap pattern match over the answer text. None of them
//! understand language; together they are a serviceable proxy for whether
//! an answer would hold up in an interview.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::project::ProjectContext;

/// Causal language: the answer explains *why*.
static EXPLANATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)because|therefore|since|so that|in order to|the reason").unwrap()
});

/// Implementation verbs: the answer names what was actually done.
static SPECIFICS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)implemented|built|designed|created|used|configured|integrated|handled")
        .unwrap()
});

/// Exemplification markers.
static EXAMPLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)for example|such as|like when|instance|specifically").unwrap());

/// Generic filler phrases that say nothing about the project.
static GENERIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)it is good|it works well|it helps|its useful|i learned a lot").unwrap()
});

static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").unwrap());

/// The full signal set for one answer. `word_count` rides along because
/// three of the rubric tables branch on it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerSignals {
    pub word_count: usize,
    /// Word count ≥ 50.
    pub has_length: bool,
    /// Mentions the project name or a tech-stack entry (case-insensitive).
    pub has_project_reference: bool,
    /// Uses causal language ("because", "so that", ...).
    pub has_explanation: bool,
    /// Uses implementation verbs ("implemented", "configured", ...).
    pub has_specifics: bool,
    /// Contains at least one digit.
    pub has_numbers: bool,
    /// Gives an example ("for example", "such as", ...).
    pub has_example: bool,
    /// Free of generic filler phrases.
    pub not_generic: bool,
    /// More than 5 words AND more than half of them longer than 3 chars —
    /// a weak guard against keyword stuffing.
    pub not_random: bool,
}

impl AnswerSignals {
    /// How many of the eight checks passed.
    pub fn passed_count(&self) -> u32 {
        [
            self.has_length,
            self.has_project_reference,
            self.has_explanation,
            self.has_specifics,
            self.has_numbers,
            self.has_example,
            self.not_generic,
            self.not_random,
        ]
        .iter()
        .filter(|&&passed| passed)
        .count() as u32
    }
}

/// Runs every check against the answer. Total: any string, including the
/// empty one, produces a complete signal set.
pub fn extract_signals(project: &ProjectContext, answer: &str) -> AnswerSignals {
    let lowered = answer.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    let word_count = words.len();

    let name = project.name.to_lowercase();
    let name_hit = !name.is_empty() && lowered.contains(&name);
    let stack_hit = project.tech_stack.iter().any(|tech| {
        let tech = tech.to_lowercase();
        !tech.is_empty() && lowered.contains(&tech)
    });

    let long_words = words.iter().filter(|w| w.chars().count() > 3).count();

    AnswerSignals {
        word_count,
        has_length: word_count >= 50,
        has_project_reference: name_hit || stack_hit,
        has_explanation: EXPLANATION.is_match(answer),
        has_specifics: SPECIFICS.is_match(answer),
        has_numbers: DIGIT.is_match(answer),
        has_example: EXAMPLE.is_match(answer),
        not_generic: !GENERIC.is_match(answer),
        not_random: word_count > 5 && long_words * 2 > word_count,
    }
}

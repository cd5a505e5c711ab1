use std::collections::HashSet;
use std::fmt;

use log::{trace, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Guesses allowed per question unless configured otherwise.
pub const DEFAULT_MAX_GUESSES: usize = 3;

/// Scrambled variants pre-generated for every title.
pub const DEFAULT_VARIANTS_PER_TITLE: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Attempts per question. `next`, `pass` and wrong guesses all use one.
    pub max_guesses: usize,
    pub variants_per_title: usize,
    /// `Some(seed)` reproduces the same order, pools and picks every run.
    pub rng_seed: Option<u64>,
}

impl QuizConfig {
    pub fn new() -> Self {
        QuizConfig {
            max_guesses: DEFAULT_MAX_GUESSES,
            variants_per_title: DEFAULT_VARIANTS_PER_TITLE,
            rng_seed: None,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        QuizConfig { rng_seed: Some(seed), ..QuizConfig::new() }
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        QuizConfig::new()
    }
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// One movie title, its pool of scrambled variants and whether it was solved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizEntry {
    title: String,
    variants: Vec<String>,
    #[serde(default)]
    shown: HashSet<String>,
    #[serde(default)]
    solved: bool,
}

impl QuizEntry {
    pub fn new(title: impl Into<String>, variants: Vec<String>) -> Self {
        QuizEntry {
            title: title.into(),
            variants,
            shown: HashSet::new(),
            solved: false,
        }
    }

    /// Canonical answer, case preserved for display.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    /// Variants already presented for this entry.
    pub fn shown(&self) -> &HashSet<String> {
        &self.shown
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub(crate) fn mark_solved(&mut self) {
        self.solved = true;
    }

    /// Case-insensitive exact comparison against the title, ignoring
    /// surrounding whitespace on both sides.
    pub fn matches_title(&self, guess: &str) -> bool {
        guess.trim().to_lowercase() == self.title.trim().to_lowercase()
    }

    /// Pick a variant that has not been shown yet and record it as shown.
    ///
    /// Once every variant has been shown the pick falls back to the whole
    /// pool, so repeats are possible but the call never fails. An entry
    /// with an empty pool yields an empty string.
    pub fn random_variant<R: Rng>(&mut self, rng: &mut R) -> String {
        let unshown: Vec<&String> = self
            .variants
            .iter()
            .filter(|v| !self.shown.contains(*v))
            .collect();

        let pick = match unshown.choose(rng) {
            Some(v) => (*v).clone(),
            None => {
                warn!("all variants of {:?} shown, allowing repeats", self.title);
                self.variants.choose(rng).cloned().unwrap_or_default()
            }
        };

        trace!("variant {pick:?} picked for {:?}", self.title);
        if !pick.is_empty() {
            self.shown.insert(pick.clone());
        }
        pick
    }
}

/// The ordered question list, fixed once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub entries: Vec<QuizEntry>,
    pub max_guesses: usize,
}

impl Quiz {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Attempt loop vocabulary
// ---------------------------------------------------------------------------

/// A classified line of user input.
///
/// Reserved words are recognised before any title comparison, so a movie
/// literally called "Next" can never be answered by typing `next`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show a different anagram.
    Next,
    /// Give up on this question.
    Pass,
    /// Anything else, trimmed and lower-cased.
    Guess(String),
}

impl Command {
    pub fn parse(input: &str) -> Self {
        let normalized = input.trim().to_lowercase();
        match normalized.as_str() {
            "next" => Command::Next,
            "pass" => Command::Pass,
            _ => Command::Guess(normalized),
        }
    }
}

/// How a question ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Correct,
    Passed,
    /// Every attempt used without a correct guess.
    Exhausted,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Correct   => write!(f, "correct"),
            Outcome::Passed    => write!(f, "passed"),
            Outcome::Exhausted => write!(f, "exhausted"),
        }
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub total: usize,
    pub correct: usize,
    pub incorrect: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    AllCorrect,
    AllWrong,
    Mixed,
}

impl Score {
    pub fn from_entries(entries: &[QuizEntry]) -> Self {
        let total = entries.len();
        let correct = entries.iter().filter(|e| e.is_solved()).count();
        Score { total, correct, incorrect: total - correct }
    }

    pub fn verdict(&self) -> Verdict {
        if self.correct == self.total {
            Verdict::AllCorrect
        } else if self.correct == 0 {
            Verdict::AllWrong
        } else {
            Verdict::Mixed
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::AllCorrect => write!(f, "all correct"),
            Verdict::AllWrong   => write!(f, "all wrong"),
            Verdict::Mixed      => write!(f, "mixed"),
        }
    }
}

// ---------------------------------------------------------------------------
// Session results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryResult {
    pub title: String,
    pub outcome: Outcome,
    /// Distinct variants displayed while the question was open.
    pub variants_shown: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReport {
    /// One result per entry, in play order.
    pub results: Vec<EntryResult>,
    pub score: Score,
}

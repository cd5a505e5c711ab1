//! # movie_quiz
//!
//! A console movie-title quiz built around scrambled-letter anagrams.
//!
//! Each title from a word list gets a pool of pre-generated anagrams (every
//! word scrambled on its own, so word boundaries stay visible). The player
//! sees one anagram per question and has a fixed number of attempts to type
//! the original title, ask for a different anagram with `next`, or give up
//! with `pass`. A summary of right and wrong answers closes the session.
//!
//! ## How it works
//!
//! 1. Load titles with [`load_titles`] (or supply them directly).
//! 2. Call [`build_quiz`] with a [`QuizConfig`]. It scrambles every title
//!    `variants_per_title` times and shuffles the question order once.
//! 3. Hand the [`Quiz`] to a [`QuizSession`] together with a [`Console`].
//!    [`QuizSession::run`] drives every question and returns a
//!    [`SessionReport`].
//!
//! ## Key features
//!
//! - **Deterministic**: `rng_seed: Some(u64)` reproduces question order,
//!   anagram pools and which anagram is shown.
//! - **No repeats**: an entry never shows the same anagram twice until its
//!   pool is spent; after that repeats are allowed instead of failing.
//! - **Cosmetic colour**: [`Palette::plain`] renders the same text with no
//!   ANSI codes, so any reader/writer pair can act as the terminal.
//!
//! ## Quick start
//!
//! ```rust
//! use std::io::Cursor;
//! use movie_quiz::{build_quiz, seeded_rng, Palette, QuizConfig, QuizSession, Terminal};
//!
//! let config = QuizConfig::with_seed(42);
//! let mut rng = seeded_rng(config.rng_seed);
//! let quiz = build_quiz(&mut rng, ["Inception"], &config)?;
//!
//! // Right on the first try, then enter to move on.
//! let input = Cursor::new(b"inception\n\n".to_vec());
//! let console = Terminal::new(Palette::plain(), input, Vec::new());
//!
//! let mut session = QuizSession::new(quiz, console, rng);
//! let report = session.run()?;
//! assert_eq!(report.score.correct, 1);
//! # Ok::<(), movie_quiz::QuizError>(())
//! ```

pub mod quiz_engine;

// Convenience re-exports so callers can use `movie_quiz::build_quiz`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    build_quiz, default_word_list_path, load_titles, parse_titles, report, scramble_phrase,
    scramble_word, seeded_rng, Command, Console, EntryResult, LoadError, Outcome, Palette, Quiz,
    QuizConfig, QuizEntry, QuizError, QuizSession, Score, SessionReport, Terminal, Tone, Verdict,
};

#[cfg(test)]
mod tests;

//! Core quiz engine: anagram generation, quiz building, and the session loop.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: entries, quiz, config, commands, outcomes, score |
//! | `anagram`   | Per-word Fisher-Yates scrambling with a bounded retry |
//! | `word_list` | Loading titles from a plain-text file, one per line |
//! | `builder`   | Pre-generates variant pools and shuffles entry order once |
//! | `console`   | Presentation boundary: `Console` trait, `Palette`, `Terminal` |
//! | `session`   | Attempt state machine, reveal, and end-of-quiz summary |
//! | `report`    | JSON export of a finished session |
//! | `error`     | `LoadError` and `QuizError` |

pub mod anagram;
pub mod builder;
pub mod console;
pub mod error;
pub mod models;
pub mod report;
pub mod session;
pub mod word_list;

// Re-export the public API surface so callers can use
// `quiz_engine::build_quiz` without reaching into sub-modules.
pub use anagram::{scramble_phrase, scramble_word};
pub use builder::{build_quiz, seeded_rng};
pub use console::{Console, Palette, Terminal, Tone};
pub use error::{LoadError, QuizError, Result};
pub use models::{
    Command, EntryResult, Outcome, Quiz, QuizConfig, QuizEntry, Score, SessionReport, Verdict,
};
pub use session::QuizSession;
pub use word_list::{default_word_list_path, load_titles, parse_titles, resolve_word_list};

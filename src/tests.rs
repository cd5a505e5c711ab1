//! End-to-end tests for the `movie_quiz` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! Every test drives a real [`QuizSession`] through a [`Terminal`] fed from an
//! in-memory script, with the plain palette so the transcript can be matched
//! as text.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Scoring | All right, all wrong, mixed summaries and counts |
//! | Attempt loop | Correct after misses, pass, exhaustion, `next` using an attempt |
//! | Input handling | Case and whitespace tolerance; reserved words never match |
//! | Interrupts | End of input mid-question surfaces as `Interrupted` |
//! | Determinism | Same seed and script give the same transcript |

use std::io::Cursor;

use crate::quiz_engine::{
    build_quiz, seeded_rng, Outcome, Palette, Quiz, QuizConfig, QuizError, QuizSession, Terminal,
    Verdict,
};

// ── helpers ──────────────────────────────────────────────────────────────────

type Scripted = Terminal<Cursor<Vec<u8>>, Vec<u8>>;

fn quiz(titles: &[&str], max_guesses: usize, seed: u64) -> (Quiz, rand::rngs::StdRng) {
    let config = QuizConfig { max_guesses, ..QuizConfig::with_seed(seed) };
    let mut rng = seeded_rng(config.rng_seed);
    let quiz = build_quiz(&mut rng, titles, &config).expect("build quiz");
    (quiz, rng)
}

fn session(titles: &[&str], max_guesses: usize, script: &str) -> QuizSession<Scripted> {
    let (quiz, rng) = quiz(titles, max_guesses, 42);
    let console = Terminal::new(Palette::plain(), Cursor::new(script.as_bytes().to_vec()), Vec::new());
    QuizSession::new(quiz, console, rng)
}

fn transcript(s: &QuizSession<Scripted>) -> String {
    String::from_utf8_lossy(s.console().output()).into_owned()
}

/// Titles in the order the seeded quiz will ask them.
fn play_order(titles: &[&str], seed: u64) -> Vec<String> {
    let (quiz, _) = quiz(titles, 3, seed);
    quiz.entries.iter().map(|e| e.title().to_string()).collect()
}

// ── scoring ──────────────────────────────────────────────────────────────────

#[test]
fn all_correct_first_try_scores_everything() {
    let titles = ["Inception", "The Matrix", "Jaws"];
    let script: String = play_order(&titles, 42)
        .iter()
        .map(|t| format!("{t}\n\n"))
        .collect();

    let mut s = session(&titles, 3, &script);
    let report = s.run().expect("session runs to completion");

    assert_eq!(report.score.correct, 3);
    assert_eq!(report.score.incorrect, 0);
    assert_eq!(report.score.verdict(), Verdict::AllCorrect);
    assert!(report.results.iter().all(|r| r.outcome == Outcome::Correct));
    assert!(report.results.iter().all(|r| r.variants_shown == 1));

    let out = transcript(&s);
    assert!(out.contains("You got them all right!"));
    assert!(!out.contains("The answer was"));
    assert_eq!(out.matches("Correct! Nicely done").count(), 3);
}

#[test]
fn all_passed_is_all_wrong() {
    let mut s = session(&["Heat", "Alien"], 3, "pass\n\npass\n\n");
    let report = s.run().unwrap();
    assert_eq!(report.score.correct, 0);
    assert_eq!(report.score.verdict(), Verdict::AllWrong);
    assert!(transcript(&s).contains("You got them all wrong!"));
}

#[test]
fn mixed_results_report_counts() {
    let titles = ["Heat", "Alien"];
    let order = play_order(&titles, 42);
    let script = format!("{}\n\npass\n\n", order[0]);

    let mut s = session(&titles, 3, &script);
    let report = s.run().unwrap();

    assert_eq!((report.score.correct, report.score.incorrect), (1, 1));
    assert_eq!(report.results[0].outcome, Outcome::Correct);
    assert_eq!(report.results[1].outcome, Outcome::Passed);
    let out = transcript(&s);
    assert!(out.contains("Not bad... but some room for improvement"));
    assert!(out.contains("You got 1 right and 1 wrong"));
}

#[test]
fn progress_header_counts_questions() {
    let mut s = session(&["Heat", "Alien", "Up"], 1, "x\n\nx\n\nx\n\n");
    s.run().unwrap();
    let out = transcript(&s);
    for n in 1..=3 {
        assert!(out.contains(&format!("[{n}/3] Which movie is this?")));
    }
    assert!(out.contains("Type next to shuffle or pass to skip"));
}

// ── attempt loop ─────────────────────────────────────────────────────────────

#[test]
fn correct_after_two_misses() {
    let mut s = session(&["Inception"], 3, "memento\ntenet\ninception\n");
    assert_eq!(s.play_entry(0).unwrap(), Outcome::Correct);
    assert!(s.quiz().entries[0].is_solved());

    let out = transcript(&s);
    assert_eq!(out.matches("Incorrect, try again").count(), 2);
    assert!(out.contains("Guess 3 of 3: "));
    assert!(!out.contains("The answer was"));
    assert!(!out.contains("the answer was"));
}

#[test]
fn pass_reveals_title_with_pass_wording() {
    let mut s = session(&["Inception"], 3, "pass\n");
    assert_eq!(s.play_entry(0).unwrap(), Outcome::Passed);
    assert!(!s.quiz().entries[0].is_solved());

    let out = transcript(&s);
    assert!(out.contains("\nThe answer was:\nINCEPTION"));
    assert!(!out.contains("No more attempts left"));
    assert!(!out.contains("Guess 2 of 3"));
}

#[test]
fn wrong_guesses_exhaust_attempts() {
    let mut s = session(&["Inception"], 3, "a\nb\nc\n");
    assert_eq!(s.play_entry(0).unwrap(), Outcome::Exhausted);
    assert!(!s.quiz().entries[0].is_solved());

    let out = transcript(&s);
    assert!(out.contains("No more attempts left, the answer was:\nINCEPTION"));
    // A wrong guess keeps the same anagram on screen.
    assert_eq!(s.quiz().entries[0].shown().len(), 1);
}

#[test]
fn next_uses_an_attempt_and_shows_a_new_anagram() {
    let mut s = session(&["The Shawshank Redemption"], 3, "next\nnext\nnext\n");
    assert_eq!(s.play_entry(0).unwrap(), Outcome::Exhausted);

    let entry = &s.quiz().entries[0];
    assert_eq!(entry.shown().len(), 3);
    assert!(entry.shown().iter().all(|v| entry.variants().contains(v)));
    assert!(transcript(&s).contains("No more attempts left"));
}

#[test]
fn next_then_correct_within_budget() {
    let mut s = session(&["Inception"], 3, "next\nnext\nInception\n");
    assert_eq!(s.play_entry(0).unwrap(), Outcome::Correct);
}

#[test]
fn more_nexts_than_pool_size_keep_working() {
    let (quiz, rng) = {
        let config = QuizConfig { max_guesses: 6, variants_per_title: 2, rng_seed: Some(9) };
        let mut rng = seeded_rng(config.rng_seed);
        (build_quiz(&mut rng, ["Inception"], &config).unwrap(), rng)
    };
    let script = "next\n".repeat(6);
    let console = Terminal::new(Palette::plain(), Cursor::new(script.into_bytes()), Vec::new());
    let mut s = QuizSession::new(quiz, console, rng);

    assert_eq!(s.play_entry(0).unwrap(), Outcome::Exhausted);
    let entry = &s.quiz().entries[0];
    assert!(entry.shown().len() <= 2);
    assert!(entry.shown().iter().all(|v| entry.variants().contains(v)));
}

// ── input handling ───────────────────────────────────────────────────────────

#[test]
fn guesses_ignore_case_and_whitespace() {
    for guess in ["inception", " Inception ", "INCEPTION", "\tiNcEpTiOn  "] {
        let mut s = session(&["Inception"], 3, &format!("{guess}\n"));
        assert_eq!(s.play_entry(0).unwrap(), Outcome::Correct, "guess {guess:?}");
    }
}

#[test]
fn near_misses_are_incorrect() {
    let mut s = session(&["Inception"], 3, "Inceptio\n\nInception 2\n");
    assert_eq!(s.play_entry(0).unwrap(), Outcome::Exhausted);
}

#[test]
fn title_named_next_cannot_be_answered() {
    let mut s = session(&["Next"], 3, "next\nNEXT\n next \n");
    assert_eq!(s.play_entry(0).unwrap(), Outcome::Exhausted);
    assert!(!s.quiz().entries[0].is_solved());
    assert!(!transcript(&s).contains("Correct!"));
}

#[test]
fn title_named_pass_is_passed_not_solved() {
    let mut s = session(&["Pass"], 3, "pass\n");
    assert_eq!(s.play_entry(0).unwrap(), Outcome::Passed);
    assert!(!s.quiz().entries[0].is_solved());
}

#[test]
fn out_of_range_entry_is_an_error() {
    let mut s = session(&["Inception"], 3, "inception\n");
    assert!(matches!(s.play_entry(1), Err(QuizError::NoSuchEntry { index: 1, total: 1 })));
    assert!(transcript(&s).is_empty());
    // The real entry is still playable afterwards.
    assert_eq!(s.play_entry(0).unwrap(), Outcome::Correct);
}

// ── interrupts ───────────────────────────────────────────────────────────────

#[test]
fn end_of_input_interrupts_the_session() {
    let mut s = session(&["Inception", "Jaws"], 3, "wrong\n");
    assert!(matches!(s.run(), Err(QuizError::Interrupted)));
}

#[test]
fn missing_acknowledgement_interrupts() {
    let mut s = session(&["Inception"], 3, "pass\n");
    assert!(matches!(s.run(), Err(QuizError::Interrupted)));
    assert!(transcript(&s).contains("Press enter to continue..."));
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_and_script_give_same_transcript() {
    let titles = ["Heat", "Alien", "Up", "Jaws"];
    let script = "next\nx\ny\n\npass\n\nnext\nnext\nnext\n\nq\nw\ne\n\n";
    let play = || {
        let mut s = session(&titles, 3, script);
        s.run().unwrap();
        transcript(&s)
    };
    assert_eq!(play(), play());
}

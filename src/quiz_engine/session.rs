//! Interactive quiz loop: one question at a time, bounded attempts each.
//!
//! ## Attempt state machine
//!
//! Every question starts in `AwaitingGuess`. Each of the `max_guesses`
//! attempts reads one line and classifies it as a [`Command`]:
//!
//! | Input            | Next state      | Effect                              |
//! |------------------|-----------------|-------------------------------------|
//! | `next`           | `AwaitingGuess` | a fresh variant is shown            |
//! | `pass`           | `Passed`        | question ends                       |
//! | the title        | `Correct`       | entry marked solved, question ends  |
//! | anything else    | `Incorrect`     | same variant stays on screen        |
//!
//! `next` uses up an attempt just like a wrong guess. Running out of
//! attempts without `Correct` or `Passed` ends in [`Outcome::Exhausted`].

use log::debug;
use rand::rngs::StdRng;

use crate::quiz_engine::{
    console::{Console, Tone},
    error::{QuizError, Result},
    models::{Command, EntryResult, Outcome, Quiz, Score, SessionReport, Verdict},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AttemptState {
    AwaitingGuess,
    Incorrect,
    Correct,
    Passed,
}

pub struct QuizSession<C> {
    quiz: Quiz,
    console: C,
    rng: StdRng,
}

impl<C: Console> QuizSession<C> {
    pub fn new(quiz: Quiz, console: C, rng: StdRng) -> Self {
        QuizSession { quiz, console, rng }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Play every entry in order, then print the summary.
    ///
    /// Stops early with [`QuizError::Interrupted`]
    /// if the player aborts at any prompt.
    pub fn run(&mut self) -> Result<SessionReport> {
        let mut results = Vec::with_capacity(self.quiz.len());

        for index in 0..self.quiz.len() {
            self.console.clear()?;
            let outcome = self.play_entry(index)?;

            let entry = &self.quiz.entries[index];
            results.push(EntryResult {
                title: entry.title().to_string(),
                outcome,
                variants_shown: entry.shown().len(),
            });

            self.console.prompt("\nPress enter to continue...")?;
        }

        self.console.clear()?;
        let score = Score::from_entries(&self.quiz.entries);
        self.print_summary(&score)?;

        Ok(SessionReport { results, score })
    }

    /// Run the attempt loop for the entry at `index` and reveal the title
    /// unless it was guessed. An `index` past the last entry is
    /// [`QuizError::NoSuchEntry`].
    pub fn play_entry(&mut self, index: usize) -> Result<Outcome> {
        let total = self.quiz.len();
        if index >= total {
            return Err(QuizError::NoSuchEntry { index, total });
        }
        let palette = *self.console.palette();
        let max_guesses = self.quiz.max_guesses;

        self.console.say(&format!("[{}/{total}] Which movie is this?", index + 1))?;
        self.console.say(&format!(
            "Type {} to shuffle or {} to skip",
            palette.paint(Tone::Keyword, "next"),
            palette.paint(Tone::Keyword, "pass"),
        ))?;

        let mut state = AttemptState::AwaitingGuess;
        for attempt in 0..max_guesses {
            if state == AttemptState::AwaitingGuess {
                let variant = self.quiz.entries[index].random_variant(&mut self.rng);
                self.console.say(&format!("\n{}\n", palette.paint_all(&[Tone::Header, Tone::Bold], &variant)))?;
            }

            let answer = self
                .console
                .prompt(&format!("Guess {} of {max_guesses}: ", attempt + 1))?;

            let entry = &mut self.quiz.entries[index];
            state = match Command::parse(&answer) {
                Command::Next => AttemptState::AwaitingGuess,
                Command::Pass => AttemptState::Passed,
                Command::Guess(guess) if entry.matches_title(&guess) => {
                    entry.mark_solved();
                    self.console.say(&palette.paint(Tone::Correct, "🎉 Correct! Nicely done 🎉"))?;
                    AttemptState::Correct
                }
                Command::Guess(_) => {
                    self.console.say(&palette.paint(Tone::Incorrect, "👎 Incorrect, try again 👎"))?;
                    AttemptState::Incorrect
                }
            };

            if matches!(state, AttemptState::Correct | AttemptState::Passed) {
                break;
            }
        }

        let outcome = match state {
            AttemptState::Correct => Outcome::Correct,
            AttemptState::Passed => Outcome::Passed,
            AttemptState::AwaitingGuess | AttemptState::Incorrect => Outcome::Exhausted,
        };

        let title = self.quiz.entries[index].title().to_uppercase();
        let intro = match outcome {
            Outcome::Correct => None,
            Outcome::Passed => Some("The answer was"),
            Outcome::Exhausted => Some("No more attempts left, the answer was"),
        };
        if let Some(intro) = intro {
            self.console.say(&format!(
                "\n{intro}:\n{}",
                palette.paint_all(&[Tone::Warning, Tone::Bold], &title)
            ))?;
        }

        debug!("entry {} ({:?}) finished as {outcome}", index + 1, self.quiz.entries[index].title());
        Ok(outcome)
    }

    fn print_summary(&mut self, score: &Score) -> Result<()> {
        let palette = *self.console.palette();
        self.console.say("All done! Here are the results:\n")?;

        match score.verdict() {
            Verdict::AllCorrect => {
                self.console.say(&palette.paint(Tone::Correct, "🎉 You got them all right! 🎉"))?;
            }
            Verdict::AllWrong => {
                self.console.say(&palette.paint(Tone::Incorrect, "👎 You got them all wrong! 👎"))?;
            }
            Verdict::Mixed => {
                self.console.say("Not bad... but some room for improvement")?;
                self.console.say(&format!(
                    "You got {} right and {} wrong",
                    palette.paint(Tone::Correct, &score.correct.to_string()),
                    palette.paint(Tone::Incorrect, &score.incorrect.to_string()),
                ))?;
            }
        }

        debug!("session finished: {}/{} correct ({})", score.correct, score.total, score.verdict());
        self.console.say("\n")
    }
}

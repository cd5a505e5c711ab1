use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::quiz_engine::{
    anagram::{scramble_phrase, shuffle},
    error::LoadError,
    models::{Quiz, QuizConfig, QuizEntry},
};

/// Seeded generator when a seed is given, entropy otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    }
}

/// Build one entry with `variants` independent, upper-cased scrambles of the
/// whole title. Duplicates within the pool are kept.
pub fn build_entry<R: Rng>(rng: &mut R, title: &str, variants: usize) -> QuizEntry {
    let pool = (0..variants)
        .map(|_| scramble_phrase(rng, title).to_uppercase())
        .collect();
    QuizEntry::new(title, pool)
}

/// Turn a list of titles into a quiz with its entry order shuffled once.
///
/// `max_guesses` and `variants_per_title` are clamped to at least one.
pub fn build_quiz<R, I, S>(rng: &mut R, titles: I, config: &QuizConfig) -> Result<Quiz, LoadError>
where
    R: Rng,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let variants = config.variants_per_title.max(1);
    let mut entries: Vec<QuizEntry> = titles
        .into_iter()
        .map(|title| build_entry(rng, title.as_ref(), variants))
        .collect();

    if entries.is_empty() {
        return Err(LoadError::NoTitles);
    }

    shuffle(rng, &mut entries);
    debug!("built quiz with {} entries, {variants} variants each", entries.len());

    Ok(Quiz {
        entries,
        max_guesses: config.max_guesses.max(1),
    })
}

use log::trace;
use rand::Rng;

/// Shuffles tried before a word is returned unscrambled.
pub const MAX_SCRAMBLE_ATTEMPTS: usize = 10;

/// In-place Fisher-Yates shuffle.
pub(crate) fn shuffle<T, R: Rng>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Randomly permute the characters of `word`.
///
/// Up to [`MAX_SCRAMBLE_ATTEMPTS`] shuffles are tried to get something that
/// differs from the input. Words where no permutation can differ (empty,
/// single character, `"aaa"`) come back unchanged, as does the rare word
/// whose every attempt lands on the original.
pub fn scramble_word<R: Rng>(rng: &mut R, word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    if chars.len() < 2 {
        return word.to_string();
    }

    for _ in 0..MAX_SCRAMBLE_ATTEMPTS {
        shuffle(rng, &mut chars);
        let candidate: String = chars.iter().collect();
        if candidate != word {
            return candidate;
        }
    }

    trace!("no distinct permutation of {word:?} found");
    word.to_string()
}

/// Scramble each whitespace-delimited word on its own and rejoin with single
/// spaces. Word boundaries survive, which is the hint the player gets.
pub fn scramble_phrase<R: Rng>(rng: &mut R, phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(|word| scramble_word(rng, word))
        .collect::<Vec<_>>()
        .join(" ")
}

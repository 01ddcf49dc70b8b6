//! Guess validation and tracking.
//!
//! [`GuessSet`] is the ordered history of accepted letters, [`is_valid`] decides
//! whether a raw candidate may join it, and [`GuessTracker`] ties the two
//! together and projects the secret word through the current guesses.

use crate::debug_log;
use crate::wordbank::SecretWord;
use std::collections::HashSet;

/// Placeholder shown for letters that have not been guessed yet.
pub const HIDDEN_LETTER: char = '_';

/// Separator used when echoing the guess history.
pub const TRAIL_SEPARATOR: &str = "->";

/// Letters guessed so far, unique and lowercase, in the order they were made.
#[derive(Debug, Clone, Default)]
pub struct GuessSet {
    order: Vec<char>,
    seen: HashSet<char>,
}

impl GuessSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.seen.contains(&letter)
    }

    /// Returns `false` if the letter was already present.
    fn insert(&mut self, letter: char) -> bool {
        if self.seen.insert(letter) {
            self.order.push(letter);
            true
        } else {
            false
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.order.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<'a> IntoIterator for &'a GuessSet {
    type Item = char;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, char>>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter().copied()
    }
}

/// The lowercase letter a candidate stands for, if it is a single alphabetic
/// character whose lowercase form is also a single character.
fn single_letter(candidate: &str) -> Option<char> {
    let mut chars = candidate.chars();
    let c = chars.next()?;
    if chars.next().is_some() || !c.is_alphabetic() {
        return None;
    }
    let mut lower = c.to_lowercase();
    let letter = lower.next()?;
    if lower.next().is_some() {
        return None;
    }
    Some(letter)
}

/// Whether `candidate` is a single letter that has not been guessed yet.
/// Case-insensitive: `prior` is expected to hold lowercase letters.
#[must_use]
pub fn is_valid(candidate: &str, prior: &GuessSet) -> bool {
    single_letter(candidate).is_some_and(|letter| !prior.contains(letter))
}

/// The secret with every unguessed character replaced by `_`, each position
/// followed by a space.
#[must_use]
pub fn masked_word(secret: &SecretWord, guesses: &GuessSet) -> String {
    let mut masked = String::with_capacity(secret.as_str().len() * 2);
    for c in secret.chars() {
        masked.push(if guesses.contains(c) { c } else { HIDDEN_LETTER });
        masked.push(' ');
    }
    masked
}

/// True once every character of the secret has been guessed.
#[must_use]
pub fn has_won(secret: &SecretWord, guesses: &GuessSet) -> bool {
    secret.chars().all(|c| guesses.contains(c))
}

/// Accumulates accepted guesses.
#[derive(Debug, Clone, Default)]
pub struct GuessTracker {
    guesses: GuessSet,
}

impl GuessTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `candidate` and, if it passes, remember its lowercase form.
    /// Rejected candidates leave the tracker untouched.
    pub fn record_guess(&mut self, candidate: &str) -> bool {
        if !is_valid(candidate, &self.guesses) {
            debug_log!("record_guess() - rejected {:?}", candidate);
            return false;
        }
        match single_letter(candidate) {
            Some(letter) => self.guesses.insert(letter),
            None => false,
        }
    }

    #[must_use]
    pub fn guesses(&self) -> &GuessSet {
        &self.guesses
    }

    #[must_use]
    pub fn masked_word(&self, secret: &SecretWord) -> String {
        masked_word(secret, &self.guesses)
    }

    #[must_use]
    pub fn has_won(&self, secret: &SecretWord) -> bool {
        has_won(secret, &self.guesses)
    }

    /// Prior guesses joined with `->`, oldest first.
    #[must_use]
    pub fn trail(&self) -> String {
        self.guesses
            .iter()
            .map(String::from)
            .collect::<Vec<_>>()
            .join(TRAIL_SEPARATOR)
    }
}

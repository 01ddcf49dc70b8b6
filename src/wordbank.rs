use crate::error::WordSourceError;
use crate::info_log;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Separator between words in a word file. Only the plain ASCII space counts;
/// newlines and tabs stay attached to the surrounding token.
pub const WORD_SEPARATOR: char = ' ';

/// The word the player has to uncover. Always lowercase and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord(String);

impl SecretWord {
    pub fn new(word: &str) -> Result<Self, WordSourceError> {
        if word.is_empty() {
            return Err(WordSourceError::EmptySecretWord);
        }
        Ok(Self(word.to_lowercase()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(letter)
    }

    /// Number of characters (not bytes) in the word.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn load_words_from_str(data: &str) -> Vec<String> {
    data.split(WORD_SEPARATOR).map(str::to_string).collect()
}

pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordSourceError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => WordSourceError::ResourceNotFound {
            path: path.to_path_buf(),
        },
        _ => WordSourceError::Io(e),
    })?;
    let words = load_words_from_str(&data);
    info_log!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Pick a word by its 1-based index, wrapping around in both directions.
///
/// The index is shifted down by one and reduced with a non-negative
/// remainder, so `1` is the first word, `0` the last, and `len + 1` the first
/// again.
pub fn select_word(words: &[String], index: i64) -> Result<&str, WordSourceError> {
    if words.is_empty() {
        return Err(WordSourceError::EmptyWordList);
    }
    let len = words.len() as i128;
    let position = (i128::from(index) - 1).rem_euclid(len) as usize;
    Ok(&words[position])
}

/// Load the word file and turn the word at `index` into the game's secret.
pub fn choose_word<P: AsRef<Path>>(path: P, index: i64) -> Result<SecretWord, WordSourceError> {
    let words = load_words_from_file(path)?;
    let word = select_word(&words, index)?;
    SecretWord::new(word)
}

//! Hangman pictures, one per number of wrong guesses.

use crate::game_state::MAX_TRIES;

const HANGMAN_FRAMES: [&str; MAX_TRIES + 1] = [
    "    x-------x",
    "    x-------x
    |
    |
    |
    |
    |",
    "    x-------x
    |       |
    |       0
    |
    |
    |",
    "    x-------x
    |       |
    |       0
    |       |
    |
    |",
    "    x-------x
    |       |
    |       0
    |      /|\\
    |
    |",
    "    x-------x
    |       |
    |       0
    |      /|\\
    |      /
    |",
    "    x-------x
    |       |
    |       0
    |      /|\\
    |      / \\
    |",
];

/// The picture for `tries_used` wrong guesses. Values past [`MAX_TRIES`]
/// show the final picture.
#[must_use]
pub fn render_frame(tries_used: usize) -> &'static str {
    HANGMAN_FRAMES[tries_used.min(MAX_TRIES)]
}

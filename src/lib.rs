// Library interface for hangman
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod frames;
pub mod game_state;
pub mod guess;
pub mod logging;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use error::{SetupError, WordSourceError};
pub use frames::render_frame;
pub use game_state::{Game, GameOutcome, MAX_TRIES, TurnResult, game_loop};
pub use guess::{GuessSet, GuessTracker, has_won, is_valid, masked_word};
pub use wordbank::{SecretWord, choose_word, load_words_from_file, load_words_from_str, select_word};

use crate::error::{SetupError, WordSourceError};
use crate::game_state::{BoardView, GameInterface, GameOutcome, UserAction};
use crate::wordbank::{SecretWord, choose_word};
use crate::{debug_log, info_log};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Hangman: guess the hidden word one letter at a time
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a space-separated word file (prompted for if missing)
    #[arg(short = 'w', long = "words")]
    pub words_path: Option<PathBuf>,

    /// 1-based index of the secret word; wraps around, negatives allowed
    #[arg(short = 'n', long = "index", allow_hyphen_values = true)]
    pub word_index: Option<String>,

    /// Play in the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

pub const BANNER: &str = r"     _    _                                         
    | |  | |                                        
    | |__| | __ _ _ __   __ _ _ __ ___   __ _ _ __  
    |  __  |/ _` | '_ \ / _` | '_ ` _ \ / _` | '_ \ 
    | |  | | (_| | | | | (_| | | | | | | (_| | | | |
    |_|  |_|\__,_|_| |_|\__, |_| |_| |_|\__,_|_| |_|
                        __/ |                      
                        |___/
        ";

pub const INDEX_PROMPT: &str = "Enter number of words to guess: ";
pub const INDEX_RETRY_PROMPT: &str = "Input not valid, Enter number of words to guess: ";

pub fn display_start_screen() {
    println!("Welcome to the game Hangman.");
    println!("{BANNER}");
}

/// Accepts an optional leading `-` followed by one or more ASCII digits.
/// Literals that do not fit in an `i64` are rejected.
#[must_use]
pub fn parse_index(input: &str) -> Option<i64> {
    let digits = input.strip_prefix('-').unwrap_or(input);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    input.parse().ok()
}

fn prompt(message: &str) -> io::Result<()> {
    print!("{message}");
    io::stdout().flush()
}

/// One line without its line ending, or `None` at end of input.
fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Ask for a word file until the answer names an existing path.
///
/// `initial` (from the command line) is tried first. Returns `None` if input
/// runs out.
pub fn prompt_word_file<R: BufRead>(
    reader: &mut R,
    initial: Option<PathBuf>,
) -> io::Result<Option<PathBuf>> {
    let mut candidate = match initial {
        Some(path) => Some(path),
        None => {
            prompt("Enter path to word file: ")?;
            read_line(reader)?.map(PathBuf::from)
        }
    };

    loop {
        let Some(path) = candidate else {
            return Ok(None);
        };
        if path.exists() {
            info_log!("Using word file {}", path.display());
            return Ok(Some(path));
        }
        debug_log!("prompt_word_file() - {} does not exist", path.display());
        prompt("File not found, enter another path: ")?;
        candidate = read_line(reader)?.map(PathBuf::from);
    }
}

/// Ask for a word index until the answer is an integer literal.
///
/// `initial` (from the command line) is tried first. Returns `None` if input
/// runs out.
pub fn prompt_word_index<R: BufRead>(
    reader: &mut R,
    initial: Option<String>,
) -> io::Result<Option<i64>> {
    let mut candidate = match initial {
        Some(text) => Some(text),
        None => {
            prompt(INDEX_PROMPT)?;
            read_line(reader)?
        }
    };

    loop {
        let Some(text) = candidate else {
            return Ok(None);
        };
        if let Some(index) = parse_index(&text) {
            return Ok(Some(index));
        }
        debug_log!("prompt_word_index() - rejected {:?}", text);
        prompt(INDEX_RETRY_PROMPT)?;
        candidate = read_line(reader)?;
    }
}

/// Collect the word file and index, then pick the secret word.
///
/// A file that vanished between the prompt and the read sends the player
/// back to the path prompt; an index landing on an empty token sends them
/// back to the index prompt. Returns `None` if input runs out.
pub fn setup_secret_word<R: BufRead>(
    reader: &mut R,
    cli: &Cli,
) -> Result<Option<SecretWord>, SetupError> {
    let mut path_hint = cli.words_path.clone();
    let mut index_hint = cli.word_index.clone();

    loop {
        let Some(path) = prompt_word_file(reader, path_hint.take())? else {
            return Ok(None);
        };

        loop {
            let Some(index) = prompt_word_index(reader, index_hint.take())? else {
                return Ok(None);
            };

            match choose_word(&path, index) {
                Ok(secret) => return Ok(Some(secret)),
                Err(WordSourceError::EmptySecretWord) => {
                    println!("No word at index {index}, choose another.");
                }
                Err(WordSourceError::ResourceNotFound { .. }) => {
                    println!("File not found.");
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Line-based front end: one prompt per guess on a `BufRead` source.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Hand the reader back, e.g. to reuse stdin after the game.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

pub fn display_board(board: &BoardView) {
    println!("{}", board.frame);
    println!("{}", board.masked_word);
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_board(&mut self, board: &BoardView) {
        display_board(board);
    }

    fn read_guess(&mut self) -> Option<UserAction> {
        if let Err(e) = prompt("Guess a letter: ") {
            debug_log!("read_guess() - prompt failed: {}", e);
        }
        match read_line(&mut self.reader) {
            Ok(Some(line)) => Some(UserAction::Guess(line)),
            Ok(None) => Some(UserAction::Exit),
            Err(e) => {
                log::warn!("Failed to read guess: {e}");
                Some(UserAction::Exit)
            }
        }
    }

    fn display_rejected(&mut self, trail: &str) {
        println!("X\n{trail}");
    }

    fn display_miss(&mut self, board: &BoardView) {
        println!(":(");
        display_board(board);
    }

    fn display_hit(&mut self, board: &BoardView) {
        println!("{}", board.masked_word);
    }

    fn display_result(&mut self, outcome: GameOutcome, _secret: &SecretWord) {
        println!("{outcome}");
    }

    fn display_exit_message(&mut self) {
        println!();
    }
}

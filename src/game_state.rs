use crate::frames::render_frame;
use crate::guess::{GuessSet, GuessTracker};
use crate::wordbank::SecretWord;
use crate::{debug_log, info_log};
use std::fmt;

/// Number of wrong guesses that ends the game.
pub const MAX_TRIES: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Won,
    Lost,
}

impl GameOutcome {
    #[must_use]
    pub fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => f.write_str("IN PROGRESS"),
            Self::Won => f.write_str("WIN"),
            Self::Lost => f.write_str("LOSE"),
        }
    }
}

/// What a single submitted guess did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    /// Malformed or repeated guess; nothing changed
    Rejected,
    /// Letter is in the secret word
    Hit(char),
    /// Letter is not in the secret word; one try consumed
    Miss(char),
    /// The game had already ended; nothing changed
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    Exit,
}

/// A snapshot of everything a front end needs to draw one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub frame: &'static str,
    pub masked_word: String,
    pub trail: String,
    pub tries_used: usize,
    pub tries_remaining: usize,
}

/// Front ends (line-based CLI, TUI) implement this to drive [`game_loop`].
pub trait GameInterface {
    fn display_board(&mut self, board: &BoardView);
    /// `None` means the input was unusable and the caller should ask again.
    fn read_guess(&mut self) -> Option<UserAction>;
    fn display_rejected(&mut self, trail: &str);
    fn display_miss(&mut self, board: &BoardView);
    fn display_hit(&mut self, board: &BoardView);
    fn display_result(&mut self, outcome: GameOutcome, secret: &SecretWord);
    fn display_exit_message(&mut self);
}

/// One round of hangman.
#[derive(Debug, Clone)]
pub struct Game {
    secret: SecretWord,
    tracker: GuessTracker,
    tries_used: usize,
}

impl Game {
    #[must_use]
    pub fn new(secret: SecretWord) -> Self {
        info_log!("New game with a {}-letter word", secret.len());
        Self {
            secret,
            tracker: GuessTracker::new(),
            tries_used: 0,
        }
    }

    #[must_use]
    pub fn secret(&self) -> &SecretWord {
        &self.secret
    }

    #[must_use]
    pub fn guesses(&self) -> &GuessSet {
        self.tracker.guesses()
    }

    #[must_use]
    pub fn tries_used(&self) -> usize {
        self.tries_used
    }

    #[must_use]
    pub fn tries_remaining(&self) -> usize {
        MAX_TRIES - self.tries_used
    }

    #[must_use]
    pub fn masked_word(&self) -> String {
        self.tracker.masked_word(&self.secret)
    }

    #[must_use]
    pub fn trail(&self) -> String {
        self.tracker.trail()
    }

    #[must_use]
    pub fn has_won(&self) -> bool {
        self.tracker.has_won(&self.secret)
    }

    /// Derived from the secret, the guesses and the tries counter. A win
    /// takes precedence over running out of tries.
    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        if self.has_won() {
            GameOutcome::Won
        } else if self.tries_used >= MAX_TRIES {
            GameOutcome::Lost
        } else {
            GameOutcome::InProgress
        }
    }

    #[must_use]
    pub fn board(&self) -> BoardView {
        BoardView {
            frame: render_frame(self.tries_used),
            masked_word: self.masked_word(),
            trail: self.trail(),
            tries_used: self.tries_used,
            tries_remaining: self.tries_remaining(),
        }
    }

    /// Process one line of player input.
    ///
    /// The input is lowercased before it is validated; surrounding whitespace
    /// makes it more than one character and so gets it rejected.
    pub fn submit_guess(&mut self, raw: &str) -> TurnResult {
        if self.outcome().is_over() {
            return TurnResult::GameOver;
        }

        let candidate = raw.to_lowercase();
        if !self.tracker.record_guess(&candidate) {
            return TurnResult::Rejected;
        }

        // record_guess only accepts exactly one character
        let Some(letter) = candidate.chars().next() else {
            return TurnResult::Rejected;
        };

        if self.secret.contains(letter) {
            debug_log!("submit_guess() - hit '{}'", letter);
            TurnResult::Hit(letter)
        } else {
            self.tries_used += 1;
            debug_log!(
                "submit_guess() - miss '{}', tries used {}/{}",
                letter,
                self.tries_used,
                MAX_TRIES
            );
            TurnResult::Miss(letter)
        }
    }
}

/// Play `game` to the end through `interface`.
///
/// Returns [`GameOutcome::InProgress`] if the player quit before the game
/// finished; in that case no result is displayed.
pub fn game_loop<I: GameInterface>(game: &mut Game, interface: &mut I) -> GameOutcome {
    interface.display_board(&game.board());

    while !game.outcome().is_over() {
        let raw = match interface.read_guess() {
            Some(UserAction::Guess(raw)) => raw,
            Some(UserAction::Exit) => {
                info_log!("Player quit with {} tries used", game.tries_used());
                interface.display_exit_message();
                return GameOutcome::InProgress;
            }
            None => continue,
        };

        match game.submit_guess(&raw) {
            TurnResult::Rejected => interface.display_rejected(&game.trail()),
            TurnResult::Miss(_) => interface.display_miss(&game.board()),
            TurnResult::Hit(_) => interface.display_hit(&game.board()),
            TurnResult::GameOver => break,
        }
    }

    let outcome = game.outcome();
    info_log!("Game finished: {}", outcome);
    interface.display_result(outcome, game.secret());
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(word: &str) -> Game {
        Game::new(SecretWord::new(word).unwrap())
    }

    /// Scripted front end that records what it was asked to show.
    #[derive(Default)]
    struct ScriptedInterface {
        inputs: Vec<Option<UserAction>>,
        boards: Vec<BoardView>,
        rejected: Vec<String>,
        misses: usize,
        hits: usize,
        result: Option<GameOutcome>,
        exited: bool,
    }

    impl ScriptedInterface {
        fn with_guesses(guesses: &[&str]) -> Self {
            Self {
                inputs: guesses
                    .iter()
                    .rev()
                    .map(|g| Some(UserAction::Guess((*g).to_string())))
                    .collect(),
                ..Self::default()
            }
        }
    }

    impl GameInterface for ScriptedInterface {
        fn display_board(&mut self, board: &BoardView) {
            self.boards.push(board.clone());
        }

        fn read_guess(&mut self) -> Option<UserAction> {
            self.inputs.pop().unwrap_or(Some(UserAction::Exit))
        }

        fn display_rejected(&mut self, trail: &str) {
            self.rejected.push(trail.to_string());
        }

        fn display_miss(&mut self, board: &BoardView) {
            self.misses += 1;
            self.boards.push(board.clone());
        }

        fn display_hit(&mut self, board: &BoardView) {
            self.hits += 1;
            self.boards.push(board.clone());
        }

        fn display_result(&mut self, outcome: GameOutcome, _secret: &SecretWord) {
            self.result = Some(outcome);
        }

        fn display_exit_message(&mut self) {
            self.exited = true;
        }
    }

    #[test]
    fn test_new_game_starts_in_progress() {
        let g = game("cat");
        assert_eq!(g.outcome(), GameOutcome::InProgress);
        assert_eq!(g.tries_used(), 0);
        assert_eq!(g.tries_remaining(), MAX_TRIES);
        assert!(g.guesses().is_empty());
    }

    #[test]
    fn test_book_won_without_misses() {
        let mut g = game("book");
        assert_eq!(g.submit_guess("b"), TurnResult::Hit('b'));
        assert_eq!(g.submit_guess("o"), TurnResult::Hit('o'));
        assert_eq!(g.outcome(), GameOutcome::InProgress);
        assert_eq!(g.submit_guess("k"), TurnResult::Hit('k'));
        assert_eq!(g.outcome(), GameOutcome::Won);
        assert_eq!(g.tries_used(), 0);
    }

    #[test]
    fn test_cat_lost_after_six_misses() {
        let mut g = game("cat");
        for letter in ["x", "y", "z", "q", "w"] {
            assert_eq!(g.outcome(), GameOutcome::InProgress);
            assert!(matches!(g.submit_guess(letter), TurnResult::Miss(_)));
        }
        assert_eq!(g.submit_guess("e"), TurnResult::Miss('e'));
        assert_eq!(g.outcome(), GameOutcome::Lost);
        assert_eq!(g.tries_used(), MAX_TRIES);
        assert_eq!(g.tries_remaining(), 0);
    }

    #[test]
    fn test_repeated_guess_rejected_without_cost() {
        let mut g = game("cat");
        assert_eq!(g.submit_guess("x"), TurnResult::Miss('x'));
        assert_eq!(g.submit_guess("x"), TurnResult::Rejected);
        assert_eq!(g.submit_guess("X"), TurnResult::Rejected);
        assert_eq!(g.tries_used(), 1);
        assert_eq!(g.guesses().len(), 1);
    }

    #[test]
    fn test_invalid_guesses_do_not_change_state() {
        let mut g = game("cat");
        for raw in ["", "ab", "1", "?", "  "] {
            assert_eq!(g.submit_guess(raw), TurnResult::Rejected);
        }
        assert_eq!(g.tries_used(), 0);
        assert!(g.guesses().is_empty());
    }

    #[test]
    fn test_input_is_lowercased_but_not_trimmed() {
        let mut g = game("cat");
        for raw in [" c", "c ", "x\t", "  C \n"] {
            assert_eq!(g.submit_guess(raw), TurnResult::Rejected);
        }
        assert_eq!(g.tries_used(), 0);
        assert!(g.guesses().is_empty());
        assert_eq!(g.submit_guess("C"), TurnResult::Hit('c'));
        assert_eq!(g.masked_word(), "c _ _ ");
    }

    #[test]
    fn test_uppercase_secret_matches_lowercase_guess() {
        let mut g = game("CAT");
        assert_eq!(g.submit_guess("a"), TurnResult::Hit('a'));
    }

    #[test]
    fn test_guess_after_game_over_is_ignored() {
        let mut g = game("a");
        assert_eq!(g.submit_guess("a"), TurnResult::Hit('a'));
        assert_eq!(g.submit_guess("b"), TurnResult::GameOver);
        assert_eq!(g.tries_used(), 0);
        assert_eq!(g.guesses().len(), 1);
    }

    #[test]
    fn test_winning_on_last_try_is_a_win() {
        let mut g = game("z");
        for letter in ["a", "b", "c", "d", "e"] {
            g.submit_guess(letter);
        }
        assert_eq!(g.tries_used(), 5);
        assert_eq!(g.submit_guess("z"), TurnResult::Hit('z'));
        assert_eq!(g.outcome(), GameOutcome::Won);
    }

    #[test]
    fn test_board_tracks_frame_and_tries() {
        let mut g = game("cat");
        assert_eq!(g.board().frame, render_frame(0));
        g.submit_guess("q");
        let board = g.board();
        assert_eq!(board.frame, render_frame(1));
        assert_eq!(board.tries_used, 1);
        assert_eq!(board.tries_remaining, MAX_TRIES - 1);
        assert_eq!(board.masked_word, "_ _ _ ");
        assert_eq!(board.trail, "q");
    }

    #[test]
    fn test_outcome_display_tokens() {
        assert_eq!(GameOutcome::Won.to_string(), "WIN");
        assert_eq!(GameOutcome::Lost.to_string(), "LOSE");
    }

    #[test]
    fn test_game_loop_win() {
        let mut g = game("book");
        let mut ui = ScriptedInterface::with_guesses(&["b", "b", "o", "x", "k"]);
        assert_eq!(game_loop(&mut g, &mut ui), GameOutcome::Won);
        assert_eq!(ui.result, Some(GameOutcome::Won));
        assert_eq!(ui.rejected, vec!["b".to_string()]);
        assert_eq!(ui.hits, 3);
        assert_eq!(ui.misses, 1);
        assert!(!ui.exited);
    }

    #[test]
    fn test_game_loop_loss() {
        let mut g = game("cat");
        let mut ui = ScriptedInterface::with_guesses(&["x", "y", "z", "q", "w", "e", "c"]);
        assert_eq!(game_loop(&mut g, &mut ui), GameOutcome::Lost);
        assert_eq!(ui.misses, MAX_TRIES);
        // The loop stops before the seventh guess is read
        assert_eq!(ui.inputs.len(), 1);
        assert_eq!(ui.boards.last().unwrap().frame, render_frame(MAX_TRIES));
    }

    #[test]
    fn test_game_loop_exit_leaves_game_in_progress() {
        let mut g = game("cat");
        let mut ui = ScriptedInterface::with_guesses(&["c"]);
        assert_eq!(game_loop(&mut g, &mut ui), GameOutcome::InProgress);
        assert!(ui.exited);
        assert_eq!(ui.result, None);
    }

    #[test]
    fn test_game_loop_retries_unusable_input() {
        let mut g = game("a");
        let mut ui = ScriptedInterface::default();
        ui.inputs = vec![Some(UserAction::Guess("a".to_string())), None, None];
        assert_eq!(game_loop(&mut g, &mut ui), GameOutcome::Won);
    }
}

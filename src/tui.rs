//! TUI (Terminal User Interface) front end for Hangman
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! The UI follows these state transitions:
//! - `EnteringGuess` → `EnteringGuess` after every submitted guess
//! - Terminal state: `GameOver`, left with any key

use crate::game_state::{BoardView, GameInterface, GameOutcome, MAX_TRIES, UserAction};
use crate::wordbank::SecretWord;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const MAX_INPUT_LEN: usize = 8;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const FRAME_HEIGHT: u16 = 8;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    EnteringGuess,
    GameOver,
}

/// What a key press did while a guess was being typed.
#[derive(Debug, PartialEq, Eq)]
enum InputEffect {
    Submit(String),
    Quit,
    Edited,
    Ignored,
}

/// Everything the TUI shows, kept apart from the terminal so key handling can
/// be exercised without one.
#[derive(Debug)]
struct Screen {
    board: Option<BoardView>,
    current_input: String,
    state: TuiState,
    message: String,
    error_message: String,
    status: String,
}

impl Screen {
    fn new() -> Self {
        Self {
            board: None,
            current_input: String::new(),
            state: TuiState::EnteringGuess,
            message: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
        }
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn handle_guess_key(&mut self, key: KeyEvent) -> InputEffect {
        match key.code {
            KeyCode::Esc => InputEffect::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                InputEffect::Quit
            }
            _ if Self::has_modifier_keys(&key) => {
                debug_log!("handle_guess_key() - ignoring {:?} with modifiers", key.code);
                InputEffect::Ignored
            }
            KeyCode::Char(c) if self.current_input.chars().count() < MAX_INPUT_LEN => {
                self.error_message.clear();
                self.current_input.push(c);
                InputEffect::Edited
            }
            KeyCode::Char(_) => {
                self.error_message = format!("Input is limited to {MAX_INPUT_LEN} characters");
                InputEffect::Ignored
            }
            KeyCode::Backspace => {
                self.current_input.pop();
                InputEffect::Edited
            }
            KeyCode::Enter => {
                let guess = std::mem::take(&mut self.current_input);
                info_log!("handle_guess_key() - submitting {:?}", guess);
                InputEffect::Submit(guess)
            }
            _ => InputEffect::Ignored,
        }
    }

    fn apply_board(&mut self, board: &BoardView) {
        self.board = Some(board.clone());
        self.status = format!(
            "Tries used: {}/{} | Remaining: {}",
            board.tries_used, MAX_TRIES, board.tries_remaining
        );
    }
}

/// Main TUI interface component.
///
/// Owns the terminal for its whole lifetime and restores it on drop.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    screen: Screen,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal backend created");

        Ok(Self {
            terminal,
            screen: Screen::new(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let screen = &self.screen;
        self.terminal.draw(|f| render(f, screen))?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    /// Block until the next key press, skipping releases, repeats and
    /// non-key events.
    fn next_key() -> Result<KeyEvent, io::Error> {
        loop {
            if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(key),
                other => {
                    debug_log!("next_key() - ignoring event {:?}", other);
                }
            }
        }
    }
}

fn render(f: &mut Frame, screen: &Screen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                // Title
            Constraint::Length(FRAME_HEIGHT + 2), // Gallows
            Constraint::Length(3),                // Masked word
            Constraint::Min(5),                   // Guesses and messages
            Constraint::Length(3),                // Status line
            Constraint::Length(3),                // Instructions
        ])
        .split(f.area());

    render_title(f, chunks[0]);
    render_gallows(f, chunks[1], screen.board.as_ref());
    render_word(f, chunks[2], screen);
    render_info(f, chunks[3], screen);
    render_status(f, chunks[4], &screen.status);
    render_instructions(f, chunks[5], screen.state);
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("HANGMAN")
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

fn render_gallows(f: &mut Frame, area: Rect, board: Option<&BoardView>) {
    let text = board.map_or("", |b| b.frame);
    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_word(f: &mut Frame, area: Rect, screen: &Screen) {
    let mut spans = vec![Span::styled(
        screen
            .board
            .as_ref()
            .map_or_else(String::new, |b| b.masked_word.clone()),
        INFO_STYLE,
    )];
    if screen.state == TuiState::EnteringGuess {
        spans.push(Span::raw("   > "));
        spans.push(Span::styled(
            format!("{}_", screen.current_input),
            Style::default().fg(Color::White).bg(Color::DarkGray),
        ));
    }
    let paragraph =
        Paragraph::new(Line::from(spans)).block(Block::default().title("Word").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_info(f: &mut Frame, area: Rect, screen: &Screen) {
    let mut lines = Vec::new();

    if let Some(board) = &screen.board
        && !board.trail.is_empty()
    {
        lines.push(Line::from(vec![
            Span::styled("Guessed: ", HEADER_STYLE),
            Span::raw(board.trail.clone()),
        ]));
        lines.push(Line::from(""));
    }

    if !screen.message.is_empty() {
        let style = if screen.state == TuiState::GameOver {
            SUCCESS_STYLE
        } else {
            MESSAGE_STYLE
        };
        lines.push(Line::from(vec![Span::styled(screen.message.clone(), style)]));
    }

    if !screen.error_message.is_empty() {
        lines.push(Line::from(vec![Span::styled(
            screen.error_message.clone(),
            ERROR_STYLE,
        )]));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().title("Information").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, area: Rect, status: &str) {
    let status_text = if status.is_empty() { "Ready" } else { status };
    let paragraph = Paragraph::new(status_text)
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(paragraph, area);
}

fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
    let text = match state {
        TuiState::EnteringGuess => "Type a letter | ENTER: Submit | BACKSPACE: Edit | ESC: Quit",
        TuiState::GameOver => "Press any key to exit",
    };
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

impl GameInterface for TuiInterface {
    fn display_board(&mut self, board: &BoardView) {
        self.screen.apply_board(board);
        self.screen.message = "Guess the word, one letter at a time".to_string();
        self.draw_or_log();
    }

    fn read_guess(&mut self) -> Option<UserAction> {
        self.screen.state = TuiState::EnteringGuess;
        loop {
            if self.draw().is_err() {
                info_log!("read_guess() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            let key = match Self::next_key() {
                Ok(key) => key,
                Err(e) => {
                    info_log!("read_guess() - Error reading input: {}", e);
                    return Some(UserAction::Exit);
                }
            };

            match self.screen.handle_guess_key(key) {
                InputEffect::Submit(guess) => return Some(UserAction::Guess(guess)),
                InputEffect::Quit => return Some(UserAction::Exit),
                InputEffect::Edited | InputEffect::Ignored => {}
            }
        }
    }

    fn display_rejected(&mut self, trail: &str) {
        self.screen.error_message = if trail.is_empty() {
            "X  (enter a single new letter)".to_string()
        } else {
            format!("X  already guessed: {trail}")
        };
        self.draw_or_log();
    }

    fn display_miss(&mut self, board: &BoardView) {
        self.screen.apply_board(board);
        self.screen.error_message.clear();
        self.screen.message = ":(".to_string();
        self.draw_or_log();
    }

    fn display_hit(&mut self, board: &BoardView) {
        self.screen.apply_board(board);
        self.screen.error_message.clear();
        self.screen.message = "Good guess!".to_string();
        self.draw_or_log();
    }

    fn display_result(&mut self, outcome: GameOutcome, secret: &SecretWord) {
        self.screen.state = TuiState::GameOver;
        self.screen.error_message.clear();
        self.screen.message = format!("{outcome} - the word was \"{secret}\"");
        self.screen.status = format!("Game Over - {outcome}");
        self.draw_or_log();
        if let Err(e) = Self::next_key() {
            debug_log!("display_result() - Error waiting for key: {}", e);
        }
    }

    fn display_exit_message(&mut self) {
        self.screen.message = "Exiting...".to_string();
        self.screen.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_submitting() {
        let mut screen = Screen::new();
        assert_eq!(screen.handle_guess_key(press(KeyCode::Char('a'))), InputEffect::Edited);
        assert_eq!(
            screen.handle_guess_key(press(KeyCode::Enter)),
            InputEffect::Submit("a".to_string())
        );
        assert!(screen.current_input.is_empty());
    }

    #[test]
    fn test_backspace_edits_input() {
        let mut screen = Screen::new();
        screen.handle_guess_key(press(KeyCode::Char('a')));
        screen.handle_guess_key(press(KeyCode::Char('b')));
        screen.handle_guess_key(press(KeyCode::Backspace));
        assert_eq!(screen.current_input, "a");
    }

    #[test]
    fn test_non_letters_are_passed_through_for_validation() {
        let mut screen = Screen::new();
        screen.handle_guess_key(press(KeyCode::Char('7')));
        assert_eq!(
            screen.handle_guess_key(press(KeyCode::Enter)),
            InputEffect::Submit("7".to_string())
        );
    }

    #[test]
    fn test_input_length_capped() {
        let mut screen = Screen::new();
        for _ in 0..MAX_INPUT_LEN + 3 {
            screen.handle_guess_key(press(KeyCode::Char('z')));
        }
        assert_eq!(screen.current_input.chars().count(), MAX_INPUT_LEN);
        assert!(!screen.error_message.is_empty());
    }

    #[test]
    fn test_escape_and_ctrl_c_quit() {
        let mut screen = Screen::new();
        assert_eq!(screen.handle_guess_key(press(KeyCode::Esc)), InputEffect::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(screen.handle_guess_key(ctrl_c), InputEffect::Quit);
    }

    #[test]
    fn test_alt_modified_keys_ignored() {
        let mut screen = Screen::new();
        let alt_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::ALT);
        assert_eq!(screen.handle_guess_key(alt_a), InputEffect::Ignored);
        assert!(screen.current_input.is_empty());
    }

    #[test]
    fn test_apply_board_updates_status() {
        let mut screen = Screen::new();
        screen.apply_board(&BoardView {
            frame: crate::frames::render_frame(2),
            masked_word: "_ a _ ".to_string(),
            trail: "a->x->y".to_string(),
            tries_used: 2,
            tries_remaining: MAX_TRIES - 2,
        });
        assert_eq!(screen.status, "Tries used: 2/6 | Remaining: 4");
        assert!(screen.board.is_some());
    }
}

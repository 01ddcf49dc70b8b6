use hangman::cli::{CliInterface, display_start_screen, parse_cli, setup_secret_word};
use hangman::game_state::{Game, game_loop};
use hangman::logging::init_logging;
use hangman::tui::TuiInterface;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logging(cli.tui);

    display_start_screen();

    let mut reader = io::stdin().lock();
    let secret = match setup_secret_word(&mut reader, &cli) {
        Ok(Some(secret)) => secret,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Failed to choose a word: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut game = Game::new(secret);

    if cli.tui {
        drop(reader);
        let mut interface = match TuiInterface::new() {
            Ok(interface) => interface,
            Err(e) => {
                eprintln!("Failed to start the terminal interface: {e}");
                return ExitCode::FAILURE;
            }
        };
        let outcome = game_loop(&mut game, &mut interface);
        // Restore the terminal before printing the final line
        drop(interface);
        if outcome.is_over() {
            println!("{outcome}");
        }
    } else {
        let mut interface = CliInterface::new(reader);
        game_loop(&mut game, &mut interface);
    }

    ExitCode::SUCCESS
}

use evil_hangman::cli::{parse_cli, replay};
use evil_hangman::logging;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();
    logging::init(cli.verbose);

    let mut state = match cli.new_game() {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Failed to start game: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    if let Err(e) = replay(&mut state, cli.letters(), cli.explain, &mut stdout.lock()) {
        eprintln!("Failed to write output: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

use crate::render::TerminalRenderer;
use games_core::engine::config::GameConfig;
use games_core::logic::error::MoveError;
use games_core::logic::game::GameState;
use games_core::logic::gomoku_game::GomokuGame;
use games_core::logic::grid::Square;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

const XIANGQI_HELP: &str = "commands: <x1> <y1> <x2> <y2> move | m <x> <y> list moves | u undo | n new game | q quit";
const GOMOKU_HELP: &str = "commands: <x> <y> place | u undo | n new game | q quit";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Move(Square, Square),
    Place(Square),
    Moves(Square),
    Undo,
    New,
    Quit,
    Help,
}

fn parse_command(line: &str) -> Option<Command> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let numbers: Option<Vec<usize>> = words.iter().map(|w| w.parse().ok()).collect();

    match (words.as_slice(), numbers.as_deref()) {
        (["q" | "quit"], _) => Some(Command::Quit),
        (["u" | "undo"], _) => Some(Command::Undo),
        (["n" | "new"], _) => Some(Command::New),
        (["h" | "help" | "?"], _) => Some(Command::Help),
        (["m", x, y], _) => Some(Command::Moves(Square::new(x.parse().ok()?, y.parse().ok()?))),
        (_, Some(&[x, y])) => Some(Command::Place(Square::new(x, y))),
        (_, Some(&[x1, y1, x2, y2])) => Some(Command::Move(Square::new(x1, y1), Square::new(x2, y2))),
        _ => None,
    }
}

/// Reads one command per line until quit or end of input.
fn read_commands(help: &str, mut handle: impl FnMut(Command)) {
    println!("{help}");
    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                tracing::error!(%err, "failed to read input");
                break;
            }
        }

        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Help) => println!("{help}"),
            Some(command) => handle(command),
            None if line.trim().is_empty() => {}
            None => println!("unrecognised input; {help}"),
        }
    }
}

fn pause(config: &GameConfig) {
    if config.reply_delay_ms > 0 {
        thread::sleep(Duration::from_millis(config.reply_delay_ms));
    }
}

fn xiangqi_reply(game: &mut GameState, config: &GameConfig) {
    if game.turn() != game.computer() {
        return;
    }
    pause(config);
    if let Err(err) = game.opponent_move() {
        println!("computer cannot move: {err}");
    }
}

pub fn run_xiangqi(config: &GameConfig) {
    let mut game = GameState::new(config).with_renderer(Box::new(TerminalRenderer));
    xiangqi_reply(&mut game, config);

    read_commands(XIANGQI_HELP, |command| {
        match command {
            Command::Move(from, to) => match game.apply_player_move(from, to) {
                Ok(_) => xiangqi_reply(&mut game, config),
                Err(err) => println!("{err}"),
            },
            Command::Moves(from) => {
                let targets: Vec<String> = game.legal_destinations(from).iter().map(ToString::to_string).collect();
                if targets.is_empty() {
                    println!("no moves from {from}");
                } else {
                    println!("{from} -> {}", targets.join(" "));
                }
            }
            Command::Undo => {
                // Back to the last position where the player was to move.
                match game.undo() {
                    Ok(_) => {
                        while game.turn() != game.player() {
                            if game.undo().is_err() {
                                break;
                            }
                        }
                    }
                    Err(err) => println!("{err}"),
                }
                xiangqi_reply(&mut game, config);
            }
            Command::New => {
                game.new_game();
                xiangqi_reply(&mut game, config);
            }
            Command::Place(_) => println!("{XIANGQI_HELP}"),
            Command::Quit | Command::Help => {}
        }
    });
}

pub fn run_gomoku(config: &GameConfig) {
    let mut game = GomokuGame::new(config).with_renderer(Box::new(TerminalRenderer));

    read_commands(GOMOKU_HELP, |command| {
        match command {
            Command::Place(square) => match game.apply_player_move(square) {
                Ok(_) if game.is_game_over().is_none() => {
                    pause(config);
                    if let Err(err) = game.opponent_move() {
                        println!("computer cannot move: {err}");
                    }
                }
                Ok(_) => {}
                Err(MoveError::GameOver) => println!("game is over; n starts a new one"),
                Err(err) => println!("{err}"),
            },
            Command::Undo => {
                if let Err(err) = game.undo_turn() {
                    println!("{err}");
                }
            }
            Command::New => game.new_game(),
            Command::Move(..) | Command::Moves(_) => println!("{GOMOKU_HELP}"),
            Command::Quit | Command::Help => {}
        }
    });
}

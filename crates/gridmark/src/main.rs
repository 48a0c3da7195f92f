//! Interactive console front end for the grid game engine.
//!
//! Thin glue only: parses stdin lines into engine signals and renders the
//! board after each view callback. All game decisions stay in the engine.

use anyhow::{Context, Result};
use clap::Parser;
use gridmark::storage::{FileKeyValueStore, SharedKeyValueStore};
use gridmark::{GameEngine, GameView, Player, StorageSource, UserAction};
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "gridmark", about = "Turn-based grid game with pluggable save slots")]
struct Cli {
    /// Board side length (the board is size x size).
    #[arg(long, default_value_t = 3)]
    size: usize,

    /// File backing the durable save slot.
    #[arg(long, default_value = "gridmark_state.json")]
    state_file: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let medium: SharedKeyValueStore =
        Arc::new(Mutex::new(FileKeyValueStore::new(cli.state_file)));
    let view = Box::new(ConsoleView::new(cli.size));
    let mut engine = GameEngine::new(cli.size, cli.size, view, medium)
        .context("failed to set up the game engine")?;

    println!(
        "Commands: start | move <row> <col> | save <volatile|durable> | load <volatile|durable> | quit"
    );
    for line in io::stdin().lock().lines() {
        let line = line?;
        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Action(action)) => {
                if let Err(err) = engine.handle(action) {
                    println!("Error: {err}");
                }
            }
            None => println!("Unrecognized command: {}", line.trim()),
        }
    }

    engine.shutdown();
    Ok(())
}

enum Command {
    Action(UserAction),
    Quit,
}

/// Parses one input line into a command, or `None` if it makes no sense.
fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let action = match words.next()? {
        "start" => UserAction::StartGame,
        "move" => {
            let row = words.next()?.parse().ok()?;
            let col = words.next()?.parse().ok()?;
            UserAction::TileClicked { row, col }
        }
        "save" => UserAction::SaveState(StorageSource::from_str(words.next()?).ok()?),
        "load" => UserAction::LoadState(StorageSource::from_str(words.next()?).ok()?),
        "quit" | "exit" => return Some(Command::Quit),
        _ => return None,
    };
    words.next().is_none().then_some(Command::Action(action))
}

/// Console renderer: mirrors the board and prints it after every change.
struct ConsoleView {
    size: usize,
    marks: Vec<Option<Player>>,
}

impl ConsoleView {
    fn new(size: usize) -> Self {
        Self {
            size,
            marks: vec![None; size * size],
        }
    }

    fn render(&self) {
        for row in 0..self.size {
            let line: Vec<&str> = (0..self.size)
                .map(|col| match self.marks[row * self.size + col] {
                    Some(Player::A) => "A",
                    Some(Player::B) => "B",
                    None => ".",
                })
                .collect();
            println!("{}", line.join("|"));
        }
    }
}

impl GameView for ConsoleView {
    fn start_game(&mut self, current_player: Player) {
        self.marks = vec![None; self.size * self.size];
        println!("New game. {current_player} to move.");
        self.render();
    }

    fn set_tile_mark(&mut self, player: Player, row: usize, col: usize) {
        self.marks[row * self.size + col] = Some(player);
        self.render();
    }

    fn change_turn(&mut self, next_player: Player) {
        println!("{next_player} to move.");
    }

    fn game_won(&mut self, winner: Player) {
        println!("{winner} wins!");
    }

    fn game_tie(&mut self) {
        println!("It's a tie.");
    }
}

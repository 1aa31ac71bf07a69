//! Command-line driver for the kinarow engine: play against it in the
//! terminal or benchmark the search variants.

use clap::{Parser, Subcommand};
use kinarow_core::engine::config::EngineConfig;
use kinarow_core::engine::search::{alpha_beta, depth_limited, minimax};
use kinarow_core::engine::{Move, NodeCounter, SearchResult};
use kinarow_core::logic::board::{Board, Player};
use kinarow_core::logic::game::{GameState, GameStatus};
use log::info;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "kinarow")]
#[command(about = "Minimax engine for m-by-m, k-in-a-row boards", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play against the engine; the engine is X and moves first
    Play {
        /// Board side length
        #[arg(short, long, default_value_t = 3)]
        size: usize,

        /// Marks in a line needed to win
        #[arg(short = 'k', long, default_value_t = 3)]
        win_length: usize,

        /// Search horizon in plies; omit to search to the end of the game
        #[arg(short, long)]
        depth: Option<u8>,

        /// Expand moves in plain row-major order
        #[arg(long)]
        no_ordering: bool,

        /// JSON settings file; overrides the flags above when present
        #[arg(long)]
        config: Option<std::path::PathBuf>,
    },

    /// Compare scores, node counts and times across the search variants
    Bench {
        /// Board side length
        #[arg(short, long, default_value_t = 3)]
        size: usize,

        /// Marks in a line needed to win
        #[arg(short = 'k', long, default_value_t = 3)]
        win_length: usize,

        /// Horizon for the depth-limited rows of the report
        #[arg(short, long, default_value_t = 6)]
        depth: u8,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    match Cli::parse().command {
        Command::Play {
            size,
            win_length,
            depth,
            no_ordering,
            config,
        } => {
            let settings = resolve_settings(size, win_length, depth, no_ordering, config)?;
            run_play(&settings)
        }
        Command::Bench {
            size,
            win_length,
            depth,
        } => run_bench(size, win_length, depth),
    }
}

fn resolve_settings(
    size: usize,
    win_length: usize,
    depth: Option<u8>,
    no_ordering: bool,
    config: Option<std::path::PathBuf>,
) -> Result<EngineConfig, Box<dyn Error>> {
    let Some(path) = config else {
        return Ok(EngineConfig {
            size,
            win_length,
            depth_limit: depth,
            use_ordering: !no_ordering,
        });
    };
    let text = std::fs::read_to_string(path)?;
    Ok(EngineConfig::load_from_json(&text)?)
}

fn run_play(settings: &EngineConfig) -> Result<(), Box<dyn Error>> {
    settings.validate()?;
    let mut game = GameState::new(settings.size, settings.win_length)?;
    println!(
        "{size}x{size} board, {k} in a line wins. You are O; enter moves as \"row col\".",
        size = settings.size,
        k = settings.win_length
    );

    while game.status == GameStatus::InProgress {
        if game.turn == Player::X {
            let result = engine_search(&game.board, game.turn, settings)?;
            let Some(mv) = result.best_move else { break };
            println!("engine plays {mv}");
            game.make_move(mv)?;
        } else {
            render(&game.board);
            match prompt_move(game.board.size())? {
                PlayerInput::Move(mv) => {
                    if let Err(err) = game.make_move(mv) {
                        println!("{err}");
                    }
                }
                PlayerInput::Quit => return Ok(()),
                PlayerInput::Invalid => {
                    println!("enter two numbers, e.g. \"0 2\", or \"q\" to quit");
                }
            }
        }
    }

    render(&game.board);
    match game.status {
        GameStatus::Won(player) => println!("{} wins.", player.symbol()),
        GameStatus::Draw => println!("draw."),
        GameStatus::InProgress => {}
    }
    Ok(())
}

#[allow(clippy::option_if_let_else)]
fn engine_search(
    board: &Board,
    player: Player,
    settings: &EngineConfig,
) -> Result<SearchResult, Box<dyn Error>> {
    let mut counter = NodeCounter::new();
    let result = if let Some(depth) = settings.depth_limit {
        depth_limited(board, player, depth, settings.use_ordering, &mut counter)?
    } else {
        alpha_beta(board, player, settings.use_ordering, &mut counter)
    };
    info!("searched {} nodes", counter.nodes());
    Ok(result)
}

enum PlayerInput {
    Move(Move),
    Quit,
    Invalid,
}

fn prompt_move(size: usize) -> Result<PlayerInput, io::Error> {
    print!("your move> ");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(PlayerInput::Quit);
    }
    let trimmed = line.trim();
    if trimmed == "q" || trimmed == "quit" {
        return Ok(PlayerInput::Quit);
    }

    let mut parts = trimmed.split_whitespace();
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Ok(PlayerInput::Invalid);
    };
    let (Ok(row), Ok(col)) = (row.parse::<u8>(), col.parse::<u8>()) else {
        return Ok(PlayerInput::Invalid);
    };
    if usize::from(row) >= size || usize::from(col) >= size {
        return Ok(PlayerInput::Invalid);
    }
    Ok(PlayerInput::Move(Move::new(row, col)))
}

fn render(board: &Board) {
    print!("   ");
    for col in 0..board.size() {
        print!("{col:>2}");
    }
    println!();
    for row in 0..board.size() {
        print!("{row:>3}");
        for col in 0..board.size() {
            let mark = board.get(row, col).map_or('.', Player::symbol);
            print!(" {mark}");
        }
        println!();
    }
}

fn run_bench(size: usize, win_length: usize, depth: u8) -> Result<(), Box<dyn Error>> {
    let board = Board::new(size, win_length)?;
    println!("{size}x{size} board, {win_length} in a line wins");
    println!(
        "{:<24} {:>16} {:>12} {:>12}",
        "search", "score", "nodes", "time"
    );

    // Exhaustive rows only where the full tree is tractable.
    if size * size <= 9 {
        let mut counter = NodeCounter::new();
        let start = Instant::now();
        let result = minimax(&board, Player::X, &mut counter);
        report("minimax", &result, &counter, start);

        counter.reset();
        let start = Instant::now();
        let result = alpha_beta(&board, Player::X, false, &mut counter);
        report("alpha-beta", &result, &counter, start);

        counter.reset();
        let start = Instant::now();
        let result = alpha_beta(&board, Player::X, true, &mut counter);
        report("alpha-beta + ordering", &result, &counter, start);
    }

    for use_ordering in [false, true] {
        let mut counter = NodeCounter::new();
        let start = Instant::now();
        let result = depth_limited(&board, Player::X, depth, use_ordering, &mut counter)?;
        let label = if use_ordering {
            format!("depth {depth} + ordering")
        } else {
            format!("depth {depth}")
        };
        report(&label, &result, &counter, start);
    }
    Ok(())
}

fn report(label: &str, result: &SearchResult, counter: &NodeCounter, start: Instant) {
    let elapsed = start.elapsed();
    println!(
        "{label:<24} {:>16} {:>12} {elapsed:>12.2?}",
        result.score,
        counter.nodes()
    );
}

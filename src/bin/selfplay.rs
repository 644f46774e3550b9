//! AI vs AI self-play
//!
//! Two engines play from an empty board, Black first, until one of them
//! makes five, the board fills up, or the move cap is reached.

use std::time::Instant;

use clap::Parser;
use log::info;

use gomoku::config::{validate_board_size, validate_pairing};
use gomoku::{AIEngine, Board, ConfigError, Difficulty, EngineConfig, Stone};

#[derive(Debug, Parser)]
#[command(name = "gomoku-selfplay", about = "Let two Gomoku engines play each other")]
struct Args {
    /// Board edge length
    #[arg(long, default_value_t = gomoku::DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Black difficulty: Easy | Normal | Hard (anything else searches at depth 2)
    #[arg(long, default_value = "Normal")]
    black: Difficulty,

    /// White difficulty: Easy | Normal | Hard (anything else searches at depth 2)
    #[arg(long, default_value = "Hard")]
    white: Difficulty,

    /// Search Black at this depth (1-4) instead of its difficulty tier
    #[arg(long)]
    black_depth: Option<u8>,

    /// Search White at this depth (1-4) instead of its difficulty tier
    #[arg(long)]
    white_depth: Option<u8>,

    /// Stop after this many moves and call it a draw
    #[arg(long, default_value_t = 100)]
    max_moves: usize,

    /// Seed for Easy-tier random moves (White uses seed + 1)
    #[arg(long)]
    seed: Option<u64>,

    /// Print the board after every move
    #[arg(long)]
    show_board: bool,
}

/// How a self-play game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ending {
    Win(Stone),
    BoardFull,
    MoveCap,
    NoMove(Stone),
}

/// An explicit depth overrides the tier
fn resolve(tier: Difficulty, depth: Option<u8>) -> Result<Difficulty, ConfigError> {
    match depth {
        Some(depth) => Difficulty::with_depth(depth),
        None => Ok(tier),
    }
}

fn main() -> Result<(), ConfigError> {
    env_logger::init();
    let args = Args::parse();

    validate_board_size(args.size)?;
    let black_difficulty = resolve(args.black, args.black_depth)?;
    let white_difficulty = resolve(args.white, args.white_depth)?;
    let black = EngineConfig::new(Stone::Black, black_difficulty).with_seed(args.seed);
    let white = EngineConfig::new(Stone::White, white_difficulty)
        .with_seed(args.seed.map(|s| s.wrapping_add(1)));
    validate_pairing(&black, &white)?;

    let mut engines = [AIEngine::new(black)?, AIEngine::new(white)?];
    let mut board = Board::new(args.size);

    println!("Black ({}) vs White ({})", black_difficulty, white_difficulty);
    println!("{}x{} board, at most {} moves", args.size, args.size, args.max_moves);
    println!();

    let start = Instant::now();
    let mut moves = 0;
    let mut turn = 0;
    let ending = loop {
        if moves >= args.max_moves {
            break Ending::MoveCap;
        }
        let engine = &mut engines[turn];
        let stone = engine.stone();

        let result = engine.select_move_with_stats(&mut board);
        let Some(pos) = result.best_move else {
            break Ending::NoMove(stone);
        };
        board.play(pos, stone);
        moves += 1;

        println!(
            "{:>3}. {:<5} {:<8} {:?}, {}ms",
            moves,
            stone.name(),
            pos.to_string(),
            result.search_type,
            result.time_ms
        );
        if args.show_board {
            println!("{}", board);
        }

        if board.check_win(i32::from(pos.x), i32::from(pos.y), stone) {
            break Ending::Win(stone);
        }
        if board.is_full() {
            break Ending::BoardFull;
        }
        turn = 1 - turn;
    };

    println!();
    match ending {
        Ending::Win(stone) => println!("{} wins after {} moves", stone.name(), moves),
        Ending::BoardFull => println!("Draw: board full after {} moves", moves),
        Ending::MoveCap => println!("Draw: move cap of {} reached", args.max_moves),
        Ending::NoMove(stone) => println!("{} has no legal move", stone.name()),
    }
    if !args.show_board {
        println!("{}", board);
    }
    info!("self-play finished in {:.2}s: {:?}", start.elapsed().as_secs_f32(), ending);
    Ok(())
}

//! Sevens simulator CLI - in-memory self-play through the game flow service.
//!
//! Greedy bots fill every seat; one JSON record per game is written as JSONL.

mod bot;
mod output;
mod simulator;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use output::OutputWriter;
use simulator::{EndReason, GameRecord, Simulator};
use sevens_backend::domain::rules::{MAX_PLAYERS, MIN_PLAYERS};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "sevens-simulator")]
#[command(about = "In-memory Sevens self-play simulator")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Seats at the table
    #[arg(short, long, default_value = "4")]
    players: usize,

    /// Base seed; game N uses seed + N
    #[arg(long)]
    seed: Option<u64>,

    /// Stop a game after this many discards
    #[arg(long, default_value = "500")]
    max_turns: u32,

    /// JSONL output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only show warnings/errors
    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&args.players) {
        return Err(format!(
            "--players must be between {MIN_PLAYERS} and {MAX_PLAYERS}, got {}",
            args.players
        )
        .into());
    }

    let base_seed = args.seed.unwrap_or_else(rand::random);
    info!(games = args.games, players = args.players, base_seed, "Starting simulator");

    let mut output_writer = OutputWriter::new(args.output.as_deref())?;
    let simulator = Simulator::new(args.players, args.max_turns);

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game_num in 1..=args.games {
        let seed = base_seed.wrapping_add(u64::from(game_num));
        match simulator.simulate_game(game_num, seed) {
            Ok(record) => {
                if let Err(e) = output_writer.write_game(&record) {
                    warn!("Failed to write record for game {}: {}", game_num, e);
                }
                info!(game = game_num, end = ?record.end, turns = record.turns, "Game completed");
                results.push(record);
            }
            Err(e) => {
                errors += 1;
                warn!(game = game_num, code = %e.code(), "Game failed: {}", e);
            }
        }
    }

    let elapsed = start.elapsed();
    if let Some(path) = output_writer.path() {
        info!("Results written to: {}", path.display());
    }
    output_writer.finish()?;

    print_summary(&results, errors, elapsed, args.games, args.players);
    Ok(())
}

fn print_summary(
    results: &[GameRecord],
    errors: u32,
    elapsed: std::time::Duration,
    total: u32,
    seats: usize,
) {
    eprintln!("\n=== Simulation Summary ===");
    eprintln!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        eprintln!("Errors: {}", errors);
    }
    eprintln!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }

    let count = |reason: EndReason| results.iter().filter(|r| r.end == reason).count();
    eprintln!(
        "Finished: {}, exhausted: {}, turn cap: {}",
        count(EndReason::Finished),
        count(EndReason::Exhausted),
        count(EndReason::TurnCap)
    );

    let mut wins = vec![0u32; seats];
    let mut total_scores = vec![0u128; seats];
    let mut scored = 0u32;
    for record in results {
        if let Some(seat) = record.winner_seat {
            wins[seat] += 1;
        }
        if record.scores.len() == seats {
            scored += 1;
            for (seat, score) in record.scores.iter().enumerate() {
                total_scores[seat] += u128::from(*score);
            }
        }
    }

    eprintln!("\n=== Results by Seat ===");
    for seat in 0..seats {
        let avg = if scored == 0 {
            0.0
        } else {
            total_scores[seat] as f64 / f64::from(scored)
        };
        let win_rate = f64::from(wins[seat]) / results.len() as f64 * 100.0;
        eprintln!(
            "Seat {}: avg score={:.1}, wins={} ({:.1}%)",
            seat, avg, wins[seat], win_rate
        );
    }
}

//! Self-play: four random players on one board.
//!
//! Plays a full game, logs every move at `debug` and the final standings
//! at `info`, then prints the board.
//!
//! ```text
//! RUST_LOG=debug cargo run --release --bin self_play -- --seed 7 --first-move-scope color
//! ```

use std::time::{Duration, Instant};

use blokus_rules::core::{Color, FirstMoveScope, GameRng, RulesError};
use blokus_rules::games::blokus::GameBuilder;
use blokus_rules::pieces::PieceShape;
use blokus_rules::players::RandomPlayer;
use blokus_rules::rules::RulesEngine;
use clap::{Parser, ValueEnum};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Play one game between random players
#[derive(Parser, Debug)]
#[command(name = "self_play")]
#[command(about = "Play a Blokus game between random players", long_about = None)]
struct Args {
    /// Seed for the players and the random start piece
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Stop after this many moves
    #[arg(long, default_value_t = 100)]
    round_limit: u32,

    /// Which moves must place the start piece in a corner
    #[arg(long, value_enum, default_value_t = ScopeArg::Color)]
    first_move_scope: ScopeArg,

    /// Start piece name (e.g. PENTO_L); random pentomino when omitted
    #[arg(long)]
    start_piece: Option<PieceShape>,

    /// Per-move time budget in milliseconds
    #[arg(long, default_value_t = 1000)]
    move_time_ms: u64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ScopeArg {
    Game,
    Color,
}

impl From<ScopeArg> for FirstMoveScope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::Game => FirstMoveScope::Game,
            ScopeArg::Color => FirstMoveScope::Color,
        }
    }
}

fn main() -> Result<(), RulesError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let builder = GameBuilder::new()
        .first_move_scope(args.first_move_scope.into())
        .round_limit(args.round_limit);
    let builder = match args.start_piece {
        Some(shape) => builder.start_piece(shape),
        None => builder.random_start_piece(args.seed),
    };
    let (game, mut state) = builder.try_build()?;

    info!(
        seed = args.seed,
        start_piece = %state.start_piece(),
        "starting game"
    );

    let mut rng = GameRng::new(args.seed);
    let mut players: Vec<RandomPlayer> = Color::ALL.iter().map(|_| RandomPlayer::from_rng(rng.fork())).collect();
    let budget = Duration::from_millis(args.move_time_ms);

    let result = loop {
        for color in game.remove_invalid_colors(&mut state) {
            warn!(%color, "no opening move available");
        }

        if let Some(result) = game.winning_condition(&state) {
            break Some(result);
        }

        let deadline = Instant::now() + budget;
        let chosen = state
            .current_color()
            .and_then(|color| players[color.index()].choose_move_before(&game, &state, deadline));
        let Some(mv) = chosen else {
            warn!(turn = state.turn, "no move chosen, stopping");
            break None;
        };

        debug!(turn = state.turn, %mv, "move");
        game.perform_move(&mut state, &mv)?;
    };

    let Some(result) = result else {
        return Ok(());
    };

    for standing in result.standings() {
        info!(
            rank = standing.rank,
            color = %standing.color,
            score = standing.score,
            "standing"
        );
    }
    info!(winners = ?result.winners(), turns = state.turn, "game over");
    println!("{}", state.board);

    Ok(())
}

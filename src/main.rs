use anyhow::bail;
use clap::Parser;
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

use gridstrike::{
    format_board, init_logging, OpponentMode, Phase, PlacementResponse, PlayerId, RandomStrategy,
    Session, Strategy, TargetView, TurnTimer,
};

/// Drive a full automated match through the engine and print the result.
#[derive(Parser)]
#[command(author, version, about = "grid battle rules engine demo", long_about = None)]
struct Cli {
    #[arg(long, default_value_t = 9)]
    rows: usize,
    #[arg(long, default_value_t = 9)]
    cols: usize,
    #[arg(long, default_value_t = 5)]
    ships: usize,
    #[arg(long, default_value_t = 1)]
    difficulty: u8,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Print both boards after the match ends")]
    show_boards: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Some(seed) = cli.seed {
        info!("using fixed seed {seed} (game will be reproducible)");
    }
    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let mut session = Session::new();
    session
        .grid(cli.rows, cli.cols)
        .num_ships(cli.ships)
        .opponent(OpponentMode::Automated {
            difficulty: cli.difficulty,
        });
    let mut game = session.start()?;

    // player 0 places with the same uniform-random strategy the opponent uses
    let mut me = RandomStrategy::new();
    while let Some(length) = game.next_ship_length(PlayerId::P0) {
        let Some((row, col, orientation)) =
            me.choose_placement(&mut rng, game.board(PlayerId::P0), length)
        else {
            bail!("no valid placement found for a length-{length} ship");
        };
        if let PlacementResponse::Rejected(err) =
            game.request_placement(PlayerId::P0, row, col, orientation)
        {
            bail!("placement failed: {err}");
        }
    }
    while matches!(game.phase(), Phase::Placing(PlayerId::P1)) {
        if game.opponent_act(&mut rng).is_none() {
            bail!("opponent failed to place its fleet");
        }
    }
    info!("setup complete");

    let mut shots = [0usize; 2];
    loop {
        match game.phase() {
            Phase::Active(PlayerId::P0) => {
                let target = {
                    let view = TargetView::new(game.board(PlayerId::P1));
                    me.choose_attack_target(&mut rng, &view)
                };
                let Some((row, col)) = target else {
                    bail!("no attackable cells left");
                };
                let response = game.request_attack(PlayerId::P0, row, col);
                shots[0] += 1;
                info!("player 0 fires at ({row}, {col}): {response:?}");
            }
            Phase::Active(PlayerId::P1) => {
                let Some(event) = game.opponent_act(&mut rng) else {
                    bail!("opponent failed to move");
                };
                shots[1] += 1;
                info!("player 1 move: {event:?}");
            }
            Phase::AwaitingSwitch(_) => {
                // no real clock in the demo, take the switch-now shortcut
                let mut timer = TurnTimer::default();
                timer.force();
                if timer.is_expired() {
                    game.advance_turn();
                }
            }
            Phase::Over(winner) => {
                info!("{winner} wins");
                break;
            }
            Phase::Placing(_) => bail!("match re-entered setup"),
        }
        if shots[0] + shots[1] > 4 * cli.rows * cli.cols + 8 {
            bail!("match failed to terminate");
        }
    }

    if cli.show_boards {
        println!("player 0 board:");
        println!("{}", format_board(game.board(PlayerId::P0), true));
        println!("player 1 board:");
        println!("{}", format_board(game.board(PlayerId::P1), true));
    }

    let winner = game.winner().map(|w| w.to_string());
    let summary = json!({
        "winner": winner,
        "shots": {"player0": shots[0], "player1": shots[1]},
        "remaining": {
            "player0": game.board(PlayerId::P0).ship_spaces_remaining(),
            "player1": game.board(PlayerId::P1).ship_spaces_remaining(),
        },
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

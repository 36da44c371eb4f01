mod script;

use anyhow::Context;
use clap::Parser;
use game_core::{Config, Game};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::script::{Driver, Script};

/// Run a soccer match without a window
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Frames to simulate (one frame is one step)
    #[arg(long, default_value_t = 3600)]
    frames: u64,

    /// Seed for the random input script
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Input source driving the player
    #[arg(long, value_enum, default_value_t = Script::Dribble)]
    script: Script,

    /// Log a status line every N frames (0 disables)
    #[arg(long, default_value_t = 600)]
    report_every: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .init();

    let args = Args::parse();
    info!(
        "Soccer headless v{} ({:?}, {} frames)",
        env!("CARGO_PKG_VERSION"),
        args.script,
        args.frames
    );

    let mut game = Game::new(Config::new()).context("invalid match configuration")?;
    let mut driver = Driver::new(args.script, args.seed);

    for _ in 0..args.frames {
        let view = game.view().context("match is missing an entity")?;
        for event in driver.next_inputs(&view) {
            game.push_input(event);
        }

        game.step();

        if game.events.goal_scored() {
            info!(frame = game.frame, score = %game.state.score_text(), "GOAL!");
        }

        // Stand-in for the render pass: the banner only counts down when shown
        game.hud();

        if args.report_every > 0 && game.frame % args.report_every == 0 {
            if let (Some(player), Some(ball)) = (game.player(), game.ball()) {
                info!(
                    frame = game.frame,
                    player_x = player.pos.x,
                    player_y = player.pos.y,
                    owner = ?ball.owner,
                    score = %game.state.score_text(),
                    "status"
                );
            }
        }
    }

    println!("{}", game.state.score_text());
    Ok(())
}

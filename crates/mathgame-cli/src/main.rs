//! mathgame CLI — the interactive arithmetic quiz.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use mathgame_core::session::{GameOptions, Session};

mod terminal;

use terminal::TerminalConsole;

#[derive(Parser)]
#[command(name = "mathgame", version, about = "Terminal arithmetic quiz")]
struct Cli {
    /// Seed for the problem generator (reproducible question sequences)
    #[arg(long)]
    seed: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Skip the "press any key" gate after the welcome banner
    #[arg(long)]
    quiet_intro: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mathgame=warn".parse().unwrap())
                .add_directive("mathgame_core=warn".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let rng = match cli.seed {
        Some(seed) => {
            tracing::info!("seeding problem generator with {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let options = GameOptions {
        skip_intro: cli.quiet_intro,
    };
    let mut session = Session::new(TerminalConsole::new(), rng, options);
    session.run().context("game session ended early")?;

    Ok(())
}

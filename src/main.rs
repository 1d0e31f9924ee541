//! Terminal Goblin runner (default binary).
//!
//! Parses the command line, builds the world, then runs the input/render
//! loop on a crossterm raw-mode terminal until the player quits.

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};

use goblin::core::rng::random_seed;
use goblin::core::WorldState;
use goblin::input::handle_key_event;
use goblin::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use goblin::types::{GameAction, DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(Debug, Parser)]
#[command(author, version, about = "Goblin - Procedural ASCII Strategy Game")]
struct Cli {
    /// Map width in columns
    #[arg(long, default_value_t = DEFAULT_WIDTH, allow_negative_numbers = true)]
    width: i32,

    /// Map height in rows
    #[arg(long, default_value_t = DEFAULT_HEIGHT, allow_negative_numbers = true)]
    height: i32,

    /// Random seed for map generation (chosen at random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the startup banner and start immediately
    #[arg(long)]
    no_banner: bool,

    /// Write log output (filtered by RUST_LOG) to this file instead of
    /// stderr, which would draw over the game screen
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    // Build the world before touching the terminal so bad dimensions fail fast.
    let seed = cli.seed.unwrap_or_else(random_seed);
    let mut world = WorldState::new(cli.width.into(), cli.height.into(), Some(seed))?;
    world.initialize();
    log::info!("map {}x{} seed {}", world.width(), world.height(), seed);

    if !cli.no_banner {
        print_banner(&cli, seed)?;
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut world);

    // Always try to restore terminal state.
    let _ = term.exit();
    if result.is_ok() {
        println!("Thanks for playing Goblin!");
    }
    result
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot open log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn print_banner(cli: &Cli, seed: u64) -> Result<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "Starting Goblin...")?;
    writeln!(stdout, "Map size: {}x{}", cli.width, cli.height)?;
    writeln!(stdout, "Seed: {}", seed)?;
    writeln!(stdout)?;
    write!(stdout, "Press Enter to begin...")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, world: &mut WorldState) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(world, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) => match handle_key_event(key) {
                Some(GameAction::Quit) => return Ok(()),
                Some(action) => {
                    world.apply_action(action);
                }
                None => {}
            },
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}

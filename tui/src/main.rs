mod args;
mod load;
mod text;
#[cfg(feature = "tui")]
mod tui;

use anyhow::{anyhow, Context, Result};
use args::{Args, Interface};
use liferun_lib::{Game, Status};
use log::info;
use simple_logger::SimpleLogger;
use std::io;
use text::TextInterface;

#[cfg(feature = "tui")]
use tui::TuiInterface;

fn play(args: &Args, game: &mut Game) -> Result<Status> {
    let status = match args.interface {
        Interface::Text => {
            let mut ui = TextInterface::new(
                io::stdout().lock(),
                io::stdin().lock(),
                args.delay,
                args.manual,
            );
            game.play(args.generations, &mut ui)?
        }
        #[cfg(feature = "tui")]
        Interface::Tui => {
            let status = {
                let mut ui = TuiInterface::new(args.delay, args.manual)?;
                let status = game.play(args.generations, &mut ui)?;
                ui.finish(game, status)?;
                status
            };
            println!("{}", game.grid().plaintext());
            status
        }
    };
    Ok(status)
}

fn main() -> Result<()> {
    let args = Args::parse().unwrap_or_else(|e| e.exit());
    SimpleLogger::new()
        .with_level(args.log_level())
        .init()
        .map_err(|e| anyhow!("{}", e))?;

    let config = load::load(&args.path)?;
    let mut game = config
        .game()
        .with_context(|| format!("Unable to start the game from {}", args.path.display()))?;

    let status = play(&args, &mut game)?;
    info!(
        "{:?} at generation {}, population {}",
        status,
        game.generation(),
        game.population()
    );
    Ok(())
}

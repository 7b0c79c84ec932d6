use anyhow::Result;
use flexi_logger::{AdaptiveFormat, Logger};
use lifeboard::{Simulation, print_board};
use std::thread;

mod console;
mod options;

fn main() -> Result<()> {
    let Some(args) = options::Args::from_env()? else {
        return Ok(());
    };

    // stdout carries the boards, so logs go to stderr
    let logger = match args.log_spec() {
        Some(spec) => Logger::try_with_str(spec)?,
        None => Logger::try_with_env_or_str("warn")?,
    };
    let _logger = logger
        .log_to_stderr()
        .adaptive_format_for_stderr(AdaptiveFormat::Default)
        .start()?;

    let board = args.initial_board()?;
    let (rows, cols) = board.dimensions();
    log::info!("starting from a {rows}x{cols} board with {} alive", board.alive_count());

    let console = if args.console() {
        Some(console::ConsoleRender::new()?)
    } else {
        None
    };
    let sleep = args.sleep()?;

    let mut simulation = Simulation::new(board).with_limit(args.generations()?);
    for (generation, board) in simulation.by_ref().enumerate() {
        match console {
            Some(ref console) => console.render(&board, generation)?,
            None => print_board(Some(&board))?,
        }
        if let Some(time) = sleep {
            thread::sleep(time);
        }
    }
    drop(console);

    log::info!("finished after {} generations", simulation.generation());
    Ok(())
}

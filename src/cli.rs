//! The `twentynine` command: load a game and dump it.

use std::io::{BufRead, Write};
use crate::config::LoadConfig;
use crate::result::LoadError;
use crate::{Game, report};

/// Exit status after a successful dump.
pub const SUCCESS: i32 = 0;
/// Exit status when the input could not be opened or loaded, or the dump could not be written.
pub const ERROR: i32 = 1;

/// Opens the configured input source and runs the dump against it.
pub fn run(config: &LoadConfig, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    log::debug!("Loading game with {:?}", config);
    match config.source.open() {
        Ok(reader) => run_with(reader, config, out, err),
        Err(e) => fail(LoadError::Io(e), err),
    }
}

/// Loads a game from `reader`, writes the hands then the rounds to `out`
/// and returns the exit status. Errors go to `err`.
pub fn run_with<R: BufRead>(reader: R, config: &LoadConfig, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    match dump(reader, config, out) {
        Ok(()) => SUCCESS,
        Err(e) => fail(e, err),
    }
}

fn dump<R: BufRead>(reader: R, config: &LoadConfig, out: &mut dyn Write) -> Result<(), LoadError> {
    let g = Game::load(reader, config)?;
    if !g.is_complete() {
        log::info!("Input did not fill every hand, round and winner");
    }

    report::write_hands(&g, out)?;
    report::write_rounds(&g, out)?;
    out.flush()?;
    Ok(())
}

fn fail(e: LoadError, err: &mut dyn Write) -> i32 {
    let _ = writeln!(err, "{}", e);
    ERROR
}

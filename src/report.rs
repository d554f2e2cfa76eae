use std::io::{self, Write};
use crate::Game;
use crate::cards::Card;

fn slot(card: &Option<Card>) -> String {
    match card {
        Some(card) => card.to_string(),
        None => "? - ?".to_string(),
    }
}

/// Writes every player's hand, one card per line, numbered from 1.
pub fn write_hands<W: Write + ?Sized>(game: &Game, out: &mut W) -> io::Result<()> {
    for (i, player) in game.players().iter().enumerate() {
        writeln!(out, "Player : {}", i + 1)?;
        for (j, card) in player.cards().iter().enumerate() {
            writeln!(out, "\t Card {} : {}", j + 1, slot(card))?;
        }
    }
    Ok(())
}

/// Writes the cards thrown in each round followed by the recorded winner.
pub fn write_rounds<W: Write + ?Sized>(game: &Game, out: &mut W) -> io::Result<()> {
    for (i, round) in game.rounds().iter().enumerate() {
        writeln!(out, "Round : {}", i + 1)?;
        for (j, card) in round.cards().iter().enumerate() {
            writeln!(out, "\t Player {} Throws : {}", j + 1, slot(card))?;
        }
        match round.winner() {
            Some(winner) => writeln!(out, "\n\t This Round Winner is -> Player : {}", winner + 1)?,
            None => writeln!(out, "\n\t This Round Winner is -> Player : ?")?,
        }
    }
    Ok(())
}

pub fn print_hands(game: &Game) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_hands(game, &mut out)?;
    out.flush()
}

pub fn print_rounds(game: &Game) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_rounds(game, &mut out)?;
    out.flush()
}

/// The full dump (hands, then rounds) as a string.
pub fn render(game: &Game) -> io::Result<String> {
    let mut buf = Vec::new();
    write_hands(game, &mut buf)?;
    write_rounds(game, &mut buf)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

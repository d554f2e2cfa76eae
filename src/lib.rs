//! This crate reads a recorded deal of the four person card game [29](https://www.pagat.com/jass/29.html)
//! and dumps it back out for debugging. It does not play the game: no rules, no trick resolution, no scoring.
//!
//! The input is a whitespace separated stream of `<index> <token>` pairs. The length of the token decides
//! what the pair describes:
//!
//! * 16 characters: the eight cards dealt to player `index`, as packed (suit, digit) pairs
//! * 8 characters: the four cards thrown in round `index`, one per player
//! * 1 character: the player (0 based) who won round `index`
//!
//! Pairs with a token of any other length are ignored.
//!
//! ## Example usage
//! ```
//! extern crate twentynine;
//!
//! use twentynine::{Game, LoadConfig, Suit};
//!
//! let input = "0 S1H2D3C4S5H6D7C8\n3 S1H2D3C4\n5 2\n";
//! let g = Game::load(input.as_bytes(), &LoadConfig::default()).unwrap();
//!
//! let first = g.player(0).unwrap().cards()[0].unwrap();
//! assert_eq!(first.suit(), Suit::Spade);
//! assert_eq!(first.rank(), 1);
//! assert_eq!(g.round(5).unwrap().winner(), Some(2));
//!
//! let dump = twentynine::report::render(&g).unwrap();
//! assert!(dump.contains("\t Card 1 : S - 1"));
//! ```

mod cards;
mod config;
mod decoder;
mod record;
mod result;
pub mod cli;
pub mod report;

#[cfg(test)]
mod tests;

use std::io::BufRead;
use serde::{Serialize, Deserialize};
pub use cards::*;
pub use config::*;
pub use decoder::*;
pub use record::*;
pub use result::*;

pub const PLAYER_COUNT: usize = 4;
pub const ROUND_COUNT: usize = 8;
/// Cards dealt to each player.
pub const HAND_SIZE: usize = 8;
/// Cards thrown per round, one per player.
pub const TRICK_SIZE: usize = PLAYER_COUNT;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    hand: [Option<Card>; HAND_SIZE],
}

impl Player {
    /// Cards in draw order; `None` for a slot the input never filled.
    pub fn cards(&self) -> &[Option<Card>; HAND_SIZE] {
        &self.hand
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRound")]
pub struct Round {
    thrown: [Option<Card>; TRICK_SIZE],
    winner: Option<usize>,
}

#[derive(Deserialize)]
struct RawRound {
    thrown: [Option<Card>; TRICK_SIZE],
    winner: Option<usize>,
}

impl TryFrom<RawRound> for Round {
    type Error = DecodeError;

    fn try_from(raw: RawRound) -> Result<Round, DecodeError> {
        if let Some(w) = raw.winner {
            if w >= PLAYER_COUNT {
                return Err(DecodeError::InvalidIndex { kind: RecordKind::Winner, index: w.to_string() });
            }
        }
        Ok(Round { thrown: raw.thrown, winner: raw.winner })
    }
}

impl Round {
    /// Cards thrown this round, indexed by player.
    pub fn cards(&self) -> &[Option<Card>; TRICK_SIZE] {
        &self.thrown
    }

    /// Winner as recorded in the input. Never derived from the cards.
    pub fn winner(&self) -> Option<usize> {
        self.winner
    }
}

/// A whole recorded deal: four hands, eight rounds and the trump suit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    players: [Player; PLAYER_COUNT],
    rounds: [Round; ROUND_COUNT],
    trump: Option<Suit>,
}

impl Game {
    pub fn new() -> Game {
        Game::default()
    }

    /// Reads pairs from `reader` until end of input and applies every record.
    ///
    /// In [`LoadMode::Lenient`](enum.LoadMode.html) a malformed record is logged and skipped; in
    /// `LoadMode::Strict` it aborts the load. I/O errors always abort.
    pub fn load<R: BufRead>(reader: R, config: &LoadConfig) -> Result<Game, LoadError> {
        let mut game = Game::new();
        let mut decoder = Decoder::new(reader);
        let mut applied = 0;
        let mut skipped = 0;

        for item in decoder.by_ref() {
            match item {
                Ok(record) => {
                    game.apply(record);
                    applied += 1;
                },
                Err(LoadError::Decode { pair, source }) if config.mode == LoadMode::Lenient => {
                    log::warn!("Skipping malformed record #{}: {}", pair, source);
                    skipped += 1;
                },
                Err(e) => return Err(e),
            }
        }

        log::info!("Read {} pair(s): {} record(s) applied, {} skipped",
            decoder.pairs_read(), applied, skipped);
        Ok(game)
    }

    /// Writes one decoded record into the game. Later records overwrite earlier ones.
    pub fn apply(&mut self, record: Record) {
        match record {
            Record::PlayerCards { player, cards } => self.players[player].hand = cards.map(Some),
            Record::RoundCards { round, cards } => self.rounds[round].thrown = cards.map(Some),
            Record::RoundWinner { round, winner } => self.rounds[round].winner = Some(winner),
        }
    }

    pub fn set_player_cards(&mut self, player: usize, cards: [Card; HAND_SIZE]) -> Result<(), DecodeError> {
        check_index(RecordKind::Player, player, PLAYER_COUNT)?;
        self.apply(Record::PlayerCards { player, cards });
        Ok(())
    }

    pub fn set_round_cards(&mut self, round: usize, cards: [Card; TRICK_SIZE]) -> Result<(), DecodeError> {
        check_index(RecordKind::Round, round, ROUND_COUNT)?;
        self.apply(Record::RoundCards { round, cards });
        Ok(())
    }

    pub fn set_round_winner(&mut self, round: usize, winner: usize) -> Result<(), DecodeError> {
        check_index(RecordKind::Winner, round, ROUND_COUNT)?;
        if winner >= PLAYER_COUNT {
            return Err(DecodeError::InvalidIndex { kind: RecordKind::Winner, index: winner.to_string() });
        }
        self.apply(Record::RoundWinner { round, winner });
        Ok(())
    }

    /// Stores the trump suit. Nothing in the crate reads it back except [`trump`](#method.trump).
    pub fn set_trump(&mut self, suit: Suit) {
        self.trump = Some(suit);
    }

    pub fn trump(&self) -> Option<Suit> {
        self.trump
    }

    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn round(&self, index: usize) -> Option<&Round> {
        self.rounds.get(index)
    }

    pub fn players(&self) -> &[Player; PLAYER_COUNT] {
        &self.players
    }

    pub fn rounds(&self) -> &[Round; ROUND_COUNT] {
        &self.rounds
    }

    /// True once every hand slot, every thrown card and every winner has been read.
    pub fn is_complete(&self) -> bool {
        self.players.iter().all(|p| p.hand.iter().all(Option::is_some))
            && self.rounds.iter().all(|r| r.winner.is_some() && r.thrown.iter().all(Option::is_some))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Game, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn check_index(kind: RecordKind, index: usize, bound: usize) -> Result<(), DecodeError> {
    if index >= bound {
        return Err(DecodeError::InvalidIndex { kind, index: index.to_string() });
    }
    Ok(())
}

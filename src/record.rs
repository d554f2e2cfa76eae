use crate::cards::{Card, decode_cards};
use crate::result::{DecodeError, RecordKind};
use crate::{HAND_SIZE, PLAYER_COUNT, ROUND_COUNT, TRICK_SIZE};

/// Token length of a player's hand: eight packed (suit, digit) pairs.
pub const PLAYER_TOKEN_LEN: usize = 2 * HAND_SIZE;
/// Token length of a round's thrown cards: four packed (suit, digit) pairs.
pub const ROUND_TOKEN_LEN: usize = 2 * TRICK_SIZE;
/// Token length of a round winner: a single digit.
pub const WINNER_TOKEN_LEN: usize = 1;

/// One decoded `<index> <token>` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    PlayerCards { player: usize, cards: [Card; HAND_SIZE] },
    RoundCards { round: usize, cards: [Card; TRICK_SIZE] },
    RoundWinner { round: usize, winner: usize },
}

impl Record {
    /// Decodes one pair. The record kind is picked purely from the token's
    /// length; a token of any other length yields `Ok(None)`.
    pub fn decode(index: &str, token: &str) -> Result<Option<Record>, DecodeError> {
        let record = match token.chars().count() {
            PLAYER_TOKEN_LEN => Record::PlayerCards {
                player: parse_index(RecordKind::Player, index, PLAYER_COUNT)?,
                cards: decode_cards(token)?,
            },
            ROUND_TOKEN_LEN => Record::RoundCards {
                round: parse_index(RecordKind::Round, index, ROUND_COUNT)?,
                cards: decode_cards(token)?,
            },
            WINNER_TOKEN_LEN => Record::RoundWinner {
                round: parse_index(RecordKind::Winner, index, ROUND_COUNT)?,
                winner: parse_winner(token)?,
            },
            _ => return Ok(None),
        };
        Ok(Some(record))
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            Record::PlayerCards { .. } => RecordKind::Player,
            Record::RoundCards { .. } => RecordKind::Round,
            Record::RoundWinner { .. } => RecordKind::Winner,
        }
    }

    /// The player or round index the record targets.
    pub fn index(&self) -> usize {
        match self {
            Record::PlayerCards { player, .. } => *player,
            Record::RoundCards { round, .. } | Record::RoundWinner { round, .. } => *round,
        }
    }
}

fn parse_index(kind: RecordKind, index: &str, bound: usize) -> Result<usize, DecodeError> {
    match index.parse::<i64>() {
        Ok(i) if i >= 0 && (i as u64) < bound as u64 => Ok(i as usize),
        _ => Err(DecodeError::InvalidIndex { kind, index: index.to_string() }),
    }
}

fn parse_winner(token: &str) -> Result<usize, DecodeError> {
    let c = token.chars().next().unwrap_or(' ');
    match c.to_digit(10) {
        Some(w) if (w as usize) < PLAYER_COUNT => Ok(w as usize),
        _ => Err(DecodeError::InvalidWinner(c)),
    }
}

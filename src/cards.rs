use std::fmt;
use serde::{Serialize, Deserialize};
use crate::result::DecodeError;

/// Highest rank a card can carry; ranks are single decimal digits.
pub const MAX_RANK: u8 = 9;

/// Card type. The four French suits get names, anything else read from the
/// input is carried through untouched. Serialized as its single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "char", into = "char")]
pub enum Suit {
    Club,
    Diamond,
    Heart,
    Spade,
    Other(char),
}

impl Suit {
    pub fn from_char(c: char) -> Suit {
        match c {
            'C' => Suit::Club,
            'D' => Suit::Diamond,
            'H' => Suit::Heart,
            'S' => Suit::Spade,
            other => Suit::Other(other),
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Suit::Club => 'C',
            Suit::Diamond => 'D',
            Suit::Heart => 'H',
            Suit::Spade => 'S',
            Suit::Other(c) => *c,
        }
    }
}

impl From<char> for Suit {
    fn from(c: char) -> Suit {
        Suit::from_char(c)
    }
}

impl From<Suit> for char {
    fn from(suit: Suit) -> char {
        suit.as_char()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single card: a suit and a rank in `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    suit: Suit,
    rank: u8,
}

#[derive(Deserialize)]
struct RawCard {
    suit: Suit,
    rank: u8,
}

impl TryFrom<RawCard> for Card {
    type Error = DecodeError;

    fn try_from(raw: RawCard) -> Result<Card, DecodeError> {
        Card::new(raw.suit, raw.rank)
    }
}

impl Card {
    pub fn new(suit: Suit, rank: u8) -> Result<Card, DecodeError> {
        if rank > MAX_RANK {
            return Err(DecodeError::RankOutOfRange(rank));
        }
        Ok(Card { suit, rank })
    }

    /// Builds a card from its two-character token form, e.g. `('S', '7')`.
    pub fn from_chars(suit: char, rank: char) -> Result<Card, DecodeError> {
        let value = rank.to_digit(10).ok_or(DecodeError::InvalidRank(rank))?;
        Ok(Card { suit: Suit::from_char(suit), rank: value as u8 })
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} - {}", self.suit, self.rank)
    }
}

/// Decodes a packed token of `N` (suit, digit) pairs into `N` cards, in order.
///
/// The token must be exactly `2 * N` characters long.
pub fn decode_cards<const N: usize>(token: &str) -> Result<[Card; N], DecodeError> {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() != 2 * N {
        return Err(DecodeError::TokenLength { expected: 2 * N, actual: chars.len() });
    }

    let mut cards = [Card { suit: Suit::Other(' '), rank: 0 }; N];
    for (slot, pair) in cards.iter_mut().zip(chars.chunks_exact(2)) {
        *slot = Card::from_chars(pair[0], pair[1])?;
    }
    Ok(cards)
}

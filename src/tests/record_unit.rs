use super::super::cards::{Card, Suit};
use super::super::record::Record;
use super::super::result::{DecodeError, RecordKind};
use ntest::test_case;

fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank).unwrap()
}

#[test]
fn player_record_from_sixteen_chars() {
    let record = Record::decode("0", "S1H2D3C4S5H6D7C8").unwrap().unwrap();
    assert_eq!(record, Record::PlayerCards {
        player: 0,
        cards: [
            card(Suit::Spade, 1),
            card(Suit::Heart, 2),
            card(Suit::Diamond, 3),
            card(Suit::Club, 4),
            card(Suit::Spade, 5),
            card(Suit::Heart, 6),
            card(Suit::Diamond, 7),
            card(Suit::Club, 8),
        ],
    });
    assert_eq!(record.kind(), RecordKind::Player);
    assert_eq!(record.index(), 0);
}

#[test]
fn round_record_from_eight_chars() {
    let record = Record::decode("3", "S1H2D3C4").unwrap().unwrap();
    assert_eq!(record, Record::RoundCards {
        round: 3,
        cards: [card(Suit::Spade, 1), card(Suit::Heart, 2), card(Suit::Diamond, 3), card(Suit::Club, 4)],
    });
    assert_eq!(record.kind(), RecordKind::Round);
}

#[test]
fn winner_record_from_one_char() {
    let record = Record::decode("5", "2").unwrap().unwrap();
    assert_eq!(record, Record::RoundWinner { round: 5, winner: 2 });
    assert_eq!(record.kind(), RecordKind::Winner);
    assert_eq!(record.index(), 5);
}

#[test_case("")]
#[test_case("S1")]
#[test_case("S1H")]
#[test_case("S1H2D3")]
#[test_case("S1H2D3C4S5")]
#[test_case("S1H2D3C4S5H6D7C8S9")]
fn other_lengths_ignored(token: &str) {
    assert_eq!(Record::decode("0", token), Ok(None));
}

#[test]
fn ignored_length_does_not_check_index() {
    assert_eq!(Record::decode("banana", "S1H2D3"), Ok(None));
}

#[test_case("4")]
#[test_case("-1")]
#[test_case("x")]
fn player_index_out_of_range(index: &str) {
    assert_eq!(
        Record::decode(index, "S1H2D3C4S5H6D7C8"),
        Err(DecodeError::InvalidIndex { kind: RecordKind::Player, index: index.to_string() })
    );
}

#[test_case("7", true)]
#[test_case("8", false)]
#[test_case("99999999999999999999", false)]
fn round_index_bounds(index: &str, ok: bool) {
    assert_eq!(Record::decode(index, "S1H2D3C4").is_ok(), ok);
    assert_eq!(Record::decode(index, "1").is_ok(), ok);
}

#[test_case('4')]
#[test_case('9')]
#[test_case('S')]
fn winner_must_be_player_index(winner: char) {
    assert_eq!(
        Record::decode("0", &winner.to_string()),
        Err(DecodeError::InvalidWinner(winner))
    );
}

#[test]
fn bad_rank_in_round_record() {
    assert_eq!(Record::decode("1", "S1H2DDC4"), Err(DecodeError::InvalidRank('D')));
}

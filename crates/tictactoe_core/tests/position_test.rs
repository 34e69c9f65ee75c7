//! Tests for named board positions.

use tictactoe_core::Position;

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_parse_index_and_label() {
    assert_eq!(Position::parse("4"), Some(Position::Center));
    assert_eq!(Position::parse(" center "), Some(Position::Center));
    assert_eq!(Position::parse("top left"), Some(Position::TopLeft));
    assert_eq!(Position::parse("Bottom-Right"), Some(Position::BottomRight));
    assert_eq!(Position::parse("middle_right"), Some(Position::MiddleRight));
    assert_eq!(Position::parse("9"), None);
    assert_eq!(Position::parse("left"), None);
    assert_eq!(Position::parse(""), None);
}


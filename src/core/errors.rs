use thiserror::Error;

/// Every way caller input can be rejected. All of these are detected
/// synchronously before any scoring work happens; an operation either
/// returns a complete result or fails with one of these.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum CribbageError {
    #[error("Card code must be exactly 2 characters like '5C' or 'QH', got {0:?}")]
    InvalidCardFormat(String),

    #[error("Invalid rank character {0:?}, expected one of A23456789TJQK")]
    InvalidRank(char),

    #[error("Invalid suit character {0:?}, expected one of CDHS")]
    InvalidSuit(char),

    #[error("A cribbage hand must have 4 or 5 cards, got {0}")]
    InvalidHandSize(usize),

    #[error("Expected exactly {expected} cards, got {got}")]
    InvalidInputSize { expected: usize, got: usize },
}

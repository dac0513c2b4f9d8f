//! Core cribbage primitives: card parsing, decks, combination
//! iteration, and hand scoring.

/// Module with the rank, suit, and card types and code parsing.
mod card;
/// Export `Card`, `Suit`, and `Value`
pub use self::card::{Card, Suit, Value};

/// Module with the caller-input error taxonomy.
mod errors;
/// Export `CribbageError`
pub use self::errors::CribbageError;

/// Module with the 52 card deck and restricted decks.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// Module with the combination iterator used by the searches.
mod card_iter;
/// Export `CardIter`
pub use self::card_iter::CardIter;

/// Module with fifteens/pairs/runs/flush/nobs scoring.
mod score;
/// Suit-sensitive scoring pieces shared with the crib analyzer.
pub(crate) use self::score::{flush_points, nobs_points};
/// Export the scoring functions and `ScoreBreakdown`
pub use self::score::{
    score_breakdown, score_core, score_core_values, score_fifteens, score_hand, score_pairs,
    score_runs, ScoreBreakdown,
};

//! Expected-value analysis over cribbage discards: starter statistics
//! for a chosen keep, crib statistics for a discard, and the full
//! search over every keep from a six card deal.

/// Module evaluating every possible starter for a fixed keep.
mod starter;
/// Export `starter_outcome_stats` and its result types
pub use self::starter::{starter_outcome_stats, StarterOutcome, StarterStats};

/// Module evaluating the expected crib value of a discard.
mod crib;
/// Export `crib_outcome_stats` and `CribStats`
pub use self::crib::{crib_outcome_stats, CribStats};

/// Module with the exhaustive keep/discard search.
mod keep;
/// Export `best_keep_from_six` and its result types
pub use self::keep::{best_keep_from_six, rank_equivalent, BestKeepResult, KeepEvaluation};

//! rs_cribbage is a library to help with cribbage scoring and discard
//! decisions.
//!
//! The `core` module holds the card primitives and the full hand
//! scorer: fifteens, pairs, runs, flush, and his nobs, with the
//! stricter crib flush rule. The `analysis` module builds on top of it
//! with exhaustive expected-value searches: how every possible starter
//! treats a keep, how every (starter, opponent discard) combination
//! treats a crib discard, and which four of six dealt cards maximize
//! the combined expected value.
//!
//! Everything is deterministic and stateless: the same cards always
//! produce the same numbers, and the searches enumerate rather than
//! sample. The keep search with crib evaluation enabled is the hot
//! path at roughly 675k five card scorings per call; it fans out over
//! the rayon pool.
//!
//! ```
//! use rs_cribbage::analysis::best_keep_from_six;
//! use rs_cribbage::core::{score_hand, Card};
//!
//! // The best possible cribbage hand.
//! let cards = Card::from_codes(&["5C", "5D", "5H", "JS", "5S"]).unwrap();
//! assert_eq!(29, score_hand(&cards, false).unwrap());
//!
//! // Which four of six dealt cards to keep, hand value only.
//! let six = Card::from_codes(&["5C", "5D", "6H", "7S", "QC", "KD"]).unwrap();
//! let result = best_keep_from_six(&six, false, true, false).unwrap();
//! assert_eq!(15, result.keeps.len());
//! ```

/// Core module with cards, decks, and hand scoring.
pub mod core;

/// Analysis module with starter, crib, and keep searches.
pub mod analysis;

use crate::core::{score_hand, Card, CribbageError, Deck};

/// Outcome of one specific starter card for a fixed keep.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarterOutcome {
    /// Full 5 card score with this starter.
    pub total: u32,
    /// Change from the 4 card base score. Usually non-negative, but a
    /// crib flush can be voided by a non-matching starter.
    pub delta: i64,
}

/// How every possible starter card plays out for a fixed 4 card hand.
///
/// This answers "how much can the cut add to this keep, and how swingy
/// is it?". The mapping preserves candidate enumeration order so the
/// totals double as a score distribution for display.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct StarterStats {
    /// Score of the 4 cards alone, with no starter.
    pub base_score: u32,
    /// Per starter totals and deltas, in candidate enumeration order.
    pub by_starter: Vec<(Card, StarterOutcome)>,
    /// Lowest 5 card total over all candidates.
    pub min_total: u32,
    /// Highest 5 card total over all candidates.
    pub max_total: u32,
    /// Arithmetic mean of the 5 card totals.
    pub avg_total: f64,
    /// Arithmetic mean of the deltas from the base score.
    pub avg_delta: f64,
}

impl StarterStats {
    /// The raw distribution of 5 card totals across the candidate
    /// starters, in enumeration order.
    pub fn totals(&self) -> Vec<u32> {
        self.by_starter.iter().map(|(_, o)| o.total).collect()
    }
}

/// For a fixed 4 card hand, score every possible starter and aggregate.
///
/// Candidate starters are `deck` (the full 52 when `None`) minus the
/// hand's own cards; with the default deck and a duplicate-free hand
/// that is exactly 48 candidates.
///
/// # Arguments
/// * `hand` - Exactly 4 cards.
/// * `is_crib` - Whether the hand is a crib (affects the flush rule).
/// * `deck` - Optional restricted deck of possible starters.
///
/// # Errors
/// `CribbageError::InvalidInputSize` unless `hand` has exactly 4 cards.
///
/// # Examples
///
/// ```
/// use rs_cribbage::analysis::starter_outcome_stats;
/// use rs_cribbage::core::Card;
///
/// let hand = Card::from_codes(&["5C", "5D", "6H", "7S"]).unwrap();
/// let stats = starter_outcome_stats(&hand, false, None).unwrap();
/// assert_eq!(48, stats.by_starter.len());
/// assert!(stats.avg_total >= stats.base_score as f64);
/// ```
pub fn starter_outcome_stats(
    hand: &[Card],
    is_crib: bool,
    deck: Option<&Deck>,
) -> Result<StarterStats, CribbageError> {
    if hand.len() != 4 {
        return Err(CribbageError::InvalidInputSize {
            expected: 4,
            got: hand.len(),
        });
    }

    let base_score = score_hand(hand, is_crib)?;

    let default_deck;
    let deck = match deck {
        Some(d) => d,
        None => {
            default_deck = Deck::default();
            &default_deck
        }
    };
    let candidates = deck.without(hand);

    let mut by_starter = Vec::with_capacity(candidates.len());
    let mut five = [hand[0], hand[1], hand[2], hand[3], hand[0]];
    let mut sum_total: u64 = 0;
    let mut min_total = u32::MAX;
    let mut max_total = 0u32;

    for &starter in candidates.cards() {
        five[4] = starter;
        let total = score_hand(&five, is_crib)?;
        let delta = i64::from(total) - i64::from(base_score);
        sum_total += u64::from(total);
        min_total = min_total.min(total);
        max_total = max_total.max(total);
        by_starter.push((starter, StarterOutcome { total, delta }));
    }

    let stats = if by_starter.is_empty() {
        // Nothing to cut: fall back to the base score for the extremes.
        StarterStats {
            base_score,
            by_starter,
            min_total: base_score,
            max_total: base_score,
            avg_total: 0.0,
            avg_delta: 0.0,
        }
    } else {
        let n = by_starter.len() as f64;
        let avg_total = sum_total as f64 / n;
        StarterStats {
            base_score,
            by_starter,
            min_total,
            max_total,
            avg_total,
            avg_delta: avg_total - base_score as f64,
        }
    };

    tracing::debug!(
        candidates = stats.by_starter.len(),
        base_score,
        avg_total = stats.avg_total,
        "starter outcome stats computed"
    );
    Ok(stats)
}

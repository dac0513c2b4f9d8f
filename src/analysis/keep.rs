use crate::analysis::crib::{crib_outcome_stats, CribStats};
use crate::analysis::starter::{starter_outcome_stats, StarterStats};
use crate::core::{Card, CardIter, CribbageError, Deck, Value};
use rayon::prelude::*;

/// One candidate keep/discard split of a six card deal, fully evaluated.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct KeepEvaluation {
    /// The 4 cards kept in hand.
    pub keep: Vec<Card>,
    /// The 2 cards sent to the crib.
    pub discard: Vec<Card>,
    /// Starter statistics for the kept hand.
    pub stats: StarterStats,
    /// Crib statistics for the discard, when crib evaluation was
    /// requested.
    pub crib_stats: Option<CribStats>,
    /// Hand average total plus (or minus) the crib average.
    pub combined_value: f64,
}

/// The winning keep plus every evaluated candidate, for display.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct BestKeepResult {
    /// The selected keep.
    pub best: KeepEvaluation,
    /// All 15 candidate keeps, in enumeration order.
    pub keeps: Vec<KeepEvaluation>,
}

/// Do two hands hold the same ranks, ignoring suits?
///
/// Useful for judging a player's chosen keep against the optimum: up to
/// suits, `["5C", "5D", "6H", "7S"]` and `["5H", "5S", "6C", "7D"]` are
/// the same keep for everything except flush and nobs chances.
pub fn rank_equivalent(a: &[Card], b: &[Card]) -> bool {
    let mut ra: Vec<Value> = a.iter().map(|c| c.value).collect();
    let mut rb: Vec<Value> = b.iter().map(|c| c.value).collect();
    ra.sort_unstable();
    rb.sort_unstable();
    ra == rb
}

/// Search all 15 four card keeps of a six card deal for the best one.
///
/// Every keep gets starter statistics against the deck minus the six
/// dealt cards. With `include_crib` the complementary discard also gets
/// crib statistics, and the combined value is the hand average plus the
/// crib average when the crib is ours, minus it when it is the
/// opponent's. Without `include_crib` only hand averages are compared,
/// which skips the dominant cost entirely.
///
/// Selection maximizes the combined value; exact ties prefer the higher
/// hand `max_total`, and any remaining tie keeps the first candidate in
/// enumeration order.
///
/// The 15 evaluations are independent and run on the rayon pool; with
/// crib evaluation enabled this is roughly 675k five card scorings.
///
/// # Errors
/// `CribbageError::InvalidInputSize` unless `six` has exactly 6 cards.
///
/// # Examples
///
/// ```
/// use rs_cribbage::analysis::best_keep_from_six;
/// use rs_cribbage::core::Card;
///
/// let six = Card::from_codes(&["5C", "5D", "6H", "7S", "QC", "KD"]).unwrap();
/// let result = best_keep_from_six(&six, false, true, false).unwrap();
/// assert_eq!(15, result.keeps.len());
/// assert_eq!(4, result.best.keep.len());
/// ```
pub fn best_keep_from_six(
    six: &[Card],
    is_crib: bool,
    my_crib: bool,
    include_crib: bool,
) -> Result<BestKeepResult, CribbageError> {
    if six.len() != 6 {
        return Err(CribbageError::InvalidInputSize {
            expected: 6,
            got: six.len(),
        });
    }

    let deck = Deck::default().without(six);
    let candidates: Vec<Vec<Card>> = CardIter::new(six, 4).collect();

    tracing::debug!(
        include_crib,
        my_crib,
        is_crib,
        "evaluating {} candidate keeps",
        candidates.len()
    );

    let keeps: Vec<KeepEvaluation> = candidates
        .into_par_iter()
        .map(|keep| {
            let discard: Vec<Card> = six.iter().copied().filter(|c| !keep.contains(c)).collect();
            let stats = starter_outcome_stats(&keep, is_crib, Some(&deck))?;

            let (crib_stats, combined_value) = if include_crib {
                let crib_stats = crib_outcome_stats(&discard, None, Some(six))?;
                let contribution = if my_crib {
                    crib_stats.avg_score
                } else {
                    -crib_stats.avg_score
                };
                (Some(crib_stats), stats.avg_total + contribution)
            } else {
                (None, stats.avg_total)
            };

            Ok(KeepEvaluation {
                keep,
                discard,
                stats,
                crib_stats,
                combined_value,
            })
        })
        .collect::<Result<_, CribbageError>>()?;

    // Selection is sequential so ties resolve by enumeration order.
    let mut best_idx = 0;
    for (idx, candidate) in keeps.iter().enumerate().skip(1) {
        let best = &keeps[best_idx];
        if candidate.combined_value > best.combined_value
            || (candidate.combined_value == best.combined_value
                && candidate.stats.max_total > best.stats.max_total)
        {
            best_idx = idx;
        }
    }

    let best = keeps[best_idx].clone();
    tracing::debug!(
        best_keep = %best
            .keep
            .iter()
            .map(|c| c.code())
            .collect::<Vec<_>>()
            .join(","),
        combined_value = best.combined_value,
        "keep search complete"
    );

    Ok(BestKeepResult { best, keeps })
}

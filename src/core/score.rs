use crate::core::card::{Card, Value};
use crate::core::errors::CribbageError;

/// The per-category points of one scored hand.
///
/// `fifteens`, `pairs`, and `runs` depend only on ranks; `flush` and
/// `nobs` are the only suit-sensitive categories and only apply when
/// scoring a full 4 or 5 card hand.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    /// Two points per distinct subset of cards summing to fifteen.
    pub fifteens: u32,
    /// Two points per same-rank pair (6 for trips, 12 for quads).
    pub pairs: u32,
    /// Points from maximal runs of 3 or more consecutive ranks.
    pub runs: u32,
    /// Flush points (0, 4, or 5 depending on crib mode and the starter).
    pub flush: u32,
    /// One point for a jack in hand matching the starter suit.
    pub nobs: u32,
}

impl ScoreBreakdown {
    /// Sum of every category.
    pub fn total(&self) -> u32 {
        self.fifteens + self.pairs + self.runs + self.flush + self.nobs
    }
}

/// Points from fifteens for a group of ranks.
///
/// Every subset of two or more cards whose fifteen values sum to exactly
/// fifteen is worth two points. Subsets are enumerated with a bit mask
/// over the card indexes, so duplicated ranks still produce distinct
/// subsets. Bounded at 2^6 masks for the largest group we score.
pub fn score_fifteens(values: &[Value]) -> u32 {
    debug_assert!(values.len() <= 6);
    let mut points = 0;
    for mask in 1u32..(1 << values.len()) {
        if mask.count_ones() < 2 {
            continue;
        }
        let sum: u32 = values
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, v)| v.fifteen_value())
            .sum();
        if sum == 15 {
            points += 2;
        }
    }
    points
}

/// Points from pairs for a group of ranks.
///
/// A rank appearing `c` times contributes `c * (c - 1)` points, which is
/// two per unordered pair: a pair scores 2, trips 6, quads 12.
pub fn score_pairs(values: &[Value]) -> u32 {
    let mut counts = [0u32; 13];
    for v in values {
        counts[v.run_index() as usize] += 1;
    }
    counts.iter().map(|c| c * c.saturating_sub(1)).sum()
}

/// Points from runs for a group of ranks.
///
/// Only maximal stretches of consecutive run indexes count; a run of
/// four is scored as one run of four, never as two overlapping runs of
/// three. A duplicated rank inside a stretch multiplies the score, so
/// 4-4-5-6 is a double run worth `3 * 2 = 6`.
pub fn score_runs(values: &[Value]) -> u32 {
    let mut counts = [0u32; 13];
    for v in values {
        counts[v.run_index() as usize] += 1;
    }

    let mut points = 0;
    let mut len = 0u32;
    let mut multiplicity = 1u32;
    for count in counts.iter().chain(std::iter::once(&0)) {
        if *count > 0 {
            len += 1;
            multiplicity *= count;
        } else {
            if len >= 3 {
                points += len * multiplicity;
            }
            len = 0;
            multiplicity = 1;
        }
    }
    points
}

/// Fifteens, pairs, and runs for an arbitrary small group of ranks.
/// This is everything in cribbage scoring that ignores suits, so the
/// result is shared between any two card groups with the same rank
/// multiset.
pub fn score_core_values(values: &[Value]) -> u32 {
    score_fifteens(values) + score_pairs(values) + score_runs(values)
}

/// Fifteens, pairs, and runs for a group of 2 to 6 cards.
///
/// No flush or nobs; use [`score_hand`] for full hand scoring. The group
/// size is not validated and duplicate cards are scored as given; the
/// caller is responsible for dealing distinct cards.
pub fn score_core(cards: &[Card]) -> u32 {
    let mut values = [Value::Ace; 6];
    for (slot, card) in values.iter_mut().zip(cards.iter()) {
        *slot = card.value;
    }
    score_core_values(&values[..cards.len().min(6)])
}

/// Split a 4 or 5 card slice into the hand cards and the optional
/// starter. The starter is always the trailing card of the 5 card form.
fn split_starter(cards: &[Card]) -> Result<(&[Card], Option<Card>), CribbageError> {
    match cards.len() {
        4 => Ok((cards, None)),
        5 => Ok((&cards[..4], Some(cards[4]))),
        n => Err(CribbageError::InvalidHandSize(n)),
    }
}

/// Flush points for a 4 card hand plus optional starter.
///
/// All four hand cards must share a suit for any flush. Without a
/// starter that is worth 4. With a starter, a matching starter makes 5
/// in either mode; a non-matching starter leaves 4 for a regular hand
/// but voids the flush entirely for a crib.
pub(crate) fn flush_points(hand: &[Card], starter: Option<Card>, is_crib: bool) -> u32 {
    let suit = hand[0].suit;
    if !hand.iter().all(|c| c.suit == suit) {
        return 0;
    }
    match starter {
        None => 4,
        Some(s) if s.suit == suit => 5,
        Some(_) if is_crib => 0,
        Some(_) => 4,
    }
}

/// One point for his nobs: a jack among the hand cards whose suit
/// matches the starter. At most one such jack can exist per suit.
pub(crate) fn nobs_points(hand: &[Card], starter: Option<Card>) -> u32 {
    match starter {
        Some(s) if hand
            .iter()
            .any(|c| c.value == Value::Jack && c.suit == s.suit) =>
        {
            1
        }
        _ => 0,
    }
}

/// Score a cribbage hand, split out by category.
///
/// Pass 4 cards for a bare hand with no starter, or 5 cards where the
/// last card is the starter. `is_crib` selects the stricter crib flush
/// rule.
///
/// # Errors
/// `CribbageError::InvalidHandSize` for any other card count.
///
/// # Examples
///
/// ```
/// use rs_cribbage::core::{score_breakdown, Card};
///
/// let cards = Card::from_codes(&["5C", "5D", "5H", "JS", "5S"]).unwrap();
/// let breakdown = score_breakdown(&cards, false).unwrap();
/// assert_eq!(16, breakdown.fifteens);
/// assert_eq!(12, breakdown.pairs);
/// assert_eq!(1, breakdown.nobs);
/// assert_eq!(29, breakdown.total());
/// ```
pub fn score_breakdown(cards: &[Card], is_crib: bool) -> Result<ScoreBreakdown, CribbageError> {
    let (hand, starter) = split_starter(cards)?;

    let mut values = [Value::Ace; 5];
    for (slot, card) in values.iter_mut().zip(cards.iter()) {
        *slot = card.value;
    }
    let values = &values[..cards.len()];

    Ok(ScoreBreakdown {
        fifteens: score_fifteens(values),
        pairs: score_pairs(values),
        runs: score_runs(values),
        flush: flush_points(hand, starter, is_crib),
        nobs: nobs_points(hand, starter),
    })
}

/// Total score of a cribbage hand. Same contract as
/// [`score_breakdown`], returning only the summed points.
///
/// # Examples
///
/// ```
/// use rs_cribbage::core::{score_hand, Card};
///
/// let cards = Card::from_codes(&["7C", "8D", "9H", "TS"]).unwrap();
/// // 7 + 8 and the four card run.
/// assert_eq!(6, score_hand(&cards, false).unwrap());
/// ```
pub fn score_hand(cards: &[Card], is_crib: bool) -> Result<u32, CribbageError> {
    Ok(score_breakdown(cards, is_crib)?.total())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(codes: &[&str]) -> Vec<Card> {
        Card::from_codes(codes).unwrap()
    }

    #[test]
    fn test_perfect_hand_is_29() {
        let hand = cards(&["5C", "5D", "5H", "JS", "5S"]);
        assert_eq!(29, score_hand(&hand, false).unwrap());
    }

    #[test]
    fn test_perfect_hand_breakdown() {
        let hand = cards(&["5C", "5D", "5H", "JS", "5S"]);
        let b = score_breakdown(&hand, false).unwrap();
        // Eight fifteens: four 5-5-5 triples and four J+5.
        assert_eq!(16, b.fifteens);
        assert_eq!(12, b.pairs);
        assert_eq!(0, b.runs);
        assert_eq!(0, b.flush);
        assert_eq!(1, b.nobs);
    }

    #[test]
    fn test_score_invariant_under_hand_reorder() {
        let base = cards(&["5C", "5D", "6H", "7S", "QC"]);
        let expected = score_hand(&base, false).unwrap();

        // Rotate the four hand cards, keep the starter trailing.
        let orderings: [[&str; 5]; 3] = [
            ["5D", "6H", "7S", "5C", "QC"],
            ["7S", "5C", "5D", "6H", "QC"],
            ["6H", "7S", "5C", "5D", "QC"],
        ];
        for o in orderings {
            assert_eq!(expected, score_hand(&cards(&o), false).unwrap());
        }
    }

    #[test]
    fn test_trips_score_six_from_pairs() {
        let values: Vec<Value> = cards(&["9C", "9D", "9H", "KS"])
            .iter()
            .map(|c| c.value)
            .collect();
        assert_eq!(6, score_pairs(&values));
    }

    #[test]
    fn test_quads_score_twelve_from_pairs() {
        let values: Vec<Value> = cards(&["9C", "9D", "9H", "9S"])
            .iter()
            .map(|c| c.value)
            .collect();
        assert_eq!(12, score_pairs(&values));
    }

    #[test]
    fn test_double_run_multiplicity() {
        // 4-4-5-6 is one run of three counted twice, not two found runs.
        let values: Vec<Value> = cards(&["4C", "4D", "5H", "6S"])
            .iter()
            .map(|c| c.value)
            .collect();
        assert_eq!(6, score_runs(&values));
    }

    #[test]
    fn test_run_of_four_not_double_counted() {
        let values: Vec<Value> = cards(&["4C", "5D", "6H", "7S"])
            .iter()
            .map(|c| c.value)
            .collect();
        assert_eq!(4, score_runs(&values));
    }

    #[test]
    fn test_run_shorter_than_three_scores_zero() {
        let values: Vec<Value> = cards(&["4C", "5D", "9H", "KS"])
            .iter()
            .map(|c| c.value)
            .collect();
        assert_eq!(0, score_runs(&values));
    }

    #[test]
    fn test_run_spans_face_cards() {
        let values: Vec<Value> = cards(&["TC", "JD", "QH", "KS"])
            .iter()
            .map(|c| c.value)
            .collect();
        assert_eq!(4, score_runs(&values));
    }

    #[test]
    fn test_fifteens_with_duplicate_ranks() {
        // 5+T twice, 5+J twice: four fifteens.
        let values: Vec<Value> = cards(&["5C", "5D", "TH", "JS"])
            .iter()
            .map(|c| c.value)
            .collect();
        assert_eq!(8, score_fifteens(&values));
    }

    #[test]
    fn test_flush_four_cards_no_starter() {
        let hand = cards(&["2H", "6H", "9H", "KH"]);
        assert_eq!(4, score_hand(&hand, false).unwrap());
    }

    #[test]
    fn test_flush_starter_not_matching_hand() {
        let hand = cards(&["2H", "6H", "9H", "KH", "QS"]);
        assert_eq!(4, score_hand(&hand, false).unwrap());
    }

    #[test]
    fn test_flush_starter_matching_hand() {
        let hand = cards(&["2H", "6H", "9H", "KH", "QH"]);
        assert_eq!(5, score_hand(&hand, false).unwrap());
    }

    #[test]
    fn test_crib_flush_requires_all_five() {
        let four_matching = cards(&["2H", "6H", "9H", "KH", "QS"]);
        assert_eq!(0, score_hand(&four_matching, true).unwrap());

        let five_matching = cards(&["2H", "6H", "9H", "KH", "QH"]);
        assert_eq!(5, score_hand(&five_matching, true).unwrap());
    }

    #[test]
    fn test_crib_flush_four_cards_no_starter() {
        // A bare 4 card crib is still a 4 flush without a starter.
        let hand = cards(&["2H", "6H", "9H", "KH"]);
        assert_eq!(4, score_hand(&hand, true).unwrap());
    }

    #[test]
    fn test_no_flush_mixed_suits() {
        let hand = cards(&["2H", "6C", "9H", "KH", "QH"]);
        let b = score_breakdown(&hand, false).unwrap();
        assert_eq!(0, b.flush);
    }

    #[test]
    fn test_nobs() {
        let hand = cards(&["JC", "2D", "9H", "KS", "4C"]);
        let b = score_breakdown(&hand, false).unwrap();
        assert_eq!(1, b.nobs);
    }

    #[test]
    fn test_no_nobs_without_starter() {
        let hand = cards(&["JC", "2D", "9H", "KS"]);
        let b = score_breakdown(&hand, false).unwrap();
        assert_eq!(0, b.nobs);
    }

    #[test]
    fn test_no_nobs_wrong_suit() {
        let hand = cards(&["JC", "2D", "9H", "KS", "4H"]);
        let b = score_breakdown(&hand, false).unwrap();
        assert_eq!(0, b.nobs);
    }

    #[test]
    fn test_starter_jack_is_not_nobs() {
        // The jack must be among the hand cards, not the starter.
        let hand = cards(&["2C", "6D", "9H", "KS", "JC"]);
        let b = score_breakdown(&hand, false).unwrap();
        assert_eq!(0, b.nobs);
    }

    #[test]
    fn test_invalid_hand_sizes() {
        let three = cards(&["2C", "6D", "9H"]);
        assert_eq!(
            Err(CribbageError::InvalidHandSize(3)),
            score_hand(&three, false)
        );
        let six = cards(&["2C", "6D", "9H", "KS", "JC", "4D"]);
        assert_eq!(
            Err(CribbageError::InvalidHandSize(6)),
            score_hand(&six, false)
        );
    }

    #[test]
    fn test_score_core_small_groups() {
        // Core scoring works below the 4 card hand minimum.
        let pair = cards(&["8C", "7D"]);
        assert_eq!(2, score_core(&pair));
        let run = cards(&["6C", "7D", "8H"]);
        // 6+7+8 hits no fifteen but 7+8 does, plus the run of three.
        assert_eq!(5, score_core(&run));
    }

    #[test]
    fn test_score_core_values_matches_cards() {
        let hand = cards(&["4C", "4D", "5H", "6S", "6C"]);
        let values: Vec<Value> = hand.iter().map(|c| c.value).collect();
        assert_eq!(score_core(&hand), score_core_values(&values));
    }

    #[test]
    fn test_duplicate_cards_scored_as_given() {
        // Physically impossible, but the scorer stays pure and scores it.
        let hand = cards(&["5C", "5C", "5C", "5C"]);
        assert!(score_hand(&hand, false).is_ok());
    }

    #[test]
    fn test_breakdown_total_matches_score_hand() {
        let hand = cards(&["4C", "4D", "5H", "6S", "5D"]);
        assert_eq!(
            score_hand(&hand, false).unwrap(),
            score_breakdown(&hand, false).unwrap().total()
        );
    }
}

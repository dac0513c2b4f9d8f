use crate::core::{flush_points, nobs_points, score_core_values, Card, CribbageError, Deck};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Expected crib value of a 2 card discard, averaged over every
/// possible starter and every possible opponent discard pair.
///
/// The global aggregates are a flat mean and extremes over every
/// individual (starter, pair) score. Starters are weighted by how many
/// pairs they leave available, not equally; with a normal deck of
/// distinct cards the two weightings coincide anyway.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct CribStats {
    /// Flat mean over every (starter, opponent pair) crib score.
    pub avg_score: f64,
    /// Lowest individual crib score seen.
    pub min_score: u32,
    /// Highest individual crib score seen.
    pub max_score: u32,
    /// Mean crib score per starter, in candidate enumeration order.
    pub by_starter: Vec<(Card, f64)>,
}

impl CribStats {
    /// The per-starter averages in enumeration order, for display as a
    /// distribution.
    pub fn starter_averages(&self) -> Vec<f64> {
        self.by_starter.iter().map(|(_, avg)| *avg).collect()
    }
}

/// Flat per-starter tallies produced by the parallel starter loop.
struct StarterTally {
    starter: Card,
    sum: u64,
    count: usize,
    min: u32,
    max: u32,
}

/// Score one five card crib: the two discards, one opponent pair, and
/// the starter. Fifteens, pairs, and runs depend only on the rank
/// multiset, so that part is memoized keyed by the sorted run indexes;
/// flush and nobs are recomputed from the suits every time.
fn score_crib_five(
    crib: &[Card; 4],
    starter: Card,
    cache: &mut FxHashMap<[u8; 5], u32>,
) -> u32 {
    let mut key = [
        crib[0].value.run_index(),
        crib[1].value.run_index(),
        crib[2].value.run_index(),
        crib[3].value.run_index(),
        starter.value.run_index(),
    ];
    key.sort_unstable();

    let core = *cache.entry(key).or_insert_with(|| {
        let values = [
            crib[0].value,
            crib[1].value,
            crib[2].value,
            crib[3].value,
            starter.value,
        ];
        score_core_values(&values)
    });

    core + flush_points(crib, Some(starter), true) + nobs_points(crib, Some(starter))
}

/// Expected crib score for a 2 card discard.
///
/// For each starter in the available deck, every unordered pair of the
/// remaining cards is tried as the opponent's discard and the 5 card
/// crib is scored in crib mode. The exclusion set is `six_cards` when
/// supplied (the caller knows its whole deal); otherwise only the two
/// discards themselves are excluded.
///
/// With a 46 card available set this is about 46 * C(45, 2) ~ 45k five
/// card scorings, so the starter loop runs on the rayon pool.
///
/// # Arguments
/// * `discard` - Exactly 2 cards headed for the crib.
/// * `deck` - Optional restricted deck of possible starters.
/// * `six_cards` - Optional full 6 card deal to exclude from opponent
///   discards and starters.
///
/// # Errors
/// `CribbageError::InvalidInputSize` unless `discard` has exactly 2
/// cards.
pub fn crib_outcome_stats(
    discard: &[Card],
    deck: Option<&Deck>,
    six_cards: Option<&[Card]>,
) -> Result<CribStats, CribbageError> {
    if discard.len() != 2 {
        return Err(CribbageError::InvalidInputSize {
            expected: 2,
            got: discard.len(),
        });
    }

    let default_deck;
    let deck = match deck {
        Some(d) => d,
        None => {
            default_deck = Deck::default();
            &default_deck
        }
    };
    let exclusion: &[Card] = six_cards.unwrap_or(discard);
    let available = deck.without(exclusion);
    let avail = available.cards();

    let tallies: Vec<StarterTally> = avail
        .par_iter()
        .map(|&starter| {
            let mut cache: FxHashMap<[u8; 5], u32> = FxHashMap::default();
            let mut tally = StarterTally {
                starter,
                sum: 0,
                count: 0,
                min: u32::MAX,
                max: 0,
            };
            // Every unordered pair of cards the opponent could have
            // tossed in, with every copy of the starter card removed.
            for i in 0..avail.len() {
                if avail[i] == starter {
                    continue;
                }
                for j in i + 1..avail.len() {
                    if avail[j] == starter {
                        continue;
                    }
                    let crib = [discard[0], discard[1], avail[i], avail[j]];
                    let score = score_crib_five(&crib, starter, &mut cache);
                    tally.sum += u64::from(score);
                    tally.count += 1;
                    tally.min = tally.min.min(score);
                    tally.max = tally.max.max(score);
                }
            }
            tally
        })
        .collect();

    let mut by_starter = Vec::with_capacity(tallies.len());
    let mut sum: u64 = 0;
    let mut count: usize = 0;
    let mut min_score = u32::MAX;
    let mut max_score = 0u32;
    for t in &tallies {
        let avg = if t.count == 0 {
            0.0
        } else {
            t.sum as f64 / t.count as f64
        };
        by_starter.push((t.starter, avg));
        sum += t.sum;
        count += t.count;
        if t.count > 0 {
            min_score = min_score.min(t.min);
            max_score = max_score.max(t.max);
        }
    }

    let stats = if count == 0 {
        CribStats {
            avg_score: 0.0,
            min_score: 0,
            max_score: 0,
            by_starter,
        }
    } else {
        CribStats {
            avg_score: sum as f64 / count as f64,
            min_score,
            max_score,
            by_starter,
        }
    };

    tracing::debug!(
        starters = stats.by_starter.len(),
        combinations = count,
        avg_score = stats.avg_score,
        "crib outcome stats computed"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score_hand;
    use approx::assert_relative_eq;

    fn cards(codes: &[&str]) -> Vec<Card> {
        Card::from_codes(codes).unwrap()
    }

    #[test]
    fn test_wrong_discard_size_rejected() {
        let discard = cards(&["5C"]);
        assert_eq!(
            Err(CribbageError::InvalidInputSize {
                expected: 2,
                got: 1
            }),
            crib_outcome_stats(&discard, None, None)
        );
    }

    #[test]
    fn test_default_exclusion_is_only_the_discard() {
        let discard = cards(&["5C", "5D"]);
        let stats = crib_outcome_stats(&discard, None, None).unwrap();
        assert_eq!(50, stats.by_starter.len());
    }

    #[test]
    fn test_six_cards_shrink_the_available_set() {
        let six = cards(&["5C", "5D", "6H", "7S", "QC", "KD"]);
        let discard = cards(&["QC", "KD"]);
        let stats = crib_outcome_stats(&discard, None, Some(&six)).unwrap();
        assert_eq!(46, stats.by_starter.len());
        for (starter, _) in &stats.by_starter {
            assert!(!six.contains(starter));
        }
    }

    #[test]
    fn test_matches_unmemoized_scoring_on_small_deck() {
        let discard = cards(&["2H", "6H"]);
        let deck: Deck = cards(&["9H", "KH", "QS", "4D", "7C"]).into();
        let stats = crib_outcome_stats(&discard, Some(&deck), None).unwrap();

        // Brute force the same enumeration through score_hand.
        let avail = cards(&["9H", "KH", "QS", "4D", "7C"]);
        let mut all_scores: Vec<u32> = Vec::new();
        for (si, &starter) in avail.iter().enumerate() {
            let mut starter_scores: Vec<u32> = Vec::new();
            for i in 0..avail.len() {
                if i == si {
                    continue;
                }
                for j in i + 1..avail.len() {
                    if j == si {
                        continue;
                    }
                    let five = [discard[0], discard[1], avail[i], avail[j], starter];
                    starter_scores.push(score_hand(&five, true).unwrap());
                }
            }
            let expected_avg = starter_scores.iter().map(|&s| f64::from(s)).sum::<f64>()
                / starter_scores.len() as f64;
            assert_eq!(starter, stats.by_starter[si].0);
            assert_relative_eq!(expected_avg, stats.by_starter[si].1);
            all_scores.extend(starter_scores);
        }

        let flat_mean =
            all_scores.iter().map(|&s| f64::from(s)).sum::<f64>() / all_scores.len() as f64;
        assert_relative_eq!(flat_mean, stats.avg_score);
        assert_eq!(*all_scores.iter().min().unwrap(), stats.min_score);
        assert_eq!(*all_scores.iter().max().unwrap(), stats.max_score);
    }

    #[test]
    fn test_global_average_is_flat_mean_with_unequal_pair_counts() {
        // A deck with a duplicated card gives different starters
        // different numbers of remaining pairs: every copy of the
        // starter is removed from the opponent pool, so the duplicated
        // card leaves fewer pairs than the others.
        let discard = cards(&["AC", "AD"]);
        let deck: Deck = cards(&["5C", "5C", "6D", "7H"]).into();
        let stats = crib_outcome_stats(&discard, Some(&deck), None).unwrap();

        let avail = cards(&["5C", "5C", "6D", "7H"]);
        let mut all_scores: Vec<u32> = Vec::new();
        let mut per_starter_counts: Vec<usize> = Vec::new();
        for &starter in &avail {
            let mut count = 0;
            for i in 0..avail.len() {
                if avail[i] == starter {
                    continue;
                }
                for j in i + 1..avail.len() {
                    if avail[j] == starter {
                        continue;
                    }
                    let five = [discard[0], discard[1], avail[i], avail[j], starter];
                    all_scores.push(score_hand(&five, true).unwrap());
                    count += 1;
                }
            }
            per_starter_counts.push(count);
        }

        // The premise: pair counts really are unequal here.
        assert!(per_starter_counts.iter().any(|&c| c != per_starter_counts[0]));

        let flat_mean =
            all_scores.iter().map(|&s| f64::from(s)).sum::<f64>() / all_scores.len() as f64;
        assert_relative_eq!(flat_mean, stats.avg_score);

        // And the flat mean differs from the equal-weight mean of the
        // per-starter averages, so the distinction is observable.
        let mean_of_avgs = stats.starter_averages().iter().sum::<f64>()
            / stats.by_starter.len() as f64;
        assert!((flat_mean - mean_of_avgs).abs() > 1e-9);
    }

    #[test]
    fn test_too_small_deck_yields_empty_stats() {
        let discard = cards(&["5C", "5D"]);
        let deck: Deck = cards(&["9H"]).into();
        let stats = crib_outcome_stats(&discard, Some(&deck), None).unwrap();
        // One starter but no opponent pairs left.
        assert_eq!(1, stats.by_starter.len());
        assert_eq!(0.0, stats.by_starter[0].1);
        assert_eq!(0.0, stats.avg_score);
        assert_eq!(0, stats.min_score);
        assert_eq!(0, stats.max_score);
    }

    #[test]
    fn test_crib_mode_flush_rule_applied() {
        // All-heart discard and deck: every crib is a 5 flush when the
        // starter matches, otherwise no flush at all in crib mode.
        let discard = cards(&["2H", "6H"]);
        let deck: Deck = cards(&["9H", "KH", "QH", "4S"]).into();
        let stats = crib_outcome_stats(&discard, Some(&deck), None).unwrap();

        // Starter 4S leaves 9H/KH/QH pairs: four hearts + spade
        // starter, crib mode, so zero flush points anywhere.
        let four_spade_avg = stats
            .by_starter
            .iter()
            .find(|(s, _)| s.code() == "4S")
            .unwrap()
            .1;
        let mut expected = Vec::new();
        let hearts = cards(&["9H", "KH", "QH"]);
        for i in 0..hearts.len() {
            for j in i + 1..hearts.len() {
                let five = [
                    discard[0],
                    discard[1],
                    hearts[i],
                    hearts[j],
                    Card::from_code("4S").unwrap(),
                ];
                expected.push(score_hand(&five, true).unwrap());
            }
        }
        let expected_avg =
            expected.iter().map(|&s| f64::from(s)).sum::<f64>() / expected.len() as f64;
        assert_relative_eq!(expected_avg, four_spade_avg);
    }
}

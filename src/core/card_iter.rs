use crate::core::card::Card;

/// Iterator over every `num_cards` sized combination of a card slice,
/// in lexicographic order of the input positions.
///
/// This drives the discard search (all 15 four card keeps from six) and
/// the opponent discard enumeration in the crib analyzer. Combinations
/// are generated from a vector of index offsets rather than recursion,
/// so the only allocation per step is the yielded vector.
#[derive(Debug)]
pub struct CardIter<'a> {
    /// All the possible cards to choose from.
    possible_cards: &'a [Card],

    /// Current index offsets into `possible_cards`.
    idx: Vec<usize>,

    /// Size of card sets requested.
    num_cards: usize,

    /// Set once the iterator has yielded its first combination.
    started: bool,
}

impl CardIter<'_> {
    /// Create a new `CardIter` yielding `num_cards` sized combinations
    /// of `possible_cards`.
    pub fn new(possible_cards: &[Card], num_cards: usize) -> CardIter<'_> {
        CardIter {
            possible_cards,
            idx: (0..num_cards).collect(),
            num_cards,
            started: false,
        }
    }

    fn emit(&self) -> Vec<Card> {
        self.idx.iter().map(|&i| self.possible_cards[i]).collect()
    }

    /// Advance the offsets to the next combination. Returns false when
    /// every combination has been produced.
    fn advance(&mut self) -> bool {
        // Find the rightmost offset that can still move forward,
        // leaving room for the offsets after it.
        let n = self.possible_cards.len();
        for level in (0..self.num_cards).rev() {
            let max_for_level = n - (self.num_cards - level);
            if self.idx[level] < max_for_level {
                self.idx[level] += 1;
                for follow in level + 1..self.num_cards {
                    self.idx[follow] = self.idx[follow - 1] + 1;
                }
                return true;
            }
        }
        false
    }
}

impl Iterator for CardIter<'_> {
    type Item = Vec<Card>;

    fn next(&mut self) -> Option<Vec<Card>> {
        if self.num_cards > self.possible_cards.len() || self.num_cards == 0 {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.emit());
        }
        if self.advance() {
            Some(self.emit())
        } else {
            None
        }
    }
}

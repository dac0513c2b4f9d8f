use crate::core::card::{Card, Suit, Value};
use rand::seq::SliceRandom;
use rand::Rng;

/// A deck of cards in a stable enumeration order: ranks ace through
/// king, each rank in club/diamond/heart/spade order. All of the
/// analyzers walk candidate starters in this order, so results are
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The remaining cards, in enumeration order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// How many cards are left.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the deck empty?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Does this deck contain the card?
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// A new deck with every card in `exclude` removed. Order of the
    /// remaining cards is preserved.
    pub fn without(&self, exclude: &[Card]) -> Deck {
        Deck {
            cards: self
                .cards
                .iter()
                .copied()
                .filter(|c| !exclude.contains(c))
                .collect(),
        }
    }

    /// Deal `n` distinct random cards from this deck using the thread
    /// local rng. The deck itself is not mutated.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_cribbage::core::Deck;
    ///
    /// let six = Deck::default().deal(6);
    /// assert_eq!(6, six.len());
    /// ```
    pub fn deal(&self, n: usize) -> Vec<Card> {
        self.sample_with_rng(n, &mut rand::thread_rng())
    }

    /// Deal `n` distinct random cards with a caller supplied rng, for
    /// repeatable tests and simulations.
    pub fn sample_with_rng<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<Card> {
        self.cards.choose_multiple(rng, n).copied().collect()
    }
}

/// Turn a vector of cards into a restricted deck, e.g. one that
/// excludes cards the caller has already seen.
impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Deck { cards }
    }
}

/// The default deck is the full 52 cards.
impl Default for Deck {
    fn default() -> Self {
        let mut cards = Vec::with_capacity(52);
        for value in Value::values() {
            for suit in Suit::suits() {
                cards.push(Card::new(value, suit));
            }
        }
        Deck { cards }
    }
}

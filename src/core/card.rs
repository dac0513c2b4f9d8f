use crate::core::errors::CribbageError;
use std::fmt;

/// Card rank, ordered ace-low as cribbage runs are counted.
///
/// The discriminant doubles as the run index: two ranks are adjacent
/// in a run exactly when their discriminants differ by one. Note that
/// this ordering is NOT the fifteen value; see [`Value::fifteen_value`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub enum Value {
    /// A
    Ace = 0,
    /// 2
    Two = 1,
    /// 3
    Three = 2,
    /// 4
    Four = 3,
    /// 5
    Five = 4,
    /// 6
    Six = 5,
    /// 7
    Seven = 6,
    /// 8
    Eight = 7,
    /// 9
    Nine = 8,
    /// T
    Ten = 9,
    /// J
    Jack = 10,
    /// Q
    Queen = 11,
    /// K
    King = 12,
}

/// Constant of all the values, in run-index order.
/// This is what `Value::values()` returns.
const VALUES: [Value; 13] = [
    Value::Ace,
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
];

impl Value {
    /// Get all of the `Value`'s that are possible, ace first.
    pub const fn values() -> [Value; 13] {
        VALUES
    }

    /// Given a character parse that char into a `Value`.
    ///
    /// # Errors
    /// `CribbageError::InvalidRank` if the char is not one of
    /// `A23456789TJQK` (lowercase accepted).
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_cribbage::core::Value;
    ///
    /// assert_eq!(Value::Ace, Value::from_char('A').unwrap());
    /// assert_eq!(Value::Ten, Value::from_char('t').unwrap());
    /// assert!(Value::from_char('1').is_err());
    /// ```
    pub fn from_char(c: char) -> Result<Self, CribbageError> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Value::Ace),
            '2' => Ok(Value::Two),
            '3' => Ok(Value::Three),
            '4' => Ok(Value::Four),
            '5' => Ok(Value::Five),
            '6' => Ok(Value::Six),
            '7' => Ok(Value::Seven),
            '8' => Ok(Value::Eight),
            '9' => Ok(Value::Nine),
            'T' => Ok(Value::Ten),
            'J' => Ok(Value::Jack),
            'Q' => Ok(Value::Queen),
            'K' => Ok(Value::King),
            _ => Err(CribbageError::InvalidRank(c)),
        }
    }

    /// Turn the value into a char for card codes.
    pub fn to_char(self) -> char {
        match self {
            Value::Ace => 'A',
            Value::Two => '2',
            Value::Three => '3',
            Value::Four => '4',
            Value::Five => '5',
            Value::Six => '6',
            Value::Seven => '7',
            Value::Eight => '8',
            Value::Nine => '9',
            Value::Ten => 'T',
            Value::Jack => 'J',
            Value::Queen => 'Q',
            Value::King => 'K',
        }
    }

    /// How much this rank contributes toward a fifteen.
    /// Aces count one, face cards count ten.
    pub const fn fifteen_value(self) -> u32 {
        match self {
            Value::Ace => 1,
            Value::Two => 2,
            Value::Three => 3,
            Value::Four => 4,
            Value::Five => 5,
            Value::Six => 6,
            Value::Seven => 7,
            Value::Eight => 8,
            Value::Nine => 9,
            Value::Ten | Value::Jack | Value::Queen | Value::King => 10,
        }
    }

    /// Position of this rank in the A..K run ordering (0 to 12).
    /// Consecutive indexes form runs.
    pub const fn run_index(self) -> u8 {
        self as u8
    }
}

/// Card suit. Unlike the rank, the suit never affects fifteens, pairs,
/// or runs; it only matters for flushes and nobs.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub enum Suit {
    /// Clubs
    Club = 0,
    /// Diamonds
    Diamond = 1,
    /// Hearts
    Heart = 2,
    /// Spades
    Spade = 3,
}

/// All of the suits.
const SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

impl Suit {
    /// Provide all the suits.
    pub const fn suits() -> [Suit; 4] {
        SUITS
    }

    /// Parse a suit character. Only `C`, `D`, `H`, `S` (either case) are
    /// accepted; anything else is rejected.
    ///
    /// # Errors
    /// `CribbageError::InvalidSuit` for an unrecognized character.
    pub fn from_char(c: char) -> Result<Self, CribbageError> {
        match c.to_ascii_uppercase() {
            'C' => Ok(Suit::Club),
            'D' => Ok(Suit::Diamond),
            'H' => Ok(Suit::Heart),
            'S' => Ok(Suit::Spade),
            _ => Err(CribbageError::InvalidSuit(c)),
        }
    }

    /// Turn the suit into a char for card codes.
    pub fn to_char(self) -> char {
        match self {
            Suit::Club => 'C',
            Suit::Diamond => 'D',
            Suit::Heart => 'H',
            Suit::Spade => 'S',
        }
    }
}

/// The main struct of this library. This is a carrier for a rank and a suit.
/// Cards are cheap, copyable values; everything in the scorer passes them
/// by value.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub struct Card {
    /// The rank of the card.
    pub value: Value,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Create a new card from a value and a suit.
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Parse a two character card code like `5C` or `qh`.
    ///
    /// The code is whitespace-trimmed and case-insensitive. The first
    /// character is the rank, the second the suit; both are validated
    /// against their closed sets.
    ///
    /// # Errors
    /// - `CribbageError::InvalidCardFormat` if there are not exactly two
    ///   characters after trimming.
    /// - `CribbageError::InvalidRank` / `CribbageError::InvalidSuit` for
    ///   unrecognized characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_cribbage::core::{Card, Suit, Value};
    ///
    /// let c = Card::from_code(" qh ").unwrap();
    /// assert_eq!(Card::new(Value::Queen, Suit::Heart), c);
    /// assert!(Card::from_code("10C").is_err());
    /// ```
    pub fn from_code(code: &str) -> Result<Self, CribbageError> {
        let trimmed = code.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(v), Some(s), None) => Ok(Card::new(Value::from_char(v)?, Suit::from_char(s)?)),
            _ => Err(CribbageError::InvalidCardFormat(trimmed.to_string())),
        }
    }

    /// Parse a slice of card codes, preserving order.
    ///
    /// # Errors
    /// The first parse failure is returned; nothing is scored on failure.
    pub fn from_codes<S: AsRef<str>>(codes: &[S]) -> Result<Vec<Card>, CribbageError> {
        codes.iter().map(|c| Card::from_code(c.as_ref())).collect()
    }

    /// The two character code for this card, e.g. `5C`.
    pub fn code(&self) -> String {
        let mut code = String::with_capacity(2);
        code.push(self.value.to_char());
        code.push(self.suit.to_char());
        code
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

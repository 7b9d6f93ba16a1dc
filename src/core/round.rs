//! The fixed eleven-round schedule.
//!
//! Round `n` deals `n + 2` cards and declares one rank wild, walking up from
//! threes to kings.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Number of rounds in a game.
pub const ROUND_COUNT: u8 = 11;

/// A round number in `1..=11`.
///
/// The only way to build one is through [`Round::new`] (or `Round::FIRST`),
/// so every `Round` in the system is in range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Round(u8);

impl Round {
    /// Round 1.
    pub const FIRST: Round = Round(1);

    /// Round 11.
    pub const LAST: Round = Round(ROUND_COUNT);

    /// Validate a 1-based round number.
    pub fn new(number: u8) -> Result<Self, GameError> {
        if (1..=ROUND_COUNT).contains(&number) {
            Ok(Self(number))
        } else {
            Err(GameError::RoundOutOfRange(number))
        }
    }

    /// The 1-based round number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Zero-based row in the score grid.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    #[must_use]
    pub const fn is_last(self) -> bool {
        self.0 == ROUND_COUNT
    }

    /// The following round, or `None` after the last.
    #[must_use]
    pub fn next(self) -> Option<Round> {
        if self.is_last() {
            None
        } else {
            Some(Round(self.0 + 1))
        }
    }

    /// Cards dealt to each player this round.
    #[must_use]
    pub const fn cards_dealt(self) -> u8 {
        self.0 + 2
    }

    /// The wild rank this round.
    #[must_use]
    pub const fn wild_card(self) -> WildCard {
        WildCard::SEQUENCE[self.index()]
    }

    /// All rounds in play order.
    pub fn all() -> impl Iterator<Item = Round> {
        (1..=ROUND_COUNT).map(Round)
    }
}

impl TryFrom<u8> for Round {
    type Error = GameError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Round::new(number)
    }
}

impl From<Round> for u8 {
    fn from(round: Round) -> Self {
        round.0
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rank declared wild for a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WildCard {
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl WildCard {
    /// Wild ranks in round order.
    pub const SEQUENCE: [WildCard; ROUND_COUNT as usize] = [
        WildCard::Three,
        WildCard::Four,
        WildCard::Five,
        WildCard::Six,
        WildCard::Seven,
        WildCard::Eight,
        WildCard::Nine,
        WildCard::Ten,
        WildCard::Jack,
        WildCard::Queen,
        WildCard::King,
    ];

    /// Short rank label as printed on the card.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            WildCard::Three => "3",
            WildCard::Four => "4",
            WildCard::Five => "5",
            WildCard::Six => "6",
            WildCard::Seven => "7",
            WildCard::Eight => "8",
            WildCard::Nine => "9",
            WildCard::Ten => "10",
            WildCard::Jack => "J",
            WildCard::Queen => "Q",
            WildCard::King => "K",
        }
    }
}

impl std::fmt::Display for WildCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Cards dealt in a 1-based round.
///
/// ```
/// use five_crowns::core::cards_dealt_for;
///
/// assert_eq!(cards_dealt_for(1), Ok(3));
/// assert_eq!(cards_dealt_for(11), Ok(13));
/// assert!(cards_dealt_for(12).is_err());
/// ```
pub fn cards_dealt_for(round: u8) -> Result<u8, GameError> {
    Round::new(round).map(Round::cards_dealt)
}

/// Wild rank in a 1-based round.
///
/// ```
/// use five_crowns::core::wild_card_for;
///
/// assert_eq!(wild_card_for(1).unwrap().label(), "3");
/// assert_eq!(wild_card_for(11).unwrap().label(), "K");
/// assert!(wild_card_for(0).is_err());
/// ```
pub fn wild_card_for(round: u8) -> Result<WildCard, GameError> {
    Round::new(round).map(Round::wild_card)
}

//! Player identification, the seating roster, and per-player storage.
//!
//! ## PlayerId
//!
//! Seat index into the roster. Seat order is also turn and deal order.
//!
//! ## Roster
//!
//! The ordered list of display names. Names are trimmed on the way in and
//! are unique at add time.
//!
//! ## PlayerMap
//!
//! One value per seated player, aligned by index with the roster. Used for
//! the rows of the score grid.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use crate::error::GameError;

/// Seat index of a player (0-based).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one, wrapping around a table of `player_count`.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        debug_assert!(player_count > 0);
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all seats for a table of `player_count` players.
    ///
    /// ```
    /// use five_crowns::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl From<u8> for PlayerId {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Ordered, de-duplicated list of player names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    names: SmallVec<[String; 8]>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of seated players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of the player in `seat`, if seated.
    #[must_use]
    pub fn name(&self, seat: PlayerId) -> Option<&str> {
        self.names.get(seat.index()).map(String::as_str)
    }

    /// Find a player by exact (case-sensitive) name.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<PlayerId> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| PlayerId(i as u8))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Iterate over (PlayerId, name) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, n)| (PlayerId(i as u8), n.as_str()))
    }

    /// Names in seat order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Append a player, trimming the name.
    ///
    /// Rejects empty names, exact duplicates, and a roster already at `max`.
    pub fn add(&mut self, name: &str, max: usize) -> Result<PlayerId, GameError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::EmptyName);
        }
        if self.names.len() >= max {
            return Err(GameError::RosterFull { max });
        }
        if self.contains(name) {
            return Err(GameError::DuplicateName(name.to_string()));
        }

        self.names.push(name.to_string());
        Ok(PlayerId((self.names.len() - 1) as u8))
    }

    /// Remove the player in `seat`; later seats shift down by one.
    pub fn remove(&mut self, seat: usize) -> Result<String, GameError> {
        self.check_seat(seat)?;
        Ok(self.names.remove(seat))
    }

    /// Replace the name in `seat`, trimming it. Uniqueness is not re-checked.
    pub fn rename(&mut self, seat: usize, name: &str) -> Result<(), GameError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::EmptyName);
        }
        self.check_seat(seat)?;
        self.names[seat] = name.to_string();
        Ok(())
    }

    fn check_seat(&self, seat: usize) -> Result<(), GameError> {
        if seat < self.names.len() {
            Ok(())
        } else {
            Err(GameError::PlayerOutOfRange {
                index: seat,
                len: self.names.len(),
            })
        }
    }
}

/// Per-player data aligned with roster seats.
///
/// Backed by an inline `SmallVec` sized for a full table.
///
/// ```
/// use five_crowns::core::{PlayerId, PlayerMap};
///
/// let mut row: PlayerMap<Option<u32>> = PlayerMap::with_value(3, None);
/// row[PlayerId::new(1)] = Some(12);
/// assert_eq!(row[PlayerId::new(1)], Some(12));
/// assert_eq!(row.player_count(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: SmallVec<[T; 8]>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8).map(|i| factory(PlayerId(i))).collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a player's entry, if the seat exists.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a mutable reference to a player's entry, if the seat exists.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

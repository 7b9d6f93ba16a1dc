//! State transitions.
//!
//! Each transition checks all of its preconditions before touching the
//! state, so a returned `Err` guarantees nothing changed.

use tracing::{debug, info};

use crate::core::{CommandKind, GameState, Phase, PlayerId, Round, ScoreCell, ScoreGrid};
use crate::error::GameError;

/// What an applied command did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    PlayerAdded(PlayerId),
    PlayerRemoved(String),
    PlayerRenamed(PlayerId),
    Started { players: usize },
    ScoreRecorded {
        player: PlayerId,
        round: Round,
        score: ScoreCell,
    },
    RoundAdvanced { round: Round, dealer: PlayerId },
    GameCompleted,
    Reset,
}

/// Parse raw score input the way a browser number field's text would be
/// read: leading whitespace and an optional `+` are skipped, then the run of
/// digits is taken and anything after it ignored.
///
/// Input without a leading digit run and negative input come back as
/// `None`, which clears the cell. A digit run too long for `u64` saturates
/// at `u64::MAX`.
///
/// ```
/// use five_crowns::rules::parse_score;
///
/// assert_eq!(parse_score("15"), Some(15));
/// assert_eq!(parse_score(" 7pts"), Some(7));
/// assert_eq!(parse_score("5000000000"), Some(5_000_000_000));
/// assert_eq!(parse_score("-3"), None);
/// assert_eq!(parse_score(""), None);
/// ```
#[must_use]
pub fn parse_score(raw: &str) -> ScoreCell {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse().unwrap_or(u64::MAX))
}

impl GameState {
    fn require_phase(&self, command: CommandKind, allowed: &[Phase]) -> Result<(), GameError> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                command,
                phase: self.phase,
            })
        }
    }

    // === Roster ===

    /// Seat a player. Setup only.
    pub fn add_player(&mut self, name: &str) -> Result<Transition, GameError> {
        self.require_phase(CommandKind::AddPlayer, &[Phase::Setup])?;
        let seat = self.roster.add(name, self.config.seat_cap())?;
        debug!(%seat, name = name.trim(), "player added");
        Ok(Transition::PlayerAdded(seat))
    }

    /// Unseat the player at `index`. Setup only, so no score rows exist yet.
    pub fn remove_player(&mut self, index: usize) -> Result<Transition, GameError> {
        self.require_phase(CommandKind::RemovePlayer, &[Phase::Setup])?;
        let name = self.roster.remove(index)?;
        debug!(index, %name, "player removed");
        Ok(Transition::PlayerRemoved(name))
    }

    /// Rename the player at `index`. Allowed until the game is complete.
    pub fn rename_player(&mut self, index: usize, name: &str) -> Result<Transition, GameError> {
        self.require_phase(CommandKind::RenamePlayer, &[Phase::Setup, Phase::Playing])?;
        self.roster.rename(index, name)?;
        debug!(index, name = name.trim(), "player renamed");
        Ok(Transition::PlayerRenamed(PlayerId(index as u8)))
    }

    // === Round lifecycle ===

    /// Leave setup: allocate the grid and deal round 1 from seat 0.
    pub fn start(&mut self) -> Result<Transition, GameError> {
        self.require_phase(CommandKind::Start, &[Phase::Setup])?;
        if !self.can_start() {
            return Err(GameError::NotEnoughPlayers {
                have: self.roster.len(),
                need: self.config.players_needed(),
            });
        }

        let players = self.roster.len();
        self.scores = ScoreGrid::new(players);
        self.current_round = Round::FIRST;
        self.current_dealer = PlayerId::new(0);
        self.phase = Phase::Playing;

        info!(players, "game started");
        Ok(Transition::Started { players })
    }

    /// Record raw input for a player in the round in progress.
    pub fn set_score(&mut self, player: usize, raw: &str) -> Result<Transition, GameError> {
        self.set_round_score(self.current_round.number(), player, raw)
    }

    /// Record raw input for a player in a named round.
    ///
    /// Only the round in progress accepts input; earlier rounds are closed
    /// and later ones are not open yet.
    pub fn set_round_score(
        &mut self,
        round: u8,
        player: usize,
        raw: &str,
    ) -> Result<Transition, GameError> {
        self.require_phase(CommandKind::SetScore, &[Phase::Playing])?;
        let round = Round::new(round)?;
        if round != self.current_round {
            return Err(GameError::RoundClosed {
                round: round.number(),
                current: self.current_round.number(),
            });
        }
        if player >= self.roster.len() {
            return Err(GameError::PlayerOutOfRange {
                index: player,
                len: self.roster.len(),
            });
        }

        let player = PlayerId(player as u8);
        let score = parse_score(raw);
        self.scores.set(round, player, score);

        debug!(%player, %round, ?score, "score recorded");
        Ok(Transition::ScoreRecorded {
            player,
            round,
            score,
        })
    }

    /// Close the round in progress. Closing round 11 ends the game; closing
    /// any other round opens the next one and passes the deal to the next seat.
    pub fn complete_round(&mut self) -> Result<Transition, GameError> {
        self.require_phase(CommandKind::CompleteRound, &[Phase::Playing])?;
        let missing = self.missing_scores();
        if missing > 0 {
            return Err(GameError::RoundIncomplete {
                round: self.current_round.number(),
                missing,
            });
        }

        match self.current_round.next() {
            None => {
                self.phase = Phase::Complete;
                info!("game complete");
                Ok(Transition::GameCompleted)
            }
            Some(next) => {
                self.current_round = next;
                self.current_dealer = self.current_dealer.next(self.roster.len());
                debug!(round = %next, dealer = %self.current_dealer, "round advanced");
                Ok(Transition::RoundAdvanced {
                    round: next,
                    dealer: self.current_dealer,
                })
            }
        }
    }

    /// Discard everything except the config and return to an empty setup.
    pub fn reset(&mut self) -> Transition {
        *self = GameState::new(self.config);
        debug!("game reset");
        Transition::Reset
    }
}

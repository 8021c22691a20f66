//! Tournament, Round, and TournamentStatus.

use crate::models::contestant::{Contestant, ContestantId};
use crate::models::matchup::MatchupResult;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during bracket operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// No current matchup, choice out of range, or tournament already complete.
    InvalidSelection,
    /// Roster size is not a power of two (at least 2).
    InvalidRoster { size: usize },
    /// The same contestant id appears more than once in the roster.
    DuplicateContestant(ContestantId),
    /// Roster file could not be read or parsed.
    RosterFile(String),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InvalidSelection => write!(f, "No matchup to choose from"),
            TournamentError::InvalidRoster { size } => {
                write!(f, "Roster must be a power of two of at least 2 (got {})", size)
            }
            TournamentError::DuplicateContestant(id) => {
                write!(f, "Contestant {} appears more than once in the roster", id)
            }
            TournamentError::RosterFile(msg) => write!(f, "Could not read roster: {}", msg),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Current phase of the tournament.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TournamentStatus {
    /// Matchups remain in the current round.
    #[default]
    InProgress,
    /// Every matchup of the round is resolved; waiting for `advance_if_ready`.
    RoundTransition,
    /// One contestant left. Terminal until re-initialized.
    Complete { winner: Contestant },
}

/// Contestants of the round in progress.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// Awaiting pairing; the current matchup is the first two entries.
    pub pending: Vec<Contestant>,
    /// Picked in this round, in pick order.
    pub advanced: Vec<Contestant>,
}

impl Round {
    pub fn new(pending: Vec<Contestant>) -> Self {
        Self {
            pending,
            advanced: Vec::new(),
        }
    }

    /// True when every matchup in this round has been resolved.
    pub fn is_resolved(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Full bracket state. Mutated only through the functions in `logic`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    /// Starts at 1; increments once per fully resolved round.
    pub round_number: u32,
    pub round: Round,
    pub status: TournamentStatus,
    /// Size of the roster the tournament was initialized with.
    pub roster_size: usize,
    /// Every resolved matchup, oldest first.
    pub history: Vec<MatchupResult>,
}

impl Tournament {
    /// Fresh tournament in round 1 with `pending` as given (already shuffled).
    pub(crate) fn new(pending: Vec<Contestant>) -> Self {
        Self {
            id: Uuid::new_v4(),
            round_number: 1,
            roster_size: pending.len(),
            round: Round::new(pending),
            status: TournamentStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Number of rounds needed to crown a winner (log2 of the roster size).
    pub fn total_rounds(&self) -> u32 {
        self.roster_size.max(1).trailing_zeros()
    }

    /// The winner, once the tournament is complete.
    pub fn winner(&self) -> Option<&Contestant> {
        match &self.status {
            TournamentStatus::Complete { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.status, TournamentStatus::Complete { .. })
    }

    /// Resolved matchups of one round, in pick order.
    pub fn round_history(&self, round: u32) -> impl Iterator<Item = &MatchupResult> {
        self.history.iter().filter(move |m| m.round == round)
    }
}

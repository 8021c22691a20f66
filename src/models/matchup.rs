//! Resolved matchups, kept as bracket history for display.

use crate::models::contestant::ContestantId;
use serde::{Deserialize, Serialize};

/// Which side of the current matchup was picked.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Map a choice index (0 or 1) to a side. Anything else is out of range.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Side::Left),
            1 => Some(Side::Right),
            _ => None,
        }
    }
}

/// One resolved matchup: who advanced and who was eliminated, in which round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchupResult {
    pub round: u32,
    pub winner: ContestantId,
    pub loser: ContestantId,
    /// Side the winner was shown on.
    pub picked: Side,
}

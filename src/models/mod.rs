//! Data structures for the bracket: contestants, rounds, tournament state.

mod contestant;
mod matchup;
mod tournament;

pub use contestant::{Contestant, ContestantId};
pub use matchup::{MatchupResult, Side};
pub use tournament::{Round, Tournament, TournamentError, TournamentId, TournamentStatus};

//! Bracket voting game: library with models and the elimination engine.

pub mod logic;
pub mod models;

pub use logic::{
    advance_if_ready, current_matchup, default_roster, initialize, load_roster_csv,
    load_roster_file, restart_tournament, select, IdentityShuffler, RandomShuffler, Shuffler,
    DEFAULT_ROSTER_SIZE,
};
pub use models::{
    Contestant, ContestantId, MatchupResult, Round, Side, Tournament, TournamentError,
    TournamentId, TournamentStatus,
};

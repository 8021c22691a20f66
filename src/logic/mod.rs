//! Bracket engine: setup, matchups and picks, round transitions.

mod advance;
mod roster;
mod selection;
mod setup;
mod shuffle;

pub use advance::advance_if_ready;
pub use roster::{default_roster, load_roster_csv, load_roster_file, DEFAULT_ROSTER_SIZE};
pub use selection::{current_matchup, select};
pub use setup::{initialize, restart_tournament};
pub use shuffle::{IdentityShuffler, RandomShuffler, Shuffler};

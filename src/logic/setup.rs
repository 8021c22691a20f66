//! Setup: build round 1 from a shuffled roster, or restart an existing tournament.

use crate::logic::shuffle::Shuffler;
use crate::models::{Contestant, Tournament, TournamentError};
use std::collections::HashSet;

/// Start a tournament: roster size must be a power of two (at least 2) with unique ids.
///
/// The roster is shuffled once; later rounds keep pick order.
pub fn initialize<S: Shuffler + ?Sized>(
    roster: Vec<Contestant>,
    shuffler: &mut S,
) -> Result<Tournament, TournamentError> {
    let tournament = build(roster, shuffler)?;
    log::info!(
        "Tournament {} started with {} contestants ({} rounds)",
        tournament.id,
        tournament.roster_size,
        tournament.total_rounds()
    );
    Ok(tournament)
}

/// Re-initialize in place, keeping the tournament id. On error the tournament is unchanged.
pub fn restart_tournament<S: Shuffler + ?Sized>(
    tournament: &mut Tournament,
    roster: Vec<Contestant>,
    shuffler: &mut S,
) -> Result<(), TournamentError> {
    let id = tournament.id;
    let fresh = build(roster, shuffler)?;
    *tournament = Tournament { id, ..fresh };
    log::info!("Tournament {} restarted with {} contestants", id, tournament.roster_size);
    Ok(())
}

fn build<S: Shuffler + ?Sized>(
    roster: Vec<Contestant>,
    shuffler: &mut S,
) -> Result<Tournament, TournamentError> {
    validate_roster(&roster)?;
    let mut pending = roster;
    shuffler.shuffle(&mut pending);
    Ok(Tournament::new(pending))
}

fn validate_roster(roster: &[Contestant]) -> Result<(), TournamentError> {
    let size = roster.len();
    if size < 2 || !size.is_power_of_two() {
        return Err(TournamentError::InvalidRoster { size });
    }
    let mut seen = HashSet::with_capacity(size);
    for c in roster {
        if !seen.insert(c.id) {
            return Err(TournamentError::DuplicateContestant(c.id));
        }
    }
    Ok(())
}

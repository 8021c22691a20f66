//! Round transitions and end-of-tournament detection.

use crate::models::{Tournament, TournamentStatus};

/// Move on once the round is resolved: start the next round with the advanced
/// contestants (pick order kept), or crown the last one left.
///
/// Safe to call at any time; does nothing until `pending` is empty, and nothing
/// on a complete tournament. Returns whether a transition happened.
pub fn advance_if_ready(tournament: &mut Tournament) -> bool {
    if tournament.is_complete() || !tournament.round.is_resolved() {
        return false;
    }

    match tournament.round.advanced.len() {
        0 => false,
        1 => {
            let winner = tournament.round.advanced[0].clone();
            log::info!(
                "Tournament {} complete after {} rounds: contestant {} wins",
                tournament.id,
                tournament.round_number,
                winner.id
            );
            tournament.status = TournamentStatus::Complete { winner };
            true
        }
        _ => {
            tournament.round.pending = std::mem::take(&mut tournament.round.advanced);
            tournament.round_number += 1;
            tournament.status = TournamentStatus::InProgress;
            log::debug!(
                "Tournament {}: round {} starts with {} contestants",
                tournament.id,
                tournament.round_number,
                tournament.round.pending.len()
            );
            true
        }
    }
}

//! Matchups: read the current pair, resolve it with a pick.

use crate::models::{
    Contestant, MatchupResult, Side, Tournament, TournamentError, TournamentStatus,
};

/// The pair being voted on: the first two pending contestants, in that order.
///
/// `None` once the round is resolved (call `advance_if_ready`) or the tournament is complete.
pub fn current_matchup(tournament: &Tournament) -> Option<(&Contestant, &Contestant)> {
    if tournament.is_complete() {
        return None;
    }
    match tournament.round.pending.as_slice() {
        [left, right, ..] => Some((left, right)),
        _ => None,
    }
}

/// Resolve the current matchup: `choice` 0 picks the left contestant, 1 the right.
///
/// The pick moves to `advanced` and both contestants leave `pending`; the loser is gone
/// for good. Round changes happen only in `advance_if_ready`. On error nothing changes.
pub fn select(tournament: &mut Tournament, choice: usize) -> Result<(), TournamentError> {
    let side = Side::from_index(choice).ok_or(TournamentError::InvalidSelection)?;
    if current_matchup(tournament).is_none() {
        return Err(TournamentError::InvalidSelection);
    }

    let mut pair = tournament.round.pending.drain(..2);
    let (left, right) = match (pair.next(), pair.next()) {
        (Some(left), Some(right)) => (left, right),
        _ => return Err(TournamentError::InvalidSelection),
    };
    drop(pair);

    let (winner, loser) = match side {
        Side::Left => (left, right),
        Side::Right => (right, left),
    };
    log::debug!(
        "Round {}: contestant {} advances over {}",
        tournament.round_number,
        winner.id,
        loser.id
    );

    tournament.history.push(MatchupResult {
        round: tournament.round_number,
        winner: winner.id,
        loser: loser.id,
        picked: side,
    });
    tournament.round.advanced.push(winner);

    if tournament.round.is_resolved() {
        tournament.status = TournamentStatus::RoundTransition;
    }
    Ok(())
}

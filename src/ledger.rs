//! The match ledger: results are appended, and only removed to correct a
//! misreport or to start over.

use crate::data::{Match, PlayerId, Revert};
use crate::error::{Result, TournamentError};
use crate::store::RecordStore;

pub fn record_match<S: RecordStore>(store: &S, winner: PlayerId, loser: PlayerId) -> Result<Match> {
	let recorded = store.atomically(|store| insert_checked(store, winner, loser))?;
	log::info!("recorded match {}: {winner} beat {loser}", recorded.id);
	Ok(recorded)
}

/// Inserts a result after checking both players exist. Callers must already
/// be inside a transaction.
pub(crate) fn insert_checked<S: RecordStore>(store: &S, winner: PlayerId, loser: PlayerId) -> Result<Match> {
	for id in [winner, loser] {
		if !store.player_exists(id)? {
			return Err(TournamentError::UnknownPlayer(id));
		}
	}
	store.insert_match(winner, loser)
}

/// Deletes the most recent match with exactly this result.
pub fn revert_match<S: RecordStore>(store: &S, winner: PlayerId, loser: PlayerId) -> Result<Revert> {
	let outcome = store.atomically(|store| {
		let Some(latest) = store.find_matches(winner, loser)?.into_iter().next() else {
			return Ok(Revert::NotFound);
		};
		store.delete_match(latest.id)?;
		Ok(Revert::Reverted(latest))
	})?;

	match &outcome {
		Revert::Reverted(m) => log::info!("reverted match {}: {winner} beat {loser}", m.id),
		Revert::NotFound => log::warn!("no match where {winner} beat {loser} to revert"),
	}
	Ok(outcome)
}

/// Removes every match. Returns how many were deleted.
pub fn clear<S: RecordStore>(store: &S) -> Result<usize> {
	let removed = store.atomically(|store| store.delete_all_matches())?;
	log::info!("cleared {removed} match(es)");
	Ok(removed)
}

pub fn list<S: RecordStore>(store: &S) -> Result<Vec<Match>> {
	store.atomically(|store| store.list_matches())
}

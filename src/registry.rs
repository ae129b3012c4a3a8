//! Player registration and removal.
//!
//! Removing a player who has played changes other players' records, so it is
//! split into a read-only preview, a refusing `remove` and an explicit
//! cascading `confirm_delete`.

use crate::data::{CascadePreview, Player, PlayerId};
use crate::error::{Result, TournamentError};
use crate::store::RecordStore;

pub fn register<S: RecordStore>(store: &S, name: &str) -> Result<PlayerId> {
	let id = store.atomically(|store| store.insert_player(name))?;
	log::info!("registered player {id} ({name})");
	Ok(id)
}

pub fn count<S: RecordStore>(store: &S) -> Result<usize> {
	store.atomically(|store| store.count_players())
}

pub fn preview_cascade<S: RecordStore>(store: &S, id: PlayerId) -> Result<CascadePreview> {
	store.atomically(|store| {
		let player = existing_player(store, id)?;
		let matches = store.find_matches_involving(id)?;
		Ok(CascadePreview { player, matches })
	})
}

/// Deletes a player that has no recorded matches.
pub fn remove<S: RecordStore>(store: &S, id: PlayerId) -> Result<Player> {
	let player = store.atomically(|store| {
		let player = existing_player(store, id)?;
		let count = store.find_matches_involving(id)?.len();
		if count > 0 {
			log::warn!("refusing to remove player {id}: {count} dependent match(es)");
			return Err(TournamentError::HasMatches { id, count });
		}
		store.delete_player(id)?;
		Ok(player)
	})?;

	log::info!("removed player {id} ({})", player.name);
	Ok(player)
}

/// Deletes every match involving the player, then the player.
/// Returns the number of matches removed.
pub fn confirm_delete<S: RecordStore>(store: &S, id: PlayerId) -> Result<usize> {
	let removed = store.atomically(|store| {
		existing_player(store, id)?;
		let matches = store.find_matches_involving(id)?;
		for m in &matches {
			store.delete_match(m.id)?;
		}
		store.delete_player(id)?;
		Ok(matches.len())
	})?;

	log::info!("removed player {id} and {removed} dependent match(es)");
	Ok(removed)
}

/// Clears the ledger and every registered player.
pub fn reset<S: RecordStore>(store: &S) -> Result<()> {
	let (matches, players) = store.atomically(|store| {
		let matches = store.delete_all_matches()?;
		let players = store.delete_all_players()?;
		Ok((matches, players))
	})?;

	log::info!("reset tournament: deleted {players} player(s) and {matches} match(es)");
	Ok(())
}

fn existing_player<S: RecordStore>(store: &S, id: PlayerId) -> Result<Player> {
	store.find_player(id)?.ok_or(TournamentError::PlayerNotFound(id))
}

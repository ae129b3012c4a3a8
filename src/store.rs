//! The record store seam. Core operations take any `RecordStore`, so the
//! SQLite backend in `db` can be swapped for the in-memory double in tests.

use crate::data::{Match, MatchId, Player, PlayerId, StandingRow};
use crate::error::Result;

#[cfg(test)]
pub mod memory;

pub trait RecordStore {
	/// Runs `f` inside one transaction. Writes made by `f` are committed
	/// when it returns `Ok` and rolled back when it returns `Err`.
	///
	/// Calls may nest: an inner call joins the enclosing transaction, and
	/// an inner `Err` undoes only the inner call's writes.
	fn atomically<T, F>(&self, f: F) -> Result<T>
	where
		F: FnOnce(&Self) -> Result<T>;

	/// Inserts a player and returns the store-assigned id.
	fn insert_player(&self, name: &str) -> Result<PlayerId>;

	fn find_player(&self, id: PlayerId) -> Result<Option<Player>>;

	fn player_exists(&self, id: PlayerId) -> Result<bool> {
		Ok(self.find_player(id)?.is_some())
	}

	fn delete_player(&self, id: PlayerId) -> Result<()>;

	/// Returns the number of players removed.
	fn delete_all_players(&self) -> Result<usize>;

	fn count_players(&self) -> Result<usize>;

	fn insert_match(&self, winner: PlayerId, loser: PlayerId) -> Result<Match>;

	fn delete_match(&self, id: MatchId) -> Result<()>;

	/// Returns the number of matches removed.
	fn delete_all_matches(&self) -> Result<usize>;

	/// Every player with win and match counts, by wins descending then id.
	fn query_standings(&self) -> Result<Vec<StandingRow>>;

	/// Matches with exactly this result, most recent first.
	fn find_matches(&self, winner: PlayerId, loser: PlayerId) -> Result<Vec<Match>>;

	/// Matches where `id` is the winner or the loser, oldest first.
	fn find_matches_involving(&self, id: PlayerId) -> Result<Vec<Match>>;

	/// The whole ledger, oldest first.
	fn list_matches(&self) -> Result<Vec<Match>>;
}

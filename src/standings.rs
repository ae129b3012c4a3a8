use std::cmp::Reverse;

use crate::data::StandingRow;
use crate::error::Result;
use crate::store::RecordStore;

/// Every registered player's record, most wins first. Equal records are
/// ordered by player id so repeated queries agree.
pub fn player_standings<S: RecordStore>(store: &S) -> Result<Vec<StandingRow>> {
	let mut rows = store.atomically(|store| store.query_standings())?;
	rows.sort_by_key(|row| (Reverse(row.wins), row.id));

	log::debug!("computed standings for {} player(s)", rows.len());
	Ok(rows)
}

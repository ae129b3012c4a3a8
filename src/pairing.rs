//! Next-round pairings: walk the standings two at a time and pair each
//! player with the neighbour directly below them.

use crate::data::{Pairing, StandingRow};
use crate::error::{Result, TournamentError};
use crate::standings::player_standings;
use crate::store::RecordStore;

pub fn swiss_pairings<S: RecordStore>(store: &S) -> Result<Vec<Pairing>> {
	let standings = player_standings(store)?;
	let pairings = pair_standings(&standings)?;

	log::debug!("paired {} player(s) into {} match(es)", standings.len(), pairings.len());
	Ok(pairings)
}

/// Pairs rank 0 with rank 1, rank 2 with rank 3, and so on.
pub fn pair_standings(standings: &[StandingRow]) -> Result<Vec<Pairing>> {
	if standings.len() % 2 != 0 {
		return Err(TournamentError::OddPlayerCount(standings.len()));
	}

	let pairings = standings
		.chunks_exact(2)
		.map(|pair| Pairing {
			first: (pair[0].id, pair[0].name.clone()),
			second: (pair[1].id, pair[1].name.clone()),
		})
		.collect();

	Ok(pairings)
}

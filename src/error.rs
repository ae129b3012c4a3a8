use std::path::PathBuf;

use thiserror::Error;

use crate::data::PlayerId;

pub type Result<T> = std::result::Result<T, TournamentError>;

#[derive(Debug, Error)]
pub enum TournamentError {
	/// The database file is missing or could not be opened.
	#[error("tournament database {path} is unavailable (run `swiss init` to create it): {source}")]
	StoreUnavailable {
		path: PathBuf,
		#[source]
		source: rusqlite::Error,
	},

	#[error("database error: {0}")]
	Store(#[from] rusqlite::Error),

	/// A match referenced a player id that is not registered.
	#[error("player {0} is not registered")]
	UnknownPlayer(PlayerId),

	#[error("player {0} does not exist")]
	PlayerNotFound(PlayerId),

	/// Removal refused because other players' records depend on this one.
	#[error("player {id} has {count} recorded match(es); remove with cascade to delete them too")]
	HasMatches { id: PlayerId, count: usize },

	#[error("cannot pair an odd number of players ({0})")]
	OddPlayerCount(usize),

	#[error("could not read match results: {0}")]
	Import(#[from] csv::Error),
}

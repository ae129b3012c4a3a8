//! Bulk loading of match results from a `winner,loser` CSV file.

use std::{io::Read, path::Path};

use csv::Reader;

use crate::data::MatchRecord;
use crate::error::Result;
use crate::ledger;
use crate::store::RecordStore;

pub fn load_matches<S: RecordStore>(store: &S, path: &Path) -> Result<usize> {
	let reader = Reader::from_path(path)?;
	let count = load_from_reader(store, reader)?;

	log::info!("loaded {count} match(es) from {}", path.display());
	Ok(count)
}

/// Records every row or none of them.
pub fn load_from_reader<S: RecordStore, R: Read>(store: &S, mut reader: Reader<R>) -> Result<usize> {
	store.atomically(|store| {
		let mut count = 0;
		for record in reader.deserialize() {
			let record: MatchRecord = record?;
			ledger::insert_checked(store, record.winner, record.loser)?;
			count += 1;
		}
		Ok(count)
	})
}

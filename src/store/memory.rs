use std::cell::RefCell;

use chrono::Utc;

use crate::data::{Match, MatchId, Player, PlayerId, StandingRow};
use crate::error::{Result, TournamentError};
use crate::store::RecordStore;

#[derive(Debug, Clone, Default)]
struct Tables {
	players: Vec<Player>,
	matches: Vec<Match>,
	next_player: PlayerId,
	next_match: MatchId,
}

/// Vector-backed store for tests. Transactions restore a snapshot on error.
#[derive(Debug, Default)]
pub struct MemoryStore {
	tables: RefCell<Tables>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}
}

impl RecordStore for MemoryStore {
	fn atomically<T, F>(&self, f: F) -> Result<T>
	where
		F: FnOnce(&Self) -> Result<T>,
	{
		let snapshot = self.tables.borrow().clone();
		let result = f(self);
		if result.is_err() {
			*self.tables.borrow_mut() = snapshot;
		}
		result
	}

	fn insert_player(&self, name: &str) -> Result<PlayerId> {
		let mut tables = self.tables.borrow_mut();
		tables.next_player += 1;
		let id = tables.next_player;
		tables.players.push(Player {
			id,
			name: name.to_string(),
		});
		Ok(id)
	}

	fn find_player(&self, id: PlayerId) -> Result<Option<Player>> {
		let tables = self.tables.borrow();
		Ok(tables.players.iter().find(|p| p.id == id).cloned())
	}

	fn delete_player(&self, id: PlayerId) -> Result<()> {
		self.tables.borrow_mut().players.retain(|p| p.id != id);
		Ok(())
	}

	fn delete_all_players(&self) -> Result<usize> {
		let mut tables = self.tables.borrow_mut();
		Ok(tables.players.drain(..).count())
	}

	fn count_players(&self) -> Result<usize> {
		Ok(self.tables.borrow().players.len())
	}

	fn insert_match(&self, winner: PlayerId, loser: PlayerId) -> Result<Match> {
		// Mirror the foreign keys of the SQLite schema.
		for id in [winner, loser] {
			if !self.player_exists(id)? {
				return Err(TournamentError::UnknownPlayer(id));
			}
		}

		let mut tables = self.tables.borrow_mut();
		tables.next_match += 1;
		let inserted = Match {
			id: tables.next_match,
			winner,
			loser,
			reported_at: Utc::now().naive_utc(),
		};
		tables.matches.push(inserted.clone());
		Ok(inserted)
	}

	fn delete_match(&self, id: MatchId) -> Result<()> {
		self.tables.borrow_mut().matches.retain(|m| m.id != id);
		Ok(())
	}

	fn delete_all_matches(&self) -> Result<usize> {
		let mut tables = self.tables.borrow_mut();
		Ok(tables.matches.drain(..).count())
	}

	fn query_standings(&self) -> Result<Vec<StandingRow>> {
		let tables = self.tables.borrow();
		let count = |pred: &dyn Fn(&Match) -> bool| tables.matches.iter().filter(|m| pred(m)).count() as u32;

		let mut rows: Vec<StandingRow> = tables
			.players
			.iter()
			.map(|p| StandingRow {
				id: p.id,
				name: p.name.clone(),
				wins: count(&|m| m.winner == p.id),
				matches: count(&|m| m.winner == p.id || m.loser == p.id),
			})
			.collect();
		rows.sort_by(|a, b| b.wins.cmp(&a.wins).then(a.id.cmp(&b.id)));
		Ok(rows)
	}

	fn find_matches(&self, winner: PlayerId, loser: PlayerId) -> Result<Vec<Match>> {
		let tables = self.tables.borrow();
		Ok(tables
			.matches
			.iter()
			.rev()
			.filter(|m| m.winner == winner && m.loser == loser)
			.cloned()
			.collect())
	}

	fn find_matches_involving(&self, id: PlayerId) -> Result<Vec<Match>> {
		let tables = self.tables.borrow();
		Ok(tables
			.matches
			.iter()
			.filter(|m| m.winner == id || m.loser == id)
			.cloned()
			.collect())
	}

	fn list_matches(&self) -> Result<Vec<Match>> {
		Ok(self.tables.borrow().matches.clone())
	}
}

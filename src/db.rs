use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection, OpenFlags, OptionalExtension, Row};

use crate::data::{Match, MatchId, Player, PlayerId, StandingRow};
use crate::error::{Result, TournamentError};
use crate::store::RecordStore;

pub fn create_schema(conn: &mut Connection) -> rusqlite::Result<()> {
	let tx = conn.transaction()?;

	tx.execute(
		"CREATE TABLE IF NOT EXISTS players (
			id     INTEGER PRIMARY KEY AUTOINCREMENT,
			name   TEXT    NOT NULL
		);",
		[],
	)?;

	// AUTOINCREMENT keeps match ids monotonic even after deletes, so the
	// highest id for a result is always the most recent report of it.
	tx.execute(
		"CREATE TABLE IF NOT EXISTS matches (
			id            INTEGER PRIMARY KEY AUTOINCREMENT,
			winner        INTEGER REFERENCES players (id)
								  NOT NULL,
			loser         INTEGER REFERENCES players (id)
								  NOT NULL,
			reported_at           NOT NULL
		);",
		[],
	)?;

	tx.commit()
}

pub struct SqliteStore {
	conn: Connection,
}

impl SqliteStore {
	/// Opens an existing, provisioned tournament database.
	pub fn open(path: &Path) -> Result<Self> {
		let unavailable = |source| TournamentError::StoreUnavailable {
			path: path.to_path_buf(),
			source,
		};

		let conn = Connection::open_with_flags(
			path,
			OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
		)
		.map_err(unavailable)?;

		// Fails on a foreign file or one that was never initialised.
		conn.query_row(
			"SELECT (SELECT COUNT(*) FROM players), (SELECT COUNT(*) FROM matches);",
			[],
			|_| Ok(()),
		)
			.map_err(unavailable)?;

		log::debug!("opened tournament database {}", path.display());
		Self::with_connection(conn)
	}

	/// Opens or creates the database file and installs the schema.
	pub fn create(path: &Path) -> Result<Self> {
		let mut conn = Connection::open(path).map_err(|source| TournamentError::StoreUnavailable {
			path: path.to_path_buf(),
			source,
		})?;
		create_schema(&mut conn)?;

		log::info!("initialised tournament database {}", path.display());
		Self::with_connection(conn)
	}

	#[cfg(test)]
	pub fn in_memory() -> Result<Self> {
		let mut conn = Connection::open_in_memory()?;
		create_schema(&mut conn)?;
		Self::with_connection(conn)
	}

	fn with_connection(conn: Connection) -> Result<Self> {
		conn.pragma_update(None, "foreign_keys", true)?;
		Ok(Self { conn })
	}

	fn query_matches<P: rusqlite::Params>(&self, sql: &str, params: P) -> Result<Vec<Match>> {
		let mut stmt = self.conn.prepare(sql)?;
		let rows = stmt
			.query_map(params, parse_match_row)?
			.collect::<rusqlite::Result<Vec<_>>>()?;

		Ok(rows)
	}
}

fn parse_match_row(row: &Row) -> rusqlite::Result<Match> {
	Ok(Match {
		id: row.get(0)?,
		winner: row.get(1)?,
		loser: row.get(2)?,
		reported_at: row.get(3)?,
	})
}

impl RecordStore for SqliteStore {
	fn atomically<T, F>(&self, f: F) -> Result<T>
	where
		F: FnOnce(&Self) -> Result<T>,
	{
		// A savepoint opens a transaction at the outermost level and nests
		// inside one otherwise, so an inner failure only undoes its own writes.
		self.conn.execute_batch("SAVEPOINT atomically;")?;
		match f(self) {
			Ok(value) => {
				self.conn.execute_batch("RELEASE atomically;")?;
				Ok(value)
			}
			Err(e) => {
				self.conn
					.execute_batch("ROLLBACK TO atomically; RELEASE atomically;")?;
				Err(e)
			}
		}
	}

	fn insert_player(&self, name: &str) -> Result<PlayerId> {
		let id = self.conn.query_row(
			"INSERT INTO players (name) VALUES (?1) RETURNING id;",
			[name],
			|row| row.get(0),
		)?;

		Ok(id)
	}

	fn find_player(&self, id: PlayerId) -> Result<Option<Player>> {
		let player = self
			.conn
			.query_row("SELECT id, name FROM players WHERE id = ?1;", [id], |row| {
				Ok(Player {
					id: row.get(0)?,
					name: row.get(1)?,
				})
			})
			.optional()?;

		Ok(player)
	}

	fn delete_player(&self, id: PlayerId) -> Result<()> {
		self.conn.execute("DELETE FROM players WHERE id = ?1;", [id])?;
		Ok(())
	}

	fn delete_all_players(&self) -> Result<usize> {
		Ok(self.conn.execute("DELETE FROM players;", [])?)
	}

	fn count_players(&self) -> Result<usize> {
		let count = self
			.conn
			.query_row("SELECT COUNT(*) FROM players;", [], |row| row.get::<usize, usize>(0))?;

		Ok(count)
	}

	fn insert_match(&self, winner: PlayerId, loser: PlayerId) -> Result<Match> {
		let inserted = self.conn.query_row(
			"INSERT INTO matches (winner, loser, reported_at)
			 VALUES (?1, ?2, ?3)
			 RETURNING id, winner, loser, reported_at;",
			params![winner, loser, Utc::now().naive_utc()],
			parse_match_row,
		)?;

		Ok(inserted)
	}

	fn delete_match(&self, id: MatchId) -> Result<()> {
		self.conn.execute("DELETE FROM matches WHERE id = ?1;", [id])?;
		Ok(())
	}

	fn delete_all_matches(&self) -> Result<usize> {
		Ok(self.conn.execute("DELETE FROM matches;", [])?)
	}

	fn query_standings(&self) -> Result<Vec<StandingRow>> {
		let mut stmt = self.conn.prepare(
			"SELECT p.id, p.name,
				(SELECT COUNT(*) FROM matches m WHERE m.winner = p.id) AS wins,
				(SELECT COUNT(*) FROM matches m WHERE m.winner = p.id OR m.loser = p.id) AS played
			 FROM players p
			 ORDER BY wins DESC, p.id ASC;",
		)?;

		let rows = stmt
			.query_map([], |row| {
				Ok(StandingRow {
					id: row.get(0)?,
					name: row.get(1)?,
					wins: row.get(2)?,
					matches: row.get(3)?,
				})
			})?
			.collect::<rusqlite::Result<Vec<_>>>()?;

		Ok(rows)
	}

	fn find_matches(&self, winner: PlayerId, loser: PlayerId) -> Result<Vec<Match>> {
		self.query_matches(
			"SELECT id, winner, loser, reported_at FROM matches
			 WHERE winner = ?1 AND loser = ?2
			 ORDER BY id DESC;",
			params![winner, loser],
		)
	}

	fn find_matches_involving(&self, id: PlayerId) -> Result<Vec<Match>> {
		self.query_matches(
			"SELECT id, winner, loser, reported_at FROM matches
			 WHERE winner = ?1 OR loser = ?1
			 ORDER BY id ASC;",
			[id],
		)
	}

	fn list_matches(&self) -> Result<Vec<Match>> {
		self.query_matches(
			"SELECT id, winner, loser, reported_at FROM matches ORDER BY id ASC;",
			[],
		)
	}
}

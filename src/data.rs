use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub type PlayerId = i64;
pub type MatchId = i64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
	pub id: PlayerId,
	pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
	pub id: MatchId,
	pub winner: PlayerId,
	pub loser: PlayerId,
	pub reported_at: NaiveDateTime,
}

/// One row of the standings table. Derived from the ledger on every query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingRow {
	pub id: PlayerId,
	pub name: String,
	pub wins: u32,
	pub matches: u32,
}

/// A single matchup for the next round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
	pub first: (PlayerId, String),
	pub second: (PlayerId, String),
}

// Flat layout for CSV export; csv cannot serialize nested tuples with headers.
#[derive(Debug, Serialize)]
pub struct PairingRecord<'a> {
	pub id1: PlayerId,
	pub name1: &'a str,
	pub id2: PlayerId,
	pub name2: &'a str,
}

impl<'a> From<&'a Pairing> for PairingRecord<'a> {
	fn from(pairing: &'a Pairing) -> Self {
		Self {
			id1: pairing.first.0,
			name1: &pairing.first.1,
			id2: pairing.second.0,
			name2: &pairing.second.1,
		}
	}
}

/// A row of an imported results file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MatchRecord {
	pub winner: PlayerId,
	pub loser: PlayerId,
}

/// Matches that would be deleted alongside a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadePreview {
	pub player: Player,
	pub matches: Vec<Match>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revert {
	Reverted(Match),
	NotFound,
}

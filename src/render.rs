use anyhow::{Context, Result};
use csv::Writer;
use serde::Serialize;

use crate::data::{CascadePreview, Match, Pairing, PairingRecord, StandingRow};

pub fn standings_text(rows: &[StandingRow]) -> String {
	let mut string = String::from("# Standings\n```");

	for (rank, row) in rows.iter().enumerate() {
		string.push_str(&format!(
			"\n{}: {} (#{}) — {} win(s) in {} match(es)",
			rank + 1,
			row.name,
			row.id,
			row.wins,
			row.matches
		));
	}

	string.push_str("\n```\n");
	string
}

pub fn pairings_text(pairings: &[Pairing]) -> String {
	let mut string = String::from("# Next round\n```");

	for (n, pairing) in pairings.iter().enumerate() {
		let (id1, name1) = &pairing.first;
		let (id2, name2) = &pairing.second;
		string.push_str(&format!("\n{}: {name1} (#{id1}) vs {name2} (#{id2})", n + 1));
	}

	string.push_str("\n```\n");
	string
}

pub fn matches_text(matches: &[Match]) -> String {
	matches
		.iter()
		.map(|m| format!("match {}: {} beat {} ({})\n", m.id, m.winner, m.loser, m.reported_at))
		.collect()
}

pub fn preview_text(preview: &CascadePreview) -> String {
	let mut string = format!(
		"If player {} ({}) is deleted, the following matches must also be deleted:\n",
		preview.player.id, preview.player.name
	);
	string.push_str(&matches_text(&preview.matches));
	string.push_str("This will change the win-loss records of other players.\n");
	string
}

pub fn standings_csv(rows: &[StandingRow]) -> Result<String> {
	to_csv(rows)
}

pub fn pairings_csv(pairings: &[Pairing]) -> Result<String> {
	let records: Vec<PairingRecord> = pairings.iter().map(PairingRecord::from).collect();
	to_csv(&records)
}

fn to_csv<T: Serialize>(records: &[T]) -> Result<String> {
	let mut writer = Writer::from_writer(vec![]);
	for record in records {
		writer.serialize(record).context("could not serialize CSV record")?;
	}

	let bytes = writer
		.into_inner()
		.map_err(|e| e.into_error())
		.context("could not flush CSV output")?;
	Ok(String::from_utf8(bytes)?)
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_DATABASE;
use crate::data::PlayerId;

#[derive(Parser)]
#[command(author, version, about = "Swiss-system tournament manager", long_about = None)]
pub struct Cli {
	#[arg(short, long, global = true, value_name = "FILE", env = "SWISS_DATABASE", default_value = DEFAULT_DATABASE)]
	pub database: PathBuf,

	#[arg(short, long, global = true, value_name = "FILE")]
	pub output: Option<PathBuf>,

	/// Write standings and pairings as CSV
	#[arg(long, global = true)]
	pub csv: bool,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
	/// Create the database and its tables
	Init,
	/// Register a new player
	Register { name: String },
	/// Remove a player; refuses if they have recorded matches unless --cascade
	Remove {
		id: PlayerId,
		/// Also delete every match the player took part in
		#[arg(long)]
		cascade: bool,
	},
	/// Print the number of registered players
	Count,
	/// Record a match result
	Report { winner: PlayerId, loser: PlayerId },
	/// Undo the most recent report of a match result
	Unreport { winner: PlayerId, loser: PlayerId },
	/// Record every result in a winner,loser CSV file
	Load {
		#[arg(value_name = "FILE")]
		matches: PathBuf,
	},
	/// List recorded matches
	Matches,
	/// Print players ranked by wins
	Standings,
	/// Pairings for the next round
	Pairings,
	/// Delete every recorded match
	ClearMatches,
	/// Delete every match and player
	Reset,
}

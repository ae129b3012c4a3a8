mod cli;
mod config;
mod data;
mod db;
mod error;
mod import;
mod ledger;
mod pairing;
mod registry;
mod render;
mod standings;
mod store;

use std::{
	fs::File,
	io::{self, Write},
};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::{AppConfig, OutputFormat};
use data::Revert;
use db::SqliteStore;

fn main() {
	sensible_env_logger::init!();

	run().unwrap_or_else(|e| {
		eprintln!("Error: {e:#}");
		std::process::exit(1);
	});
}

fn run() -> Result<()> {
	let cli = Cli::parse();
	let config = AppConfig::from(&cli);

	let store = match cli.command {
		Commands::Init => SqliteStore::create(&config.database)?,
		_ => SqliteStore::open(&config.database)?,
	};

	let mut out = match config.output.as_deref() {
		Some(path) => Box::new(
			File::create(path).with_context(|| format!("could not create {}", path.display()))?,
		) as Box<dyn Write>,
		None => Box::new(io::stdout()) as Box<dyn Write>,
	};

	execute(&store, &cli.command, config.format, &mut out)?;
	out.flush().context("could not write output")
}

fn execute(store: &SqliteStore, command: &Commands, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
	match command {
		Commands::Init => writeln!(out, "Tournament database ready.")?,
		Commands::Register { name } => {
			let id = registry::register(store, name)?;
			writeln!(out, "Registered {name} as player {id}.")?;
		}
		Commands::Remove { id, cascade: true } => {
			let removed = registry::confirm_delete(store, *id)?;
			writeln!(out, "Removed player {id} and {removed} match(es).")?;
		}
		Commands::Remove { id, cascade: false } => {
			let preview = registry::preview_cascade(store, *id)?;
			if !preview.matches.is_empty() {
				out.write_all(render::preview_text(&preview).as_bytes())?;
			}
			let player = registry::remove(store, *id)?;
			writeln!(out, "Removed player {id} ({}).", player.name)?;
		}
		Commands::Count => writeln!(out, "{}", registry::count(store)?)?,
		Commands::Report { winner, loser } => {
			let recorded = ledger::record_match(store, *winner, *loser)?;
			writeln!(out, "Recorded match {}.", recorded.id)?;
		}
		Commands::Unreport { winner, loser } => match ledger::revert_match(store, *winner, *loser)? {
			Revert::Reverted(m) => writeln!(out, "Deleted match {}.", m.id)?,
			Revert::NotFound => writeln!(out, "No such match")?,
		},
		Commands::Load { matches } => {
			let count = import::load_matches(store, matches)
				.with_context(|| format!("could not load {}", matches.display()))?;
			writeln!(out, "Recorded {count} match(es).")?;
		}
		Commands::Matches => out.write_all(render::matches_text(&ledger::list(store)?).as_bytes())?,
		Commands::Standings => {
			let rows = standings::player_standings(store)?;
			let string = match format {
				OutputFormat::Text => render::standings_text(&rows),
				OutputFormat::Csv => render::standings_csv(&rows)?,
			};
			out.write_all(string.as_bytes())?;
		}
		Commands::Pairings => {
			let pairings = pairing::swiss_pairings(store)?;
			let string = match format {
				OutputFormat::Text => render::pairings_text(&pairings),
				OutputFormat::Csv => render::pairings_csv(&pairings)?,
			};
			out.write_all(string.as_bytes())?;
		}
		Commands::ClearMatches => {
			let removed = ledger::clear(store)?;
			writeln!(out, "Deleted {removed} match(es).")?;
		}
		Commands::Reset => {
			registry::reset(store)?;
			writeln!(out, "Deleted all players and matches.")?;
		}
	}

	Ok(())
}

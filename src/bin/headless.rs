use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use blind_timer::config::{load_config, load_config_auto, TimerConfig};
use blind_timer::engine::{TimerEngine, TimerEvent};
use blind_timer::format::{format_offset, format_time};
use blind_timer::settings::GameSession;

#[derive(Parser)]
#[command(name = "blind-structure")]
#[command(about = "Print or simulate a blind structure without the terminal UI")]
struct Cli {
	#[arg(short, long, env = "BLIND_TIMER_CONFIG")]
	config: Option<PathBuf>,

	/// Emit the structure as JSON
	#[arg(long)]
	json: bool,

	/// Run the clock to the end, one second per tick, and print each level change
	#[arg(long)]
	simulate: bool,
}

#[derive(Serialize)]
struct LevelRow {
	level: usize,
	small_blind: u32,
	big_blind: u32,
	duration: u32,
	starts_at: u32,
}

#[derive(Serialize)]
struct Structure {
	levels: Vec<LevelRow>,
	total_duration: u32,
	players: u32,
	prize_pool: u64,
	starting_stack: u32,
	average_stack: u64,
}

fn structure(config: &TimerConfig) -> Structure {
	let session = GameSession::new(config.game);
	let levels = config
		.levels
		.levels()
		.iter()
		.zip(config.levels.start_offsets())
		.enumerate()
		.map(|(i, (level, starts_at))| LevelRow {
			level: i + 1,
			small_blind: level.small_blind,
			big_blind: level.big_blind,
			duration: level.duration,
			starts_at,
		})
		.collect();

	Structure {
		levels,
		total_duration: config.levels.total_duration(),
		players: config.game.number_of_players,
		prize_pool: session.total_prize_pool(),
		starting_stack: config.game.starting_stack,
		average_stack: session.average_stack(),
	}
}

fn print_table(structure: &Structure) {
	println!("{:>5}  {:>9}  {:>11}  {:>9}", "Level", "Blinds", "Duration", "Starts");
	for row in &structure.levels {
		println!(
			"{:>5}  {:>9}  {:>11}  {:>9}",
			row.level,
			format!("{}/{}", row.small_blind, row.big_blind),
			format_time(row.duration),
			format_offset(row.starts_at),
		);
	}
	println!();
	println!("Total time:     {}", format_offset(structure.total_duration));
	println!("Players:        {}", structure.players);
	println!("Prize pool:     ${}", structure.prize_pool);
	println!("Starting stack: {}", structure.starting_stack);
	println!("Average stack:  {}", structure.average_stack);
}

fn simulate(config: &TimerConfig) {
	let mut engine = TimerEngine::new(config.levels.clone());
	engine.start();

	let mut elapsed = 0u32;
	let first = engine.current_level();
	println!("[{}] Level 1: {}", format_offset(elapsed), first.blinds_label());

	while let Some(event) = engine.tick() {
		elapsed += 1;
		match event {
			TimerEvent::LevelAdvanced { index, level } => {
				println!("[{}] Level {}: {}", format_offset(elapsed), index + 1, level.blinds_label());
			}
			TimerEvent::ScheduleComplete => {
				println!("[{}] Final level finished", format_offset(elapsed));
			}
			TimerEvent::Ticked { .. } => {}
		}
	}
}

fn main() {
	let cli = Cli::parse();

	let config = match &cli.config {
		Some(path) => load_config(path),
		None => load_config_auto(),
	};
	let config = match config {
		Ok(config) => config,
		Err(e) => {
			eprintln!("Error: {}", e);
			std::process::exit(1);
		}
	};

	if cli.simulate {
		simulate(&config);
		return;
	}

	let structure = structure(&config);
	if cli.json {
		match serde_json::to_string_pretty(&structure) {
			Ok(json) => println!("{}", json),
			Err(e) => {
				eprintln!("Error: {}", e);
				std::process::exit(1);
			}
		}
	} else {
		print_table(&structure);
	}
}

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use crossterm::{
	event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
	execute,
	terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use blind_timer::config::{load_config, load_config_auto, TimerConfig};
use blind_timer::defaults;
use blind_timer::logging::tui as log;
use blind_timer::theme::Theme;
use blind_timer::tui::{TimerUI, TimerUIAction};

#[derive(Parser)]
#[command(name = "blind-timer")]
#[command(about = "Poker tournament blind timer")]
struct Cli {
	/// Timer config file (defaults to timer.toml in the config directory)
	#[arg(short, long, env = "BLIND_TIMER_CONFIG")]
	config: Option<PathBuf>,

	#[arg(short, long, env = "BLIND_TIMER_THEME")]
	theme: Option<String>,

	/// Start with only the clock and blinds on screen
	#[arg(short, long)]
	fullscreen: bool,

	/// Start the clock immediately
	#[arg(short, long)]
	start: bool,
}

fn main() -> io::Result<()> {
	let cli = Cli::parse();
	defaults::ensure_config();

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

	enable_raw_mode()?;
	let mut stdout = stdout();
	execute!(stdout, EnterAlternateScreen)?;
	let backend = CrosstermBackend::new(stdout);
	let mut terminal = Terminal::new(backend)?;

	let result = run_app(&mut terminal, &cli, config);

	disable_raw_mode()?;
	execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

	if let Err(e) = result {
		eprintln!("Error: {}", e);
	}

	Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, cli: &Cli, config: TimerConfig) -> io::Result<()> {
	let theme_name = cli
		.theme
		.clone()
		.or(config.theme.clone())
		.unwrap_or_else(|| "default".to_string());
	let theme = Theme::load(Some(&theme_name));

	let mut ui = TimerUI::new(config.levels, config.game, theme, theme_name)
		.with_display(config.display.show_progress, cli.fullscreen || config.display.fullscreen);
	log::event("timer opened");

	if cli.start {
		ui.start(Instant::now());
	}

	loop {
		terminal.draw(|f| ui.render(f, f.area()))?;

		if event::poll(ui.poll_timeout(Instant::now()))? {
			if let Event::Key(key) = event::read()? {
				if key.kind == KeyEventKind::Press {
					if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
						log::event("interrupted");
						break;
					}
					if let TimerUIAction::Quit = ui.handle_key(key.code, Instant::now()) {
						log::event("user quit");
						break;
					}
				}
			}
		}

		ui.pump(Instant::now());
	}

	Ok(())
}

use anyhow::Context;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};
use crossterm::ExecutableCommand;
use flappy::build_info::version_line;
use flappy::clock::FrameClock;
use flappy::config::{Command, Config, HELP_TEXT};
use flappy::constants::FPS;
use flappy::events::CrosstermInput;
use flappy::logging;
use flappy::scene::Scene;
use flappy::Session;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

fn main() -> anyhow::Result<()> {
    let config = match Config::from_args(std::env::args().skip(1))? {
        Command::Help => {
            println!("{}", HELP_TEXT);
            return Ok(());
        }
        Command::Version => {
            println!("{}", version_line());
            return Ok(());
        }
        Command::Play(config) => config,
    };

    if let Some(path) = logging::init(&config)? {
        log::info!("logging to {}", path.display());
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = Session::new(Scene::new(config.backdrop_mode));
    log::info!(
        "backdrop {:?} ({:?} mode), seed {:?}",
        session.scene.backdrop(),
        session.scene.mode(),
        config.seed
    );

    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    stdout.execute(SetTitle("Flappy Bird"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = session.run(
        &mut terminal,
        &mut FrameClock::new(FPS),
        &mut CrosstermInput,
        &mut rng,
    );

    // Always restore the terminal, even if the loop failed
    let _ = terminal.show_cursor();
    let _ = terminal.backend_mut().execute(DisableMouseCapture);
    let _ = terminal.backend_mut().execute(LeaveAlternateScreen);
    let _ = disable_raw_mode();

    result.context("game loop failed")?;
    println!("Highscore: {}", session.highscore);
    Ok(())
}

use arcade::core::constants::FRAME_POLL_MS;
use arcade::games::{self, ActiveGame, MenuAction, MenuState, ScoreStore};
use arcade::input::{handle_game_input, map_menu_key, InputResult};
use arcade::ui::{self, View};
use arcade::utils::{build_info, logging, persistence};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

enum Screen {
    Menu,
    Game(ActiveGame),
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Arcade - Terminal Mini-Games\n");
                println!("Usage: arcade [option]\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message\n");
                println!("Environment:");
                println!("  ARCADE_HOME  Save directory (default ~/.arcade)");
                println!("  ARCADE_LOG   Log filter for arcade.log (default info)");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'arcade --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let data_dir = persistence::arcade_dir()?;
    if let Err(e) = logging::init(&data_dir) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    tracing::info!(version = %build_info::version_line(), "arcade starting");
    let store = ScoreStore::at(&data_dir);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &store);

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("arcade exiting");
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, store: &ScoreStore) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut menu = MenuState::default();
    let mut screen = Screen::Menu;
    let mut notice: Option<String> = None;
    let mut last_frame = Instant::now();

    loop {
        let now = Instant::now();
        let dt_ms = now.duration_since(last_frame).as_millis() as u64;
        last_frame = now;

        if let Screen::Game(game) = &mut screen {
            tick_game(game, dt_ms, &mut rng, store);
        }

        terminal.draw(|frame| {
            let view = match &screen {
                Screen::Menu => View::Menu(&menu),
                Screen::Game(game) => View::Game {
                    game,
                    notice: notice.as_deref(),
                },
            };
            ui::draw(frame, view);
        })?;

        if !event::poll(Duration::from_millis(FRAME_POLL_MS))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match &mut screen {
            Screen::Menu => match games::process_input(&mut menu, map_menu_key(key)) {
                MenuAction::Start(game_type, mode) => {
                    notice = None;
                    screen = Screen::Game(games::start_game(game_type, mode, store));
                }
                MenuAction::Quit => return Ok(()),
                MenuAction::None => {}
            },
            Screen::Game(game) => match handle_game_input(key, game, store) {
                InputResult::Continue => notice = None,
                InputResult::Notice(message) => notice = Some(message),
                InputResult::BackToMenu => screen = Screen::Menu,
            },
        }
    }
}

/// Advance the active game and persist runner scores when a run ends.
fn tick_game<R: rand::Rng>(game: &mut ActiveGame, dt_ms: u64, rng: &mut R, store: &ScoreStore) {
    match game {
        ActiveGame::Board(engine) => {
            engine.tick(dt_ms, rng);
        }
        ActiveGame::Runner(runner_game) => {
            let events = runner_game.tick(dt_ms, rng);
            let finished = events
                .iter()
                .any(|e| matches!(e, games::runner::RunnerEvent::GameOver(_)));
            if finished {
                if let Err(e) = store.save(runner_game.skin, &runner_game.scores) {
                    tracing::warn!(error = %e, "failed to save scores");
                }
            }
        }
    }
}

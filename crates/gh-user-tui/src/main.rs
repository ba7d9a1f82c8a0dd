use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::mpsc::Receiver;

mod actions;
mod dispatcher;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
mod theme;
mod view_models;
mod views;

use actions::Action;
use dispatcher::Dispatcher;
use gh_user_config::AppConfig;
use middleware::{
    github::GitHubMiddleware, keyboard::KeyboardMiddleware, logging::LoggingMiddleware,
};
use state::AppState;
use store::Store;

fn main() -> anyhow::Result<()> {
    // .env is optional; a missing file is not an error
    dotenvy::dotenv().ok();

    let log_file = logger::init();

    log::info!("Starting gh-user-tui");
    log::debug!("Logging to {}", log_file.display());

    let config = AppConfig::load();

    // Channel through which middleware and async tasks re-enter the chain
    let (action_tx, action_rx) = std::sync::mpsc::channel();
    let dispatcher = Dispatcher::new(action_tx);

    // Initialize store with middleware (they execute in this order)
    let mut store = Store::new(AppState::default());
    store.add_middleware(LoggingMiddleware::new());
    store.add_middleware(KeyboardMiddleware::new());
    store.add_middleware(GitHubMiddleware::new(&config)?);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main event loop
    let result = run_app(&mut terminal, &mut store, &dispatcher, &action_rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    log::info!("Exiting gh-user-tui");
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
    dispatcher: &Dispatcher,
    actions: &Receiver<Action>,
) -> io::Result<()> {
    loop {
        // Render
        terminal.draw(|frame| views::render(store.state(), frame))?;

        // Check if we should quit
        if !store.state().running {
            break;
        }

        // Drain actions dispatched by middleware and async fetch tasks
        while let Ok(action) = actions.try_recv() {
            store.dispatch(action, dispatcher);
        }

        // Handle events
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    store.dispatch(Action::Key(key), dispatcher);
                }
            }
        }
    }

    Ok(())
}

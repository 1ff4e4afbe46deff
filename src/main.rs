mod app;
mod globals;
mod history;
mod omdb_ratings;
mod search;
mod tmdb_search;
mod ui;
mod upstream;
mod youtube_trailer;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dotenvy::dotenv;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::process::Command;
use tokio::sync::mpsc;

use app::{App, AppMessage, AppState};
use search::ApiKeys;
use ui::draw_ui;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // All three upstream APIs need a key; fail before touching the terminal
    let keys = ApiKeys::from_env()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let history_path = PathBuf::from("moviesearch").join("recent_searches.json");
    let mut app = App::new(history_path);

    // Create channel for background search tasks
    let (tx, mut rx) = mpsc::unbounded_channel();

    // Run the app
    let res = run_app(&mut terminal, &mut app, &keys, tx, &mut rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    keys: &ApiKeys,
    tx: mpsc::UnboundedSender<AppMessage>,
    rx: &mut mpsc::UnboundedReceiver<AppMessage>,
) -> Result<()> {
    loop {
        // Check for messages from background tasks (non-blocking)
        while let Ok(msg) = rx.try_recv() {
            match msg {
                AppMessage::SearchComplete {
                    generation,
                    query,
                    movies,
                } => {
                    app.finish_search(generation, &query, movies);
                }
                AppMessage::SearchError {
                    generation,
                    message,
                } => {
                    app.search_error(generation, &message);
                }
            }
        }

        // Draw UI
        terminal.draw(|f| draw_ui(f, app))?;

        // Handle input with timeout - only read ONE event per loop iteration
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events, ignore release and repeat
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match app.state {
                    AppState::Input => {
                        match key.code {
                            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                                return Ok(());
                            }
                            KeyCode::Char(c) => {
                                app.push_input_char(c);
                            }
                            KeyCode::Backspace => {
                                app.pop_input_char();
                            }
                            KeyCode::Down => {
                                app.history_next();
                            }
                            KeyCode::Up => {
                                app.history_previous();
                            }
                            KeyCode::Enter => {
                                // Submit the highlighted recent search, or the
                                // typed query; empty input submits nothing
                                if let Some(query) = app.query_to_submit() {
                                    spawn_search(app, keys, &tx, query);
                                }
                            }
                            KeyCode::Esc => {
                                app.clear_input();
                            }
                            _ => {}
                        }
                    }
                    AppState::Results => {
                        match key.code {
                            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                                return Ok(());
                            }
                            KeyCode::Char('j') | KeyCode::Down => {
                                app.next_result();
                            }
                            KeyCode::Char('k') | KeyCode::Up => {
                                app.previous_result();
                            }
                            KeyCode::Enter => {
                                open_selected_trailer(app);
                            }
                            KeyCode::Esc => {
                                // Go back to search input
                                app.back_to_input();
                            }
                            _ => {}
                        }
                    }
                    AppState::Searching => {
                        // Can't do anything while searching, just wait
                        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('q') {
                            return Ok(());
                        }
                    }
                    AppState::Error => {
                        // Any key dismisses the error
                        app.dismiss_error();
                    }
                }
            }
        }
    }
}

/// Start a background search and wire its outcome back through the channel
///
/// The generation stamped here is what lets the app ignore this task's
/// messages if the user fires another search before it finishes.
fn spawn_search(app: &mut App, keys: &ApiKeys, tx: &mpsc::UnboundedSender<AppMessage>, query: String) {
    let generation = app.start_search();
    let keys = keys.clone();
    let tx = tx.clone();

    tokio::spawn(async move {
        match search::search_movies(&keys, &query).await {
            Ok(movies) => {
                let _ = tx.send(AppMessage::SearchComplete {
                    generation,
                    query,
                    movies,
                });
            }
            Err(e) => {
                let _ = tx.send(AppMessage::SearchError {
                    generation,
                    message: e.to_string(),
                });
            }
        }
    });
}

/// Open the selected movie's trailer in the default browser
fn open_selected_trailer(app: &mut App) {
    let trailer = app.selected_movie().and_then(|m| m.trailer_url.clone());

    match trailer {
        Some(url) => match open_url(&url) {
            Ok(()) => {
                app.status_message = "Opened trailer in browser".to_string();
            }
            Err(e) => {
                app.show_error(&format!("Failed to open trailer: {}", e));
            }
        },
        None => {
            app.status_message = "No trailer available for this movie".to_string();
        }
    }
}

/// Open URL in default browser
fn open_url(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        Command::new("open")
            .arg(url)
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .spawn()
            .context("Failed to open browser")?;
    }

    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open")
            .arg(url)
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .spawn()
            .context("Failed to open browser")?;
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd")
            .args(&["/C", "start", "", url])
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .spawn()
            .context("Failed to open browser")?;
    }

    Ok(())
}

use crate::config::Config;
use crate::error::AppError;
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger;
use crate::session::Session;
use crate::state::{SavedNavigation, State};
use crate::ui::Theme;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout, Stdout};
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

pub type SessionSaveSender = mpsc::Sender<SavedNavigation>;
type SessionSaveReceiver = Receiver<SavedNavigation>;

/// Options given on the command line.
///
#[derive(Debug, Clone, Copy)]
pub struct StartOptions {
    pub fresh: bool,
    pub log_level: LevelFilter,
}

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: State,
    log_receiver: Receiver<String>,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub fn start(config: Config, options: StartOptions) -> Result<()> {
        let log_receiver = logger::init(options.log_level)?;
        info!("Starting application...");

        let session = config.dir_path().map(Session::new);
        let saved = restore_navigation(session.as_ref(), &config, options.fresh);

        let theme = Theme::from_name(&config.theme_name).unwrap_or_else(|e| {
            warn!(
                "{} (available: {}), falling back to {}",
                e,
                Theme::available_themes().join(", "),
                Theme::default().name
            );
            Theme::default()
        });

        let (session_sender, saver) = match &session {
            Some(session) => {
                let (tx, rx) = mpsc::channel::<SavedNavigation>();
                (Some(tx), Some(App::start_session_saver(session.clone(), rx)))
            }
            None => (None, None),
        };

        let mut app = App {
            state: State::new(
                session_sender,
                saved,
                theme,
                config.hotkeys.clone(),
                config.snackbar_ticks,
                config.show_log,
            ),
            log_receiver,
        };
        let ui_result = app.start_ui();

        // Tear down the surface: the final snapshot is written once the saver
        // has drained its queue
        let last = app.state.save_navigation();
        drop(app);
        if let Some(saver) = saver {
            if saver.join().is_err() {
                error!("Session saver thread panicked");
            }
        }
        if let Some(session) = &session {
            if let Err(e) = session.save(&last) {
                error!("Failed to save session on exit: {}", e);
            }
        }

        info!("Exiting application...");
        ui_result
    }

    /// Start a thread to handle session save requests.
    ///
    fn start_session_saver(session: Session, receiver: SessionSaveReceiver) -> JoinHandle<()> {
        debug!("Creating new thread for session saves...");
        thread::spawn(move || {
            while let Ok(saved) = receiver.recv() {
                if let Err(e) = session.save(&saved) {
                    error!("Failed to save session: {}", e);
                }
            }
        })
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    fn start_ui(&mut self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut terminal = setup_terminal()?;
        let result = self.run(&mut terminal);
        restore_terminal(&mut terminal)?;
        result
    }

    fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            for entry in self.log_receiver.try_iter() {
                self.state.add_log_entry(entry);
            }
            terminal.draw(|frame| crate::ui::render(frame, &mut self.state))?;
            if !terminal_event_handler.handle_next(&mut self.state)? {
                debug!("Received application exit request.");
                return Ok(());
            }
        }
    }
}

/// Pick the navigation the surface starts with.
///
fn restore_navigation(session: Option<&Session>, config: &Config, fresh: bool) -> SavedNavigation {
    match session {
        Some(session) if config.restore_session && !fresh => {
            debug!("Restoring session from {}", session.file_path().display());
            session.load_or_default()
        }
        _ => SavedNavigation::default(),
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, AppError> {
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| AppError::Terminal(format!("Failed to enter alternate screen: {}", e)))?;
    enable_raw_mode()
        .map_err(|e| AppError::Terminal(format!("Failed to enable raw mode: {}", e)))?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<(), AppError> {
    disable_raw_mode()
        .map_err(|e| AppError::Terminal(format!("Failed to disable raw mode: {}", e)))?;
    execute!(io::stdout(), LeaveAlternateScreen)
        .map_err(|e| AppError::Terminal(format!("Failed to leave alternate screen: {}", e)))?;
    terminal.show_cursor()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Destination;
    use tempfile::TempDir;

    fn loaded_config(dir: &TempDir) -> Config {
        let mut config = Config::new();
        config.load(dir.path().to_str()).unwrap();
        config
    }

    #[test]
    fn restores_saved_destination() {
        let dir = TempDir::new().unwrap();
        let config = loaded_config(&dir);
        let session = Session::new(dir.path());
        session
            .save(&SavedNavigation {
                destination: Destination::Favorites,
            })
            .unwrap();
        let saved = restore_navigation(Some(&session), &config, false);
        assert_eq!(saved.destination, Destination::Favorites);
    }

    #[test]
    fn fresh_start_ignores_session() {
        let dir = TempDir::new().unwrap();
        let config = loaded_config(&dir);
        let session = Session::new(dir.path());
        session
            .save(&SavedNavigation {
                destination: Destination::Profile,
            })
            .unwrap();
        let saved = restore_navigation(Some(&session), &config, true);
        assert_eq!(saved.destination, Destination::Home);
    }

    #[test]
    fn disabled_restore_starts_at_home() {
        let dir = TempDir::new().unwrap();
        let mut config = loaded_config(&dir);
        config.restore_session = false;
        let session = Session::new(dir.path());
        session
            .save(&SavedNavigation {
                destination: Destination::Profile,
            })
            .unwrap();
        let saved = restore_navigation(Some(&session), &config, false);
        assert_eq!(saved.destination, Destination::Home);
    }

    #[test]
    fn saver_thread_writes_requests() {
        let dir = TempDir::new().unwrap();
        let session = Session::new(dir.path());
        let (tx, rx) = mpsc::channel();
        let handle = App::start_session_saver(session.clone(), rx);
        tx.send(SavedNavigation {
            destination: Destination::Favorites,
        })
        .unwrap();
        tx.send(SavedNavigation {
            destination: Destination::Profile,
        })
        .unwrap();
        drop(tx);
        handle.join().unwrap();
        assert_eq!(
            session.load().unwrap().map(|s| s.destination),
            Some(Destination::Profile)
        );
    }
}

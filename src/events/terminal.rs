use crate::config::hotkeys::resolve_action;
use crate::config::HotkeyAction;
use crate::state::{Destination, State};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            if tx_clone.send(Event::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => (),
                        Err(e) => error!("Failed to read terminal event: {}", e),
                    },
                    Ok(false) => (),
                    Err(e) => error!("Failed to poll terminal events: {}", e),
                }
                if tx_clone.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        let event = self.rx.recv()?;
        Ok(handle_event(event, state))
    }
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

/// Apply a single terminal event to the state. Returns false if exit was
/// requested.
///
pub fn handle_event(event: Event<KeyEvent>, state: &mut State) -> bool {
    match event {
        Event::Input(key) => handle_key(key, state),
        Event::Tick => {
            state.tick();
            true
        }
    }
}

fn handle_key(key: KeyEvent, state: &mut State) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }

    let action = resolve_action(
        &key,
        state.current_destination(),
        state.is_debug_mode(),
        state.get_hotkeys(),
    );
    let action = match action {
        Some(action) => action,
        None => {
            trace!("Skipping processing of terminal event '{:?}'...", key);
            return true;
        }
    };

    debug!("Processing {:?} for terminal event '{:?}'...", action, key);
    match action {
        HotkeyAction::Quit => return false,
        HotkeyAction::NextDestination => {
            state.next_destination();
        }
        HotkeyAction::PrevDestination => {
            state.previous_destination();
        }
        HotkeyAction::GoHome => {
            state.select_destination(Destination::Home);
        }
        HotkeyAction::GoFavorites => {
            state.select_destination(Destination::Favorites);
        }
        HotkeyAction::GoProfile => {
            state.select_destination(Destination::Profile);
        }
        HotkeyAction::EnterDebug => {
            state.enter_debug_mode();
        }
        HotkeyAction::DismissSnackbar => {
            state.dismiss_snackbar();
        }
        HotkeyAction::NavigateNext => {
            state.next_entry();
        }
        HotkeyAction::NavigatePrev => {
            state.previous_entry();
        }
        HotkeyAction::Activate => {
            state.activate_entry();
        }
        HotkeyAction::DebugModeNavigateNext => {
            state.next_debug();
        }
        HotkeyAction::DebugModeNavigatePrev => {
            state.previous_debug();
        }
        HotkeyAction::DebugModeExit => {
            state.exit_debug_mode();
        }
    }
    true
}

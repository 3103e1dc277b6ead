//! Destination routing.
//!
//! The router owns the single navigation cell of the top-level surface, maps
//! the held destination to the screen the body should draw, and is the only
//! path through which the selection changes.

use crate::state::{Destination, SavedNavigation};
use log::*;

/// Screen descriptor handed to the rendering surface.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Screen {
    ItemList,
    Placeholder { text: &'static str },
}

/// Map a destination to its screen.
///
pub fn render(destination: Destination) -> Screen {
    match destination {
        Destination::Home => Screen::ItemList,
        Destination::Favorites => Screen::Placeholder {
            text: "Favorites screen",
        },
        Destination::Profile => Screen::Placeholder {
            text: "Profile screen",
        },
    }
}

/// Holds exactly one destination. Only the router writes to it.
///
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
struct NavigationState {
    current: Destination,
}

/// Oversees the current destination and translates selections into state
/// transitions.
///
#[derive(Debug, Default, Clone)]
pub struct Router {
    state: NavigationState,
}

impl Router {
    /// Return a new instance starting at Home.
    ///
    pub fn new() -> Self {
        Router::default()
    }

    /// Rebuild a router from a previously saved snapshot.
    ///
    pub fn restore(saved: SavedNavigation) -> Self {
        debug!("Restoring navigation at {:?}...", saved.destination);
        Router {
            state: NavigationState {
                current: saved.destination,
            },
        }
    }

    /// Take a snapshot of the navigation state.
    ///
    pub fn save(&self) -> SavedNavigation {
        SavedNavigation {
            destination: self.state.current,
        }
    }

    /// Return the current destination.
    ///
    pub fn current(&self) -> Destination {
        self.state.current
    }

    /// Set the current destination.
    ///
    pub fn select(&mut self, destination: Destination) {
        if self.state.current != destination {
            debug!(
                "Navigating from {:?} to {:?}...",
                self.state.current, destination
            );
        }
        self.state.current = destination;
    }

    /// Select the destination to the right of the current one.
    ///
    pub fn next(&mut self) {
        self.select(self.state.current.following());
    }

    /// Select the destination to the left of the current one.
    ///
    pub fn previous(&mut self) {
        self.select(self.state.current.preceding());
    }

    /// Return the screen for the current destination.
    ///
    pub fn screen(&self) -> Screen {
        render(self.state.current)
    }
}

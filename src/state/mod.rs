//! Application state management module.
//!
//! This module contains the state of the top-level surface, including:
//! - Main `State` struct that owns the router and per-screen data
//! - Navigation types (Destination, SavedNavigation)
//! - Home screen types (ListEntry, Snackbar)

mod home;
mod navigation;

pub use home::DEFAULT_SNACKBAR_TICKS;
pub use navigation::{Destination, SavedNavigation};

// State struct, methods and Default impl are in state_impl.rs
#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;

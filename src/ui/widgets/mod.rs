//! Reusable UI widget components.
//!
//! This module contains the shared styling helpers.

pub mod styling;

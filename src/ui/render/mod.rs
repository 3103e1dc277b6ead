mod all;
mod footer;
mod home;
mod log;
mod placeholder;
mod snackbar;
mod tabs;

use self::log::log;
use super::*;
use footer::footer;
use home::home;
use placeholder::placeholder;
use snackbar::snackbar;
use tabs::tabs;

pub use all::all as render;

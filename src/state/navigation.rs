//! Navigation-related state types.
//!
//! This module contains the closed set of destinations the top-level surface
//! can show, and the snapshot used to carry the selection across a rebuild.

use serde::{Deserialize, Serialize};

/// Specifying the different destinations.
///
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    #[default]
    Home,
    Favorites,
    Profile,
}

impl Destination {
    /// Every destination in tab bar order.
    ///
    pub const ALL: [Destination; 3] = [
        Destination::Home,
        Destination::Favorites,
        Destination::Profile,
    ];

    /// Return the label shown in the navigation bar.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            Destination::Home => "Home",
            Destination::Favorites => "Favorites",
            Destination::Profile => "Profile",
        }
    }

    /// Return the glyph shown next to the label in the navigation bar.
    ///
    pub fn icon(&self) -> &'static str {
        match self {
            Destination::Home => "⌂",
            Destination::Favorites => "♥",
            Destination::Profile => "☺",
        }
    }

    /// Return the position of the destination in the navigation bar.
    ///
    pub fn index(&self) -> usize {
        match self {
            Destination::Home => 0,
            Destination::Favorites => 1,
            Destination::Profile => 2,
        }
    }

    /// Return the destination to the right, wrapping to the first.
    ///
    pub fn following(&self) -> Destination {
        Destination::ALL[(self.index() + 1) % Destination::ALL.len()]
    }

    /// Return the destination to the left, wrapping to the last.
    ///
    pub fn preceding(&self) -> Destination {
        let len = Destination::ALL.len();
        Destination::ALL[(self.index() + len - 1) % len]
    }
}

/// Snapshot of the navigation selection written before the surface is torn
/// down and read back when it is rebuilt.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SavedNavigation {
    pub destination: Destination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_destination() {
        assert_eq!(Destination::default(), Destination::Home);
        assert_eq!(SavedNavigation::default().destination, Destination::Home);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Destination::Home.label(), "Home");
        assert_eq!(Destination::Favorites.label(), "Favorites");
        assert_eq!(Destination::Profile.label(), "Profile");
    }

    #[test]
    fn test_icons_are_distinct() {
        assert_ne!(Destination::Home.icon(), Destination::Favorites.icon());
        assert_ne!(Destination::Favorites.icon(), Destination::Profile.icon());
        assert_ne!(Destination::Home.icon(), Destination::Profile.icon());
    }

    #[test]
    fn test_index_matches_tab_order() {
        for (i, destination) in Destination::ALL.iter().enumerate() {
            assert_eq!(destination.index(), i);
        }
    }

    #[test]
    fn test_following_wraps() {
        assert_eq!(Destination::Home.following(), Destination::Favorites);
        assert_eq!(Destination::Favorites.following(), Destination::Profile);
        assert_eq!(Destination::Profile.following(), Destination::Home);
    }

    #[test]
    fn test_preceding_wraps() {
        assert_eq!(Destination::Home.preceding(), Destination::Profile);
        assert_eq!(Destination::Profile.preceding(), Destination::Favorites);
        assert_eq!(Destination::Favorites.preceding(), Destination::Home);
    }

    #[test]
    fn test_saved_navigation_yaml() {
        let saved = SavedNavigation {
            destination: Destination::Favorites,
        };
        let serialized = serde_yaml::to_string(&saved).unwrap();
        assert!(serialized.contains("destination: favorites"));
        let deserialized: SavedNavigation = serde_yaml::from_str(&serialized).unwrap();
        assert_eq!(saved, deserialized);
    }

    #[test]
    fn test_saved_navigation_rejects_unknown_destination() {
        let result = serde_yaml::from_str::<SavedNavigation>("destination: settings\n");
        assert!(result.is_err());
    }
}

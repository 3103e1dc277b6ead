//! Home screen state types.
//!
//! This module contains the sample entries listed on the Home destination and
//! the snackbar shown when one of them is activated.

/// Number of sample entries listed on Home.
///
pub const SAMPLE_ENTRY_COUNT: usize = 20;

/// Default number of ticks a snackbar stays visible.
///
pub const DEFAULT_SNACKBAR_TICKS: u32 = 66;

/// A single row of the Home list.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ListEntry {
    pub headline: String,
    pub supporting: String,
}

impl ListEntry {
    /// Return the glyph drawn before the headline.
    ///
    pub fn leading_icon(&self) -> &'static str {
        "☺"
    }

    /// Return the glyph drawn at the end of the row.
    ///
    pub fn trailing_icon(&self) -> &'static str {
        "✓"
    }
}

/// Build the sample entries shown on Home.
///
pub fn sample_entries() -> Vec<ListEntry> {
    (1..=SAMPLE_ENTRY_COUNT)
        .map(|n| ListEntry {
            headline: format!("List item number {}", n),
            supporting: "This is supporting text".to_string(),
        })
        .collect()
}

/// A short-lived message shown at the bottom of the body.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Snackbar {
    pub message: String,
    remaining_ticks: u32,
}

impl Snackbar {
    pub fn new(message: String, ticks: u32) -> Self {
        Snackbar {
            message,
            remaining_ticks: ticks,
        }
    }

    /// Count down one tick. Returns false once the snackbar has expired.
    ///
    pub fn tick(&mut self) -> bool {
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        self.remaining_ticks > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_entries() {
        let entries = sample_entries();
        assert_eq!(entries.len(), SAMPLE_ENTRY_COUNT);
        assert_eq!(entries[0].headline, "List item number 1");
        assert_eq!(entries[19].headline, "List item number 20");
        assert!(entries.iter().all(|e| e.supporting == "This is supporting text"));
    }

    #[test]
    fn test_entry_icons() {
        let entry = &sample_entries()[0];
        assert_eq!(entry.leading_icon(), "☺");
        assert_eq!(entry.trailing_icon(), "✓");
    }

    #[test]
    fn test_snackbar_expires() {
        let mut snackbar = Snackbar::new("hello".to_string(), 2);
        assert!(snackbar.tick());
        assert_eq!(snackbar.remaining_ticks, 1);
        assert!(!snackbar.tick());
        assert!(!snackbar.tick());
        assert_eq!(snackbar.remaining_ticks, 0);
    }

    #[test]
    fn test_snackbar_zero_ticks() {
        let mut snackbar = Snackbar::new("gone".to_string(), 0);
        assert!(!snackbar.tick());
    }
}

use super::{footer, home, log, placeholder, snackbar, tabs, Frame};
use crate::router::Screen;
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

const TABS_HEIGHT: u16 = 3;
const LOG_HEIGHT: u16 = 10;
const FOOTER_HEIGHT: u16 = 1;

/// Split the frame into navigation bar, body, optional log pane and footer.
///
pub fn layout(size: Rect, show_log: bool) -> (Rect, Rect, Option<Rect>, Rect) {
    let mut constraints = vec![Constraint::Length(TABS_HEIGHT), Constraint::Min(0)];
    if show_log {
        constraints.push(Constraint::Length(LOG_HEIGHT));
    }
    constraints.push(Constraint::Length(FOOTER_HEIGHT));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    if show_log {
        (rows[0], rows[1], Some(rows[2]), rows[3])
    } else {
        (rows[0], rows[1], None, rows[2])
    }
}

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let (tabs_area, body_area, log_area, footer_area) =
        layout(frame.size(), state.is_log_visible());

    tabs(frame, tabs_area, state);

    match state.current_screen() {
        Screen::ItemList => home(frame, body_area, state),
        Screen::Placeholder { text } => placeholder(frame, body_area, text, state),
    }

    if state.get_snackbar().is_some() {
        snackbar(frame, body_area, state);
    }

    if let Some(log_area) = log_area {
        log(frame, log_area, state);
    }

    footer(frame, footer_area, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Destination;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(state: &mut State) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| all(frame, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn layout_without_log() {
        let (tabs, body, log, footer) = layout(Rect::new(0, 0, 80, 30), false);
        assert_eq!(tabs.height, TABS_HEIGHT);
        assert!(log.is_none());
        assert_eq!(footer.height, FOOTER_HEIGHT);
        assert_eq!(body.height, 30 - TABS_HEIGHT - FOOTER_HEIGHT);
    }

    #[test]
    fn layout_with_log() {
        let (_, body, log, _) = layout(Rect::new(0, 0, 80, 30), true);
        assert_eq!(log.map(|r| r.height), Some(LOG_HEIGHT));
        assert_eq!(body.height, 30 - TABS_HEIGHT - LOG_HEIGHT - FOOTER_HEIGHT);
    }

    #[test]
    fn home_draws_item_list() {
        let mut state = State::default();
        let screen = draw(&mut state);
        assert!(screen.contains("Home"));
        assert!(screen.contains("Favorites"));
        assert!(screen.contains("Profile"));
        assert!(screen.contains("Home (1/20)"));
        assert!(screen.contains("List item number 1"));
        assert!(!screen.contains("Favorites screen"));
    }

    #[test]
    fn placeholders_draw_their_text() {
        let mut state = State::default();
        state.select_destination(Destination::Favorites);
        let screen = draw(&mut state);
        assert!(screen.contains("Favorites screen"));
        assert!(!screen.contains("List item number 1"));

        state.select_destination(Destination::Profile);
        let screen = draw(&mut state);
        assert!(screen.contains("Profile screen"));
    }

    #[test]
    fn snackbar_is_drawn() {
        let mut state = State::default();
        state.activate_entry();
        let screen = draw(&mut state);
        assert!(screen.contains("Clicked: List item number 1"));
    }

    #[test]
    fn log_pane_in_debug_mode() {
        let mut state = State::default();
        state.add_log_entry("a log line".to_string());
        assert!(!draw(&mut state).contains("a log line"));
        state.enter_debug_mode();
        assert!(draw(&mut state).contains("a log line"));
    }
}

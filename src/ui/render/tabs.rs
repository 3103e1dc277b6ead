use super::Frame;
use crate::state::{Destination, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
};

const BLOCK_TITLE: &str = "navsuite";

/// Return the navigation bar title for a destination.
///
pub fn tab_title(destination: Destination) -> String {
    format!("{} {}", destination.icon(), destination.label())
}

/// Render navigation bar according to state.
///
pub fn tabs(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let titles: Vec<Line> = Destination::ALL
        .iter()
        .map(|destination| Line::from(tab_title(*destination)))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme))
        .title(Span::styled(BLOCK_TITLE, styling::active_block_title_style()));

    let tabs = Tabs::new(titles)
        .block(block)
        .style(styling::normal_text_style(theme))
        .highlight_style(styling::active_tab_style(theme))
        .select(state.current_destination().index())
        .divider("|");

    frame.render_widget(tabs, size);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_titles_carry_icon_and_label() {
        assert_eq!(tab_title(Destination::Home), "⌂ Home");
        assert_eq!(tab_title(Destination::Favorites), "♥ Favorites");
        assert_eq!(tab_title(Destination::Profile), "☺ Profile");
    }
}

use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

/// Render log widget according to state.
///
pub fn log(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = if state.is_debug_mode() {
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::active_block_border_style(theme))
            .title(Span::styled(
                "Log (DEBUG MODE)",
                Style::default().fg(theme.info.to_color()),
            ))
    } else {
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style(theme))
            .title("Log")
    };

    let items: Vec<ListItem> = state
        .get_debug_entries()
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(Span::styled(
                entry.as_str(),
                styling::normal_text_style(theme),
            )))
        })
        .collect();

    let mut list = List::new(items)
        .style(styling::normal_text_style(theme))
        .block(block);
    if state.is_debug_mode() {
        list = list.highlight_style(styling::current_list_item_style(theme));
    }

    // The selection keeps the newest entry (or the debug cursor) in view
    let mut list_state = ListState::default();
    if !state.get_debug_entries().is_empty() {
        list_state.select(Some(state.get_debug_index()));
    }
    frame.render_stateful_widget(list, size, &mut list_state);
}

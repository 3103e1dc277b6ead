use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem},
};

const BLOCK_TITLE: &str = "Home";
const HIGHLIGHT_SYMBOL: &str = "> ";

/// Render the Home item list according to state.
///
pub fn home(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();

    let title = match state.selected_entry_index() {
        Some(i) => format!("{} ({}/{})", BLOCK_TITLE, i + 1, state.get_entries().len()),
        None => BLOCK_TITLE.to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(&theme))
        .title(Span::styled(title, styling::active_block_title_style()));

    // Borders and the highlight symbol take their share of the row
    let row_width = (size.width as usize).saturating_sub(2 + HIGHLIGHT_SYMBOL.len());
    let items: Vec<ListItem> = state
        .get_entries()
        .iter()
        .map(|entry| {
            let leading = format!("{} {}", entry.leading_icon(), entry.headline);
            let gap = row_width
                .saturating_sub(leading.chars().count() + entry.trailing_icon().chars().count())
                .max(1);
            ListItem::new(Text::from(vec![
                Line::from(vec![
                    Span::styled(leading, styling::normal_text_style(&theme)),
                    Span::raw(" ".repeat(gap)),
                    Span::styled(entry.trailing_icon(), styling::icon_style(&theme)),
                ]),
                Line::from(Span::styled(
                    format!("  {}", entry.supporting),
                    styling::muted_text_style(&theme),
                )),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(styling::current_list_item_style(&theme))
        .highlight_symbol(HIGHLIGHT_SYMBOL);

    frame.render_stateful_widget(list, size, state.get_entries_list_state());
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn rows_carry_leading_and_trailing_icons() {
        let mut state = State::default();
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.size();
                home(frame, area, &mut state)
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let row: String = (0..40).map(|x| buffer.get(x, 1).symbol()).collect();
        assert!(row.starts_with("│> ☺ List item number 1"));
        assert!(row.ends_with("✓│"));
    }
}

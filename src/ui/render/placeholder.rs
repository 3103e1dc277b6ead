use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

/// Return the single row in the vertical middle of the given area.
///
pub fn centered_row(area: Rect) -> Rect {
    Rect::new(area.x, area.y + area.height / 2, area.width, area.height.min(1))
}

/// Render a destination that only shows centered text.
///
pub fn placeholder(frame: &mut Frame, size: Rect, text: &str, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme))
        .title(state.current_destination().label());
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let paragraph = Paragraph::new(Span::styled(text.to_string(), styling::banner_style(theme)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, centered_row(inner));
}

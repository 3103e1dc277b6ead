use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Clear, Paragraph},
};

const SNACKBAR_HEIGHT: u16 = 3;
const HORIZONTAL_PADDING: u16 = 4;

/// Return the area of a snackbar holding text of the given width, anchored
/// to the bottom of the body.
///
pub fn snackbar_area(body: Rect, text_width: u16) -> Rect {
    let max_width = body.width.saturating_sub(2);
    let width = text_width.saturating_add(HORIZONTAL_PADDING).min(max_width);
    let height = SNACKBAR_HEIGHT.min(body.height.saturating_sub(1));
    let x = body.x + (body.width - width) / 2;
    let y = (body.y + body.height).saturating_sub(height + 1).max(body.y);
    Rect::new(x, y, width, height)
}

/// Render the snackbar on top of the body.
///
pub fn snackbar(frame: &mut Frame, body: Rect, state: &State) {
    let snackbar = match state.get_snackbar() {
        Some(snackbar) => snackbar,
        None => return,
    };
    let theme = state.get_theme();
    let text_width = u16::try_from(snackbar.message.chars().count()).unwrap_or(u16::MAX);
    let area = snackbar_area(body, text_width);

    frame.render_widget(Clear, area);
    let paragraph = Paragraph::new(snackbar.message.as_str())
        .style(styling::snackbar_style(theme))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snackbar_is_bottom_centered() {
        let body = Rect::new(0, 3, 80, 20);
        let area = snackbar_area(body, 10);
        assert_eq!(area.width, 14);
        assert_eq!(area.height, SNACKBAR_HEIGHT);
        assert_eq!(area.x, 33);
        assert_eq!(area.y, 3 + 20 - SNACKBAR_HEIGHT - 1);
    }

    #[test]
    fn snackbar_is_clamped_to_body() {
        let body = Rect::new(5, 0, 20, 2);
        let area = snackbar_area(body, 200);
        assert_eq!(area.width, 18);
        assert!(area.x >= body.x);
        assert!(area.y >= body.y);
        assert!(area.bottom() <= body.bottom());
    }
}

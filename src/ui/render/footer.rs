use super::Frame;
use crate::config::hotkeys::{build_footer_text, HotkeyAction};
use crate::state::{Destination, State};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Build the hotkey hints for the current state.
///
pub fn controls_text(state: &State) -> String {
    let hotkeys = state.get_hotkeys();
    if state.is_debug_mode() {
        return build_footer_text(
            &hotkeys.debug_mode,
            &[
                (
                    HotkeyAction::DebugModeNavigateNext,
                    "navigate logs",
                    Some(HotkeyAction::DebugModeNavigatePrev),
                ),
                (HotkeyAction::DebugModeExit, "exit debug mode", None),
            ],
        );
    }

    let global = build_footer_text(
        &hotkeys.global,
        &[
            (
                HotkeyAction::NextDestination,
                "switch",
                Some(HotkeyAction::PrevDestination),
            ),
            (HotkeyAction::EnterDebug, "debug mode", None),
            (HotkeyAction::Quit, "quit", None),
        ],
    );

    match state.current_destination() {
        Destination::Home => {
            let home = build_footer_text(
                &hotkeys.home,
                &[
                    (
                        HotkeyAction::NavigateNext,
                        "navigate",
                        Some(HotkeyAction::NavigatePrev),
                    ),
                    (HotkeyAction::Activate, "open", None),
                ],
            );
            [home, global]
                .into_iter()
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(",")
        }
        Destination::Favorites | Destination::Profile => global,
    }
}

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let controls_text = controls_text(state);

    let (mode, mode_color) = if state.is_debug_mode() {
        ("DEBUG:", theme.footer_debug)
    } else if state.current_destination() == Destination::Home {
        ("HOME:", theme.footer_home)
    } else {
        ("NORMAL:", theme.footer_normal)
    };

    let controls_content = Line::from(vec![
        Span::styled(
            mode,
            Style::default()
                .fg(theme.text.to_color())
                .bg(mode_color.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            controls_text,
            Style::default().fg(theme.warning.to_color()),
        ),
    ]);
    let controls_widget = Paragraph::new(controls_content).alignment(Alignment::Left);

    let right_content = Line::from(vec![Span::styled(
        format!(" {}", env!("CARGO_PKG_VERSION")),
        Style::default().fg(theme.secondary.to_color()),
    )]);
    let right_content_width = right_content.width();
    let right_widget = Paragraph::new(right_content).alignment(Alignment::Right);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(right_content_width.try_into().unwrap_or(0)),
        ])
        .split(size);

    frame.render_widget(controls_widget, columns[0]);
    frame.render_widget(right_widget, columns[1]);
}

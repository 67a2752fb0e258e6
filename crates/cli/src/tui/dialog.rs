use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use restock_config::theme::Theme;

use super::tc;

pub(crate) const CONFIRM_MESSAGE: &str = "Are you sure you want to delete the selected rows?";

/// Which prompt button currently has keyboard focus. Purely chrome; the
/// engine only tracks whether the prompt is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfirmButton {
    Yes,
    Cancel,
}

impl ConfirmButton {
    pub fn other(self) -> Self {
        match self {
            ConfirmButton::Yes => ConfirmButton::Cancel,
            ConfirmButton::Cancel => ConfirmButton::Yes,
        }
    }
}

/// Draw the delete-confirmation prompt as a centered popup over a cleared
/// region. The prompt holds no state: the caller decides visibility and
/// focus, and maps the confirm/cancel outcomes to actions.
pub(crate) fn draw_confirm(frame: &mut Frame, area: Rect, focus: ConfirmButton, theme: &Theme) {
    let popup_width: u16 = 58;
    let popup_height: u16 = 7;

    let x = area.width.saturating_sub(popup_width) / 2;
    let y = area.height.saturating_sub(popup_height) / 2;
    let popup = Rect::new(
        area.x + x,
        area.y + y,
        popup_width.min(area.width),
        popup_height.min(area.height),
    );

    let button_style = |focused: bool| {
        if focused {
            Style::default()
                .fg(tc(theme.cursor_fg))
                .bg(tc(theme.cursor_bg))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(tc(theme.text_dim))
        }
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", CONFIRM_MESSAGE),
            Style::default().fg(tc(theme.text)),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("            "),
            Span::styled("[ Yes ]", button_style(focus == ConfirmButton::Yes)),
            Span::raw("      "),
            Span::styled("[ Cancel ]", button_style(focus == ConfirmButton::Cancel)),
        ]),
        Line::from(""),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(tc(theme.header_fg)))
        .title(" Delete rows ")
        .title_style(
            Style::default()
                .fg(tc(theme.header_fg))
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(tc(theme.header_bg)));

    frame.render_widget(Clear, popup);
    let para = Paragraph::new(lines).block(block);
    frame.render_widget(para, popup);
}

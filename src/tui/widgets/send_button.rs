//! Send button — shows a busy caption while a submission is in flight.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Returns the caption for the send button.
pub fn send_label(is_submitting: bool) -> &'static str {
    if is_submitting {
        "Sending…"
    } else {
        "Send feedback"
    }
}

/// Renders the send button.
#[mutants::skip]
pub fn draw_send_button(is_submitting: bool, frame: &mut Frame, area: Rect) {
    let style = if is_submitting {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    };
    let block = Block::default()
        .title(" Ctrl+S ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let paragraph = Paragraph::new(send_label(is_submitting))
        .style(style)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

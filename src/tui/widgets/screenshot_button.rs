//! Screenshot button — take a shot, or show and remove the attached one.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::FileRef;

/// Returns the button caption for the current screenshot state.
pub fn screenshot_label(screenshot: Option<&FileRef>) -> String {
    match screenshot {
        Some(file) => format!("📎 {}", file.file_name()),
        None => "📷 Take screenshot".to_string(),
    }
}

/// Returns the key hint shown in the button border.
pub fn screenshot_hint(screenshot: Option<&FileRef>) -> &'static str {
    match screenshot {
        Some(_) => " Ctrl+R: remove ",
        None => " Ctrl+T ",
    }
}

/// Renders the screenshot button.
#[mutants::skip]
pub fn draw_screenshot_button(screenshot: Option<&FileRef>, frame: &mut Frame, area: Rect) {
    let color = if screenshot.is_some() {
        Color::Green
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(screenshot_hint(screenshot))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let caption = Line::from(Span::styled(
        screenshot_label(screenshot),
        Style::default().fg(Color::White),
    ));
    let paragraph = Paragraph::new(caption)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    fn render(screenshot: Option<&FileRef>) -> String {
        let backend = TestBackend::new(50, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_screenshot_button(screenshot, frame, frame.area()))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn label_without_screenshot() {
        assert_eq!(screenshot_label(None), "📷 Take screenshot");
    }

    #[test]
    fn label_with_screenshot_shows_file_name() {
        let file = FileRef::new("/tmp/tattle/screenshot-1.png");
        assert_eq!(screenshot_label(Some(&file)), "📎 screenshot-1.png");
    }

    #[test]
    fn hint_depends_on_state() {
        let file = FileRef::new("a.png");
        assert_eq!(screenshot_hint(None), " Ctrl+T ");
        assert_eq!(screenshot_hint(Some(&file)), " Ctrl+R: remove ");
    }

    #[test]
    fn renders_take_prompt() {
        let output = render(None);
        assert!(output.contains("Take screenshot"), "{output}");
        assert!(output.contains("Ctrl+T"));
    }

    #[test]
    fn renders_attached_file() {
        let file = FileRef::new("/tmp/shot.png");
        let output = render(Some(&file));
        assert!(output.contains("shot.png"), "{output}");
        assert!(output.contains("remove"));
    }
}

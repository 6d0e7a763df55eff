//! Success screen — shown after a report is delivered.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;

/// State for the success screen. It has none of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuccessState;

impl ScreenState for SuccessState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => Action::Navigate(Screen::TypeSelect),
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}

/// Renders the success screen.
#[mutants::skip]
pub fn draw_success(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "✔ Thanks for the feedback!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Enter: send another  q: quit").style(Style::default().fg(Color::DarkGray)),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn enter_sends_another() {
        let mut state = SuccessState;
        assert_eq!(
            state.handle_key(press(KeyCode::Enter)),
            Action::Navigate(Screen::TypeSelect)
        );
    }

    #[test]
    fn q_and_esc_quit() {
        let mut state = SuccessState;
        assert_eq!(state.handle_key(press(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(state.handle_key(press(KeyCode::Esc)), Action::Quit);
    }

    #[test]
    fn other_keys_ignored() {
        let mut state = SuccessState;
        assert_eq!(state.handle_key(press(KeyCode::Char('x'))), Action::None);
    }

    #[test]
    fn renders_thanks() {
        let backend = TestBackend::new(50, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_success(frame, frame.area()))
            .unwrap();
        let buf = terminal.backend().buffer();
        let text: String = (0..buf.area.height)
            .flat_map(|y| (0..buf.area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().chars().next().unwrap_or(' '))
            .collect();
        assert!(text.contains("Thanks for the feedback!"), "{text}");
        assert!(text.contains("send another"));
    }
}

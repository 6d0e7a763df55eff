//! Type selection screen — first step of the widget.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{FeedbackType, FeedbackTypeCatalog, FeedbackTypeInfo};
use crate::tui::action::{Action, ScreenState};

/// State for the type selection screen.
#[derive(Debug, Clone)]
pub struct TypeSelectState {
    entries: Vec<(FeedbackType, FeedbackTypeInfo)>,
    /// Index of the highlighted entry, or `None` if the catalog is empty.
    selected: Option<usize>,
}

impl TypeSelectState {
    /// Lists every type the catalog has display info for.
    pub fn new(catalog: &FeedbackTypeCatalog) -> Self {
        let entries: Vec<_> = catalog
            .types()
            .into_iter()
            .filter_map(|ty| catalog.get(ty).map(|info| (ty, info.clone())))
            .collect();
        let selected = if entries.is_empty() { None } else { Some(0) };
        Self { entries, selected }
    }

    /// Returns the listed types with their display info.
    pub fn entries(&self) -> &[(FeedbackType, FeedbackTypeInfo)] {
        &self.entries
    }

    /// Returns the selected index.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    fn select_current(&self) -> Action {
        self.selected
            .and_then(|i| self.entries.get(i))
            .map_or(Action::None, |(ty, _)| Action::OpenForm(*ty))
    }

    /// Moves the selection up by one (no wrap).
    fn select_prev(&mut self) {
        self.selected = match self.selected {
            Some(i) if i > 0 => Some(i - 1),
            other => other,
        };
    }

    /// Moves the selection down by one (no wrap).
    fn select_next(&mut self) {
        self.selected = match self.selected {
            Some(i) if i + 1 < self.entries.len() => Some(i + 1),
            other => other,
        };
    }
}

impl ScreenState for TypeSelectState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.select_prev();
                Action::None
            }
            KeyCode::Down => {
                self.select_next();
                Action::None
            }
            KeyCode::Enter => self.select_current(),
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}

/// Renders the type selection screen.
#[mutants::skip]
pub fn draw_type_select(state: &TypeSelectState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Leave your feedback ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [list_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let mut lines = vec![Line::from("")];
    if state.entries().is_empty() {
        lines.push(Line::from("No feedback types available."));
    }
    for (i, (_, info)) in state.entries().iter().enumerate() {
        let style = if state.selected() == Some(i) {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default()
        };
        lines.push(Line::styled(format!("  {}  {}  ", info.image, info.title), style));
        lines.push(Line::from(""));
    }
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        list_area,
    );

    let footer = Paragraph::new("↑/↓: choose  Enter: open  q: quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn make_state() -> TypeSelectState {
        TypeSelectState::new(&FeedbackTypeCatalog::default())
    }

    mod navigation {
        use super::*;

        #[test]
        fn starts_on_first_entry() {
            let state = make_state();
            assert_eq!(state.selected(), Some(0));
            assert_eq!(state.entries().len(), 3);
        }

        #[test]
        fn down_then_enter_opens_idea() {
            let mut state = make_state();
            state.handle_key(press(KeyCode::Down));
            assert_eq!(
                state.handle_key(press(KeyCode::Enter)),
                Action::OpenForm(FeedbackType::Idea)
            );
        }

        #[test]
        fn enter_opens_bug() {
            let mut state = make_state();
            assert_eq!(
                state.handle_key(press(KeyCode::Enter)),
                Action::OpenForm(FeedbackType::Bug)
            );
        }

        #[test]
        fn up_at_top_stays() {
            let mut state = make_state();
            state.handle_key(press(KeyCode::Up));
            assert_eq!(state.selected(), Some(0));
        }

        #[test]
        fn down_at_bottom_stays() {
            let mut state = make_state();
            for _ in 0..5 {
                state.handle_key(press(KeyCode::Down));
            }
            assert_eq!(state.selected(), Some(2));
        }

        #[test]
        fn q_and_esc_quit() {
            let mut state = make_state();
            assert_eq!(state.handle_key(press(KeyCode::Char('q'))), Action::Quit);
            assert_eq!(state.handle_key(press(KeyCode::Esc)), Action::Quit);
        }

        #[test]
        fn other_keys_ignored() {
            let mut state = make_state();
            assert_eq!(state.handle_key(press(KeyCode::Char('x'))), Action::None);
        }

        #[test]
        fn empty_catalog_selects_nothing() {
            let mut state = TypeSelectState::new(&FeedbackTypeCatalog::new([]));
            assert_eq!(state.selected(), None);
            state.handle_key(press(KeyCode::Down));
            assert_eq!(state.handle_key(press(KeyCode::Enter)), Action::None);
        }
    }

    mod rendering {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        use super::*;

        fn render(state: &TypeSelectState) -> String {
            let backend = TestBackend::new(60, 12);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| draw_type_select(state, frame, frame.area()))
                .unwrap();
            let buf = terminal.backend().buffer();
            let mut s = String::new();
            for y in 0..buf.area.height {
                for x in 0..buf.area.width {
                    s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
                }
                s.push('\n');
            }
            s
        }

        #[test]
        fn renders_all_titles() {
            let output = render(&make_state());
            assert!(output.contains("Problem"), "{output}");
            assert!(output.contains("Idea"));
            assert!(output.contains("Other"));
        }

        #[test]
        fn renders_empty_message() {
            let output = render(&TypeSelectState::new(&FeedbackTypeCatalog::new([])));
            assert!(output.contains("No feedback types"), "{output}");
        }
    }
}

//! # TitleBar Component
//!
//! Two centered lines at the top of the form: the application title and
//! the question it answers.
//!
//! Stateless: it receives both strings as props and renders them.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub const APP_TITLE: &str = "IMC For II-Master BDCC 1";
pub const APP_SUBTITLE: &str = "Quel est votre IMC ?";

pub struct TitleBar {
    pub title: String,
    pub subtitle: String,
}

impl TitleBar {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }

    /// Rows needed to render without clipping.
    pub const fn height() -> u16 {
        2
    }
}

impl Default for TitleBar {
    fn default() -> Self {
        Self::new(APP_TITLE, APP_SUBTITLE)
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                self.title.as_str(),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.subtitle.as_str(),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_title_bar_renders_both_lines() {
        let backend = TestBackend::new(40, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut title_bar = TitleBar::default();

        terminal
            .draw(|f| {
                let area = f.area();
                title_bar.render(f, area);
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("IMC For II-Master BDCC 1"));
        assert!(text.contains("Quel est votre IMC ?"));
    }

    #[test]
    fn test_title_bar_renders_changed_subtitle() {
        let backend = TestBackend::new(40, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut title_bar = TitleBar::default();
        title_bar.subtitle = "Autre question".to_string();

        terminal
            .draw(|f| {
                let area = f.area();
                title_bar.render(f, area);
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains(APP_TITLE));
        assert!(text.contains("Autre question"));
        assert!(!text.contains(APP_SUBTITLE));
    }
}

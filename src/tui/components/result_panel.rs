//! # ResultPanel Component
//!
//! Shows the message line and, once a calculation succeeded, the formatted
//! BMI with its band's label, advice and illustration reference.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::core::engine::ClassificationResult;
use crate::tui::component::Component;

pub struct ResultPanel<'a> {
    pub message: &'a str,
    pub result: Option<&'a ClassificationResult>,
}

impl<'a> ResultPanel<'a> {
    pub fn new(message: &'a str, result: Option<&'a ClassificationResult>) -> Self {
        Self { message, result }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = vec![Line::from(Span::styled(
            self.message,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ))];

        let Some(result) = self.result else {
            return lines;
        };
        let category = result.category;

        lines.push(Line::from(Span::styled(
            result.formatted.clone(),
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            category.label,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            category.advice,
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("[image: {}]", category.image),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
        lines
    }
}

impl Component for ResultPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.lines())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::evaluate;
    use crate::core::input::ParseMode;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(panel: &mut ResultPanel) -> String {
        let backend = TestBackend::new(80, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                panel.render(f, area);
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_message_only_without_result() {
        let mut panel = ResultPanel::new("Votre IMC est:", None);
        let text = render(&mut panel);
        assert!(text.contains("Votre IMC est:"));
        assert!(!text.contains("image"));
    }

    #[test]
    fn test_full_result() {
        let result = evaluate("70", "175", ParseMode::Prefix).unwrap();
        let mut panel = ResultPanel::new("Votre IMC est:", Some(&result));
        let text = render(&mut panel);
        assert!(text.contains("22,86"));
        assert!(text.contains("Corpulence normale"));
        assert!(text.contains("Continuez vos bonnes habitudes"));
        assert!(text.contains("assets/normal.jpg"));
    }
}

//! # AlertPopup Component
//!
//! Centered modal box drawn over the form. Clears what is underneath so the
//! form text does not bleed through.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph, Wrap};

use crate::core::state::Alert;
use crate::tui::component::Component;

const POPUP_WIDTH: u16 = 52;
const POPUP_HEIGHT: u16 = 7;

pub struct AlertPopup<'a> {
    pub alert: &'a Alert,
}

impl<'a> AlertPopup<'a> {
    pub fn new(alert: &'a Alert) -> Self {
        Self { alert }
    }
}

/// Center a `width` x `height` box inside `area`, shrinking to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

impl Component for AlertPopup<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let popup = centered(area, POPUP_WIDTH, POPUP_HEIGHT);
        frame.render_widget(Clear, popup);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Red))
            .title(Span::styled(
                format!(" {} ", self.alert.title),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));

        let lines = vec![
            Line::from(self.alert.body.as_str()),
            Line::default(),
            Line::from(Span::styled("[Entrée] OK", Style::default().fg(Color::DarkGray))),
        ];
        let body = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(body, popup);
    }
}

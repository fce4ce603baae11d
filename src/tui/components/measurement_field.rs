//! # MeasurementField Component
//!
//! One labelled input row of the form:
//!
//! ```text
//! Poids   70,5________________________ Kg
//! ```
//!
//! The text buffer is internal state; `focused` is a prop set by the parent
//! every frame. Every edit emits `FieldEvent::Changed` with the full text so
//! the core `App` always mirrors what is on screen.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const LABEL_WIDTH: u16 = 8;
const UNIT_WIDTH: u16 = 4;

/// High-level events emitted by a MeasurementField
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    /// Buffer changed; carries the new text
    Changed(String),
    /// Enter pressed on this field
    Submit,
}

pub struct MeasurementField {
    pub label: &'static str,
    pub unit: &'static str,
    pub placeholder: &'static str,
    /// Text typed so far (Internal State)
    pub buffer: String,
    /// Whether the field has keyboard focus (Prop)
    pub focused: bool,
}

impl MeasurementField {
    pub fn new(label: &'static str, unit: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            unit,
            placeholder,
            buffer: String::new(),
            focused: false,
        }
    }

    pub fn weight() -> Self {
        Self::new("Poids", "Kg", "Entrez votre poids")
    }

    pub fn height() -> Self {
        Self::new("Taille", "Cm", "Entrez votre taille")
    }

    /// Rows needed: the text line plus its underline.
    pub const fn height_rows() -> u16 {
        2
    }

    fn accepts(c: char) -> bool {
        !c.is_control()
    }
}

/// The longest suffix of `text` that fits in `width` columns with one
/// column left over for the cursor.
fn visible_tail(text: &str, width: u16) -> &str {
    let room = usize::from(width.saturating_sub(1));
    let mut used = text.width();
    let mut start = 0;
    for (i, c) in text.char_indices() {
        if used <= room {
            break;
        }
        used -= c.width().unwrap_or(0);
        start = i + c.len_utf8();
    }
    &text[start..]
}

impl EventHandler for MeasurementField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FieldEvent> {
        match event {
            TuiEvent::InputChar(c) if Self::accepts(*c) => {
                self.buffer.push(*c);
                Some(FieldEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Paste(data) => {
                let before = self.buffer.len();
                self.buffer.extend(data.chars().filter(|c| Self::accepts(*c)));
                (self.buffer.len() != before).then(|| FieldEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Backspace => self
                .buffer
                .pop()
                .map(|_| FieldEvent::Changed(self.buffer.clone())),
            TuiEvent::Submit => Some(FieldEvent::Submit),
            _ => None,
        }
    }
}

impl Component for MeasurementField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [label_area, input_area, unit_area] = Layout::horizontal([
            Constraint::Length(LABEL_WIDTH),
            Constraint::Min(1),
            Constraint::Length(UNIT_WIDTH),
        ])
        .areas(area);

        let accent = if self.focused {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default().fg(Color::Gray)
        };
        let bold_accent = accent.add_modifier(Modifier::BOLD);

        frame.render_widget(Span::styled(self.label, bold_accent), label_area);

        let shown = visible_tail(&self.buffer, input_area.width);
        let content = if self.buffer.is_empty() {
            Span::styled(self.placeholder, Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(shown)
        };
        let input = Paragraph::new(content).block(
            Block::new()
                .borders(Borders::BOTTOM)
                .border_style(accent),
        );
        frame.render_widget(input, input_area);

        frame.render_widget(Span::styled(format!(" {}", self.unit), bold_accent), unit_area);

        if self.focused {
            let typed = u16::try_from(shown.width()).unwrap_or(u16::MAX);
            let x = input_area.x + typed.min(input_area.width.saturating_sub(1));
            frame.set_cursor_position(Position::new(x, input_area.y));
        }
    }
}

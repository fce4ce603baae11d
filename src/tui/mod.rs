//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the form,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only redraws after an event (key, paste or
//! resize). Between events it blocks in `poll` for up to 500ms.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call.

mod component;
mod components;
mod event;
mod ui;

use log::info;
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::engine::Field;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{FieldEvent, MeasurementField};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// Which form control has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Weight,
    Height,
    Button,
}

impl Focus {
    /// Get next control (wraps around)
    const fn next(self) -> Self {
        match self {
            Self::Weight => Self::Height,
            Self::Height => Self::Button,
            Self::Button => Self::Weight,
        }
    }

    /// Get previous control (wraps around)
    const fn previous(self) -> Self {
        match self {
            Self::Weight => Self::Button,
            Self::Height => Self::Weight,
            Self::Button => Self::Height,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub weight: MeasurementField,
    pub height: MeasurementField,
    pub focus: Focus,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            weight: MeasurementField::weight(),
            height: MeasurementField::height(),
            focus: Focus::Weight, // User expects to type immediately
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut MeasurementField {
        match field {
            Field::Weight => &mut self.weight,
            Field::Height => &mut self.height,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset on redraw
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape,
            Hide // Hide cursor on exit
        );
    }
}

pub fn run(config: &ResolvedConfig) -> io::Result<()> {
    let mut app = App::from_config(config);
    let mut tui = TuiState::new();
    info!("Starting form (parse mode: {})", app.parse_mode.label());

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app, &mut tui);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, tui: &mut TuiState) -> io::Result<()> {
    let _terminal_mode_guard = TerminalModeGuard::new()?;
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };
        needs_redraw = true;

        // Process first event + drain all pending events before next draw
        let mut pending = Some(first_event);
        while let Some(event) = pending {
            if handle_event(app, tui, event) == Effect::Quit {
                info!("Quit requested");
                return Ok(());
            }
            pending = poll_event_immediate()?;
        }
    }
}

/// Route one terminal event through the focused control into `update`.
fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    if matches!(event, TuiEvent::ForceQuit) {
        return update(app, Action::Quit);
    }

    // An open alert is modal: it swallows everything but its own dismissal
    if app.alert.is_some() {
        if matches!(event, TuiEvent::Submit | TuiEvent::Escape) {
            return update(app, Action::DismissAlert);
        }
        return Effect::None;
    }

    match event {
        TuiEvent::Escape => update(app, Action::Quit),
        TuiEvent::NextField => {
            tui.focus = tui.focus.next();
            Effect::None
        }
        TuiEvent::PrevField => {
            tui.focus = tui.focus.previous();
            Effect::None
        }
        TuiEvent::Resize => Effect::None,
        event => match tui.focus {
            Focus::Weight => dispatch_field(app, tui, Field::Weight, &event),
            Focus::Height => dispatch_field(app, tui, Field::Height, &event),
            Focus::Button => match event {
                TuiEvent::Submit | TuiEvent::InputChar(' ') => update(app, Action::Calculate),
                _ => Effect::None,
            },
        },
    }
}

fn dispatch_field(app: &mut App, tui: &mut TuiState, field: Field, event: &TuiEvent) -> Effect {
    match tui.field_mut(field).handle_event(event) {
        Some(FieldEvent::Changed(text)) => update(app, Action::InputChanged { field, text }),
        // Enter on the weight row moves on, like the keyboard "next" key on mobile
        Some(FieldEvent::Submit) if field == Field::Weight => {
            tui.focus = Focus::Height;
            Effect::None
        }
        Some(FieldEvent::Submit) => update(app, Action::Calculate),
        None => Effect::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    fn type_str(app: &mut App, tui: &mut TuiState, s: &str) {
        for c in s.chars() {
            handle_event(app, tui, TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_focus_cycles() {
        assert_eq!(Focus::Weight.next(), Focus::Height);
        assert_eq!(Focus::Button.next(), Focus::Weight);
        assert_eq!(Focus::Weight.previous(), Focus::Button);
        assert_eq!(Focus::Height.previous(), Focus::Weight);
    }

    #[test]
    fn test_typing_mirrors_into_app() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        type_str(&mut app, &mut tui, "70,5");
        assert_eq!(app.weight_input, "70,5");
        assert_eq!(tui.weight.buffer, "70,5");
        assert!(app.height_input.is_empty());
    }

    #[test]
    fn test_full_flow_enter_enter() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        type_str(&mut app, &mut tui, "70");
        handle_event(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(tui.focus, Focus::Height);
        type_str(&mut app, &mut tui, "175");
        handle_event(&mut app, &mut tui, TuiEvent::Submit);

        let result = app.result.as_ref().unwrap();
        assert_eq!(result.formatted, "22,86");
        assert_eq!(result.category.label, "Corpulence normale");
    }

    #[test]
    fn test_button_calculates() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        type_str(&mut app, &mut tui, "45");
        handle_event(&mut app, &mut tui, TuiEvent::NextField);
        type_str(&mut app, &mut tui, "160");
        handle_event(&mut app, &mut tui, TuiEvent::NextField);
        assert_eq!(tui.focus, Focus::Button);
        // Typing on the button is ignored
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('9'));
        assert_eq!(app.height_input, "160");
        handle_event(&mut app, &mut tui, TuiEvent::InputChar(' '));
        assert_eq!(app.result.as_ref().unwrap().formatted, "17,58");
    }

    #[test]
    fn test_alert_is_modal() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        tui.focus = Focus::Button;
        handle_event(&mut app, &mut tui, TuiEvent::Submit);
        assert!(app.alert.is_some());

        // Keys other than Enter/Esc do nothing while the alert is up
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::NextField), Effect::None);
        assert_eq!(tui.focus, Focus::Button);

        // Esc dismisses instead of quitting
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::Escape), Effect::None);
        assert!(app.alert.is_none());
    }

    #[test]
    fn test_quit_paths() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::Escape), Effect::Quit);

        app.alert = Some(crate::core::state::Alert::invalid_input());
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::ForceQuit), Effect::Quit);
    }
}

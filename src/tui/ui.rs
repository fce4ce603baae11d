use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{AlertPopup, MeasurementField, ResultPanel, TitleBar};
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

const FORM_MAX_WIDTH: u16 = 60;
const BUTTON_LABEL: &str = "  Calculer IMC  ";
const HELP_TEXT: &str = "Tab/↑↓: champ  ·  Entrée: calculer  ·  Échap: quitter";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let area = form_column(frame.area());
    let [
        title_area,
        _,
        weight_area,
        height_area,
        _,
        button_area,
        _,
        result_area,
        help_area,
    ] = Layout::vertical([
        Length(TitleBar::height()),
        Length(1),
        Length(MeasurementField::height_rows()),
        Length(MeasurementField::height_rows()),
        Length(1),
        Length(1),
        Length(1),
        Min(0),
        Length(1),
    ])
    .areas(area);

    TitleBar::default().render(frame, title_area);

    // Sync focus props before rendering
    tui.weight.focused = tui.focus == Focus::Weight;
    tui.height.focused = tui.focus == Focus::Height;
    tui.weight.render(frame, weight_area);
    tui.height.render(frame, height_area);

    draw_button(frame, button_area, tui.focus == Focus::Button);

    ResultPanel::new(&app.message, app.result.as_ref()).render(frame, result_area);

    frame.render_widget(
        Paragraph::new(Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Center),
        help_area,
    );

    if let Some(alert) = &app.alert {
        let full = frame.area();
        AlertPopup::new(alert).render(frame, full);
    }
}

/// Horizontally center the form, capped at `FORM_MAX_WIDTH` columns.
fn form_column(area: Rect) -> Rect {
    let [column] = Layout::horizontal([Constraint::Max(FORM_MAX_WIDTH)])
        .flex(ratatui::layout::Flex::Center)
        .areas(area);
    column
}

fn draw_button(frame: &mut Frame, area: Rect, focused: bool) {
    let style = if focused {
        Style::default()
            .fg(Color::White)
            .bg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
    };
    let button = Paragraph::new(Span::styled(BUTTON_LABEL, style)).alignment(Alignment::Center);
    frame.render_widget(button, area);
}

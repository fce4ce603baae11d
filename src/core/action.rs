//! # Actions
//!
//! Everything that can happen on the form becomes an `Action`.
//! User types in the weight field? That's `Action::InputChanged { .. }`.
//! User presses "Calculer IMC"? That's `Action::Calculate`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and tells the caller what to do next. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::engine::{Field, evaluate};
use crate::core::state::{Alert, App, RESULT_MESSAGE};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A field's text was edited; carries the full new text
    InputChanged { field: Field, text: String },
    /// Run the BMI pipeline on the current field texts
    Calculate,
    /// Close the open alert
    DismissAlert,
    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::InputChanged { field, text } => {
            match field {
                Field::Weight => app.weight_input = text,
                Field::Height => app.height_input = text,
            }
            Effect::None
        }
        Action::Calculate => {
            match evaluate(&app.weight_input, &app.height_input, app.parse_mode) {
                Ok(result) => {
                    info!("BMI {} ({})", result.formatted, result.category.id);
                    app.result = Some(result);
                    app.alert = None;
                }
                Err(e) => {
                    info!("Calculation rejected: {}", e);
                    app.result = None;
                    app.alert = Some(Alert::invalid_input());
                }
            }
            app.message = RESULT_MESSAGE.to_string();
            Effect::None
        }
        Action::DismissAlert => {
            app.alert = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::ParseMode;
    use crate::core::state::{INVALID_INPUT_BODY, INVALID_INPUT_TITLE};
    use crate::test_support::{filled_app, test_app};

    #[test]
    fn test_input_changed_sets_field() {
        let mut app = test_app();
        let effect = update(
            &mut app,
            Action::InputChanged {
                field: Field::Height,
                text: "175".into(),
            },
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(app.height_input, "175");
        assert!(app.weight_input.is_empty());
    }

    #[test]
    fn test_calculate_success_stores_result() {
        let mut app = filled_app("70", "175");
        assert_eq!(update(&mut app, Action::Calculate), Effect::None);
        let result = app.result.as_ref().unwrap();
        assert_eq!(result.formatted, "22,86");
        assert_eq!(result.category.label, "Corpulence normale");
        assert!(app.alert.is_none());
        assert_eq!(app.message, "Votre IMC est:");
    }

    #[test]
    fn test_calculate_failure_clears_result_and_alerts() {
        let mut app = filled_app("70", "175");
        update(&mut app, Action::Calculate);
        assert!(app.result.is_some());

        update(
            &mut app,
            Action::InputChanged {
                field: Field::Weight,
                text: "abc".into(),
            },
        );
        // Editing alone keeps the last result on screen
        assert!(app.result.is_some());

        update(&mut app, Action::Calculate);
        assert!(app.result.is_none());
        let alert = app.alert.as_ref().unwrap();
        assert_eq!(alert.title, INVALID_INPUT_TITLE);
        assert_eq!(alert.body, INVALID_INPUT_BODY);
        assert_eq!(app.message, "Votre IMC est:");
    }

    #[test]
    fn test_recalculate_replaces_result() {
        let mut app = filled_app("45", "160");
        update(&mut app, Action::Calculate);
        assert_eq!(app.result.as_ref().unwrap().formatted, "17,58");

        update(
            &mut app,
            Action::InputChanged {
                field: Field::Weight,
                text: "120".into(),
            },
        );
        update(
            &mut app,
            Action::InputChanged {
                field: Field::Height,
                text: "170".into(),
            },
        );
        update(&mut app, Action::Calculate);
        let result = app.result.as_ref().unwrap();
        assert_eq!(result.formatted, "41,52");
        assert_eq!(result.category.id, "obesiteExtreme");
    }

    #[test]
    fn test_successful_calculate_clears_stale_alert() {
        let mut app = filled_app("", "175");
        update(&mut app, Action::Calculate);
        assert!(app.alert.is_some());

        app.weight_input = "70".into();
        update(&mut app, Action::Calculate);
        assert!(app.alert.is_none());
        assert!(app.result.is_some());
    }

    #[test]
    fn test_dismiss_alert() {
        let mut app = filled_app("0", "175");
        update(&mut app, Action::Calculate);
        assert!(app.alert.is_some());
        update(&mut app, Action::DismissAlert);
        assert!(app.alert.is_none());
        assert!(app.result.is_none());
    }

    #[test]
    fn test_strict_mode_app_rejects_suffix() {
        let mut app = filled_app("70kg", "175");
        app.parse_mode = ParseMode::Strict;
        update(&mut app, Action::Calculate);
        assert!(app.alert.is_some());
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}

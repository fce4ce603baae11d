//! # Category Classifier
//!
//! The five BMI bands, ascending. Each band is `[lower, upper)`: the lower
//! bound is inclusive and the upper bound exclusive, so a value sitting
//! exactly on a boundary belongs to the higher band.
//!
//! ```text
//!   maigreur    normal     surpoids   obesite    obesiteExtreme
//! ──────────┼──────────┼──────────┼──────────┼──────────────────
//!         18.5        25         30         40
//! ```

use std::fmt;

use log::warn;
use serde::Serialize;

use crate::core::bmi::BmiValue;

/// One BMI band with the text and image shown for it.
#[derive(Debug, PartialEq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
    pub advice: &'static str,
    /// Inclusive; `None` only for the first band
    pub lower_bound: Option<f64>,
    /// Exclusive; `None` only for the last band
    pub upper_bound: Option<f64>,
    /// Bundled asset path for the band's illustration
    pub image: &'static str,
}

impl Category {
    /// First-match predicate: the upper bound decides when present,
    /// otherwise the lower bound does.
    fn matches(&self, bmi: f64) -> bool {
        match (self.upper_bound, self.lower_bound) {
            (Some(upper), _) => bmi < upper,
            (None, Some(lower)) => bmi >= lower,
            (None, None) => true,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

pub static CATEGORIES: [Category; 5] = [
    Category {
        id: "maigreur",
        label: "Insuffisance pondérale",
        advice: "Ajoutez quelques calories et demandez conseil à un spécialiste.",
        lower_bound: None,
        upper_bound: Some(18.5),
        image: "assets/underweight.jpg",
    },
    Category {
        id: "normal",
        label: "Corpulence normale",
        advice: "Continuez vos bonnes habitudes sportives et alimentaires.",
        lower_bound: Some(18.5),
        upper_bound: Some(25.0),
        image: "assets/normal.jpg",
    },
    Category {
        id: "surpoids",
        label: "Surpoids",
        advice: "Bougez un peu plus et évitez les excès de sucre.",
        lower_bound: Some(25.0),
        upper_bound: Some(30.0),
        image: "assets/overweight.jpg",
    },
    Category {
        id: "obesite",
        label: "Obésité",
        advice: "Planifiez un suivi médical pour retrouver le bon rythme.",
        lower_bound: Some(30.0),
        upper_bound: Some(40.0),
        image: "assets/obese.jpg",
    },
    Category {
        id: "obesiteExtreme",
        label: "Obésité extrême",
        advice: "Consultez rapidement un professionnel de santé.",
        lower_bound: Some(40.0),
        upper_bound: None,
        image: "assets/extreme_obesity.jpg",
    },
];

/// Return the first band, in ascending order, that matches `bmi`.
///
/// The bands cover every non-NaN value, so the fallback to the first band
/// only fires on NaN or a broken table. It is logged and fails debug builds.
pub fn classify(bmi: BmiValue) -> &'static Category {
    let value = bmi.value();
    match CATEGORIES.iter().find(|c| c.matches(value)) {
        Some(category) => category,
        None => {
            warn!("No BMI category matched {value}, falling back to '{}'", CATEGORIES[0].id);
            debug_assert!(value.is_nan(), "category table has a gap at {value}");
            &CATEGORIES[0]
        }
    }
}

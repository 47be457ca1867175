use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::models::dish::DishType;

/// Every input on the dish form, named as it appears in the submitted payload.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    EnumString,
    EnumIter,
    AsRefStr,
    Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    Name,
    PreparationTime,
    #[serde(rename = "type")]
    #[strum(serialize = "type")]
    DishType,
    NoOfSlices,
    Diameter,
    SpicinessScale,
    SlicesOfBread,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::PreparationTime => "Preparation Time",
            Field::DishType => "Type",
            Field::NoOfSlices => "Number of slices",
            Field::Diameter => "Diameter",
            Field::SpicinessScale => "Spiciness scale",
            Field::SlicesOfBread => "Number of slices of bread",
        }
    }

    /// Inline message shown when the field is missing at submit time.
    pub fn required_message(self) -> &'static str {
        match self {
            Field::Name => "Please enter the name of the dish",
            Field::PreparationTime => "Please enter the Preparation time",
            Field::DishType => "Choose dish type",
            Field::NoOfSlices => "Please enter the number of slices",
            Field::Diameter => "Please enter the diameter",
            Field::SpicinessScale => "Please enter the Spiciness",
            Field::SlicesOfBread => "Please enter the number of slices",
        }
    }
}

/// Display state of a single field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldStatus {
    /// Neither success nor error is shown.
    #[default]
    Neutral,
    Success,
    Error(String),
}

impl FieldStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, FieldStatus::Success)
    }

    pub fn help(&self) -> Option<&str> {
        match self {
            FieldStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Short name used for styling and in JSON responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldStatus::Neutral => "neutral",
            FieldStatus::Success => "success",
            FieldStatus::Error(_) => "error",
        }
    }
}

static NEUTRAL: FieldStatus = FieldStatus::Neutral;

/// Validation state of the whole form, keyed by field. Fields without an
/// entry are neutral.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationState {
    fields: BTreeMap<Field, FieldStatus>,
}

impl ValidationState {
    pub fn get(&self, field: Field) -> &FieldStatus {
        self.fields.get(&field).unwrap_or(&NEUTRAL)
    }

    pub fn set(&mut self, field: Field, status: FieldStatus) {
        if status == FieldStatus::Neutral {
            self.fields.remove(&field);
        } else {
            self.fields.insert(field, status);
        }
    }

    pub fn clear(&mut self, field: Field) {
        self.fields.remove(&field);
    }

    pub fn is_valid(&self, field: Field) -> bool {
        self.get(field).is_success()
    }
}

/// Dish-specific values entered so far. Only the selected type's fields exist.
#[derive(Debug, Clone, PartialEq)]
pub enum DishDraft {
    Pizza {
        no_of_slices: Option<i64>,
        diameter: Option<f64>,
    },
    Soup {
        spiciness_scale: Option<i64>,
    },
    Sandwich {
        slices_of_bread: Option<i64>,
    },
}

impl DishDraft {
    pub fn empty(dish_type: DishType) -> Self {
        match dish_type {
            DishType::Pizza => DishDraft::Pizza {
                no_of_slices: None,
                diameter: None,
            },
            DishType::Soup => DishDraft::Soup {
                spiciness_scale: None,
            },
            DishType::Sandwich => DishDraft::Sandwich {
                slices_of_bread: None,
            },
        }
    }

    pub fn dish_type(&self) -> DishType {
        match self {
            DishDraft::Pizza { .. } => DishType::Pizza,
            DishDraft::Soup { .. } => DishType::Soup,
            DishDraft::Sandwich { .. } => DishType::Sandwich,
        }
    }

    /// Fields of this draft that have no value yet.
    pub fn missing_fields(&self) -> Vec<Field> {
        let mut missing = Vec::new();
        match self {
            DishDraft::Pizza {
                no_of_slices,
                diameter,
            } => {
                if no_of_slices.is_none() {
                    missing.push(Field::NoOfSlices);
                }
                if diameter.is_none() {
                    missing.push(Field::Diameter);
                }
            }
            DishDraft::Soup { spiciness_scale } => {
                if spiciness_scale.is_none() {
                    missing.push(Field::SpicinessScale);
                }
            }
            DishDraft::Sandwich { slices_of_bread } => {
                if slices_of_bread.is_none() {
                    missing.push(Field::SlicesOfBread);
                }
            }
        }
        missing
    }
}

/// Outcome of the most recent submit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SubmitOutcome {
    #[default]
    Idle,
    Pending,
    Success,
    Error {
        code: String,
        message: String,
    },
}

/// Urlencoded body of a form post. Every input arrives as text; empty inputs
/// arrive as empty strings or not at all.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DishFormInput {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub preparation_time: String,

    #[serde(rename = "type", default)]
    pub dish_type: String,

    #[serde(default)]
    pub no_of_slices: String,

    #[serde(default)]
    pub diameter: String,

    #[serde(default)]
    pub spiciness_scale: String,

    #[serde(default)]
    pub slices_of_bread: String,
}

/// Parse a numeric form input; blank or malformed input counts as no value.
/// Counts parse as `i64` so negative and oversized entries reach the range
/// rules instead of reading as missing.
pub fn parse_number<T: std::str::FromStr>(raw: &str) -> Option<T> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse().ok()
}

use std::collections::BTreeMap;

use garde::Validate;
use strum::IntoEnumIterator;
use tracing::debug;

use crate::models::dish::{DishDetails, DishRecord};
use crate::models::form::{DishDraft, Field};
use crate::services::preparation_time;

/// Submit-time validation failed; holds one inline message per offending field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct FormRejected {
    pub errors: BTreeMap<Field, String>,
}

/// Run full-form validation and assemble the record to submit.
///
/// Checks, in order:
/// - required fields, including the selected type's dish-specific fields
/// - the preparation-time pattern
/// - numeric ranges on the assembled record
pub fn validate_submission(
    name: &str,
    preparation_time: &str,
    dish: Option<&DishDraft>,
) -> Result<DishRecord, FormRejected> {
    let mut errors = BTreeMap::new();

    if name.trim().is_empty() {
        errors.insert(Field::Name, Field::Name.required_message().to_string());
    }

    if !preparation_time::is_well_formed(preparation_time) {
        errors.insert(
            Field::PreparationTime,
            Field::PreparationTime.required_message().to_string(),
        );
    }

    let details = match dish {
        None => {
            errors.insert(Field::DishType, Field::DishType.required_message().to_string());
            None
        }
        Some(draft) => {
            let missing = draft.missing_fields();
            for field in &missing {
                errors.insert(*field, field.required_message().to_string());
            }
            if missing.is_empty() {
                complete_details(draft)
            } else {
                None
            }
        }
    };

    let details = match details {
        Some(details) if errors.is_empty() => details,
        _ => return Err(FormRejected { errors }),
    };

    let record = DishRecord {
        name: name.to_string(),
        preparation_time: preparation_time.to_string(),
        details,
    };

    if let Err(report) = record.validate() {
        for (path, error) in report.iter() {
            let path = path.to_string();
            debug!(path = %path, error = %error, "Dish record rule failed");
            if let Some(field) = field_for_path(&path) {
                errors.entry(field).or_insert_with(|| error.to_string());
            }
        }
        if errors.is_empty() {
            errors.insert(Field::Name, report.to_string());
        }
        return Err(FormRejected { errors });
    }

    Ok(record)
}

fn complete_details(draft: &DishDraft) -> Option<DishDetails> {
    match *draft {
        DishDraft::Pizza {
            no_of_slices: Some(no_of_slices),
            diameter: Some(diameter),
        } => Some(DishDetails::Pizza {
            no_of_slices,
            diameter,
        }),
        DishDraft::Soup {
            spiciness_scale: Some(spiciness_scale),
        } => Some(DishDetails::Soup { spiciness_scale }),
        DishDraft::Sandwich {
            slices_of_bread: Some(slices_of_bread),
        } => Some(DishDetails::Sandwich { slices_of_bread }),
        _ => None,
    }
}

/// Map a validator path such as `details.no_of_slices` to its form field.
fn field_for_path(path: &str) -> Option<Field> {
    Field::iter().find(|field| path.ends_with(field.as_ref()))
}

use garde::Validate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::models::form::Field;

/// Kinds of dish the form accepts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, EnumIter, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DishType {
    Pizza,
    Soup,
    Sandwich,
}

impl DishType {
    /// Label shown in the type selector.
    pub fn label(self) -> &'static str {
        match self {
            DishType::Pizza => "Pizza",
            DishType::Soup => "Soup",
            DishType::Sandwich => "Sandwich",
        }
    }

    /// Dish-specific fields that become required once this type is selected.
    pub fn fields(self) -> &'static [Field] {
        match self {
            DishType::Pizza => &[Field::NoOfSlices, Field::Diameter],
            DishType::Soup => &[Field::SpicinessScale],
            DishType::Sandwich => &[Field::SlicesOfBread],
        }
    }
}

/// Type-specific part of a dish record. Serialized inline next to the common
/// fields, with `type` as the discriminator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DishDetails {
    Pizza {
        #[garde(range(min = 1))]
        no_of_slices: i64,
        #[garde(custom(finite), range(min = 0.0))]
        diameter: f64,
    },
    Soup {
        #[garde(range(min = 1, max = 10))]
        spiciness_scale: i64,
    },
    Sandwich {
        #[garde(range(min = 1))]
        slices_of_bread: i64,
    },
}

impl DishDetails {
    pub fn dish_type(&self) -> DishType {
        match self {
            DishDetails::Pizza { .. } => DishType::Pizza,
            DishDetails::Soup { .. } => DishType::Soup,
            DishDetails::Sandwich { .. } => DishType::Sandwich,
        }
    }
}

/// Payload sent to the dish service. Name and preparation time are checked
/// by the form before a record is assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct DishRecord {
    #[garde(skip)]
    pub name: String,

    #[garde(skip)]
    pub preparation_time: String,

    #[serde(flatten)]
    #[garde(dive)]
    pub details: DishDetails,
}

// NaN slips past `range`, and serde_json would send it as `null`.
fn finite(value: &f64, _context: &()) -> garde::Result {
    if !value.is_finite() {
        return Err(garde::Error::new("must be a finite number"));
    }
    Ok(())
}

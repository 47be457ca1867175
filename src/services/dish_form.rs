use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::models::dish::{DishRecord, DishType};
use crate::models::form::{
    parse_number, DishDraft, DishFormInput, Field, FieldStatus, SubmitOutcome, ValidationState,
};
use crate::services::dishes_api::DishesApi;
use crate::services::preparation_time::{self, TimeCheck};
use crate::services::validation::{self, FormRejected};

/// State behind one dish form: entered values, per-field validation state and
/// the outcome of the last submit.
pub struct DishFormController {
    api: Arc<dyn DishesApi>,
    name: String,
    preparation_time: String,
    dish: Option<DishDraft>,
    validation: ValidationState,
    outcome: SubmitOutcome,
}

impl DishFormController {
    pub fn new(api: Arc<dyn DishesApi>) -> Self {
        Self {
            api,
            name: String::new(),
            preparation_time: String::new(),
            dish: None,
            validation: ValidationState::default(),
            outcome: SubmitOutcome::Idle,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn preparation_time(&self) -> &str {
        &self.preparation_time
    }

    pub fn dish_type(&self) -> Option<DishType> {
        self.dish.as_ref().map(DishDraft::dish_type)
    }

    pub fn dish(&self) -> Option<&DishDraft> {
        self.dish.as_ref()
    }

    pub fn validation(&self) -> &ValidationState {
        &self.validation
    }

    pub fn outcome(&self) -> &SubmitOutcome {
        &self.outcome
    }

    /// Dish-specific fields currently shown.
    pub fn visible_fields(&self) -> &'static [Field] {
        self.dish_type().map(DishType::fields).unwrap_or(&[])
    }

    pub fn set_name(&mut self, value: &str) {
        self.name = value.to_string();
        let status = if value.trim().is_empty() {
            FieldStatus::Neutral
        } else {
            FieldStatus::Success
        };
        self.validation.set(Field::Name, status);
    }

    /// Apply one keystroke to the preparation-time field and return the
    /// reformatted value.
    pub fn set_preparation_time(&mut self, value: &str) -> &str {
        let formatted = preparation_time::format_preparation_time(value);
        self.validation
            .set(Field::PreparationTime, formatted.status());
        self.preparation_time = formatted.value;
        &self.preparation_time
    }

    /// Select a dish type. Switching types discards the previous type's values.
    pub fn select_dish_type(&mut self, dish_type: DishType) {
        self.validation.set(Field::DishType, FieldStatus::Success);

        if self.dish_type() == Some(dish_type) {
            return;
        }
        for field in self.visible_fields() {
            self.validation.clear(*field);
        }
        debug!(dish_type = %dish_type, "Dish type selected");
        self.dish = Some(DishDraft::empty(dish_type));
    }

    pub fn set_no_of_slices(&mut self, value: Option<i64>) {
        if let Some(DishDraft::Pizza { no_of_slices, .. }) = &mut self.dish {
            *no_of_slices = value;
            self.touch_dish_fields(value.is_some());
        }
    }

    pub fn set_diameter(&mut self, value: Option<f64>) {
        if let Some(DishDraft::Pizza { diameter, .. }) = &mut self.dish {
            *diameter = value;
            self.touch_dish_fields(value.is_some());
        }
    }

    pub fn set_spiciness_scale(&mut self, value: Option<i64>) {
        if let Some(DishDraft::Soup { spiciness_scale }) = &mut self.dish {
            *spiciness_scale = value;
            self.touch_dish_fields(value.is_some());
        }
    }

    pub fn set_slices_of_bread(&mut self, value: Option<i64>) {
        if let Some(DishDraft::Sandwich { slices_of_bread }) = &mut self.dish {
            *slices_of_bread = value;
            self.touch_dish_fields(value.is_some());
        }
    }

    /// Entering any dish-specific value marks the whole set as touched.
    fn touch_dish_fields(&mut self, entered: bool) {
        if !entered {
            return;
        }
        for field in self.visible_fields() {
            self.validation.set(*field, FieldStatus::Success);
        }
    }

    /// Replay a posted form as the edits a user would have made.
    pub fn apply_input(&mut self, input: &DishFormInput) {
        self.set_name(&input.name);
        if !input.preparation_time.is_empty() {
            self.set_preparation_time(&input.preparation_time);
        }

        let Ok(dish_type) = input.dish_type.parse::<DishType>() else {
            return;
        };
        self.select_dish_type(dish_type);
        match dish_type {
            DishType::Pizza => {
                self.set_no_of_slices(parse_number(&input.no_of_slices));
                self.set_diameter(parse_number(&input.diameter));
            }
            DishType::Soup => self.set_spiciness_scale(parse_number(&input.spiciness_scale)),
            DishType::Sandwich => self.set_slices_of_bread(parse_number(&input.slices_of_bread)),
        }
    }

    /// Validate the whole form and assemble the record that would be sent.
    pub fn record(&self) -> Result<DishRecord, FormRejected> {
        validation::validate_submission(&self.name, &self.preparation_time, self.dish.as_ref())
    }

    /// Validate and submit. Invalid forms never reach the dish service.
    pub async fn submit(&mut self) -> &SubmitOutcome {
        self.outcome = SubmitOutcome::Idle;

        let record = match self.record() {
            Ok(record) => record,
            Err(rejected) => {
                info!(fields = rejected.errors.len(), "Dish form rejected");
                metrics::counter!("dish_form_rejected_total").increment(1);
                self.show_errors(rejected);
                return &self.outcome;
            }
        };

        self.outcome = SubmitOutcome::Pending;
        metrics::counter!("dish_submissions_total").increment(1);

        self.outcome = match self.api.create_dish(&record).await {
            Ok(_) => {
                info!(name = %record.name, dish_type = %record.details.dish_type(), "Dish created");
                metrics::counter!("dish_submissions_succeeded").increment(1);
                SubmitOutcome::Success
            }
            Err(err) => {
                warn!(code = %err.code(), error = %err, "Dish submission failed");
                metrics::counter!("dish_submissions_failed").increment(1);
                SubmitOutcome::Error {
                    code: err.code(),
                    message: err.message(),
                }
            }
        };

        &self.outcome
    }

    fn show_errors(&mut self, rejected: FormRejected) {
        let out_of_range = preparation_time::format_preparation_time(&self.preparation_time).check
            == TimeCheck::OutOfRange;

        for (field, message) in rejected.errors {
            // The range message already shown for the field takes precedence.
            if field == Field::PreparationTime && out_of_range {
                continue;
            }
            self.validation.set(field, FieldStatus::Error(message));
        }
    }
}

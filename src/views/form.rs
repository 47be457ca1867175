//! Server-side rendering of the dish form. The markup lives in
//! `templates/dish-form.html`; interpolated values are HTML-escaped.

use boilerplate::Boilerplate;
use strum::IntoEnumIterator;

use crate::models::dish::DishType;
use crate::models::form::{DishDraft, Field, SubmitOutcome};
use crate::services::dish_form::DishFormController;

pub const SCRIPT: &str = include_str!("../../static/form.js");
pub const STYLE: &str = include_str!("../../static/form.css");

/// The whole page for one controller state.
#[derive(Boilerplate)]
pub struct DishFormHtml {
    text_items: Vec<ItemView>,
    dish_type: ItemView,
    selected: Option<DishType>,
    sections: Vec<SectionView>,
    outcome: SubmitOutcome,
}

struct ItemView {
    field: Field,
    label: &'static str,
    status: &'static str,
    value: String,
    help: String,
    placeholder: &'static str,
}

/// Inputs for one dish type. Sections for other types are hidden and their
/// inputs disabled so the browser does not post them.
struct SectionView {
    dish_type: DishType,
    active: bool,
    inputs: Vec<NumberInput>,
}

struct NumberInput {
    item: ItemView,
    min: &'static str,
    max: Option<&'static str>,
    step: &'static str,
}

impl DishFormHtml {
    pub fn new(form: &DishFormController) -> Self {
        let selected = form.dish_type();
        let sections = DishType::iter()
            .map(|dish_type| {
                let active = selected == Some(dish_type);
                let inputs = dish_type
                    .fields()
                    .iter()
                    .map(|&field| {
                        let value = if active {
                            draft_value(form.dish(), field)
                        } else {
                            String::new()
                        };
                        number_input(item(form, field, value, ""))
                    })
                    .collect();
                SectionView {
                    dish_type,
                    active,
                    inputs,
                }
            })
            .collect();

        Self {
            text_items: vec![
                item(form, Field::Name, form.name().to_string(), ""),
                item(
                    form,
                    Field::PreparationTime,
                    form.preparation_time().to_string(),
                    "hh:mm:ss",
                ),
            ],
            dish_type: item(form, Field::DishType, String::new(), ""),
            selected,
            sections,
            outcome: form.outcome().clone(),
        }
    }
}

/// Render the full page for the controller's current state.
pub fn render_page(form: &DishFormController) -> String {
    DishFormHtml::new(form).to_string()
}

fn item(
    form: &DishFormController,
    field: Field,
    value: String,
    placeholder: &'static str,
) -> ItemView {
    let status = form.validation().get(field);
    ItemView {
        field,
        label: field.label(),
        status: status.as_str(),
        value,
        help: status.help().unwrap_or_default().to_string(),
        placeholder,
    }
}

fn number_input(item: ItemView) -> NumberInput {
    let (min, max, step) = match item.field {
        Field::Diameter => ("0", None, "0.1"),
        Field::SpicinessScale => ("1", Some("10"), "1"),
        _ => ("1", None, "1"),
    };
    NumberInput {
        item,
        min,
        max,
        step,
    }
}

fn draft_value(draft: Option<&DishDraft>, field: Field) -> String {
    let value = match (draft, field) {
        (Some(DishDraft::Pizza { no_of_slices, .. }), Field::NoOfSlices) => {
            no_of_slices.map(|v| v.to_string())
        }
        (Some(DishDraft::Pizza { diameter, .. }), Field::Diameter) => {
            diameter.map(|v| v.to_string())
        }
        (Some(DishDraft::Soup { spiciness_scale }), Field::SpicinessScale) => {
            spiciness_scale.map(|v| v.to_string())
        }
        (Some(DishDraft::Sandwich { slices_of_bread }), Field::SlicesOfBread) => {
            slices_of_bread.map(|v| v.to_string())
        }
        _ => None,
    };
    value.unwrap_or_default()
}

use axum::extract::State;
use axum::response::Html;
use axum::Form;

use crate::app_state::AppState;
use crate::models::form::DishFormInput;
use crate::views;

/// GET / — empty dish form.
pub async fn show_form(State(state): State<AppState>) -> Html<String> {
    Html(views::form::render_page(&state.form()))
}

/// POST / — replay the posted values, submit, and render the result.
pub async fn submit_form(
    State(state): State<AppState>,
    Form(input): Form<DishFormInput>,
) -> Html<String> {
    let mut form = state.form();
    form.apply_input(&input);
    form.submit().await;
    Html(views::form::render_page(&form))
}

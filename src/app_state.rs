use std::sync::Arc;

use crate::services::dish_form::DishFormController;
use crate::services::dishes_api::DishesApi;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub dishes: Arc<dyn DishesApi>,
    pub dishes_endpoint: String,
}

impl AppState {
    pub fn new(dishes: impl DishesApi + 'static, dishes_endpoint: impl Into<String>) -> Self {
        Self {
            dishes: Arc::new(dishes),
            dishes_endpoint: dishes_endpoint.into(),
        }
    }

    /// Fresh form bound to the shared dish service client.
    pub fn form(&self) -> DishFormController {
        DishFormController::new(self.dishes.clone())
    }
}

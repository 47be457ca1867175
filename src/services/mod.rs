pub mod dish_form;
pub mod dishes_api;
pub mod preparation_time;
pub mod validation;

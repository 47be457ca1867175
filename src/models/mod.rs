pub mod dish;
pub mod form;

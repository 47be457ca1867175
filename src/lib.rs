//! Dish submission form
//!
//! This library provides the dish form: live field validation, per-type
//! conditional fields, and submission of validated records to a remote dish
//! service, plus the axum routes that serve the form.

pub mod app_state;
pub mod config;
pub mod models;
pub mod routes;
pub mod services;
pub mod views;

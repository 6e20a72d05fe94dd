pub mod controller;
pub mod errors;
pub mod models;
pub mod service;
pub mod store;
pub mod templates;

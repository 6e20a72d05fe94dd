pub mod client;
pub mod controller;
pub mod dtos;
pub mod errors;
pub mod mock;
pub mod models;
pub mod photo;
pub mod service;
pub mod store;
pub mod templates;

pub mod config;
pub mod controller;
pub mod enums;
pub mod models;
pub mod service;

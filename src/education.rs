pub mod content;
pub mod models;
pub mod prompts;
pub mod service;

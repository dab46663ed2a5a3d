pub mod config;
pub mod error;
pub mod grading;
pub mod services;
pub mod store;

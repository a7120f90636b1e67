//! AI-assisted medical triage service.
pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

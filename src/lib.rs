//! Library entry point for the dive-action CI step.

pub mod actions;
pub mod commands;
pub mod error;
pub mod executor;
pub mod plan;
pub mod settings;
pub mod utils;

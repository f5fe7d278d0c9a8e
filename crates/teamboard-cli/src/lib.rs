//! CLI library components for Teamboard.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;

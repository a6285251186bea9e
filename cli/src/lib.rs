//! Command-line admin tool for the News Nexus local store.

pub mod cli;
pub mod commands;
/// Opening the file-backed store.
pub mod store;
/// Output and input helpers.
pub mod utils;

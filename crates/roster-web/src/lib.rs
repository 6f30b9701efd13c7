/// Roster Web Admin Interface
///
/// Leptos-based browser UI for listing, creating and deleting the user
/// records of one company against a remote users API.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod state;
pub mod types;
pub mod utils;

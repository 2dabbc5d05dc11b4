//! # Last Call
//!
//! Terminal cocktail finder: tell it which ingredients you have, it asks
//! TheCocktailDB which drinks you can make and ranks them by how much of
//! each recipe your pantry covers.

pub mod api;
pub mod autocomplete;
pub mod commands;
pub mod config;
pub mod matching;
pub mod ranking;
pub mod search;
pub mod session;
pub mod ui;

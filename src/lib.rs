//! # Connect Four
//!
//! A two-player Connect Four engine with a terminal front-end built with
//! Ratatui. The engine is a plain state machine: the front-end calls
//! [`game::GameEngine::drop`] and renders the snapshot it gets back.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: grid, player, engine state machine
//! - [`ui`]: Terminal UI: board, status message, drop markers
//! - [`config`]: TOML configuration loading and validation
//! - [`logging`]: File logger setup
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;

//! # Connect Four
//!
//! Two-player Connect Four played in the terminal. The board engine is a
//! plain, explicitly owned value with no rendering dependencies; the terminal
//! UI drives it and renders the events it reports.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, colours, engine phase machine
//! - [`ui`] — Terminal UI: start dialog, board view, result dialog
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;

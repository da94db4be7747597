//! Tiny plain-text HTTP API.
//!
//! Five stateless endpoints, all answering `200 OK` with a text body:
//!
//! ```text
//! GET  /                          09h05
//! GET  /dice                      0421
//! GET  /dices?type=d6             3 6 1 1 4 2 5 6 2 3 3 4 1 5 2
//! POST /randomize-words           words=the quick fox   -> fox the quick
//! POST /semi-capitalize-sentence  sentence=hello world  -> HeLlO WoRlD
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`random`]: Process-wide random source
//! - [`dice`]: Die type table and rolls
//! - [`text`]: Sentence transforms
//! - [`clock`]: Wall-clock formatting
//! - [`api`]: HTTP router and handlers
//! - [`metrics`]: Request metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod clock;
pub mod config;
pub mod dice;
pub mod error;
pub mod metrics;
pub mod random;
pub mod text;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};

//! Dice rolling.
//!
//! This module handles:
//! - The die type table (labels and side counts)
//! - Single thousand-sided rolls
//! - Fifteen-roll batches over one or all die types

pub mod roller;
pub mod types;

pub use roller::{roll_batch, roll_single, BatchRoll, Roll, BATCH_SIZE, SINGLE_DIE_SIDES};
pub use types::DieType;

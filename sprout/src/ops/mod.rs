//! Core operations.
//!
//! This module contains the business logic for sprout,
//! separated from CLI argument parsing and output rendering.

pub mod scaffold;

pub use scaffold::scaffold;

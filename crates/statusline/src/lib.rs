//! statusline library
//!
//! This module exports the core functionality of the statusline binary
//! for use in integration tests and as a library.

pub mod config;
pub mod format;
pub mod input;

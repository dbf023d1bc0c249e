//! # SGPA Library
//!
//! This library exposes the SGPA application modules for testing and
//! integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;
pub mod config;
pub mod interactive;
pub mod logging;
pub mod render;

// Re-export sgpa_core for convenience
pub use sgpa_core;

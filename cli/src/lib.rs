//! Studio Metrics CLI Library
//!
//! This library exposes the command-line modules for use in tests.

pub mod args;
pub mod batch;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

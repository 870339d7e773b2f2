//! flowseg CLI library
//!
//! This library provides the command-line interface for turning HTML
//! pages and serialized document trees into ordered content blocks.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};

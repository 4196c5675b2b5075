//! CLI infrastructure for the oxo engine
//!
//! This module provides the command-line interface for playing against
//! the engine, analyzing positions, and running engine self-play.

pub mod commands;
pub mod output;

//! Voxforge CLI library.
//!
//! This crate provides the core functionality for the Voxforge CLI: payload
//! and config loading plus the WAV command implementations.

pub mod commands;
pub mod input;

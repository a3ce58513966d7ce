//! Voxforge End-to-End Test Infrastructure
//!
//! This crate provides integration tests for the voiceover export path:
//!
//! - Pipeline: base64 payload -> WAV bytes
//! - Conformance: output parsed by an independent WAV reader (`hound`)
//! - **Determinism**: byte-identical output across runs
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p voxforge-tests
//! ```

pub mod determinism;
pub mod fixtures;

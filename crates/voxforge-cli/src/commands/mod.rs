//! CLI command implementations

pub mod encode;
pub mod export;
pub mod inspect;
pub mod json_output;

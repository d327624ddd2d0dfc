//! Core data types and structures
//!
//! This module contains the fundamental data types used throughout
//! anticycle, separated from the stages that produce and consume them.

pub mod types;

pub use types::*;

//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod clock;
pub mod fuzzy;
pub mod memory;
pub mod ports;

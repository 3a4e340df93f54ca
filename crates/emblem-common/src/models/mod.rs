//! Core domain models shared across Emblem crates.
//!
//! These are the "truth" types — what a server publishes and what the
//! resolver hands to rendering code.

pub mod role;

pub use role::*;

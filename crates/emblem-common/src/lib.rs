//! # emblem-common
//!
//! Shared types, configuration, error handling, and utilities used across all Emblem crates.
//! Role models, color grammars, catalog loading and linting live here; resolution
//! lives in `emblem-roles`.

pub mod catalog;
pub mod color;
pub mod config;
pub mod error;
pub mod models;
pub mod permissions;
pub mod validation;

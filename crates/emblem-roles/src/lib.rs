//! # emblem-roles
//!
//! Resolves which badge, name color and chat color a player shows, given
//! the roles they hold and the role catalog published by the server.

pub mod manager;

pub use manager::RoleManager;

//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod guilds;
pub mod health;
pub mod members;
pub mod roles;

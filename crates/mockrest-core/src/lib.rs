//! # mockrest-core
//!
//! Domain layer for the REST emulator: guild, role and member records, the
//! in-memory resource store that owns them, and id generation.
//! This crate has no knowledge of HTTP.

pub mod entities;
pub mod error;
pub mod id;
pub mod store;

// Re-export commonly used types at crate root
pub use entities::{Guild, Member, Overlay, Role};
pub use error::{StoreError, StoreResult};
pub use id::{IdGenerator, SnowflakeGenerator};
pub use store::{SharedStore, Store};

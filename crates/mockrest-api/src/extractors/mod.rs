//! Axum extractors for request handling
//!
//! Custom extractors for path parameters and raw request bodies.

mod body;
mod path;

pub use body::RawBody;
pub use path::{ApiPath, GuildIdPath, GuildRolePath, GuildUserPath, MemberRolePath};

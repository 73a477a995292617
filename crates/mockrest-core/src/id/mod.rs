//! Identifier generation for server-created records

mod snowflake;

pub use snowflake::SnowflakeGenerator;

/// Source of fresh record identifiers
///
/// Every call must return a value never returned before in the lifetime of
/// the process.
pub trait IdGenerator: Send + Sync {
    fn generate_id(&self) -> String;
}

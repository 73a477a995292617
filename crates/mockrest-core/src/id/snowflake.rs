//! Snowflake-style id generator
//!
//! Layout of a generated id:
//! - Bits 63-22: Timestamp (milliseconds since custom epoch)
//! - Bits 21-12: Worker ID (0-1023)
//! - Bits 11-0:  Sequence number (0-4095)

use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;

use super::IdGenerator;

/// Thread-safe snowflake generator
///
/// When more than 4096 ids are requested within one millisecond, or the wall
/// clock steps backwards, the generator advances its own logical clock rather
/// than waiting, so ids stay unique and strictly increasing.
pub struct SnowflakeGenerator {
    worker_id: u16,
    clock: Mutex<Clock>,
}

#[derive(Default)]
struct Clock {
    last_timestamp: i64,
    sequence: i64,
}

impl SnowflakeGenerator {
    /// Custom epoch: 2024-01-01 00:00:00 UTC (milliseconds)
    pub const EPOCH: i64 = 1_704_067_200_000;

    const MAX_SEQUENCE: i64 = 0xFFF;

    /// Create a new generator with the given worker ID
    ///
    /// # Panics
    /// Panics if worker_id >= 1024
    pub fn new(worker_id: u16) -> Self {
        assert!(worker_id < 1024, "Worker ID must be < 1024");
        Self {
            worker_id,
            clock: Mutex::new(Clock::default()),
        }
    }

    /// Generate the next raw id
    pub fn next_id(&self) -> i64 {
        let mut clock = self.clock.lock();
        let now = current_timestamp();

        if now > clock.last_timestamp {
            clock.last_timestamp = now;
            clock.sequence = 0;
        } else if clock.sequence < Self::MAX_SEQUENCE {
            clock.sequence += 1;
        } else {
            clock.last_timestamp += 1;
            clock.sequence = 0;
        }

        ((clock.last_timestamp - Self::EPOCH) << 22)
            | (i64::from(self.worker_id) << 12)
            | clock.sequence
    }

    /// Get the worker ID of this generator
    pub fn worker_id(&self) -> u16 {
        self.worker_id
    }
}

impl Default for SnowflakeGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}

impl IdGenerator for SnowflakeGenerator {
    fn generate_id(&self) -> String {
        self.next_id().to_string()
    }
}

/// Current timestamp in milliseconds since Unix epoch
#[inline]
fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

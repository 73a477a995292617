//! In-memory resource store

mod shared;
mod store;

pub use shared::SharedStore;
pub use store::Store;

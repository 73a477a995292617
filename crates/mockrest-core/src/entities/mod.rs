//! Domain entities - guilds and the records nested under them

mod guild;
mod member;
mod merge;
mod role;

pub use guild::Guild;
pub use member::Member;
pub use merge::Overlay;
pub use role::Role;

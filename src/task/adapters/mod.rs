//! Identifier generator adapters.
//!
//! - [`random`]: UUID v4 identifiers for production use
//! - [`sequential`]: deterministic counters for tests and demos

pub mod random;
pub mod sequential;

pub use random::UuidTaskIdGenerator;
pub use sequential::SequentialTaskIdGenerator;

//! Port contracts for the task store.
//!
//! Ports define the capabilities the store needs from its host without
//! binding it to a concrete implementation.

pub mod id_generator;

pub use id_generator::TaskIdGenerator;

#[cfg(test)]
pub use id_generator::MockTaskIdGenerator;

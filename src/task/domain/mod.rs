//! Domain model for the to-do task list.
//!
//! The domain owns task validation, the ordered task collection, and the
//! aggregate statistics derived from it. Identifier generation and time
//! are supplied from outside the domain boundary.

mod collection;
mod error;
mod ids;
mod stats;
mod task;

pub use collection::{InsertionOrder, TaskCollection};
pub use error::TaskDomainError;
pub use ids::TaskId;
pub use stats::TaskStats;
pub use task::{Task, TaskTitle};

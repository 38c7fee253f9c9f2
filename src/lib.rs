//! Tasklet: the state core of a single-screen to-do list.
//!
//! The crate holds the task list behind a small synchronous API and turns
//! creation timestamps into relative-age labels for display. Rendering,
//! persistence and networking are left to the host application.
//!
//! # Architecture
//!
//! Tasklet follows hexagonal architecture principles:
//!
//! - **Domain**: task values, the ordered collection, and progress counts
//! - **Ports**: capabilities supplied by the host, such as id generation
//! - **Adapters**: concrete id generators
//! - **Services**: the task store and the pending input draft
//!
//! # Modules
//!
//! - [`task`]: task store, draft input, and statistics
//! - [`date`]: relative-age formatting of creation timestamps

pub mod date;
pub mod task;

#[cfg(test)]
mod test_support;

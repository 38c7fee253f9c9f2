//! Application services for the task list.

mod config;
mod draft;
mod store;

pub use config::TaskStoreConfig;
pub use draft::TaskDraft;
pub use store::TaskStore;

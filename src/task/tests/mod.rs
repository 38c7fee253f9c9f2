//! Unit tests for the task list.

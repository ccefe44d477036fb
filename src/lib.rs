//! `Taskpad` - terminal task-list manager
//!
//! Keeps a persisted list of tasks with filters, priority stars and
//! debounced suggestions for the task being typed.

pub mod app;
pub mod cli;
pub mod core;
pub mod fs;
pub mod logging;
pub mod tui;

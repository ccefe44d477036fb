//! Tests for the app module.
//!
//! This module is organized into submodules by functionality:
//! - `helpers` - Shared test utilities
//! - `keys` - Key bindings and paste handling
//! - `persistence` - Write-through persistence and reload
//! - `removal` - Two-phase removal of rows
//! - `suggestions` - Debounced suggestion requests
//! - `tasks` - Task actions, stats and empty state
//! - `ui` - Rendering through `TestBackend`

#[allow(clippy::unwrap_used, clippy::expect_used)]
pub mod helpers;
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod suggestions;

//! Application-level utilities for the Expense CLI.
//!
//! This module provides:
//! - Path resolution for the config and database files
//! - The per-process context shared by every command handler

mod context;
mod resolver;

pub use context::AppContext;
pub use resolver::{ensure_parent_dir, resolve_config_path};

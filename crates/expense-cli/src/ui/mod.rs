//! UI primitives for the Expense CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens and color styles
//! - **Render**: Tables, headers, receipts, hints
//! - **Format**: Amount and string formatting
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::{UiContext, OutputMode, Badge};
//! use crate::ui::render::{header, table, hint};
//!
//! let ctx = UiContext::from_env(args.json, args.format.as_deref(), cli.no_color, cli.ascii);
//!
//! if ctx.mode.is_json() {
//!     // Handle JSON output separately
//!     return Ok(());
//! }
//!
//! println!("{}", header(&ctx, "list", None));
//! println!("{}", table(&ctx, &columns, &rows));
//! println!("{}", hint(&ctx, "expense delete <id>"));
//! ```

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

pub use render::{badge, blank_line, header, hint, kv, print, print_error, receipt, table, Column};

pub use format::{format_amount, single_line, truncate};

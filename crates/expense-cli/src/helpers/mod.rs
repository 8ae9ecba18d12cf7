//! Input and parsing helper functions for the CLI.
//!
//! This module provides utilities for:
//! - Prompting for expense fields (`input`)
//! - Amount, date, and format parsing (`parsing`)

mod input;
mod parsing;

pub use input::{confirm, prompt_amount, prompt_category, prompt_date, prompt_description};
pub use parsing::{parse_output_format, today, OutputFormat};

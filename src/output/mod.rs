//! Terminal output formatting
//!
//! Display utilities shared by the text mode and the TUI.

pub mod display;
pub mod formatters;

pub use display::{print_accepted, print_alert, print_round_banner, print_used_words};

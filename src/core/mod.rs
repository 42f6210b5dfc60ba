//! Core domain types for Word Scramble
//!
//! This module contains the validation primitives with zero external dependencies.
//! Everything here is pure and deterministic; dictionary lookups live elsewhere.

mod letters;
mod rejection;

pub use letters::{LetterPool, is_composable, normalize};
pub use rejection::{Alert, RejectionReason};

//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts parsed blocks to a serializable `Snap` for `insta`
//!   YAML snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (preamble shape,
//!   no empty paragraphs, no bold markup left in bullets)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};

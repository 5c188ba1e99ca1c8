//! # Block Parsing
//!
//! Two-phase, single-pass block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each trimmed line is classified into a
//!    `LineClass` (blank, banner, heading, bullet, quote, text) from local facts only
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` carries the pending
//!    paragraph and list state and emits `LayoutBlock`s in line order
//!
//! ## Modules
//!
//! - **`types`**: Core types (`LayoutBlock`, `BlockKind`)
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, Bullet, BlockQuote, Paragraph)
//! - **`classify`**: `SummaryLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Block order follows line order exactly
//! - A paragraph is flushed by a blank line, heading, bullet or quote, or at end of input
//! - The preamble (title, date) is always first

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::{BlockBuilder, gaps};
pub use classify::{LineClass, SummaryLineClassifier};
pub use types::{BlockKind, LayoutBlock};

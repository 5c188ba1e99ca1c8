//! # Inline Parsing
//!
//! Bold emphasis is the only inline construct. It is handled in two steps:
//!
//! - **`emphasize_bold`**: runs while blocks are built and rewrites `**span**`
//!   into the `<b>span</b>` delimiter pair carried in block text
//! - **`split_runs`**: runs at render time and turns delimited block text back
//!   into [`TextRun`]s with a bold flag
//!
//! ## Modules
//!
//! - **`types`**: `TextRun`
//! - **`kinds`**: `Emphasis` with owned delimiters
//! - **`cursor`**: `Cursor` for scanning block text
//! - **`parser`**: the transform and run splitter

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use kinds::Emphasis;
pub use parser::{emphasize_bold, split_runs};
pub use types::TextRun;

//! Line and word diff engines.
//!
//! Both engines are positional: lines are aligned by line index and tokens
//! by token index. The computation is synchronous and pure — no I/O, no
//! shared state between comparisons.

mod engine;
mod result;
mod words;

pub use engine::diff_lines;
pub use result::{DiffEntry, DiffKind, Summary, WordDiffKind, WordDiffSpan};
pub use words::diff_words;

// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod analyzer;
pub mod api;
pub mod config;
pub mod keywords;
pub mod lexicon;
pub mod normalize;
pub mod sentiment;
pub mod token;

// ---- Re-exports for stable public API ----
pub use crate::analyzer::{Analysis, AnalysisSummary, CommentAnalyzer, Status};
pub use crate::api::router;
pub use crate::keywords::KeywordEntry;
pub use crate::lexicon::Lexicon;
pub use crate::sentiment::{CommentSentiment, Label};

//! Core rewrite engine.
//!
//! ## Pipeline
//!
//! ```text
//! raw line ──► scanner (strip comments, carry block state)
//!          └─► matcher (strict full-line grammar)
//!                  ↓
//!             classifier (both must agree)
//!                  ↓
//!             rewriter (keyword form, same line ending)
//! ```
//!
//! [`processor`] drives the pipeline over whole files and [`file_scanner`]
//! decides which files to visit.

pub mod classifier;
pub mod file_scanner;
pub mod matcher;
pub mod processor;
pub mod rewriter;
pub mod scanner;

pub use classifier::{Verdict, classify_line};
pub use matcher::{MatchedStatement, match_statement};
pub use processor::{
    FileReport, LineChange, ProcessOptions, ProcessStats, RewriteResult, backup_path,
    process_file, rewrite_source,
};
pub use rewriter::{rewrite_statement, split_line_ending};
pub use scanner::{CommentState, strip_comments};

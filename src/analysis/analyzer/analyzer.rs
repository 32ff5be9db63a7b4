//! Core analyzer trait definition.
//!
//! An analyzer is the whole transduction pipeline for one kind of text:
//!
//! ```text
//! Raw Text → Tokenizer → Filter 1 → … → Filter N → Token Stream
//! ```
//!
//! # Examples
//!
//! Implementing a custom analyzer:
//!
//! ```
//! use retok::analysis::analyzer::analyzer::Analyzer;
//! use retok::analysis::token::{BoxTokenStream, IntoTokenStream};
//! use retok::error::Result;
//!
//! struct EmptyAnalyzer;
//!
//! impl Analyzer for EmptyAnalyzer {
//!     fn analyze(&self, _text: &str) -> Result<BoxTokenStream> {
//!         Ok(Vec::new().into_token_stream())
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "empty"
//!     }
//! }
//! ```

use crate::analysis::token::BoxTokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The returned stream is positioned at the start of `text`; resetting it
/// with other text reuses the whole chain.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<BoxTokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

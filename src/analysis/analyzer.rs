//! Analyzers: a tokenizer plus a chain of filters.
//!
//! - [`analyzer::Analyzer`] - The analyzer trait
//! - [`pipeline::PipelineAnalyzer`] - Any tokenizer with any filter list
//! - [`language`] - Preassembled chains for Chinese, Japanese, Korean and other text

pub mod analyzer;
pub mod language;
pub mod pipeline;

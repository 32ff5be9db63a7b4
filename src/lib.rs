//! # retok
//!
//! Token transduction pipelines that post-process segmenter output for
//! Chinese, Japanese and Korean text.
//!
//! ## Features
//!
//! - Pull-based token streams composable to any depth
//! - Width and punctuation normalization
//! - Script-boundary splitting and same-script merging
//! - Digit/letter, numeric range and hyphen splitting
//! - Ordinal and conjunction fusion
//! - Korean stem/suffix decomposition over a pluggable morphological analyzer
//! - Space-joined output for line-oriented tools
//!
//! ## Example
//!
//! ```
//! use retok::prelude::*;
//!
//! let mut retokenizer = Retokenizer::new("zh", RetokConfig::default(), None).unwrap();
//! let tokens = retokenizer.tokens("A和B或 80hz").unwrap();
//!
//! assert_eq!(tokens[0].text, "A和B或");
//! assert_eq!(tokens[0].token_type, TokenType::Compound);
//! assert_eq!(tokens[1].text, "80");
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod retokenizer;
pub mod util;

pub mod prelude {
    pub use crate::analysis::analyzer::analyzer::Analyzer;
    pub use crate::analysis::analyzer::language::Language;
    pub use crate::analysis::analyzer::pipeline::{PipelineAnalyzer, TokenPipeline};
    pub use crate::analysis::morph::{AnalysisOutput, MorphAnalyzer, StaticMorphAnalyzer};
    pub use crate::analysis::token::{BoxTokenStream, Token, TokenStream, TokenType};
    pub use crate::analysis::token_filter::Filter;
    pub use crate::analysis::tokenizer::Tokenizer;
    pub use crate::config::{RetokConfig, SuffixDisplay};
    pub use crate::error::{Result, RetokError};
    pub use crate::retokenizer::{Retokenizer, RetokenizerPool};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

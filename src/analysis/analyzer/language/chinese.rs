//! Chinese language analyzer implementation.
//!
//! Same shape as the Japanese chain, with the `和 … 或` conjunction
//! fusion in place of ordinal fusion.
//!
//! # Examples
//!
//! ```
//! use retok::analysis::analyzer::language::chinese::ChineseAnalyzer;
//!
//! let analyzer = ChineseAnalyzer::new().unwrap();
//! let mut pipeline = analyzer.build().unwrap();
//! let tokens = pipeline.tokenize("A和B或").unwrap();
//!
//! assert_eq!(tokens.len(), 1);
//! assert_eq!(tokens[0].text, "A和B或");
//! ```

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::{PipelineAnalyzer, TokenPipeline};
use crate::analysis::token::BoxTokenStream;
use crate::analysis::token_filter::conjunction::ConjunctionFilter;
use crate::analysis::token_filter::digit_letter_split::DigitLetterSplitFilter;
use crate::analysis::token_filter::hyphen_split::HyphenSplitFilter;
use crate::analysis::token_filter::punctuation::WidthNormalizeFilter;
use crate::analysis::token_filter::same_script_merge::SameScriptMergeFilter;
use crate::analysis::token_filter::script_split::ScriptSplitFilter;
use crate::analysis::tokenizer::script::ScriptTokenizer;
use crate::config::RetokConfig;
use crate::error::Result;

/// Analyzer for Chinese text.
pub struct ChineseAnalyzer {
    inner: PipelineAnalyzer,
}

impl ChineseAnalyzer {
    /// Create a new Chinese analyzer with default particles.
    pub fn new() -> Result<Self> {
        Self::with_config(&RetokConfig::default())
    }

    /// Create a Chinese analyzer using the particles of `config`.
    pub fn with_config(config: &RetokConfig) -> Result<Self> {
        let tokenizer = Arc::new(ScriptTokenizer::new()?);
        let conjunction =
            ConjunctionFilter::with_particles(config.and_particle, config.or_particle);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(WidthNormalizeFilter::new()))
            .add_filter(Arc::new(ScriptSplitFilter::new()))
            .add_filter(Arc::new(SameScriptMergeFilter::new()))
            .add_filter(Arc::new(conjunction))
            .add_filter(Arc::new(DigitLetterSplitFilter::new()))
            .add_filter(Arc::new(HyphenSplitFilter::new()))
            .with_name("chinese");

        Ok(Self { inner: analyzer })
    }

    /// Assemble a reusable pipeline.
    pub fn build(&self) -> Result<TokenPipeline> {
        self.inner.build()
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }

    /// Take the inner pipeline analyzer.
    pub fn into_inner(self) -> PipelineAnalyzer {
        self.inner
    }
}

impl Analyzer for ChineseAnalyzer {
    fn analyze(&self, text: &str) -> Result<BoxTokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "chinese"
    }
}

impl Debug for ChineseAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChineseAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

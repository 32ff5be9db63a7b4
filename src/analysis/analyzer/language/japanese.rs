//! Japanese language analyzer implementation.
//!
//! # Pipeline
//!
//! 1. Script tokenizer
//! 2. Width normalization
//! 3. Script-boundary split
//! 4. Same-script merge
//! 5. Ordinal fusion (`第` + number)
//! 6. Digit/letter split
//! 7. Hyphen split
//!
//! # Examples
//!
//! ```
//! use retok::analysis::analyzer::language::japanese::JapaneseAnalyzer;
//!
//! let analyzer = JapaneseAnalyzer::new().unwrap();
//! let mut pipeline = analyzer.build().unwrap();
//! let tokens = pipeline.tokenize("第３回").unwrap();
//!
//! assert_eq!(tokens[0].text, "第3");
//! assert_eq!(tokens[1].text, "回");
//! ```

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::{PipelineAnalyzer, TokenPipeline};
use crate::analysis::token::BoxTokenStream;
use crate::analysis::token_filter::digit_letter_split::DigitLetterSplitFilter;
use crate::analysis::token_filter::hyphen_split::HyphenSplitFilter;
use crate::analysis::token_filter::ordinal::OrdinalFilter;
use crate::analysis::token_filter::punctuation::WidthNormalizeFilter;
use crate::analysis::token_filter::same_script_merge::SameScriptMergeFilter;
use crate::analysis::token_filter::script_split::ScriptSplitFilter;
use crate::analysis::tokenizer::script::ScriptTokenizer;
use crate::config::RetokConfig;
use crate::error::Result;

/// Analyzer for Japanese text.
pub struct JapaneseAnalyzer {
    inner: PipelineAnalyzer,
}

impl JapaneseAnalyzer {
    /// Create a new Japanese analyzer with default settings.
    pub fn new() -> Result<Self> {
        Self::with_config(&RetokConfig::default())
    }

    /// Create a Japanese analyzer using the markers of `config`.
    pub fn with_config(config: &RetokConfig) -> Result<Self> {
        let tokenizer = Arc::new(ScriptTokenizer::new()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(WidthNormalizeFilter::new()))
            .add_filter(Arc::new(ScriptSplitFilter::new()))
            .add_filter(Arc::new(SameScriptMergeFilter::new()))
            .add_filter(Arc::new(OrdinalFilter::with_marker(config.ordinal_marker)))
            .add_filter(Arc::new(DigitLetterSplitFilter::new()))
            .add_filter(Arc::new(HyphenSplitFilter::new()))
            .with_name("japanese");

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

impl Analyzer for JapaneseAnalyzer {
    fn analyze(&self, text: &str) -> Result<BoxTokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "japanese"
    }
}

impl Debug for JapaneseAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JapaneseAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

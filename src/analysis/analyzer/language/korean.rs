//! Korean language analyzer implementation.
//!
//! Korean words are decomposed by a [`MorphAnalyzer`] supplied by the
//! caller; the crate ships no dictionary. Script splitting and merging are
//! left out since Hangul runs are already whole words.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::{PipelineAnalyzer, TokenPipeline};
use crate::analysis::morph::MorphAnalyzer;
use crate::analysis::token::BoxTokenStream;
use crate::analysis::token_filter::dedup_offset::DedupOffsetFilter;
use crate::analysis::token_filter::digit_letter_split::DigitLetterSplitFilter;
use crate::analysis::token_filter::hyphen_split::HyphenSplitFilter;
use crate::analysis::token_filter::korean::KoreanDecompositionFilter;
use crate::analysis::token_filter::punctuation::WidthNormalizeFilter;
use crate::analysis::tokenizer::script::ScriptTokenizer;
use crate::config::RetokConfig;
use crate::error::Result;

/// Analyzer for Korean text.
pub struct KoreanAnalyzer {
    inner: PipelineAnalyzer,
}

impl KoreanAnalyzer {
    /// Create a new Korean analyzer with default settings.
    pub fn new(morph: Arc<dyn MorphAnalyzer>) -> Result<Self> {
        Self::with_config(morph, &RetokConfig::default())
    }

    /// Create a Korean analyzer using the Korean options and suffix marker
    /// of `config`.
    pub fn with_config(morph: Arc<dyn MorphAnalyzer>, config: &RetokConfig) -> Result<Self> {
        let tokenizer = Arc::new(ScriptTokenizer::new()?);
        let decomposition = KoreanDecompositionFilter::new(morph)
            .with_config(config.korean.clone())
            .with_suffix_marker(config.suffix_marker);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(WidthNormalizeFilter::new()))
            .add_filter(Arc::new(decomposition))
            .add_filter(Arc::new(DedupOffsetFilter::new()))
            .add_filter(Arc::new(DigitLetterSplitFilter::new()))
            .add_filter(Arc::new(HyphenSplitFilter::new()))
            .with_name("korean");

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

impl Analyzer for KoreanAnalyzer {
    fn analyze(&self, text: &str) -> Result<BoxTokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "korean"
    }
}

impl Debug for KoreanAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KoreanAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

//! Analyzer for languages without a dedicated chain.
//!
//! Latin-script text needs neither script splitting nor fragment merging:
//! the tokenizer already keeps words and decimals whole, and spaces
//! between Latin words are real word boundaries.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::{PipelineAnalyzer, TokenPipeline};
use crate::analysis::token::BoxTokenStream;
use crate::analysis::token_filter::digit_letter_split::DigitLetterSplitFilter;
use crate::analysis::token_filter::hyphen_split::HyphenSplitFilter;
use crate::analysis::token_filter::punctuation::WidthNormalizeFilter;
use crate::analysis::tokenizer::script::ScriptTokenizer;
use crate::config::RetokConfig;
use crate::error::Result;

/// Analyzer for any other language.
pub struct DefaultAnalyzer {
    inner: PipelineAnalyzer,
}

impl DefaultAnalyzer {
    pub fn new() -> Result<Self> {
        Self::with_config(&RetokConfig::default())
    }

    /// The chain has no configurable markers; `config` is accepted for
    /// symmetry with the other languages.
    pub fn with_config(_config: &RetokConfig) -> Result<Self> {
        let tokenizer = Arc::new(ScriptTokenizer::new()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(WidthNormalizeFilter::new()))
            .add_filter(Arc::new(DigitLetterSplitFilter::new()))
            .add_filter(Arc::new(HyphenSplitFilter::new()))
            .with_name("default");

        Ok(Self { inner: analyzer })
    }

    pub fn build(&self) -> Result<TokenPipeline> {
        self.inner.build()
    }

    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }

    pub fn into_inner(self) -> PipelineAnalyzer {
        self.inner
    }
}

impl Analyzer for DefaultAnalyzer {
    fn analyze(&self, text: &str) -> Result<BoxTokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "default"
    }
}

impl Debug for DefaultAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<String> {
        let mut pipeline = DefaultAnalyzer::new().unwrap().build().unwrap();
        pipeline
            .tokenize(text)
            .unwrap()
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_latin_text() {
        assert_eq!(
            texts("The alpha-receptor runs at 80hz."),
            vec!["The", "alpha", "receptor", "runs", "at", "80", "hz", "."]
        );
    }

    #[test]
    fn test_spaced_words_stay_apart() {
        assert_eq!(texts("It runs at 0.5 mm"), vec!["It", "runs", "at", "0.5", "mm"]);
    }

    #[test]
    fn test_range() {
        assert_eq!(texts("2010-2012"), vec!["2010", "-", "2012"]);
    }

    #[test]
    fn test_analyzer_name() {
        let analyzer = DefaultAnalyzer::new().unwrap();
        assert_eq!(analyzer.name(), "default");
        assert_eq!(analyzer.inner().filters().len(), 3);
    }
}

//! Pipeline analyzer that combines a tokenizer and filters.
//!
//! [`PipelineAnalyzer`] is the factory; [`TokenPipeline`] is one assembled
//! chain of streams. Assembling a chain allocates every filter's state, so
//! callers build a pipeline once and reuse it through
//! [`TokenPipeline::reset`] or [`TokenPipeline::tokenize`].
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use retok::analysis::analyzer::pipeline::PipelineAnalyzer;
//! use retok::analysis::token_filter::digit_letter_split::DigitLetterSplitFilter;
//! use retok::analysis::token_filter::hyphen_split::HyphenSplitFilter;
//! use retok::analysis::tokenizer::script::ScriptTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(ScriptTokenizer::new().unwrap()))
//!     .add_filter(Arc::new(DigitLetterSplitFilter::new()))
//!     .add_filter(Arc::new(HyphenSplitFilter::new()))
//!     .with_name("latin");
//!
//! let mut pipeline = analyzer.build().unwrap();
//! let tokens = pipeline.tokenize("80hz alpha-receptor").unwrap();
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["80", "hz", "alpha", "receptor"]);
//! ```

use std::sync::Arc;

use rayon::prelude::*;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::token::{BoxTokenStream, Token, TokenStream, collect_tokens};
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{Result, RetokError};

/// A configurable analyzer that combines a tokenizer with a chain of filters.
///
/// Filters are applied in the order they were added.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Get the name of this analyzer.
    pub fn pipeline_name(&self) -> &str {
        &self.name
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    fn chain(&self, text: &str) -> Result<BoxTokenStream> {
        let mut stream = self.tokenizer.tokenize(text)?;
        for filter in &self.filters {
            stream = filter.filter(stream)?;
        }
        Ok(stream)
    }

    /// Assemble a reusable pipeline.
    pub fn build(&self) -> Result<TokenPipeline> {
        log::debug!(
            "building pipeline '{}': {} → {}",
            self.name,
            self.tokenizer.name(),
            self.filters
                .iter()
                .map(|f| f.name())
                .collect::<Vec<_>>()
                .join(" → ")
        );
        Ok(TokenPipeline {
            stream: self.chain("")?,
            name: self.name.clone(),
        })
    }

    /// Tokenize many texts in parallel, one pipeline per worker thread.
    ///
    /// Results keep the order of `texts`.
    pub fn tokenize_batch<S>(&self, texts: &[S]) -> Result<Vec<Vec<Token>>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map_init(
                || self.build(),
                |pipeline, text| match pipeline {
                    Ok(pipeline) => pipeline.tokenize(text.as_ref()),
                    Err(e) => Err(RetokError::analysis(format!(
                        "pipeline '{}' could not be built: {e}",
                        self.name
                    ))),
                },
            )
            .collect()
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<BoxTokenStream> {
        self.chain(text)
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// An assembled chain of streams, reusable across texts.
pub struct TokenPipeline {
    stream: BoxTokenStream,
    name: String,
}

impl TokenPipeline {
    /// Run the whole pipeline over `text` and collect its tokens.
    pub fn tokenize(&mut self, text: &str) -> Result<Vec<Token>> {
        self.stream.reset(text)?;
        collect_tokens(&mut self.stream)
    }

    /// Get the name of the analyzer this pipeline was built from.
    pub fn pipeline_name(&self) -> &str {
        &self.name
    }
}

impl TokenStream for TokenPipeline {
    fn next_token(&mut self) -> Result<Option<Token>> {
        self.stream.next_token()
    }

    fn reset(&mut self, text: &str) -> Result<()> {
        self.stream.reset(text)
    }

    fn name(&self) -> &'static str {
        self.stream.name()
    }
}

impl std::fmt::Debug for TokenPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPipeline")
            .field("name", &self.name)
            .field("head", &self.stream.name())
            .finish()
    }
}

//! Duplicate-offset suppression.
//!
//! Morphological decomposition can emit several tokens at the same start
//! offset. Downstream consumers that expect one token per start position
//! put this filter after it.
//!
//! Keywords stacked at increment 0 in Korean multi-keyword mode are
//! alternatives for one position, not repeated spans, and always pass.

use crate::analysis::token::{BoxTokenStream, Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter dropping tokens that start where the previously emitted token started.
#[derive(Clone, Debug, Default)]
pub struct DedupOffsetFilter;

impl DedupOffsetFilter {
    /// Create a new duplicate-offset filter.
    pub fn new() -> Self {
        DedupOffsetFilter
    }
}

impl Filter for DedupOffsetFilter {
    fn filter(&self, input: BoxTokenStream) -> Result<BoxTokenStream> {
        Ok(Box::new(DedupOffsetStream {
            input,
            previous_start: None,
        }))
    }

    fn name(&self) -> &'static str {
        "dedup_offset"
    }
}

/// Stream state of [`DedupOffsetFilter`].
pub struct DedupOffsetStream {
    input: BoxTokenStream,
    previous_start: Option<usize>,
}

impl TokenStream for DedupOffsetStream {
    fn next_token(&mut self) -> Result<Option<Token>> {
        while let Some(token) = self.input.next_token()? {
            if token.is_stacked_keyword() || self.previous_start != Some(token.start_offset) {
                self.previous_start = Some(token.start_offset);
                return Ok(Some(token));
            }
        }
        Ok(None)
    }

    fn reset(&mut self, text: &str) -> Result<()> {
        self.previous_start = None;
        self.input.reset(text)
    }

    fn name(&self) -> &'static str {
        "dedup_offset"
    }
}

//! Ordinal marker fusion.
//!
//! In Japanese and Chinese an ordinal is written as a marker followed by a
//! number (`第3`), which segmenters cut in two. This filter fuses them back.

use crate::analysis::token::{BoxTokenStream, Token, TokenQueue, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;
use crate::util::chars::is_ascii_digits;

/// Default ordinal marker.
pub const DEFAULT_ORDINAL_MARKER: char = '第';

/// A filter fusing an ordinal marker with the number following it.
///
/// # Examples
///
/// ```
/// use retok::analysis::token::{collect_tokens, IntoTokenStream, Token, TokenType};
/// use retok::analysis::token_filter::Filter;
/// use retok::analysis::token_filter::ordinal::OrdinalFilter;
///
/// let filter = OrdinalFilter::new();
/// let input = vec![
///     Token::new("第", 0, 1).with_token_type(TokenType::Cjk),
///     Token::new("3", 1, 2).with_token_type(TokenType::Num),
/// ];
/// let mut stream = filter.filter(input.into_token_stream()).unwrap();
/// let tokens = collect_tokens(&mut stream).unwrap();
///
/// assert_eq!(tokens.len(), 1);
/// assert_eq!(tokens[0].text, "第3");
/// assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (0, 2));
/// ```
#[derive(Clone, Debug)]
pub struct OrdinalFilter {
    marker: char,
}

impl OrdinalFilter {
    /// Create a filter for the default marker `第`.
    pub fn new() -> Self {
        Self::with_marker(DEFAULT_ORDINAL_MARKER)
    }

    /// Create a filter for a custom marker.
    pub fn with_marker(marker: char) -> Self {
        OrdinalFilter { marker }
    }

    /// Get the ordinal marker.
    pub fn marker(&self) -> char {
        self.marker
    }
}

impl Default for OrdinalFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for OrdinalFilter {
    fn filter(&self, input: BoxTokenStream) -> Result<BoxTokenStream> {
        Ok(Box::new(OrdinalStream {
            input,
            marker: self.marker,
            queue: TokenQueue::new(),
        }))
    }

    fn name(&self) -> &'static str {
        "ordinal"
    }
}

/// Stream state of [`OrdinalFilter`].
pub struct OrdinalStream {
    input: BoxTokenStream,
    marker: char,
    queue: TokenQueue,
}

impl TokenStream for OrdinalStream {
    fn next_token(&mut self) -> Result<Option<Token>> {
        if let Some(token) = self.queue.pop() {
            return Ok(Some(token));
        }

        let Some(token) = self.input.next_token()? else {
            return Ok(None);
        };
        if !token.is_char(self.marker) {
            return Ok(Some(token));
        }

        let Some(next) = self.input.next_token()? else {
            return Ok(Some(token));
        };

        if is_ascii_digits(&next.text) {
            let mut text = String::with_capacity(token.text.len() + next.text.len());
            text.push(self.marker);
            text.push_str(&next.text);

            let mut fused = next.with_text(text);
            fused.start_offset = token.start_offset;
            fused.position_increment = token.position_increment;
            return Ok(Some(fused));
        }

        self.queue.push(next);
        Ok(Some(token))
    }

    fn reset(&mut self, text: &str) -> Result<()> {
        self.queue.clear();
        self.input.reset(text)
    }

    fn name(&self) -> &'static str {
        "ordinal"
    }
}

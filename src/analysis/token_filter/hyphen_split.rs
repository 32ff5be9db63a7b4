//! Hyphen splitting.
//!
//! Splits Latin compounds at their first interior hyphen
//! (`alpha-receptor` → `alpha` `receptor`) and detaches a leading closing
//! parenthesis (`)abc` → `)` `abc`). The hyphen itself is discarded.
//!
//! Tokens whose start offset repeats the previous upstream token's start
//! are dropped before splitting; earlier stages may emit the same span
//! twice. Stacked Korean keywords are exempt.

use crate::analysis::token::{BoxTokenStream, Token, TokenQueue, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter splitting tokens at an interior hyphen or after a leading `)`.
#[derive(Clone, Debug, Default)]
pub struct HyphenSplitFilter;

impl HyphenSplitFilter {
    /// Create a new hyphen split filter.
    pub fn new() -> Self {
        HyphenSplitFilter
    }
}

impl Filter for HyphenSplitFilter {
    fn filter(&self, input: BoxTokenStream) -> Result<BoxTokenStream> {
        Ok(Box::new(HyphenSplitStream {
            input,
            queue: TokenQueue::new(),
            previous_start: None,
        }))
    }

    fn name(&self) -> &'static str {
        "hyphen_split"
    }
}

/// Stream state of [`HyphenSplitFilter`].
pub struct HyphenSplitStream {
    input: BoxTokenStream,
    queue: TokenQueue,
    /// Start offset of the last token pulled from upstream.
    previous_start: Option<usize>,
}

impl HyphenSplitStream {
    /// Pull the next upstream token whose start differs from the previous one.
    fn next_distinct(&mut self) -> Result<Option<Token>> {
        while let Some(token) = self.input.next_token()? {
            if !token.is_stacked_keyword() && self.previous_start == Some(token.start_offset) {
                log::trace!("dropping repeated span at {}", token.start_offset);
                continue;
            }
            self.previous_start = Some(token.start_offset);
            return Ok(Some(token));
        }
        Ok(None)
    }
}

/// Split `token` into two pieces, or `None` when it stays whole.
fn split(token: &Token) -> Option<(Token, Token)> {
    let len = token.char_len();
    if len < 2 {
        return None;
    }
    let first = token.first_char()?;

    if first.is_ascii_alphanumeric() {
        let h = token.text.chars().position(|c| c == '-')?;
        if h == 0 || h >= len - 1 {
            return None;
        }
        let mut head = token.sub_token(0, h);
        head.position_increment = token.position_increment;
        return Some((head, token.sub_token(h + 1, len)));
    }

    if first == ')' {
        let mut paren = token.sub_token(0, 1);
        paren.position_increment = token.position_increment;
        return Some((paren, token.sub_token(1, len)));
    }

    None
}

impl TokenStream for HyphenSplitStream {
    fn next_token(&mut self) -> Result<Option<Token>> {
        if let Some(token) = self.queue.pop() {
            return Ok(Some(token));
        }

        let Some(token) = self.next_distinct()? else {
            return Ok(None);
        };

        match split(&token) {
            Some((head, tail)) => {
                self.queue.push(tail);
                Ok(Some(head))
            }
            None => Ok(Some(token)),
        }
    }

    fn reset(&mut self, text: &str) -> Result<()> {
        self.queue.clear();
        self.previous_start = None;
        self.input.reset(text)
    }

    fn name(&self) -> &'static str {
        "hyphen_split"
    }
}

//! Script-boundary splitting.
//!
//! A token mixing scripts (`第3`, `Windows版`) is cut wherever two
//! consecutive chars belong to different Unicode blocks. The pieces keep the
//! token type; the first keeps the original position increment.

use crate::analysis::token::{BoxTokenStream, Token, TokenQueue, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;
use crate::util::unicode_block::UnicodeBlock;

/// A filter splitting tokens at Unicode block changes.
#[derive(Clone, Debug, Default)]
pub struct ScriptSplitFilter;

impl ScriptSplitFilter {
    /// Create a new script split filter.
    pub fn new() -> Self {
        ScriptSplitFilter
    }
}

impl Filter for ScriptSplitFilter {
    fn filter(&self, input: BoxTokenStream) -> Result<BoxTokenStream> {
        Ok(Box::new(ScriptSplitStream {
            input,
            queue: TokenQueue::new(),
        }))
    }

    fn name(&self) -> &'static str {
        "script_split"
    }
}

/// Stream state of [`ScriptSplitFilter`].
pub struct ScriptSplitStream {
    input: BoxTokenStream,
    queue: TokenQueue,
}

/// Char indices where the block changes, in increasing order.
fn block_boundaries(text: &str) -> Vec<usize> {
    let mut cuts = Vec::new();
    let mut previous: Option<UnicodeBlock> = None;
    for (idx, c) in text.chars().enumerate() {
        let block = UnicodeBlock::of(c);
        if previous.is_some_and(|p| p != block) {
            cuts.push(idx);
        }
        previous = Some(block);
    }
    cuts
}

impl TokenStream for ScriptSplitStream {
    fn next_token(&mut self) -> Result<Option<Token>> {
        if let Some(token) = self.queue.pop() {
            return Ok(Some(token));
        }

        let Some(token) = self.input.next_token()? else {
            return Ok(None);
        };

        let cuts = block_boundaries(&token.text);
        if cuts.is_empty() {
            return Ok(Some(token));
        }

        let mut from = 0;
        for cut in cuts.into_iter().chain(std::iter::once(token.char_len())) {
            let mut piece = token.sub_token(from, cut);
            if from == 0 {
                piece.position_increment = token.position_increment;
            }
            self.queue.push(piece);
            from = cut;
        }
        log::trace!("split '{}' into {} pieces", token.text, self.queue.len());

        Ok(self.queue.pop())
    }

    fn reset(&mut self, text: &str) -> Result<()> {
        self.queue.clear();
        self.input.reset(text)
    }

    fn name(&self) -> &'static str {
        "script_split"
    }
}

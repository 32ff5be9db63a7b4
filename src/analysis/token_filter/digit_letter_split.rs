//! Digit/letter splitting.
//!
//! Units glued to numbers (`80hz`, `5kg`) and numeric ranges
//! (`2010-2012`) are split so the number is indexed on its own.

use crate::analysis::token::{BoxTokenStream, Token, TokenQueue, TokenStream, TokenType};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Trailing chars that keep a digit-led token whole.
const KEEP_WHOLE_SUFFIXES: [char; 5] = ['-', '.', '(', ')', '\''];

/// A filter splitting a leading number from trailing letters, and numeric
/// ranges into their bounds and a `-` token.
///
/// Only tokens starting with an ASCII digit and at least two chars long are
/// considered.
///
/// | input       | output                 |
/// |-------------|------------------------|
/// | `80hz`      | `80` `hz`              |
/// | `2010-2012` | `2010` `-` `2012`      |
/// | `3.5`       | `3.5` (unchanged)      |
#[derive(Clone, Debug, Default)]
pub struct DigitLetterSplitFilter;

impl DigitLetterSplitFilter {
    /// Create a new digit/letter split filter.
    pub fn new() -> Self {
        DigitLetterSplitFilter
    }
}

impl Filter for DigitLetterSplitFilter {
    fn filter(&self, input: BoxTokenStream) -> Result<BoxTokenStream> {
        Ok(Box::new(DigitLetterSplitStream {
            input,
            queue: TokenQueue::new(),
        }))
    }

    fn name(&self) -> &'static str {
        "digit_letter_split"
    }
}

/// Stream state of [`DigitLetterSplitFilter`].
pub struct DigitLetterSplitStream {
    input: BoxTokenStream,
    queue: TokenQueue,
}

/// Split `token` into pieces, or `None` when it stays whole.
fn split(token: &Token) -> Option<Vec<Token>> {
    let chars: Vec<char> = token.text.chars().collect();
    let len = chars.len();
    if len < 2 || !chars[0].is_ascii_digit() {
        return None;
    }
    let last = chars[len - 1];

    if !last.is_ascii_digit() && !KEEP_WHOLE_SUFFIXES.contains(&last) {
        let idx = chars.iter().position(|c| !c.is_ascii_digit())?;
        let mut number = token.sub_token(0, idx).with_token_type(TokenType::Num);
        number.position_increment = token.position_increment;
        let rest = token.sub_token(idx, len).with_token_type(TokenType::Alphanum);
        return Some(vec![number, rest]);
    }

    if last.is_ascii_digit() {
        let hyphen = chars.iter().position(|c| !c.is_ascii_digit())?;
        let is_range =
            chars[hyphen] == '-' && chars[hyphen + 1..].iter().all(|c| c.is_ascii_digit());
        if is_range {
            let mut low = token.sub_token(0, hyphen).with_token_type(TokenType::Num);
            low.position_increment = token.position_increment;
            let dash = token
                .sub_token(hyphen, hyphen + 1)
                .with_token_type(TokenType::Punctuation);
            let high = token.sub_token(hyphen + 1, len).with_token_type(TokenType::Num);
            return Some(vec![low, dash, high]);
        }
    }

    None
}

impl TokenStream for DigitLetterSplitStream {
    fn next_token(&mut self) -> Result<Option<Token>> {
        if let Some(token) = self.queue.pop() {
            return Ok(Some(token));
        }

        let Some(token) = self.input.next_token()? else {
            return Ok(None);
        };

        match split(&token) {
            Some(pieces) => {
                self.queue.extend(pieces);
                Ok(self.queue.pop())
            }
            None => Ok(Some(token)),
        }
    }

    fn reset(&mut self, text: &str) -> Result<()> {
        self.queue.clear();
        self.input.reset(text)
    }

    fn name(&self) -> &'static str {
        "digit_letter_split"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::{IntoTokenStream, collect_tokens};

    fn run(tokens: Vec<Token>) -> Vec<Token> {
        let filter = DigitLetterSplitFilter::new();
        let mut stream = filter.filter(tokens.into_token_stream()).unwrap();
        collect_tokens(&mut stream).unwrap()
    }

    fn alnum(text: &str, start: usize) -> Token {
        let end = start + text.chars().count();
        Token::new(text, start, end).with_token_type(TokenType::Alphanum)
    }

    #[test]
    fn test_unit_split() {
        let tokens = run(vec![alnum("80hz", 10)]);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "80");
        assert_eq!(tokens[0].token_type, TokenType::Num);
        assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (10, 12));
        assert_eq!(tokens[1].text, "hz");
        assert_eq!(tokens[1].token_type, TokenType::Alphanum);
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (12, 14));
    }

    #[test]
    fn test_short_unit_split() {
        let tokens = run(vec![alnum("8h", 0)]);
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["8", "h"]);
    }

    #[test]
    fn test_range_split() {
        let tokens = run(vec![alnum("2010-2012", 0).with_position_increment(2)]);
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["2010", "-", "2012"]);

        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (4, 5));
        assert_eq!(tokens[1].token_type, TokenType::Punctuation);
        assert_eq!((tokens[2].start_offset, tokens[2].end_offset), (5, 9));
        assert_eq!(tokens[0].position_increment, 2);
        assert_eq!(tokens[2].position_increment, 1);
    }

    #[test]
    fn test_unchanged_tokens() {
        for text in ["3.5", "12-", "5(", "1990'", "hz80", "7", "12a-3"] {
            let tokens = run(vec![alnum(text, 0)]);
            assert_eq!(tokens.len(), 1, "{text} should stay whole");
            assert_eq!(tokens[0].text, text);
        }
    }
}

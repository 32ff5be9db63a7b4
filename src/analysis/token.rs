//! Token types and the pull-based stream contract.
//!
//! This module defines the core data structures that flow through the
//! analysis pipeline and the protocol every stage implements.
//!
//! # Core Types
//!
//! - [`Token`] - A single token with text, type, character offsets and position increment
//! - [`TokenType`] - Closed classification of token content
//! - [`TokenStream`] - The pull protocol: `next_token()` / `reset(text)`
//! - [`TokenQueue`] - FIFO of tokens a filter produced but has not returned yet
//!
//! # Offsets
//!
//! Offsets count Unicode scalar values (chars) of the original input, not
//! bytes. `start_offset < end_offset` always holds, and every stage keeps
//! offsets pointing into the original text, even after merges and splits.
//!
//! # Position increments
//!
//! ```text
//! Input: "책은" decomposed into stem + particle
//!
//!   "책"  (pos_inc=1)  ← next logical slot
//!   "−은" (pos_inc=0)  ← same slot as the stem
//! ```
//!
//! # Examples
//!
//! ```
//! use retok::analysis::token::{Token, TokenType};
//!
//! let token = Token::new("80hz", 4, 8).with_token_type(TokenType::Alphanum);
//! assert_eq!(token.text, "80hz");
//! assert_eq!(token.start_offset, 4);
//! assert_eq!(token.end_offset, 8);
//! assert_eq!(token.position_increment, 1);
//! ```
//!
//! Feeding pre-tokenized input into a stream:
//!
//! ```
//! use retok::analysis::token::{collect_tokens, IntoTokenStream, Token};
//!
//! let mut stream = vec![Token::new("hello", 0, 5), Token::new("world", 6, 11)].into_token_stream();
//! let tokens = collect_tokens(&mut stream).unwrap();
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[1].text, "world");
//! ```

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::util::chars;

/// A token is a labeled span of the source text.
///
/// # Fields
///
/// - `text` - The term; replaced wholesale when a filter transforms it
/// - `token_type` - Classification of the term
/// - `start_offset` / `end_offset` - Char offsets in the original text
/// - `position_increment` - Slots advanced since the previous emitted token (default: 1)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// Token type classification
    pub token_type: TokenType,

    /// The char offset where this token starts in the original text
    pub start_offset: usize,

    /// The char offset where this token ends in the original text (exclusive)
    pub end_offset: usize,

    /// Position increment from the previous token (default: 1).
    ///
    /// - 1 (default): Normal increment, next position
    /// - 0: Same position as previous token (e.g., a decomposed suffix)
    /// - >1: Skip positions (e.g., upstream tokens were dropped)
    pub position_increment: usize,
}

/// Token type classification.
///
/// Every filter dispatches on this closed set, so adding a variant is a
/// compile-time checked change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Latin letters and digits
    Alphanum,
    /// Numeric values
    Num,
    /// Latin word carrying an apostrophe (possessive contraction)
    Apostrophe,
    /// Dotted acronym such as "U.S.A."
    Acronym,
    /// E-mail address
    Email,
    /// ASCII punctuation
    Punctuation,
    /// CJK, full-width or typographic punctuation
    Delimiter,
    /// Run of full-width digits
    FullWidthNumber,
    /// Run of full-width Latin letters and digits
    FullWidthString,
    /// Han ideographs
    Cjk,
    /// Hiragana (Japanese)
    Hiragana,
    /// Katakana (Japanese)
    Katakana,
    /// Raw Hangul word awaiting morphological decomposition
    Korean,
    /// Korean stem produced by decomposition
    KoreanNoun,
    /// Korean indexing keyword produced in multi-keyword mode
    KoreanKeyword,
    /// Korean particle (josa) suffix
    Particle,
    /// Korean verbal infix + ending (eomi) suffix
    Ending,
    /// Token fused from several upstream tokens
    Compound,
    /// Other/unknown token types
    Other,
}

impl TokenType {
    /// The bracketed label used in annotated output, e.g. `<ALPHANUM>`.
    pub fn label(&self) -> &'static str {
        match self {
            TokenType::Alphanum => "<ALPHANUM>",
            TokenType::Num => "<NUM>",
            TokenType::Apostrophe => "<APOSTROPHE>",
            TokenType::Acronym => "<ACRONYM>",
            TokenType::Email => "<EMAIL>",
            TokenType::Punctuation => "<PUNCT>",
            TokenType::Delimiter => "<DELIMITER>",
            TokenType::FullWidthNumber => "<FULLWIDTH_NUM>",
            TokenType::FullWidthString => "<FULLWIDTH_STRING>",
            TokenType::Cjk => "<CJ>",
            TokenType::Hiragana => "<HIRAGANA>",
            TokenType::Katakana => "<KATAKANA>",
            TokenType::Korean => "<KOREAN>",
            TokenType::KoreanNoun => "<KORNOUN>",
            TokenType::KoreanKeyword => "<KOROREAN>",
            TokenType::Particle => "<POSTJOSA>",
            TokenType::Ending => "<POSTEOMI>",
            TokenType::Compound => "<COMPOUND>",
            TokenType::Other => "<OTHER>",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Token {
    /// Create a new token covering `start_offset..end_offset` (chars).
    ///
    /// The type defaults to [`TokenType::Other`] and the position increment to 1.
    pub fn new<S: Into<String>>(text: S, start_offset: usize, end_offset: usize) -> Self {
        debug_assert!(
            start_offset < end_offset,
            "malformed token span {start_offset}..{end_offset}"
        );
        Token {
            text: text.into(),
            token_type: TokenType::Other,
            start_offset,
            end_offset,
            position_increment: 1,
        }
    }

    /// Length of the term in chars.
    pub fn char_len(&self) -> usize {
        chars::char_len(&self.text)
    }

    /// Check if the term is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// First char of the term.
    pub fn first_char(&self) -> Option<char> {
        self.text.chars().next()
    }

    /// Last char of the term.
    pub fn last_char(&self) -> Option<char> {
        self.text.chars().next_back()
    }

    /// Whether the term is exactly the single char `c`.
    pub fn is_char(&self, c: char) -> bool {
        let mut it = self.text.chars();
        it.next() == Some(c) && it.next().is_none()
    }

    /// Whether this is an extra keyword stacked on the previous token's
    /// position, as emitted in Korean multi-keyword mode.
    ///
    /// Stacked keywords may share a start offset with the keyword before
    /// them and are exempt from duplicate-offset suppression.
    pub fn is_stacked_keyword(&self) -> bool {
        self.position_increment == 0 && self.token_type == TokenType::KoreanKeyword
    }

    /// Set the token type.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }

    /// Set the position increment.
    pub fn with_position_increment(mut self, increment: usize) -> Self {
        self.position_increment = increment;
        self
    }

    /// Clone this token with updated text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }

    /// Cut the term at char indices `from..to` into a new token whose span is
    /// shifted by the same amount from this token's start.
    ///
    /// The piece keeps the type and gets a position increment of 1.
    pub fn sub_token(&self, from: usize, to: usize) -> Token {
        debug_assert!(from < to, "empty sub-token {from}..{to} of {:?}", self.text);
        Token {
            text: chars::char_slice(&self.text, from, to).to_string(),
            token_type: self.token_type,
            start_offset: self.start_offset + from,
            end_offset: (self.start_offset + to).min(self.end_offset),
            position_increment: 1,
        }
    }

    /// The slice of `source` covered by this token's span.
    pub fn source_text<'a>(&self, source: &'a str) -> &'a str {
        chars::char_slice(source, self.start_offset, self.end_offset)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// The pull protocol every tokenizer and filter implements.
///
/// `next_token` is the only suspension point: a call may pull zero or more
/// tokens from upstream before returning, and surplus tokens are queued
/// inside the stage. `Ok(None)` signals end of stream and keeps being
/// returned on later calls.
///
/// `reset` clears all internal state of the stage and propagates down the
/// chain, where the bottom segmenter restarts over `text`. Running the same
/// text after a reset yields the same tokens.
pub trait TokenStream: Send {
    /// Return the next token, `Ok(None)` at end of stream.
    fn next_token(&mut self) -> Result<Option<Token>>;

    /// Clear all buffered state and restart the chain over `text`.
    fn reset(&mut self, text: &str) -> Result<()>;

    /// Get the name of this stage (for debugging and configuration).
    fn name(&self) -> &'static str;
}

impl<S: TokenStream + ?Sized> TokenStream for Box<S> {
    fn next_token(&mut self) -> Result<Option<Token>> {
        (**self).next_token()
    }

    fn reset(&mut self, text: &str) -> Result<()> {
        (**self).reset(text)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// A boxed stage of a token pipeline.
pub type BoxTokenStream = Box<dyn TokenStream>;

/// Iterator adapter over a borrowed [`TokenStream`].
///
/// Yields `Result<Token>`; iteration stops after end of stream or the first error.
pub struct TokenIter<'a> {
    stream: &'a mut dyn TokenStream,
    done: bool,
}

impl<'a> TokenIter<'a> {
    /// Iterate over the remaining tokens of `stream`.
    pub fn new(stream: &'a mut dyn TokenStream) -> Self {
        TokenIter {
            stream,
            done: false,
        }
    }
}

impl Iterator for TokenIter<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.stream.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Drain the remaining tokens of `stream` into a vector.
pub fn collect_tokens(stream: &mut dyn TokenStream) -> Result<Vec<Token>> {
    TokenIter::new(stream).collect()
}

/// FIFO of fully formed tokens waiting to be returned by a filter.
///
/// A filter with a non-empty queue must drain it before pulling upstream again.
#[derive(Clone, Debug, Default)]
pub struct TokenQueue {
    tokens: VecDeque<Token>,
}

impl TokenQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        TokenQueue::default()
    }

    /// Append a token at the back.
    pub fn push(&mut self, token: Token) {
        self.tokens.push_back(token);
    }

    /// Take the oldest token.
    pub fn pop(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }

    /// Number of queued tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Drop every queued token.
    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// Remove and return every queued token, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = Token> + '_ {
        self.tokens.drain(..)
    }
}

impl Extend<Token> for TokenQueue {
    fn extend<I: IntoIterator<Item = Token>>(&mut self, iter: I) {
        self.tokens.extend(iter);
    }
}

/// A stream replaying a fixed list of tokens.
///
/// `reset` rewinds to the first token and ignores the text, which makes it
/// a stand-in for a segmenter that already ran.
#[derive(Clone, Debug)]
pub struct VecTokenStream {
    tokens: Vec<Token>,
    cursor: usize,
}

impl VecTokenStream {
    /// Create a stream over `tokens`.
    pub fn new(tokens: Vec<Token>) -> Self {
        VecTokenStream { tokens, cursor: 0 }
    }
}

impl TokenStream for VecTokenStream {
    fn next_token(&mut self) -> Result<Option<Token>> {
        let token = self.tokens.get(self.cursor).cloned();
        if token.is_some() {
            self.cursor += 1;
        }
        Ok(token)
    }

    fn reset(&mut self, _text: &str) -> Result<()> {
        self.cursor = 0;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "vec"
    }
}

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> BoxTokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> BoxTokenStream {
        Box::new(VecTokenStream::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 0, 5);
        assert_eq!(token.text, "hello");
        assert_eq!(token.token_type, TokenType::Other);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 5);
        assert_eq!(token.position_increment, 1);
    }

    #[test]
    fn test_token_methods() {
        let token = Token::new("第3", 2, 4)
            .with_token_type(TokenType::Num)
            .with_position_increment(0);

        assert_eq!(token.char_len(), 2);
        assert_eq!(token.first_char(), Some('第'));
        assert_eq!(token.last_char(), Some('3'));
        assert_eq!(token.token_type, TokenType::Num);
        assert_eq!(token.position_increment, 0);
        assert!(!token.is_char('第'));
        assert!(Token::new("和", 0, 1).is_char('和'));
    }

    #[test]
    fn test_sub_token() {
        let token = Token::new("한국어는", 10, 14).with_token_type(TokenType::Korean);
        let stem = token.sub_token(0, 3);
        let tail = token.sub_token(3, 4);

        assert_eq!(stem.text, "한국어");
        assert_eq!((stem.start_offset, stem.end_offset), (10, 13));
        assert_eq!(tail.text, "는");
        assert_eq!((tail.start_offset, tail.end_offset), (13, 14));
        assert_eq!(tail.token_type, TokenType::Korean);
    }

    #[test]
    fn test_source_text() {
        let source = "日本語 text";
        let token = Token::new("text", 4, 8);
        assert_eq!(token.source_text(source), "text");
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("hello", 0, 5);
        assert_eq!(format!("{token}"), "hello");
        assert_eq!(format!("{}", TokenType::Particle), "<POSTJOSA>");
    }

    #[test]
    fn test_stacked_keyword() {
        let first = Token::new("정보검색", 0, 4).with_token_type(TokenType::KoreanKeyword);
        let stacked = Token::new("정보", 0, 2)
            .with_token_type(TokenType::KoreanKeyword)
            .with_position_increment(0);
        let suffix = Token::new("−은", 1, 2)
            .with_token_type(TokenType::Particle)
            .with_position_increment(0);

        assert!(!first.is_stacked_keyword());
        assert!(stacked.is_stacked_keyword());
        assert!(!suffix.is_stacked_keyword());
    }

    #[test]
    fn test_token_queue_order() {
        let mut queue = TokenQueue::new();
        queue.push(Token::new("a", 0, 1));
        queue.push(Token::new("b", 1, 2));
        queue.extend([Token::new("c", 2, 3)]);

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop().map(|t| t.text), Some("a".to_string()));
        queue.push(Token::new("a", 0, 1));

        let drained: Vec<String> = queue.drain().map(|t| t.text).collect();
        assert_eq!(drained, vec!["b", "c", "a"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_vec_stream_reset() {
        let mut stream = vec![Token::new("hello", 0, 5), Token::new("world", 6, 11)]
            .into_token_stream();

        let first = collect_tokens(&mut stream).unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(stream.next_token().unwrap(), None);

        stream.reset("ignored").unwrap();
        let second = collect_tokens(&mut stream).unwrap();
        assert_eq!(first, second);
    }
}

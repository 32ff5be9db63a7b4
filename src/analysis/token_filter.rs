//! Token filter implementations for token transduction.
//!
//! A filter wraps the stream beneath it and re-shapes its tokens: it may
//! rewrite a term, split one token into several, merge several into one, or
//! drop duplicates. Every filter is itself a [`TokenStream`], so filters
//! compose to any depth.
//!
//! # Available Filters
//!
//! - [`punctuation::WidthNormalizeFilter`] - Full-width and CJK punctuation to ASCII
//! - [`script_split::ScriptSplitFilter`] - Splits a token where its Unicode block changes
//! - [`same_script_merge::SameScriptMergeFilter`] - Merges numerals, decimals and Latin fragments
//! - [`digit_letter_split::DigitLetterSplitFilter`] - `80hz` → `80` `hz`, `2010-2012` → 3 tokens
//! - [`hyphen_split::HyphenSplitFilter`] - Splits at an interior hyphen or a leading `)`
//! - [`ordinal::OrdinalFilter`] - Fuses an ordinal marker with the following number
//! - [`conjunction::ConjunctionFilter`] - Fuses `和 … 或` connector runs
//! - [`dedup_offset::DedupOffsetFilter`] - Drops tokens repeating the previous start offset
//! - [`korean::KoreanDecompositionFilter`] - Korean stem + suffix decomposition
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Width → Script Split → Same-Script Merge → Ordinal → Digit/Letter → Hyphen
//! ```
//!
//! # Examples
//!
//! ```
//! use retok::analysis::token::{collect_tokens, IntoTokenStream, Token, TokenType};
//! use retok::analysis::token_filter::Filter;
//! use retok::analysis::token_filter::digit_letter_split::DigitLetterSplitFilter;
//!
//! let filter = DigitLetterSplitFilter::new();
//! let input = vec![Token::new("80hz", 0, 4).with_token_type(TokenType::Alphanum)];
//! let mut stream = filter.filter(input.into_token_stream()).unwrap();
//! let tokens = collect_tokens(&mut stream).unwrap();
//!
//! assert_eq!(tokens[0].text, "80");
//! assert_eq!(tokens[1].text, "hz");
//! ```
//!
//! [`TokenStream`]: crate::analysis::token::TokenStream

use crate::analysis::token::BoxTokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// A filter is a factory: `filter` wraps an input stream into a new stream
/// that carries the filter's state. The factory itself is stateless and can
/// be shared, which is why the trait requires `Send + Sync`.
///
/// # Examples
///
/// Implementing a custom filter:
///
/// ```
/// use retok::analysis::token::{BoxTokenStream, Token, TokenStream};
/// use retok::analysis::token_filter::Filter;
/// use retok::error::Result;
///
/// struct UppercaseFilter;
///
/// struct UppercaseStream {
///     input: BoxTokenStream,
/// }
///
/// impl TokenStream for UppercaseStream {
///     fn next_token(&mut self) -> Result<Option<Token>> {
///         Ok(self.input.next_token()?.map(|t| {
///             let upper = t.text.to_uppercase();
///             t.with_text(upper)
///         }))
///     }
///
///     fn reset(&mut self, text: &str) -> Result<()> {
///         self.input.reset(text)
///     }
///
///     fn name(&self) -> &'static str {
///         "uppercase"
///     }
/// }
///
/// impl Filter for UppercaseFilter {
///     fn filter(&self, input: BoxTokenStream) -> Result<BoxTokenStream> {
///         Ok(Box::new(UppercaseStream { input }))
///     }
///
///     fn name(&self) -> &'static str {
///         "uppercase"
///     }
/// }
/// ```
pub trait Filter: Send + Sync {
    /// Wrap `input` into a filtered stream.
    fn filter(&self, input: BoxTokenStream) -> Result<BoxTokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod conjunction;
pub mod dedup_offset;
pub mod digit_letter_split;
pub mod hyphen_split;
pub mod korean;
pub mod ordinal;
pub mod punctuation;
pub mod same_script_merge;
pub mod script_split;

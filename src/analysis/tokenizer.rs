//! Tokenizer implementations for text analysis.
//!
//! A tokenizer is the base segmenter at the bottom of every pipeline. It
//! produces a [`BoxTokenStream`] whose `reset(text)` restarts segmentation
//! over new text, which is what lets a whole pipeline be reused.
//!
//! # Available Tokenizers
//!
//! - [`script::ScriptTokenizer`] - Rule-based segmenter classifying runs by script
//!
//! Dictionary or statistical segmenters plug in by implementing [`Tokenizer`].
//!
//! # Examples
//!
//! ```
//! use retok::analysis::token::collect_tokens;
//! use retok::analysis::tokenizer::Tokenizer;
//! use retok::analysis::tokenizer::script::ScriptTokenizer;
//!
//! let tokenizer = ScriptTokenizer::new().unwrap();
//! let mut stream = tokenizer.tokenize("Hello world").unwrap();
//! let tokens = collect_tokens(&mut stream).unwrap();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::BoxTokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a single tokenizer can be shared
/// by pipelines running on different threads.
///
/// # Examples
///
/// Implementing a custom tokenizer over pre-segmented input:
///
/// ```
/// use retok::analysis::token::{BoxTokenStream, IntoTokenStream, Token};
/// use retok::analysis::tokenizer::Tokenizer;
/// use retok::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> Result<BoxTokenStream> {
///         let mut tokens = Vec::new();
///         let mut start = 0;
///         for part in text.split(',') {
///             let len = part.chars().count();
///             if len > 0 {
///                 tokens.push(Token::new(part, start, start + len));
///             }
///             start += len + 1;
///         }
///         Ok(tokens.into_token_stream())
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Create a stream positioned at the start of `text`.
    ///
    /// Calling `reset` on the returned stream must restart segmentation
    /// over the text it is given.
    fn tokenize(&self, text: &str) -> Result<BoxTokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod script;

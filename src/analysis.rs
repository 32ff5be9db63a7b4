//! Text analysis: tokens, tokenizers, filters and the analyzers that chain them.
//!
//! Text flows through a pull-based pipeline:
//!
//! ```text
//! Raw Text → ScriptTokenizer → Filter 1 → … → Filter N → Tokens
//! ```
//!
//! Each stage is a [`token::TokenStream`]; the consumer pulls from the
//! last filter, which pulls from the one below it. Resetting the outermost
//! stream with new text resets the whole chain.

pub mod analyzer;
pub mod morph;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

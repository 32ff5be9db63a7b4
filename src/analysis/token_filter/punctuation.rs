//! Punctuation and width normalization.
//!
//! Full-width digits and Latin letters fold to ASCII, and CJK or
//! typographic punctuation maps to its ASCII counterpart. The filter is one
//! token in, one token out: offsets never change, so a folded token still
//! points at the original full-width text.

use crate::analysis::token::{BoxTokenStream, Token, TokenStream, TokenType};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Distance between a full-width ASCII variant and its ASCII form.
const FULLWIDTH_SHIFT: u32 = 0xFEE0;

/// Fold a full-width digit or Latin letter (U+FF10..U+FF5E) to ASCII.
pub fn fold_width(c: char) -> char {
    if ('\u{FF10}'..='\u{FF5E}').contains(&c) {
        char::from_u32(c as u32 - FULLWIDTH_SHIFT).unwrap_or(c)
    } else {
        c
    }
}

/// Map a CJK or typographic punctuation char to ASCII.
pub fn normalize_punctuation(c: char) -> char {
    match c {
        '％' => '%',
        '，' | '、' => ',',
        '。' | '．' | '…' | '‥' => '.',
        '〈' | '＜' => '<',
        '〉' | '＞' => '>',
        '【' | '〔' | '［' | '｛' | '〘' | '〚' => '[',
        '】' | '〕' | '］' | '｝' | '〙' | '〛' => ']',
        '（' => '(',
        '）' => ')',
        '「' | '」' | '『' | '』' | '《' | '》' | '“' | '”' | '″' | '＂' => '"',
        '−' | '‐' | '－' | '─' | '〜' | '～' | '–' | '—' => '-',
        '：' => ':',
        '；' => ';',
        '／' => '/',
        '！' => '!',
        '？' => '?',
        '・' | '\u{3000}' | '\u{00A0}' => ' ',
        other => other,
    }
}

/// Normalize a token's text according to its type.
pub fn normalize_token(token: Token) -> Token {
    let mapped: Option<fn(char) -> char> = match token.token_type {
        TokenType::FullWidthNumber | TokenType::FullWidthString => Some(fold_width),
        TokenType::Delimiter | TokenType::Punctuation => Some(normalize_punctuation),
        _ => None,
    };

    match mapped {
        Some(map) => {
            let text: String = token.text.chars().map(map).collect();
            if text == token.text {
                token
            } else {
                token.with_text(text)
            }
        }
        None => token,
    }
}

/// A filter normalizing full-width forms and punctuation.
///
/// # Examples
///
/// ```
/// use retok::analysis::token::{collect_tokens, IntoTokenStream, Token, TokenType};
/// use retok::analysis::token_filter::Filter;
/// use retok::analysis::token_filter::punctuation::WidthNormalizeFilter;
///
/// let filter = WidthNormalizeFilter::new();
/// let input = vec![
///     Token::new("ｅｖｉｃ", 0, 4).with_token_type(TokenType::FullWidthString),
///     Token::new("、", 4, 5).with_token_type(TokenType::Delimiter),
/// ];
/// let mut stream = filter.filter(input.into_token_stream()).unwrap();
/// let tokens = collect_tokens(&mut stream).unwrap();
///
/// assert_eq!(tokens[0].text, "evic");
/// assert_eq!(tokens[1].text, ",");
/// ```
#[derive(Clone, Debug, Default)]
pub struct WidthNormalizeFilter;

impl WidthNormalizeFilter {
    /// Create a new width normalization filter.
    pub fn new() -> Self {
        WidthNormalizeFilter
    }
}

impl Filter for WidthNormalizeFilter {
    fn filter(&self, input: BoxTokenStream) -> Result<BoxTokenStream> {
        Ok(Box::new(WidthNormalizeStream { input }))
    }

    fn name(&self) -> &'static str {
        "width_normalize"
    }
}

/// Stream state of [`WidthNormalizeFilter`]; it holds no buffer.
pub struct WidthNormalizeStream {
    input: BoxTokenStream,
}

impl TokenStream for WidthNormalizeStream {
    fn next_token(&mut self) -> Result<Option<Token>> {
        Ok(self.input.next_token()?.map(normalize_token))
    }

    fn reset(&mut self, text: &str) -> Result<()> {
        self.input.reset(text)
    }

    fn name(&self) -> &'static str {
        "width_normalize"
    }
}

//! Same-script merging.
//!
//! Segmenters tend to cut numerals and Latin words into fragments
//! (`0` `.` `1`, `ｅｖ` `ｉｃ`), and CJK text puts spaces inside Latin
//! words (`ｅｖ ｉｃ`). This filter glues such fragments back together. It holds a single token of look-ahead: the token that stopped
//! a merge run is kept and starts the next run.

use crate::analysis::token::{BoxTokenStream, Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;
use crate::util::chars::{is_any_digit, is_latin_or_fullwidth, is_numeral};

/// A filter merging adjacent numerals, decimals and Latin fragments.
///
/// Merge rules, checked in order between the run so far and the next token:
///
/// 1. a numeral ending with a digit absorbs a following `"."`
/// 2. two numerals merge
/// 3. a numeral ending with `.` absorbs a following numeral
/// 4. tokens of the same type merge across any gap when the next starts
///    with a Latin or full-width alphanumeric, unless exactly one side is a
///    numeral
///
/// The merged token keeps the start, type and position increment of the
/// first fragment and ends where the last fragment ends.
///
/// # Examples
///
/// ```
/// use retok::analysis::token::{collect_tokens, IntoTokenStream, Token, TokenType};
/// use retok::analysis::token_filter::Filter;
/// use retok::analysis::token_filter::same_script_merge::SameScriptMergeFilter;
///
/// let filter = SameScriptMergeFilter::new();
/// let input = vec![
///     Token::new("0", 0, 1).with_token_type(TokenType::Num),
///     Token::new(".", 1, 2).with_token_type(TokenType::Punctuation),
///     Token::new("1", 2, 3).with_token_type(TokenType::Num),
/// ];
/// let mut stream = filter.filter(input.into_token_stream()).unwrap();
/// let tokens = collect_tokens(&mut stream).unwrap();
///
/// assert_eq!(tokens.len(), 1);
/// assert_eq!(tokens[0].text, "0.1");
/// ```
#[derive(Clone, Debug, Default)]
pub struct SameScriptMergeFilter;

impl SameScriptMergeFilter {
    /// Create a new same-script merge filter.
    pub fn new() -> Self {
        SameScriptMergeFilter
    }
}

impl Filter for SameScriptMergeFilter {
    fn filter(&self, input: BoxTokenStream) -> Result<BoxTokenStream> {
        Ok(Box::new(SameScriptMergeStream { input, held: None }))
    }

    fn name(&self) -> &'static str {
        "same_script_merge"
    }
}

/// Stream state of [`SameScriptMergeFilter`].
pub struct SameScriptMergeStream {
    input: BoxTokenStream,
    /// Token pulled past the end of the last run.
    held: Option<Token>,
}

fn should_merge(previous: &Token, current: &Token) -> bool {
    let prev_numeral = is_numeral(&previous.text);
    let cur_numeral = is_numeral(&current.text);

    if prev_numeral && previous.last_char().is_some_and(is_any_digit) && current.text == "." {
        return true;
    }
    if prev_numeral && cur_numeral {
        return true;
    }
    if prev_numeral && previous.text.ends_with('.') && cur_numeral {
        return true;
    }

    current.start_offset >= previous.end_offset
        && current.token_type == previous.token_type
        && current.first_char().is_some_and(is_latin_or_fullwidth)
        && prev_numeral == cur_numeral
}

impl TokenStream for SameScriptMergeStream {
    fn next_token(&mut self) -> Result<Option<Token>> {
        let first = match self.held.take() {
            Some(token) => token,
            None => match self.input.next_token()? {
                Some(token) => token,
                None => return Ok(None),
            },
        };

        if !first.first_char().is_some_and(is_latin_or_fullwidth) {
            return Ok(Some(first));
        }

        let mut run = first;
        while let Some(current) = self.input.next_token()? {
            if should_merge(&run, &current) {
                run.text.push_str(&current.text);
                run.end_offset = current.end_offset;
            } else {
                self.held = Some(current);
                break;
            }
        }

        Ok(Some(run))
    }

    fn reset(&mut self, text: &str) -> Result<()> {
        self.held = None;
        self.input.reset(text)
    }

    fn name(&self) -> &'static str {
        "same_script_merge"
    }
}

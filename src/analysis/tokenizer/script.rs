//! Rule-based script tokenizer.
//!
//! Segments text into runs classified by script, skipping whitespace.
//! Han ideographs and Hiragana come out one char per token, Katakana and
//! Hangul as whole runs, and Latin text as alphanumeric runs that may carry
//! inner `-` and `.` joins (`2010-2012`, `alpha-receptor`, `0.1`). Later
//! filters refine those runs.

use std::sync::Arc;

use regex::{Captures, Regex};

use crate::analysis::token::{BoxTokenStream, Token, TokenStream, TokenType};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{Result, RetokError};

/// Alternatives are tried left to right at each position.
const SCRIPT_PATTERN: &str = concat!(
    r"(?P<email>[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(?:\.[A-Za-z0-9\-]+)+)",
    r"|(?P<acronym>(?:[A-Za-z]\.){2,})",
    r"|(?P<apostrophe>[A-Za-z]+'[A-Za-z]+)",
    r"|(?P<alnum>[A-Za-z0-9]+(?:[\-.][A-Za-z0-9]+)*)",
    r"|(?P<fullwidth>[\x{FF10}-\x{FF19}\x{FF21}-\x{FF3A}\x{FF41}-\x{FF5A}]+)",
    r"|(?P<han>[\x{3400}-\x{4DBF}\x{4E00}-\x{9FFF}\x{F900}-\x{FAFF}\x{20000}-\x{2A6DF}])",
    r"|(?P<hiragana>[\x{3041}-\x{309F}])",
    r"|(?P<katakana>[\x{30A1}-\x{30FA}\x{30FC}-\x{30FF}\x{31F0}-\x{31FF}\x{FF66}-\x{FF9F}]+)",
    r"|(?P<hangul>[\x{AC00}-\x{D7AF}\x{1100}-\x{11FF}\x{3131}-\x{318E}]+)",
    r"|(?P<other>\S)",
);

/// A tokenizer that classifies text runs by script.
///
/// The compiled pattern is shared between all streams it creates.
#[derive(Clone, Debug)]
pub struct ScriptTokenizer {
    pattern: Arc<Regex>,
}

impl ScriptTokenizer {
    /// Create a new script tokenizer.
    pub fn new() -> Result<Self> {
        let regex = Regex::new(SCRIPT_PATTERN)
            .map_err(|e| RetokError::analysis(format!("Invalid script pattern: {e}")))?;
        Ok(ScriptTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Create an idle stream; it yields nothing until reset with text.
    pub fn stream(&self) -> ScriptTokenStream {
        ScriptTokenStream {
            pattern: Arc::clone(&self.pattern),
            text: String::new(),
            byte_pos: 0,
            char_pos: 0,
        }
    }
}

impl Tokenizer for ScriptTokenizer {
    fn tokenize(&self, text: &str) -> Result<BoxTokenStream> {
        let mut stream = self.stream();
        stream.reset(text)?;
        Ok(Box::new(stream))
    }

    fn name(&self) -> &'static str {
        "script"
    }
}

/// Pull-based segmentation state over one text.
#[derive(Debug)]
pub struct ScriptTokenStream {
    pattern: Arc<Regex>,
    text: String,
    /// Resume point of the scan, in bytes.
    byte_pos: usize,
    /// Same point, in chars.
    char_pos: usize,
}

fn classify(caps: &Captures<'_>) -> TokenType {
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '-');

    if caps.name("email").is_some() {
        TokenType::Email
    } else if caps.name("acronym").is_some() {
        TokenType::Acronym
    } else if caps.name("apostrophe").is_some() {
        TokenType::Apostrophe
    } else if let Some(m) = caps.name("alnum") {
        if all_digits(m.as_str()) {
            TokenType::Num
        } else {
            TokenType::Alphanum
        }
    } else if let Some(m) = caps.name("fullwidth") {
        if m.as_str().chars().all(|c| ('\u{FF10}'..='\u{FF19}').contains(&c)) {
            TokenType::FullWidthNumber
        } else {
            TokenType::FullWidthString
        }
    } else if caps.name("han").is_some() {
        TokenType::Cjk
    } else if caps.name("hiragana").is_some() {
        TokenType::Hiragana
    } else if caps.name("katakana").is_some() {
        TokenType::Katakana
    } else if caps.name("hangul").is_some() {
        TokenType::Korean
    } else {
        let is_ascii = caps.get(0).is_some_and(|m| m.as_str().is_ascii());
        if is_ascii {
            TokenType::Punctuation
        } else {
            TokenType::Delimiter
        }
    }
}

impl TokenStream for ScriptTokenStream {
    fn next_token(&mut self) -> Result<Option<Token>> {
        if self.byte_pos >= self.text.len() {
            return Ok(None);
        }

        let Some(caps) = self.pattern.captures_at(&self.text, self.byte_pos) else {
            self.byte_pos = self.text.len();
            return Ok(None);
        };
        let Some(m) = caps.get(0) else {
            self.byte_pos = self.text.len();
            return Ok(None);
        };

        self.char_pos += self.text[self.byte_pos..m.start()].chars().count();
        let start = self.char_pos;
        let end = start + m.as_str().chars().count();
        let token = Token::new(m.as_str(), start, end).with_token_type(classify(&caps));

        self.char_pos = end;
        self.byte_pos = m.end();
        Ok(Some(token))
    }

    fn reset(&mut self, text: &str) -> Result<()> {
        self.text.clear();
        self.text.push_str(text);
        self.byte_pos = 0;
        self.char_pos = 0;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "script"
    }
}

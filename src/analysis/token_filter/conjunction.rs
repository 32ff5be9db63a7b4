//! Conjunction run fusion.
//!
//! Chinese technical text writes alternatives as `A和B或` or `和/或`
//! ("and/or"). Segmenters cut these into one-char tokens that only make
//! sense together. This filter collects a run opened by the "and" particle
//! and, when the "or" particle closes it, emits the whole run as a single
//! [`TokenType::Compound`] token. A run that does not close is re-emitted
//! untouched.

use crate::analysis::token::{BoxTokenStream, Token, TokenQueue, TokenStream, TokenType};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default particle opening a run.
pub const DEFAULT_AND_PARTICLE: char = '和';

/// Default particle closing a run.
pub const DEFAULT_OR_PARTICLE: char = '或';

/// Slashes accepted as connectors inside a run.
const SLASHES: [char; 2] = ['/', '／'];

/// A filter fusing `和 … 或` connector runs into one compound token.
///
/// # Examples
///
/// ```
/// use retok::analysis::token::{collect_tokens, IntoTokenStream, Token, TokenType};
/// use retok::analysis::token_filter::Filter;
/// use retok::analysis::token_filter::conjunction::ConjunctionFilter;
///
/// let filter = ConjunctionFilter::new();
/// let input = vec![
///     Token::new("A", 0, 1).with_token_type(TokenType::Alphanum),
///     Token::new("和", 1, 2).with_token_type(TokenType::Cjk),
///     Token::new("B", 2, 3).with_token_type(TokenType::Alphanum),
///     Token::new("或", 3, 4).with_token_type(TokenType::Cjk),
/// ];
/// let mut stream = filter.filter(input.into_token_stream()).unwrap();
/// let tokens = collect_tokens(&mut stream).unwrap();
///
/// assert_eq!(tokens.len(), 1);
/// assert_eq!(tokens[0].text, "A和B或");
/// assert_eq!(tokens[0].token_type, TokenType::Compound);
/// ```
#[derive(Clone, Debug)]
pub struct ConjunctionFilter {
    and_particle: char,
    or_particle: char,
}

impl ConjunctionFilter {
    /// Create a filter for the default particles `和` and `或`.
    pub fn new() -> Self {
        Self::with_particles(DEFAULT_AND_PARTICLE, DEFAULT_OR_PARTICLE)
    }

    /// Create a filter for custom particles.
    pub fn with_particles(and_particle: char, or_particle: char) -> Self {
        ConjunctionFilter {
            and_particle,
            or_particle,
        }
    }
}

impl Default for ConjunctionFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for ConjunctionFilter {
    fn filter(&self, input: BoxTokenStream) -> Result<BoxTokenStream> {
        Ok(Box::new(ConjunctionStream {
            input,
            and_particle: self.and_particle,
            or_particle: self.or_particle,
            queue: TokenQueue::new(),
            run: Vec::new(),
            in_and_or: false,
            after_connector: false,
            held: None,
        }))
    }

    fn name(&self) -> &'static str {
        "conjunction"
    }
}

/// Stream state of [`ConjunctionFilter`].
pub struct ConjunctionStream {
    input: BoxTokenStream,
    and_particle: char,
    or_particle: char,
    /// Tokens ready to be returned.
    queue: TokenQueue,
    /// Tokens of the open run.
    run: Vec<Token>,
    in_and_or: bool,
    /// Whether the last token of the run was a connector.
    after_connector: bool,
    /// Token pulled while looking past a candidate left operand.
    held: Option<Token>,
}

/// Fuse `tokens` into one token spanning all of them.
fn fuse(tokens: Vec<Token>) -> Option<Token> {
    let mut iter = tokens.into_iter();
    let mut fused = iter.next()?;
    let mut count = 1;
    for token in iter {
        fused.text.push_str(&token.text);
        fused.start_offset = fused.start_offset.min(token.start_offset);
        fused.end_offset = fused.end_offset.max(token.end_offset);
        count += 1;
    }
    if count > 1 {
        fused.token_type = TokenType::Compound;
    }
    Some(fused)
}

fn single_char(token: &Token) -> Option<char> {
    let mut chars = token.text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

impl ConjunctionStream {
    fn is_connector(&self, c: char) -> bool {
        c == self.and_particle || c == self.or_particle || SLASHES.contains(&c)
    }

    fn is_operand(&self, token: &Token) -> bool {
        single_char(token).is_some_and(|c| c.is_alphanumeric() && !self.is_connector(c))
    }

    fn open(&mut self, tokens: Vec<Token>) {
        self.run = tokens;
        self.in_and_or = true;
        self.after_connector = true;
    }

    /// Close the run without fusing; its tokens are returned one by one.
    fn abandon(&mut self) {
        self.in_and_or = false;
        self.after_connector = false;
        self.queue.extend(self.run.drain(..));
    }

    fn pull(&mut self) -> Result<Option<Token>> {
        match self.held.take() {
            Some(token) => Ok(Some(token)),
            None => self.input.next_token(),
        }
    }
}

impl TokenStream for ConjunctionStream {
    fn next_token(&mut self) -> Result<Option<Token>> {
        loop {
            if let Some(token) = self.queue.pop() {
                return Ok(Some(token));
            }

            let Some(token) = self.pull()? else {
                if self.in_and_or {
                    self.in_and_or = false;
                    self.after_connector = false;
                    return Ok(fuse(std::mem::take(&mut self.run)));
                }
                return Ok(None);
            };

            if !self.in_and_or {
                if token.is_char(self.and_particle) {
                    self.open(vec![token]);
                    continue;
                }
                if self.is_operand(&token) {
                    match self.input.next_token()? {
                        Some(next) if next.is_char(self.and_particle) => {
                            self.open(vec![token, next]);
                            continue;
                        }
                        next => {
                            self.held = next;
                            return Ok(Some(token));
                        }
                    }
                }
                return Ok(Some(token));
            }

            if token.is_char(self.or_particle) {
                self.run.push(token);
                self.in_and_or = false;
                self.after_connector = false;
                let fused = fuse(std::mem::take(&mut self.run));
                if let Some(t) = &fused {
                    log::trace!("fused conjunction '{}'", t.text);
                }
                return Ok(fused);
            }

            match single_char(&token) {
                Some(c) if self.is_connector(c) => {
                    self.run.push(token);
                    self.after_connector = true;
                }
                _ if self.after_connector && self.is_operand(&token) => {
                    self.run.push(token);
                    self.after_connector = false;
                }
                _ => {
                    self.abandon();
                    self.queue.push(token);
                }
            }
        }
    }

    fn reset(&mut self, text: &str) -> Result<()> {
        self.queue.clear();
        self.run.clear();
        self.in_and_or = false;
        self.after_connector = false;
        self.held = None;
        self.input.reset(text)
    }

    fn name(&self) -> &'static str {
        "conjunction"
    }
}

//! Korean morphological decomposition.
//!
//! Korean words are a stem followed by grammatical suffixes: a particle
//! after a noun (`책` + `은`), or an infix and an ending after a predicate
//! (`가` + `았` + `다`). This filter asks a [`MorphAnalyzer`] for the
//! analyses of each [`TokenType::Korean`] token and, when one reconstructs
//! the word exactly, emits the stem followed by a marked suffix token at
//! the same position:
//!
//! ```text
//! "책은" [0,2)  →  "책" KoreanNoun [0,1) +1
//!                  "−은" Particle  [1,2) +0
//! ```
//!
//! Without an exact decomposition the word is kept as is, unless
//! multi-keyword mode is enabled (`return_single_best = false`). In that
//! mode the word expands into index keywords: the original word, the stems
//! of all analyses, and either compound components or stem bigrams.
//!
//! Latin tokens riding along get light cleanup: possessive `'s` is
//! stripped from apostrophe tokens and dots are removed from acronyms.

use std::sync::Arc;

use ahash::AHashSet;

use crate::analysis::morph::{AnalysisOutput, MorphAnalyzer, PartOfSpeech, SCORE_COMPOUNDS};
use crate::analysis::token::{BoxTokenStream, Token, TokenQueue, TokenStream, TokenType};
use crate::analysis::token_filter::Filter;
use crate::config::KoreanConfig;
use crate::error::{Result, RetokError};
use crate::util::chars::{char_find, char_len};

/// Default prefix of suffix tokens (U+2212 MINUS SIGN).
pub const DEFAULT_SUFFIX_MARKER: char = '\u{2212}';

/// A filter decomposing Korean words into stem and suffix tokens.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use retok::analysis::morph::{AnalysisOutput, StaticMorphAnalyzer, SCORE_CORRECT};
/// use retok::analysis::token::{collect_tokens, IntoTokenStream, Token, TokenType};
/// use retok::analysis::token_filter::Filter;
/// use retok::analysis::token_filter::korean::KoreanDecompositionFilter;
///
/// let analyzer = StaticMorphAnalyzer::new().with_entry(
///     "책은",
///     vec![AnalysisOutput::new("책은", "책", SCORE_CORRECT).with_particle("은")],
/// );
/// let filter = KoreanDecompositionFilter::new(Arc::new(analyzer));
///
/// let input = vec![Token::new("책은", 0, 2).with_token_type(TokenType::Korean)];
/// let mut stream = filter.filter(input.into_token_stream()).unwrap();
/// let tokens = collect_tokens(&mut stream).unwrap();
///
/// assert_eq!(tokens[0].text, "책");
/// assert_eq!(tokens[1].text, "−은");
/// assert_eq!(tokens[1].position_increment, 0);
/// ```
#[derive(Clone)]
pub struct KoreanDecompositionFilter {
    analyzer: Arc<dyn MorphAnalyzer>,
    config: KoreanConfig,
    suffix_marker: char,
}

impl KoreanDecompositionFilter {
    /// Create a filter in single-best mode.
    pub fn new(analyzer: Arc<dyn MorphAnalyzer>) -> Self {
        KoreanDecompositionFilter {
            analyzer,
            config: KoreanConfig::default(),
            suffix_marker: DEFAULT_SUFFIX_MARKER,
        }
    }

    /// Use the given decomposition settings.
    pub fn with_config(mut self, config: KoreanConfig) -> Self {
        self.config = config;
        self
    }

    /// Prefix suffix tokens with `marker` instead of `−`.
    pub fn with_suffix_marker(mut self, marker: char) -> Self {
        self.suffix_marker = marker;
        self
    }

    /// Get the decomposition settings.
    pub fn config(&self) -> &KoreanConfig {
        &self.config
    }
}

impl std::fmt::Debug for KoreanDecompositionFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KoreanDecompositionFilter")
            .field("analyzer", &self.analyzer.name())
            .field("config", &self.config)
            .field("suffix_marker", &self.suffix_marker)
            .finish()
    }
}

impl Filter for KoreanDecompositionFilter {
    fn filter(&self, input: BoxTokenStream) -> Result<BoxTokenStream> {
        Ok(Box::new(KoreanDecompositionStream {
            input,
            analyzer: Arc::clone(&self.analyzer),
            config: self.config.clone(),
            suffix_marker: self.suffix_marker,
            queue: TokenQueue::new(),
        }))
    }

    fn name(&self) -> &'static str {
        "korean_decomposition"
    }
}

/// Insertion-ordered keyword set.
#[derive(Default)]
struct Keywords {
    order: Vec<String>,
    seen: AHashSet<String>,
}

impl Keywords {
    fn insert(&mut self, word: &str) {
        if !word.is_empty() && self.seen.insert(word.to_string()) {
            self.order.push(word.to_string());
        }
    }
}

/// Stream state of [`KoreanDecompositionFilter`].
pub struct KoreanDecompositionStream {
    input: BoxTokenStream,
    analyzer: Arc<dyn MorphAnalyzer>,
    config: KoreanConfig,
    suffix_marker: char,
    queue: TokenQueue,
}

impl KoreanDecompositionStream {
    fn analyze(&self, word: &str) -> Result<Vec<AnalysisOutput>> {
        self.analyzer.analyze(word).map_err(|e| {
            if e.is_analysis() {
                e
            } else {
                RetokError::analysis(format!("analysis of '{word}' failed: {e}"))
            }
        })
    }

    /// Tokens replacing a Korean word; empty when the word is dropped.
    fn decompose(&self, token: Token) -> Result<Vec<Token>> {
        let outputs = self.analyze(&token.text)?;
        if outputs.is_empty() {
            return Ok(vec![token]);
        }

        if let Some(pair) = self.exact_split(&token, &outputs) {
            return Ok(pair);
        }

        if self.config.return_single_best {
            return Ok(vec![token]);
        }

        let keywords = self.keywords(&token.text, outputs);
        Ok(self.keyword_tokens(&token, keywords))
    }

    /// Stem and suffix tokens from the first analysis reconstructing the word.
    fn exact_split(&self, token: &Token, outputs: &[AnalysisOutput]) -> Option<Vec<Token>> {
        let word = token.text.as_str();
        for output in outputs {
            if output.stem.is_empty() || output.stem == word {
                continue;
            }
            let Some(rest) = word.strip_prefix(output.stem.as_str()) else {
                continue;
            };

            let suffix = if rest == output.particle {
                Some((output.particle.clone(), TokenType::Particle))
            } else if rest.len() == output.infix.len() + output.ending.len()
                && rest.starts_with(output.infix.as_str())
                && rest.ends_with(output.ending.as_str())
            {
                Some((format!("{}{}", output.infix, output.ending), TokenType::Ending))
            } else {
                None
            };

            if let Some((suffix, suffix_type)) = suffix {
                let split = token.start_offset + char_len(&output.stem);
                let stem = Token::new(output.stem.as_str(), token.start_offset, split)
                    .with_token_type(TokenType::KoreanNoun)
                    .with_position_increment(token.position_increment);
                let suffix = Token::new(
                    format!("{}{}", self.suffix_marker, suffix),
                    split,
                    token.end_offset,
                )
                .with_token_type(suffix_type)
                .with_position_increment(0);
                return Some(vec![stem, suffix]);
            }
        }
        None
    }

    fn keywords(&self, word: &str, outputs: Vec<AnalysisOutput>) -> Keywords {
        let mut keywords = Keywords::default();
        if self.config.keep_original {
            keywords.insert(word);
        }

        let exact = outputs.first().is_some_and(AnalysisOutput::is_exact);
        if exact {
            self.extract(&outputs, &mut keywords);
            return keywords;
        }

        match self.word_space_outputs(word, &mut keywords) {
            Ok(Some(results)) => self.extract(&results, &mut keywords),
            Ok(None) => self.extract(&outputs, &mut keywords),
            Err(e) => {
                log::warn!("word space analysis of '{word}' failed, using plain analyses: {e}");
                self.extract(&outputs, &mut keywords);
            }
        }
        keywords
    }

    /// Analyses of the word-space segments of `word`, `None` without segmentation.
    fn word_space_outputs(
        &self,
        word: &str,
        keywords: &mut Keywords,
    ) -> Result<Option<Vec<AnalysisOutput>>> {
        let segments = self.analyzer.analyze_word_space(word)?;
        match segments.len() {
            0 => Ok(None),
            1 => Ok(Some(segments)),
            _ => {
                let mut results = Vec::new();
                for segment in &segments {
                    if self.config.keep_original {
                        keywords.insert(&segment.source);
                    }
                    results.extend(self.analyzer.analyze(&segment.source)?);
                }
                Ok(Some(results))
            }
        }
    }

    fn extract(&self, outputs: &[AnalysisOutput], keywords: &mut Keywords) {
        for output in outputs {
            if output.pos != PartOfSpeech::Verb {
                keywords.insert(&output.stem);
            }

            if self.config.decompound && output.score >= SCORE_COMPOUNDS {
                let entries = &output.compound_entries;
                for (i, entry) in entries.iter().enumerate() {
                    let single = char_len(&entry.word) == 1;
                    if !single {
                        keywords.insert(&entry.word);
                    } else if i == 0 {
                        if let Some(next) = entries.get(1) {
                            keywords.insert(&format!("{}{}", entry.word, next.word));
                        }
                    } else {
                        let previous = &entries[i - 1];
                        keywords.insert(&format!("{}{}", previous.word, entry.word));
                    }
                }
            } else if self.config.bigram {
                add_bigrams(&output.stem, keywords);
            }
        }
    }

    fn keyword_tokens(&self, token: &Token, keywords: Keywords) -> Vec<Token> {
        keywords
            .order
            .into_iter()
            .enumerate()
            .map(|(i, keyword)| {
                let (start, end) = match char_find(&token.text, &keyword) {
                    Some(idx) => {
                        let start = token.start_offset + idx;
                        (start, start + char_len(&keyword))
                    }
                    None => (token.start_offset, token.end_offset),
                };
                let increment = if i == 0 { token.position_increment } else { 0 };
                Token::new(keyword, start, end)
                    .with_token_type(TokenType::KoreanKeyword)
                    .with_position_increment(increment)
            })
            .collect()
    }
}

/// Add overlapping bigrams of `stem`, keeping ASCII alphanumeric runs whole.
fn add_bigrams(stem: &str, keywords: &mut Keywords) {
    let chars: Vec<char> = stem.chars().collect();
    let len = chars.len();
    let mut offset = 0;
    while offset + 1 < len {
        if chars[offset].is_ascii_alphanumeric() {
            let run = chars[offset..]
                .iter()
                .take_while(|c| c.is_ascii_alphanumeric())
                .count();
            let text: String = chars[offset..offset + run].iter().collect();
            keywords.insert(&text);
            offset += run;
        } else {
            let text: String = chars[offset..(offset + 2).min(len)].iter().collect();
            keywords.insert(&text);
            offset += 1;
        }
    }
}

/// Strip a possessive `'s` or the dots of an acronym; offsets are unchanged.
fn clean_latin(token: Token) -> Token {
    match token.token_type {
        TokenType::Apostrophe => {
            let stripped = token
                .text
                .strip_suffix("'s")
                .or_else(|| token.text.strip_suffix("'S"));
            match stripped {
                Some(rest) if !rest.is_empty() => {
                    let rest = rest.to_string();
                    token.with_text(rest)
                }
                _ => token,
            }
        }
        TokenType::Acronym => {
            let text: String = token.text.chars().filter(|&c| c != '.').collect();
            if text.is_empty() || text == token.text {
                token
            } else {
                token.with_text(text)
            }
        }
        _ => token,
    }
}

impl TokenStream for KoreanDecompositionStream {
    fn next_token(&mut self) -> Result<Option<Token>> {
        if let Some(token) = self.queue.pop() {
            return Ok(Some(token));
        }

        let mut skipped = 0;
        while let Some(token) = self.input.next_token()? {
            let mut produced = if token.token_type == TokenType::Korean {
                self.decompose(token)?
            } else {
                vec![clean_latin(token)]
            };

            if produced.is_empty() {
                skipped += 1;
                continue;
            }

            let mut first = produced.remove(0);
            first.position_increment += skipped;
            self.queue.extend(produced);
            return Ok(Some(first));
        }

        Ok(None)
    }

    fn reset(&mut self, text: &str) -> Result<()> {
        self.queue.clear();
        self.input.reset(text)
    }

    fn name(&self) -> &'static str {
        "korean_decomposition"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::morph::{SCORE_CORRECT, StaticMorphAnalyzer};
    use crate::analysis::token::{IntoTokenStream, collect_tokens};

    fn korean(text: &str, start: usize) -> Token {
        let end = start + text.chars().count();
        Token::new(text, start, end).with_token_type(TokenType::Korean)
    }

    fn run(filter: &KoreanDecompositionFilter, tokens: Vec<Token>) -> Vec<Token> {
        let mut stream = filter.filter(tokens.into_token_stream()).unwrap();
        collect_tokens(&mut stream).unwrap()
    }

    fn multi_keyword() -> KoreanConfig {
        KoreanConfig {
            return_single_best: false,
            ..KoreanConfig::default()
        }
    }

    struct FailingAnalyzer;

    impl MorphAnalyzer for FailingAnalyzer {
        fn analyze(&self, _word: &str) -> Result<Vec<AnalysisOutput>> {
            Err(RetokError::other("dictionary unavailable"))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[test]
    fn test_particle_split() {
        let analyzer = StaticMorphAnalyzer::new().with_entry(
            "한국어는",
            vec![AnalysisOutput::new("한국어는", "한국어", SCORE_CORRECT).with_particle("는")],
        );
        let filter = KoreanDecompositionFilter::new(Arc::new(analyzer));
        let tokens = run(&filter, vec![korean("한국어는", 5).with_position_increment(2)]);

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "한국어");
        assert_eq!(tokens[0].token_type, TokenType::KoreanNoun);
        assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (5, 8));
        assert_eq!(tokens[0].position_increment, 2);

        assert_eq!(tokens[1].text, "−는");
        assert_eq!(tokens[1].token_type, TokenType::Particle);
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (8, 9));
        assert_eq!(tokens[1].position_increment, 0);
    }

    #[test]
    fn test_ending_split() {
        let analyzer = StaticMorphAnalyzer::new().with_entry(
            "연구했다",
            vec![
                AnalysisOutput::new("연구했다", "연구", SCORE_CORRECT)
                    .with_ending("했", "다")
                    .with_pos(PartOfSpeech::Verb),
            ],
        );
        let filter = KoreanDecompositionFilter::new(Arc::new(analyzer)).with_suffix_marker('~');
        let tokens = run(&filter, vec![korean("연구했다", 0)]);

        assert_eq!(tokens[0].text, "연구");
        assert_eq!(tokens[1].text, "~했다");
        assert_eq!(tokens[1].token_type, TokenType::Ending);
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (2, 4));
    }

    #[test]
    fn test_unknown_word_unchanged() {
        let filter = KoreanDecompositionFilter::new(Arc::new(StaticMorphAnalyzer::new()));
        let original = korean("모르는말", 0);
        let tokens = run(&filter, vec![original.clone()]);
        assert_eq!(tokens, vec![original]);
    }

    #[test]
    fn test_single_best_keeps_inexact_word() {
        let analyzer = StaticMorphAnalyzer::new().with_entry(
            "정보검색",
            vec![AnalysisOutput::new("정보검색", "정보검색", SCORE_CORRECT)],
        );
        let filter = KoreanDecompositionFilter::new(Arc::new(analyzer));
        let tokens = run(&filter, vec![korean("정보검색", 0)]);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].token_type, TokenType::Korean);
    }

    #[test]
    fn test_multi_keyword_bigrams() {
        let analyzer = StaticMorphAnalyzer::new().with_entry(
            "정보검색",
            vec![AnalysisOutput::new("정보검색", "정보검색", SCORE_CORRECT)],
        );
        let filter =
            KoreanDecompositionFilter::new(Arc::new(analyzer)).with_config(multi_keyword());
        let tokens = run(&filter, vec![korean("정보검색", 10)]);

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["정보검색", "정보", "보검", "검색"]);
        assert!(tokens.iter().all(|t| t.token_type == TokenType::KoreanKeyword));
        assert_eq!(tokens[0].position_increment, 1);
        assert!(tokens[1..].iter().all(|t| t.position_increment == 0));
        assert_eq!((tokens[2].start_offset, tokens[2].end_offset), (11, 13));
    }

    #[test]
    fn test_multi_keyword_decompound() {
        let analyzer = StaticMorphAnalyzer::new().with_entry(
            "정보검색",
            vec![
                AnalysisOutput::new("정보검색", "정보검색", SCORE_CORRECT)
                    .with_compounds(["정보", "검", "색"]),
            ],
        );
        let config = KoreanConfig {
            decompound: true,
            keep_original: false,
            ..multi_keyword()
        };
        let filter = KoreanDecompositionFilter::new(Arc::new(analyzer)).with_config(config);
        let tokens = run(&filter, vec![korean("정보검색", 0)]);

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["정보검색", "정보", "정보검", "검색"]);
    }

    #[test]
    fn test_word_space_segments() {
        let analyzer = StaticMorphAnalyzer::new()
            .with_entry("자연언어", vec![AnalysisOutput::new("자연언어", "자연언어", 30)])
            .with_entry("자연", vec![AnalysisOutput::new("자연", "자연", SCORE_CORRECT)])
            .with_entry("언어", vec![AnalysisOutput::new("언어", "언어", SCORE_CORRECT)])
            .with_word_space(
                "자연언어",
                vec![
                    AnalysisOutput::new("자연", "자연", 30),
                    AnalysisOutput::new("언어", "언어", 30),
                ],
            );
        let config = KoreanConfig {
            bigram: false,
            ..multi_keyword()
        };
        let filter = KoreanDecompositionFilter::new(Arc::new(analyzer)).with_config(config);
        let tokens = run(&filter, vec![korean("자연언어", 0)]);

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["자연언어", "자연", "언어"]);
        assert_eq!((tokens[2].start_offset, tokens[2].end_offset), (2, 4));
    }

    #[test]
    fn test_empty_keywords_skip_position() {
        let analyzer = StaticMorphAnalyzer::new().with_entry(
            "하다",
            vec![AnalysisOutput::new("하다", "하", SCORE_CORRECT).with_pos(PartOfSpeech::Verb)],
        );
        let config = KoreanConfig {
            keep_original: false,
            bigram: false,
            ..multi_keyword()
        };
        let filter = KoreanDecompositionFilter::new(Arc::new(analyzer)).with_config(config);
        let tokens = run(
            &filter,
            vec![
                korean("하다", 0),
                Token::new("OK", 3, 5).with_token_type(TokenType::Alphanum),
            ],
        );

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "OK");
        assert_eq!(tokens[0].position_increment, 2);
    }

    #[test]
    fn test_latin_cleanup() {
        let filter = KoreanDecompositionFilter::new(Arc::new(StaticMorphAnalyzer::new()));
        let tokens = run(
            &filter,
            vec![
                Token::new("John's", 0, 6).with_token_type(TokenType::Apostrophe),
                Token::new("U.S.A.", 7, 13).with_token_type(TokenType::Acronym),
                Token::new("it's", 14, 18).with_token_type(TokenType::Alphanum),
            ],
        );

        assert_eq!(tokens[0].text, "John");
        assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (0, 6));
        assert_eq!(tokens[1].text, "USA");
        assert_eq!(tokens[2].text, "it's");
    }

    #[test]
    fn test_analyzer_error_surfaces() {
        let filter = KoreanDecompositionFilter::new(Arc::new(FailingAnalyzer));
        let mut stream = filter
            .filter(vec![korean("한국", 0)].into_token_stream())
            .unwrap();

        let err = stream.next_token().unwrap_err();
        assert!(err.is_analysis());
    }

    #[test]
    fn test_add_bigrams_mixed() {
        let mut keywords = Keywords::default();
        add_bigrams("DNA분석법", &mut keywords);
        assert_eq!(keywords.order, vec!["DNA", "분석", "석법"]);
    }
}

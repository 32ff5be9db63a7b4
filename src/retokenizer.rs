//! Sentence-level retokenization.
//!
//! A [`Retokenizer`] wraps the pipeline of one language and turns short
//! texts into lists of terms, start offsets, or a single space-joined line
//! suitable for downstream tools that split on spaces.
//!
//! # Examples
//!
//! ```
//! use retok::config::RetokConfig;
//! use retok::retokenizer::Retokenizer;
//!
//! let mut retokenizer = Retokenizer::new("ja", RetokConfig::default(), None).unwrap();
//!
//! assert_eq!(retokenizer.tokenize_with_spaces("第3章", false).unwrap(), "第3 章");
//! assert_eq!(
//!     retokenizer.tokens_as_strings("第3章", true).unwrap(),
//!     vec!["第3|<NUM>", "章|<CJ>"]
//! );
//! ```

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use regex::Regex;

use crate::analysis::analyzer::language::Language;
use crate::analysis::analyzer::pipeline::{PipelineAnalyzer, TokenPipeline};
use crate::analysis::morph::MorphAnalyzer;
use crate::analysis::token::Token;
use crate::config::{RetokConfig, SuffixDisplay};
use crate::error::{Result, RetokError};

const SOFT_HYPHEN: char = '\u{00AD}';

/// Replacement for NUL, which breaks C consumers of the output.
const NUL_REPLACEMENT: char = '#';

/// A period closing the line, followed by the separator of an emptied term.
const TRAILING_PERIOD: &str = r"[ ]*\.[ ]$";

const SPACE_RUNS: &str = r"[ ][ ]+";

/// Line-level rewrites applied after the terms are joined.
#[derive(Clone, Debug)]
struct LineRules {
    trailing_period: Regex,
    space_runs: Regex,
}

impl LineRules {
    fn new() -> Result<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern)
                .map_err(|e| RetokError::other(format!("Invalid line pattern '{pattern}': {e}")))
        };
        Ok(LineRules {
            trailing_period: compile(TRAILING_PERIOD)?,
            space_runs: compile(SPACE_RUNS)?,
        })
    }
}

/// Tokenizes short texts with the pipeline of one language.
pub struct Retokenizer {
    language: Language,
    analyzer: PipelineAnalyzer,
    pipeline: TokenPipeline,
    config: RetokConfig,
    rules: LineRules,
}

impl Retokenizer {
    /// Create a retokenizer for a language identifier such as `zh`, `ja` or `ko_g`.
    ///
    /// `morph` is used by the Korean pipeline only.
    pub fn new(
        language_id: &str,
        config: RetokConfig,
        morph: Option<Arc<dyn MorphAnalyzer>>,
    ) -> Result<Self> {
        let language = Language::parse(language_id)?;
        let analyzer = language.analyzer(&config, morph)?;
        Self::from_analyzer(language, analyzer, config)
    }

    /// Create a retokenizer over a custom pipeline.
    pub fn from_analyzer(
        language: Language,
        analyzer: PipelineAnalyzer,
        config: RetokConfig,
    ) -> Result<Self> {
        config.validate()?;
        let pipeline = analyzer.build()?;
        log::debug!(
            "retokenizer for '{language}' uses pipeline '{}'",
            analyzer.pipeline_name()
        );
        Ok(Retokenizer {
            language,
            analyzer,
            pipeline,
            config,
            rules: LineRules::new()?,
        })
    }

    /// The language this retokenizer was created for.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Get the configuration.
    pub fn config(&self) -> &RetokConfig {
        &self.config
    }

    /// All tokens of `text`, in stream order.
    pub fn tokens(&mut self, text: &str) -> Result<Vec<Token>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }
        self.pipeline.tokenize(text)
    }

    /// Terms of `text`; with `with_type` each entry is `term|<LABEL>`.
    pub fn tokens_as_strings(&mut self, text: &str, with_type: bool) -> Result<Vec<String>> {
        Ok(self
            .tokens(text)?
            .iter()
            .map(|t| format_term(t, with_type))
            .collect())
    }

    /// Terms of `text` with their span and type: `term(start-end=len)|<LABEL>`.
    pub fn tokens_as_debug_strings(&mut self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .tokens(text)?
            .iter()
            .map(|t| {
                format!(
                    "{}({}-{}={})|{}",
                    t.text,
                    t.start_offset,
                    t.end_offset,
                    t.char_len(),
                    t.token_type.label()
                )
            })
            .collect())
    }

    /// Start offsets of the tokens of `text`, one per start position.
    pub fn tokens_as_offsets(&mut self, text: &str) -> Result<Vec<usize>> {
        Ok(distinct_starts(&self.tokens(text)?))
    }

    /// `text` with its tokens joined by single spaces.
    pub fn tokenize_with_spaces(&mut self, text: &str, with_type: bool) -> Result<String> {
        let terms = self.tokens_as_strings(text, with_type)?;
        Ok(join_terms(&terms, &self.config, &self.rules))
    }

    /// Space-join many texts in parallel; results keep the order of `texts`.
    pub fn tokenize_batch<S>(&self, texts: &[S], with_type: bool) -> Result<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        let batches = self.analyzer.tokenize_batch(texts)?;
        Ok(batches
            .iter()
            .map(|tokens| {
                let terms: Vec<String> =
                    tokens.iter().map(|t| format_term(t, with_type)).collect();
                join_terms(&terms, &self.config, &self.rules)
            })
            .collect())
    }
}

impl std::fmt::Debug for Retokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Retokenizer")
            .field("language", &self.language)
            .field("analyzer", &self.analyzer)
            .field("config", &self.config)
            .finish()
    }
}

fn format_term(token: &Token, with_type: bool) -> String {
    if with_type {
        format!("{}|{}", token.text, token.token_type.label())
    } else {
        token.text.clone()
    }
}

/// Start offsets in stream order; a token starting before the current
/// position is ignored and one starting at it replaces the previous one.
fn distinct_starts(tokens: &[Token]) -> Vec<usize> {
    let mut starts: Vec<usize> = Vec::new();
    for token in tokens {
        match starts.last() {
            Some(&last) if token.start_offset <= last => {}
            _ => starts.push(token.start_offset),
        }
    }
    starts
}

/// Rewrite one term for space-joined output; may leave it empty.
fn clean_term(term: &str, space_marker: char) -> String {
    let len = term.chars().count();
    let bracketed = term.ends_with(')') || term.starts_with('<');
    let mut out = String::with_capacity(term.len());
    let mut written = 0;
    let mut has_space = false;

    for c in term.chars() {
        match c {
            SOFT_HYPHEN => continue,
            '\0' => out.push(NUL_REPLACEMENT),
            ' ' => {
                if written == 0 {
                    continue;
                }
                out.push(space_marker);
                has_space = true;
            }
            ';' if bracketed && written > 0 && written + 1 < len => out.push(','),
            other => out.push(other),
        }
        written += 1;
    }

    if has_space {
        let spaced_slash = format!("{space_marker}/{space_marker}");
        out = out.replace(&spaced_slash, "/");
    }
    out
}

/// Join terms with single spaces and apply the suffix display of `config`.
///
/// Emptied terms keep their separator, so a period followed by a single
/// emptied term at the end is removed. Any other final period stays.
fn join_terms(terms: &[String], config: &RetokConfig, rules: &LineRules) -> String {
    let cleaned: Vec<String> = terms
        .iter()
        .map(|t| clean_term(t, config.space_marker))
        .collect();
    let line = cleaned.join(" ");

    let line = rules.trailing_period.replace(&line, "");
    let collapsed = rules.space_runs.replace_all(&line, " ").into_owned();

    let marked = format!(" {}", config.suffix_marker);
    match config.suffix_display {
        SuffixDisplay::Keep => collapsed,
        SuffixDisplay::Join => collapsed.replace(&marked, &config.suffix_marker.to_string()),
        SuffixDisplay::Hide => collapsed.replace(&marked, " "),
    }
}

/// One [`Retokenizer`] per language identifier, created on first use.
///
/// # Examples
///
/// ```
/// use retok::config::RetokConfig;
/// use retok::retokenizer::RetokenizerPool;
///
/// let mut pool = RetokenizerPool::new(RetokConfig::default());
/// let line = pool.get_or_create("zh").unwrap().tokenize_with_spaces("A和B或", false).unwrap();
/// assert_eq!(line, "A和B或");
/// assert_eq!(pool.len(), 1);
/// ```
pub struct RetokenizerPool {
    config: RetokConfig,
    morph: Option<Arc<dyn MorphAnalyzer>>,
    retokenizers: HashMap<String, Retokenizer>,
}

impl RetokenizerPool {
    /// Create an empty pool sharing `config` between its retokenizers.
    pub fn new(config: RetokConfig) -> Self {
        RetokenizerPool {
            config,
            morph: None,
            retokenizers: HashMap::new(),
        }
    }

    /// Use `morph` for Korean retokenizers created from now on.
    pub fn with_morph_analyzer(mut self, morph: Arc<dyn MorphAnalyzer>) -> Self {
        self.morph = Some(morph);
        self
    }

    /// The retokenizer for `language_id`, created if missing.
    pub fn get_or_create(&mut self, language_id: &str) -> Result<&mut Retokenizer> {
        match self.retokenizers.entry(language_id.trim().to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let retokenizer =
                    Retokenizer::new(entry.key(), self.config.clone(), self.morph.clone())?;
                log::info!("created retokenizer for '{}'", entry.key());
                Ok(entry.insert(retokenizer))
            }
        }
    }

    /// Number of retokenizers created so far.
    pub fn len(&self) -> usize {
        self.retokenizers.len()
    }

    /// Check if no retokenizer has been created yet.
    pub fn is_empty(&self) -> bool {
        self.retokenizers.is_empty()
    }

    /// Get the configuration shared by new retokenizers.
    pub fn config(&self) -> &RetokConfig {
        &self.config
    }
}

impl std::fmt::Debug for RetokenizerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut languages: Vec<&String> = self.retokenizers.keys().collect();
        languages.sort();
        f.debug_struct("RetokenizerPool")
            .field("languages", &languages)
            .field("morph", &self.morph.as_ref().map(|m| m.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::morph::{AnalysisOutput, SCORE_CORRECT, StaticMorphAnalyzer};

    fn strings(terms: &[&str]) -> Vec<String> {
        terms.iter().map(|t| t.to_string()).collect()
    }

    fn korean_morph() -> Arc<dyn MorphAnalyzer> {
        Arc::new(StaticMorphAnalyzer::new().with_entry(
            "책은",
            vec![AnalysisOutput::new("책은", "책", SCORE_CORRECT).with_particle("은")],
        ))
    }

    #[test]
    fn test_tokenize_with_spaces() {
        let mut retokenizer = Retokenizer::new("ja", RetokConfig::default(), None).unwrap();
        assert_eq!(
            retokenizer.tokenize_with_spaces("第3章です。", false).unwrap(),
            "第3 章 で す ."
        );
        assert_eq!(
            retokenizer.tokenize_with_spaces("第3章", true).unwrap(),
            "第3|<NUM> 章|<CJ>"
        );
    }

    #[test]
    fn test_empty_input() {
        let mut retokenizer = Retokenizer::new("zh", RetokConfig::default(), None).unwrap();
        assert!(retokenizer.tokens("").unwrap().is_empty());
        assert!(retokenizer.tokens_as_strings("", true).unwrap().is_empty());
        assert!(retokenizer.tokens_as_offsets("").unwrap().is_empty());
        assert_eq!(retokenizer.tokenize_with_spaces("", false).unwrap(), "");
    }

    #[test]
    fn test_debug_strings() {
        let mut retokenizer = Retokenizer::new("ja", RetokConfig::default(), None).unwrap();
        assert_eq!(
            retokenizer.tokens_as_debug_strings("第3章").unwrap(),
            vec!["第3(0-2=2)|<NUM>", "章(2-3=1)|<CJ>"]
        );
    }

    #[test]
    fn test_tokens_as_offsets() {
        let mut retokenizer = Retokenizer::new("en", RetokConfig::default(), None).unwrap();
        assert_eq!(retokenizer.tokens_as_offsets("80hz test").unwrap(), vec![0, 2, 5]);
    }

    #[test]
    fn test_distinct_starts() {
        let tokens = vec![
            Token::new("연구", 0, 2),
            Token::new("연구자", 0, 3),
            Token::new("구자", 1, 3),
            Token::new("x", 0, 1),
            Token::new("는", 3, 4),
        ];
        assert_eq!(distinct_starts(&tokens), vec![0, 1, 3]);
    }

    #[test]
    fn test_clean_term() {
        let marker = '\u{2017}';
        assert_eq!(clean_term("a b", marker), "a‗b");
        assert_eq!(clean_term(" a", marker), "a");
        assert_eq!(clean_term("x;y)", marker), "x,y)");
        assert_eq!(clean_term("<p;q>", marker), "<p,q>");
        assert_eq!(clean_term(";x)", marker), ";x)");
        assert_eq!(clean_term("a;b", marker), "a;b");
        assert_eq!(clean_term("and / or", marker), "and/or");
        assert_eq!(clean_term("\u{AD}soft", marker), "soft");
        assert_eq!(clean_term("nul\0", marker), "nul#");
        assert_eq!(clean_term(" ", marker), "");
    }

    #[test]
    fn test_join_terms() {
        let config = RetokConfig::default();
        let rules = LineRules::new().unwrap();
        let join = |terms: &[&str]| join_terms(&strings(terms), &config, &rules);

        assert_eq!(join(&["a", " ", "b"]), "a b");
        assert_eq!(join(&["a.", "b"]), "a. b");
        assert_eq!(join(&["a", "\u{AD}", "", "b"]), "a b");
    }

    #[test]
    fn test_final_period_kept() {
        let config = RetokConfig::default();
        let rules = LineRules::new().unwrap();
        assert_eq!(join_terms(&strings(&["end", "."]), &config, &rules), "end .");
        assert_eq!(join_terms(&strings(&["end", ".", " "]), &config, &rules), "end");

        let mut retokenizer = Retokenizer::new("en", RetokConfig::default(), None).unwrap();
        assert_eq!(
            retokenizer.tokenize_with_spaces("It runs at 80hz .", false).unwrap(),
            "It runs at 80 hz ."
        );
    }

    #[test]
    fn test_suffix_display() {
        let terms = strings(&["책", "−은", "좋다"]);
        let rules = LineRules::new().unwrap();
        let mut config = RetokConfig::default();
        assert_eq!(join_terms(&terms, &config, &rules), "책 −은 좋다");

        config.suffix_display = SuffixDisplay::Join;
        assert_eq!(join_terms(&terms, &config, &rules), "책−은 좋다");

        config.suffix_display = SuffixDisplay::Hide;
        assert_eq!(join_terms(&terms, &config, &rules), "책 은 좋다");
    }

    #[test]
    fn test_korean_retokenizer() {
        let config = RetokConfig {
            suffix_display: SuffixDisplay::Join,
            ..RetokConfig::default()
        };
        let mut retokenizer = Retokenizer::new("ko_g", config, Some(korean_morph())).unwrap();
        assert_eq!(retokenizer.language(), Language::Korean);
        assert_eq!(retokenizer.tokenize_with_spaces("책은 좋다", false).unwrap(), "책−은 좋다");
        assert_eq!(retokenizer.tokens_as_offsets("책은 좋다").unwrap(), vec![0, 1, 3]);
    }

    #[test]
    fn test_korean_multi_keyword() {
        let morph: Arc<dyn MorphAnalyzer> = Arc::new(StaticMorphAnalyzer::new().with_entry(
            "정보검색",
            vec![AnalysisOutput::new("정보검색", "정보검색", SCORE_CORRECT)],
        ));
        let mut config = RetokConfig::default();
        config.korean.return_single_best = false;
        let mut retokenizer = Retokenizer::new("ko", config, Some(morph)).unwrap();

        assert_eq!(
            retokenizer.tokens_as_strings("정보검색", false).unwrap(),
            vec!["정보검색", "정보", "보검", "검색"]
        );
        assert_eq!(
            retokenizer.tokenize_with_spaces("정보검색 책", false).unwrap(),
            "정보검색 정보 보검 검색 책"
        );
    }

    #[test]
    fn test_tokenize_batch() {
        let retokenizer = Retokenizer::new("ja", RetokConfig::default(), None).unwrap();
        let lines = retokenizer
            .tokenize_batch(&["第3章", "", "80hz"], false)
            .unwrap();
        assert_eq!(lines, vec!["第3 章", "", "80 hz"]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = RetokConfig {
            and_particle: '或',
            ..RetokConfig::default()
        };
        assert!(Retokenizer::new("zh", config, None).is_err());
    }

    #[test]
    fn test_pool() {
        let mut pool = RetokenizerPool::new(RetokConfig::default()).with_morph_analyzer(korean_morph());
        assert!(pool.is_empty());

        let line = pool
            .get_or_create("ja")
            .unwrap()
            .tokenize_with_spaces("第3章", false)
            .unwrap();
        assert_eq!(line, "第3 章");
        pool.get_or_create("ja").unwrap();
        assert_eq!(pool.len(), 1);

        let korean = pool.get_or_create("ko").unwrap();
        assert_eq!(korean.tokenize_with_spaces("책은", false).unwrap(), "책 −은");
        assert_eq!(pool.len(), 2);

        assert!(pool.get_or_create("").is_err());
        assert_eq!(pool.len(), 2);
    }
}

//! Morphological analyzer interface.
//!
//! Korean decomposition is delegated to an external analyzer engine that
//! plugs in through [`MorphAnalyzer`]. The engine is shared read-only by
//! every pipeline, so it is passed around as `Arc<dyn MorphAnalyzer>`.
//!
//! [`StaticMorphAnalyzer`] answers from a precomputed lookup table and is
//! meant for callers that already hold analyses, and for tests.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Score of an analysis that matches a dictionary entry exactly.
pub const SCORE_CORRECT: u32 = 100;

/// Minimum score of an analysis whose compound entries may be indexed.
pub const SCORE_COMPOUNDS: u32 = 70;

/// Coarse part of speech of an analysis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    #[default]
    Noun,
    Verb,
    Adverb,
    Determiner,
    Other,
}

/// One component of a compound noun.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundEntry {
    pub word: String,
}

impl CompoundEntry {
    /// Create a compound component.
    pub fn new<S: Into<String>>(word: S) -> Self {
        CompoundEntry { word: word.into() }
    }
}

/// One candidate decomposition of a word.
///
/// For a noun, `stem + particle` reconstructs the word; for a predicate,
/// `stem + infix + ending` does. Unused parts are empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOutput {
    /// The analyzed surface form.
    pub source: String,
    pub stem: String,
    /// Particle (josa) following a noun stem.
    #[serde(default)]
    pub particle: String,
    /// Verbal infix between a predicate stem and its ending.
    #[serde(default)]
    pub infix: String,
    /// Ending (eomi) of a predicate.
    #[serde(default)]
    pub ending: String,
    pub score: u32,
    #[serde(default)]
    pub pos: PartOfSpeech,
    #[serde(default)]
    pub compound_entries: Vec<CompoundEntry>,
}

impl AnalysisOutput {
    /// Create an analysis of `source` with the given stem and score.
    pub fn new<S: Into<String>, T: Into<String>>(source: S, stem: T, score: u32) -> Self {
        AnalysisOutput {
            source: source.into(),
            stem: stem.into(),
            score,
            ..Default::default()
        }
    }

    /// Set the particle following the stem.
    pub fn with_particle<S: Into<String>>(mut self, particle: S) -> Self {
        self.particle = particle.into();
        self
    }

    /// Set the infix and ending following a predicate stem.
    pub fn with_ending<S: Into<String>, T: Into<String>>(mut self, infix: S, ending: T) -> Self {
        self.infix = infix.into();
        self.ending = ending.into();
        self
    }

    /// Set the part of speech.
    pub fn with_pos(mut self, pos: PartOfSpeech) -> Self {
        self.pos = pos;
        self
    }

    /// Set the compound components, in word order.
    pub fn with_compounds<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.compound_entries = words.into_iter().map(CompoundEntry::new).collect();
        self
    }

    /// Whether the analysis matched the dictionary exactly.
    pub fn is_exact(&self) -> bool {
        self.score >= SCORE_CORRECT
    }
}

/// A morphological analyzer engine.
///
/// Implementations must be safe to share across threads; pipelines only
/// call them through `&self`.
pub trait MorphAnalyzer: Send + Sync {
    /// All candidate analyses of `word`, best first. An empty vector means
    /// the word is unknown.
    fn analyze(&self, word: &str) -> Result<Vec<AnalysisOutput>>;

    /// Segment a word that lacks spacing into sub-words.
    ///
    /// Each output's `source` is one segment. The default performs no
    /// segmentation.
    fn analyze_word_space(&self, _word: &str) -> Result<Vec<AnalysisOutput>> {
        Ok(Vec::new())
    }

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// An analyzer answering from a fixed table of analyses.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StaticMorphAnalyzer {
    entries: HashMap<String, Vec<AnalysisOutput>>,
    #[serde(default)]
    word_spaces: HashMap<String, Vec<AnalysisOutput>>,
}

impl StaticMorphAnalyzer {
    /// Create an empty analyzer; every word is unknown.
    pub fn new() -> Self {
        StaticMorphAnalyzer::default()
    }

    /// Register the analyses of `word`.
    pub fn with_entry<S: Into<String>>(mut self, word: S, outputs: Vec<AnalysisOutput>) -> Self {
        self.entries.insert(word.into(), outputs);
        self
    }

    /// Register the word-space segmentation of `word`.
    pub fn with_word_space<S: Into<String>>(
        mut self,
        word: S,
        segments: Vec<AnalysisOutput>,
    ) -> Self {
        self.word_spaces.insert(word.into(), segments);
        self
    }

    /// Load a table serialized as JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of words with registered analyses.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no word has registered analyses.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MorphAnalyzer for StaticMorphAnalyzer {
    fn analyze(&self, word: &str) -> Result<Vec<AnalysisOutput>> {
        Ok(self.entries.get(word).cloned().unwrap_or_default())
    }

    fn analyze_word_space(&self, word: &str) -> Result<Vec<AnalysisOutput>> {
        Ok(self.word_spaces.get(word).cloned().unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

//! See the top level crate documentation for information about the [`Model`] type.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::TrainingOptions;
use crate::error::{EcholaliaError, Result};
use crate::suffix::SuffixList;
use crate::token::{Prefix, Token, TERMINATORS};

/// One raw text record of the training corpus, as produced by whatever acquisition process
/// exported the comment history. The builder only reads `body`, and `channel` when filtering.
///
/// The serde aliases accept the column names of the original csv exports.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CorpusRecord {
    /// Opaque to the engine; carried along so one record type fits the export format.
    #[serde(alias = "datetime", alias = "date")]
    pub timestamp: String,
    #[serde(alias = "subreddit")]
    pub channel: String,
    pub body: String,
}

/// A fixed-order word-level Markov model. Maps each [`Prefix`] (an `order`-wide token window) to
/// the ordered list of tokens observed after it.
///
/// A model is read-only once built: build, then freeze. Sharing it between threads for
/// concurrent generation is fine, retraining it in place is not supported.
///
/// ```
/// # use echolalia::{CorpusRecord, Model, TrainingOptions};
/// let mut builder = Model::builder(TrainingOptions::default());
/// builder.feed_record(&CorpusRecord {
///     timestamp: "2019-11-02".to_string(),
///     channel: "gaming".to_string(),
///     body: "I am here".to_string(),
/// });
/// let model = builder.build().unwrap();
///
/// // Bodies are normalized to end in a terminator before entering the stream.
/// let suffixes = model.suffixes("I am").unwrap();
/// assert_eq!(suffixes.iter().next().unwrap(), "here.");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub(crate) map: HashMap<Prefix, SuffixList>,
    pub(crate) order: usize,
}

impl Model {
    pub fn builder(options: TrainingOptions) -> ModelBuilder {
        ModelBuilder::new(options)
    }

    /// Number of tokens forming one chain state.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of distinct prefixes.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.map.contains_key(prefix)
    }

    /// The suffixes observed after `prefix`, if the window was ever seen with a successor.
    pub fn suffixes(&self, prefix: &str) -> Option<&SuffixList> {
        self.map.get(prefix)
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &Prefix> {
        self.map.keys()
    }

    /// Drops every prefix containing any of `patterns` as a substring, returning how many were
    /// removed. A data-cleaning hook for integration layers (e.g. pruning signature fragments
    /// other bots leave behind); call it after loading an artifact, before generating.
    pub fn remove_prefixes_containing(&mut self, patterns: &[&str]) -> usize {
        let before = self.map.len();
        self.map
            .retain(|prefix, _| !patterns.iter().any(|p| prefix.as_str().contains(p)));
        let removed = before - self.map.len();
        if removed > 0 {
            debug!(removed, "pruned prefixes matching signature patterns");
        }
        removed
    }
}

/// Trims a body and guarantees it ends in sentence-terminating punctuation, so every record
/// contributes a terminator token for chain-stopping. Returns `None` for whitespace-only bodies.
pub(crate) fn normalize_body(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.ends_with(&TERMINATORS[..]) {
        Some(trimmed.to_string())
    } else {
        Some(format!("{trimmed}."))
    }
}

/// Builds a [`Model`] by being fed corpus records and keeping track of which token follows each
/// `order`-wide window.
///
/// All fed bodies are concatenated into one token stream before windowing, deliberately merging
/// record boundaries to broaden the suffix space.
#[derive(Clone, Debug)]
pub struct ModelBuilder {
    options: TrainingOptions,
    stream: Vec<Token>,
    map: HashMap<Prefix, SuffixList>,
    records_seen: usize,
    records_kept: usize,
}

impl ModelBuilder {
    pub fn new(options: TrainingOptions) -> Self {
        Self {
            options,
            stream: Vec::new(),
            map: HashMap::new(),
            records_seen: 0,
            records_kept: 0,
        }
    }

    /// Feeds one corpus record, applying the channel filter and body normalization. Records with
    /// whitespace-only bodies are dropped; an empty `allowed_channels` list allows every channel.
    pub fn feed_record(&mut self, record: &CorpusRecord) {
        self.records_seen += 1;

        if !self.options.allowed_channels.is_empty()
            && !self
                .options
                .allowed_channels
                .iter()
                .any(|c| c.to_lowercase() == record.channel.to_lowercase())
        {
            return;
        }

        if let Some(body) = normalize_body(&record.body) {
            self.records_kept += 1;
            self.stream
                .extend(body.split_whitespace().map(str::to_string));
        }
    }

    /// Feeds raw text with no channel attached, normalized the same way record bodies are.
    pub fn feed_str(&mut self, text: &str) {
        if let Some(body) = normalize_body(text) {
            self.stream
                .extend(body.split_whitespace().map(str::to_string));
        }
    }

    /// Records a single prefix → suffix observation directly, bypassing the token stream.
    pub fn add_transition(&mut self, prefix: &str, suffix: &str) {
        self.map.entry(Prefix::from(prefix)).or_default().push(suffix);
    }

    /// Uses up the builder and creates the model by sliding an `order`-wide window over the
    /// accumulated stream. Fails if the order is zero or if no transitions were observed at all
    /// (nothing fed, everything filtered out, or a stream shorter than `order + 1` tokens).
    pub fn build(self) -> Result<Model> {
        let order = self.options.order;
        if order == 0 {
            return Err(EcholaliaError::Config(
                "order must be at least 1".to_string(),
            ));
        }

        let mut map = self.map;
        for window in self.stream.windows(order + 1) {
            let prefix = Prefix::from_window(&window[..order]);
            map.entry(prefix).or_default().push(&window[order]);
        }

        if map.is_empty() {
            return Err(EcholaliaError::EmptyModel);
        }

        debug!(
            records_seen = self.records_seen,
            records_kept = self.records_kept,
            stream_tokens = self.stream.len(),
            prefixes = map.len(),
            "built model"
        );

        Ok(Model { map, order })
    }
}

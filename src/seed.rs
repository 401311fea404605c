//! Starting-prefix selection: where a chain walk begins.
//!
//! Both selectors only ever hand back keys that exist in the model, so the walker can always
//! look them up. Selection is best-effort by design: a model with no "nice" starting key (one
//! that looks like the start of a sentence) still yields something rather than looping forever.

use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use crate::model::Model;
use crate::stopwords::StopWordSet;
use crate::token::{title_case, Prefix, TERMINATORS};

/// Attempt budget when hunting for a capitalized, non-terminated key.
const MAX_PREFIX_ATTEMPTS: usize = 10_000;

/// Context keywords this short are too generic to steer the seed.
const MIN_KEYWORD_LEN: usize = 4;

impl Model {
    /// Draws a random prefix, preferring one that starts with an uppercase letter and does not
    /// end in sentence punctuation.
    ///
    /// After [`MAX_PREFIX_ATTEMPTS`] draws without a qualifying key the last candidate is
    /// returned as-is; a pathological model (say, all-lowercase corpus) degrades the output but
    /// must not hang generation. Returns `None` only for an empty model, which built models
    /// never are.
    pub fn random_prefix<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Prefix> {
        let keys: Vec<&Prefix> = self.map.keys().collect();
        let mut candidate = *keys.choose(rng)?;

        for _ in 0..MAX_PREFIX_ATTEMPTS {
            if candidate.starts_uppercase() && !candidate.ends_terminated() {
                return Some(candidate);
            }
            // Unwrap is safe, keys is non-empty or we would have returned above.
            candidate = *keys.choose(rng).unwrap();
        }

        trace!("prefix search exhausted, returning last candidate");
        Some(candidate)
    }

    /// Draws a prefix related to `context`, falling back to [`Model::random_prefix`] when the
    /// context offers nothing usable.
    ///
    /// The context is split into unique keywords, discarding short words and stop words. The
    /// model keys are shuffled once and scanned per keyword; the first key containing the
    /// keyword (as-is, lowercased, or title-cased) is kept, at most one per keyword, and the
    /// final seed is drawn uniformly from those hits. One shuffle shared across keywords keeps
    /// the scan linear per keyword while still surveying the whole key space.
    pub fn prefix_with_context<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        stop_words: &StopWordSet,
        context: &str,
    ) -> Option<&Prefix> {
        let cleaned = context.replace(&TERMINATORS[..], "");
        let keywords: Vec<&str> = cleaned
            .split_whitespace()
            .unique()
            .filter(|w| w.chars().count() >= MIN_KEYWORD_LEN && !stop_words.contains(w))
            .collect();

        if keywords.is_empty() {
            trace!("no usable context keywords, falling back to random prefix");
            return self.random_prefix(rng);
        }

        let mut keys: Vec<&Prefix> = self.map.keys().collect();
        keys.shuffle(rng);

        let mut sampled: Vec<&Prefix> = Vec::new();
        for word in keywords {
            let lowered = word.to_lowercase();
            let titled = title_case(word);
            let hit = keys
                .iter()
                .find(|prefix| {
                    let key = prefix.as_str();
                    key.contains(word) || key.contains(&lowered) || key.contains(&titled)
                })
                .copied();
            if let Some(prefix) = hit {
                sampled.push(prefix);
            }
        }

        if sampled.is_empty() {
            trace!("no prefix matched any context keyword, falling back to random prefix");
            self.random_prefix(rng)
        } else {
            sampled.choose(rng).copied()
        }
    }
}

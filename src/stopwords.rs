//! Stop words are the filler vocabulary ignored when mining a context string for keywords.
//!
//! Word lists are plain UTF-8 text files, one word per line, no header; the stopwords-iso lists
//! work out of the box. Each word is inserted verbatim and then expanded with its title-cased and
//! upper-cased forms, so membership checks work against corpus text of any common casing without
//! lowercasing at lookup time.

use std::path::Path;

use hashbrown::HashSet;
use tracing::debug;

use crate::error::{EcholaliaError, Result};
use crate::token::title_case;

/// An immutable set of stop words, closed under the title-case and upper-case transforms of each
/// loaded word. Built once at process start and passed by reference into selection calls.
#[derive(Clone, Debug, Default)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// Loads and merges every word list, then runs the casing expansion once over the combined
    /// vocabulary. A missing or unreadable list is a fatal configuration error; an incomplete set
    /// would silently degrade context matching.
    pub fn from_files<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut words = HashSet::new();
        for path in paths {
            let path = path.as_ref();
            let contents = std::fs::read_to_string(path).map_err(|e| {
                EcholaliaError::Config(format!("stop-word list {}: {e}", path.display()))
            })?;
            words.extend(contents.lines().map(str::to_string));
        }
        let set = Self::expand(words);
        debug!(words = set.len(), lists = paths.len(), "loaded stop words");
        Ok(set)
    }

    /// Builds a set from an in-memory vocabulary, with the same casing expansion. Meant for tests
    /// and embedded word lists.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::expand(words.into_iter().map(|w| w.as_ref().to_string()).collect())
    }

    fn expand(mut words: HashSet<String>) -> Self {
        let variants: Vec<String> = words
            .iter()
            .flat_map(|w| [title_case(w), w.to_uppercase()])
            .collect();
        words.extend(variants);
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::StopWordSet;
    use crate::error::EcholaliaError;

    #[test]
    fn words_are_expanded_into_casing_variants() {
        let set = StopWordSet::from_words(["porque", "the"]);
        for word in ["porque", "Porque", "PORQUE", "the", "The", "THE"] {
            assert!(set.contains(word), "missing {word}");
        }
        assert!(!set.contains("porqué"));
    }

    #[test]
    fn loads_and_merges_multiple_files() {
        let mut spanish = NamedTempFile::new().unwrap();
        writeln!(spanish, "hola\npero").unwrap();
        let mut english = NamedTempFile::new().unwrap();
        writeln!(english, "hello\nbut").unwrap();

        let set = StopWordSet::from_files(&[spanish.path(), english.path()]).unwrap();
        assert!(set.contains("pero"));
        assert!(set.contains("Hello"));
        assert!(set.contains("BUT"));
    }

    #[test]
    fn missing_file_is_a_configuration_error() {
        let result = StopWordSet::from_files(&["/no/such/stopword/list.txt"]);
        assert!(matches!(result, Err(EcholaliaError::Config(_))));
    }

    #[test]
    fn mixed_case_entries_keep_their_verbatim_form() {
        let set = StopWordSet::from_words(["AutoMod"]);
        assert!(set.contains("AutoMod"));
        assert!(set.contains("Automod"));
        assert!(set.contains("AUTOMOD"));
    }
}

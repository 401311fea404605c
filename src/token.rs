//! At the heart of a [`Model`](crate::Model) is a [`Token`]. In fact, this is just a String. But
//! we make a distinction here: a Token is one whitespace-delimited unit of the training corpus.
//! No smarter segmentation is attempted; `"word,"` and `"word"` are different tokens, which is
//! exactly what keeps the generated text looking like the source material.

use hashbrown::Equivalent;

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Representation of a whitespace-delimited string unit.
pub type Token = String;

/// Characters that end a sentence.
pub const TERMINATORS: [char; 3] = ['.', '?', '!'];

/// A fixed-width window of consecutive tokens, stored in its single-space-joined string form and
/// used as the model lookup key. Equality is exact string equality: keys differing only in casing
/// or trailing whitespace are distinct.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Prefix(pub String);

impl Prefix {
    /// Joins a token window into its key form.
    pub fn from_window(window: &[Token]) -> Self {
        Self(window.join(" "))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the first character is uppercase. Used to pick seeds that read like the start of a
    /// sentence.
    pub fn starts_uppercase(&self) -> bool {
        self.0.chars().next().is_some_and(char::is_uppercase)
    }

    /// Whether the key, ignoring trailing whitespace, ends in sentence-terminating punctuation.
    pub fn ends_terminated(&self) -> bool {
        self.0.trim_end().ends_with(TERMINATORS)
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Prefix {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<&str> for Prefix {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Equivalent<Prefix> for str {
    fn equivalent(&self, key: &Prefix) -> bool {
        key.0 == self
    }
}

/// Title-cases a single word: first grapheme uppercased, the rest lowercased.
pub(crate) fn title_case(word: &str) -> String {
    let mut graphemes = word.graphemes(true);
    match graphemes.next() {
        Some(first) => first.to_uppercase() + &graphemes.as_str().to_lowercase(),
        None => String::new(),
    }
}

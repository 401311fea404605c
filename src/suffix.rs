//! [`SuffixList`]s record which [`Token`]s were observed after a
//! [`Prefix`](crate::token::Prefix) in a [`Model`](crate::Model).

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::token::Token;

/// The ordered list of tokens observed to follow one prefix.
///
/// Duplicates are kept on purpose: a token seen three times occupies three slots, so uniform
/// sampling over the list already weights by observed frequency. Insertion order is preserved,
/// which also makes the serialized model artifact round-trip exactly.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuffixList(Vec<Token>);

impl SuffixList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Records one more observation of `token` following the owning prefix.
    pub fn push(&mut self, token: &str) {
        self.0.push(token.to_string());
    }

    /// Draws one suffix uniformly at random, or `None` if the list is empty.
    ///
    /// A built model never stores an empty list, but the walker still treats `None` as a dead end
    /// rather than trusting that invariant across deserialization.
    pub fn sample(&self, rng: &mut (impl Rng + ?Sized)) -> Option<&Token> {
        self.0.choose(rng)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.0.iter()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SuffixList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(|s| s.as_ref().to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use rand::thread_rng;

    use super::SuffixList;

    #[test]
    fn empty_list_samples_nothing() {
        assert_eq!(SuffixList::new().sample(&mut thread_rng()), None);
    }

    #[test]
    fn push_preserves_order_and_duplicates() {
        let mut list = SuffixList::new();
        list.push("a");
        list.push("b");
        list.push("a");
        assert_eq!(list.len(), 3);
        let seen: Vec<&str> = list.iter().map(String::as_str).collect();
        assert_eq!(seen, vec!["a", "b", "a"]);
    }

    #[test]
    fn sample_only_returns_members() {
        let list: SuffixList = ["x", "y"].into_iter().collect();
        let mut rng = thread_rng();
        for _ in 0..50 {
            let tok = list.sample(&mut rng).unwrap();
            assert!(tok == "x" || tok == "y");
        }
    }
}

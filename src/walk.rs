//! The chain walk: repeatedly extending generated text by sampling a suffix for the current
//! trailing window.

use rand::Rng;
use tracing::trace;

use crate::config::GenerationOptions;
use crate::error::{EcholaliaError, Result};
use crate::model::Model;
use crate::stopwords::StopWordSet;
use crate::token::TERMINATORS;

/// The last `order` whitespace-split tokens of `text`, joined back into key form.
fn trailing_window(text: &str, order: usize) -> String {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let start = tokens.len().saturating_sub(order);
    tokens[start..].join(" ")
}

impl Model {
    /// Walks the chain starting from `initial_prefix`, accumulating text until
    /// `options.sentences` terminators have been produced or `options.step_cap` steps have run.
    ///
    /// Dead ends (a window the model never saw, or one only seen at the very end of the stream)
    /// are recovered by splicing in a fresh random prefix and walking on; a walk never fails.
    /// The seed does not have to be a model key, though it usually is.
    ///
    /// The returned text is raw accumulator output, trailing space included. Cosmetics like
    /// capitalizing the first letter or fixing markdown spacing belong to the caller.
    pub fn walk<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        initial_prefix: &str,
        options: &GenerationOptions,
    ) -> String {
        let mut text = String::with_capacity(initial_prefix.len() + options.step_cap * 8);
        text.push_str(initial_prefix);
        text.push(' ');

        let mut current_key = initial_prefix.trim().to_string();
        let mut sentences = 0_usize;

        for _ in 0..options.step_cap {
            match self
                .suffixes(current_key.as_str())
                .and_then(|list| list.sample(rng))
            {
                Some(token) => text.push_str(token),
                None => {
                    trace!(key = %current_key, "dead end, splicing in a fresh prefix");
                    match self.random_prefix(rng) {
                        Some(prefix) => text.push_str(prefix.as_str()),
                        // Unreachable for built models, which are never empty.
                        None => break,
                    }
                }
            }
            text.push(' ');

            current_key = trailing_window(&text, self.order());
            if current_key.ends_with(&TERMINATORS[..]) {
                sentences += 1;
                if sentences >= options.sentences {
                    break;
                }
            }
        }

        text
    }

    /// One-call generation: picks a seed (context-steered when `context` is given, random
    /// otherwise) and walks the chain from it.
    ///
    /// Fails only on an empty model, which cannot be built but can be handed over from elsewhere.
    pub fn generate_comment<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        stop_words: &StopWordSet,
        context: Option<&str>,
        options: &GenerationOptions,
    ) -> Result<String> {
        let seed = match context {
            Some(ctx) => self.prefix_with_context(rng, stop_words, ctx),
            None => self.random_prefix(rng),
        }
        .ok_or(EcholaliaError::EmptyModel)?;

        Ok(self.walk(rng, seed.as_str(), options))
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{thread_rng, SeedableRng};

    use super::trailing_window;
    use crate::config::{GenerationOptions, TrainingOptions};
    use crate::model::Model;
    use crate::stopwords::StopWordSet;
    use crate::token::TERMINATORS;

    fn model_from_transitions(transitions: &[(&str, &str)]) -> Model {
        let mut builder = Model::builder(TrainingOptions::default());
        for (prefix, suffix) in transitions {
            builder.add_transition(prefix, suffix);
        }
        builder.build().unwrap()
    }

    fn options(sentences: usize) -> GenerationOptions {
        GenerationOptions {
            sentences,
            step_cap: 500,
        }
    }

    #[test]
    fn trailing_window_takes_last_order_tokens() {
        assert_eq!(trailing_window("Hello world foo. ", 2), "world foo.");
        assert_eq!(trailing_window("one ", 2), "one");
        assert_eq!(trailing_window("a b c d", 3), "b c d");
    }

    #[test]
    fn walk_stops_on_first_terminator() {
        let model = model_from_transitions(&[("Hello world", "foo."), ("world foo.", "bar")]);
        let mut rng = thread_rng();
        let text = model.walk(&mut rng, "Hello world", &options(1));

        // One step: "foo." is appended, the trailing window now ends in ".", done.
        assert_eq!(text, "Hello world foo. ");
    }

    #[test]
    fn walk_counts_sentences_and_stops_exactly_at_the_limit() {
        let model = model_from_transitions(&[
            ("Go now", "ok."),
            ("now ok.", "Fine."),
            ("ok. Fine.", "Sure."),
            ("Fine. Sure.", "End."),
        ]);
        let mut rng = thread_rng();
        let text = model.walk(&mut rng, "Go now", &options(2));

        assert_eq!(text, "Go now ok. Fine. ");
    }

    #[test]
    fn walk_is_bounded_when_terminators_never_appear() {
        // Two keys cycling into each other forever, no punctuation anywhere.
        let model = model_from_transitions(&[("a b", "a"), ("b a", "b")]);
        let mut rng = StdRng::seed_from_u64(42);
        let opts = GenerationOptions {
            sentences: 3,
            step_cap: 500,
        };
        let text = model.walk(&mut rng, "a b", &opts);

        assert!(!text.contains(&TERMINATORS[..]));
        // Seed tokens plus exactly step_cap generated tokens.
        assert_eq!(text.split_whitespace().count(), 2 + 500);
    }

    #[test]
    fn walk_recovers_from_unknown_seed() {
        let model = model_from_transitions(&[("Hello there", "friend.")]);
        let mut rng = thread_rng();
        let text = model.walk(&mut rng, "never seen", &options(1));

        // The unknown window dead-ends immediately; the walk reseeds and continues.
        assert!(text.starts_with("never seen "));
        assert!(text.contains("Hello there"));
    }

    #[test]
    fn walk_never_exceeds_the_sentence_limit() {
        let model = model_from_transitions(&[
            ("One two.", "Three four."),
            ("two. Three", "five."),
            ("Three four.", "One two."),
            ("four. One", "six."),
        ]);
        let mut rng = StdRng::seed_from_u64(3);
        for limit in 1..4 {
            let text = model.walk(&mut rng, "One two.", &options(limit));
            let terminators = text
                .split_whitespace()
                .filter(|t| t.ends_with(&TERMINATORS[..]))
                .count();
            assert!(terminators <= limit + 1, "seed terminator aside, limit holds");
        }
    }

    #[test]
    fn generate_comment_without_context() {
        let model = model_from_transitions(&[("Hello world", "foo."), ("world foo.", "bar")]);
        let stop_words = StopWordSet::from_words(["the"]);
        let mut rng = thread_rng();
        let comment = model
            .generate_comment(&mut rng, &stop_words, None, &options(1))
            .unwrap();

        // "Hello world" is the only qualifying seed.
        assert_eq!(comment, "Hello world foo. ");
    }

    #[test]
    fn generate_comment_with_context_steers_the_start() {
        let model = model_from_transitions(&[
            ("Hello world", "foo."),
            ("my bandicoot ate", "everything."),
            ("bandicoot ate everything.", "Twice."),
        ]);
        let stop_words = StopWordSet::from_words(["the"]);
        let mut rng = thread_rng();
        let comment = model
            .generate_comment(&mut rng, &stop_words, Some("your bandicoot again?"), &options(1))
            .unwrap();

        // Either bandicoot-bearing key may win the shuffle; both flow through the same walk.
        assert!(comment.contains("bandicoot ate everything."));
    }
}

//! Word-level Markov chain text generation trained on comment history.
//!
//! `echolalia` ingests a corpus of short text records (think a social-media comment export),
//! builds a fixed-order chain over whitespace-split words, and samples it to produce new text
//! that reads like the source author. The starting point can be steered toward a context string,
//! so replies loosely pick up on what they are replying to.
//!
//! The usual flow is: feed records into a [`ModelBuilder`], [`build`](ModelBuilder::build) the
//! read-only [`Model`], optionally persist it with [`artifact`], then call
//! [`Model::generate_comment`] as often as you like.
//!
//! ```
//! use echolalia::{GenerationOptions, Model, StopWordSet, TrainingOptions};
//! use rand::thread_rng;
//!
//! let mut builder = Model::builder(TrainingOptions::default());
//! builder.feed_str("The quick brown fox jumps over the lazy dog.");
//! builder.feed_str("The quick grey wolf naps all day");
//! let model = builder.build().unwrap();
//!
//! let stop_words = StopWordSet::from_words(["the", "over", "all"]);
//! let mut rng = thread_rng();
//! let comment = model
//!     .generate_comment(&mut rng, &stop_words, Some("quick!"), &GenerationOptions::default())
//!     .unwrap();
//! assert!(comment.contains("quick"));
//! ```
//!
//! Tokens are whatever whitespace splitting yields; punctuation stays glued to its word. That is
//! deliberate: the chain reproduces the corpus author's spelling, punctuation, and markdown
//! quirks instead of sanitizing them away. Every sampling loop is bounded, so generation always
//! terminates, even on models with no sentence punctuation at all.
//!
//! # Features
//!
//! - `inline-more` - Uses the `hashbrown` feature of the same name for more aggressive inlining
//! in the internal maps. Enabled by default.

pub mod artifact;
pub mod config;
pub mod error;
pub mod model;
pub mod stopwords;
pub mod suffix;
pub mod token;

mod seed;
mod walk;

pub use config::{GenerationOptions, TrainingOptions};
pub use error::{EcholaliaError, Result};
pub use model::{CorpusRecord, Model, ModelBuilder};
pub use stopwords::StopWordSet;
pub use suffix::SuffixList;
pub use token::{Prefix, Token, TERMINATORS};

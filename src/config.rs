//! Defaults-carrying option structs for training and generation.
//!
//! The defaults mirror the canonical deployment: second-order chains, two-sentence replies,
//! walks capped at 500 steps.

use serde::{Deserialize, Serialize};

/// Options consumed by [`ModelBuilder`](crate::ModelBuilder).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrainingOptions {
    /// Number of tokens forming one chain state. Must be at least 1.
    pub order: usize,
    /// Source channels to keep, matched case-insensitively. Empty means allow all.
    pub allowed_channels: Vec<String>,
}

impl Default for TrainingOptions {
    fn default() -> Self {
        Self {
            order: 2,
            allowed_channels: Vec::new(),
        }
    }
}

/// Options consumed by [`Model::walk`](crate::Model::walk) and
/// [`Model::generate_comment`](crate::Model::generate_comment).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Stop after this many sentence terminators have been produced.
    pub sentences: usize,
    /// Hard bound on walk steps, in case terminator tokens never show up.
    pub step_cap: usize,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            sentences: 2,
            step_cap: 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GenerationOptions, TrainingOptions};

    #[test]
    fn defaults_match_canonical_deployment() {
        let training = TrainingOptions::default();
        assert_eq!(training.order, 2);
        assert!(training.allowed_channels.is_empty());

        let generation = GenerationOptions::default();
        assert_eq!(generation.sentences, 2);
        assert_eq!(generation.step_cap, 500);
    }
}

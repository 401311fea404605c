//! Saving and loading trained models as binary artifacts.
//!
//! The artifact is a [`postcard`] encoding of the whole [`Model`]: every prefix, every suffix
//! list with duplicates and insertion order intact, plus the order the model was trained with.
//! Train once, then load the artifact read-only as many times as generation needs it.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EcholaliaError, Result};
use crate::model::Model;

/// Writes `model` to `path`, replacing any existing artifact.
pub fn save<P: AsRef<Path>>(model: &Model, path: P) -> Result<()> {
    let bytes = postcard::to_stdvec(model)?;
    fs::write(&path, &bytes)?;
    debug!(
        path = %path.as_ref().display(),
        prefixes = model.len(),
        bytes = bytes.len(),
        "saved model artifact"
    );
    Ok(())
}

/// Reads a model artifact back. A missing, truncated, or corrupt file is fatal, and so is an
/// artifact holding no prefixes; generation cannot run on either.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Model> {
    let bytes = fs::read(&path)?;
    let model: Model = postcard::from_bytes(&bytes)?;
    if model.is_empty() {
        return Err(EcholaliaError::EmptyModel);
    }
    debug!(
        path = %path.as_ref().display(),
        prefixes = model.len(),
        "loaded model artifact"
    );
    Ok(model)
}

#[cfg(test)]
mod tests {
    use hashbrown::HashMap;

    use crate::config::TrainingOptions;
    use crate::error::EcholaliaError;
    use crate::model::Model;

    #[test]
    fn round_trip_preserves_duplicates_and_order() {
        let mut builder = Model::builder(TrainingOptions::default());
        builder.add_transition("a b", "c");
        builder.add_transition("a b", "c");
        builder.add_transition("a b", "d");
        builder.add_transition("Start here", "c");
        let model = builder.build().unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");
        super::save(&model, &path).unwrap();
        let loaded = super::load(&path).unwrap();

        assert_eq!(loaded, model);
        let suffixes: Vec<&str> = loaded
            .suffixes("a b")
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(suffixes, vec!["c", "c", "d"]);
    }

    #[test]
    fn missing_artifact_is_an_io_error() {
        assert!(matches!(
            super::load("/no/such/model.bin"),
            Err(EcholaliaError::Io(_))
        ));
    }

    #[test]
    fn corrupt_artifact_is_an_artifact_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");
        std::fs::write(&path, [0xff]).unwrap();
        assert!(matches!(
            super::load(&path),
            Err(EcholaliaError::Artifact(_))
        ));
    }

    #[test]
    fn empty_artifact_is_rejected_at_load() {
        // An empty model cannot be built through the public API, but an artifact written by
        // something else could still hold one.
        let empty = Model {
            map: HashMap::new(),
            order: 2,
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");
        super::save(&empty, &path).unwrap();
        assert!(matches!(
            super::load(&path),
            Err(EcholaliaError::EmptyModel)
        ));
    }
}

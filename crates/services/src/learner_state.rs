use std::path::Path;
use std::sync::{Arc, RwLock};

use learner_core::Learner;

use crate::error::LearnerStateError;

/// Source of truth for the signed-in learner.
///
/// `None` means the record has not been loaded yet. Implementations hand out
/// shared snapshots; consumers never mutate them.
pub trait LearnerStateProvider: Send + Sync {
    fn current_learner(&self) -> Option<Arc<Learner>>;
}

/// Process-local learner state, filled by the app once the record is available.
#[derive(Debug, Default)]
pub struct InMemoryLearnerState {
    learner: RwLock<Option<Arc<Learner>>>,
}

impl InMemoryLearnerState {
    /// Creates an empty store; readers observe the loading state until a
    /// learner is set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_learner(learner: Learner) -> Self {
        Self {
            learner: RwLock::new(Some(Arc::new(learner))),
        }
    }

    /// Replaces the current record. Readers holding the previous snapshot keep it.
    pub fn set_learner(&self, learner: Learner) {
        let mut guard = self
            .learner
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = Some(Arc::new(learner));
    }

    pub fn clear(&self) {
        let mut guard = self
            .learner
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = None;
    }
}

impl LearnerStateProvider for InMemoryLearnerState {
    fn current_learner(&self) -> Option<Arc<Learner>> {
        self.learner
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

/// Parse a learner record in the web front end's JSON shape.
///
/// # Errors
///
/// Returns `LearnerStateError::Json` when the payload does not match.
pub fn load_learner_json(raw: &str) -> Result<Learner, LearnerStateError> {
    Ok(serde_json::from_str(raw)?)
}

/// Read and parse a learner record from disk.
///
/// # Errors
///
/// Returns `LearnerStateError::Io` if the file cannot be read and
/// `LearnerStateError::Json` if it cannot be parsed.
pub fn load_learner_file(path: &Path) -> Result<Learner, LearnerStateError> {
    let raw = std::fs::read_to_string(path).map_err(|source| LearnerStateError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let learner = load_learner_json(&raw)?;
    tracing::info!(path = %path.display(), learner = learner.name(), "loaded learner record");
    Ok(learner)
}

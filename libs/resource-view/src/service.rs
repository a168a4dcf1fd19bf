use std::fmt::Debug;

use async_trait::async_trait;

use shared_models::{ApiError, RecordId, ResourceKind, ResourceRecord};

/// Backend operations behind one list screen.
///
/// `Scope` is the parameter the list is fetched with: `()` for the global
/// collections, the selected patient for medical records.
#[async_trait]
pub trait ResourceService: Send + Sync {
    type Record: ResourceRecord;
    type Draft: Clone + Debug + Send + Sync;
    type Scope: Clone + Default + Debug + Send + Sync;

    fn kind(&self) -> ResourceKind;

    async fn list(&self, scope: &Self::Scope) -> Result<Vec<Self::Record>, ApiError>;

    async fn create(&self, draft: &Self::Draft) -> Result<Self::Record, ApiError>;

    async fn update(&self, id: RecordId, draft: &Self::Draft) -> Result<Self::Record, ApiError> {
        let _ = (id, draft);
        Err(ApiError::Unsupported {
            resource: self.kind().as_str(),
            operation: "update",
        })
    }
}

#[async_trait]
pub trait DeletableService: ResourceService {
    async fn delete(&self, id: RecordId) -> Result<(), ApiError>;
}

/// Blocking yes/no prompt shown before destructive actions.
pub trait Confirmation {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirmation for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// An answer given ahead of time, e.g. the `confirm` field of a submitted
/// confirmation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmed(pub bool);

impl Confirmation for Confirmed {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

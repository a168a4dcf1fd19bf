use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use tracing::{debug, error};

use shared_models::{ApiError, Doctor, Patient, ResourceKind};

#[derive(Clone)]
enum ReferenceList {
    Patients(Arc<Vec<Patient>>),
    Doctors(Arc<Vec<Doctor>>),
}

/// Read-through cache for the patient and doctor lists that several screens
/// need for dropdowns and name lookups. Screens that mutate a collection
/// invalidate its entry.
#[derive(Clone)]
pub struct ReferenceData {
    cache: Cache<ResourceKind, ReferenceList>,
}

impl ReferenceData {
    pub fn new(ttl: Duration) -> Self {
        Self {
            cache: Cache::builder()
                .max_capacity(8)
                .time_to_live(ttl)
                .build(),
        }
    }

    pub async fn patients<F, Fut>(&self, loader: F) -> Result<Arc<Vec<Patient>>, ApiError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Patient>, ApiError>>,
    {
        let entry = self
            .cache
            .try_get_with(ResourceKind::Patients, async move {
                debug!("Reference cache miss for patients");
                loader().await.map(|list| ReferenceList::Patients(Arc::new(list)))
            })
            .await
            .map_err(|e| (*e).clone())?;

        match entry {
            ReferenceList::Patients(list) => Ok(list),
            ReferenceList::Doctors(_) => Ok(Arc::default()),
        }
    }

    pub async fn doctors<F, Fut>(&self, loader: F) -> Result<Arc<Vec<Doctor>>, ApiError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Doctor>, ApiError>>,
    {
        let entry = self
            .cache
            .try_get_with(ResourceKind::Doctors, async move {
                debug!("Reference cache miss for doctors");
                loader().await.map(|list| ReferenceList::Doctors(Arc::new(list)))
            })
            .await
            .map_err(|e| (*e).clone())?;

        match entry {
            ReferenceList::Doctors(list) => Ok(list),
            ReferenceList::Patients(_) => Ok(Arc::default()),
        }
    }

    /// Like [`patients`](Self::patients) but a failed load degrades to an
    /// empty list; forms then offer no options instead of an error.
    pub async fn patients_or_empty<F, Fut>(&self, loader: F) -> Arc<Vec<Patient>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Patient>, ApiError>>,
    {
        self.patients(loader).await.unwrap_or_else(|e| {
            error!("Error fetching patients: {}", e);
            Arc::default()
        })
    }

    pub async fn doctors_or_empty<F, Fut>(&self, loader: F) -> Arc<Vec<Doctor>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Doctor>, ApiError>>,
    {
        self.doctors(loader).await.unwrap_or_else(|e| {
            error!("Error fetching doctors: {}", e);
            Arc::default()
        })
    }

    pub async fn invalidate(&self, kind: ResourceKind) {
        debug!("Invalidating reference data for {}", kind);
        self.cache.invalidate(&kind).await;
    }
}

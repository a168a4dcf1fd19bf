use thiserror::Error;
use tracing::{debug, error, info};

use shared_models::{ApiError, EditableRecord, RecordId, ResourceRecord};

use crate::filter::filter_records;
use crate::form::{FormMode, FormModal};
use crate::service::{Confirmation, DeletableService, ResourceService};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ControllerError {
    #[error("no form is open")]
    NoOpenForm,

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    Declined,
}

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this record?";

/// Per-screen state: the fetched collection, a loading flag, the search term
/// and the open form, if any.
///
/// Every mutation is followed by a full reload; the collection is never
/// patched locally.
pub struct ListController<S: ResourceService> {
    service: S,
    scope: S::Scope,
    items: Vec<S::Record>,
    loading: bool,
    filter: String,
    form: Option<FormModal<S::Draft>>,
}

impl<S: ResourceService> ListController<S> {
    pub fn new(service: S) -> Self {
        Self::with_scope(service, S::Scope::default())
    }

    pub fn with_scope(service: S, scope: S::Scope) -> Self {
        Self {
            service,
            scope,
            items: Vec::new(),
            loading: false,
            filter: String::new(),
            form: None,
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn scope(&self) -> &S::Scope {
        &self.scope
    }

    pub fn set_scope(&mut self, scope: S::Scope) {
        self.scope = scope;
    }

    pub fn items(&self) -> &[S::Record] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn form(&self) -> Option<&FormModal<S::Draft>> {
        self.form.as_ref()
    }

    pub fn find(&self, id: RecordId) -> Option<&S::Record> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Fetches the whole collection for the current scope. On failure the
    /// previous collection stays in place and the error is only logged.
    pub async fn load(&mut self) -> bool {
        let kind = self.service.kind();
        self.loading = true;
        debug!("Loading {} with scope {:?}", kind, self.scope);

        let result = self.service.list(&self.scope).await;
        self.loading = false;

        match result {
            Ok(items) => {
                debug!("Loaded {} {}", items.len(), kind);
                self.items = items;
                true
            }
            Err(e) => {
                error!("Error fetching {}: {}", kind, e);
                false
            }
        }
    }

    pub fn set_filter(&mut self, term: impl Into<String>) {
        self.filter = term.into();
    }

    /// Recomputed on every call; nothing is indexed.
    pub fn filtered(&self) -> Vec<&S::Record> {
        filter_records(&self.items, &self.filter)
    }

    pub fn open_create(&mut self, draft: S::Draft) {
        self.form = Some(FormModal::create(draft));
    }

    pub fn open_edit(&mut self, id: RecordId, draft: S::Draft) {
        self.form = Some(FormModal::edit(id, draft));
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    pub fn update_draft(&mut self, draft: S::Draft) -> Result<(), ControllerError> {
        let form = self.form.as_mut().ok_or(ControllerError::NoOpenForm)?;
        form.set_draft(draft);
        Ok(())
    }

    /// Sends the open draft. Success closes the form and reloads; failure
    /// keeps the form open with its draft and is logged, never displayed.
    pub async fn submit(&mut self) -> Result<S::Record, ControllerError> {
        let form = self.form.as_ref().ok_or(ControllerError::NoOpenForm)?;
        let kind = self.service.kind();

        let result = match form.mode() {
            FormMode::Create => self.service.create(form.draft()).await,
            FormMode::Edit(id) => self.service.update(id, form.draft()).await,
        };

        match result {
            Ok(saved) => {
                info!("Saved {} record {}", kind, saved.id());
                self.form = None;
                self.load().await;
                Ok(saved)
            }
            Err(e) => {
                error!("Error saving {}: {}", kind, e);
                Err(e.into())
            }
        }
    }
}

impl<S> ListController<S>
where
    S: ResourceService,
    S::Record: EditableRecord<Draft = S::Draft>,
{
    /// Opens the edit form pre-populated from a loaded record. Returns false
    /// when the id is not in the current collection.
    pub fn open_edit_for(&mut self, id: RecordId) -> bool {
        match self.find(id).map(EditableRecord::to_draft) {
            Some(draft) => {
                self.open_edit(id, draft);
                true
            }
            None => false,
        }
    }
}

impl<S: DeletableService> ListController<S> {
    /// Asks for confirmation, then deletes and reloads.
    pub async fn remove<C>(
        &mut self,
        id: RecordId,
        confirmation: &C,
    ) -> Result<RemoveOutcome, ControllerError>
    where
        C: Confirmation + ?Sized,
    {
        if !confirmation.confirm(DELETE_PROMPT) {
            debug!("Deletion of {} {} declined", self.service.kind(), id);
            return Ok(RemoveOutcome::Declined);
        }

        match self.service.delete(id).await {
            Ok(()) => {
                info!("Deleted {} record {}", self.service.kind(), id);
                self.load().await;
                Ok(RemoveOutcome::Removed)
            }
            Err(e) => {
                error!("Error deleting {} {}: {}", self.service.kind(), id, e);
                Err(e.into())
            }
        }
    }
}

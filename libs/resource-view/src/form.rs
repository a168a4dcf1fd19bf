use shared_models::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

/// The open create/edit overlay and the draft it is collecting.
#[derive(Debug, Clone, PartialEq)]
pub struct FormModal<D> {
    mode: FormMode,
    draft: D,
}

impl<D> FormModal<D> {
    pub fn create(draft: D) -> Self {
        Self { mode: FormMode::Create, draft }
    }

    pub fn edit(id: RecordId, draft: D) -> Self {
        Self { mode: FormMode::Edit(id), draft }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut D {
        &mut self.draft
    }

    pub fn set_draft(&mut self, draft: D) {
        self.draft = draft;
    }
}

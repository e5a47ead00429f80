use crate::client::HypothesisApi;
use crate::guard::SubmitGuard;
use crate::{Error, Result};
use chrono::{Local, NaiveDate};
use hypodesk_types::wire::{SaveTopicRequest, UpsertAction, UpsertRequest};
use hypodesk_types::{Hypothesis, LineOfBusiness, Market, RecordId};
use std::path::Path;
use std::sync::Arc;

/// A file picked for upload. The bytes are forwarded untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn read(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| Error::Validation(format!("not a file: {}", path.display())))?;
        let bytes = std::fs::read(path)?;
        Ok(Self { name, bytes })
    }
}

/// Editable fields of the selected hypothesis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HypothesisForm {
    pub details: String,
    pub rationale: String,
    pub lobs: Vec<LineOfBusiness>,
    pub market: Option<Market>,
    pub file: Option<SelectedFile>,
}

impl HypothesisForm {
    fn from_hypothesis(hypothesis: &Hypothesis) -> Self {
        Self {
            details: hypothesis.details.clone(),
            rationale: hypothesis.rationale.clone(),
            lobs: hypothesis.lobs.clone(),
            market: hypothesis.market,
            file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Uploaded { file_name: String, message: String },
    Failed { file_name: String, message: String },
}

/// What a save did, after reconciliation with the server's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    pub id: RecordId,
    pub action: UpsertAction,
    pub message: String,
    pub upload: Option<UploadOutcome>,
}

/// State of the hypothesis editing screen.
///
/// Local entries are only changed after the service confirms a mutation,
/// and the server's copy of a record always replaces the local one.
pub struct HypothesisWorkspace {
    api: Arc<dyn HypothesisApi>,
    guard: SubmitGuard,
    user_domain_id: String,
    items: Vec<Hypothesis>,
    selected: Option<RecordId>,
    form: HypothesisForm,
    dialog_open: bool,
    sidebar_open: bool,
    pending_delete: Option<RecordId>,
    status: Option<String>,
}

impl HypothesisWorkspace {
    pub fn new(api: Arc<dyn HypothesisApi>, user_domain_id: impl Into<String>) -> Self {
        Self {
            api,
            guard: SubmitGuard::new(),
            user_domain_id: user_domain_id.into(),
            items: Vec::new(),
            selected: None,
            form: HypothesisForm::default(),
            dialog_open: true,
            sidebar_open: true,
            pending_delete: None,
            status: None,
        }
    }

    pub fn with_guard(mut self, guard: SubmitGuard) -> Self {
        self.guard = guard;
        self
    }

    pub fn guard(&self) -> &SubmitGuard {
        &self.guard
    }

    /// Replace the sidebar with the service's list, in service order.
    pub fn load(&mut self) -> Result<usize> {
        let records = self.api.list_topics()?;
        self.items = records.iter().map(|r| r.to_hypothesis()).collect();

        if let Some(id) = &self.selected
            && !self.items.iter().any(|h| &h.id == id)
        {
            self.selected = None;
            self.form = HypothesisForm::default();
        }

        Ok(self.items.len())
    }

    pub fn items(&self) -> &[Hypothesis] {
        &self.items
    }

    pub fn selected_id(&self) -> Option<&RecordId> {
        self.selected.as_ref()
    }

    pub fn selected(&self) -> Option<&Hypothesis> {
        let id = self.selected.as_ref()?;
        self.items.iter().find(|h| &h.id == id)
    }

    pub fn form(&self) -> &HypothesisForm {
        &self.form
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn open_dialog(&mut self) {
        self.dialog_open = true;
    }

    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Start a new local hypothesis from the dialog. Blank names are ignored.
    pub fn create_or_rename(&mut self, name: &str) -> Option<RecordId> {
        self.create_on(name, Local::now().date_naive())
    }

    fn create_on(&mut self, name: &str, today: NaiveDate) -> Option<RecordId> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }

        let draft = Hypothesis::draft(trimmed, today);
        let id = draft.id.clone();
        self.items.insert(0, draft);
        self.selected = Some(id.clone());
        self.form = HypothesisForm::default();
        self.dialog_open = false;
        Some(id)
    }

    /// Select an entry; the form is reset from the selected record.
    pub fn select(&mut self, id: &RecordId) -> Result<()> {
        let hypothesis = self
            .items
            .iter()
            .find(|h| &h.id == id)
            .ok_or_else(|| Error::NotFound(format!("hypothesis {}", id)))?;

        self.form = HypothesisForm::from_hypothesis(hypothesis);
        self.selected = Some(id.clone());
        Ok(())
    }

    pub fn set_details(&mut self, details: impl Into<String>) {
        self.form.details = details.into();
    }

    pub fn set_rationale(&mut self, rationale: impl Into<String>) {
        self.form.rationale = rationale.into();
    }

    pub fn toggle_lob(&mut self, lob: LineOfBusiness) {
        if let Some(pos) = self.form.lobs.iter().position(|l| *l == lob) {
            self.form.lobs.remove(pos);
        } else {
            self.form.lobs.push(lob);
        }
    }

    pub fn remove_lob(&mut self, lob: LineOfBusiness) {
        self.form.lobs.retain(|l| *l != lob);
    }

    pub fn set_market(&mut self, market: Option<Market>) {
        self.form.market = market;
    }

    pub fn select_file(&mut self, file: SelectedFile) {
        self.status = Some(format!("File \"{}\" selected. Click Save to upload.", file.name));
        self.form.file = Some(file);
    }

    pub fn clear_file(&mut self) {
        self.form.file = None;
    }

    fn require_selected(&self) -> Result<Hypothesis> {
        let selected = self
            .selected()
            .cloned()
            .ok_or_else(|| Error::Validation("no hypothesis selected".to_string()))?;
        if selected.name.trim().is_empty() {
            return Err(Error::Validation("hypothesis name is required".to_string()));
        }
        Ok(selected)
    }

    /// Create or update the selected hypothesis, then upload the selected
    /// file if there is one.
    pub fn save(&mut self) -> Result<SaveReport> {
        let selected = self.require_selected()?;
        let _in_flight = self.guard.try_begin("Saving hypothesis")?;
        self.status = Some("Saving hypothesis...".to_string());

        let request = UpsertRequest {
            hypothesis_name: selected.name.clone(),
            details: self.form.details.clone(),
            rationale: self.form.rationale.clone(),
            user_domn_id: self.user_domain_id.clone(),
        };

        let response = match self.api.upsert_hypothesis(&request) {
            Ok(response) => response,
            Err(e) => {
                self.status = Some(format!("Error creating hypothesis: {}", e.user_message()));
                return Err(e);
            }
        };

        let mut saved = match &response.data {
            Some(record) => record.to_hypothesis(),
            None => Hypothesis {
                id: response.hypothesis_id.clone(),
                name: request.hypothesis_name.clone(),
                details: request.details.clone(),
                rationale: request.rationale.clone(),
                last_edit: None,
                lobs: Vec::new(),
                category: selected.category.clone(),
                market: None,
            },
        };
        saved.id = response.hypothesis_id.clone();
        saved.last_edit = saved.last_edit.or_else(|| Some(Local::now().date_naive()));
        // LOB and market are not persisted by the service yet
        if saved.lobs.is_empty() {
            saved.lobs = self.form.lobs.clone();
        }
        if saved.market.is_none() {
            saved.market = self.form.market;
        }

        self.reconcile(&selected.id, saved, response.action);
        tracing::info!(id = %response.hypothesis_id, action = ?response.action, "hypothesis saved");

        let message = response.message.clone().unwrap_or_else(|| match response.action {
            UpsertAction::Updated => "Hypothesis updated successfully!".to_string(),
            UpsertAction::Inserted => "Hypothesis created successfully!".to_string(),
        });

        let upload = self
            .form
            .file
            .take()
            .map(|file| self.upload(&response.hypothesis_id, file));

        self.status = Some(match &upload {
            Some(UploadOutcome::Failed { message, .. }) => format!("Upload failed: {}", message),
            Some(UploadOutcome::Uploaded { .. }) => {
                "File upload completed successfully!".to_string()
            }
            None => "Hypothesis saved successfully!".to_string(),
        });

        Ok(SaveReport {
            id: response.hypothesis_id,
            action: response.action,
            message,
            upload,
        })
    }

    fn reconcile(&mut self, local_id: &RecordId, saved: Hypothesis, action: UpsertAction) {
        let id = saved.id.clone();
        let existing = match action {
            UpsertAction::Updated => self.items.iter().position(|h| h.id == id),
            UpsertAction::Inserted => None,
        };

        match existing {
            Some(pos) => {
                self.items[pos] = saved;
                // a local draft that turned out to name an existing record
                if *local_id != id {
                    self.items.retain(|h| &h.id != local_id);
                }
            }
            None => match self.items.iter().position(|h| &h.id == local_id) {
                Some(pos) => self.items[pos] = saved,
                None => self.items.insert(0, saved),
            },
        }
        self.selected = Some(id);
    }

    fn upload(&mut self, id: &RecordId, file: SelectedFile) -> UploadOutcome {
        let file_name = file.name.clone();
        let result = self
            .api
            .upload_file(id, &file.name, file.bytes)
            .and_then(|_| self.api.get_hypothesis(id));

        match result {
            Ok(response) => {
                if let Some(record) = response.data {
                    let mut confirmed = record.to_hypothesis();
                    confirmed.id = id.clone();
                    if let Some(pos) = self.items.iter().position(|h| &h.id == id) {
                        let local = &self.items[pos];
                        if confirmed.lobs.is_empty() {
                            confirmed.lobs = local.lobs.clone();
                        }
                        confirmed.market = confirmed.market.or(local.market);
                        confirmed.last_edit = confirmed.last_edit.or(local.last_edit);
                        self.items[pos] = confirmed;
                    }
                }
                tracing::info!(id = %id, file = %file_name, "file uploaded");
                UploadOutcome::Uploaded {
                    file_name,
                    message: response
                        .message
                        .unwrap_or_else(|| "Hypothesis data retrieved successfully!".to_string()),
                }
            }
            Err(e) => {
                tracing::warn!(id = %id, file = %file_name, error = %e, "file upload failed");
                UploadOutcome::Failed {
                    file_name,
                    message: e.user_message(),
                }
            }
        }
    }

    /// Post the current text without touching local state.
    pub fn save_for_now(&mut self) -> Result<String> {
        let selected = self.require_selected()?;
        let _in_flight = self.guard.try_begin("Saving draft")?;

        let request = SaveTopicRequest {
            hypothesis_name: selected.name,
            details: self.form.details.clone(),
            rationale: self.form.rationale.clone(),
        };
        let response = self.api.save_topic(&request)?;
        let message = response
            .message
            .unwrap_or_else(|| "Saved for now".to_string());
        self.status = Some(message.clone());
        Ok(message)
    }

    /// First half of delete: remember which entry awaits confirmation.
    pub fn request_delete(&mut self, id: &RecordId) -> Result<&Hypothesis> {
        let pos = self
            .items
            .iter()
            .position(|h| &h.id == id)
            .ok_or_else(|| Error::NotFound(format!("hypothesis {}", id)))?;
        self.pending_delete = Some(id.clone());
        Ok(&self.items[pos])
    }

    pub fn pending_delete(&self) -> Option<&RecordId> {
        self.pending_delete.as_ref()
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the pending entry. It disappears locally only after the
    /// service confirms; a deleted selection moves to the first remaining
    /// entry.
    pub fn confirm_delete(&mut self) -> Result<Hypothesis> {
        let id = self
            .pending_delete
            .clone()
            .ok_or_else(|| Error::Validation("no delete pending".to_string()))?;
        let _in_flight = self.guard.try_begin("Deleting hypothesis")?;
        self.pending_delete = None;

        if let Err(e) = self.api.delete_hypothesis(&id) {
            self.status = Some(format!("Delete failed: {}", e.user_message()));
            return Err(e);
        }

        let pos = self
            .items
            .iter()
            .position(|h| h.id == id)
            .ok_or_else(|| Error::NotFound(format!("hypothesis {}", id)))?;
        let removed = self.items.remove(pos);
        tracing::info!(id = %id, "hypothesis deleted");

        if self.selected.as_ref() == Some(&id) {
            match self.items.first().map(|h| h.id.clone()) {
                Some(first) => self.select(&first)?,
                None => {
                    self.selected = None;
                    self.form = HypothesisForm::default();
                }
            }
        }

        self.status = Some(format!("Hypothesis \"{}\" deleted", removed.name));
        Ok(removed)
    }
}

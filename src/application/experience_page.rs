//! Experience page controller - the CRUD state machine behind the
//! admin timeline table.
//!
//! Owns the list it loaded; there is no cross-page cache. Mutations go
//! through the CSRF gate, and the server's response is authoritative:
//! created and updated records replace whatever the form sent.

use std::sync::Arc;

use crate::domain::experience::{
    sorted_for_display, ExperienceDraft, ExperienceEntry, ExperiencePayload, ExperienceStats,
};
use crate::domain::foundation::FieldErrors;
use crate::ports::{ApiError, ExperienceGateway};

use super::csrf::CsrfGate;
use super::session::SessionStore;

const LOAD_ERROR: &str = "No se pudo cargar experience.";
const SAVE_ERROR: &str = "No se pudo guardar.";
const DELETE_ERROR: &str = "No se pudo eliminar.";
const GONE_NOTICE: &str = "Esta experiencia ya no existe. Refrescando lista…";

/// State and operations for the experience admin page.
pub struct ExperienceController {
    gateway: Arc<dyn ExperienceGateway>,
    session: Arc<SessionStore>,
    csrf: Arc<CsrfGate>,
    entries: Vec<ExperienceEntry>,
    loading: bool,
    busy: bool,
    error: Option<String>,
    notice: Option<String>,
}

impl ExperienceController {
    pub fn new(
        gateway: Arc<dyn ExperienceGateway>,
        session: Arc<SessionStore>,
        csrf: Arc<CsrfGate>,
    ) -> Self {
        Self {
            gateway,
            session,
            csrf,
            entries: Vec::new(),
            loading: false,
            busy: false,
            error: None,
            notice: None,
        }
    }

    /// The list as loaded, unordered.
    pub fn entries(&self) -> &[ExperienceEntry] {
        &self.entries
    }

    /// Timeline order: `order` ascending, start date descending on ties.
    pub fn sorted(&self) -> Vec<&ExperienceEntry> {
        sorted_for_display(&self.entries)
    }

    /// Counters for the mini cards.
    pub fn stats(&self) -> ExperienceStats {
        ExperienceStats::tally(&self.entries)
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn busy(&self) -> bool {
        self.busy
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Fetches the full list and replaces the local items wholesale.
    ///
    /// On a 401 the session is force-closed and nothing is surfaced
    /// inline (the route guard redirects). On any other failure the
    /// previous items stay visible next to the error.
    pub async fn load(&mut self) {
        self.loading = true;
        self.error = None;
        self.notice = None;

        match self.gateway.list().await {
            Ok(entries) => self.entries = entries,
            Err(err) if err.is_unauthorized() => self.session.force_logout().await,
            Err(err) => self.error = Some(err.user_message(LOAD_ERROR)),
        }

        self.loading = false;
    }

    /// Validates a draft and creates the entry. Field errors block the
    /// submission and never reach the backend.
    pub async fn save_new(&mut self, draft: &ExperienceDraft) -> Result<(), FieldErrors> {
        let payload = draft.validate()?;
        self.create(&payload).await;
        Ok(())
    }

    /// Validates a draft and updates an existing entry.
    pub async fn save_edit(
        &mut self,
        id: &str,
        draft: &ExperienceDraft,
    ) -> Result<(), FieldErrors> {
        let payload = draft.validate()?;
        self.update(id, &payload).await;
        Ok(())
    }

    /// Creates an entry and prepends the canonical record.
    pub async fn create(&mut self, payload: &ExperiencePayload) {
        if self.busy {
            return;
        }
        self.busy = true;
        self.error = None;

        let outcome = match self.csrf.ensure().await {
            Ok(()) => self.gateway.create(payload).await,
            Err(err) => Err(err),
        };
        match outcome {
            Ok(created) => self.entries.insert(0, created),
            Err(err) => self.fail_mutation(err, SAVE_ERROR).await,
        }

        self.busy = false;
    }

    /// Updates an entry and replaces it in place by identity.
    ///
    /// There is no server-side version check: two admins editing the
    /// same record overwrite each other, last write wins.
    pub async fn update(&mut self, id: &str, payload: &ExperiencePayload) {
        if self.busy {
            return;
        }
        self.busy = true;
        self.error = None;

        let outcome = match self.csrf.ensure().await {
            Ok(()) => self.gateway.update(id, payload).await,
            Err(err) => Err(err),
        };
        match outcome {
            Ok(updated) => {
                if let Some(existing) = self.entries.iter_mut().find(|e| e.id == updated.id) {
                    *existing = updated;
                }
            }
            Err(err) => self.fail_mutation(err, SAVE_ERROR).await,
        }

        self.busy = false;
    }

    /// Deletes an entry and removes it locally.
    pub async fn delete(&mut self, id: &str) {
        if self.busy {
            return;
        }
        self.busy = true;
        self.error = None;

        let outcome = match self.csrf.ensure().await {
            Ok(()) => self.gateway.delete(id).await,
            Err(err) => Err(err),
        };
        match outcome {
            Ok(()) => self.entries.retain(|e| e.id != id),
            Err(err) => self.fail_mutation(err, DELETE_ERROR).await,
        }

        self.busy = false;
    }

    /// Shared failure handling for mutations: 401 closes the session,
    /// 404 means the record is already gone - resynchronize and leave an
    /// informational notice - anything else surfaces as an error with
    /// the local items untouched.
    async fn fail_mutation(&mut self, err: ApiError, fallback: &str) {
        if err.is_unauthorized() {
            self.session.force_logout().await;
        } else if err.is_not_found() {
            self.load().await;
            self.notice = Some(GONE_NOTICE.to_string());
        } else {
            self.error = Some(err.user_message(fallback));
        }
    }
}

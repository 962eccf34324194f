//! Messages page controller - contact-form leads in the admin panel.
//!
//! Same CRUD state machine as the experience page, plus the list
//! filters, a detail view, and one quirk worth naming: opening a message
//! that is still `new` marks it as read in the background, and that
//! transition is best-effort - its failure never interrupts the reading.

use std::sync::Arc;

use crate::domain::message::{
    filter_messages, Message, MessageCounts, MessageStatus, StatusFilter,
};
use crate::ports::{ApiError, MessageGateway};

use super::best_effort::best_effort;
use super::csrf::CsrfGate;
use super::session::SessionStore;

const LOAD_ERROR: &str = "No se pudieron cargar los mensajes.";
const STATUS_ERROR: &str = "No se pudo cambiar el status.";
const DELETE_ERROR: &str = "No se pudo eliminar.";
const GONE_NOTICE: &str = "Este mensaje ya no existe. Refrescando lista…";

/// State and operations for the messages admin page.
pub struct MessagesController {
    gateway: Arc<dyn MessageGateway>,
    session: Arc<SessionStore>,
    csrf: Arc<CsrfGate>,
    messages: Vec<Message>,
    loading: bool,
    busy: bool,
    error: Option<String>,
    notice: Option<String>,
    query: String,
    status_filter: StatusFilter,
    selected: Option<Message>,
}

impl MessagesController {
    pub fn new(
        gateway: Arc<dyn MessageGateway>,
        session: Arc<SessionStore>,
        csrf: Arc<CsrfGate>,
    ) -> Self {
        Self {
            gateway,
            session,
            csrf,
            messages: Vec::new(),
            loading: false,
            busy: false,
            error: None,
            notice: None,
            query: String::new(),
            status_filter: StatusFilter::All,
            selected: None,
        }
    }

    /// The list as loaded, unfiltered.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The rows the table shows: status filter + text query, newest
    /// first. Pure - never mutates the loaded list.
    pub fn filtered(&self) -> Vec<&Message> {
        filter_messages(&self.messages, &self.query, self.status_filter)
    }

    /// Counters for the mini cards.
    pub fn stats(&self) -> MessageCounts {
        MessageCounts::tally(&self.messages)
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

    /// The message open in the detail view, if any.
    pub fn selected(&self) -> Option<&Message> {
        self.selected.as_ref()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
    }

    /// Fetches the full list and replaces the local items wholesale.
    pub async fn load(&mut self) {
        self.loading = true;
        self.error = None;
        self.notice = None;

        match self.gateway.list().await {
            Ok(messages) => self.messages = messages,
            Err(err) if err.is_unauthorized() => self.session.force_logout().await,
            Err(err) => self.error = Some(err.user_message(LOAD_ERROR)),
        }

        self.loading = false;
    }

    /// Opens the detail view for a message.
    ///
    /// Viewing a `new` message transitions it to `read` as a side
    /// effect. That transition is best-effort: 401 and 404 keep their
    /// usual handling, but any other failure is logged and swallowed so
    /// the detail view stays open without an error banner.
    pub async fn open_detail(&mut self, id: &str) {
        let Some(message) = self.messages.iter().find(|m| m.id == id).cloned() else {
            return;
        };
        let auto_mark = message.status == MessageStatus::New;
        self.selected = Some(message);

        if auto_mark {
            match self.try_set_status(id, MessageStatus::Read).await {
                Err(err) if err.is_unauthorized() => self.session.force_logout().await,
                Err(err) if err.is_not_found() => {
                    self.load().await;
                    self.notice = Some(GONE_NOTICE.to_string());
                }
                other => {
                    best_effort("auto mark-read", other);
                }
            }
        }
    }

    /// Closes the detail view.
    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    /// Transitions a message's status (the read/archive quick actions).
    /// Any status may move to any other.
    pub async fn set_status(&mut self, id: &str, status: MessageStatus) {
        if self.busy {
            return;
        }
        self.busy = true;
        self.error = None;

        if let Err(err) = self.try_set_status(id, status).await {
            self.fail_mutation(err, STATUS_ERROR).await;
        }

        self.busy = false;
    }

    /// Deletes a message and removes it locally, closing the detail view
    /// when it was showing the deleted message.
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
            Ok(()) => {
                self.messages.retain(|m| m.id != id);
                if self.selected.as_ref().is_some_and(|m| m.id == id) {
                    self.selected = None;
                }
            }
            Err(err) => self.fail_mutation(err, DELETE_ERROR).await,
        }

        self.busy = false;
    }

    /// CSRF, the round trip, and the local merge. The server's record is
    /// authoritative; an open detail view is kept in sync.
    async fn try_set_status(&mut self, id: &str, status: MessageStatus) -> Result<(), ApiError> {
        self.csrf.ensure().await?;
        let updated = self.gateway.set_status(id, status).await?;

        if let Some(existing) = self.messages.iter_mut().find(|m| m.id == updated.id) {
            *existing = updated.clone();
        }
        if let Some(selected) = &mut self.selected {
            if selected.id == updated.id {
                *selected = updated;
            }
        }
        Ok(())
    }

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

//! Dashboard controller - joins two independent fetches into a summary.

use std::sync::Arc;

use futures::future::try_join;

use crate::domain::dashboard::DashboardSummary;
use crate::ports::{MessageGateway, ProjectGateway};

use super::session::SessionStore;

const LOAD_ERROR: &str = "No se pudo cargar el dashboard.";

/// State and operations for the dashboard page.
pub struct DashboardController {
    projects: Arc<dyn ProjectGateway>,
    messages: Arc<dyn MessageGateway>,
    session: Arc<SessionStore>,
    summary: Option<DashboardSummary>,
    loading: bool,
    error: Option<String>,
}

impl DashboardController {
    pub fn new(
        projects: Arc<dyn ProjectGateway>,
        messages: Arc<dyn MessageGateway>,
        session: Arc<SessionStore>,
    ) -> Self {
        Self {
            projects,
            messages,
            session,
            summary: None,
            loading: false,
            error: None,
        }
    }

    /// The derived summary, once a load has succeeded.
    pub fn summary(&self) -> Option<&DashboardSummary> {
        self.summary.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetches projects and messages concurrently and derives the
    /// summary. The join fails as a whole when either fetch fails; a
    /// previously derived summary stays visible next to the error.
    pub async fn load(&mut self) {
        self.loading = true;
        self.error = None;

        match try_join(self.projects.list_admin(), self.messages.list()).await {
            Ok((projects, messages)) => {
                self.summary = Some(DashboardSummary::derive(&projects, &messages));
            }
            Err(err) if err.is_unauthorized() => self.session.force_logout().await,
            Err(err) => self.error = Some(err.user_message(LOAD_ERROR)),
        }

        self.loading = false;
    }
}

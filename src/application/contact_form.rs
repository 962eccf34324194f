//! Public contact form - the one unauthenticated write.

use std::sync::Arc;

use crate::domain::foundation::FieldErrors;
use crate::domain::message::ContactDraft;
use crate::ports::MessageGateway;

const SEND_ERROR: &str = "No se pudo enviar el mensaje.";

/// State and submission for the public contact form.
///
/// No CSRF gate here: the endpoint is public and the visitor has no
/// session to protect.
pub struct ContactForm {
    gateway: Arc<dyn MessageGateway>,
    busy: bool,
    sent: bool,
    error: Option<String>,
}

impl ContactForm {
    pub fn new(gateway: Arc<dyn MessageGateway>) -> Self {
        Self {
            gateway,
            busy: false,
            sent: false,
            error: None,
        }
    }

    pub fn busy(&self) -> bool {
        self.busy
    }

    /// True once a submission has been accepted.
    pub fn sent(&self) -> bool {
        self.sent
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validates and submits the draft. Field errors block the
    /// submission; transport errors surface on the form.
    pub async fn submit(&mut self, draft: &ContactDraft) -> Result<(), FieldErrors> {
        let payload = draft.validate()?;
        if self.busy {
            return Ok(());
        }
        self.busy = true;
        self.error = None;

        match self.gateway.submit(&payload).await {
            Ok(_) => self.sent = true,
            Err(err) => self.error = Some(err.user_message(SEND_ERROR)),
        }

        self.busy = false;
        Ok(())
    }
}

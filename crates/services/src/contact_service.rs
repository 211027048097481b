use wellness_core::model::{ContactDraft, ContactMessage};

use crate::Notification;
use crate::error::ContactServiceError;

/// Accepts contact form submissions. Nothing leaves the process.
#[derive(Debug, Clone, Default)]
pub struct ContactService {
    received: Vec<ContactMessage>,
}

impl ContactService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns `ContactServiceError::Invalid` for blank fields or a malformed email.
    pub fn submit(&mut self, draft: ContactDraft) -> Result<Notification, ContactServiceError> {
        let message = draft.validate()?;
        self.received.push(message);
        tracing::info!(total = self.received.len(), "contact message received");
        Ok(Notification::new(
            "Message sent! We'll get back to you within 24 hours.",
        ))
    }

    #[must_use]
    pub fn received(&self) -> &[ContactMessage] {
        &self.received
    }
}

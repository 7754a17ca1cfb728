//! Domain operations over the message store.
//!
//! The service owns validation and shaping; HTTP handlers stay a thin skin
//! and the store stays pure persistence.

use tracing::debug;

use crate::error::ServiceError;
use crate::model::Message;
use crate::store::MessageStore;

/// Message-board operations, backed by a [`MessageStore`].
#[derive(Clone, Debug)]
pub struct MessageService {
    store: MessageStore,
}

impl MessageService {
    pub fn new(store: MessageStore) -> Self {
        Self { store }
    }

    /// All messages, most recent first.
    pub async fn list_messages(&self) -> Result<Vec<Message>, ServiceError> {
        Ok(self.store.list().await?)
    }

    /// Validate and persist a new message.
    ///
    /// `content` is taken exactly as the caller sent it: `None` (key absent
    /// or JSON null) and the empty string are rejected; anything else,
    /// including whitespace-only text, is stored verbatim.
    pub async fn create_message(&self, content: Option<String>) -> Result<Message, ServiceError> {
        let content = match content {
            Some(c) if !c.is_empty() => c,
            _ => {
                return Err(ServiceError::Validation(
                    "Message content is required".to_owned(),
                ));
            }
        };

        let message = self.store.insert(&content).await?;
        debug!(id = message.id, "message created");
        Ok(message)
    }
}

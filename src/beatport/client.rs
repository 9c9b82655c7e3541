use std::collections::HashMap;
use std::sync::Arc;

use super::request::PageCursor;
use super::transport::{HttpTransport, Transport};
use crate::config;
use crate::error::ApiResult;
use crate::management::CredentialStore;
use crate::types::Session;

/// Client for the Beatport catalog API.
///
/// Owns the [`Session`] with the account credentials and tokens, the
/// pagination cursor cache and the transport used for network access. One
/// client instance represents one logical user session; all operations take
/// `&mut self`, which serializes token mutation and cursor bookkeeping.
/// Callers that share a client across tasks wrap it in a `tokio::sync::Mutex`.
pub struct BeatportClient {
    pub(crate) base_url: String,
    pub(crate) session: Session,
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) store: Option<Arc<dyn CredentialStore>>,
    pub(crate) cursors: HashMap<String, PageCursor>,
}

impl BeatportClient {
    /// Creates a client that talks to the configured API over HTTPS.
    pub fn new(session: Session) -> ApiResult<Self> {
        Ok(Self::with_transport(session, Arc::new(HttpTransport::new()?)))
    }

    /// Creates a client on top of a caller-supplied transport.
    pub fn with_transport(session: Session, transport: Arc<dyn Transport>) -> Self {
        BeatportClient {
            base_url: config::api_base_url(),
            session,
            transport,
            store: None,
            cursors: HashMap::new(),
        }
    }

    /// Attaches a credential store that gets notified of new token pairs.
    pub fn with_store(mut self, store: Arc<dyn CredentialStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Whether the account holds an active streaming subscription, as
    /// reported by the introspection endpoint during the last token
    /// acquisition.
    pub fn has_subscription(&self) -> bool {
        self.session.has_subscription
    }
}

use crate::http_handler::http_client::HTTPClient;
use crate::voyage_control::{
    CreationWorkflow, RestGateway, VoyageBoard, VoyageGateway, VoyagesChanged,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;

/// Struct representing the key components of the application, providing
/// access to the shared backend gateway and the voyages-changed broadcast
/// that keeps the listing side in sync with confirmed changes.
#[derive(Clone)]
pub struct Keychain {
    /// Backend gateway shared by every controller.
    gateway: Arc<dyn VoyageGateway>,
    /// Sender side of the voyages-changed broadcast.
    changes: broadcast::Sender<VoyagesChanged>,
}

impl Keychain {
    /// Number of change events buffered per subscriber.
    const CHANGE_BUFFER: usize = 8;

    /// Creates a new instance of `Keychain`.
    ///
    /// # Arguments
    /// - `base_url`: The base URL to initialize the HTTP client.
    /// - `timeout`: Per-request deadline applied to every backend call.
    ///
    /// # Returns
    /// A new instance of `Keychain` wired to the REST backend.
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = Arc::new(HTTPClient::new(base_url, timeout));
        let gateway: Arc<dyn VoyageGateway> = Arc::new(RestGateway::new(client));
        let (changes, _) = broadcast::channel(Self::CHANGE_BUFFER);
        Self { gateway, changes }
    }

    /// Provides a cloned reference to the backend gateway.
    pub fn gateway(&self) -> Arc<dyn VoyageGateway> { Arc::clone(&self.gateway) }

    /// A fresh creation workflow on the shared gateway and broadcast.
    pub fn workflow(&self) -> Arc<CreationWorkflow> {
        Arc::new(CreationWorkflow::new(Arc::clone(&self.gateway), self.changes.clone()))
    }

    /// The voyage board on the shared gateway and broadcast.
    pub fn board(&self) -> VoyageBoard {
        VoyageBoard::new(Arc::clone(&self.gateway), self.changes.clone())
    }
}

use std::sync::Arc;
use tokio::sync::broadcast;

use crate::http_handler::http_response::voyage_list::Voyage;
use crate::voyage_control::gateway::{DeleteError, FetchError, VoyageGateway};
use crate::voyage_control::signal::VoyagesChanged;
use crate::{info, warn};

/// The [`VoyageBoard`] is the listing side of the console: it fetches the
/// stored voyages, deletes them by id, and broadcasts [`VoyagesChanged`]
/// after every confirmed deletion so listeners re-fetch.
pub struct VoyageBoard {
    gateway: Arc<dyn VoyageGateway>,
    changes: broadcast::Sender<VoyagesChanged>,
}

impl VoyageBoard {
    pub fn new(
        gateway: Arc<dyn VoyageGateway>,
        changes: broadcast::Sender<VoyagesChanged>,
    ) -> Self {
        Self { gateway, changes }
    }

    /// Fetches the stored voyages with their unit types expanded.
    pub async fn voyages(&self) -> Result<Vec<Voyage>, FetchError> {
        self.gateway.list_voyages().await
    }

    /// Deletes one voyage by id. A confirmed deletion is broadcast; a
    /// rejected one leaves the stored list untouched and fires no event.
    pub async fn delete(&self, id: &str) -> Result<(), DeleteError> {
        match self.gateway.delete_voyage(id).await {
            Ok(()) => {
                info!("Voyage {id} deleted");
                let _ = self.changes.send(VoyagesChanged);
                Ok(())
            }
            Err(err) => {
                warn!("{err}");
                Err(err)
            }
        }
    }

    /// New receiver on the voyages-changed broadcast.
    pub fn subscribe(&self) -> broadcast::Receiver<VoyagesChanged> { self.changes.subscribe() }
}

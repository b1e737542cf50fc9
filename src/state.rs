//! Shared application state injected into all handlers.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkRepository;
use crate::domain::view_event::ViewEvent;

/// Link service over a type-erased store, as held by [`AppState`].
pub type DynLinkService = LinkService<dyn LinkRepository>;

/// Cloned per request by axum; every field is a cheap handle.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<DynLinkService>,
    /// Producer side of the redirect view queue.
    pub view_sender: mpsc::Sender<ViewEvent>,
}

impl AppState {
    pub fn new(link_service: Arc<DynLinkService>, view_sender: mpsc::Sender<ViewEvent>) -> Self {
        Self {
            link_service,
            view_sender,
        }
    }
}

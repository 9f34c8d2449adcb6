//! App Orchestration Methods
//!
//! `App` is the controller: it owns the pure Model plus the channels to the
//! API service worker. Methods are kept as `impl App` but organized by
//! functional domain:
//! - navigation: tab switching and timers
//! - configs: list, view, download, delete, edit
//! - create: the create/edit form
//! - templates: template list and apply prompt
//!
//! No method here performs I/O directly; each backend call is a message on
//! `api_tx`, answered later through `api_rx` (see `handlers::api`).

pub(crate) mod configs;
pub(crate) mod create;
pub(crate) mod navigation;
pub(crate) mod templates;

use std::path::PathBuf;
use tokio::sync::mpsc;

use crate::model::{Model, Severity};
use crate::services::{ApiRequest, ApiResponse};

pub struct App {
    pub model: Model,

    api_tx: mpsc::UnboundedSender<ApiRequest>,
    api_rx: mpsc::UnboundedReceiver<ApiResponse>,

    /// Where downloaded `.wsb` files are written
    pub download_dir: PathBuf,
}

impl App {
    pub fn new(
        model: Model,
        api_tx: mpsc::UnboundedSender<ApiRequest>,
        api_rx: mpsc::UnboundedReceiver<ApiResponse>,
        download_dir: PathBuf,
    ) -> Self {
        Self {
            model,
            api_tx,
            api_rx,
            download_dir,
        }
    }

    /// Hand a request to the API service worker
    pub(crate) fn send(&mut self, request: ApiRequest) {
        tracing::debug!(?request, "queueing API request");
        if self.api_tx.send(request).is_err() {
            tracing::warn!("API service is gone, request dropped");
            self.model
                .notify("Error: background API service stopped", Severity::Error);
        }
    }

    /// Apply every response that has arrived since the last frame
    pub fn drain_api_responses(&mut self) {
        while let Ok(response) = self.api_rx.try_recv() {
            crate::handlers::handle_api_response(self, response);
        }
    }
}

//! Remote request log: load it into the panel, or wipe it after confirmation.

use std::cell::Cell;
use std::rc::Rc;

use crate::api::{ApiClient, Transport};
use crate::error::{ClientError, OperationError};
use crate::render::HistoryPanel;
use crate::state::{Surface, Ui};
use crate::status::Severity;

pub const CLEAR_PROMPT: &str = "Are you sure you want to clear all history?";

pub struct HistoryManager<T> {
    client: Rc<ApiClient<T>>,
    ui: Ui,
    /// Bumped by every `load`; only the newest load may write the panel.
    generation: Rc<Cell<u64>>,
}

impl<T> Clone for HistoryManager<T> {
    fn clone(&self) -> Self {
        Self {
            client: Rc::clone(&self.client),
            ui: self.ui.clone(),
            generation: Rc::clone(&self.generation),
        }
    }
}

impl<T: Transport> HistoryManager<T> {
    pub fn new(client: Rc<ApiClient<T>>, ui: Ui) -> Self {
        Self { client, ui, generation: Rc::new(Cell::new(0)) }
    }

    /// Replaces the panel with the service's list. Not retried on failure.
    ///
    /// Overlapping loads are allowed; a reply that arrives after a newer load
    /// started is dropped and the call returns `Ok`.
    pub async fn load(&self) -> Result<(), ClientError> {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        self.ui.update(|state| state.history = HistoryPanel::Loading);

        let outcome = self.client.history().await;
        if self.generation.get() != generation {
            log::debug!("dropping stale history reply (load #{generation})");
            return Ok(());
        }

        match outcome {
            Ok(page) => {
                log::debug!("history loaded: {} entries", page.items.len());
                let panel = HistoryPanel::from_items(page.items, page.total);
                self.ui.update(|state| state.history = panel);
                Ok(())
            }
            Err(error) => {
                log::error!("failed to load history: {error}");
                self.ui.update(|state| state.history = HistoryPanel::Failed);
                Err(error)
            }
        }
    }

    /// Deletes every entry once `confirm` agrees, then reloads the panel.
    /// A declined prompt sends nothing.
    pub async fn clear_all(
        &self,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Result<(), OperationError> {
        let _lease = self.ui.lease(Surface::History).ok_or_else(|| {
            log::warn!("history clear already in flight, ignoring trigger");
            OperationError::Busy(Surface::History)
        })?;
        if !confirm(CLEAR_PROMPT) {
            log::info!("history clear declined");
            return Err(OperationError::Cancelled);
        }

        log::info!("clearing history");
        match self.client.clear_history().await {
            Ok(()) => {
                self.ui.notify("History cleared", Severity::Success);
                // A failed reload already shows its own placeholder.
                let _ = self.load().await;
                Ok(())
            }
            Err(error) => {
                log::error!("failed to clear history: {error}");
                let message = format!("Error: {}", error.describe("History error"));
                self.ui.notify(message, Severity::Error);
                Err(error.into())
            }
        }
    }
}

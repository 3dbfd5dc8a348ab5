//! Session-wide UI state and the handle the drivers mutate it through.
//!
//! `Ui` is cloned into every in-flight operation. The platform observes it via
//! `UiHooks`: `changed` after each mutation and `schedule_status_expiry` after
//! each banner update.

use std::cell::{Ref, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use strum_macros::EnumIter;

use crate::config::ClientConfig;
use crate::error::ValidationError;
use crate::input::{ImageBlob, ImageSurface, TextSurface, UrlSurface, validate_drop};
use crate::model::HealthReport;
use crate::render::{Fragment, HistoryPanel};
use crate::status::{Severity, StatusNotifier, StatusTicket};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter)]
pub enum Tab {
    #[default]
    Text,
    Image,
    Parsing,
    History,
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Tab::Text => "📝 Text analysis",
            Tab::Image => "🖼️ Image analysis",
            Tab::Parsing => "🌐 Site parsing",
            Tab::History => "📋 History",
        }
    }
}

/// Independent input channel. At most one request per surface is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum Surface {
    Text,
    Image,
    Site,
    History,
}

#[derive(Debug, Default)]
pub struct UiState {
    pub active_tab: Tab,
    pub text: TextSurface,
    pub image: ImageSurface,
    pub url: UrlSurface,
    pub status: StatusNotifier,
    pub history: HistoryPanel,
    pub health: Option<HealthReport>,
    pub dragging: bool,
    progress_visible: bool,
    in_flight: BTreeSet<Surface>,
    results: BTreeMap<Surface, Fragment>,
}

impl UiState {
    pub fn is_busy(&self, surface: Surface) -> bool {
        self.in_flight.contains(&surface)
    }

    pub fn progress_visible(&self) -> bool {
        self.progress_visible
    }

    pub fn result(&self, surface: Surface) -> Option<&Fragment> {
        self.results.get(&surface)
    }
}

pub trait UiHooks {
    /// State changed; the view should redraw.
    fn changed(&self);
    /// Call `Ui::expire_status(ticket)` after `after_ms` milliseconds.
    fn schedule_status_expiry(&self, ticket: StatusTicket, after_ms: u32);
}

struct Detached;

impl UiHooks for Detached {
    fn changed(&self) {}
    fn schedule_status_expiry(&self, _ticket: StatusTicket, _after_ms: u32) {}
}

#[derive(Clone)]
pub struct Ui {
    state: Rc<RefCell<UiState>>,
    hooks: Rc<dyn UiHooks>,
    config: Rc<ClientConfig>,
}

impl Ui {
    pub fn new(config: ClientConfig, hooks: impl UiHooks + 'static) -> Self {
        Self {
            state: Rc::new(RefCell::new(UiState::default())),
            hooks: Rc::new(hooks),
            config: Rc::new(config),
        }
    }

    /// A handle with no view attached. Status expiry must be driven by hand.
    pub fn detached(config: ClientConfig) -> Self {
        Self::new(config, Detached)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn state(&self) -> Ref<'_, UiState> {
        self.state.borrow()
    }

    pub fn update<R>(&self, mutate: impl FnOnce(&mut UiState) -> R) -> R {
        let result = mutate(&mut self.state.borrow_mut());
        self.hooks.changed();
        result
    }

    pub fn notify(&self, text: impl Into<String>, severity: Severity) -> StatusTicket {
        let ticket = self.update(|state| state.status.notify(text, severity));
        self.hooks.schedule_status_expiry(ticket, self.config.status_timeout_ms);
        ticket
    }

    pub fn expire_status(&self, ticket: StatusTicket) {
        let expired = self.state.borrow_mut().status.expire(ticket);
        if expired {
            self.hooks.changed();
        }
    }

    pub fn reject(&self, error: &ValidationError) {
        log::warn!("input rejected: {error}");
        self.notify(error.to_string(), Severity::Error);
    }

    pub fn load_example_text(&self) {
        self.update(|state| state.text.load_example());
        self.notify("Example loaded", Severity::Info);
    }

    pub fn select_image(&self, image: ImageBlob) {
        log::debug!("image selected: {image:?}");
        self.update(|state| state.image.select(image));
    }

    /// Drag-and-drop entry point. A non-image leaves the selection unchanged
    /// and is reported on the status banner.
    pub fn drop_image(&self, image: ImageBlob) -> Result<(), ValidationError> {
        if let Err(error) = validate_drop(&image.mime_type) {
            self.reject(&error);
            return Err(error);
        }
        self.update(|state| state.image.accept_drop(image))
    }

    pub fn clear_image(&self) {
        self.update(|state| state.image.clear());
    }

    pub fn show_result(&self, surface: Surface, fragment: Fragment) {
        self.update(|state| state.results.insert(surface, fragment));
    }

    /// Marks `surface` busy until the lease is dropped. `None` if it already is.
    pub fn lease(&self, surface: Surface) -> Option<SurfaceLease> {
        let acquired = self.update(|state| state.in_flight.insert(surface));
        acquired.then(|| SurfaceLease { ui: self.clone(), surface })
    }

    /// Shows the progress indicator until the guard is dropped.
    pub fn show_progress(&self) -> ProgressGuard {
        self.update(|state| state.progress_visible = true);
        ProgressGuard { ui: self.clone() }
    }

    fn release(&self, release: impl FnOnce(&mut UiState)) {
        // Guards can drop while a panic unwinds through `update`.
        if let Ok(mut state) = self.state.try_borrow_mut() {
            release(&mut state);
            drop(state);
            self.hooks.changed();
        }
    }
}

#[must_use = "the surface is released as soon as the lease is dropped"]
pub struct SurfaceLease {
    ui: Ui,
    surface: Surface,
}

impl Drop for SurfaceLease {
    fn drop(&mut self) {
        let surface = self.surface;
        self.ui.release(|state| {
            state.in_flight.remove(&surface);
        });
    }
}

#[must_use = "the progress indicator hides as soon as the guard is dropped"]
pub struct ProgressGuard {
    ui: Ui,
}

impl Drop for ProgressGuard {
    fn drop(&mut self) {
        self.ui.release(|state| state.progress_visible = false);
    }
}

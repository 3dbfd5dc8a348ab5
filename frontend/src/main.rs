mod api;
mod components;

use std::rc::Rc;

use chrono::FixedOffset;
use gloo_events::EventListener;
use gloo_file::File as GlooFile;
use shared::input::validate_drop;
use shared::{
    ApiClient, HistoryManager, ImageBlob, RequestOrchestrator, StatusTicket, Tab, Ui,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent, FileList};
use yew::prelude::*;

use api::GlooTransport;
use components::utils::{ViewHooks, api_base, browser_zone, confirm, load_config, read_image};

/// Where a picked file came from; dropped and pasted files go through the
/// MIME check, picker selections are trusted to the `accept` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Picker,
    Drop,
}

pub enum Msg {
    // Redraw after the shared state changed
    Redraw,
    StatusExpired(StatusTicket),

    // Input surfaces
    SwitchTab(Tab),
    TextChanged(String),
    CompetitorChanged(String),
    UrlChanged(String),
    LoadExample,
    FilePicked(GlooFile),
    ImageRead(ImageBlob, ImageSource),
    ImageReadFailed(String),
    ClearImage,
    SetDragging(bool),
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),

    // Requests
    AnalyzeText,
    AnalyzeImage,
    ParseSite,
    ParseAll,
    RefreshHistory,
    ClearHistory,
}

pub struct Model {
    ui: Ui,
    orchestrator: RequestOrchestrator<GlooTransport>,
    history: HistoryManager<GlooTransport>,
    zone: FixedOffset,
    _paste_listener: Option<EventListener>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = load_config();
        let base = api_base(&config);
        log::info!("analysis service at {base:?}");

        let ui = Ui::new(config, ViewHooks::new(ctx.link().clone()));
        let client = Rc::new(ApiClient::new(GlooTransport::new(base)));
        let orchestrator = RequestOrchestrator::new(Rc::clone(&client), ui.clone());
        let history = HistoryManager::new(client, ui.clone());

        let paste_listener = web_sys::window().map(|window| {
            let link = ctx.link().clone();
            EventListener::new(&window, "paste", move |event| {
                if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                    link.send_message(Msg::HandlePaste(clipboard_event.clone()));
                }
            })
        });

        let model = Self {
            ui,
            orchestrator,
            history,
            zone: browser_zone(),
            _paste_listener: paste_listener,
        };
        model.bootstrap();
        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Redraw => true,
            Msg::StatusExpired(ticket) => {
                self.ui.expire_status(ticket);
                false
            }

            Msg::SwitchTab(tab) => self.handle_switch_tab(tab),
            Msg::TextChanged(text) => {
                self.ui.update(|state| state.text.text = text);
                false
            }
            Msg::CompetitorChanged(name) => {
                self.ui.update(|state| state.text.competitor_name = name);
                false
            }
            Msg::UrlChanged(url) => {
                self.ui.update(|state| state.url.url = url);
                false
            }
            Msg::LoadExample => {
                self.ui.load_example_text();
                false
            }
            Msg::FilePicked(file) => {
                self.read_file(ctx, file, ImageSource::Picker);
                false
            }
            Msg::ImageRead(image, source) => self.handle_image_read(image, source),
            Msg::ImageReadFailed(reason) => {
                log::error!("failed to read image: {reason}");
                self.ui.notify(format!("Error: {reason}"), shared::Severity::Error);
                false
            }
            Msg::ClearImage => {
                self.ui.clear_image();
                false
            }
            Msg::SetDragging(dragging) => {
                if self.ui.state().dragging != dragging {
                    self.ui.update(|state| state.dragging = dragging);
                }
                false
            }
            Msg::HandleDrop(event) => self.handle_drop(ctx, event),
            Msg::HandlePaste(event) => self.handle_paste(ctx, event),

            Msg::AnalyzeText => {
                let orchestrator = self.orchestrator.clone();
                spawn_local(async move {
                    let _ = orchestrator.analyze_text().await;
                });
                false
            }
            Msg::AnalyzeImage => {
                let orchestrator = self.orchestrator.clone();
                spawn_local(async move {
                    let _ = orchestrator.analyze_image().await;
                });
                false
            }
            Msg::ParseSite => {
                let orchestrator = self.orchestrator.clone();
                spawn_local(async move {
                    let _ = orchestrator.parse_site().await;
                });
                false
            }
            Msg::ParseAll => {
                let orchestrator = self.orchestrator.clone();
                spawn_local(async move {
                    let _ = orchestrator.parse_all_sites().await;
                });
                false
            }
            Msg::RefreshHistory => {
                self.spawn_history_load();
                false
            }
            Msg::ClearHistory => {
                let history = self.history.clone();
                spawn_local(async move {
                    let _ = history.clear_all(confirm).await;
                });
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { components::header::render_header(self) }
                { components::tabs::render_tabs(self, ctx) }

                <main class="main-content">
                    { self.render_active_tab(ctx) }
                </main>

                { components::status_bar::render_status_bar(self) }
            </div>
        }
    }
}

// Handler methods
impl Model {
    fn bootstrap(&self) {
        self.spawn_history_load();
        let orchestrator = self.orchestrator.clone();
        spawn_local(async move {
            let _ = orchestrator.refresh_health().await;
        });
    }

    fn spawn_history_load(&self) {
        let history = self.history.clone();
        spawn_local(async move {
            let _ = history.load().await;
        });
    }

    fn handle_switch_tab(&mut self, tab: Tab) -> bool {
        let entering_history = tab == Tab::History && self.ui.state().active_tab != Tab::History;
        self.ui.update(|state| state.active_tab = tab);
        if entering_history {
            self.spawn_history_load();
        }
        false
    }

    fn handle_image_read(&mut self, image: ImageBlob, source: ImageSource) -> bool {
        match source {
            ImageSource::Picker => self.ui.select_image(image),
            ImageSource::Drop => {
                // Rejections are already reported on the status bar.
                let _ = self.ui.drop_image(image);
            }
        }
        false
    }

    fn handle_drop(&mut self, ctx: &Context<Self>, event: DragEvent) -> bool {
        event.prevent_default();
        self.ui.update(|state| state.dragging = false);

        let files = event.data_transfer().and_then(|transfer| transfer.files());
        self.accept_dropped(ctx, files);
        false
    }

    fn handle_paste(&mut self, ctx: &Context<Self>, event: ClipboardEvent) -> bool {
        let files = event
            .clipboard_data()
            .and_then(|transfer| transfer.files())
            .filter(|files| files.length() > 0);
        // Plain text pastes go to the focused field untouched.
        if files.is_some() {
            event.prevent_default();
            self.accept_dropped(ctx, files);
        }
        false
    }

    // Helper methods
    fn accept_dropped(&self, ctx: &Context<Self>, files: Option<FileList>) {
        let Some(file) = files.and_then(|files| files.item(0)) else {
            self.ui.reject(&shared::ValidationError::NotAnImage);
            return;
        };
        if let Err(error) = validate_drop(&file.type_()) {
            log::warn!("skipping non-image file {}", file.name());
            self.ui.reject(&error);
            return;
        }
        self.read_file(ctx, GlooFile::from(file), ImageSource::Drop);
    }

    fn read_file(&self, ctx: &Context<Self>, file: GlooFile, source: ImageSource) {
        let link = ctx.link().clone();
        spawn_local(async move {
            match read_image(&file).await {
                Ok(image) => link.send_message(Msg::ImageRead(image, source)),
                Err(reason) => link.send_message(Msg::ImageReadFailed(reason)),
            }
        });
    }
}

// Rendering methods
impl Model {
    fn render_active_tab(&self, ctx: &Context<Self>) -> Html {
        let tab = self.ui.state().active_tab;
        match tab {
            Tab::Text => components::text_section::render_text_section(self, ctx),
            Tab::Image => components::image_section::render_image_section(self, ctx),
            Tab::Parsing => components::site_section::render_site_section(self, ctx),
            Tab::History => components::history_panel::render_history_panel(self, ctx),
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}

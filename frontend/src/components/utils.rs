use chrono::{FixedOffset, Offset, Utc};
use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use js_sys::Date;
use shared::{ClientConfig, ImageBlob, StatusTicket, UiHooks};
use wasm_bindgen::JsCast;
use yew::html::Scope;

use super::super::{Model, Msg};

/// Id of the `<script type="application/json">` block holding `ClientConfig`.
const CONFIG_ELEMENT: &str = "app-config";

/// Bridges the shared `Ui` handle to the component: redraws and status
/// timers become messages.
pub struct ViewHooks {
    link: Scope<Model>,
}

impl ViewHooks {
    pub fn new(link: Scope<Model>) -> Self {
        Self { link }
    }
}

impl UiHooks for ViewHooks {
    fn changed(&self) {
        self.link.send_message(Msg::Redraw);
    }

    fn schedule_status_expiry(&self, ticket: StatusTicket, after_ms: u32) {
        let link = self.link.clone();
        Timeout::new(after_ms, move || link.send_message(Msg::StatusExpired(ticket))).forget();
    }
}

pub fn load_config() -> ClientConfig {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT))
        .and_then(|element| element.text_content())
        .unwrap_or_default();

    ClientConfig::from_json(&raw).unwrap_or_else(|error| {
        log::warn!("ignoring invalid client config: {error}");
        ClientConfig::default()
    })
}

/// Service root for the page the app was loaded from.
pub fn api_base(config: &ClientConfig) -> String {
    let Some(location) = web_sys::window().map(|window| window.location()) else {
        return String::new();
    };
    let origin = location.origin().unwrap_or_default();
    let pathname = location.pathname().unwrap_or_default();
    config.api_base(&origin, &pathname)
}

/// The browser's current UTC offset, used to localize history timestamps.
pub fn browser_zone() -> FixedOffset {
    // getTimezoneOffset is UTC minus local, in minutes.
    let minutes = Date::new_0().get_timezone_offset();
    FixedOffset::west_opt((minutes * 60.0) as i32).unwrap_or_else(|| Utc.fix())
}

pub fn confirm(prompt: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(prompt).ok())
        .unwrap_or(false)
}

pub async fn read_image(file: &GlooFile) -> Result<ImageBlob, String> {
    let bytes = gloo_file::futures::read_as_bytes(file)
        .await
        .map_err(|error| error.to_string())?;
    Ok(ImageBlob::new(file.name(), file.raw_mime_type(), bytes))
}

/// Opens the native picker behind a hidden `<input type="file">`.
pub fn trigger_click(element_id: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(element_id))
    {
        if let Ok(input) = element.dyn_into::<web_sys::HtmlElement>() {
            input.click();
        }
    }
}

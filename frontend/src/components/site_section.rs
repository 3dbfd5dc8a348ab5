use super::super::{Model, Msg};
use super::results::render_result_box;
use shared::Surface;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub fn render_site_section(model: &Model, ctx: &Context<Model>) -> Html {
    let state = model.ui.state();
    let link = ctx.link();
    let busy = state.is_busy(Surface::Site);

    let on_url = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::UrlChanged(input.value())
    });

    html! {
        <section id="parsing-tab" class="tab-content active">
            <input
                id="url-input"
                type="url"
                placeholder="https://competitor.studio"
                value={state.url.url.clone()}
                oninput={on_url}
            />
            <div class="actions">
                <button
                    class="analyze-btn"
                    disabled={busy}
                    onclick={link.callback(|_: MouseEvent| Msg::ParseSite)}
                >
                    {"🌐 Parse site"}
                </button>
                <button
                    class="secondary-btn"
                    disabled={busy}
                    onclick={link.callback(|_: MouseEvent| Msg::ParseAll)}
                >
                    {"📊 Parse all competitors"}
                </button>
            </div>
            if state.progress_visible() {
                <div id="parse-progress" class="progress">
                    <div class="progress-bar"></div>
                </div>
            }
            { render_result_box("parse-result", state.result(Surface::Site)) }
        </section>
    }
}

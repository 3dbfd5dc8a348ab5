use super::super::{Model, Msg};
use super::results::render_result_box;
use shared::Surface;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

pub fn render_text_section(model: &Model, ctx: &Context<Model>) -> Html {
    let state = model.ui.state();
    let link = ctx.link();
    let busy = state.is_busy(Surface::Text);

    let on_text = link.callback(|e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::TextChanged(input.value())
    });
    let on_competitor = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::CompetitorChanged(input.value())
    });

    let on_example = link.callback(|_: MouseEvent| Msg::LoadExample);

    html! {
        <section id="text-tab" class="tab-content active">
            <textarea
                id="text-input"
                placeholder="Paste a competitor's site copy, case study or social post..."
                value={state.text.text.clone()}
                oninput={on_text}
            />
            <input
                id="competitor-name"
                type="text"
                placeholder="Competitor name (optional)"
                value={state.text.competitor_name.clone()}
                oninput={on_competitor}
            />
            <div class="actions">
                <button
                    class="analyze-btn"
                    disabled={busy}
                    onclick={link.callback(|_: MouseEvent| Msg::AnalyzeText)}
                >
                    { if busy { "Analyzing..." } else { "🔍 Analyze" } }
                </button>
                <button class="secondary-btn" onclick={on_example}>
                    {"📄 Load example"}
                </button>
            </div>
            { render_result_box("text-result", state.result(Surface::Text)) }
        </section>
    }
}

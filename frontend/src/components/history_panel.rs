use super::super::{Model, Msg};
use super::results::render_fragment;
use shared::{HistoryPanel, Surface};
use shared::render::render_history;
use yew::prelude::*;

pub fn render_history_panel(model: &Model, ctx: &Context<Model>) -> Html {
    let state = model.ui.state();
    let link = ctx.link();
    let busy = state.is_busy(Surface::History);
    let loading = matches!(state.history, HistoryPanel::Loading);
    let heading = match state.history.count() {
        Some(count) => format!("Request history ({count})"),
        None => "Request history".to_string(),
    };

    html! {
        <section id="history-tab" class="tab-content active">
            <div class="history-header">
                <h3>{ heading }</h3>
                <button
                    class="secondary-btn"
                    disabled={busy || loading}
                    onclick={link.callback(|_: MouseEvent| Msg::RefreshHistory)}
                >
                    {"🔄 Refresh"}
                </button>
                <button
                    class="danger-btn"
                    disabled={busy}
                    onclick={link.callback(|_: MouseEvent| Msg::ClearHistory)}
                >
                    {"🗑️ Clear history"}
                </button>
            </div>
            <div id="history-list">
                { render_fragment(&render_history(&state.history, model.zone)) }
            </div>
        </section>
    }
}

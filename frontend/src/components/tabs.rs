use super::super::{Model, Msg};
use shared::Tab;
use strum::IntoEnumIterator;
use yew::prelude::*;

pub fn render_tabs(model: &Model, ctx: &Context<Model>) -> Html {
    let active = model.ui.state().active_tab;
    html! {
        <nav class="tabs">
            { for Tab::iter().map(|tab| {
                let onclick = ctx.link().callback(move |_: MouseEvent| Msg::SwitchTab(tab));
                html! {
                    <button
                        class={classes!("tab-btn", (tab == active).then_some("active"))}
                        onclick={onclick}
                    >
                        { tab.label() }
                    </button>
                }
            }) }
        </nav>
    }
}

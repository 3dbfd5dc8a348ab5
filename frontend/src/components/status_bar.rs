use super::super::Model;
use yew::prelude::*;

pub fn render_status_bar(model: &Model) -> Html {
    let state = model.ui.state();
    let Some(message) = state.status.current() else {
        return html! {};
    };
    html! {
        <div id="status-bar" class={classes!("status-bar", message.severity.as_ref().to_string())}>
            <span id="status-message">{ message.text.clone() }</span>
        </div>
    }
}

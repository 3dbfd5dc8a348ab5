use super::super::Model;
use yew::prelude::*;

/// Renders the application header with the service health badges
pub fn render_header(model: &Model) -> Html {
    let state = model.ui.state();
    html! {
        <header class="app-header">
            <h1>{"🎬 MotionCraft AI Analyzer"}</h1>
            <p class="subtitle">{"Competitor analysis for motion design studios"}</p>
            {
                match &state.health {
                    Some(report) => html! {
                        <div class="service-health" title={report.version.clone()}>
                            { for report.services.iter().map(|(name, up)| {
                                let availability = if *up { "up" } else { "down" };
                                html! {
                                    <span class={classes!("service-badge", availability)}>
                                        { name.clone() }
                                    </span>
                                }
                            }) }
                        </div>
                    },
                    None => html! {},
                }
            }
        </header>
    }
}

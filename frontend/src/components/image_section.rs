use super::super::{Model, Msg};
use super::results::render_result_box;
use super::utils::trigger_click;
use gloo_file::File as GlooFile;
use shared::Surface;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

const IMAGE_INPUT: &str = "image-input";

pub fn render_image_section(model: &Model, ctx: &Context<Model>) -> Html {
    let state = model.ui.state();
    let busy = state.is_busy(Surface::Image);

    html! {
        <section id="image-tab" class="tab-content active">
            { render_upload_area(model, ctx) }
            { render_preview(model, ctx) }
            <button
                class="analyze-btn"
                disabled={busy || !state.image.ready()}
                onclick={ctx.link().callback(|_: MouseEvent| Msg::AnalyzeImage)}
            >
                { if busy { "Analyzing..." } else { "🔍 Analyze image" } }
            </button>
            { render_result_box("image-result", state.result(Surface::Image)) }
        </section>
    }
}

fn render_upload_area(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    let handle_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().and_then(|files| files.item(0));
        input.set_value("");
        file.map(|file| Msg::FilePicked(GlooFile::from(file)))
    });
    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });
    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });
    let handle_drop = link.callback(Msg::HandleDrop);

    html! {
        <>
            <input
                type="file"
                id={IMAGE_INPUT}
                accept="image/*"
                style="display: none;"
                onchange={handle_change}
            />
            <div
                id="upload-area"
                class={classes!("upload-area", model.ui.state().dragging.then_some("drag-over"))}
                onclick={Callback::from(|_: MouseEvent| trigger_click(IMAGE_INPUT))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
            >
                <p>{"📁 Drop an image here, click to choose one, or paste it"}</p>
            </div>
        </>
    }
}

fn render_preview(model: &Model, ctx: &Context<Model>) -> Html {
    let state = model.ui.state();
    let (Some(image), Some(preview)) = (state.image.selected(), state.image.preview()) else {
        return html! {};
    };
    let on_clear = ctx.link().callback(|_: MouseEvent| Msg::ClearImage);
    html! {
        <div id="image-preview" class="image-preview">
            <img id="preview-img" src={preview.to_string()} alt={image.name.clone()} />
            <span id="image-name">{ image.name.clone() }</span>
            <button class="secondary-btn" onclick={on_clear}>
                {"✖ Clear"}
            </button>
        </div>
    }
}

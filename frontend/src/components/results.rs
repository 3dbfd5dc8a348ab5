use shared::{Fragment, Node};
use yew::prelude::*;
use yew::virtual_dom::VText;

/// Converts a render tree into Yew nodes. Text is always set as a text node,
/// so service strings never reach the DOM as markup.
pub fn render_fragment(fragment: &[Node]) -> Html {
    fragment.iter().map(render_node).collect::<Html>()
}

fn render_node(node: &Node) -> Html {
    match node {
        Node::Text(text) => VText::new(text.clone()).into(),
        Node::Element(element) => {
            let (target, rel) = match element.href {
                Some(_) => (Some("_blank"), Some("noopener noreferrer")),
                None => (None, None),
            };
            html! {
                <@{element.tag.as_ref().to_string()}
                    class={classes!(element.class)}
                    href={element.href.clone()}
                    target={target}
                    rel={rel}
                >
                    { render_fragment(&element.children) }
                </@>
            }
        }
    }
}

/// The hidden-until-filled result box under each input surface.
pub fn render_result_box(id: &'static str, fragment: Option<&Fragment>) -> Html {
    let Some(fragment) = fragment else {
        return html! {};
    };
    html! {
        <div id={id} class="result-box">
            <h3>{"Analysis result"}</h3>
            <div id={format!("{id}-content")} class="result-content">
                { render_fragment(fragment) }
            </div>
        </div>
    }
}

//! Pure rendering: verdicts and history in, escaped render trees out.
//!
//! Renderers never perform I/O and never touch UI state. They build `Node`
//! trees; `to_html` and the frontend's virtual DOM both escape every string.

mod history;
mod node;
mod results;

pub use history::{HistoryPanel, render_history};
pub use node::{Element, Fragment, Node, Tag, to_html};
pub use results::{render_bulk, render_image, render_result, render_site, render_text};

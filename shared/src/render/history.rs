use chrono::FixedOffset;

use crate::model::HistoryEntry;

use super::node::{Element, Fragment, Node, Tag};

/// What the history list area currently shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum HistoryPanel {
    #[default]
    Loading,
    Empty,
    Entries { items: Vec<HistoryEntry>, total: Option<u64> },
    Failed,
}

impl HistoryPanel {
    pub fn from_items(items: Vec<HistoryEntry>, total: Option<u64>) -> Self {
        if items.is_empty() { HistoryPanel::Empty } else { HistoryPanel::Entries { items, total } }
    }

    /// Number of logged requests, preferring the service's own count.
    pub fn count(&self) -> Option<u64> {
        match self {
            HistoryPanel::Entries { items, total } => Some(total.unwrap_or(items.len() as u64)),
            HistoryPanel::Empty => Some(0),
            HistoryPanel::Loading | HistoryPanel::Failed => None,
        }
    }
}

pub fn render_history(panel: &HistoryPanel, zone: FixedOffset) -> Fragment {
    match panel {
        HistoryPanel::Loading => vec![
            Element::new(Tag::P)
                .class("loading")
                .child(Element::new(Tag::Span).class("spinner"))
                .child(" Loading history...")
                .into(),
        ],
        HistoryPanel::Empty => vec![placeholder("History is empty")],
        HistoryPanel::Failed => vec![placeholder("Error loading history")],
        HistoryPanel::Entries { items, .. } => {
            items.iter().map(|entry| history_card(entry, zone).into()).collect()
        }
    }
}

fn placeholder(text: &str) -> Node {
    Element::new(Tag::P).class("loading").child(text).into()
}

fn history_card(entry: &HistoryEntry, zone: FixedOffset) -> Element {
    let kind = Element::new(Tag::Span).class("history-type").child(entry.request_type.label());
    let time = Element::new(Tag::Span).class("history-time").child(entry.timestamp.localized(zone));
    let header = Element::new(Tag::Div).class("history-item-header").child(kind).child(time);
    let content = Element::new(Tag::Div)
        .class("history-content")
        .child(labelled("Request:", &entry.request_summary))
        .child(labelled("Result:", &entry.response_summary));
    Element::new(Tag::Div).class("history-item").child(header).child(content)
}

fn labelled(label: &str, text: &str) -> Element {
    Element::new(Tag::P)
        .child(Element::new(Tag::Strong).child(label))
        .child(" ")
        .child(text)
}

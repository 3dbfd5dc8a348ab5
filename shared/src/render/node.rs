use strum_macros::{AsRefStr, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Tag {
    Div,
    P,
    H4,
    Ul,
    Li,
    Span,
    Strong,
    Code,
    A,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: Tag,
    pub class: Option<&'static str>,
    /// Only set on `Tag::A`; links always open in a new tab.
    pub href: Option<String>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self { tag, class: None, href: None, children: Vec::new() }
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Element(Element),
}

pub type Fragment = Vec<Node>;

impl Node {
    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                element.children.iter().for_each(|child| child.collect_text(out))
            }
        }
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => escape_into(text, out),
            Node::Element(element) => {
                let tag = element.tag.as_ref();
                out.push('<');
                out.push_str(tag);
                if let Some(class) = element.class {
                    out.push_str(" class=\"");
                    escape_into(class, out);
                    out.push('"');
                }
                if let Some(href) = &element.href {
                    out.push_str(" href=\"");
                    escape_into(href, out);
                    out.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\"");
                }
                out.push('>');
                element.children.iter().for_each(|child| child.write_html(out));
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// Serializes a fragment to markup, escaping all text and attribute values.
pub fn to_html(nodes: &[Node]) -> String {
    let mut out = String::new();
    nodes.iter().for_each(|node| node.write_html(&mut out));
    out
}

fn escape_into(raw: &str, out: &mut String) {
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

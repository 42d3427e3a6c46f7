//! Typed markup tree and its HTML serialization.

use std::fmt::Write as _;

/// Elements written without a closing tag.
const VOID_ELEMENTS: &[&str] = &["img", "br", "hr", "meta", "link", "input"];

/// Attributes whose values are URLs.
const URL_ATTRIBUTES: &[&str] = &["href", "src", "poster", "action"];

/// A node of rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element.
    Element(Element),
    /// Text, escaped on output.
    Text(String),
}

impl Node {
    /// Text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Serialize to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&escape_html(text)),
            Node::Element(el) => el.write_html(out),
        }
    }

    /// The element, if this is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// An element with attributes, inline style and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name.
    pub tag: &'static str,
    /// Attributes in output order.
    pub attrs: Vec<(String, String)>,
    /// Inline style declarations in output order.
    pub style: Vec<(&'static str, String)>,
    /// Child nodes.
    pub children: Vec<Node>,
}

impl Element {
    /// Empty element.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            style: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Add one style declaration.
    pub fn css(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.style.push((property, value.into()));
        self
    }

    /// Add several style declarations.
    pub fn css_all(mut self, declarations: impl IntoIterator<Item = (&'static str, String)>) -> Self {
        self.style.extend(declarations);
        self
    }

    /// Add a child.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Add several children.
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Add a text child.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::text(text))
    }

    /// Value of attribute `name`.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            let value = if URL_ATTRIBUTES.contains(&name.as_str()) {
                sanitize_url(value)
            } else {
                value.as_str()
            };
            let _ = write!(out, " {}=\"{}\"", name, escape_html(value));
        }
        if !self.style.is_empty() {
            let css = self
                .style
                .iter()
                .filter_map(|(property, value)| {
                    let value = sanitize_css_value(value);
                    if value.is_none() {
                        tracing::debug!(property, "dropping unsafe style value");
                    }
                    value.map(|value| format!("{property}:{value}"))
                })
                .collect::<Vec<_>>()
                .join(";");
            if !css.is_empty() {
                let _ = write!(out, " style=\"{}\"", escape_html(&css));
            }
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// Escape text for use in HTML content and quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Replace script-capable URLs with `#`.
///
/// `javascript:` and `vbscript:` are always rejected; `data:` only passes for
/// images. Scheme matching ignores case and embedded whitespace.
pub fn sanitize_url(url: &str) -> &str {
    let scheme: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .take(16)
        .collect::<String>()
        .to_ascii_lowercase();

    let unsafe_scheme = scheme.starts_with("javascript:")
        || scheme.starts_with("vbscript:")
        || (scheme.starts_with("data:") && !scheme.starts_with("data:image/"));
    if unsafe_scheme { "#" } else { url }
}

/// A style value, or `None` when it could break out of its declaration.
///
/// Rejects declaration and block delimiters, CSS escapes, and the `url(` and
/// `expression(` functions.
pub fn sanitize_css_value(value: &str) -> Option<&str> {
    if value.contains([';', '{', '}', '\\', '<', '>']) {
        return None;
    }
    let folded: String = value
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();
    if folded.contains("url(") || folded.contains("expression(") {
        return None;
    }
    Some(value)
}

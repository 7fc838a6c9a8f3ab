#![forbid(unsafe_code)]

//! Visual tree produced by widgets.
//!
//! A [`Node`] is either an [`Element`] (tag, classes, attributes, children)
//! or a text run. Trees are plain data: build them, inspect them in tests,
//! and serialize them with [`Node::to_html`].
//!
//! # Invariants
//!
//! 1. Text and attribute values are HTML-escaped on output; tags and
//!    attribute names are static and emitted as-is.
//! 2. Void elements (`img`, `br`, ...) never get children or a closing tag.
//! 3. The `class` attribute is written first and omitted when empty.

use std::fmt::Write as _;

use mjtile_style::ClassList;

const VOID_TAGS: [&str; 6] = ["area", "br", "hr", "img", "input", "meta"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text(_) => None,
        }
    }

    /// First element with `tag`, depth-first, including `self`.
    #[must_use]
    pub fn find(&self, tag: &str) -> Option<&Element> {
        let el = self.as_element()?;
        if el.tag == tag {
            return Some(el);
        }
        el.children.iter().find_map(|child| child.find(tag))
    }

    /// Concatenated text of this subtree.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
        }
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(&escape(text)),
            Self::Element(el) => el.write_html(out),
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    classes: ClassList,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    #[must_use]
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: ClassList::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn classes(mut self, classes: impl Into<ClassList>) -> Self {
        self.classes.extend(classes.into());
        self
    }

    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Appends a child. Ignored for void elements.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        if !self.is_void() {
            self.children.push(child.into());
        }
        self
    }

    #[must_use]
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    #[must_use]
    pub fn class_list(&self) -> &ClassList {
        &self.classes
    }

    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    #[must_use]
    pub fn is_void(&self) -> bool {
        VOID_TAGS.contains(&self.tag)
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&self.classes.to_string()));
        }
        for (name, value) in &self.attrs {
            let _ = write!(out, " {name}=\"{}\"", escape(value));
        }
        out.push('>');
        if self.is_void() {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn escape(value: &str) -> String {
    v_htmlescape::escape(value).to_string()
}

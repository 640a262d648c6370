//! The HBML element tree.
//!
//! An [`Element`] owns its attributes and children outright, so a tree can only be
//! assembled top-down by insertion and never shares a node between two parents.
//! Rendering walks the tree and produces the indented nested-tag text form:
//!
//! ```
//! use hbml::Element;
//!
//! let mut root = Element::with_label("Server");
//! root.add_attribute("region", "eu");
//! root.add_element("Host", "alpha");
//! root.add_element("Port", "8080");
//!
//! assert_eq!(
//!     root.render(),
//!     "<Server region=\"eu\">\n    <Host>alpha</Host>\n    <Port>8080</Port>\n</Server>"
//! );
//! ```

mod map;

pub use map::UniqueMap;

use std::fmt;

/// Spaces emitted per nesting level.
pub const INDENT_WIDTH: usize = 4;

/// A labeled node with an optional value, attributes, and child elements.
///
/// Attribute names and child labels are unique within one element. Adding a
/// duplicate is rejected with `false` and leaves the stored entry as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    label: String,
    value: String,
    attributes: UniqueMap<String>,
    children: UniqueMap<Self>,
}

impl Element {
    /// An element with an empty label and no value.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_value(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    /// The tag name. Fixed at construction since it keys the element inside its parent.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the text payload.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Adds an attribute unless one with the same name already exists.
    pub fn add_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        self.attributes.insert_if_absent(name, value.into())
    }

    /// The stored value for `name`. An attribute stored with an empty value yields `Some("")`.
    #[must_use]
    pub fn attribute_value(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }

    /// Attributes as `(name, value)` pairs in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name, value.as_str()))
    }

    /// Builds a leaf child from `label` and `value` and inserts it.
    ///
    /// Returns `false` when a sibling with the same label exists; the new child is discarded.
    pub fn add_element(&mut self, label: impl Into<String>, value: impl Into<String>) -> bool {
        self.add_child(Self::with_value(label, value))
    }

    /// Inserts a pre-built element keyed by its own label.
    pub fn add_child(&mut self, element: Self) -> bool {
        let label = element.label.clone();
        self.children.insert_if_absent(label, element)
    }

    #[must_use]
    pub fn child_element(&self, label: &str) -> Option<&Self> {
        self.children.get(label)
    }

    /// Mutable access to a stored child so its own attributes and children can be extended.
    #[must_use]
    pub fn child_element_mut(&mut self, label: &str) -> Option<&mut Self> {
        self.children.get_mut(label)
    }

    /// The value of the child labeled `label`, or `None` when there is no such child.
    #[must_use]
    pub fn child_element_value(&self, label: &str) -> Option<&str> {
        self.children.get(label).map(Self::value)
    }

    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Child elements in insertion order.
    pub fn children(&self) -> impl Iterator<Item = &Self> {
        self.children.values()
    }

    /// Renders the element and its subtree as HBML text.
    ///
    /// Pure: the same tree always renders to the same string.
    ///
    /// Rendering recurses once per nesting level, so a chain nested deeper than the
    /// thread's stack allows (on the order of 100,000 levels with the default 8 MiB main
    /// stack) aborts with a stack overflow. Dropping such a tree recurses the same way.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, 0);
        out
    }

    fn render_into(&self, out: &mut String, depth: usize) {
        // Nested fragments start on their own line; the root never starts with a blank one.
        if depth > 0 {
            out.push('\n');
        }

        push_indent(out, depth);
        out.push('<');
        out.push_str(&self.label);
        for (name, value) in self.attributes.iter() {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
        out.push('>');

        let has_children = self.has_children();

        if !self.value.trim().is_empty() {
            if has_children {
                out.push('\n');
                push_indent(out, depth + 1);
            }
            out.push_str(&self.value);
        }

        if has_children {
            for child in self.children.values() {
                child.render_into(out, depth + 1);
            }
            out.push('\n');
            push_indent(out, depth);
        }

        out.push_str("</");
        out.push_str(&self.label);
        out.push('>');
    }
}

fn push_indent(out: &mut String, depth: usize) {
    out.extend(std::iter::repeat_n(' ', depth * INDENT_WIDTH));
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

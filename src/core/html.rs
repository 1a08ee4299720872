// src/core/html.rs
//! Markup reader.
//!
//! A thin query surface over a lenient HTML5 tree. Extractors in `specs` only
//! see [`Markup`] and [`Tag`]; the parser crate stays behind this file.
//!
//! All lookups return `Option`/empty iterators on absence. Unclosed tags,
//! stray end tags and missing attributes are absorbed by the tree builder.
//! Tag and attribute names are matched ASCII case-insensitively.

use scraper::{ElementRef, Html};

/// One parsed response body. Each extractor call builds its own.
pub struct Markup {
    doc: Html,
}

impl Markup {
    pub fn parse(raw: &str) -> Self {
        Self { doc: Html::parse_document(raw) }
    }

    /// Parse markup that may be a bare run of `<tr>`/`<td>` rows.
    ///
    /// The HTML5 tree builder discards table parts found outside a table, so a
    /// body without any `<table` is wrapped in one first.
    pub fn parse_table_rows(raw: &str) -> Self {
        if raw.to_ascii_lowercase().contains("<table") {
            Self::parse(raw)
        } else {
            Self::parse(&format!("<table>{raw}</table>"))
        }
    }

    pub fn root(&self) -> Tag<'_> {
        Tag { el: self.doc.root_element() }
    }

    /// First element named `name`, in document order.
    pub fn first(&self, name: &str) -> Option<Tag<'_>> {
        self.root().first(name)
    }

    /// First element named `name` whose `attr` equals `value` exactly.
    pub fn first_where(&self, name: &str, attr: &str, value: &str) -> Option<Tag<'_>> {
        self.root().first_where(name, attr, value)
    }

    pub fn all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = Tag<'a>> + 'a {
        self.root().all(name)
    }
}

/// A borrowed element inside a [`Markup`] tree.
#[derive(Clone, Copy)]
pub struct Tag<'a> {
    el: ElementRef<'a>,
}

impl<'a> Tag<'a> {
    pub fn name(&self) -> &'a str {
        self.el.value().name()
    }

    /// Descendants named `name` (self excluded), in document order.
    pub fn all(self, name: &'a str) -> impl Iterator<Item = Tag<'a>> + 'a {
        let own = self.el.id();
        self.el
            .descendants()
            .filter(move |n| n.id() != own)
            .filter_map(ElementRef::wrap)
            .filter(move |el| el.value().name().eq_ignore_ascii_case(name))
            .map(|el| Tag { el })
    }

    pub fn first(&self, name: &str) -> Option<Tag<'a>> {
        let own = self.el.id();
        self.el
            .descendants()
            .filter(|n| n.id() != own)
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().name().eq_ignore_ascii_case(name))
            .map(|el| Tag { el })
    }

    pub fn first_where(&self, name: &str, attr: &str, value: &str) -> Option<Tag<'a>> {
        let own = self.el.id();
        self.el
            .descendants()
            .filter(|n| n.id() != own)
            .filter_map(ElementRef::wrap)
            .find(|el| {
                el.value().name().eq_ignore_ascii_case(name)
                    && attr_of(el, attr) == Some(value)
            })
            .map(|el| Tag { el })
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        attr_of(&self.el, name)
    }

    pub fn attr_or(&self, name: &str, default: &'a str) -> &'a str {
        self.attr(name).unwrap_or(default)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// True when the element has no child nodes at all (`<td></td>`).
    pub fn is_empty(&self) -> bool {
        !self.el.has_children()
    }

    /// Concatenated text of every descendant text node.
    pub fn text(&self) -> String {
        self.el.text().collect()
    }

    /// Content of the first text or element child; comments are skipped.
    ///
    /// A text child is returned as-is; an element child yields its full text.
    /// `None` when the element has neither.
    pub fn first_child_text(&self) -> Option<String> {
        self.el.children().find_map(|child| {
            if let Some(text) = child.value().as_text() {
                return Some(String::from(&**text));
            }
            ElementRef::wrap(child).map(|el| el.text().collect())
        })
    }

    /// Outer HTML, mostly for log lines.
    pub fn html(&self) -> String {
        self.el.html()
    }
}

fn attr_of<'a>(el: &ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value()
        .attrs()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v)
}

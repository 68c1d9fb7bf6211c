//! HTML tree building and serialization.
//!
//! Callers assemble a tree of [`Tag`] values, then serialize it with
//! [`Tag::render`] (compact) or [`Tag::render_pretty`] (indented).
//! Escaping happens when values enter the tree, never at render time,
//! so rendering is a pure, repeatable serialization of finished state.

pub mod builder;
pub mod escape;
pub mod tags;

use std::collections::HashSet;

use kstring::KString;
use lazy_static::lazy_static;

use crate::escape::{escape_attribute, escape_content};

/// Document type declaration collaborators prepend to a rendered page.
pub const DOCTYPE: &str = "<!DOCTYPE html>\n";

const INDENT: &str = "  ";

lazy_static! {
    static ref SELF_CLOSING_TAGS: HashSet<&'static str> =
        ["img", "br", "hr", "input", "meta", "link", "embed"]
            .into_iter()
            .collect();
}

/// Whether `name` renders as `<name ... />`, with no body and no
/// closing tag.
pub fn is_self_closing(name: &str) -> bool {
    SELF_CLOSING_TAGS.contains(name)
}

/// An attribute key/value pair. The value is finalized at
/// construction time (escaped or stored verbatim) and emitted as-is
/// by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    key: KString,
    value: KString,
}

impl Attribute {
    /// An attribute whose value is escaped. The default for
    /// caller-supplied free text (`href`, `alt`, meta content, ...).
    pub fn new(key: &str, value: &str) -> Attribute {
        Attribute {
            key: KString::from_ref(key),
            value: KString::from_string(escape_attribute(value)),
        }
    }

    /// An attribute whose value is stored verbatim. For
    /// library-controlled values (a merged `class` list, `charset`,
    /// an inline `style` with intentional quoting) where re-escaping
    /// would corrupt already-safe syntax.
    pub fn unescaped(key: &str, value: &str) -> Attribute {
        Attribute {
            key: KString::from_ref(key),
            value: KString::from_ref(value),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// One element in the markup tree: a fixed name, attributes in append
/// order (duplicates allowed), child tags, and optional text content.
///
/// Mutators take and return `self` so trees can be built by chaining:
///
/// ```
/// use whtml::Tag;
/// let p = Tag::new("p").add_class("lead").set_content("Hello");
/// assert_eq!(p.render(), "<p class=\"lead\">Hello</p>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    name: KString,
    attributes: Vec<Attribute>,
    children: Vec<Tag>,
    content: Option<KString>,
}

impl Tag {
    pub fn new(name: &str) -> Tag {
        Tag {
            name: KString::from_ref(name),
            attributes: Vec::new(),
            children: Vec::new(),
            content: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn children(&self) -> &[Tag] {
        &self.children
    }

    /// The stored (already escaped-or-not) text content.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Append an attribute. Duplicate keys are kept and all emitted;
    /// helpers needing replace semantics remove matching keys first.
    pub fn add_attribute(mut self, attribute: Attribute) -> Tag {
        self.attributes.push(attribute);
        self
    }

    /// Append an attribute with an escaped value.
    pub fn set_attribute(self, key: &str, value: &str) -> Tag {
        self.add_attribute(Attribute::new(key, value))
    }

    pub fn add_child(mut self, child: Tag) -> Tag {
        self.children.push(child);
        self
    }

    pub fn add_children(mut self, children: impl IntoIterator<Item = Tag>) -> Tag {
        self.children.extend(children);
        self
    }

    /// Set the text content, escaped. Overwrites any previous content.
    pub fn set_content(mut self, content: &str) -> Tag {
        self.content = Some(KString::from_string(escape_content(content)));
        self
    }

    /// Set the text content verbatim, for pre-escaped or trusted text
    /// (script bodies, markup-free literals).
    pub fn set_raw_content(mut self, content: &str) -> Tag {
        self.content = Some(KString::from_ref(content));
        self
    }

    /// Add a CSS class, merging with an existing `class` attribute
    /// with a single joining space.
    pub fn add_class(mut self, class_name: &str) -> Tag {
        if let Some(pos) = self.attributes.iter().position(|a| a.key() == "class") {
            let merged = format!("{} {}", self.attributes[pos].value(), class_name);
            self.attributes[pos] = Attribute::unescaped("class", &merged);
        } else {
            self.attributes.push(Attribute::unescaped("class", class_name));
        }
        self
    }

    pub fn add_classes<'a>(mut self, class_names: impl IntoIterator<Item = &'a str>) -> Tag {
        for class_name in class_names {
            self = self.add_class(class_name);
        }
        self
    }

    /// Set the `id` attribute, replacing any existing one.
    pub fn set_id(mut self, id: &str) -> Tag {
        self.attributes.retain(|a| a.key() != "id");
        self.attributes.push(Attribute::unescaped("id", id));
        self
    }

    /// Set the inline `style` attribute, replacing any existing one.
    /// Stored verbatim; style strings may contain quoting of their own.
    pub fn set_style(mut self, style: &str) -> Tag {
        self.attributes.retain(|a| a.key() != "style");
        self.attributes.push(Attribute::unescaped("style", style));
        self
    }

    /// Set the ARIA `role` attribute, replacing any existing one.
    pub fn set_role(mut self, role: &str) -> Tag {
        self.attributes.retain(|a| a.key() != "role");
        self.attributes.push(Attribute::unescaped("role", role));
        self
    }

    /// Append a `data-*` attribute; `key` is given without the prefix.
    pub fn data_attribute(self, key: &str, value: &str) -> Tag {
        self.add_attribute(Attribute::new(&format!("data-{}", key), value))
    }

    pub fn data_attributes<'a>(
        mut self,
        data: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Tag {
        for (key, value) in data {
            self = self.data_attribute(key, value);
        }
        self
    }

    /// Append an `aria-*` attribute; `key` is given without the prefix.
    pub fn aria_attribute(self, key: &str, value: &str) -> Tag {
        self.add_attribute(Attribute::new(&format!("aria-{}", key), value))
    }

    pub fn aria_attributes<'a>(
        mut self,
        aria: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Tag {
        for (key, value) in aria {
            self = self.aria_attribute(key, value);
        }
        self
    }

    /// Serialize to a compact, single-line string.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out, false, 0);
        out
    }

    /// Serialize with two-space indentation per nesting level. Nodes
    /// without child tags stay on one line.
    pub fn render_pretty(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out, true, 0);
        out
    }

    fn write_html(&self, out: &mut String, pretty: bool, depth: usize) {
        out.push('<');
        out.push_str(&self.name);
        for attribute in &self.attributes {
            out.push(' ');
            out.push_str(attribute.key());
            out.push_str("=\"");
            out.push_str(attribute.value());
            out.push('"');
        }

        if is_self_closing(&self.name) {
            // Children and content on a self-closing tag are a caller
            // mistake; they are ignored, not an error.
            out.push_str(" />");
            return;
        }

        out.push('>');
        if pretty && !self.children.is_empty() {
            out.push('\n');
            if let Some(content) = &self.content {
                push_indent(out, depth + 1);
                out.push_str(content);
                out.push('\n');
            }
            for child in &self.children {
                push_indent(out, depth + 1);
                child.write_html(out, true, depth + 1);
                out.push('\n');
            }
            push_indent(out, depth);
        } else {
            if let Some(content) = &self.content {
                out.push_str(content);
            }
            for child in &self.children {
                child.write_html(out, false, depth);
            }
        }
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::{img, p};

    #[test]
    fn t_basic_render() {
        let tag = Tag::new("p")
            .add_attribute(Attribute::new("class", "text"))
            .set_content("Hello, World!");
        assert_eq!(tag.render(), "<p class=\"text\">Hello, World!</p>");
    }

    #[test]
    fn t_render_is_idempotent() {
        let tag = Tag::new("div")
            .set_content("a & b")
            .add_child(Tag::new("span").set_content("x"));
        assert_eq!(tag.render(), tag.render());
        assert_eq!(tag.render_pretty(), tag.render_pretty());
    }

    #[test]
    fn t_content_escaped_once_at_set_time() {
        let tag = Tag::new("p").set_content("<script>alert('XSS')</script>");
        assert_eq!(
            tag.content(),
            Some("&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;&#x2F;script&gt;")
        );
        assert_eq!(
            tag.render(),
            "<p>&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;&#x2F;script&gt;</p>"
        );
    }

    #[test]
    fn t_raw_content_stored_verbatim() {
        let tag = Tag::new("script").set_raw_content("if (a < b) { go(); }");
        assert_eq!(tag.render(), "<script>if (a < b) { go(); }</script>");
    }

    #[test]
    fn t_set_content_overwrites() {
        let tag = Tag::new("p").set_content("first").set_content("second");
        assert_eq!(tag.render(), "<p>second</p>");
    }

    #[test]
    fn t_attribute_value_escaped_at_construction() {
        let a = Attribute::new("alt", "Tom & \"Jerry\"");
        assert_eq!(a.value(), "Tom &amp; &quot;Jerry&quot;");
        let raw = Attribute::unescaped("style", "font-family: \"Fira\"");
        assert_eq!(raw.value(), "font-family: \"Fira\"");
    }

    #[test]
    fn t_duplicate_attributes_are_kept() {
        let tag = Tag::new("div")
            .set_attribute("rel", "a")
            .set_attribute("rel", "b");
        assert_eq!(tag.render(), "<div rel=\"a\" rel=\"b\"></div>");
    }

    #[test]
    fn t_self_closing_tags() {
        for name in ["img", "br", "hr", "input", "meta", "link", "embed"] {
            let rendered = Tag::new(name).render();
            assert!(rendered.ends_with(" />"), "{rendered:?}");
            assert!(!rendered.contains("</"), "{rendered:?}");
        }
        assert!(!is_self_closing("div"));
    }

    #[test]
    fn t_self_closing_ignores_children_and_content() {
        let tag = Tag::new("br")
            .set_content("ignored")
            .add_child(Tag::new("span"));
        assert_eq!(tag.render(), "<br />");
        assert_eq!(tag.render_pretty(), "<br />");
    }

    #[test]
    fn t_attribute_order_extras_before_injected() {
        let tag = img("a.png", Some("x"), [Attribute::new("width", "1")]);
        assert_eq!(tag.render(), "<img width=\"1\" src=\"a.png\" alt=\"x\" />");
    }

    #[test]
    fn t_class_merge() {
        let tag = Tag::new("div").add_class("a").add_class("b");
        assert_eq!(tag.render(), "<div class=\"a b\"></div>");
        let multi = Tag::new("div").add_classes(["flex", "items-center"]);
        assert_eq!(multi.render(), "<div class=\"flex items-center\"></div>");
    }

    #[test]
    fn t_set_id_replaces() {
        let tag = Tag::new("div").set_id("one").set_id("two");
        assert_eq!(tag.render(), "<div id=\"two\"></div>");
    }

    #[test]
    fn t_set_style_and_role_replace() {
        let tag = Tag::new("div")
            .set_style("color: red;")
            .set_style("color: blue;")
            .set_role("navigation");
        assert_eq!(
            tag.render(),
            "<div style=\"color: blue;\" role=\"navigation\"></div>"
        );
    }

    #[test]
    fn t_data_and_aria_attributes() {
        let tag = Tag::new("button")
            .data_attribute("toggle", "modal")
            .aria_attribute("label", "Close");
        assert_eq!(
            tag.render(),
            "<button data-toggle=\"modal\" aria-label=\"Close\"></button>"
        );
    }

    #[test]
    fn t_content_then_children_in_document_order() {
        let tag = Tag::new("div")
            .set_content("lead")
            .add_child(Tag::new("span").set_content("x"));
        assert_eq!(tag.render(), "<div>lead<span>x</span></div>");
    }

    #[test]
    fn t_pretty_childless_is_single_line() {
        let tag = Tag::new("div").set_raw_content("Hello World");
        assert_eq!(tag.render_pretty(), "<div>Hello World</div>");
    }

    #[test]
    fn t_pretty_with_children() {
        let tag = Tag::new("div").add_children([p("Paragraph 1"), p("Paragraph 2")]);
        assert_eq!(
            tag.render_pretty(),
            "<div>\n  <p>Paragraph 1</p>\n  <p>Paragraph 2</p>\n</div>"
        );
        assert_eq!(tag.render(), "<div><p>Paragraph 1</p><p>Paragraph 2</p></div>");
    }

    #[test]
    fn t_pretty_indent_accumulates() {
        let tag = Tag::new("ul")
            .add_child(Tag::new("li").add_child(Tag::new("span").set_content("x")));
        assert_eq!(
            tag.render_pretty(),
            "<ul>\n  <li>\n    <span>x</span>\n  </li>\n</ul>"
        );
    }
}

//! The tag catalog: one factory function per element, each a thin
//! specialization of [`Tag::new`] with a fixed name and, where the
//! element has mandatory attributes, those injected.
//!
//! Constructors that inject attributes and also accept extra ones
//! place the extras ahead of the injected ones, so
//! `img("a.png", Some("x"), [Attribute::new("width", "1")])` renders
//! as `<img width="1" src="a.png" alt="x" />`.
//!
//! Injected values whose syntax the library controls (`charset`, meta
//! `name`/`property`, `http-equiv`, script `type`, `datetime`) are
//! stored unescaped; caller-supplied free text is escaped.

use crate::{Attribute, Tag};

fn with_children(name: &str, children: impl IntoIterator<Item = Tag>) -> Tag {
    Tag::new(name).add_children(children)
}

fn with_content(name: &str, content: &str) -> Tag {
    if content.is_empty() {
        Tag::new(name)
    } else {
        Tag::new(name).set_content(content)
    }
}

// Document structure

pub fn head(children: impl IntoIterator<Item = Tag>) -> Tag {
    with_children("head", children)
}

pub fn body(children: impl IntoIterator<Item = Tag>) -> Tag {
    with_children("body", children)
}

pub fn title(content: &str) -> Tag {
    with_content("title", content)
}

// Sectioning

pub fn article(children: impl IntoIterator<Item = Tag>) -> Tag {
    with_children("article", children)
}

pub fn aside(children: impl IntoIterator<Item = Tag>) -> Tag {
    with_children("aside", children)
}

pub fn div(children: impl IntoIterator<Item = Tag>) -> Tag {
    with_children("div", children)
}

pub fn footer(children: impl IntoIterator<Item = Tag>) -> Tag {
    with_children("footer", children)
}

pub fn header(children: impl IntoIterator<Item = Tag>) -> Tag {
    with_children("header", children)
}

/// The `<main>` element. Named `main_tag` to keep call sites readable
/// next to `fn main`.
pub fn main_tag(children: impl IntoIterator<Item = Tag>) -> Tag {
    with_children("main", children)
}

pub fn nav(children: impl IntoIterator<Item = Tag>) -> Tag {
    with_children("nav", children)
}

pub fn section(children: impl IntoIterator<Item = Tag>) -> Tag {
    with_children("section", children)
}

// Headings and text

pub fn h1(content: &str) -> Tag {
    with_content("h1", content)
}

pub fn h2(content: &str) -> Tag {
    with_content("h2", content)
}

pub fn h3(content: &str) -> Tag {
    with_content("h3", content)
}

pub fn h4(content: &str) -> Tag {
    with_content("h4", content)
}

pub fn h5(content: &str) -> Tag {
    with_content("h5", content)
}

pub fn h6(content: &str) -> Tag {
    with_content("h6", content)
}

pub fn p(content: &str) -> Tag {
    with_content("p", content)
}

pub fn span(content: &str) -> Tag {
    with_content("span", content)
}

pub fn mark(content: &str) -> Tag {
    with_content("mark", content)
}

pub fn figure(children: impl IntoIterator<Item = Tag>) -> Tag {
    with_children("figure", children)
}

pub fn figcaption(content: &str) -> Tag {
    with_content("figcaption", content)
}

/// `<time>`; `datetime` is the machine-readable value, `content` the
/// human-readable text.
pub fn time(datetime: Option<&str>, content: &str) -> Tag {
    let mut tag = with_content("time", content);
    if let Some(datetime) = datetime {
        tag = tag.add_attribute(Attribute::unescaped("datetime", datetime));
    }
    tag
}

// Links and media

pub fn a(href: &str, content: &str) -> Tag {
    with_content("a", content).add_attribute(Attribute::new("href", href))
}

pub fn img(
    src: &str,
    alt: Option<&str>,
    attributes: impl IntoIterator<Item = Attribute>,
) -> Tag {
    let mut tag = Tag::new("img");
    for attribute in attributes {
        tag = tag.add_attribute(attribute);
    }
    tag = tag.add_attribute(Attribute::new("src", src));
    if let Some(alt) = alt {
        tag = tag.add_attribute(Attribute::new("alt", alt));
    }
    tag
}

pub fn link(
    href: &str,
    rel: &str,
    attributes: impl IntoIterator<Item = Attribute>,
) -> Tag {
    let mut tag = Tag::new("link");
    for attribute in attributes {
        tag = tag.add_attribute(attribute);
    }
    tag.add_attribute(Attribute::new("href", href))
        .add_attribute(Attribute::new("rel", rel))
}

pub fn embed(
    src: &str,
    mime_type: &str,
    attributes: impl IntoIterator<Item = Attribute>,
) -> Tag {
    let mut tag = Tag::new("embed");
    for attribute in attributes {
        tag = tag.add_attribute(attribute);
    }
    tag.add_attribute(Attribute::new("src", src))
        .add_attribute(Attribute::new("type", mime_type))
}

pub fn br() -> Tag {
    Tag::new("br")
}

pub fn hr() -> Tag {
    Tag::new("hr")
}

// Metadata

pub fn meta_name(
    name: &str,
    content: &str,
    attributes: impl IntoIterator<Item = Attribute>,
) -> Tag {
    let mut tag = Tag::new("meta");
    for attribute in attributes {
        tag = tag.add_attribute(attribute);
    }
    tag.add_attribute(Attribute::unescaped("name", name))
        .add_attribute(Attribute::new("content", content))
}

/// Open-Graph-style meta tag (`property="og:..."`).
pub fn meta_property(
    property: &str,
    content: &str,
    attributes: impl IntoIterator<Item = Attribute>,
) -> Tag {
    let mut tag = Tag::new("meta");
    for attribute in attributes {
        tag = tag.add_attribute(attribute);
    }
    tag.add_attribute(Attribute::unescaped("property", property))
        .add_attribute(Attribute::new("content", content))
}

pub fn meta_charset(charset: &str) -> Tag {
    Tag::new("meta").add_attribute(Attribute::unescaped("charset", charset))
}

pub fn meta_http_equiv(http_equiv: &str, content: &str) -> Tag {
    Tag::new("meta")
        .add_attribute(Attribute::unescaped("http-equiv", http_equiv))
        .add_attribute(Attribute::new("content", content))
}

// Scripting and code

/// `<script type="text/javascript">`; the body is stored verbatim,
/// since escaping would corrupt the script text.
pub fn script(content: Option<&str>) -> Tag {
    script_typed("text/javascript", content)
}

pub fn script_typed(mime_type: &str, content: Option<&str>) -> Tag {
    let mut tag =
        Tag::new("script").add_attribute(Attribute::unescaped("type", mime_type));
    if let Some(content) = content {
        tag = tag.set_raw_content(content);
    }
    tag
}

pub fn code(content: &str) -> Tag {
    with_content("code", content)
}

pub fn pre(content: &str) -> Tag {
    with_content("pre", content)
}

// Lists

pub fn ul(children: impl IntoIterator<Item = Tag>) -> Tag {
    with_children("ul", children)
}

pub fn ol(children: impl IntoIterator<Item = Tag>) -> Tag {
    with_children("ol", children)
}

pub fn li(content: &str) -> Tag {
    with_content("li", content)
}

pub fn dl(children: impl IntoIterator<Item = Tag>) -> Tag {
    with_children("dl", children)
}

pub fn dt(content: &str) -> Tag {
    with_content("dt", content)
}

pub fn dd(content: &str) -> Tag {
    with_content("dd", content)
}

// Tables

pub fn table(children: impl IntoIterator<Item = Tag>) -> Tag {
    with_children("table", children)
}

pub fn tr(children: impl IntoIterator<Item = Tag>) -> Tag {
    with_children("tr", children)
}

pub fn th(content: &str) -> Tag {
    with_content("th", content)
}

pub fn td(content: &str) -> Tag {
    with_content("td", content)
}

// Forms

pub fn form(children: impl IntoIterator<Item = Tag>) -> Tag {
    with_children("form", children)
}

pub fn fieldset(children: impl IntoIterator<Item = Tag>) -> Tag {
    with_children("fieldset", children)
}

pub fn input(
    input_type: &str,
    name: &str,
    value: Option<&str>,
    attributes: impl IntoIterator<Item = Attribute>,
) -> Tag {
    let mut tag = Tag::new("input");
    for attribute in attributes {
        tag = tag.add_attribute(attribute);
    }
    tag = tag
        .add_attribute(Attribute::new("type", input_type))
        .add_attribute(Attribute::new("name", name));
    if let Some(value) = value {
        tag = tag.add_attribute(Attribute::new("value", value));
    }
    tag
}

pub fn label(for_id: &str, content: &str) -> Tag {
    with_content("label", content).add_attribute(Attribute::new("for", for_id))
}

pub fn select(name: &str, children: impl IntoIterator<Item = Tag>) -> Tag {
    with_children("select", children).add_attribute(Attribute::new("name", name))
}

pub fn option(value: &str, content: &str) -> Tag {
    with_content("option", content).add_attribute(Attribute::new("value", value))
}

pub fn textarea(name: &str, content: &str) -> Tag {
    with_content("textarea", content).add_attribute(Attribute::new("name", name))
}

pub fn button(content: &str) -> Tag {
    with_content("button", content).add_attribute(Attribute::new("type", "button"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::document;

    #[test]
    fn t_simple_page() {
        let doc = document([div([
            p("This is a paragraph."),
            img("image.png", Some("An image"), []),
        ])]);
        assert_eq!(
            doc.render(),
            "<html><div><p>This is a paragraph.</p>\
             <img src=\"image.png\" alt=\"An image\" /></div></html>"
        );
    }

    #[test]
    fn t_img_extra_attributes_come_first() {
        let tag = img(
            "image.png",
            Some("An image"),
            [Attribute::new("width", "100"), Attribute::new("height", "100")],
        );
        assert_eq!(
            tag.render(),
            "<img width=\"100\" height=\"100\" src=\"image.png\" alt=\"An image\" />"
        );
    }

    #[test]
    fn t_structural_tags() {
        let doc = document([
            head([
                meta_name("description", "A description of the page", []),
                link("styles.css", "stylesheet", []),
            ]),
            body([
                header([nav([a("#home", "Home"), a("#about", "About")])]),
                main_tag([p("Welcome to our website!")]),
                footer([p("© 2024 Company, Inc.")]),
            ]),
        ]);
        assert_eq!(
            doc.render(),
            "<html><head>\
             <meta name=\"description\" content=\"A description of the page\" />\
             <link href=\"styles.css\" rel=\"stylesheet\" /></head>\
             <body><header><nav>\
             <a href=\"#home\">Home</a><a href=\"#about\">About</a>\
             </nav></header>\
             <main><p>Welcome to our website!</p></main>\
             <footer><p>© 2024 Company, Inc.</p></footer></body></html>"
        );
    }

    #[test]
    fn t_table() {
        let tag = table([
            tr([th("Header 1"), th("Header 2")]),
            tr([td("Cell 1"), td("Cell 2")]),
        ])
        .add_class("table");
        assert_eq!(
            tag.render(),
            "<table class=\"table\">\
             <tr><th>Header 1</th><th>Header 2</th></tr>\
             <tr><td>Cell 1</td><td>Cell 2</td></tr></table>"
        );
    }

    #[test]
    fn t_lists() {
        let tag = ul([li("Item 1"), li("Item 2")]).add_class("unordered-list");
        assert_eq!(
            tag.render(),
            "<ul class=\"unordered-list\"><li>Item 1</li><li>Item 2</li></ul>"
        );
        let description = dl([dt("Term 1"), dd("Description 1")]);
        assert_eq!(
            description.render(),
            "<dl><dt>Term 1</dt><dd>Description 1</dd></dl>"
        );
    }

    #[test]
    fn t_form_elements() {
        let tag = form([
            label("email", "Email"),
            input("text", "email", None, []),
            select("plan", [option("a", "Plan A"), option("b", "Plan B")]),
            textarea("comments", ""),
            button("Send"),
        ]);
        assert_eq!(
            tag.render(),
            "<form><label for=\"email\">Email</label>\
             <input type=\"text\" name=\"email\" />\
             <select name=\"plan\">\
             <option value=\"a\">Plan A</option>\
             <option value=\"b\">Plan B</option></select>\
             <textarea name=\"comments\"></textarea>\
             <button type=\"button\">Send</button></form>"
        );
    }

    #[test]
    fn t_input_with_value() {
        let tag = input("hidden", "csrf", Some("tok&1"), []);
        assert_eq!(
            tag.render(),
            "<input type=\"hidden\" name=\"csrf\" value=\"tok&amp;1\" />"
        );
    }

    #[test]
    fn t_meta_variants() {
        assert_eq!(
            meta_charset("UTF-8").render(),
            "<meta charset=\"UTF-8\" />"
        );
        assert_eq!(
            meta_property("og:title", "My Page", []).render(),
            "<meta property=\"og:title\" content=\"My Page\" />"
        );
        assert_eq!(
            meta_http_equiv("refresh", "30").render(),
            "<meta http-equiv=\"refresh\" content=\"30\" />"
        );
    }

    #[test]
    fn t_script_content_is_verbatim() {
        let tag = script(Some("if (a < b) alert('hi');"));
        assert_eq!(
            tag.render(),
            "<script type=\"text/javascript\">if (a < b) alert('hi');</script>"
        );
    }

    #[test]
    fn t_time() {
        assert_eq!(
            time(Some("2024-01-15"), "January 15").render(),
            "<time datetime=\"2024-01-15\">January 15</time>"
        );
        assert_eq!(time(None, "soon").render(), "<time>soon</time>");
    }

    #[test]
    fn t_href_is_escaped() {
        let tag = a("/search?q=a&b", "Search");
        assert_eq!(tag.render(), "<a href=\"/search?q=a&amp;b\">Search</a>");
    }
}

//! RSS 2.0 feed generation for blogs and content sites.

use std::fmt::Write;

use crate::xml::escape_xml;

/// One entry in the feed. `pub_date` is expected in RFC 822 format
/// (see `chrono`'s `to_rfc2822`).
#[derive(Debug, Clone)]
pub struct RssItem {
    pub title: String,
    pub link: String,
    pub description: String,
    pub pub_date: String,
    /// Globally unique identifier; the item link is used when absent.
    pub guid: Option<String>,
    pub author: Option<String>,
    pub categories: Vec<String>,
}

impl RssItem {
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        description: impl Into<String>,
        pub_date: impl Into<String>,
    ) -> RssItem {
        RssItem {
            title: title.into(),
            link: link.into(),
            description: description.into(),
            pub_date: pub_date.into(),
            guid: None,
            author: None,
            categories: Vec::new(),
        }
    }
}

/// Channel-level feed data; `generate` produces the XML document.
#[derive(Debug, Clone)]
pub struct RssFeed {
    pub title: String,
    pub link: String,
    pub description: String,
    pub language: Option<String>,
    pub copyright: Option<String>,
    pub managing_editor: Option<String>,
    pub webmaster: Option<String>,
}

impl RssFeed {
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        description: impl Into<String>,
    ) -> RssFeed {
        RssFeed {
            title: title.into(),
            link: link.into(),
            description: description.into(),
            language: None,
            copyright: None,
            managing_editor: None,
            webmaster: None,
        }
    }

    /// Generate the RSS 2.0 XML for the given items, in order.
    pub fn generate(&self, items: &[RssItem]) -> String {
        let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<rss version=\"2.0\" xmlns:atom=\"http://www.w3.org/2005/Atom\">\n");
        xml.push_str("  <channel>\n");
        let _ = writeln!(xml, "    <title>{}</title>", escape_xml(&self.title));
        let _ = writeln!(xml, "    <link>{}</link>", escape_xml(&self.link));
        let _ = writeln!(
            xml,
            "    <description>{}</description>",
            escape_xml(&self.description)
        );
        let _ = writeln!(
            xml,
            "    <atom:link href=\"{}/feed.xml\" rel=\"self\" type=\"application/rss+xml\" />",
            escape_xml(&self.link)
        );

        if let Some(language) = &self.language {
            let _ = writeln!(xml, "    <language>{}</language>", escape_xml(language));
        }
        if let Some(copyright) = &self.copyright {
            let _ = writeln!(xml, "    <copyright>{}</copyright>", escape_xml(copyright));
        }
        if let Some(managing_editor) = &self.managing_editor {
            let _ = writeln!(
                xml,
                "    <managingEditor>{}</managingEditor>",
                escape_xml(managing_editor)
            );
        }
        if let Some(webmaster) = &self.webmaster {
            let _ = writeln!(xml, "    <webMaster>{}</webMaster>", escape_xml(webmaster));
        }

        for item in items {
            xml.push_str("    <item>\n");
            let _ = writeln!(xml, "      <title>{}</title>", escape_xml(&item.title));
            let _ = writeln!(xml, "      <link>{}</link>", escape_xml(&item.link));
            let _ = writeln!(
                xml,
                "      <description>{}</description>",
                escape_xml(&item.description)
            );
            let _ = writeln!(xml, "      <pubDate>{}</pubDate>", escape_xml(&item.pub_date));
            let guid = item.guid.as_deref().unwrap_or(&item.link);
            let _ = writeln!(
                xml,
                "      <guid isPermaLink=\"true\">{}</guid>",
                escape_xml(guid)
            );
            if let Some(author) = &item.author {
                let _ = writeln!(xml, "      <author>{}</author>", escape_xml(author));
            }
            for category in &item.categories {
                let _ = writeln!(xml, "      <category>{}</category>", escape_xml(category));
            }
            xml.push_str("    </item>\n");
        }

        xml.push_str("  </channel>\n");
        xml.push_str("</rss>");
        xml
    }
}

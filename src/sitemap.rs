//! XML sitemap generation (sitemaps.org protocol 0.9).

use std::fmt::Write;

use kstring::KString;

use crate::xml::escape_xml;

/// One `<url>` entry.
#[derive(Debug, Clone)]
pub struct SitemapUrl {
    pub loc: String,
    /// Last modification date, ISO 8601.
    pub lastmod: Option<KString>,
    /// "always", "hourly", "daily", "weekly", "monthly", "yearly" or
    /// "never". Not validated; search engines treat it as a hint.
    pub changefreq: Option<KString>,
    /// Relative priority, 0.0 to 1.0.
    pub priority: Option<f64>,
}

impl SitemapUrl {
    pub fn new(loc: impl Into<String>) -> SitemapUrl {
        SitemapUrl {
            loc: loc.into(),
            lastmod: None,
            changefreq: None,
            priority: None,
        }
    }

    pub fn lastmod(mut self, lastmod: &str) -> SitemapUrl {
        self.lastmod = Some(KString::from_ref(lastmod));
        self
    }

    pub fn changefreq(mut self, changefreq: &str) -> SitemapUrl {
        self.changefreq = Some(KString::from_ref(changefreq));
        self
    }

    pub fn priority(mut self, priority: f64) -> SitemapUrl {
        self.priority = Some(priority);
        self
    }
}

/// Generate a sitemap for the given URLs, in order.
pub fn generate(urls: &[SitemapUrl]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for url in urls {
        xml.push_str("  <url>\n");
        let _ = writeln!(xml, "    <loc>{}</loc>", escape_xml(&url.loc));
        if let Some(lastmod) = &url.lastmod {
            let _ = writeln!(xml, "    <lastmod>{}</lastmod>", escape_xml(lastmod));
        }
        if let Some(changefreq) = &url.changefreq {
            let _ = writeln!(
                xml,
                "    <changefreq>{}</changefreq>",
                escape_xml(changefreq)
            );
        }
        if let Some(priority) = url.priority {
            let _ = writeln!(xml, "    <priority>{}</priority>", priority);
        }
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>");
    xml
}

/// Generate a sitemap index referencing other sitemap files.
pub fn generate_index(sitemaps: &[(String, Option<String>)]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<sitemapindex xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for (loc, lastmod) in sitemaps {
        xml.push_str("  <sitemap>\n");
        let _ = writeln!(xml, "    <loc>{}</loc>", escape_xml(loc));
        if let Some(lastmod) = lastmod {
            let _ = writeln!(xml, "    <lastmod>{}</lastmod>", escape_xml(lastmod));
        }
        xml.push_str("  </sitemap>\n");
    }
    xml.push_str("</sitemapindex>");
    xml
}

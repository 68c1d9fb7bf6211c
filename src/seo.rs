//! Bundles of SEO meta tags: common page metadata, Open Graph and
//! Twitter Cards.

use whtml::tags::{meta_charset, meta_name, meta_property};
use whtml::Tag;

pub const DEFAULT_VIEWPORT: &str = "width=device-width, initial-scale=1.0";
pub const DEFAULT_ROBOTS: &str = "index, follow";

/// Open Graph meta tags for social media sharing. `og_type` is
/// usually "website" or "article".
pub fn open_graph(
    title: &str,
    description: &str,
    image: &str,
    url: &str,
    og_type: &str,
    site_name: Option<&str>,
) -> Vec<Tag> {
    let mut tags = vec![
        meta_property("og:title", title, []),
        meta_property("og:description", description, []),
        meta_property("og:image", image, []),
        meta_property("og:url", url, []),
        meta_property("og:type", og_type, []),
    ];
    if let Some(site_name) = site_name {
        tags.push(meta_property("og:site_name", site_name, []));
    }
    tags
}

/// Open Graph tags for an article, with the optional article:*
/// properties. Times are ISO 8601.
pub fn open_graph_article(
    title: &str,
    description: &str,
    image: &str,
    url: &str,
    author: Option<&str>,
    published_time: Option<&str>,
    modified_time: Option<&str>,
) -> Vec<Tag> {
    let mut tags = open_graph(title, description, image, url, "article", None);
    if let Some(author) = author {
        tags.push(meta_property("article:author", author, []));
    }
    if let Some(published_time) = published_time {
        tags.push(meta_property("article:published_time", published_time, []));
    }
    if let Some(modified_time) = modified_time {
        tags.push(meta_property("article:modified_time", modified_time, []));
    }
    tags
}

/// Twitter Card meta tags. `card` is usually "summary" or
/// "summary_large_image".
pub fn twitter_card(
    title: &str,
    description: &str,
    image: &str,
    card: &str,
    site: Option<&str>,
    creator: Option<&str>,
) -> Vec<Tag> {
    let mut tags = vec![
        meta_name("twitter:card", card, []),
        meta_name("twitter:title", title, []),
        meta_name("twitter:description", description, []),
        meta_name("twitter:image", image, []),
    ];
    if let Some(site) = site {
        tags.push(meta_name("twitter:site", site, []));
    }
    if let Some(creator) = creator {
        tags.push(meta_name("twitter:creator", creator, []));
    }
    tags
}

/// The common head metadata: charset, viewport, description, robots,
/// and optionally keywords and author.
pub fn common(description: &str, keywords: &[&str], author: Option<&str>) -> Vec<Tag> {
    let mut tags = vec![
        meta_charset("UTF-8"),
        meta_name("viewport", DEFAULT_VIEWPORT, []),
        meta_name("description", description, []),
        meta_name("robots", DEFAULT_ROBOTS, []),
    ];
    if !keywords.is_empty() {
        tags.push(meta_name("keywords", &keywords.join(", "), []));
    }
    if let Some(author) = author {
        tags.push(meta_name("author", author, []));
    }
    tags
}

/// The complete set: common + Open Graph + Twitter Card.
pub fn complete(
    title: &str,
    description: &str,
    image: &str,
    url: &str,
    keywords: &[&str],
    author: Option<&str>,
    twitter_site: Option<&str>,
    twitter_creator: Option<&str>,
) -> Vec<Tag> {
    let mut tags = common(description, keywords, author);
    tags.extend(open_graph(title, description, image, url, "website", None));
    tags.extend(twitter_card(
        title,
        description,
        image,
        "summary_large_image",
        twitter_site,
        twitter_creator,
    ));
    tags
}

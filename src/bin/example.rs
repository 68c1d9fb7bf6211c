//! A small example site: two pages with a shared layout, a feed, a
//! sitemap and a robots.txt, written to an output directory.

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use winged::feed::{RssFeed, RssItem};
use winged::layout::Layout;
use winged::seo;
use winged::sitegen::SiteGenerator;
use winged::sitemap::{self, SitemapUrl};
use winged::whtml::builder::{document, opt};
use winged::whtml::tags::{
    a, body, div, footer, h1, h2, head, header, li, link, main_tag, nav, p, section,
    title, ul,
};
use winged::whtml::Tag;

#[derive(Parser, Debug)]
#[clap(name = "example", about = "Generate the example site")]
struct Opts {
    /// Output directory for the generated site
    #[clap(long, default_value = "./dist")]
    output: String,

    /// Compact output instead of indented
    #[clap(long)]
    compact: bool,
}

struct SiteLayout {
    site_name: &'static str,
    description: &'static str,
}

impl SiteLayout {
    fn page(&self, page_title: &str, current_page: &str, content: Tag) -> Tag {
        let nav_link = |href: &str, text: &str, page: &str| {
            let item = a(href, text);
            if page == current_page {
                item.add_class("active")
            } else {
                item
            }
        };
        let mut head_children = vec![title(&format!("{} | {}", page_title, self.site_name))];
        head_children.extend(seo::complete(
            page_title,
            self.description,
            "https://example.com/preview.png",
            "https://example.com/",
            &["rust", "html", "static site"],
            None,
            None,
            None,
        ));
        head_children.push(link("/css/main.css", "stylesheet", []));

        document([
            head(head_children),
            body([
                header([
                    h1(self.site_name),
                    nav([
                        nav_link("/", "Home", "home"),
                        nav_link("/about.html", "About", "about"),
                    ])
                    .set_role("navigation"),
                ]),
                self.render(content),
                footer([p(&format!("© {} {}", 2024, self.site_name))]),
            ]),
        ])
    }
}

impl Layout for SiteLayout {
    fn render(&self, content: Tag) -> Tag {
        main_tag([content]).add_class("container")
    }
}

fn home_page(layout: &SiteLayout, announcement: Option<&str>) -> Tag {
    layout.page(
        "Home",
        "home",
        div([
            section([
                h2("Welcome!"),
                p("This site is generated at build time."),
                opt(announcement.map(|text| p(text).add_class("announcement"))),
            ])
            .add_class("hero"),
            section([
                h2("Features"),
                ul([
                    li("Fast: HTML generation at build time"),
                    li("Secure: automatic XSS escaping"),
                    li("Typed: the tree is checked at compile time"),
                ]),
            ]),
        ]),
    )
}

fn about_page(layout: &SiteLayout) -> Tag {
    layout.page(
        "About",
        "about",
        div([section([h2("About"), p("A demo of the winged site generator.")])]),
    )
}

fn main() -> Result<()> {
    simple_logger::SimpleLogger::new().init()?;
    let opts = Opts::parse();

    let layout = SiteLayout {
        site_name: "My Site",
        description: "Site created with winged",
    };

    let generator = SiteGenerator::new(&opts.output);
    generator.clean(true)?;

    let pretty = !opts.compact;
    let home = home_page(&layout, Some("The feed moved to /feed.xml."));
    let about = about_page(&layout);
    generator.generate_multiple(
        &[(&home, "index.html"), (&about, "about.html")],
        pretty,
        true,
    )?;

    let now = Utc::now();
    let feed = RssFeed::new("My Site", "https://example.com", layout.description);
    let items = [RssItem::new(
        "Hello, world",
        "https://example.com/index.html",
        "The site is live.",
        now.to_rfc2822(),
    )];
    generator.write_file(&feed.generate(&items), "feed.xml")?;

    let today = now.format("%Y-%m-%d").to_string();
    let urls = [
        SitemapUrl::new("https://example.com/")
            .lastmod(&today)
            .changefreq("weekly")
            .priority(1.0),
        SitemapUrl::new("https://example.com/about.html")
            .lastmod(&today)
            .changefreq("monthly")
            .priority(0.8),
    ];
    generator.write_file(&sitemap::generate(&urls), "sitemap.xml")?;
    generator.write_file("User-agent: *\nAllow: /\n", "robots.txt")?;

    Ok(())
}

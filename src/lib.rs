//! Static site generation: SEO meta-tag bundles, RSS feed and XML
//! sitemap generators, layouts, and a file-writing site generator,
//! all on top of the `whtml` tree builder.

pub mod feed;
pub mod layout;
pub mod seo;
pub mod sitegen;
pub mod sitemap;
mod xml;

pub use whtml;

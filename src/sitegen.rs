//! Writing rendered pages and assets to an output directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use log::info;
use whtml::{Tag, DOCTYPE};

/// Generates static files under a fixed output directory. Path and
/// encoding concerns live here; rendering stays in `whtml`.
pub struct SiteGenerator {
    output_directory: PathBuf,
}

impl SiteGenerator {
    pub fn new(output_directory: impl Into<PathBuf>) -> SiteGenerator {
        SiteGenerator {
            output_directory: output_directory.into(),
        }
    }

    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    /// Render `page` and write it to `path` (relative to the output
    /// directory), optionally indented and with a doctype line
    /// prepended. Parent directories are created as needed.
    pub fn generate(&self, page: &Tag, path: &str, pretty: bool, doctype: bool) -> Result<()> {
        let mut html = String::new();
        if doctype {
            html.push_str(DOCTYPE);
        }
        if pretty {
            html.push_str(&page.render_pretty());
        } else {
            html.push_str(&page.render());
        }
        self.write_file(&html, path)
    }

    /// Generate several pages with shared pretty/doctype settings.
    pub fn generate_multiple(
        &self,
        pages: &[(&Tag, &str)],
        pretty: bool,
        doctype: bool,
    ) -> Result<()> {
        for (page, path) in pages {
            self.generate(page, path, pretty, doctype)?;
        }
        Ok(())
    }

    /// Write verbatim text to `path` (robots.txt, sitemap.xml, ...).
    pub fn write_file(&self, content: &str, path: &str) -> Result<()> {
        let full_path = self.output_directory.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).with_context(
                || anyhow!("can't create directory: {:?}", parent.to_string_lossy()))?;
        }
        fs::write(&full_path, content).with_context(
            || anyhow!("can't write file: {:?}", full_path.to_string_lossy()))?;
        info!("wrote {}", full_path.to_string_lossy());
        Ok(())
    }

    /// Copy a file or directory (recursively) into the output
    /// directory, replacing any existing destination.
    pub fn copy_asset(&self, source: impl AsRef<Path>, destination: &str) -> Result<()> {
        let source = source.as_ref();
        let destination_path = self.output_directory.join(destination);
        if let Some(parent) = destination_path.parent() {
            fs::create_dir_all(parent).with_context(
                || anyhow!("can't create directory: {:?}", parent.to_string_lossy()))?;
        }
        if destination_path.exists() {
            remove_any(&destination_path)?;
        }
        copy_any(source, &destination_path)?;
        info!(
            "copied {} to {}",
            source.to_string_lossy(),
            destination_path.to_string_lossy()
        );
        Ok(())
    }

    /// Remove the output directory, and recreate it (empty) unless
    /// `create_directory` is false.
    pub fn clean(&self, create_directory: bool) -> Result<()> {
        if self.output_directory.exists() {
            fs::remove_dir_all(&self.output_directory).with_context(
                || anyhow!("can't remove directory: {:?}",
                           self.output_directory.to_string_lossy()))?;
        }
        if create_directory {
            fs::create_dir_all(&self.output_directory).with_context(
                || anyhow!("can't create directory: {:?}",
                           self.output_directory.to_string_lossy()))?;
        }
        Ok(())
    }
}

fn remove_any(path: &Path) -> Result<()> {
    let meta = fs::metadata(path).with_context(
        || anyhow!("can't stat: {:?}", path.to_string_lossy()))?;
    if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
    .with_context(|| anyhow!("can't remove: {:?}", path.to_string_lossy()))
}

fn copy_any(from: &Path, to: &Path) -> Result<()> {
    let meta = fs::metadata(from).with_context(
        || anyhow!("can't stat: {:?}", from.to_string_lossy()))?;
    if meta.is_dir() {
        fs::create_dir_all(to).with_context(
            || anyhow!("can't create directory: {:?}", to.to_string_lossy()))?;
        for entry in fs::read_dir(from).with_context(
            || anyhow!("can't open directory for reading: {:?}",
                       from.to_string_lossy()))?
        {
            let entry = entry.with_context(
                || anyhow!("reading directory: {:?}", from.to_string_lossy()))?;
            copy_any(&entry.path(), &to.join(entry.file_name()))?;
        }
    } else {
        fs::copy(from, to).with_context(
            || anyhow!("can't copy {:?} to {:?}",
                       from.to_string_lossy(), to.to_string_lossy()))?;
    }
    Ok(())
}

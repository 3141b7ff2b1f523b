//! Renders the site to disk.
//!
//! The deals listing lands at `<out>/index.html`, each product page at
//! `<out>/products/<slug>/index.html`. Image assets are referenced by path
//! and served by the hosting layer; nothing is copied here.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use page_leptos::{render_deals_page, render_product_page, ScriptAssets};
use tracing::{debug, info};

use crate::{catalog, specs};

/// What to export and where.
#[derive(Clone, Debug, Default)]
pub struct ExportOptions {
    /// Output directory; created if missing.
    pub out_dir: PathBuf,
    /// Product slugs to render. Empty means the whole catalog. The deals
    /// listing always covers the full catalog.
    pub slugs: Vec<String>,
    /// Optional `page-wasm` module paths embedded into the pages.
    pub assets: ScriptAssets,
}

/// What an export produced.
#[derive(Clone, Debug)]
pub struct ExportSummary {
    /// Pages written, listing included.
    pub pages_written: usize,
    /// Resolved output directory.
    pub out_dir: PathBuf,
}

/// Render the deals listing and the selected product pages.
pub fn export_site(options: &ExportOptions) -> Result<ExportSummary> {
    let products = catalog::products();

    let selected: Vec<_> = if options.slugs.is_empty() {
        products.clone()
    } else {
        let mut selected = Vec::with_capacity(options.slugs.len());
        for slug in &options.slugs {
            match products.iter().find(|product| &product.slug == slug) {
                Some(product) => selected.push(product.clone()),
                None => bail!("unknown product slug {slug:?}"),
            }
        }
        selected
    };

    let mut pages_written = 0;

    let listing = render_deals_page(&products, &options.assets);
    write_page(&options.out_dir.join("index.html"), &listing)?;
    info!(path = %options.out_dir.join("index.html").display(), "wrote deals listing");
    pages_written += 1;

    for product in &selected {
        let spec = specs::for_product(product);
        let html = render_product_page(&spec, &options.assets);
        let path = options
            .out_dir
            .join("products")
            .join(&spec.slug)
            .join("index.html");
        write_page(&path, &html)?;
        info!(slug = %spec.slug, path = %path.display(), "wrote product page");
        pages_written += 1;
    }

    Ok(ExportSummary {
        pages_written,
        out_dir: options.out_dir.clone(),
    })
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    debug!(bytes = html.len(), path = %path.display(), "writing page");
    fs::write(path, html).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exports_the_whole_site() {
        let dir = tempfile::tempdir().unwrap();
        let summary = export_site(&ExportOptions {
            out_dir: dir.path().to_path_buf(),
            ..Default::default()
        })
        .unwrap();

        // Listing plus six product pages
        assert_eq!(summary.pages_written, 7);
        assert!(dir.path().join("index.html").exists());
        for slug in ["grigora", "jodian", "restreamer", "document-insights", "email-verifier", "ai-agents"] {
            let page = dir.path().join("products").join(slug).join("index.html");
            assert!(page.exists(), "{slug}");
        }

        let listing = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(listing.starts_with("<!DOCTYPE html>"));
        assert!(listing.contains("/products/ai-agents/"));
    }

    #[test]
    fn exports_a_single_product() {
        let dir = tempfile::tempdir().unwrap();
        let summary = export_site(&ExportOptions {
            out_dir: dir.path().to_path_buf(),
            slugs: vec!["email-verifier".into()],
            ..Default::default()
        })
        .unwrap();

        assert_eq!(summary.pages_written, 2);
        assert!(dir
            .path()
            .join("products/email-verifier/index.html")
            .exists());
        assert!(!dir.path().join("products/ai-agents/index.html").exists());
    }

    #[test]
    fn unknown_slug_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = export_site(&ExportOptions {
            out_dir: dir.path().to_path_buf(),
            slugs: vec!["no-such-product".into()],
            ..Default::default()
        })
        .unwrap_err();

        assert!(err.to_string().contains("no-such-product"));
    }
}

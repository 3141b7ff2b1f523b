//! Adople AI Marketplace - catalog data and static site exporter.
//!
//! This crate owns everything product-specific: the compile-time catalog,
//! the per-product page specifications, the validation pass, and the
//! exporter that renders the whole site to disk through
//! [`page_leptos`].
//!
//! The `storefront` binary is a thin CLI over these modules:
//!
//! ```bash
//! storefront build --out dist     # render every page
//! storefront list --json          # dump the catalog
//! storefront check                # validate catalog + specs
//! ```

pub mod catalog;
pub mod check;
pub mod export;
pub mod specs;

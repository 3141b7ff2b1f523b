//! End-to-End CLI tests for the storefront exporter.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command pointing to the storefront binary
fn storefront() -> Command {
    cargo_bin_cmd!("storefront")
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        storefront()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("storefront"))
            .stdout(predicate::str::contains("build"))
            .stdout(predicate::str::contains("check"));
    }

    #[test]
    fn shows_version() {
        storefront()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

// ============================================
// Build Tests
// ============================================

mod build {
    use super::*;

    #[test]
    fn writes_listing_and_all_product_pages() {
        let out = TempDir::new().unwrap();

        storefront()
            .args(["build", "--out"])
            .arg(out.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Wrote 7 pages"));

        assert!(out.path().join("index.html").exists());
        for slug in [
            "grigora",
            "jodian",
            "restreamer",
            "document-insights",
            "email-verifier",
            "ai-agents",
        ] {
            assert!(
                out.path().join("products").join(slug).join("index.html").exists(),
                "missing page for {slug}"
            );
        }
    }

    #[test]
    fn product_pages_carry_their_pricing_tables() {
        let out = TempDir::new().unwrap();

        storefront()
            .args(["build", "--product", "ai-agents", "--out"])
            .arg(out.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Wrote 2 pages"));

        let html =
            std::fs::read_to_string(out.path().join("products/ai-agents/index.html")).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("License Tier 4"));
        assert!(html.contains("$999"));
        assert!(html.contains("Custom AI assistants"));
        assert!(html.contains("data-carousel="));
    }

    #[test]
    fn rejects_unknown_product_slug() {
        let out = TempDir::new().unwrap();

        storefront()
            .args(["build", "--product", "no-such-product", "--out"])
            .arg(out.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("no-such-product"));
    }
}

// ============================================
// List Tests
// ============================================

mod list {
    use super::*;

    #[test]
    fn prints_catalog_table() {
        storefront()
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("email-verifier"))
            .stdout(predicate::str::contains("AI Agents"));
    }

    #[test]
    fn json_output_round_trips() {
        let output = storefront().args(["list", "--json"]).output().unwrap();
        assert!(output.status.success());

        let products: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let products = products.as_array().unwrap();
        assert_eq!(products.len(), 6);
        assert!(products
            .iter()
            .any(|p| p["slug"] == "ai-agents" && p["price"] == 99));
        // Published schema field names
        assert!(products[0]["compareAt"].is_number());
    }
}

// ============================================
// Check Tests
// ============================================

mod check {
    use super::*;

    #[test]
    fn shipped_catalog_passes() {
        storefront()
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("OK"));
    }
}

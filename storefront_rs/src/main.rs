//! `storefront` - static site exporter for the Adople AI Marketplace.
//!
//! ```bash
//! storefront build --out dist            # render every page
//! storefront build --product ai-agents   # just one product (plus listing)
//! storefront list --json                 # dump the catalog
//! storefront check                       # validate catalog + page specs
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use page_leptos::ScriptAssets;
use tracing::info;

use storefront::export::{export_site, ExportOptions};
use storefront::{catalog, check};

#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "Static site exporter for the Adople AI Marketplace")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the deals listing and product pages to disk
    Build {
        /// Output directory
        #[arg(long, default_value = "dist")]
        out: PathBuf,
        /// Limit the build to specific product slugs (repeatable)
        #[arg(long = "product")]
        products: Vec<String>,
        /// Path to the page-wasm JS glue, when bundling the module
        #[arg(long, requires = "wasm_module")]
        wasm_glue: Option<String>,
        /// Path to the page-wasm .wasm binary
        #[arg(long, requires = "wasm_glue")]
        wasm_module: Option<String>,
    },
    /// Print the product catalog
    List {
        /// JSON output (for piping)
        #[arg(long)]
        json: bool,
    },
    /// Validate the catalog and every page spec
    Check,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[storefront] Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout stays clean for --json piping
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    match cli.command {
        Command::Build {
            out,
            products,
            wasm_glue,
            wasm_module,
        } => {
            info!(
                "storefront v{} building to {}",
                env!("CARGO_PKG_VERSION"),
                out.display()
            );
            let assets = ScriptAssets {
                wasm_glue_path: wasm_glue.unwrap_or_default(),
                wasm_module_path: wasm_module.unwrap_or_default(),
            };
            let summary = export_site(&ExportOptions {
                out_dir: out,
                slugs: products,
                assets,
            })?;
            println!(
                "Wrote {} pages to {}",
                summary.pages_written,
                summary.out_dir.display()
            );
            Ok(ExitCode::SUCCESS)
        }
        Command::List { json } => {
            let products = catalog::products();
            if json {
                println!("{}", serde_json::to_string_pretty(&products)?);
            } else {
                for product in &products {
                    println!(
                        "{:<20} {:<20} ${:<5} {}",
                        product.slug, product.kind, product.price, product.name
                    );
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Check => {
            let findings = check::check_site();
            if findings.is_empty() {
                println!("OK: catalog and page specs pass all checks");
                Ok(ExitCode::SUCCESS)
            } else {
                for finding in &findings {
                    eprintln!("[storefront] {finding}");
                }
                eprintln!("[storefront] {} problem(s) found", findings.len());
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

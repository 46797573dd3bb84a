use clap::{Parser, Subcommand};
use logo_carousel::engine::{CarouselEngine, EngineOptions};
use logo_carousel::types::Item;
use logo_carousel::{catalog, config, output, render, script};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Where the carousel items come from. Defaults to the stock supplier list.
#[derive(clap::Args, Clone)]
struct ItemSource {
    /// Catalog file (.toml with [[items]] or .json array)
    #[arg(long, conflicts_with = "logos")]
    catalog: Option<PathBuf>,

    /// Directory of numbered logo files (010-Name.png, optional 010-Name.txt caption)
    #[arg(long)]
    logos: Option<PathBuf>,
}

impl ItemSource {
    fn load(&self) -> Result<Vec<Item>, catalog::CatalogError> {
        match (&self.catalog, &self.logos) {
            (Some(path), _) => catalog::load_catalog(path),
            (None, Some(dir)) => catalog::scan_logo_dir(dir),
            (None, None) => Ok(catalog::default_items()),
        }
    }
}

#[derive(Parser)]
#[command(name = "logo-carousel")]
#[command(about = "Responsive, auto-rotating logo carousel")]
#[command(long_about = "\
Responsive, auto-rotating logo carousel

Shows one, two or three logos depending on viewport width, wraps around at
either end, and advances automatically unless the pointer hovers it.

Page size tiers (configurable in config.toml):
  width >= 1024  → 3 items
  width >= 768   → 2 items
  otherwise      → 1 item

Event scripts for 'replay', one per line ('#' starts a comment):
  resize <px>   enter   leave   wait <ms>
  next   prev   jump <page>   teardown

Run 'logo-carousel gen-config' to print a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Site directory containing config.toml
    #[arg(long, default_value = ".", global = true)]
    site: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the carousel at a viewport width to a standalone HTML page
    Render {
        /// Viewport width in CSS pixels
        #[arg(long, default_value_t = 1280)]
        width: u32,

        /// Zero-based page to show (indicator dot navigation)
        #[arg(long)]
        page: Option<usize>,

        /// Output file
        #[arg(long, default_value = "dist/index.html")]
        output: PathBuf,

        #[command(flatten)]
        items: ItemSource,
    },
    /// Replay a script of host events and print the state after each
    Replay {
        /// Event script file
        script: PathBuf,

        /// Print steps as JSON instead of text
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        items: ItemSource,
    },
    /// Validate config and item catalog without rendering
    Check {
        #[command(flatten)]
        items: ItemSource,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Render {
            width,
            page,
            output: output_path,
            items,
        } => {
            let site_config = config::load_config(&cli.site)?;
            let mut engine = mount(items.load()?, &site_config);
            engine.apply_viewport_width(width);
            if let Some(page) = page {
                engine.jump_to_page(page);
            }
            if let Some(view) = engine.view() {
                render::write_document(&view, &site_config.labels, &output_path)?;
            }
            output::print_engine(&engine);
            println!("==> Wrote {}", output_path.display());
        }
        Command::Replay {
            script: script_path,
            json,
            items,
        } => {
            let site_config = config::load_config(&cli.site)?;
            let events = script::load_script(&script_path)?;
            let mut engine = mount(items.load()?, &site_config);
            let steps = script::replay(&mut engine, &events);
            if json {
                println!("{}", serde_json::to_string_pretty(&steps)?);
            } else {
                output::print_replay(&steps);
                output::print_engine(&engine);
            }
        }
        Command::Check { items } => {
            println!("==> Checking {}", config_location(&cli.site).display());
            config::load_config(&cli.site)?;
            let loaded = items.load()?;
            output::print_catalog(&loaded);
            println!("==> Config and catalog are valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn mount(items: Vec<Item>, site_config: &config::CarouselConfig) -> CarouselEngine {
    CarouselEngine::mount(items, EngineOptions::from(site_config))
}

fn config_location(site: &Path) -> PathBuf {
    site.join("config.toml")
}

/// Diagnostics go to stderr so they never mix with rendered output.
/// Filter with `RUST_LOG`, e.g. `RUST_LOG=logo_carousel=debug`.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "logo_carousel=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

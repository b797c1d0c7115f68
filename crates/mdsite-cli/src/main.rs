use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use mdsite::{SiteConfig, DEFAULT_CONFIG_FILE};

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(version, about = "Build a static site from Markdown pages and an HTML template")]
struct Cli {
    /// Configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Directory of Markdown pages
    #[arg(long)]
    content: Option<PathBuf>,

    /// Directory of static assets
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// Output directory (replaced on every build)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// HTML template
    #[arg(short, long)]
    template: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<SiteConfig> {
        let mut config = SiteConfig::load_from_path(&self.config)
            .with_context(|| format!("loading {}", self.config.display()))?
            .unwrap_or_default();

        if let Some(content) = self.content {
            config.content_dir = content;
        }
        if let Some(static_dir) = self.static_dir {
            config.static_dir = static_dir;
        }
        if let Some(output) = self.output {
            config.output_dir = output;
        }
        if let Some(template) = self.template {
            config.template = template;
        }

        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = Cli::parse().into_config()?;
    log::debug!("Using configuration {:?}", config);

    let report = mdsite::build(&config).context("site build failed")?;
    println!(
        "Created {} page(s) in {}",
        report.pages.len(),
        config.output_dir.display()
    );

    Ok(())
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use icon_codegen::{build, BuildConfig, Package};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "icon-codegen")]
#[command(about = "Generate framework components from SVG icons", version)]
struct Cli {
    /// Package to build
    #[arg(value_enum)]
    package: Package,

    /// JSON build configuration; flags below override its fields
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Directory holding one subdirectory per icon style
    #[arg(long)]
    icons: Option<PathBuf>,

    /// Directory receiving `<package>/<style>/` output trees
    #[arg(long)]
    out: Option<PathBuf>,

    /// Style subdirectory to build (repeatable)
    #[arg(long = "style")]
    styles: Vec<String>,

    /// Root attribute to turn into a component default (repeatable)
    #[arg(long = "attribute")]
    attributes: Vec<String>,

    /// Maximum number of icons processed at once per style
    #[arg(long)]
    concurrency: Option<usize>,

    /// Also write a barrel module per style
    #[arg(long)]
    index: bool,

    /// Print the configuration JSON schema and exit
    #[cfg(feature = "jsonschema")]
    #[arg(long)]
    print_schema: bool,

    /// Log every attribute removal and written file
    #[arg(long, short)]
    verbose: bool,
}

impl Cli {
    fn build_config(&self) -> Result<BuildConfig> {
        let mut config = match &self.config {
            Some(path) => BuildConfig::load(path)
                .with_context(|| format!("Can't load build config `{}`", path.display()))?,
            None => BuildConfig::default(),
        };

        if let Some(icons) = &self.icons {
            config = config.with_icons_root(icons);
        }
        if let Some(out) = &self.out {
            config = config.with_output_root(out);
        }
        if !self.styles.is_empty() {
            config = config.with_styles(self.styles.iter().cloned());
        }
        if !self.attributes.is_empty() {
            config = config.with_attributes(self.attributes.iter().cloned());
        }
        if let Some(concurrency) = self.concurrency {
            config = config.with_concurrency(concurrency);
        }
        if self.index {
            config = config.with_index(true);
        }
        Ok(config)
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "jsonschema")]
    if cli.print_schema {
        println!("{}", BuildConfig::json_schema()?);
        return Ok(());
    }

    init_tracing(cli.verbose);

    let config = cli.build_config()?;
    build(cli.package, &config)
        .await
        .with_context(|| format!("Failed to build {} package", cli.package))?;

    Ok(())
}

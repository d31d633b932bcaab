use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::ui::page::Page;

#[derive(Parser, Debug)]
#[command(name = "shopfront")]
#[command(about = "A terminal storefront: catalog, cart and profile")]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the catalog URL; an empty value disables fetching
    #[arg(long, value_name = "URL")]
    pub catalog_url: Option<String>,

    /// Page to open on start (home, products, cart, profile, demo)
    #[arg(long, value_name = "NAME")]
    pub page: Option<Page>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Fold command-line overrides into `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.catalog_url {
            config.catalog.url = url.clone();
        }
        if let Some(page) = self.page {
            config.ui.start_page = page;
        }
    }
}

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::info;

use shopfront::cli::Cli;
use shopfront::config::Config;
use shopfront::fetch::{FetchController, HttpRetriever};
use shopfront::logging::init_tracing;
use shopfront::storage::{FileStore, KeyValueStore};
use shopfront::ui::notification::NotificationCenter;
use shopfront::ui::{run, App};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::read_from(path),
        None => Config::read(),
    }
    .context("failed to load configuration")?;
    cli.apply(&mut config);
    config.validate().context("invalid configuration")?;

    if cli.print_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("shopfront-worker")
        .build()
        .context("failed to start async runtime")?;
    let handle = runtime.handle().clone();

    let storage_path = config
        .storage
        .path
        .clone()
        .unwrap_or_else(FileStore::default_path);
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(storage_path));

    let retriever = HttpRetriever::new(&config.http).context("failed to build HTTP client")?;
    let schema = config.catalog.schema.clone();
    let catalog = FetchController::with_parser(retriever, handle.clone(), move |body: &[u8]| {
        schema.parse(body)
    });
    let notifications = NotificationCenter::from_config(handle, &config.notifications);

    info!(version = env!("CARGO_PKG_VERSION"), url = %config.catalog.url, "starting");
    let mut app = App::new(&config, catalog, notifications, store);
    run(&mut app, config.ui.tick_rate())?;

    drop(app);
    runtime.shutdown_timeout(std::time::Duration::from_millis(500));
    Ok(())
}

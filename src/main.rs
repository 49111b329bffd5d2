use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use conduit_feed::api::{ArticleClient, ArticlesResponse, FetchCache};
use conduit_feed::cli::Cli;
use conduit_feed::config::{Config, ConfigStore};
use conduit_feed::feed::{feed_url, PageContext};
use conduit_feed::logging::init_tracing;
use conduit_feed::ui::app::App;
use conduit_feed::ui::runtime::run as run_ui;

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)?;
    let store = ConfigStore::new(config, config_path);
    if let Some(base) = &cli.api_base {
        store.update(|config| config.api.base_url = base.clone())?;
    }
    let config = store.get();
    let route = cli.route();

    if cli.print_url {
        println!("{}", feed_url(&config.api.base_url, &route, cli.page)?);
        return Ok(());
    }

    if let Some(path) = init_tracing(&config.logging) {
        tracing::info!(
            log = %path.display(),
            config = %store.path().display(),
            api = %config.api.base_url,
            route = %route.as_path(),
            "starting conduit-feed"
        );
    }

    let seed = cli.seed.as_deref().map(load_seed).transpose()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("conduit-fetch")
        .build()
        .context("failed to start async runtime")?;

    let client = ArticleClient::new(&config.api).context("failed to build HTTP client")?;
    let cache = FetchCache::new(
        Arc::new(client),
        runtime.handle().clone(),
        Duration::from_millis(config.api.dedupe_interval_ms),
    );

    let mut app = App::new(&config, route, cache, PageContext::new(cli.page));
    if let Some(seed) = seed {
        app = app.with_seed(seed);
    }

    run_ui(
        &mut app,
        Duration::from_millis(config.ui.tick_ms),
        runtime.handle(),
    )?;
    tracing::info!("conduit-feed exited");
    Ok(())
}

fn load_seed(path: &Path) -> anyhow::Result<ArticlesResponse> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file '{}'", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse seed file '{}'", path.display()))
}

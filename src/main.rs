use std::sync::Arc;

mod api;
mod auth;
mod config;
mod http;
mod logger;
mod server;
mod store;

use store::Catalog;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config".to_string());
    let cfg = config::Config::load_from(&config_path)?;
    logger::init(&cfg)?;

    // Tokio runtime, worker count from config or one per CPU core
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;

    let catalog = match cfg.store.seed_file.as_deref() {
        Some(path) => Catalog::from_file(path)?,
        None => Catalog::default(),
    };

    let listener = server::create_reusable_listener(addr)?;
    let shutdown = server::signal::start_signal_handler()?;
    let state = Arc::new(config::AppState::new(&cfg, catalog));

    logger::log_server_start(&addr, &cfg);

    // LocalSet for spawn_local support
    let local = tokio::task::LocalSet::new();
    local.run_until(server::run(listener, state, shutdown)).await;
    Ok(())
}

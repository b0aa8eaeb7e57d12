use anyhow::Context;
use log::info;
use santa_app::{
    FileVersionStore, LoggingIndexRefresher, SantaApplication, TokioExecutor, UpgradeDetector,
};
use santa_clock::{Clock, OffsettableClock};
use santa_config::{ConfigSource, RemoteConfig, keys};
use santa_tracker::{InMemoryRepository, TrackerService, TrackerStatus};
use std::sync::Arc;
use tokio::sync::watch;

/// Bumped with every release that needs the app index rebuilt
const VERSION_CODE: u32 = 1;

/// Usage: `santa [CONFIG_JSON] [ROUTE_JSON]`
///
/// With a route, the timeline keeps refreshing until Ctrl-C.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);

    let config = match args.next() {
        Some(path) => RemoteConfig::load_json_file(&path)
            .with_context(|| format!("loading config from {}", path))?,
        None => RemoteConfig::with_app_defaults(),
    };
    let config = Arc::new(config);

    let version_store =
        FileVersionStore::new(std::env::temp_dir().join("santa-tracker").join("version-code"));
    let app = SantaApplication::new(
        Arc::new(TokioExecutor::current()),
        Arc::new(UpgradeDetector::new(Arc::new(version_store), VERSION_CODE)),
        Arc::new(LoggingIndexRefresher::new()),
    );
    app.on_create();

    let clock: Arc<dyn Clock> = Arc::new(OffsettableClock::new(config.clone()));
    let now = clock.now_millis();
    info!(
        "Tracker time offset: {} ms",
        config.get_i64(keys::TIME_OFFSET.name).unwrap_or(0)
    );
    println!(
        "Tracker time: {}",
        clock.format_time(now).unwrap_or_else(|| "--:--".to_string())
    );

    if config.get_bool(keys::DISABLE_TRACKER.name).unwrap_or(false) {
        info!("Tracker disabled by remote config");
        return Ok(());
    }

    if let Some(path) = args.next() {
        let repo = InMemoryRepository::from_file(&path)
            .with_context(|| format!("loading route from {}", path))?;
        let service = TrackerService::new(Arc::new(repo), clock);
        let cards = service.refresh()?;
        let status = match service.status()? {
            TrackerStatus::NoRoute => "no route".to_string(),
            TrackerStatus::NotStarted { first } => {
                format!("waiting to leave {}", first.print_name())
            }
            TrackerStatus::Visiting(dest) => format!("visiting {}", dest.print_name()),
            TrackerStatus::InTransit { from, to } => {
                format!("flying from {} to {}", from.print_name(), to.print_name())
            }
            TrackerStatus::Finished { last } => format!("home after {}", last.print_name()),
        };
        println!("Santa is {}", status);
        println!("Presents delivered: {}", service.presents_delivered()?);
        println!("Timeline cards: {}", cards);

        // Keep the feed current until Ctrl-C
        let period = TrackerService::refresh_period(config.as_ref());
        let service = Arc::new(service);
        let mut observer = service.stream().subscribe();
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = service.clone().spawn_refresh_loop(period, shutdown_rx);

        loop {
            tokio::select! {
                res = observer.changed() => {
                    if res.is_err() {
                        break;
                    }
                    let count = observer.borrow_and_update().len();
                    println!("Timeline cards: {}", count);
                }
                res = tokio::signal::ctrl_c() => {
                    res.context("listening for Ctrl-C")?;
                    info!("Shutting down tracker");
                    break;
                }
            }
        }

        let _ = shutdown_tx.send(true);
        handle.await?;
    }

    Ok(())
}

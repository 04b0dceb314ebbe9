use backend::{connect_with_retries, database_url, dotenv_num, init_db};
use backend::ingest::{ingest_file, is_batch_file};
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| "backend=debug,ingest=debug".into()),
		)
		.with(tracing_subscriber::fmt::layer())
		.init();

	let landing_zone = PathBuf::from(
		dotenv::var("LANDING_ZONE").unwrap_or_else(|_| "landing_zone".into())
	);

	if !landing_zone.exists() {
		std::fs::create_dir_all(&landing_zone)?;
		tracing::info!("Created directory: {}", landing_zone.display());
	}

	let pool = connect_with_retries(&database_url(), dotenv_num!("DB_CONNECTIONS", 4, u32)).await?;

	init_db(&pool).await?;
	tracing::info!("Database tables initialized");

	// notify calls us back on its own thread, so hand paths over a channel
	// to the async side
	let (tx, mut rx) = mpsc::unbounded_channel::<PathBuf>();

	let mut watcher = RecommendedWatcher::new(move |res: notify::Result<Event>| {
		match res {
			Ok(event) => {
				if event.kind.is_create() || event.kind.is_modify() {
					for path in event.paths {
						if is_batch_file(&path) {
							let _ = tx.send(path);
						}
					}
				}
			}
			Err(e) => tracing::error!("Watch error: {e:?}"),
		}
	}, Config::default().with_poll_interval(Duration::from_secs(2)))?;

	watcher.watch(&landing_zone, RecursiveMode::NonRecursive)?;
	tracing::info!("Monitoring {} for new JSON files...", landing_zone.display());

	while let Some(path) = rx.recv().await {
		match ingest_file(&pool, &path).await {
			Ok(summary) => tracing::info!(
				"Successfully ingested {} records from {} ({} skipped)",
				summary.ingested,
				path.display(),
				summary.skipped
			),
			Err(err) => tracing::error!("Couldn't ingest {}: {err}", path.display()),
		}
	}

	Ok(())
}

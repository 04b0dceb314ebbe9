use axum::{routing::get, Router};
use backend::{connect_with_retries, database_url, dotenv_num, food_api, init_db};
use std::net::SocketAddr;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| "backend=debug,tower_http=info".into()),
		)
		.with(tracing_subscriber::fmt::layer())
		.init();

	let backend_port = dotenv_num!("BACKEND_PORT", 8000, u16);
	let num_connections = dotenv_num!("DB_CONNECTIONS", 16, u32);
	let static_dir = dotenv::var("STATIC_DIR").unwrap_or_else(|_| "dist".into());

	tracing::info!("Read .env...");

	let pool = connect_with_retries(&database_url(), num_connections).await?;

	init_db(&pool).await?;
	tracing::info!("Set up locations and foods tables in DB...");

	// Paths that match nothing else fall back to the app shell, so that
	// history-mode urls like /admin land in the client-side route table
	// instead of 404ing at the server.
	let index = Path::new(&static_dir).join("index.html");
	let spa = ServeDir::new(&static_dir).not_found_service(ServeFile::new(index));

	let app = Router::new()
		.route("/api/health", get(food_api::health))
		.route("/api/locations", get(food_api::get_locations))
		.route("/api/foods", get(food_api::get_foods))
		.fallback_service(spa)
		.with_state(pool);

	let addr = SocketAddr::from(([0, 0, 0, 0], backend_port));
	let listener = tokio::net::TcpListener::bind(addr).await?;

	tracing::info!("Serving axum on {addr}...");

	axum::serve(listener, app).await?;

	Ok(())
}

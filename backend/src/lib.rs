use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

pub mod food_api;
pub mod ingest;

/// Pull a numeric var out of .env, falling back if it's absent or garbled
#[macro_export]
macro_rules! dotenv_num {
	($key:expr, $default:expr, $type:ident) => {
		dotenv::var($key).ok()
			.and_then(|v| v.parse::<$type>().ok())
			.unwrap_or($default)
	}
}

/// Build the postgres url from the same env vars every service here uses
pub fn database_url() -> String {
	let user = dotenv::var("POSTGRES_USER").unwrap_or_else(|_| "postgres".into());
	let password = dotenv::var("POSTGRES_PASSWORD").unwrap_or_else(|_| "123456".into());
	let host = dotenv::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".into());
	let port = dotenv_num!("POSTGRES_PORT", 5432, u16);
	let database = dotenv::var("POSTGRES_DATABASE").unwrap_or_else(|_| "foody".into());

	format!("postgresql://{user}:{password}@{host}:{port}/{database}")
}

/// The db container can come up after we do, so don't give up on the first
/// refused connection.
pub async fn connect_with_retries(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
	const ATTEMPTS: u32 = 5;

	let mut attempt = 0;
	loop {
		attempt += 1;
		match PgPoolOptions::new()
			.max_connections(max_connections)
			.connect(url)
			.await
		{
			Ok(pool) => {
				tracing::info!("Connected to postgres...");
				return Ok(pool);
			}
			Err(err) if attempt < ATTEMPTS => {
				tracing::warn!("Connection failed ({attempt}/{ATTEMPTS}): {err}");
				tokio::time::sleep(Duration::from_secs(5)).await;
			}
			Err(err) => return Err(err),
		}
	}
}

// Make sure the tables that we're working on exist
// This doesn't verify that they exist with these exact datatypes in each
// column, which would be ideal, but I can't find a way to easily do that so
// I'm not going to for now
pub async fn init_db(pool: &PgPool) -> Result<(), sqlx::Error> {
	sqlx::query("CREATE TABLE IF NOT EXISTS locations (
		id INT PRIMARY KEY,
		city_id INT UNIQUE NOT NULL,
		country_id INT NOT NULL,
		name TEXT NOT NULL,
		country_name TEXT NOT NULL
	);").execute(pool)
		.await?;

	// foods hangs off locations.city_id, so locations has to be set up first
	sqlx::query("CREATE TABLE IF NOT EXISTS foods (
		id INT PRIMARY KEY,
		name TEXT NOT NULL,
		categories TEXT[] NOT NULL DEFAULT '{}',
		cuisines TEXT[] NOT NULL DEFAULT '{}',
		address TEXT NOT NULL,
		rating_avg DOUBLE PRECISION NOT NULL DEFAULT 0,
		rating_total_review INT NOT NULL DEFAULT 0,
		is_open BOOL NOT NULL,
		city_id INT REFERENCES locations(city_id)
	);").execute(pool)
		.await?;

	Ok(())
}

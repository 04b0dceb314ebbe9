use shared_data::FoodRecord;
use sqlx::PgPool;
use std::fmt;
use std::path::Path;

#[derive(Debug)]
pub enum IngestError {
	Read(std::io::Error),
	Parse(serde_json::Error),
}

impl fmt::Display for IngestError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Read(err) => write!(f, "couldn't read file: {err}"),
			Self::Parse(err) => write!(f, "file isn't a json array of records: {err}"),
		}
	}
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct IngestSummary {
	pub ingested: usize,
	pub skipped: usize,
}

enum UpsertSkip {
	NoLocation(u32),
	Db(sqlx::Error),
}

/// Load one landing-zone batch into the database. A bad record doesn't sink
/// the batch; it's logged, counted, and skipped.
pub async fn ingest_file(pool: &PgPool, path: &Path) -> Result<IngestSummary, IngestError> {
	let contents = tokio::fs::read_to_string(path).await.map_err(IngestError::Read)?;
	let records: Vec<FoodRecord> = serde_json::from_str(&contents).map_err(IngestError::Parse)?;

	tracing::info!("New JSON file detected: {} with {} records", path.display(), records.len());

	let mut summary = IngestSummary::default();

	for record in records {
		match upsert_record(pool, record).await {
			Ok(()) => summary.ingested += 1,
			Err(UpsertSkip::NoLocation(city_id)) => {
				tracing::warn!("City ID {city_id} not found in locations table, skipping food item");
				summary.skipped += 1;
			}
			Err(UpsertSkip::Db(err)) => {
				tracing::warn!("Error processing item in {}: {err:?}", path.display());
				summary.skipped += 1;
			}
		}
	}

	Ok(summary)
}

async fn upsert_record(pool: &PgPool, record: FoodRecord) -> Result<(), UpsertSkip> {
	// The location has to land first; foods reference locations.city_id
	if let Some(loc) = record.location.clone() {
		let location = loc.into_location();

		sqlx::query("INSERT INTO locations (id, city_id, country_id, name, country_name)
			VALUES ($1, $2, $3, $4, $5)
			ON CONFLICT (city_id) DO UPDATE SET
				country_id = EXCLUDED.country_id,
				name = EXCLUDED.name,
				country_name = EXCLUDED.country_name
		;").bind(location.id as i32)
			.bind(location.city_id as i32)
			.bind(location.country_id as i32)
			.bind(&location.name)
			.bind(&location.country_name)
			.execute(pool)
			.await
			.map_err(UpsertSkip::Db)?;
	}

	let known = sqlx::query("SELECT 1 FROM locations WHERE city_id = $1;")
		.bind(record.city_id as i32)
		.fetch_optional(pool)
		.await
		.map_err(UpsertSkip::Db)?;

	if known.is_none() {
		return Err(UpsertSkip::NoLocation(record.city_id));
	}

	let food = record.into_food();

	sqlx::query("INSERT INTO foods
		(id, name, categories, cuisines, address, rating_avg, rating_total_review, is_open, city_id)
		VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
		ON CONFLICT (id) DO UPDATE SET
			name = EXCLUDED.name,
			categories = EXCLUDED.categories,
			cuisines = EXCLUDED.cuisines,
			address = EXCLUDED.address,
			rating_avg = EXCLUDED.rating_avg,
			rating_total_review = EXCLUDED.rating_total_review,
			is_open = EXCLUDED.is_open,
			city_id = EXCLUDED.city_id
	;").bind(food.id as i32)
		.bind(&food.name)
		.bind(&food.categories)
		.bind(&food.cuisines)
		.bind(&food.address)
		.bind(food.rating_avg)
		.bind(food.rating_total_review as i32)
		.bind(food.is_open)
		.bind(food.city_id as i32)
		.execute(pool)
		.await
		.map_err(UpsertSkip::Db)?;

	Ok(())
}

/// Only *.json files in the landing zone are batches; editors and the
/// crawler both drop temp files next to them.
pub fn is_batch_file(path: &Path) -> bool {
	path.extension().is_some_and(|ext| ext == "json")
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::PathBuf;

	#[test]
	fn batch_files_are_json_only() {
		assert!(is_batch_file(&PathBuf::from("/landing_zone/foods_217.json")));
		assert!(!is_batch_file(&PathBuf::from("/landing_zone/foods_217.json.tmp")));
		assert!(!is_batch_file(&PathBuf::from("/landing_zone/.gitkeep")));
	}
}

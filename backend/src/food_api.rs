use axum::{extract::State, http::StatusCode, Json};
use shared_data::{Food, Location};
use sqlx::{query_as, PgPool};

pub async fn health(
	State(pool): State<PgPool>
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
	sqlx::query("SELECT 1;")
		.execute(&pool)
		.await
		.map_err(|e| {
			tracing::error!("Health check couldn't reach postgres: {e:?}");
			(StatusCode::SERVICE_UNAVAILABLE, format!("Database is unreachable: {e}"))
		})?;

	Ok(Json(serde_json::json!({ "status": "Backend is running" })))
}

pub async fn get_locations(
	State(pool): State<PgPool>
) -> Result<Json<Vec<Location>>, (StatusCode, String)> {
	query_as::<_, Location>("SELECT \
		id, city_id, country_id, name, country_name \
		FROM locations \
		ORDER BY id \
	;").fetch_all(&pool)
		.await
		.map(Json)
		.map_err(|e| {
			tracing::error!("Couldn't retrieve locations: {e:?}");
			(StatusCode::INTERNAL_SERVER_ERROR, format!("Couldn't retrieve locations: {e}"))
		})
}

pub async fn get_foods(
	State(pool): State<PgPool>
) -> Result<Json<Vec<Food>>, (StatusCode, String)> {
	query_as::<_, Food>("SELECT \
		id, name, categories, cuisines, address, rating_avg, rating_total_review, is_open, city_id \
		FROM foods \
		ORDER BY id \
	;").fetch_all(&pool)
		.await
		.map(Json)
		.map_err(|e| {
			tracing::error!("Couldn't retrieve foods: {e:?}");
			(StatusCode::INTERNAL_SERVER_ERROR, format!("Couldn't retrieve foods: {e}"))
		})
}

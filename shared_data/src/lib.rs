/// A city the food directory knows about. `city_id` is the key everything
/// else hangs off of; `id` is just the vendor's row id.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Location {
	#[cfg_attr(feature = "sqlx", sqlx(try_from = "i32"))]
	pub id: u32,
	#[cfg_attr(feature = "sqlx", sqlx(try_from = "i32"))]
	pub city_id: u32,
	#[cfg_attr(feature = "sqlx", sqlx(try_from = "i32"))]
	pub country_id: u32,
	pub name: String,
	pub country_name: String,
}

impl Location {
	#[must_use]
	pub fn display_name(&self) -> String {
		format!("{}, {}", self.name, self.country_name)
	}
}

/// One restaurant/food place, as stored and as served over /api/foods.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Food {
	#[cfg_attr(feature = "sqlx", sqlx(try_from = "i32"))]
	pub id: u32,
	pub name: String,
	pub categories: Vec<String>,
	pub cuisines: Vec<String>,
	pub address: String,
	pub rating_avg: f64,
	#[cfg_attr(feature = "sqlx", sqlx(try_from = "i32"))]
	pub rating_total_review: u32,
	pub is_open: bool,
	#[cfg_attr(feature = "sqlx", sqlx(try_from = "i32"))]
	pub city_id: u32,
}

impl Food {
	#[must_use]
	pub fn display_rating(&self) -> String {
		if self.rating_total_review == 0 {
			"No reviews yet".into()
		} else {
			format!("{:.1} ({} reviews)", self.rating_avg, self.rating_total_review)
		}
	}
}

/// A location as it appears inside a landing-zone record. The two producers
/// that write these files don't agree on key casing (one emits `CountryId`/
/// `Name`/`CountryName`, the other snake_case) or on whether `id` is present,
/// so this type accepts all of it.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LocationRecord {
	#[serde(default)]
	pub id: Option<u32>,
	pub city_id: u32,
	#[serde(alias = "CountryId")]
	pub country_id: u32,
	#[serde(alias = "Name")]
	pub name: String,
	#[serde(alias = "CountryName")]
	pub country_name: String,
}

impl LocationRecord {
	#[must_use]
	pub fn into_location(self) -> Location {
		Location {
			// city_id is unique in the table anyway, so it's a fine stand-in
			// when the producer left the row id out
			id: self.id.unwrap_or(self.city_id),
			city_id: self.city_id,
			country_id: self.country_id,
			name: self.name,
			country_name: self.country_name,
		}
	}
}

/// One food item from a landing-zone batch, location embedded. The crawler
/// leaves the ratings off places that have none and sometimes joins
/// categories/cuisines into a single comma-separated string.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FoodRecord {
	pub id: u32,
	pub name: String,
	#[serde(default, deserialize_with = "string_list")]
	pub categories: Vec<String>,
	#[serde(default, deserialize_with = "string_list")]
	pub cuisines: Vec<String>,
	pub address: String,
	#[serde(default)]
	pub rating_avg: Option<f64>,
	#[serde(default)]
	pub rating_total_review: Option<u32>,
	pub is_open: bool,
	pub city_id: u32,
	#[serde(default)]
	pub location: Option<LocationRecord>,
}

impl FoodRecord {
	#[must_use]
	pub fn into_food(self) -> Food {
		Food {
			id: self.id,
			name: self.name,
			categories: self.categories,
			cuisines: self.cuisines,
			address: self.address,
			rating_avg: self.rating_avg.unwrap_or(0.0),
			rating_total_review: self.rating_total_review.unwrap_or(0),
			is_open: self.is_open,
			city_id: self.city_id,
		}
	}
}

fn string_list<'de, D: serde::Deserializer<'de>>(de: D) -> Result<Vec<String>, D::Error> {
	use serde::Deserialize;

	#[derive(serde::Deserialize)]
	#[serde(untagged)]
	enum StringList {
		List(Vec<String>),
		Joined(String),
	}

	Ok(match StringList::deserialize(de)? {
		StringList::List(list) => list,
		StringList::Joined(joined) => joined
			.split(',')
			.map(str::trim)
			.filter(|s| !s.is_empty())
			.map(str::to_string)
			.collect(),
	})
}

pub static BASE_STYLE: &str = r"
* {
	--body-background: #241f2b;
	--main-text: #f2ebe2;
	--secondary-text: #ffd9b0;
	--main-background: #322c3c;
	--secondary-background: #59656f;
	--border-color: #a1846d;
	--title-text: #e4c9bb;
	font-family: Arial, sans-serif;
	color: var(--main-text);
}
body {
	background-color: var(--body-background);
}
span.tag {
	margin-left: 8px;
	background-color: var(--secondary-background);
	padding: 6px 6px 2px 6px;
	border-radius: 8px 0;
}
a {
	text-decoration: none;
	color: var(--secondary-text);
}
";

pub static FOOD_LIST_STYLE: &str = r"
#foods {
	margin: 0px auto;
	max-width: max-content;
}
.food, #page-title {
	max-width: 900px;
	margin: 10px auto;
}
.food {
	padding: 8px 10px;
	background-color: var(--main-background);
	border-radius: 8px;
}
.food-header {
	padding: 0px 6px 4px 6px;
	border-bottom: 1px solid var(--secondary-text);
}
.food-name {
	display: inline;
	color: var(--title-text);
}
.food-address, .food-rating {
	margin: 6px;
}
.open-badge {
	color: #9be49b;
}
.closed-badge {
	color: #e49b9b;
}
#page-title {
	margin: 20px auto 10px auto;
}
";

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn location_record_accepts_both_casings() {
		let pascal: LocationRecord = serde_json::from_str(
			r#"{ "id": 4, "city_id": 217, "CountryId": 86, "Name": "TP. HCM", "CountryName": "Vietnam" }"#
		).unwrap();
		assert_eq!(pascal.country_id, 86);
		assert_eq!(pascal.name, "TP. HCM");
		assert_eq!(pascal.country_name, "Vietnam");

		let snake: LocationRecord = serde_json::from_str(
			r#"{ "city_id": 217, "country_id": 86, "name": "TP. HCM", "country_name": "Vietnam" }"#
		).unwrap();
		assert_eq!(snake.id, None);
		assert_eq!(snake.into_location().id, 217);
	}

	#[test]
	fn food_record_with_joined_categories() {
		let record: FoodRecord = serde_json::from_str(r#"{
			"id": 1052861,
			"name": "Bún Bò Huế 31",
			"categories": "Quán ăn, Món Huế",
			"cuisines": ["Vietnamese"],
			"address": "31 Nguyễn Văn Cừ, Q.1",
			"is_open": true,
			"city_id": 217
		}"#).unwrap();

		assert_eq!(record.categories, vec!["Quán ăn", "Món Huế"]);
		assert_eq!(record.cuisines, vec!["Vietnamese"]);
		assert_eq!(record.rating_avg, None);

		let food = record.into_food();
		assert_eq!(food.rating_avg, 0.0);
		assert_eq!(food.rating_total_review, 0);
	}

	#[test]
	fn food_record_with_full_fields() {
		let record: FoodRecord = serde_json::from_str(r#"{
			"id": 2,
			"name": "Phở Hòa",
			"categories": [],
			"cuisines": [],
			"address": "260C Pasteur, Q.3",
			"rating_avg": 4.3,
			"rating_total_review": 118,
			"is_open": false,
			"city_id": 217,
			"location": { "city_id": 217, "CountryId": 86, "Name": "TP. HCM", "CountryName": "Vietnam" }
		}"#).unwrap();

		assert!(record.location.is_some());
		assert_eq!(record.into_food().display_rating(), "4.3 (118 reviews)");
	}

	#[test]
	fn rating_display_without_reviews() {
		let food = Food {
			id: 1,
			name: "x".into(),
			categories: vec![],
			cuisines: vec![],
			address: "y".into(),
			rating_avg: 0.0,
			rating_total_review: 0,
			is_open: true,
			city_id: 217,
		};
		assert_eq!(food.display_rating(), "No reviews yet");
	}
}

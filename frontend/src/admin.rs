use crate::food_list::{FoodList, FoodViewProvider};
use shared_data::{Food, Location};
use yew::prelude::*;
use std::marker::PhantomData;

// The operator's view of the same feed: every raw field visible, closed
// places flagged so stale crawls stand out.
#[derive(PartialEq)]
struct AdminFoodView;

impl FoodViewProvider for AdminFoodView {
	fn food_view(food: &Food) -> Html {
		html! {
			<div class="food" id={ format!("food-{}", food.id) }>
				<div class="food-header">
					<h2 class="food-name">{ format!("#{} {}", food.id, food.name) }</h2>
					<span class="tag">{ format!("city {}", food.city_id) }</span>
					{
						(!food.is_open).then(|| html! {
							<span class="tag closed-badge">{ "Closed" }</span>
						})
					}
				</div>
				<p class="food-rating">{
					format!("avg {:.2} over {} reviews", food.rating_avg, food.rating_total_review)
				}</p>
				<p class="food-address">{ &food.address }</p>
				<p class="food-address">{
					format!("categories: {} | cuisines: {}",
						food.categories.join(", "),
						food.cuisines.join(", "))
				}</p>
			</div>
		}
	}
}

#[function_component(Admin)]
pub fn admin() -> Html {
	let locations = use_state(|| Option::<Result<Vec<Location>, String>>::None);

	{
		let list = locations.clone();
		use_effect(move || {
			if list.is_none() {
				wasm_bindgen_futures::spawn_local(async move {
					let res = match gloo_net::http::Request::get("/api/locations").send().await {
						Ok(res) => if res.ok() {
							res.json::<Vec<Location>>().await
								.map_err(|e| format!("There was an error while decoding: {e:?}"))
						} else {
							let text = res.text().await.unwrap_or_else(|e| format!("{e:?}"));
							Err(format!("Request returned {}: {text}", res.status()))
						},
						Err(err) => Err(format!("{err:?}"))
					};

					list.set(Some(res));
				});
			}

			|| { }
		});
	}

	let locations_html = match &*locations {
		None => html! { <p>{ "Loading locations..." }</p> },
		Some(Err(err)) => html! { <p>{ format!("Couldn't get locations: {err}") }</p> },
		Some(Ok(locations)) => locations.iter().map(|loc| html! {
			<span class="tag" id={ format!("location-{}", loc.city_id) }>
				{ format!("{} (city {})", loc.display_name(), loc.city_id) }
			</span>
		}).collect::<Html>(),
	};

	html! {
		<>
			<FoodList<AdminFoodView> title={ "Admin" } food_view={ PhantomData }/>
			<style>{ "
			#locations {
				max-width: 900px;
				margin: 10px auto;
			}
			" }</style>
			<div id="locations">
				<h2>{ "Crawled locations" }</h2>
				{ locations_html }
			</div>
		</>
	}
}

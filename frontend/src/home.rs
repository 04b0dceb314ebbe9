use crate::food_list::{FoodList, FoodViewProvider};
use shared_data::Food;
use yew::prelude::*;
use std::marker::PhantomData;

#[derive(PartialEq)]
struct PublicFoodView;

impl FoodViewProvider for PublicFoodView {
	fn food_view(food: &Food) -> Html {
		html! {
			<div class="food" id={ format!("food-{}", food.id) }>
				<div class="food-header">
					<h2 class="food-name">{ &food.name }</h2>
					{
						food.cuisines.iter().map(|cuisine|
							html! { <span class="tag">{ cuisine }</span> }
						).collect::<Html>()
					}
					{
						if food.is_open {
							html! { <span class="tag open-badge">{ "Open now" }</span> }
						} else {
							html! { <span class="tag closed-badge">{ "Closed" }</span> }
						}
					}
				</div>
				<p class="food-rating">{ food.display_rating() }</p>
				<p class="food-address">{ &food.address }</p>
			</div>
		}
	}
}

#[function_component(Home)]
pub fn home() -> Html {
	html! {
		<FoodList<PublicFoodView> title={ "Foody" } food_view={ PhantomData }/>
	}
}

use yew::prelude::*;
use gloo_console::log;
use shared_data::Food;
use std::marker::PhantomData;
use crate::style::SharedStyle;

pub trait FoodViewProvider: PartialEq {
	fn food_view(food: &Food) -> Html;
}

#[derive(Properties, PartialEq)]
pub struct FoodListProps<P: FoodViewProvider> {
	pub title: String,
	pub food_view: PhantomData<P>
}

pub fn get_food_list(state: UseStateHandle<Option<Result<Vec<Food>, String>>>) {
	wasm_bindgen_futures::spawn_local(async move {
		// would read nicer as one functional chain, but await doesn't work
		// inside the closures
		let res = match gloo_net::http::Request::get("/api/foods").send().await {
			Ok(res) => if res.ok() {
				res.json::<Vec<Food>>().await
					.map_err(|e| format!("There was an error while decoding: {e:?}"))
			} else {
				let text = res.text().await.unwrap_or_else(|e| format!("{e:?}"));
				Err(format!("Request returned {}: {text}", res.status()))
			},
			Err(err) => Err(format!("{err:?}"))
		};

		if let Err(err) = &res {
			log!(format!("Couldn't load the food list: {err}"));
		}

		state.set(Some(res));
	});
}

#[function_component(FoodList)]
pub fn food_list<P: FoodViewProvider>(props: &FoodListProps<P>) -> Html {
	let food_list = use_state(|| None);

	{
		let list = food_list.clone();
		use_effect(move || {
			if list.is_none() {
				get_food_list(list);
			}

			|| { }
		});
	}

	let foods_html = match &*food_list {
		None => html! { <p>{ "Loading places..." }</p> },
		Some(Err(err)) => html! { <><h1>{ "Couldn't get places" }</h1><p>{ err }</p></> },
		Some(Ok(foods)) => foods.iter().map(P::food_view).collect::<Html>(),
	};

	html! {
		<>
			<SharedStyle />
			<style>{ shared_data::FOOD_LIST_STYLE }</style>
			<div id="page-title">
				<h1>{ &props.title }</h1>
			</div>
			<div id="foods">
				{ foods_html }
			</div>
		</>
	}
}

use yew_router::prelude::*;
use yew::prelude::*;
use admin::Admin;
use home::Home;
use not_found::NotFound;
use router::{HistoryMode, ROUTES, Route};

mod admin;
mod food_list;
mod home;
mod not_found;
mod router;
mod style;

fn switch(route: Route) -> Html {
	match route {
		Route::Home => html! { <Home /> },
		Route::Admin => html! { <Admin /> },
		Route::NotFound => html! { <NotFound /> },
	}
}

#[function_component(Frontend)]
pub fn frontend() -> Html {
	match ROUTES.history() {
		HistoryMode::WebHistory => html! {
			<BrowserRouter>
				<Switch<Route> render={switch} />
			</BrowserRouter>
		},
		HistoryMode::HashHistory => html! {
			<HashRouter>
				<Switch<Route> render={switch} />
			</HashRouter>
		},
	}
}

fn main() {
	yew::Renderer::<Frontend>::new().render();
}

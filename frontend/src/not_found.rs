use yew::prelude::*;
use crate::style::SharedStyle;

// Where unmatched paths land; see the route table in router.rs.
#[function_component(NotFound)]
pub fn not_found() -> Html {
	html! {
		<>
			<SharedStyle />
			<style>{ "
			#not-found {
				max-width: 900px;
				margin: 40px auto;
				text-align: center;
			}
			" }</style>
			<div id="not-found">
				<h1>{ "404" }</h1>
				<p>{ "There's nothing at this address." }</p>
				<a href="/">{ "Back to the home page" }</a>
			</div>
		</>
	}
}

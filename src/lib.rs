pub mod util;

pub mod components;
pub mod engine;
pub mod geom;
pub mod hooks;
mod pages;

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html lang="en" dir="ltr" attr:data-theme="light"/>

		<Title formatter=|page| format!("Scribble - {page}")/>

		// Inject metadata in the <head> tag.
		<Meta charset="UTF-8"/>
		<Meta name="viewport" content="width=device-width, initial-scale=1.0"/>

		<Router>
			<Routes>
				<Route path="/" view=pages::Home/>
				<Route path="/*" view=pages::NotFound/>
			</Routes>
		</Router>
	}
}

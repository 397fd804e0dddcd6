use crate::components::*;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn Home() -> impl IntoView {
	let options = DrawCanvasOptions::builder()
		.touch(true)
		.responsive(true)
		.build();

	view! {
		<Title text="Home"/>
		<div class="Home">
			<h1 class="title">"Canvas Drawing App"</h1>
			<DrawCanvas options=options/>
		</div>
	}
}

#[component]
pub fn NotFound() -> impl IntoView {
	let path = use_location().pathname.get();

	view! {
		<Title text="Not found"/>
		<div class="NotFound">
			<div>{ format!("Not found: {path}") }</div>
			<A href="/">"Return home"</A>
		</div>
	}
}

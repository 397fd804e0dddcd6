use crate::engine::PenColor;
use crate::util::*;
use leptos::*;

#[component]
pub fn ColorPicker(
	#[prop(into)] color: Signal<PenColor>,
	#[prop(into)] on_change: Callback<PenColor>,
) -> impl IntoView {
	let input = move |ev: ev::Event| {
		if let Some(color) = event_target_value(&ev).parse::<PenColor>().ok_or_log() {
			tracing::debug!(%color, "pen color changed");
			on_change.call(color);
		}
	};

	view! {
		<div class="ColorPicker">
			<span>"Color"</span>
			<input type="color" prop:value=move || color.get().to_hex() on:input=input/>
		</div>
	}
}

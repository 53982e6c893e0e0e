use leptos::prelude::*;

use shared_data::TimeLeft;

// Midnight at the start of the wedding day, read in the viewer's own
// timezone, which is how js treats a zoneless datetime string.
pub const WEDDING_DATE: &str = "2025-06-15T00:00:00";

const STYLE: &str = r#"
#countdown {
	margin-top: 16px;
	font-size: 30px;
	font-weight: 600;
	letter-spacing: 2px;
}
"#;

// Days:hours:minutes:seconds until the big day. Nothing is rendered on the
// server; the clock appears with hydration and ticks once a second from
// there, pinned at zero once the day arrives.
#[component]
pub fn countdown() -> impl IntoView {
	let (remaining, set_remaining) = signal(None::<TimeLeft>);

	Effect::new(move |_| start_ticking(set_remaining));

	view! {
		<style>{ STYLE }</style>
		<div id="countdown">
			{move || remaining.get().map(|left| left.to_string())}
		</div>
	}
}

#[cfg(target_family = "wasm")]
fn start_ticking(set_remaining: WriteSignal<Option<TimeLeft>>) {
	use wasm_bindgen::JsValue;

	let target = js_sys::Date::new(&JsValue::from_str(WEDDING_DATE)).get_time();
	set_remaining.set(Some(TimeLeft::until(target, js_sys::Date::now())));

	let tick = gloo_timers::callback::Interval::new(1_000, move || {
		set_remaining.set(Some(TimeLeft::until(target, js_sys::Date::now())));
	});
	on_cleanup(move || drop(tick));
}

#[cfg(not(target_family = "wasm"))]
fn start_ticking(_set_remaining: WriteSignal<Option<TimeLeft>>) {}

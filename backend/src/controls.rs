use leptos::prelude::*;
use web_sys::HtmlAudioElement;

use shared_data::Session;

const MUSIC_SRC: &str = "/assets/wedding-music.mp3";

const MOON_ICON: &str = include_str!("../../assets/icons/moon.svg");
const SUN_ICON: &str = include_str!("../../assets/icons/sun.svg");
const MUSIC_ICON: &str = include_str!("../../assets/icons/music.svg");
const MUTE_ICON: &str = include_str!("../../assets/icons/volume-x.svg");

const STYLE: &str = r#"
#corner-controls {
	position: absolute;
	top: 16px;
	right: 16px;
	display: flex;
	gap: 12px;
	z-index: 2;
}
#corner-controls button {
	padding: 10px;
	border: none;
	border-radius: 50%;
	background-color: var(--panel);
	cursor: pointer;
	line-height: 0;
}
#corner-controls svg {
	width: 20px;
	height: 20px;
	stroke: var(--ink);
}
"#;

#[component]
pub fn corner_controls(session: RwSignal<Session>) -> impl IntoView {
	// The player only exists in a real browser, so it has to live outside the
	// session and get picked up after hydration rather than during server
	// rendering. new_local because the element can't leave this thread anyways.
	let audio = StoredValue::new_local(None::<HtmlAudioElement>);

	Effect::new(move |_| {
		let Ok(player) = HtmlAudioElement::new_with_src(MUSIC_SRC) else {
			return;
		};
		player.set_loop(true);
		audio.set_value(Some(player));
	});

	let toggle_music = move |_| {
		audio.with_value(|acquired| {
			// No player yet means hydration hasn't finished; skip the flag
			// flip too so the state can't drift apart from actual playback.
			let Some(player) = acquired else { return };

			if session.with(|s| s.prefs.music_playing) {
				_ = player.pause();
			} else {
				_ = player.play();
			}
			session.update(Session::toggle_music);
		});
	};

	view! {
		<style>{ STYLE }</style>
		<div id="corner-controls">
			<button
				aria-label="Toggle music"
				on:click=toggle_music
				inner_html=move || if session.with(|s| s.prefs.music_playing) {
					MUTE_ICON
				} else {
					MUSIC_ICON
				}
			/>
			<button
				aria-label="Toggle dark mode"
				on:click=move |_| session.update(Session::toggle_dark_mode)
				inner_html=move || if session.with(|s| s.prefs.dark_mode) {
					SUN_ICON
				} else {
					MOON_ICON
				}
			/>
		</div>
	}
}

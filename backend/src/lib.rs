pub mod controls;
pub mod countdown;
pub mod home_page;
pub mod invite;
pub mod love_note;
pub mod rsvp_page;
pub mod server;

#[cfg(not(target_family = "wasm"))]
pub mod app;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
	#[cfg(target_family = "wasm")]
	console_error_panic_hook::set_once();

	#[cfg(feature = "hydrate")]
	leptos::mount::hydrate_islands();
}

pub const SHARED_STYLE: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Great+Vibes&family=Cormorant+Garamond:wght@400;600&display=swap');
* {
	--ink: #241d36;
	--ink-soft: #5a4a56;
	--rose: #d66ba0;
	--rose-deep: #b3477d;
	--gold: #c5a059;
	--panel: #fdf8f4;
	--overlay: rgba(12, 8, 20, 0.45);
	color: var(--ink);
	font-family: "Cormorant Garamond", Georgia, serif;
}
#invite-root.dark, #invite-root.dark * {
	--ink: #eff1f3;
	--ink-soft: #cbb9b7;
	--panel: #2a2433;
	--overlay: rgba(12, 8, 20, 0.72);
}
html, body {
	margin: 0;
	min-height: 100%;
}
#invite-root {
	position: relative;
	min-height: 100vh;
	display: flex;
	flex-direction: column;
	align-items: center;
	justify-content: center;
	padding: 24px;
	box-sizing: border-box;
	background: url('/assets/wedding-bg.jpg') center / cover no-repeat fixed;
	transition: color 0.5s;
}
#backdrop {
	position: absolute;
	inset: 0;
	background-color: var(--overlay);
	transition: background-color 0.5s;
}
h1 {
	font-family: "Great Vibes", cursive;
	font-weight: 400;
	font-size: 56px;
	margin: 0 0 16px 0;
}
.icon svg {
	width: 1em;
	height: 1em;
	vertical-align: -0.125em;
	stroke: currentColor;
}
"#;

// Bits every page leans on: the fade-in entrance and the buttons that walk
// between pages. Only the rsvp card sits in a panel; the other two pages rest
// straight on the photo.
pub const PAGE_BASE_STYLE: &str = r#"
.page {
	position: relative;
	z-index: 1;
	text-align: center;
	animation: rise 0.5s ease-out;
}
@keyframes rise {
	from {
		opacity: 0;
		transform: translateY(-20px);
	}
	to {
		opacity: 1;
		transform: none;
	}
}
.nav-button {
	margin-top: 24px;
	padding: 10px 24px;
	border: none;
	border-radius: 10px;
	background-color: var(--rose);
	font-size: 18px;
	font-weight: 600;
	cursor: pointer;
	box-shadow: 0 8px 18px rgba(0, 0, 0, 0.25);
}
.nav-button, .nav-button * {
	color: #fdf8f4;
	font-family: "Cormorant Garamond", Georgia, serif;
}
.nav-button:hover {
	background-color: var(--rose-deep);
}
.nav-button.go {
	background-color: #3b82c4;
}
.nav-button.go:hover {
	background-color: #2d6aa3;
}
.nav-button.back {
	margin-top: 12px;
	background-color: #6b7280;
}
.nav-button.back:hover {
	background-color: #545b66;
}
"#;

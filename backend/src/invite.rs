use leptos::prelude::*;

use shared_data::{Page, Session};

use crate::{
	controls::CornerControls,
	home_page::HomePage,
	love_note::LoveNote,
	rsvp_page::RsvpPage,
};

// The page switcher, both toggles, and the form all hang off the same session
// state, so the whole invite has to be one island. Splitting it up would mean
// trying to share signals across hydration boundaries, which is not worth it
// for a site this size.
#[island]
pub fn invite() -> impl IntoView {
	let session = RwSignal::new(Session::default());

	// Typing in the form touches `session` on every keystroke; deriving the
	// page through a memo keeps those edits from tearing down and rebuilding
	// whichever page is showing.
	let page = Memo::new(move |_| session.with(|s| s.page));

	view! {
		<div id="invite-root" class:dark=move || session.with(|s| s.prefs.dark_mode)>
			<div id="backdrop"></div>
			<CornerControls session />
			{move || match page.get() {
				Page::Home => view! { <HomePage session /> }.into_any(),
				Page::LoveNote => view! { <LoveNote session /> }.into_any(),
				Page::Rsvp => view! { <RsvpPage session /> }.into_any(),
			}}
		</div>
	}
}

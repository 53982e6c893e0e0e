use const_format::concatcp;
use leptos::prelude::*;

use shared_data::{Page, Session};

const ARROW_RIGHT_ICON: &str = include_str!("../../assets/icons/arrow-right.svg");
const ARROW_LEFT_ICON: &str = include_str!("../../assets/icons/arrow-left.svg");

const STYLE: &str = concatcp!(
	crate::PAGE_BASE_STYLE,
	r#"
	#love-note {
		max-width: 540px;
	}
	#love-note h1 {
		font-size: 44px;
	}
	#note-text {
		margin-top: 16px;
		font-size: 19px;
		line-height: 1.55;
	}
	#signatures {
		font-size: 22px;
		font-weight: 600;
	}
	#couple-photo {
		width: 256px;
		margin-top: 24px;
		border-radius: 12px;
		box-shadow: 0 12px 28px rgba(0, 0, 0, 0.35);
	}
	"#
);

#[component]
pub fn love_note(session: RwSignal<Session>) -> impl IntoView {
	view! {
		<style>{ STYLE }</style>
		<div class="page" id="love-note">
			<h1>"A Love Note from Us 🌿"</h1>
			<p id="note-text">
				"To Our Dearest Friends and Family,"
				<br/><br/>
				"From the moment our paths crossed, we knew our love story was meant to be \
				written together. Through laughter, adventures, quiet moments, and endless \
				dreams, we have found in each other a love that feels like home."
				<br/><br/>
				"With hearts overflowing, we invite you to join us as we say “I do” to \
				forever. Your presence will make our day even more magical, and we cannot \
				wait to create beautiful memories together."
				<br/><br/>
				"As we step into this new chapter of our lives, we are filled with gratitude \
				for the love and support that surround us. Our wedding is not just about us; \
				it is a celebration of love, resilience, family, and friendship, and we \
				cannot imagine this day without YOU."
				<br/><br/>
				"With Love ❤️,"
				<br/>
				<span id="signatures">"Joy & James"</span>
			</p>
			<img id="couple-photo" src="/assets/wedding-couples.jpg" alt="Wedding Couple"/>
			<br/>
			<button class="nav-button go" on:click=move |_| session.update(|s| s.navigate(Page::Rsvp))>
				"Proceed to RSVP "
				<span class="icon" inner_html=ARROW_RIGHT_ICON></span>
			</button>
			<br/>
			<button class="nav-button back" on:click=move |_| session.update(|s| s.navigate(Page::Home))>
				<span class="icon" inner_html=ARROW_LEFT_ICON></span>
				" Back to Home"
			</button>
		</div>
	}
}

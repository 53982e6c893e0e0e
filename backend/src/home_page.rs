use const_format::concatcp;
use leptos::prelude::*;

use shared_data::{Page, Session};

use crate::countdown::Countdown;

const MAP_PIN_ICON: &str = include_str!("../../assets/icons/map-pin.svg");
const ARROW_RIGHT_ICON: &str = include_str!("../../assets/icons/arrow-right.svg");

const STYLE: &str = concatcp!(
	crate::PAGE_BASE_STYLE,
	r#"
	#invitation-lines p {
		font-size: 20px;
		font-weight: 600;
		line-height: 1.5;
	}
	#event-details {
		margin-top: 24px;
		display: flex;
		flex-direction: column;
		align-items: center;
		gap: 8px;
		font-size: 19px;
	}
	#event-details h6, #event-details p {
		margin: 0;
		font-size: 19px;
		font-weight: 500;
	}
	#event-details a {
		color: var(--ink);
		text-decoration: underline;
	}
	"#
);

#[component]
pub fn home_page(session: RwSignal<Session>) -> impl IntoView {
	view! {
		<style>{ STYLE }</style>
		<div class="page" id="home">
			<h1>"Berry & Nnaemeka"</h1>
			<Countdown/>
			<div id="invitation-lines">
				<p>
					"The Families of Michael Umoekpe Effiong" <br/>
					"And Late Edidiong Isong Ekon Of Ibiono," <br/>
					"both in Oron Local Government Area of Akwa Ibom State" <br/>
					"Cordially invite YOU to the traditional marriage of their children" <br/>
					"- Ms. Joy Umoekpe & Dr. James Isong"
				</p>
				<p>"Join us on June 15, 2025"</p>
			</div>
			<div id="event-details">
				<span>
					<span class="icon" inner_html=MAP_PIN_ICON></span>
					" "
					<a
						href="https://www.google.com/maps/place/Kubwa,+Abuja"
						target="_blank"
						rel="noopener noreferrer"
					>
						"Kubwa, Abuja Nigeria"
					</a>
				</span>
				<h6>"📅 20th April, 2025"</h6>
				<h6>"⏰ 10am"</h6>
				<p>"🎉 Reception at Dr. Michael Umoekpe Effiong’s compound, Eyoabasi at 2pm"</p>
				<p>"🎨 Colours of the day: " <strong>"Champagne Gold & White"</strong></p>
			</div>
			<button class="nav-button" on:click=move |_| session.update(|s| s.navigate(Page::LoveNote))>
				"Read Our Love Note "
				<span class="icon" inner_html=ARROW_RIGHT_ICON></span>
			</button>
		</div>
	}
}

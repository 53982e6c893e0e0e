use const_format::concatcp;
use leptos::prelude::*;
use web_sys::SubmitEvent;

use shared_data::{Attendance, FieldUpdate, Page, Session, SubmissionStatus};

use crate::server::add_rsvp;

const ARROW_LEFT_ICON: &str = include_str!("../../assets/icons/arrow-left.svg");

const STYLE: &str = concatcp!(
	crate::PAGE_BASE_STYLE,
	r#"
	#rsvp-card {
		width: 100%;
		max-width: 448px;
		padding: 24px;
		border-radius: 12px;
		background-color: var(--panel);
		box-shadow: 0 18px 40px rgba(0, 0, 0, 0.35);
		box-sizing: border-box;
	}
	#rsvp-card h2 {
		margin: 0;
		font-size: 26px;
	}
	#rsvp-card form {
		margin-top: 16px;
		display: flex;
		flex-direction: column;
		gap: 14px;
		text-align: left;
	}
	#rsvp-card input, #rsvp-card select {
		width: 100%;
		padding: 8px;
		border: 1px solid var(--ink-soft);
		border-radius: 6px;
		background-color: var(--panel);
		font-size: 17px;
		box-sizing: border-box;
	}
	#rsvp-card label {
		font-size: 16px;
		font-weight: 600;
		margin-bottom: -8px;
	}
	#submit-button {
		width: 100%;
		padding: 10px;
		border: none;
		border-radius: 10px;
		background-image: linear-gradient(to right, var(--rose), #d6554f);
		color: #fdf8f4;
		font-size: 18px;
		font-weight: 600;
		cursor: pointer;
		box-shadow: 0 8px 18px rgba(0, 0, 0, 0.25);
	}
	#submit-button:disabled {
		opacity: 0.7;
		cursor: wait;
	}
	#submit-error {
		margin-top: 12px;
		padding: 10px;
		border: 1px solid #c0392b;
		border-radius: 8px;
	}
	#submit-error, #submit-error * {
		color: #c0392b;
		font-size: 16px;
	}
	#thanks {
		margin-top: 16px;
	}
	#thanks, #thanks * {
		color: #27ae60;
	}
	#popper {
		font-size: 40px;
	}
	#thanks p {
		margin: 8px 0 0 0;
		font-size: 21px;
		font-weight: 600;
	}
	"#
);

#[component]
pub fn rsvp_page(session: RwSignal<Session>) -> impl IntoView {
	// Rebuild the card only when the submission actually moves along, not on
	// every keystroke the form feeds back into the session.
	let status = Memo::new(move |_| session.with(|s| s.status.clone()));

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();

		// One snapshot, one write. If nothing comes back, either a call is
		// already out, one already landed, or the record isn't finished.
		let Some(payload) = session.try_update(Session::begin_submit).flatten() else {
			return;
		};

		wasm_bindgen_futures::spawn_local(async move {
			let outcome = add_rsvp(payload).await.map_err(|e| e.to_string());
			session.update(|s| s.finish_submit(outcome));
		});
	};

	view! {
		<style>{ STYLE }</style>
		<div class="page" id="rsvp-card">
			<h2>"Kindly RSVP your invite"</h2>
			{move || match status.get() {
				SubmissionStatus::Submitted => view! {
					<div id="thanks">
						<span id="popper">"🎉"</span>
						<p>"Thank you for your RSVP!"</p>
					</div>
				}.into_any(),
				current => {
					let submitting = current == SubmissionStatus::Submitting;
					let error_banner = match current {
						SubmissionStatus::Failed(reason) => Some(view! {
							<div id="submit-error">
								"Couldn't send your RSVP: " {reason}
								<br/>
								"Please check your connection and press Submit to try again."
							</div>
						}),
						_ => None,
					};

					view! {
						{error_banner}
						<form on:submit=on_submit>
							<input
								type="text"
								name="firstName"
								placeholder="First Name"
								required
								prop:value=move || session.with(|s| s.rsvp.first_name.clone())
								on:input=move |ev| session.update(|s|
									s.apply(FieldUpdate::FirstName(event_target_value(&ev)))
								)
							/>
							<input
								type="text"
								name="lastName"
								placeholder="Last Name"
								required
								prop:value=move || session.with(|s| s.rsvp.last_name.clone())
								on:input=move |ev| session.update(|s|
									s.apply(FieldUpdate::LastName(event_target_value(&ev)))
								)
							/>
							<input
								type="tel"
								name="phone"
								placeholder="Phone Number"
								required
								prop:value=move || session.with(|s| s.rsvp.phone.clone())
								on:input=move |ev| session.update(|s|
									s.apply(FieldUpdate::Phone(event_target_value(&ev)))
								)
							/>
							<input
								type="email"
								name="email"
								placeholder="Email Address"
								required
								prop:value=move || session.with(|s| s.rsvp.email.clone())
								on:input=move |ev| session.update(|s|
									s.apply(FieldUpdate::Email(event_target_value(&ev)))
								)
							/>

							<label for="attending">"Will you be attending?"</label>
							<select
								id="attending"
								name="attending"
								required
								prop:value=move || session.with(|s|
									s.rsvp.attending.map_or("", Attendance::as_str)
								)
								on:change=move |ev| session.update(|s|
									s.apply(FieldUpdate::Attending(
										Attendance::from_form_value(&event_target_value(&ev))
									))
								)
							>
								<option value="">"Select"</option>
								<option value=Attendance::SELECT_YES>"Yes"</option>
								<option value=Attendance::SELECT_NO>"No"</option>
							</select>

							<label for="guest">"Will you bring a guest?"</label>
							<select
								id="guest"
								name="guest"
								required
								prop:value=move || session.with(|s|
									s.rsvp.guest.map_or("", Attendance::as_str)
								)
								on:change=move |ev| session.update(|s|
									s.apply(FieldUpdate::Guest(
										Attendance::from_form_value(&event_target_value(&ev))
									))
								)
							>
								<option value="">"Select"</option>
								<option value=Attendance::SELECT_YES>"Yes"</option>
								<option value=Attendance::SELECT_NO>"No"</option>
							</select>

							<button type="submit" id="submit-button" disabled=submitting>
								{if submitting { "Submitting..." } else { "Submit" }}
							</button>
						</form>
					}.into_any()
				}
			}}
			<button class="nav-button back" on:click=move |_| session.update(|s| s.navigate(Page::LoveNote))>
				<span class="icon" inner_html=ARROW_LEFT_ICON></span>
				" Back"
			</button>
		</div>
	}
}

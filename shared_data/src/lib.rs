mod countdown;
pub use countdown::TimeLeft;

// Which of the three faces of the invite is currently showing. The pages form
// a little corridor: Home <-> LoveNote <-> Rsvp, with no shortcut from the
// form straight back to the landing page.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Page {
	#[default]
	Home,
	LoveNote,
	Rsvp,
}

impl Page {
	#[must_use]
	pub fn allows(self, target: Self) -> bool {
		matches!(
			(self, target),
			(Self::Home, Self::LoveNote)
				| (Self::LoveNote, Self::Home)
				| (Self::LoveNote, Self::Rsvp)
				| (Self::Rsvp, Self::LoveNote)
		)
	}
}

#[derive(serde::Deserialize, serde::Serialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Attendance {
	Yes,
	No,
}

impl Attendance {
	pub const SELECT_YES: &'static str = "Yes";
	pub const SELECT_NO: &'static str = "No";

	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Yes => Self::SELECT_YES,
			Self::No => Self::SELECT_NO,
		}
	}

	// An unanswered `<select>` hands us the empty string; anything else we
	// don't recognize counts as unanswered too.
	#[must_use]
	pub fn from_form_value(value: &str) -> Option<Self> {
		match value {
			Self::SELECT_YES => Some(Self::Yes),
			Self::SELECT_NO => Some(Self::No),
			_ => None,
		}
	}
}

// Everything the couple wants to know about one guest. The two attendance
// questions start out unanswered, which is why they're not plain bools.
#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RsvpRecord {
	pub first_name: String,
	pub last_name: String,
	pub phone: String,
	pub email: String,
	pub attending: Option<Attendance>,
	pub guest: Option<Attendance>,
}

// One edit to one field. Keeping this closed means the form can't grow a
// field that the record doesn't know how to hold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldUpdate {
	FirstName(String),
	LastName(String),
	Phone(String),
	Email(String),
	Attending(Option<Attendance>),
	Guest(Option<Attendance>),
}

impl RsvpRecord {
	#[must_use]
	pub fn with(&self, update: FieldUpdate) -> Self {
		let mut next = self.clone();
		match update {
			FieldUpdate::FirstName(v) => next.first_name = v,
			FieldUpdate::LastName(v) => next.last_name = v,
			FieldUpdate::Phone(v) => next.phone = v,
			FieldUpdate::Email(v) => next.email = v,
			FieldUpdate::Attending(v) => next.attending = v,
			FieldUpdate::Guest(v) => next.guest = v,
		}
		next
	}

	#[must_use]
	pub fn is_complete(&self) -> bool {
		!self.first_name.is_empty()
			&& !self.last_name.is_empty()
			&& !self.phone.is_empty()
			&& !self.email.is_empty()
			&& self.attending.is_some()
			&& self.guest.is_some()
	}
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
	#[default]
	Idle,
	Submitting,
	// Carries the reason so the form can show it next to the retry button
	Failed(String),
	Submitted,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct UiPreferences {
	pub dark_mode: bool,
	pub music_playing: bool,
}

// The whole client-side story of one visit, gathered in one place so the
// parts can't fall out of step with each other.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
	pub page: Page,
	pub prefs: UiPreferences,
	pub rsvp: RsvpRecord,
	pub status: SubmissionStatus,
}

impl Session {
	// Steps that the corridor doesn't allow are simply ignored.
	pub fn navigate(&mut self, target: Page) {
		if self.page.allows(target) {
			self.page = target;
		}
	}

	pub fn apply(&mut self, update: FieldUpdate) {
		self.rsvp = self.rsvp.with(update);
	}

	pub fn toggle_dark_mode(&mut self) {
		self.prefs.dark_mode = !self.prefs.dark_mode;
	}

	pub fn toggle_music(&mut self) {
		self.prefs.music_playing = !self.prefs.music_playing;
	}

	// Hands back the payload for the one write this attempt is allowed to
	// make, or None if a write is already in flight, one already landed, or
	// the record isn't finished yet. The clone is the point: edits made while
	// the call is out must not leak into it.
	pub fn begin_submit(&mut self) -> Option<RsvpRecord> {
		match self.status {
			SubmissionStatus::Submitting | SubmissionStatus::Submitted => return None,
			SubmissionStatus::Idle | SubmissionStatus::Failed(_) => (),
		}

		if !self.rsvp.is_complete() {
			return None;
		}

		self.status = SubmissionStatus::Submitting;
		Some(self.rsvp.clone())
	}

	// Only the attempt that begin_submit started may land; anything else is a
	// stray callback and gets dropped. A failure keeps the record around so
	// the guest can fix it up and try again.
	pub fn finish_submit(&mut self, outcome: Result<(), String>) {
		if self.status != SubmissionStatus::Submitting {
			return;
		}

		match outcome {
			Ok(()) => {
				self.status = SubmissionStatus::Submitted;
				self.rsvp = RsvpRecord::default();
			}
			Err(reason) => self.status = SubmissionStatus::Failed(reason),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const ALL_PAGES: [Page; 3] = [Page::Home, Page::LoveNote, Page::Rsvp];

	fn filled_session() -> Session {
		let mut session = Session::default();
		for update in [
			FieldUpdate::FirstName("Ada".into()),
			FieldUpdate::LastName("Lovelace".into()),
			FieldUpdate::Phone("+123".into()),
			FieldUpdate::Email("a@example.com".into()),
			FieldUpdate::Attending(Some(Attendance::Yes)),
			FieldUpdate::Guest(Some(Attendance::No)),
		] {
			session.apply(update);
		}
		session
	}

	#[test]
	fn navigation_only_takes_corridor_steps() {
		for from in ALL_PAGES {
			for to in ALL_PAGES {
				let mut session = Session {
					page: from,
					..Session::default()
				};
				session.navigate(to);

				let expected = if from.allows(to) { to } else { from };
				assert_eq!(session.page, expected, "{from:?} -> {to:?}");
			}
		}
	}

	#[test]
	fn navigation_sequence_folds_deterministically() {
		let mut session = Session::default();

		session.navigate(Page::LoveNote);
		session.navigate(Page::Rsvp);
		assert_eq!(session.page, Page::Rsvp);

		// no shortcut home from the form
		session.navigate(Page::Home);
		assert_eq!(session.page, Page::Rsvp);

		session.navigate(Page::LoveNote);
		session.navigate(Page::Home);
		assert_eq!(session.page, Page::Home);
	}

	#[test]
	fn with_replaces_only_the_named_field() {
		let base = RsvpRecord {
			first_name: "Ada".into(),
			last_name: "Lovelace".into(),
			phone: "+123".into(),
			email: "a@example.com".into(),
			attending: Some(Attendance::Yes),
			guest: Some(Attendance::No),
		};

		let updated = base.with(FieldUpdate::Phone("+456".into()));
		assert_eq!(updated.phone, "+456");
		assert_eq!(updated.first_name, base.first_name);
		assert_eq!(updated.last_name, base.last_name);
		assert_eq!(updated.email, base.email);
		assert_eq!(updated.attending, base.attending);
		assert_eq!(updated.guest, base.guest);
	}

	#[test]
	fn later_update_to_same_field_wins() {
		let mut session = Session::default();
		session.apply(FieldUpdate::FirstName("Jo".into()));
		session.apply(FieldUpdate::FirstName("Joy".into()));
		assert_eq!(session.rsvp.first_name, "Joy");
	}

	#[test]
	fn select_values_round_trip_and_empty_means_unanswered() {
		for answer in [Attendance::Yes, Attendance::No] {
			assert_eq!(Attendance::from_form_value(answer.as_str()), Some(answer));
		}
		assert_eq!(Attendance::from_form_value(""), None);
		assert_eq!(Attendance::from_form_value("maybe"), None);
	}

	#[test]
	fn incomplete_record_cannot_begin_submitting() {
		let mut session = filled_session();
		session.apply(FieldUpdate::Email(String::new()));

		assert_eq!(session.begin_submit(), None);
		assert_eq!(session.status, SubmissionStatus::Idle);

		let mut unanswered = filled_session();
		unanswered.apply(FieldUpdate::Guest(None));
		assert_eq!(unanswered.begin_submit(), None);
	}

	#[test]
	fn submit_payload_is_a_snapshot() {
		let mut session = filled_session();

		let payload = session.begin_submit();
		assert_eq!(session.status, SubmissionStatus::Submitting);

		// typing while the call is in flight must not touch the payload
		session.apply(FieldUpdate::FirstName("Grace".into()));

		let expected = RsvpRecord {
			first_name: "Ada".into(),
			last_name: "Lovelace".into(),
			phone: "+123".into(),
			email: "a@example.com".into(),
			attending: Some(Attendance::Yes),
			guest: Some(Attendance::No),
		};
		assert_eq!(payload, Some(expected));
		assert_eq!(session.rsvp.first_name, "Grace");
	}

	#[test]
	fn only_one_write_per_attempt() {
		let mut session = filled_session();

		assert!(session.begin_submit().is_some());
		// a second click while the first call is still out
		assert_eq!(session.begin_submit(), None);

		session.finish_submit(Ok(()));
		// and once it landed, never again
		assert_eq!(session.begin_submit(), None);
	}

	#[test]
	fn success_clears_the_form_for_good() {
		let mut session = filled_session();
		session.begin_submit();
		session.finish_submit(Ok(()));

		assert_eq!(session.status, SubmissionStatus::Submitted);
		assert_eq!(session.rsvp, RsvpRecord::default());
	}

	#[test]
	fn failure_keeps_the_record_and_allows_retry() {
		let mut session = filled_session();
		let first = session.begin_submit();
		session.finish_submit(Err("connection reset".into()));

		assert_eq!(session.status, SubmissionStatus::Failed("connection reset".into()));
		assert!(session.rsvp.is_complete());

		let second = session.begin_submit();
		assert_eq!(second, first);

		session.finish_submit(Ok(()));
		assert_eq!(session.status, SubmissionStatus::Submitted);
	}

	#[test]
	fn stray_finish_is_dropped() {
		let mut session = filled_session();
		session.finish_submit(Ok(()));
		assert_eq!(session.status, SubmissionStatus::Idle);
		assert!(session.rsvp.is_complete());

		session.begin_submit();
		session.finish_submit(Ok(()));
		session.finish_submit(Err("late duplicate".into()));
		assert_eq!(session.status, SubmissionStatus::Submitted);
	}

	#[test]
	fn toggles_are_involutions() {
		let mut session = Session::default();

		session.toggle_dark_mode();
		assert!(session.prefs.dark_mode);
		session.toggle_dark_mode();
		assert!(!session.prefs.dark_mode);

		session.toggle_music();
		assert!(session.prefs.music_playing);
		session.toggle_music();
		assert!(!session.prefs.music_playing);
	}

	#[test]
	fn navigation_leaves_the_rest_of_the_session_alone() {
		let mut session = filled_session();
		session.navigate(Page::LoveNote);
		session.navigate(Page::Rsvp);
		session.begin_submit();
		session.finish_submit(Err("timeout".into()));

		let rsvp_before = session.rsvp.clone();
		let status_before = session.status.clone();

		session.navigate(Page::LoveNote);
		session.navigate(Page::Rsvp);

		assert_eq!(session.rsvp, rsvp_before);
		assert_eq!(session.status, status_before);
		assert_eq!(session.page, Page::Rsvp);
	}

	#[test]
	fn whole_visit_plays_out() {
		let mut session = Session::default();
		session.navigate(Page::LoveNote);
		session.navigate(Page::Rsvp);

		session.apply(FieldUpdate::FirstName("Ada".into()));
		session.apply(FieldUpdate::LastName("Lovelace".into()));
		session.apply(FieldUpdate::Phone("+123".into()));
		session.apply(FieldUpdate::Email("a@example.com".into()));
		session.apply(FieldUpdate::Attending(Some(Attendance::Yes)));
		session.apply(FieldUpdate::Guest(Some(Attendance::No)));

		let payload = session.begin_submit().unwrap();
		assert_eq!(payload.first_name, "Ada");
		assert_eq!(payload.attending, Some(Attendance::Yes));

		session.finish_submit(Ok(()));
		assert_eq!(session.status, SubmissionStatus::Submitted);
		assert_eq!(session.rsvp, RsvpRecord::default());
		assert_eq!(session.page, Page::Rsvp);
	}
}

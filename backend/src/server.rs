use leptos::prelude::*;
use shared_data::RsvpRecord;

#[cfg(not(target_family = "wasm"))]
pub use server_side::*;

// The one write this site ever makes: a full six-field record into the rsvps
// table. The browser's `required` attributes give guests the friendly errors;
// this check is the final say for anything that sidesteps the form.
#[server(prefix = "/api")]
pub async fn add_rsvp(record: RsvpRecord) -> Result<(), ServerFnError> {
	use axum::http::StatusCode;
	use const_format::concatcp;
	use leptos_axum::ResponseOptions;
	use sqlx::{query, Row};

	let state: AxumState = expect_context();
	let response: ResponseOptions = expect_context();

	let (Some(attending), Some(guest)) = (record.attending, record.guest) else {
		tracing::warn!("Rejecting rsvp with unanswered attendance questions");
		response.set_status(StatusCode::BAD_REQUEST);
		return Err(ServerFnError::ServerError("Both attendance questions must be answered".into()));
	};

	if [&record.first_name, &record.last_name, &record.phone, &record.email]
		.iter()
		.any(|field| field.is_empty())
	{
		tracing::warn!("Rejecting rsvp with empty fields");
		response.set_status(StatusCode::BAD_REQUEST);
		return Err(ServerFnError::ServerError("Every field must be filled in before submitting".into()));
	}

	query(concatcp!(
		"INSERT INTO ", RSVPS_TABLE,
		" (first_name, last_name, phone, email, attending, guest)
		VALUES ($1, $2, $3, $4, $5, $6)
		RETURNING id"
	))
		.bind(&record.first_name)
		.bind(&record.last_name)
		.bind(&record.phone)
		.bind(&record.email)
		.bind(attending.as_str())
		.bind(guest.as_str())
		.fetch_one(&state.pool)
		.await
		.map_err(|e| {
			tracing::error!("Couldn't store rsvp: {e}");
			response.set_status(StatusCode::INTERNAL_SERVER_ERROR);
			ServerFnError::ServerError(format!("Couldn't store rsvp: {e}"))
		})
		.map(|row| match row.try_get::<i32, _>("id") {
			Ok(id) => tracing::info!(
				"Stored rsvp {id} from {} {} (attending: {attending:?}, guest: {guest:?})",
				record.first_name,
				record.last_name
			),
			Err(e) => tracing::warn!("Stored rsvp but it returned no id: {e}"),
		})
}

#[cfg(not(target_family = "wasm"))]
mod server_side {
	use axum::extract::FromRef;
	use const_format::concatcp;
	use leptos::prelude::LeptosOptions;
	use sqlx::{query, PgPool};

	pub const RSVPS_TABLE: &str = "rsvps";

	#[derive(Clone)]
	pub struct AxumState {
		pub pool: PgPool,
		pub leptos_opts: LeptosOptions,
	}

	impl FromRef<AxumState> for LeptosOptions {
		fn from_ref(input: &AxumState) -> Self {
			input.leptos_opts.clone()
		}
	}

	// Make sure the table we're writing into exists before anything is served.
	// This doesn't verify the column types on an existing table, which would be
	// ideal, but there's no easy way to do that so it just trusts what's there.
	pub async fn ensure_rsvps_table(pool: &PgPool) -> Result<(), sqlx::Error> {
		query(concatcp!(
			"CREATE TABLE IF NOT EXISTS ", RSVPS_TABLE, " (
			id serial PRIMARY KEY,
			first_name text NOT NULL,
			last_name text NOT NULL,
			phone text NOT NULL,
			email text NOT NULL,
			attending text NOT NULL,
			guest text NOT NULL
		);"))
			.execute(pool)
			.await
			.map(|_| ())
	}
}

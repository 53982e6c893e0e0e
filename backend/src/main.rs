use axum::{
	extract::{Request, State},
	response::IntoResponse,
	routing::post,
	Router,
};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use sqlx::postgres::PgPoolOptions;
use tower_http::services::ServeDir;
use tracing::info;

use backend::{
	app::{shell, App},
	server::{ensure_rsvps_table, AxumState},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	macro_rules! dotenv_num{
		($key:expr, $default:expr, $type:ident) => {
			dotenv::var($key).ok()
				.and_then(|v| v.parse::<$type>().ok())
				.unwrap_or($default)
		}
	}

	tracing_subscriber::fmt().init();

	let num_connections = dotenv_num!("DB_CONNECTIONS", 8, u32);

	let db_name = dotenv::var("DB_NAME").unwrap_or_else(|_| "wedding".into());
	let db_host = dotenv::var("DB_HOST").unwrap_or_else(|_| "localhost".into());
	let db_user = dotenv::var("DB_USER")?;

	// Icons live here in the repo, but the deployed directory also holds the
	// couple's photos and the looping track the music button plays.
	let asset_dir = dotenv::var("ASSET_DIR").unwrap_or_else(|_| "assets".into());

	info!("Read .env...");

	let pool = PgPoolOptions::new()
		.max_connections(num_connections)
		.connect(&format!("postgresql://{db_user}@{db_host}/{db_name}"))
		.await?;

	info!("Connected to postgres...");

	ensure_rsvps_table(&pool).await?;

	info!("Set up rsvps table in DB...");

	let conf = get_configuration(None)?;
	let leptos_opts = conf.leptos_options;
	let addr = leptos_opts.site_addr;
	let routes = generate_route_list(App);

	let state = AxumState {
		pool,
		leptos_opts: leptos_opts.clone(),
	};

	let app = Router::new()
		.route("/api/*fn_name", post(server_fn_handler))
		.leptos_routes_with_context(
			&state,
			routes,
			{
				let state = state.clone();
				move || provide_context(state.clone())
			},
			{
				let leptos_opts = leptos_opts.clone();
				move || shell(leptos_opts.clone())
			},
		)
		.nest_service("/assets", ServeDir::new(asset_dir))
		.fallback(leptos_axum::file_and_error_handler::<AxumState, _>(shell))
		.with_state(state);

	info!("Serving axum on {addr}...");

	let listener = tokio::net::TcpListener::bind(addr).await?;
	axum::serve(listener, app.into_make_service()).await?;

	Ok(())
}

async fn server_fn_handler(
	State(state): State<AxumState>,
	request: Request,
) -> impl IntoResponse {
	leptos_axum::handle_server_fns_with_context(
		move || provide_context(state.clone()),
		request,
	).await
}

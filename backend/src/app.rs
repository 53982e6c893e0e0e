use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, MetaTags, Title};
use leptos_router::{StaticSegment, components::{Router, Route, FlatRoutes}};

use crate::invite::Invite;

pub fn shell(options: LeptosOptions) -> impl IntoView {
	view! {
		<!DOCTYPE html>
		<html lang="en">
			<head>
				<meta charset="utf-8"/>
				<meta name="viewport" content="width=device-width, initial-scale=1"/>
				<AutoReload options=options.clone() />
				<HydrationScripts options islands=true/>
				<MetaTags/>
			</head>
			<body>
				<App/>
			</body>
		</html>
	}
}

#[component]
pub fn app() -> impl IntoView {
	provide_meta_context();

	view! {
		<Title text="Berry & Nnaemeka's Wedding"/>
		<Meta name="description" content="You're cordially invited to our wedding celebration!"/>
		<style>{ crate::SHARED_STYLE }</style>
		<Router>
			<main>
				<FlatRoutes fallback=move || "Not found">
					<Route path=StaticSegment("") view=Invite />
				</FlatRoutes>
			</main>
		</Router>
	}
}

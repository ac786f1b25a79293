//! Leptos client-side portfolio app: content pages and the course graph.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod components;
mod data;
pub mod i18n;
mod pages;
pub mod storage;
pub mod theme;

use crate::components::navbar::Navbar;
use crate::i18n::provide_i18n;
use crate::theme::provide_theme;

// Top-Level pages
use crate::pages::contact::Contact;
use crate::pages::courses::Courses;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;
use crate::pages::projects::Projects;
use crate::pages::research::Research;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// The site router: navbar plus one page per route, with a 404 fallback.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();
	let i18n = provide_i18n();
	let theme = provide_theme();

	view! {
		<Html
			attr:lang=move || i18n.locale.get().as_str()
			attr:dir="ltr"
			attr:data-theme=move || theme.theme.get().as_str()
		/>

		// sets the document title
		<Title text="Academic Portfolio" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Navbar />
			<main class="content">
				<Routes fallback=|| view! { <NotFound /> }>
					<Route path=path!("/") view=Home />
					<Route path=path!("/courses") view=Courses />
					<Route path=path!("/projects") view=Projects />
					<Route path=path!("/research") view=Research />
					<Route path=path!("/contact") view=Contact />
				</Routes>
			</main>
		</Router>
	}
}

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::i18n::use_i18n;
use crate::theme::{Theme, use_theme};

/// `(route, translation key)` in display order.
const NAV_ITEMS: &[(&str, &str)] = &[
	("/", "nav.home"),
	("/courses", "nav.courses"),
	("/projects", "nav.projects"),
	("/research", "nav.research"),
	("/contact", "nav.contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
	let i18n = use_i18n();
	let theme = use_theme();
	let pathname = use_location().pathname;

	view! {
		<nav class="navbar">
			<div class="nav-links">
				{NAV_ITEMS
					.iter()
					.map(|&(path, key)| {
						let active = move || pathname.get() == path;
						view! {
							<A href=path>
								<span class="nav-link">{move || i18n.t(key)}</span>
								<Show when=active>
									<span class="nav-active"></span>
								</Show>
							</A>
						}
					})
					.collect_view()}
			</div>

			<div class="nav-controls">
				<button
					class="toggle"
					aria-label=move || i18n.t("nav.toggle_language")
					on:click=move |_| i18n.toggle()
				>
					{move || i18n.locale.get().toggled().as_str().to_uppercase()}
				</button>
				<button
					class="toggle"
					aria-label=move || i18n.t("nav.toggle_theme")
					on:click=move |_| theme.toggle()
				>
					{move || match theme.theme.get() {
						Theme::Light => i18n.t("nav.theme.dark"),
						Theme::Dark => i18n.t("nav.theme.light"),
					}}
				</button>
			</div>
		</nav>
	}
}

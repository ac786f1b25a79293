use leptos::prelude::*;
use leptos_router::components::A;

use crate::i18n::use_i18n;

/// 404 page
#[component]
pub fn NotFound() -> impl IntoView {
	let i18n = use_i18n();

	view! {
		<div class="page page-narrow">
			<h1 class="page-title">{move || i18n.t("not_found.title")}</h1>
			<A href="/">{move || i18n.t("not_found.back")}</A>
		</div>
	}
}

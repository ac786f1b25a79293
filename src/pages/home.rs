use leptos::prelude::*;

use crate::i18n::use_i18n;

#[component]
pub fn Home() -> impl IntoView {
	let i18n = use_i18n();

	view! {
		<div class="page page-narrow">
			<section class="hero">
				<h1 class="hero-name">{move || i18n.t("home.name")}</h1>
				<p class="hero-tagline">{move || i18n.t("home.tagline")}</p>
				<p class="hero-intro">{move || i18n.t("home.intro")}</p>
			</section>
		</div>
	}
}

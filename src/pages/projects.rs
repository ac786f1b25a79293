use leptos::prelude::*;

use crate::i18n::use_i18n;

const PROJECT_COUNT: usize = 3;

#[component]
pub fn Projects() -> impl IntoView {
	let i18n = use_i18n();

	view! {
		<div class="page page-wide">
			<h1 class="page-title">{move || i18n.t("projects.title")}</h1>
			<div class="card-grid">
				{(1..=PROJECT_COUNT)
					.map(|n| {
						view! {
							<div class="card">
								<h2 class="card-title">
									{move || format!("{} {n}", i18n.t("projects.placeholder.title"))}
								</h2>
								<p class="card-body">{move || i18n.t("projects.placeholder.desc")}</p>
							</div>
						}
					})
					.collect_view()}
			</div>
		</div>
	}
}

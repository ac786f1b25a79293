use leptos::prelude::*;

use crate::i18n::use_i18n;

const EXPERIENCE_COUNT: usize = 3;

#[component]
pub fn Research() -> impl IntoView {
	let i18n = use_i18n();

	view! {
		<div class="page page-narrow">
			<h1 class="page-title">{move || i18n.t("research.title")}</h1>
			<div class="timeline">
				{(1..=EXPERIENCE_COUNT)
					.map(|n| {
						view! {
							<div class="timeline-entry">
								<h2 class="timeline-institution">
									{move || {
										format!("{} {n}", i18n.t("research.placeholder.institution"))
									}}
								</h2>
								<p class="timeline-role">
									{move || format!("{} {n}", i18n.t("research.placeholder.role"))}
								</p>
								<p class="timeline-body">{move || i18n.t("research.placeholder.desc")}</p>
							</div>
						}
					})
					.collect_view()}
			</div>
		</div>
	}
}

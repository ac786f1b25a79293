use leptos::prelude::*;

use crate::i18n::use_i18n;

/// `(translation key, link, shown text)`
const CHANNELS: &[(&str, &str, &str)] = &[
	("contact.email", "mailto:your.email@example.com", "your.email@example.com"),
	(
		"contact.linkedin",
		"https://linkedin.com/in/yourprofile",
		"linkedin.com/in/yourprofile",
	),
	(
		"contact.github",
		"https://github.com/yourusername",
		"github.com/yourusername",
	),
];

#[component]
pub fn Contact() -> impl IntoView {
	let i18n = use_i18n();

	view! {
		<div class="page page-narrow">
			<h1 class="page-title">{move || i18n.t("contact.title")}</h1>
			<div class="contact-list">
				{CHANNELS
					.iter()
					.map(|&(key, href, text)| {
						let external = !href.starts_with("mailto:");
						view! {
							<div class="card">
								<h2 class="card-title">{move || i18n.t(key)}</h2>
								<a
									class="link"
									href=href
									target=external.then_some("_blank")
									rel=external.then_some("noopener noreferrer")
								>
									{text}
								</a>
							</div>
						}
					})
					.collect_view()}
			</div>
		</div>
	}
}

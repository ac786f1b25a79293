use std::time::Duration;

use leptos::leptos_dom::helpers::{TimeoutHandle, set_timeout_with_handle};
use leptos::prelude::*;
use log::warn;

use crate::components::course_graph::config::InteractionConfig;
use crate::components::course_graph::selection::{ClickOutcome, SelectionController};
use crate::components::course_graph::{CourseGraphCanvas, CourseNode};
use crate::data::courses::course_graph_data;
use crate::i18n::use_i18n;

/// Taken courses, shown as a prerequisite graph. This page owns the selection
/// and the timer that delays expansion when switching between courses.
#[component]
pub fn Courses() -> impl IntoView {
	let i18n = use_i18n();
	let delay = Duration::from_millis(InteractionConfig::default().expand_delay_ms);
	let controller = StoredValue::new(SelectionController::new(delay));
	let timer = StoredValue::new(None::<TimeoutHandle>);
	let expanded = RwSignal::new(None::<String>);
	let graph_data = Signal::derive(course_graph_data);

	let cancel_timer = move || {
		if let Some(handle) = timer.try_update_value(Option::take).flatten() {
			handle.clear();
		}
	};
	let sync_expanded = move || {
		if let Some(id) = controller.try_with_value(|c| c.expanded().map(str::to_owned)) {
			expanded.set(id);
		}
	};

	let on_node_click = Callback::new(move |course: CourseNode| {
		cancel_timer();
		let Some(outcome) = controller.try_update_value(|c| c.click(&course.id)) else {
			return;
		};
		sync_expanded();

		if let ClickOutcome::Deferred { token, delay } = outcome {
			let fire = move || {
				timer.try_update_value(|t| *t = None);
				if controller
					.try_update_value(|c| c.complete(token))
					.unwrap_or(false)
				{
					sync_expanded();
				}
			};
			match set_timeout_with_handle(fire, delay) {
				Ok(handle) => timer.set_value(Some(handle)),
				Err(err) => warn!("could not schedule expansion of {}: {err:?}", course.id),
			}
		}
	});

	on_cleanup(move || {
		cancel_timer();
		controller.try_update_value(SelectionController::reset);
	});

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<div class="page page-wide">
				<header class="page-header">
					<h1 class="page-title">{move || i18n.t("courses.title")}</h1>
					<p class="page-subtitle">{move || i18n.t("courses.graph.subtitle")}</p>
				</header>

				<div class="graph-frame">
					<CourseGraphCanvas
						data=graph_data
						selected=expanded
						on_node_click=on_node_click
					/>
				</div>
			</div>
		</ErrorBoundary>
	}
}

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::render::{self, LABEL_FONT};
use super::state::CourseGraphState;
use super::types::{CourseNode, GraphData};
use crate::theme::use_theme;

/// Fallback canvas size when the container has no layout yet.
const DEFAULT_SIZE: (f64, f64) = (960.0, 540.0);

fn now() -> f64 {
	web_sys::window()
		.and_then(|w| w.performance())
		.map_or(0.0, |p| p.now())
}

fn canvas_point(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

fn container_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.filter(|&(w, h)| w > 0.0 && h > 0.0)
		.unwrap_or(DEFAULT_SIZE)
}

/// Course prerequisite graph drawn on a canvas. Clicking a node (as opposed
/// to dragging it) calls `on_node_click`; the node named by `selected` is
/// drawn expanded with its details.
#[component]
pub fn CourseGraphCanvas(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(into)] selected: Signal<Option<String>>,
	#[prop(into)] on_node_click: Callback<CourseNode>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state = StoredValue::new_local(None::<CourseGraphState>);
	let frame = StoredValue::new(None::<i32>);
	let resize_cb = StoredValue::new_local(None::<Closure<dyn FnMut()>>);
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let grabbing = RwSignal::new(false);
	let theme = use_theme();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if state.with_value(|s| s.is_some()) {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			warn!("no window, course graph not mounted");
			return;
		};
		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("2d canvas context unavailable, course graph not mounted");
			return;
		};

		let (w, h) = container_size(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		ctx.set_font(LABEL_FONT);
		let label_width = |code: &str| ctx.measure_text(code).ok().map(|m| m.width());
		let mut graph = CourseGraphState::new(&data.get_untracked(), label_width, w, h);
		graph.set_selected(selected.get_untracked().as_deref());
		state.set_value(Some(graph));
		info!("course graph mounted at {w}x{h}");

		let canvas_resize = canvas.clone();
		resize_cb.set_value(Some(Closure::new(move || {
			let (nw, nh) = container_size(&canvas_resize);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			state.try_update_value(|s| {
				if let Some(s) = s {
					s.resize(nw, nh);
				}
			});
		})));
		resize_cb.with_value(|cb| {
			if let Some(cb) = cb {
				let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		});

		// The loop stops by itself once the stored state is disposed.
		let animate_inner = animate.clone();
		*animate.borrow_mut() = Some(Closure::new(move || {
			let palette = theme.theme.try_get_untracked().unwrap_or_default().palette();
			let alive = state
				.try_update_value(|s| {
					if let Some(s) = s {
						s.tick();
						render::render(s, &ctx, &palette);
					}
				})
				.is_some();
			if !alive {
				return;
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let id = web_sys::window()
					.and_then(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
				frame.try_update_value(|f| *f = id);
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			let id = window.request_animation_frame(cb.as_ref().unchecked_ref()).ok();
			frame.set_value(id);
		}
	});

	Effect::new(move |_| {
		let id = selected.get();
		state.update_value(|s| {
			if let Some(s) = s {
				s.set_selected(id.as_deref());
				debug!("expanded course: {:?}", s.selected_id());
			}
		});
	});

	on_cleanup(move || {
		let Some(window) = web_sys::window() else {
			return;
		};
		if let Some(id) = frame.try_get_value().flatten() {
			let _ = window.cancel_animation_frame(id);
		}
		resize_cb.try_with_value(|cb| {
			if let Some(cb) = cb {
				let _ = window
					.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		});
	});

	let point = move |ev: &MouseEvent| {
		canvas_ref
			.get_untracked()
			.map(|canvas| canvas_point(&canvas, ev))
	};

	let on_mousedown = move |ev: MouseEvent| {
		if ev.button() != 0 {
			return;
		}
		let Some((x, y)) = point(&ev) else {
			return;
		};
		let t = now();
		let dragging = state
			.try_update_value(|s| {
				s.as_mut().is_some_and(|s| {
					s.pointer_down(x, y, t);
					s.is_dragging()
				})
			})
			.unwrap_or(false);
		grabbing.set(dragging);
	};

	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = point(&ev) else {
			return;
		};
		state.update_value(|s| {
			if let Some(s) = s {
				s.pointer_move(x, y);
			}
		});
	};

	let on_mouseup = move |ev: MouseEvent| {
		if ev.button() != 0 {
			return;
		}
		let Some((x, y)) = point(&ev) else {
			return;
		};
		let t = now();
		let clicked = state
			.try_update_value(|s| s.as_mut().and_then(|s| s.pointer_up(x, y, t)))
			.flatten();
		grabbing.set(false);
		if let Some(course) = clicked {
			on_node_click.run(course);
		}
	};

	let on_mouseleave = move |_: MouseEvent| {
		state.update_value(|s| {
			if let Some(s) = s {
				s.pointer_leave();
			}
		});
		grabbing.set(false);
	};

	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		state.update_value(|s| {
			if let Some(s) = s {
				s.wheel(ev.delta_y());
			}
		});
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="course-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style=move || {
				let cursor = if grabbing.get() { "grabbing" } else { "grab" };
				format!("display: block; cursor: {cursor};")
			}
		/>
	}
}

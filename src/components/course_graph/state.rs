use log::debug;

use super::config::{InteractionConfig, SimulationConfig};
use super::simulation::Simulation;
use super::types::{CourseNode, GraphData};

/// Pan offset from the canvas centre and zoom scale.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct DragState {
	pub node_idx: usize,
	pub start_x: f64,
	pub start_y: f64,
	pub start_time: f64,
	pub node_start_x: f64,
	pub node_start_y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PanState {
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// The pointer gesture in progress. A press either grabs a node or pans.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Gesture {
	#[default]
	Idle,
	Dragging(DragState),
	Panning(PanState),
}

pub struct CourseGraphState {
	pub sim: Simulation,
	pub transform: ViewTransform,
	pub gesture: Gesture,
	pub interaction: InteractionConfig,
	pub width: f64,
	pub height: f64,
}

impl CourseGraphState {
	pub fn new(
		data: &GraphData,
		label_width: impl Fn(&str) -> Option<f64>,
		width: f64,
		height: f64,
	) -> Self {
		let sim = Simulation::new(data, SimulationConfig::default(), label_width);
		debug!(
			"course graph built with {} nodes and {} links",
			sim.nodes.len(),
			sim.links.len()
		);
		Self {
			sim,
			transform: ViewTransform::default(),
			gesture: Gesture::Idle,
			interaction: InteractionConfig::default(),
			width,
			height,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.width / 2.0 - self.transform.x) / self.transform.k,
			(sy - self.height / 2.0 - self.transform.y) / self.transform.k,
		)
	}

	/// Topmost node under a screen point. The expanded node is drawn last, so
	/// it wins over anything it covers.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let hit = |idx: usize| {
			let node = &self.sim.nodes[idx];
			let (dx, dy) = (node.x - gx, node.y - gy);
			(dx * dx + dy * dy).sqrt() <= self.sim.effective_radius(idx)
		};
		if let Some(idx) = self.sim.expanded().filter(|&i| hit(i)) {
			return Some(idx);
		}
		(0..self.sim.nodes.len()).rev().find(|&i| hit(i))
	}

	/// Apply the externally selected course id.
	pub fn set_selected(&mut self, id: Option<&str>) {
		let idx = id.and_then(|id| self.sim.node_index(id));
		self.sim.set_expanded(idx);
	}

	pub fn selected_id(&self) -> Option<&str> {
		self.sim
			.expanded()
			.map(|i| self.sim.nodes[i].course.id.as_str())
	}

	/// Start a gesture. A node still held from an earlier press is released
	/// first, so at most one node is ever pinned by the pointer.
	pub fn pointer_down(&mut self, x: f64, y: f64, now: f64) {
		if let Gesture::Dragging(held) = std::mem::take(&mut self.gesture) {
			self.release(held.node_idx);
		}
		if let Some(idx) = self.node_at_position(x, y) {
			let node = &self.sim.nodes[idx];
			let (nx, ny) = (node.x, node.y);
			self.gesture = Gesture::Dragging(DragState {
				node_idx: idx,
				start_x: x,
				start_y: y,
				start_time: now,
				node_start_x: nx,
				node_start_y: ny,
			});
			self.sim.pin(idx, nx, ny);
			self.sim.set_alpha_target(self.sim.config.drag_alpha_target);
		} else {
			self.gesture = Gesture::Panning(PanState {
				start_x: x,
				start_y: y,
				transform_start_x: self.transform.x,
				transform_start_y: self.transform.y,
			});
		}
	}

	pub fn pointer_move(&mut self, x: f64, y: f64) {
		match &self.gesture {
			Gesture::Dragging(drag) => {
				let (dx, dy) = (
					(x - drag.start_x) / self.transform.k,
					(y - drag.start_y) / self.transform.k,
				);
				let (idx, px, py) = (drag.node_idx, drag.node_start_x + dx, drag.node_start_y + dy);
				self.sim.pin(idx, px, py);
			}
			Gesture::Panning(pan) => {
				self.transform.x = pan.transform_start_x + (x - pan.start_x);
				self.transform.y = pan.transform_start_y + (y - pan.start_y);
			}
			Gesture::Idle => {}
		}
	}

	/// End the gesture. Returns the clicked course when the press stayed
	/// within the click distance and duration.
	pub fn pointer_up(&mut self, x: f64, y: f64, now: f64) -> Option<CourseNode> {
		let Gesture::Dragging(drag) = std::mem::take(&mut self.gesture) else {
			return None;
		};
		self.release(drag.node_idx);

		let (dx, dy) = (x - drag.start_x, y - drag.start_y);
		let distance = (dx * dx + dy * dy).sqrt();
		let duration = now - drag.start_time;
		if distance <= self.interaction.click_max_distance
			&& duration <= self.interaction.click_max_duration_ms
		{
			Some(self.sim.nodes[drag.node_idx].course.clone())
		} else {
			None
		}
	}

	/// Pointer left the canvas: drop any gesture without a click.
	pub fn pointer_leave(&mut self) {
		if let Gesture::Dragging(drag) = std::mem::take(&mut self.gesture) {
			self.release(drag.node_idx);
		}
	}

	fn release(&mut self, idx: usize) {
		self.sim.unpin(idx);
		self.sim.set_alpha_target(0.0);
	}

	/// Zoom one notch; positive `delta_y` zooms out.
	pub fn wheel(&mut self, delta_y: f64) {
		let step = self.interaction.zoom_step;
		let k = if delta_y > 0.0 {
			self.transform.k / step
		} else {
			self.transform.k * step
		};
		self.transform.k = k.clamp(self.interaction.min_zoom, self.interaction.max_zoom);
	}

	pub fn is_dragging(&self) -> bool {
		matches!(self.gesture, Gesture::Dragging(_))
	}

	pub fn tick(&mut self) {
		self.sim.step();
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::courses::course_graph_data;

	const W: f64 = 960.0;
	const H: f64 = 540.0;

	/// A graph relaxed until idle, so collapsed nodes no longer overlap.
	fn state() -> CourseGraphState {
		let mut s = CourseGraphState::new(&course_graph_data(), |_| None, W, H);
		while s.sim.is_active() {
			s.tick();
		}
		s
	}

	fn close(a: (f64, f64), b: (f64, f64)) -> bool {
		(a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
	}

	/// Screen position of a node's centre.
	fn screen_of(s: &CourseGraphState, idx: usize) -> (f64, f64) {
		let node = &s.sim.nodes[idx];
		(
			W / 2.0 + s.transform.x + node.x * s.transform.k,
			H / 2.0 + s.transform.y + node.y * s.transform.k,
		)
	}

	#[test]
	fn quick_press_on_node_is_a_click() {
		let mut s = state();
		let idx = s.sim.node_index("comp250").unwrap();
		let (x, y) = screen_of(&s, idx);

		s.pointer_down(x, y, 1000.0);
		assert!(s.is_dragging());
		let clicked = s.pointer_up(x + 2.0, y + 2.0, 1230.0);

		assert_eq!(clicked.map(|c| c.id), Some("comp250".to_string()));
		assert!(s.sim.nodes[idx].pinned.is_none());
		assert_eq!(s.gesture, Gesture::Idle);
	}

	#[test]
	fn slow_or_far_press_is_a_drag() {
		let mut s = state();
		let idx = s.sim.node_index("ecse324").unwrap();
		let (x, y) = screen_of(&s, idx);

		s.pointer_down(x, y, 0.0);
		assert_eq!(s.pointer_up(x, y, 231.0), None);

		let (x, y) = screen_of(&s, idx);
		s.pointer_down(x, y, 0.0);
		s.pointer_move(x + 6.0, y);
		assert_eq!(s.pointer_up(x + 6.0, y, 50.0), None);
	}

	#[test]
	fn drag_pins_node_to_pointer() {
		let mut s = state();
		s.transform.k = 2.0;
		let idx = s.sim.node_index("comp551").unwrap();
		let (x, y) = screen_of(&s, idx);
		let (nx, ny) = (s.sim.nodes[idx].x, s.sim.nodes[idx].y);

		s.pointer_down(x, y, 0.0);
		s.pointer_move(x + 40.0, y - 20.0);
		let pinned = s.sim.nodes[idx].pinned.unwrap();
		assert!(close(pinned, (nx + 20.0, ny - 10.0)));
		s.tick();
		assert_eq!((s.sim.nodes[idx].x, s.sim.nodes[idx].y), pinned);

		s.pointer_leave();
		assert!(s.sim.nodes[idx].pinned.is_none());
	}

	#[test]
	fn background_press_pans_without_moving_nodes() {
		let mut s = state();
		let before: Vec<(f64, f64)> = s.sim.nodes.iter().map(|n| (n.x, n.y)).collect();

		s.pointer_down(-10_000.0, -10_000.0, 0.0);
		assert!(matches!(s.gesture, Gesture::Panning(_)));
		s.pointer_move(-9_980.0, -10_010.0);
		assert_eq!((s.transform.x, s.transform.y), (20.0, -10.0));
		assert_eq!(s.pointer_up(-9_980.0, -10_010.0, 10.0), None);

		let after: Vec<(f64, f64)> = s.sim.nodes.iter().map(|n| (n.x, n.y)).collect();
		assert_eq!(before, after);
		assert!(s.sim.nodes.iter().all(|n| n.pinned.is_none()));
	}

	#[test]
	fn zoom_stays_clamped() {
		let mut s = state();
		for _ in 0..100 {
			s.wheel(-1.0);
		}
		assert_eq!(s.transform.k, 2.5);
		for _ in 0..100 {
			s.wheel(1.0);
		}
		assert_eq!(s.transform.k, 0.5);
		s.wheel(-1.0);
		assert!((s.transform.k - 0.525).abs() < 1e-12);
	}

	#[test]
	fn selecting_unknown_id_clears_expansion() {
		let mut s = state();
		s.set_selected(Some("ecse427"));
		assert_eq!(s.selected_id(), Some("ecse427"));
		s.set_selected(Some("math262"));
		assert_eq!(s.selected_id(), None);
	}

	#[test]
	fn expanded_node_wins_hit_test() {
		let mut s = state();
		let idx = s.sim.node_index("ecse444").unwrap();
		s.set_selected(Some("ecse444"));
		let r = s.sim.effective_radius(idx);
		let (x, y) = screen_of(&s, idx);
		assert_eq!(s.node_at_position(x + r * 0.9, y), Some(idx));
	}

	#[test]
	fn click_bounds_are_inclusive() {
		let mut s = state();
		let idx = s.sim.node_index("comp250").unwrap();
		let (x, y) = screen_of(&s, idx);
		let (x, y) = (x.round(), y.round());

		s.pointer_down(x, y, 1000.0);
		let clicked = s.pointer_up(x + 3.0, y + 4.0, 1230.0);
		assert_eq!(clicked.map(|c| c.id), Some("comp250".to_string()));

		s.pointer_down(x, y, 1000.0);
		assert_eq!(s.pointer_up(x + 3.0, y + 4.0001, 1230.0), None);

		s.pointer_down(x, y, 1000.0);
		assert_eq!(s.pointer_up(x + 3.0, y + 4.0, 1230.5), None);
	}

	#[test]
	fn second_press_releases_held_node() {
		let mut s = state();
		let a = s.sim.node_index("comp250").unwrap();
		let b = s.sim.node_index("ecse324").unwrap();
		let (ax, ay) = screen_of(&s, a);
		let (bx, by) = screen_of(&s, b);

		s.pointer_down(ax, ay, 0.0);
		assert!(s.sim.nodes[a].pinned.is_some());
		s.pointer_down(bx, by, 10.0);
		assert!(s.sim.nodes[a].pinned.is_none());
		assert!(s.sim.nodes[b].pinned.is_some());
		s.pointer_up(bx, by, 20.0);
		assert!(s.sim.nodes.iter().all(|n| n.pinned.is_none()));

		s.pointer_down(ax, ay, 30.0);
		s.pointer_down(-10_000.0, -10_000.0, 40.0);
		assert!(matches!(s.gesture, Gesture::Panning(_)));
		assert!(s.sim.nodes.iter().all(|n| n.pinned.is_none()));
	}
}

//! Damped force relaxation over an arena of course nodes.
//!
//! One [`Simulation::step`] runs per animation frame. Forces write into node
//! velocities; integration then applies velocity decay and moves every node
//! that is not pinned. The energy term `alpha` scales the link and charge
//! forces and moves toward `alpha_target`; once it falls under `alpha_min`
//! with no target above that, the simulation is idle until reheated.

use std::collections::HashMap;
use std::f64::consts::PI;

use log::debug;

use super::config::SimulationConfig;
use super::types::{CourseNode, GraphData};

#[derive(Clone, Debug)]
pub struct SimNode {
	pub course: CourseNode,
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Position held while the node is dragged.
	pub pinned: Option<(f64, f64)>,
	pub collapsed_radius: f64,
}

/// Directed link by arena index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimLink {
	pub source: usize,
	pub target: usize,
}

pub struct Simulation {
	pub nodes: Vec<SimNode>,
	pub links: Vec<SimLink>,
	pub config: SimulationConfig,
	/// Share of each link's correction applied to the target, by degree.
	link_bias: Vec<f64>,
	alpha: f64,
	alpha_target: f64,
	expanded: Option<usize>,
}

/// Tiny deterministic offset used to separate coincident points.
fn jiggle(seed: usize) -> f64 {
	(((seed as f64) * 0.618_034).fract() - 0.5) * 1e-6
}

impl Simulation {
	/// Build the arena from course tables. `label_width` measures a node's code
	/// label; `None` keeps the tier base radius. Links naming an unknown id are
	/// dropped.
	pub fn new(
		data: &GraphData,
		config: SimulationConfig,
		label_width: impl Fn(&str) -> Option<f64>,
	) -> Self {
		let golden_angle = PI * (3.0 - 5.0_f64.sqrt());
		let nodes: Vec<SimNode> = data
			.nodes
			.iter()
			.enumerate()
			.map(|(i, course)| {
				let radius = 10.0 * (0.5 + i as f64).sqrt();
				let angle = i as f64 * golden_angle;
				SimNode {
					collapsed_radius: config.collapsed_radius(course.tier, label_width(&course.code)),
					course: course.clone(),
					x: radius * angle.cos(),
					y: radius * angle.sin(),
					vx: 0.0,
					vy: 0.0,
					pinned: None,
				}
			})
			.collect();

		let id_to_idx: HashMap<&str, usize> = nodes
			.iter()
			.enumerate()
			.map(|(i, n)| (n.course.id.as_str(), i))
			.collect();

		let mut links = Vec::new();
		for link in &data.links {
			match (
				id_to_idx.get(link.source.as_str()),
				id_to_idx.get(link.target.as_str()),
			) {
				(Some(&source), Some(&target)) => links.push(SimLink { source, target }),
				_ => debug!("dropping link {} -> {}: unknown course", link.source, link.target),
			}
		}

		let mut degree = vec![0usize; nodes.len()];
		for link in &links {
			degree[link.source] += 1;
			degree[link.target] += 1;
		}
		let link_bias = links
			.iter()
			.map(|l| degree[l.source] as f64 / (degree[l.source] + degree[l.target]) as f64)
			.collect();

		Self {
			nodes,
			links,
			config,
			link_bias,
			alpha: 1.0,
			alpha_target: 0.0,
			expanded: None,
		}
	}

	pub fn node_index(&self, id: &str) -> Option<usize> {
		self.nodes.iter().position(|n| n.course.id == id)
	}

	pub fn is_active(&self) -> bool {
		self.alpha >= self.config.alpha_min || self.alpha_target >= self.config.alpha_min
	}

	/// Bump the energy term so nodes re-settle.
	pub fn reheat(&mut self, alpha: f64) {
		self.alpha = alpha;
	}

	/// A target at or above `alpha_min` keeps an idle simulation stepping, and
	/// alpha then climbs toward it by `alpha_decay` per step.
	pub fn set_alpha_target(&mut self, target: f64) {
		self.alpha_target = target;
	}

	pub fn expanded(&self) -> Option<usize> {
		self.expanded
	}

	/// Change which node uses the expanded radius. Reheats on change.
	pub fn set_expanded(&mut self, idx: Option<usize>) {
		let idx = idx.filter(|&i| i < self.nodes.len());
		if self.expanded == idx {
			return;
		}
		self.expanded = idx;
		self.reheat(self.config.reheat_alpha);
	}

	/// Radius used for rendering, hit testing and collision.
	pub fn effective_radius(&self, idx: usize) -> f64 {
		let r = self.nodes[idx].collapsed_radius;
		if self.expanded == Some(idx) {
			r * self.config.expanded_scale
		} else {
			r
		}
	}

	pub fn pin(&mut self, idx: usize, x: f64, y: f64) {
		if let Some(node) = self.nodes.get_mut(idx) {
			node.pinned = Some((x, y));
		}
	}

	pub fn unpin(&mut self, idx: usize) {
		if let Some(node) = self.nodes.get_mut(idx) {
			node.pinned = None;
		}
	}

	/// Advance one step. Returns `false` without moving anything when idle.
	pub fn step(&mut self) -> bool {
		if !self.is_active() {
			return false;
		}
		self.alpha += (self.alpha_target - self.alpha) * self.config.alpha_decay;

		self.apply_links();
		self.apply_charge();
		self.apply_center();
		self.apply_collision();

		let keep = 1.0 - self.config.velocity_decay;
		for node in &mut self.nodes {
			if let Some((px, py)) = node.pinned {
				node.x = px;
				node.y = py;
				node.vx = 0.0;
				node.vy = 0.0;
			} else {
				node.vx *= keep;
				node.vy *= keep;
				node.x += node.vx;
				node.y += node.vy;
			}
		}

		if !self.is_active() {
			debug!("simulation settled");
		}
		true
	}

	fn apply_links(&mut self) {
		let (distance, strength) = (self.config.link_distance, self.config.link_strength);
		for (i, link) in self.links.iter().enumerate() {
			let (s, t) = (&self.nodes[link.source], &self.nodes[link.target]);
			let mut x = t.x + t.vx - s.x - s.vx;
			let mut y = t.y + t.vy - s.y - s.vy;
			if x == 0.0 {
				x = jiggle(i);
			}
			if y == 0.0 {
				y = jiggle(i + 1);
			}
			let len = (x * x + y * y).sqrt();
			let l = (len - distance) / len * self.alpha * strength;
			let (x, y) = (x * l, y * l);
			let bias = self.link_bias[i];

			let t = &mut self.nodes[link.target];
			t.vx -= x * bias;
			t.vy -= y * bias;
			let s = &mut self.nodes[link.source];
			s.vx += x * (1.0 - bias);
			s.vy += y * (1.0 - bias);
		}
	}

	fn apply_charge(&mut self) {
		let n = self.nodes.len();
		let scale = self.config.charge_strength * self.alpha;
		for i in 0..n {
			let (mut fx, mut fy) = (0.0, 0.0);
			let (xi, yi) = (self.nodes[i].x, self.nodes[i].y);
			for j in 0..n {
				if i == j {
					continue;
				}
				let mut x = self.nodes[j].x - xi;
				let mut y = self.nodes[j].y - yi;
				if x == 0.0 {
					x = jiggle(i * n + j);
				}
				if y == 0.0 {
					y = jiggle(j * n + i);
				}
				let mut l = x * x + y * y;
				// avoid blowing up on near-coincident nodes
				if l < 1.0 {
					l = l.sqrt();
				}
				fx += x * scale / l;
				fy += y * scale / l;
			}
			self.nodes[i].vx += fx;
			self.nodes[i].vy += fy;
		}
	}

	fn apply_center(&mut self) {
		let n = self.nodes.len();
		if n == 0 {
			return;
		}
		let (sx, sy) = self
			.nodes
			.iter()
			.fold((0.0, 0.0), |(sx, sy), node| (sx + node.x, sy + node.y));
		let (mx, my) = (sx / n as f64, sy / n as f64);
		for node in &mut self.nodes {
			node.x -= mx;
			node.y -= my;
		}
	}

	fn apply_collision(&mut self) {
		let n = self.nodes.len();
		let strength = self.config.collide_strength;
		let radii: Vec<f64> = (0..n)
			.map(|i| self.effective_radius(i) + self.config.collide_margin)
			.collect();

		for i in 0..n {
			let ri = radii[i];
			let ri2 = ri * ri;
			let xi = self.nodes[i].x + self.nodes[i].vx;
			let yi = self.nodes[i].y + self.nodes[i].vy;
			for j in (i + 1)..n {
				let rj = radii[j];
				let r = ri + rj;
				let mut x = xi - self.nodes[j].x - self.nodes[j].vx;
				let mut y = yi - self.nodes[j].y - self.nodes[j].vy;
				let mut l = x * x + y * y;
				if l >= r * r {
					continue;
				}
				if x == 0.0 {
					x = jiggle(i * n + j);
					l += x * x;
				}
				if y == 0.0 {
					y = jiggle(j * n + i);
					l += y * y;
				}
				let len = l.sqrt();
				let push = (r - len) / len * strength;
				let (x, y) = (x * push, y * push);
				let rj2 = rj * rj;
				let w = rj2 / (ri2 + rj2);

				self.nodes[i].vx += x * w;
				self.nodes[i].vy += y * w;
				self.nodes[j].vx -= x * (1.0 - w);
				self.nodes[j].vy -= y * (1.0 - w);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::course_graph::types::{CourseLink, Tier};

	fn course(id: &str, tier: Tier) -> CourseNode {
		CourseNode {
			id: id.into(),
			code: id.to_uppercase(),
			title: String::new(),
			description: String::new(),
			tier,
		}
	}

	fn link(source: &str, target: &str) -> CourseLink {
		CourseLink {
			source: source.into(),
			target: target.into(),
		}
	}

	fn unmeasured(_: &str) -> Option<f64> {
		None
	}

	#[test]
	fn links_with_missing_endpoint_are_dropped() {
		let data = GraphData {
			nodes: vec![
				course("ecse202", Tier::Foundational),
				course("comp250", Tier::Foundational),
			],
			links: vec![link("ecse202", "comp250"), link("comp250", "comp251")],
		};
		let sim = Simulation::new(&data, SimulationConfig::default(), unmeasured);

		assert_eq!(sim.links.len(), 1);
		let only = sim.links[0];
		assert_eq!(sim.nodes[only.source].course.id, "ecse202");
		assert_eq!(sim.nodes[only.target].course.id, "comp250");
	}

	#[test]
	fn graph_without_valid_links_still_builds() {
		let data = GraphData {
			nodes: vec![course("a", Tier::Advanced)],
			links: vec![link("x", "y"), link("a", "y"), link("x", "a")],
		};
		let mut sim = Simulation::new(&data, SimulationConfig::default(), unmeasured);
		assert!(sim.links.is_empty());
		assert!(sim.step());
	}

	#[test]
	fn expanded_radius_scales_collapsed() {
		let data = GraphData {
			nodes: vec![
				course("comp250", Tier::Foundational),
				course("comp251", Tier::Intermediate),
			],
			links: vec![],
		};
		// "COMP250" label needs radius 16: width 20 -> 20 / 2 + 6
		let mut sim = Simulation::new(&data, SimulationConfig::default(), |code| {
			(code == "COMP250").then_some(20.0)
		});
		let idx = sim.node_index("comp250").unwrap();

		assert_eq!(sim.effective_radius(idx), 16.0);
		sim.set_expanded(Some(idx));
		assert!((sim.effective_radius(idx) - 44.8).abs() < 1e-9);

		let other = sim.node_index("comp251").unwrap();
		assert_eq!(sim.effective_radius(other), 22.0);
	}

	#[test]
	fn settles_then_wakes_on_selection_change() {
		let data = GraphData {
			nodes: vec![
				course("a", Tier::Foundational),
				course("b", Tier::Intermediate),
				course("c", Tier::Advanced),
			],
			links: vec![link("a", "b"), link("b", "c")],
		};
		let mut sim = Simulation::new(&data, SimulationConfig::default(), unmeasured);
		for _ in 0..400 {
			sim.step();
		}
		assert!(!sim.is_active());
		assert!(!sim.step());

		sim.set_expanded(Some(1));
		assert!(sim.is_active());
		assert_eq!(sim.alpha, 0.9);

		// same selection again does not reheat
		for _ in 0..400 {
			sim.step();
		}
		sim.set_expanded(Some(1));
		assert!(!sim.is_active());
	}

	#[test]
	fn collision_separates_overlapping_nodes() {
		let data = GraphData {
			nodes: vec![course("a", Tier::Advanced), course("b", Tier::Advanced)],
			links: vec![],
		};
		let mut sim = Simulation::new(&data, SimulationConfig::default(), unmeasured);
		sim.nodes[0].x = 0.0;
		sim.nodes[0].y = 0.0;
		sim.nodes[1].x = 3.0;
		sim.nodes[1].y = 1.0;
		for _ in 0..300 {
			sim.step();
		}
		let (dx, dy) = (sim.nodes[1].x - sim.nodes[0].x, sim.nodes[1].y - sim.nodes[0].y);
		let min_sep = 2.0 * (30.0 + sim.config.collide_margin);
		assert!((dx * dx + dy * dy).sqrt() >= min_sep - 0.5);
	}

	#[test]
	fn pinned_node_holds_position() {
		let data = GraphData {
			nodes: vec![course("a", Tier::Foundational), course("b", Tier::Foundational)],
			links: vec![link("a", "b")],
		};
		let mut sim = Simulation::new(&data, SimulationConfig::default(), unmeasured);
		sim.pin(0, 40.0, -25.0);
		sim.set_alpha_target(0.2);
		for _ in 0..50 {
			sim.step();
		}
		assert_eq!((sim.nodes[0].x, sim.nodes[0].y), (40.0, -25.0));
		assert!(sim.is_active());

		sim.unpin(0);
		sim.set_alpha_target(0.0);
		sim.step();
		assert!(sim.nodes[0].pinned.is_none());
	}

	#[test]
	fn drag_target_ramps_alpha_on_idle_simulation() {
		let data = GraphData {
			nodes: vec![course("a", Tier::Foundational), course("b", Tier::Advanced)],
			links: vec![link("a", "b")],
		};
		let mut sim = Simulation::new(&data, SimulationConfig::default(), unmeasured);
		while sim.step() {}
		let idle_alpha = sim.alpha;
		assert!(idle_alpha < sim.config.alpha_min);

		sim.set_alpha_target(0.2);
		assert_eq!(sim.alpha, idle_alpha);
		assert!(sim.is_active());
		assert!(sim.step());
		let expected = idle_alpha + (0.2 - idle_alpha) * sim.config.alpha_decay;
		assert!((sim.alpha - expected).abs() < 1e-12);
		assert!(sim.alpha < 0.2);

		sim.set_alpha_target(0.0);
		while sim.step() {}
		assert!(!sim.is_active());
	}
}

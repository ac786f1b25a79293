//! Tuned constants for the course graph.

use super::types::Tier;

/// Force layout and sizing parameters.
#[derive(Clone, Copy, Debug)]
pub struct SimulationConfig {
	pub link_distance: f64,
	pub link_strength: f64,
	pub charge_strength: f64,
	/// Extra separation added to each radius by the collision force.
	pub collide_margin: f64,
	pub collide_strength: f64,
	pub alpha_decay: f64,
	pub alpha_min: f64,
	pub velocity_decay: f64,
	/// Energy applied when the expanded node changes.
	pub reheat_alpha: f64,
	/// Energy floor held while a node is pressed.
	pub drag_alpha_target: f64,
	pub expanded_scale: f64,
	pub label_font_px: f64,
	pub label_padding: f64,
}

impl Default for SimulationConfig {
	fn default() -> Self {
		Self {
			link_distance: 120.0,
			link_strength: 0.5,
			charge_strength: -120.0,
			collide_margin: 8.0,
			collide_strength: 1.0,
			alpha_decay: 0.02,
			alpha_min: 0.001,
			velocity_decay: 0.4,
			reheat_alpha: 0.9,
			drag_alpha_target: 0.2,
			expanded_scale: 2.8,
			label_font_px: 10.0,
			label_padding: 6.0,
		}
	}
}

impl SimulationConfig {
	pub fn tier_base_radius(&self, tier: Tier) -> f64 {
		match tier {
			Tier::Foundational => 14.0,
			Tier::Intermediate => 22.0,
			Tier::Advanced => 30.0,
		}
	}

	/// Radius needed to fit a label of the given measured width.
	pub fn label_radius(&self, label_width: f64) -> f64 {
		let from_width = label_width / 2.0 + self.label_padding;
		let from_height = self.label_font_px / 2.0 + self.label_padding;
		from_width.max(from_height)
	}

	/// Collapsed radius: the tier base, grown to fit the label when it is known.
	pub fn collapsed_radius(&self, tier: Tier, label_width: Option<f64>) -> f64 {
		let base = self.tier_base_radius(tier);
		label_width.map_or(base, |w| base.max(self.label_radius(w)))
	}
}

/// Pointer, wheel and selection timing thresholds.
#[derive(Clone, Copy, Debug)]
pub struct InteractionConfig {
	/// Max pointer travel in screen px for a press to count as a click.
	pub click_max_distance: f64,
	pub click_max_duration_ms: f64,
	pub expand_delay_ms: u64,
	pub zoom_step: f64,
	pub min_zoom: f64,
	pub max_zoom: f64,
}

impl Default for InteractionConfig {
	fn default() -> Self {
		Self {
			click_max_distance: 5.0,
			click_max_duration_ms: 230.0,
			expand_delay_ms: 220,
			zoom_step: 1.05,
			min_zoom: 0.5,
			max_zoom: 2.5,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn collapsed_radius_never_below_tier_base() {
		let cfg = SimulationConfig::default();
		for tier in [Tier::Foundational, Tier::Intermediate, Tier::Advanced] {
			let base = cfg.tier_base_radius(tier);
			assert_eq!(cfg.collapsed_radius(tier, None), base);
			assert_eq!(cfg.collapsed_radius(tier, Some(0.0)), base);
			assert!(cfg.collapsed_radius(tier, Some(200.0)) >= base);
		}
	}

	#[test]
	fn label_width_grows_radius() {
		let cfg = SimulationConfig::default();
		// 20px wide label -> 20 / 2 + 6 = 16
		assert_eq!(cfg.label_radius(20.0), 16.0);
		assert_eq!(cfg.collapsed_radius(Tier::Foundational, Some(20.0)), 16.0);
		// short labels are bounded by the font height
		assert_eq!(cfg.label_radius(2.0), 11.0);
	}
}

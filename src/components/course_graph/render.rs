use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::CourseGraphState;
use super::types::Tier;
use crate::theme::Palette;

/// Font used for collapsed labels; label radii are measured with it.
pub const LABEL_FONT: &str = "10px system-ui, -apple-system, \"Segoe UI\", sans-serif";
const CODE_FONT: &str = "600 11px system-ui, -apple-system, \"Segoe UI\", sans-serif";
const TITLE_FONT: &str = "500 10px system-ui, -apple-system, \"Segoe UI\", sans-serif";
const BODY_FONT: &str = LABEL_FONT;
const ARROW_SIZE: f64 = 7.0;
const LINE_HEIGHT: f64 = 1.4;
const DETAIL_PADDING: f64 = 8.0;

/// An edge clipped to the rims of its endpoint circles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeSegment {
	pub x1: f64,
	pub y1: f64,
	pub x2: f64,
	pub y2: f64,
	/// Unit direction from source to target.
	pub ux: f64,
	pub uy: f64,
}

/// Rim-to-rim segment between two circles, `None` when the centres coincide.
pub fn edge_segment(
	(sx, sy): (f64, f64),
	source_radius: f64,
	(tx, ty): (f64, f64),
	target_radius: f64,
) -> Option<EdgeSegment> {
	let (dx, dy) = (tx - sx, ty - sy);
	let dist = (dx * dx + dy * dy).sqrt();
	if dist < 0.001 {
		return None;
	}
	let (ux, uy) = (dx / dist, dy / dist);
	Some(EdgeSegment {
		x1: sx + ux * source_radius,
		y1: sy + uy * source_radius,
		x2: tx - ux * target_radius,
		y2: ty - uy * target_radius,
		ux,
		uy,
	})
}

/// Greedy word wrap against a width measure.
pub fn wrap_text(text: &str, max_width: f64, measure: impl Fn(&str) -> f64) -> Vec<String> {
	let mut lines = Vec::new();
	let mut line = String::new();
	for word in text.split_whitespace() {
		if line.is_empty() {
			line.push_str(word);
			continue;
		}
		let candidate = format!("{line} {word}");
		if measure(&candidate) <= max_width {
			line = candidate;
		} else {
			lines.push(std::mem::replace(&mut line, word.to_owned()));
		}
	}
	if !line.is_empty() {
		lines.push(line);
	}
	lines
}

pub fn render(state: &CourseGraphState, ctx: &CanvasRenderingContext2d, palette: &Palette) {
	ctx.set_fill_style_str(palette.background);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(
		state.width / 2.0 + state.transform.x,
		state.height / 2.0 + state.transform.y,
	);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx, palette);
	draw_nodes(state, ctx, palette);
	ctx.restore();
}

fn draw_edges(state: &CourseGraphState, ctx: &CanvasRenderingContext2d, palette: &Palette) {
	let sim = &state.sim;
	let selected = sim.expanded();

	ctx.set_stroke_style_str(palette.edge);
	ctx.set_fill_style_str(palette.edge);
	ctx.set_line_width(1.0);
	for link in &sim.links {
		let (s, t) = (&sim.nodes[link.source], &sim.nodes[link.target]);
		let Some(seg) = edge_segment(
			(s.x, s.y),
			sim.effective_radius(link.source),
			(t.x, t.y),
			sim.effective_radius(link.target),
		) else {
			continue;
		};

		let dimmed = selected.is_some_and(|i| link.source != i && link.target != i);
		ctx.set_global_alpha(if dimmed { 0.35 } else { 0.9 });

		let (back_x, back_y) = (seg.x2 - seg.ux * ARROW_SIZE, seg.y2 - seg.uy * ARROW_SIZE);
		ctx.begin_path();
		ctx.move_to(seg.x1, seg.y1);
		ctx.line_to(back_x, back_y);
		ctx.stroke();

		let (px, py) = (-seg.uy * ARROW_SIZE * 0.5, seg.ux * ARROW_SIZE * 0.5);
		ctx.begin_path();
		ctx.move_to(seg.x2, seg.y2);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	}
	ctx.set_global_alpha(1.0);
}

fn draw_nodes(state: &CourseGraphState, ctx: &CanvasRenderingContext2d, palette: &Palette) {
	let sim = &state.sim;
	let selected = sim.expanded();

	for idx in (0..sim.nodes.len()).filter(|&i| Some(i) != selected) {
		let node = &sim.nodes[idx];
		let radius = sim.effective_radius(idx);
		ctx.set_global_alpha(if selected.is_some() { 0.55 } else { 1.0 });
		draw_circle(ctx, palette, node.x, node.y, radius, node.course.tier, false);

		ctx.set_font(LABEL_FONT);
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		ctx.set_fill_style_str(palette.text);
		let _ = ctx.fill_text(&node.course.code, node.x, node.y);
	}
	ctx.set_global_alpha(1.0);

	if let Some(idx) = selected {
		let node = &sim.nodes[idx];
		let radius = sim.effective_radius(idx);
		draw_circle(ctx, palette, node.x, node.y, radius, node.course.tier, true);
		draw_details(ctx, palette, state, idx, radius);
	}
}

fn draw_circle(
	ctx: &CanvasRenderingContext2d,
	palette: &Palette,
	x: f64,
	y: f64,
	radius: f64,
	tier: Tier,
	selected: bool,
) {
	ctx.save();
	if selected {
		ctx.set_shadow_color("rgba(59, 130, 246, 0.55)");
		ctx.set_shadow_blur(12.0);
	} else {
		ctx.set_shadow_color("rgba(148, 163, 184, 0.4)");
		ctx.set_shadow_blur(4.0);
	}
	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(if tier == Tier::Advanced {
		palette.primary
	} else {
		palette.surface
	});
	ctx.fill();
	ctx.restore();

	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
	ctx.set_stroke_style_str(if selected { palette.primary } else { palette.border });
	ctx.set_line_width(if selected { 3.0 } else { 2.0 });
	ctx.stroke();
}

/// Code, title and description inside the expanded circle, clipped to it.
fn draw_details(
	ctx: &CanvasRenderingContext2d,
	palette: &Palette,
	state: &CourseGraphState,
	idx: usize,
	radius: f64,
) {
	let node = &state.sim.nodes[idx];
	let course = &node.course;
	let max_width = radius * 1.6 - 2.0 * DETAIL_PADDING;
	let measure = |font: &str| {
		ctx.set_font(font);
		move |s: &str| ctx.measure_text(s).map(|m| m.width()).unwrap_or(0.0)
	};

	let mut blocks: Vec<(&str, f64, Vec<String>)> = Vec::new();
	for (text, font, size) in [
		(course.code.as_str(), CODE_FONT, 11.0),
		(course.title.as_str(), TITLE_FONT, 10.0),
		(course.description.as_str(), BODY_FONT, 10.0),
	] {
		let lines = wrap_text(text, max_width, measure(font));
		blocks.push((font, size, lines));
	}

	let gap = 4.0;
	let total: f64 = blocks
		.iter()
		.map(|(_, size, lines)| lines.len() as f64 * size * LINE_HEIGHT)
		.sum::<f64>()
		+ gap * (blocks.len() - 1) as f64;

	ctx.save();
	ctx.begin_path();
	let _ = ctx.arc(node.x, node.y, radius, 0.0, 2.0 * PI);
	ctx.clip();

	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	ctx.set_fill_style_str(palette.text);
	let mut y = node.y - total / 2.0;
	for (font, size, lines) in &blocks {
		ctx.set_font(font);
		let line_height = size * LINE_HEIGHT;
		for line in lines {
			let _ = ctx.fill_text(line, node.x, y + line_height / 2.0);
			y += line_height;
		}
		y += gap;
	}
	ctx.restore();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn edge_runs_rim_to_rim() {
		let seg = edge_segment((0.0, 0.0), 10.0, (100.0, 0.0), 20.0).unwrap();
		assert_eq!((seg.x1, seg.y1, seg.x2, seg.y2), (10.0, 0.0, 80.0, 0.0));
		assert_eq!((seg.ux, seg.uy), (1.0, 0.0));

		let seg = edge_segment((0.0, 0.0), 5.0, (30.0, 40.0), 44.8).unwrap();
		assert!((seg.x1 - 3.0).abs() < 1e-9 && (seg.y1 - 4.0).abs() < 1e-9);
		let left = ((seg.x2 - 30.0).powi(2) + (seg.y2 - 40.0).powi(2)).sqrt();
		assert!((left - 44.8).abs() < 1e-9);
	}

	#[test]
	fn coincident_centres_draw_nothing() {
		assert_eq!(edge_segment((4.0, 4.0), 10.0, (4.0, 4.0), 10.0), None);
	}

	#[test]
	fn wraps_on_word_boundaries() {
		let measure = |s: &str| s.chars().count() as f64 * 5.0;
		let lines = wrap_text("Core programming concepts and data", 60.0, measure);
		assert_eq!(lines, vec!["Core", "programming", "concepts and", "data"]);
		assert!(wrap_text("   ", 60.0, measure).is_empty());
	}
}

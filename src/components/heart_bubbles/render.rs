//! Canvas drawing for the bubble field.
//!
//! One pass per frame: clear the surface, switch to additive compositing so
//! overlapping bubbles brighten rather than occlude, then draw every bubble
//! in its current phase — a heart silhouette while intact, radiating burst
//! lines after.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::bubble::Bubble;
use super::state::BubbleFieldState;
use super::theme::Theme;

/// Number of radiating lines in a burst.
const BURST_RAYS: u32 = 10;
/// Burst inner radius: base plus growth per post-burst frame.
const BURST_INNER: (f64, f64) = (10.0, 1.0);
/// Burst outer radius: base plus growth per post-burst frame.
const BURST_OUTER: (f64, f64) = (20.0, 0.5);

/// Renders the complete field to the canvas.
pub fn render(state: &BubbleFieldState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	let _ = ctx.set_global_composite_operation("lighter");

	for bubble in &state.bubbles {
		if bubble.is_bursted() {
			draw_burst(ctx, bubble, theme);
		} else {
			draw_heart(ctx, bubble, theme);
		}
	}
}

/// Heart silhouette: two mirrored cubic curves anchored at the bubble's
/// center and scaled by its current size.
fn draw_heart(ctx: &CanvasRenderingContext2d, bubble: &Bubble, theme: &Theme) {
	let (x, y, size) = (bubble.x, bubble.y, bubble.size);
	let top_curve_height = size * 0.75;
	let width_factor = size * 0.8;

	ctx.save();
	ctx.begin_path();

	ctx.move_to(x, y + size / 2.0);
	ctx.bezier_curve_to(
		x - width_factor,
		y + size / 3.0,
		x - width_factor * 1.3,
		y - top_curve_height * 0.8,
		x,
		y - size / 5.0,
	);
	ctx.bezier_curve_to(
		x + width_factor * 1.3,
		y - top_curve_height * 0.8,
		x + width_factor,
		y + size / 3.0,
		x,
		y + size / 2.0,
	);

	ctx.set_fill_style_str(&theme.bubble_fill.to_css());
	ctx.fill();
	ctx.close_path();
	ctx.restore();
}

/// Burst flash: short line segments radiating at 36-degree steps, both
/// radii widening linearly with the frames since the burst fired.
fn draw_burst(ctx: &CanvasRenderingContext2d, bubble: &Bubble, theme: &Theme) {
	let age = bubble.burst_age() as f64;
	let inner = BURST_INNER.0 + age * BURST_INNER.1;
	let outer = BURST_OUTER.0 + age * BURST_OUTER.1;

	ctx.begin_path();
	for ray in 0..BURST_RAYS {
		let radian = PI / 180.0 * (ray * 36) as f64;
		ctx.move_to(
			bubble.x + inner * radian.sin(),
			bubble.y + inner * radian.cos(),
		);
		ctx.line_to(
			bubble.x + outer * radian.sin(),
			bubble.y + outer * radian.cos(),
		);
	}
	ctx.set_stroke_style_str(&theme.burst_stroke.to_css());
	ctx.stroke();
	ctx.close_path();
}

//! Bubble pool, pointer tracking, and the per-frame simulation steps.

use super::bubble::{Bubble, random_unit};

/// Upper bound on simultaneously live bubbles.
pub const MAX_BUBBLES: usize = 28;
/// Chance per frame of spawning one bubble while below [`MAX_BUBBLES`].
pub const SPAWN_CHANCE: f64 = 0.2;
/// Extra reach added to a bubble's size for the pointer proximity test.
const POINTER_MARGIN: f64 = 20.0;

/// Owning state for the bubble field.
///
/// Created once when the component mounts, then mutated each frame by the
/// animation loop: [`BubbleFieldState::advance`] runs the spawn, collision,
/// and update steps, and [`BubbleFieldState::prune`] drops destroyed
/// bubbles once they have been drawn a final time.
pub struct BubbleFieldState {
	/// Live bubbles, at most [`MAX_BUBBLES`].
	pub bubbles: Vec<Bubble>,
	/// Last known pointer position, `None` while the pointer is away.
	pub pointer: Option<(f64, f64)>,
	/// Surface width in pixels.
	pub width: f64,
	/// Surface height in pixels.
	pub height: f64,
}

impl BubbleFieldState {
	/// Empty field over a `width` x `height` surface.
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			bubbles: Vec::with_capacity(MAX_BUBBLES),
			pointer: None,
			width,
			height,
		}
	}

	/// Record a new surface size. Live bubbles keep the baseline they
	/// spawned with; only subsequent spawns see the new dimensions.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Record the pointer position in surface coordinates.
	pub fn set_pointer(&mut self, x: f64, y: f64) {
		self.pointer = Some((x, y));
	}

	/// Forget the pointer once it leaves the surface.
	pub fn clear_pointer(&mut self) {
		self.pointer = None;
	}

	/// Run one frame of simulation: maybe spawn a bubble, burst bubbles
	/// within reach of the pointer, then advance every bubble.
	pub fn advance(&mut self) {
		if self.bubbles.len() < MAX_BUBBLES && random_unit() < SPAWN_CHANCE {
			self.bubbles.push(Bubble::spawn(self.width, self.height));
		}

		self.collision_step();

		for bubble in &mut self.bubbles {
			bubble.update();
		}
	}

	/// Drop every bubble flagged as destroyed. Runs after the draw pass so
	/// the final burst frame is still rendered.
	pub fn prune(&mut self) {
		self.bubbles.retain(|bubble| !bubble.is_destroyed());
	}

	fn collision_step(&mut self) {
		let Some((px, py)) = self.pointer else {
			return;
		};

		for bubble in &mut self.bubbles {
			let (dx, dy) = (bubble.x - px, bubble.y - py);
			if (dx * dx + dy * dy).sqrt() < bubble.size + POINTER_MARGIN {
				bubble.burst();
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::heart_bubbles::bubble::BURST_LIFETIME;

	fn placed(x: f64, y: f64, size: f64) -> Bubble {
		let mut bubble = Bubble::spawn(800.0, 600.0);
		bubble.x = x;
		bubble.y = y;
		bubble.size = size;
		bubble
	}

	#[test]
	fn pool_never_exceeds_limit() {
		let mut field = BubbleFieldState::new(800.0, 600.0);
		let mut saw_any = false;
		for _ in 0..10_000 {
			field.advance();
			assert!(field.bubbles.len() <= MAX_BUBBLES);
			field.prune();
			saw_any |= !field.bubbles.is_empty();
		}
		assert!(saw_any);
	}

	#[test]
	fn pointer_within_reach_bursts_any_phase() {
		let mut field = BubbleFieldState::new(800.0, 600.0);
		field.bubbles.push(placed(100.0, 100.0, 20.0));

		// Distance 5 against a reach of size + margin = 40.
		field.set_pointer(105.0, 100.0);
		field.collision_step();
		assert!(field.bubbles[0].is_bursted());
	}

	#[test]
	fn pointer_out_of_reach_leaves_bubbles_alone() {
		let mut field = BubbleFieldState::new(800.0, 600.0);
		field.bubbles.push(placed(100.0, 100.0, 20.0));

		field.set_pointer(200.0, 100.0);
		field.collision_step();
		assert!(!field.bubbles[0].is_bursted());
	}

	#[test]
	fn absent_pointer_makes_collision_a_no_op() {
		let mut field = BubbleFieldState::new(800.0, 600.0);
		field.bubbles.push(placed(100.0, 100.0, 20.0));

		field.set_pointer(105.0, 100.0);
		field.clear_pointer();
		field.collision_step();
		assert!(!field.bubbles[0].is_bursted());
	}

	#[test]
	fn resize_applies_to_subsequent_spawns() {
		let mut field = BubbleFieldState::new(800.0, 600.0);
		field.resize(1024.0, 768.0);

		for _ in 0..200 {
			let bubble = Bubble::spawn(field.width, field.height);
			assert!(bubble.x >= 0.0 && bubble.x < 1024.0);
			assert_eq!(bubble.y, 748.0);
		}
	}

	#[test]
	fn prune_removes_exactly_the_destroyed() {
		let mut field = BubbleFieldState::new(800.0, 600.0);
		for _ in 0..5 {
			field.bubbles.push(Bubble::spawn(800.0, 600.0));
		}
		field.bubbles[1].burst();
		field.bubbles[3].burst();

		for _ in 0..=BURST_LIFETIME {
			for bubble in &mut field.bubbles {
				bubble.update();
			}
		}

		field.prune();
		assert_eq!(field.bubbles.len(), 3);
		assert!(field.bubbles.iter().all(|b| !b.is_destroyed()));
	}
}

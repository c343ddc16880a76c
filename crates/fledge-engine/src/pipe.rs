//! Gap obstacles and their difficulty curve.

use rand::Rng;

use crate::config::WorldConfig;

/// A procedurally generated gap obstacle.
///
/// A pipe fills the full height of the world except for a traversable gap of
/// fixed size at a random vertical offset: a solid segment from the top of
/// the world down to [`gap_top`](Self::gap_top), and one from
/// [`gap_bottom`](Self::gap_bottom) down to the bottom of the world. It
/// advances left by its fixed speed every tick and is discarded once fully
/// off-screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    x: f32,
    width: f32,
    gap_top: f32,
    gap_bottom: f32,
    speed: f32,
}

impl Pipe {
    /// Spawns a pipe at the world's right edge.
    ///
    /// The gap's top edge is drawn uniformly so that both solid segments are
    /// at least `min_segment` tall, guaranteeing
    /// `gap_top + gap + bottom_segment == world.height`.
    ///
    /// # Panics
    ///
    /// Panics if the world is too short to fit the gap between two minimum
    /// segments (configuration error).
    #[must_use]
    pub fn spawn<R>(world: &WorldConfig, speed: f32, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let cfg = &world.pipe;
        let max_gap_top = world.height - cfg.min_segment - cfg.gap;
        assert!(
            cfg.min_segment < max_gap_top,
            "world height {} cannot fit a {} gap between two {} segments",
            world.height,
            cfg.gap,
            cfg.min_segment
        );
        let gap_top = rng.random_range(cfg.min_segment..max_gap_top);
        Self {
            x: world.width,
            width: cfg.width,
            gap_top,
            gap_bottom: gap_top + cfg.gap,
            speed,
        }
    }

    /// Returns the left edge's horizontal position.
    #[must_use]
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Returns the right edge's horizontal position.
    #[must_use]
    pub fn right_edge(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the pipe's width.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the vertical position of the gap's upper edge.
    #[must_use]
    pub fn gap_top(&self) -> f32 {
        self.gap_top
    }

    /// Returns the vertical position of the gap's lower edge.
    #[must_use]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_bottom
    }

    /// Returns the pipe's fixed forward speed.
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Moves the pipe left by its speed. One call per tick.
    pub fn advance(&mut self) {
        self.x -= self.speed;
    }

    /// Returns `true` once the pipe is fully past the left boundary and
    /// eligible for removal.
    #[must_use]
    pub fn is_offscreen(&self) -> bool {
        self.x < -self.width
    }

    /// Returns `true` if a square of side `size` at `(x, y)` overlaps either
    /// solid segment.
    #[must_use]
    pub fn hits(&self, x: f32, y: f32, size: f32) -> bool {
        let horizontal = x < self.x + self.width && x + size > self.x;
        horizontal && (y < self.gap_top || y + size > self.gap_bottom)
    }
}

/// Returns the nearest pipe still ahead of horizontal position `x`.
///
/// A pipe counts as ahead while its right edge has not passed `x`, so a pipe
/// currently overlapping the agent is still sensed. Pipes fully behind are
/// ignored; returns `None` when no pipe is ahead.
#[must_use]
pub fn nearest_ahead(pipes: &[Pipe], x: f32) -> Option<&Pipe> {
    pipes
        .iter()
        .filter(|pipe| pipe.right_edge() >= x)
        .min_by(|a, b| a.right_edge().total_cmp(&b.right_edge()))
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng as _, rngs::StdRng};

    use super::*;

    fn spawn(rng: &mut StdRng) -> Pipe {
        let world = WorldConfig::default();
        Pipe::spawn(&world, world.pipe.start_speed, rng)
    }

    #[test]
    fn test_gap_geometry_invariant() {
        let world = WorldConfig::default();
        let mut rng = StdRng::seed_from_u64(31);
        for _ in 0..100 {
            let pipe = spawn(&mut rng);
            // Both solid segments respect the minimum, and the gap is fixed.
            assert!(pipe.gap_top() >= world.pipe.min_segment);
            assert!(world.height - pipe.gap_bottom() >= world.pipe.min_segment);
            assert_eq!(pipe.gap_bottom() - pipe.gap_top(), world.pipe.gap);
        }
    }

    #[test]
    fn test_advance_and_offscreen() {
        let mut rng = StdRng::seed_from_u64(32);
        let mut pipe = spawn(&mut rng);
        let start_x = pipe.x();
        pipe.advance();
        assert_eq!(pipe.x(), start_x - pipe.speed());

        while !pipe.is_offscreen() {
            pipe.advance();
        }
        assert!(pipe.x() < -pipe.width());
    }

    #[test]
    fn test_hits_segments_but_not_gap() {
        let mut rng = StdRng::seed_from_u64(33);
        let mut pipe = spawn(&mut rng);
        // Move the pipe over a probe at x = 40.
        while pipe.x() > 20.0 {
            pipe.advance();
        }
        let size = 40.0;
        let x = 40.0;
        // Fully inside the gap, clear of both edges.
        assert!(!pipe.hits(x, pipe.gap_top() + 1.0, size));
        // Poking into the top segment.
        assert!(pipe.hits(x, pipe.gap_top() - size / 2.0, size));
        // Poking into the bottom segment.
        assert!(pipe.hits(x, pipe.gap_bottom() - size / 2.0, size));
        // No horizontal overlap, no hit.
        assert!(!pipe.hits(pipe.right_edge() + 1.0, pipe.gap_top() - size, size));
    }

    #[test]
    fn test_nearest_ahead_ignores_passed_pipes() {
        let world = WorldConfig::default();
        let mut rng = StdRng::seed_from_u64(34);
        let mut behind = Pipe::spawn(&world, 1.0, &mut rng);
        let mut close = Pipe::spawn(&world, 1.0, &mut rng);
        let far = Pipe::spawn(&world, 1.0, &mut rng);

        let x = 100.0;
        // Fully behind the probe.
        while behind.right_edge() >= x {
            behind.advance();
        }
        // Ahead of the probe but closer than `far`.
        while close.right_edge() >= 300.0 {
            close.advance();
        }

        let pipes = [behind, far, close];
        let nearest = nearest_ahead(&pipes, x).unwrap();
        assert_eq!(nearest, &close);

        assert!(nearest_ahead(&pipes[..1], x).is_none());
        assert!(nearest_ahead(&[], x).is_none());
    }
}

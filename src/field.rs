//! Per-particle state storage.
//!
//! `ParticleField` owns four parallel position/velocity arrays plus a color
//! array, one row per contentful pixel. Index `i` refers to the same logical
//! particle across every array for the lifetime of the field. Original
//! positions are fixed at construction; targets, positions and velocities are
//! mutated in place each frame by the influence and integration passes.

use glam::{Vec2, Vec3};
use rand::Rng;

use crate::sampler::PixelSeed;

/// Number of precomputed influence ranges shared across all particles.
pub const INFLUENCE_RANGE_COUNT: usize = 20;

/// Lower bound of the squared influence-radius pool.
pub const INFLUENCE_RANGE_MIN: f32 = 5000.0;

/// Width of the squared influence-radius pool.
pub const INFLUENCE_RANGE_SPAN: f32 = 5000.0;

/// Parallel per-particle state arrays derived from sampled pixel seeds.
pub struct ParticleField {
    original_positions: Vec<Vec2>,
    pub(crate) target_positions: Vec<Vec2>,
    pub(crate) positions: Vec<Vec2>,
    pub(crate) velocities: Vec<Vec2>,
    colors: Vec<Vec3>,
    influence_ranges: [f32; INFLUENCE_RANGE_COUNT],
}

impl ParticleField {
    /// Build a field from sampled seeds and the source image dimensions.
    ///
    /// Seed positions are centered so the field's local origin is the image
    /// center: seed `(x, y)` maps to `(x - width/2, y - height/2)`. Targets
    /// start at the original positions and velocities at zero.
    pub fn new(seeds: &[PixelSeed], width: u32, height: u32) -> Self {
        Self::with_rng(seeds, width, height, &mut rand::thread_rng())
    }

    /// Like [`ParticleField::new`] but drawing the influence-range pool from
    /// the given RNG, for reproducible construction.
    pub fn with_rng(seeds: &[PixelSeed], width: u32, height: u32, rng: &mut impl Rng) -> Self {
        let center = Vec2::new(width as f32 / 2.0, height as f32 / 2.0);

        let positions: Vec<Vec2> = seeds.iter().map(|s| s.position() - center).collect();
        let colors: Vec<Vec3> = seeds
            .iter()
            .map(|s| {
                Vec3::new(
                    s.color[0] as f32 / 255.0,
                    s.color[1] as f32 / 255.0,
                    s.color[2] as f32 / 255.0,
                )
            })
            .collect();

        let mut influence_ranges = [0.0; INFLUENCE_RANGE_COUNT];
        for range in influence_ranges.iter_mut() {
            *range = INFLUENCE_RANGE_MIN + rng.gen::<f32>() * INFLUENCE_RANGE_SPAN;
        }

        Self {
            original_positions: positions.clone(),
            target_positions: positions.clone(),
            velocities: vec![Vec2::ZERO; positions.len()],
            positions,
            colors,
            influence_ranges,
        }
    }

    /// Number of particles in the field.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Current (rendered) positions.
    #[inline]
    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    /// Resting positions fixed at construction.
    #[inline]
    pub fn original_positions(&self) -> &[Vec2] {
        &self.original_positions
    }

    /// Positions the integrator is currently pulling toward.
    #[inline]
    pub fn target_positions(&self) -> &[Vec2] {
        &self.target_positions
    }

    #[inline]
    pub fn velocities(&self) -> &[Vec2] {
        &self.velocities
    }

    /// Particle colors, normalized to [0, 1].
    #[inline]
    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    /// Squared influence radius for particle `index`.
    ///
    /// Ranges come from a pool of [`INFLUENCE_RANGE_COUNT`] draws reused
    /// cyclically, so the assignment is fixed for the particle's lifetime.
    #[inline]
    pub fn influence_range(&self, index: usize) -> f32 {
        self.influence_ranges[index % INFLUENCE_RANGE_COUNT]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn seed(x: u32, y: u32) -> PixelSeed {
        PixelSeed {
            x,
            y,
            color: [255, 128, 0],
        }
    }

    #[test]
    fn positions_are_centered_on_the_image() {
        let field = ParticleField::new(&[seed(0, 0), seed(4, 3)], 4, 2);
        assert_eq!(field.positions()[0], Vec2::new(-2.0, -1.0));
        assert_eq!(field.positions()[1], Vec2::new(2.0, 2.0));
        assert_eq!(field.original_positions(), field.positions());
        assert_eq!(field.target_positions(), field.positions());
    }

    #[test]
    fn velocities_start_at_zero() {
        let field = ParticleField::new(&[seed(1, 1); 5], 2, 2);
        assert!(field.velocities().iter().all(|v| *v == Vec2::ZERO));
    }

    #[test]
    fn colors_are_normalized() {
        let field = ParticleField::new(&[seed(0, 0)], 1, 1);
        let c = field.colors()[0];
        assert_eq!(c.x, 1.0);
        assert!((c.y - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.z, 0.0);
    }

    #[test]
    fn influence_ranges_stay_in_pool_bounds() {
        let mut rng = SmallRng::seed_from_u64(7);
        let field = ParticleField::with_rng(&[seed(0, 0)], 1, 1, &mut rng);
        for i in 0..INFLUENCE_RANGE_COUNT {
            let r = field.influence_range(i);
            assert!((INFLUENCE_RANGE_MIN..INFLUENCE_RANGE_MIN + INFLUENCE_RANGE_SPAN).contains(&r));
        }
    }

    #[test]
    fn influence_pool_repeats_every_twenty_particles() {
        let seeds = vec![seed(0, 0); INFLUENCE_RANGE_COUNT * 3];
        let field = ParticleField::new(&seeds, 1, 1);
        for i in 0..INFLUENCE_RANGE_COUNT {
            assert_eq!(
                field.influence_range(i),
                field.influence_range(i + INFLUENCE_RANGE_COUNT)
            );
            assert_eq!(
                field.influence_range(i),
                field.influence_range(i + 2 * INFLUENCE_RANGE_COUNT)
            );
        }
    }

    #[test]
    fn arrays_share_one_length() {
        let field = ParticleField::new(&[seed(0, 0), seed(1, 0), seed(0, 1)], 2, 2);
        assert_eq!(field.len(), 3);
        assert_eq!(field.original_positions().len(), 3);
        assert_eq!(field.target_positions().len(), 3);
        assert_eq!(field.velocities().len(), 3);
        assert_eq!(field.colors().len(), 3);
    }
}

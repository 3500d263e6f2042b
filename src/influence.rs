//! Pointer influence over the particle field.
//!
//! Each frame, every active pointer claims the particles inside its
//! per-particle squared influence range and pushes their targets away from
//! the pointer; everything outside every range relaxes toward its resting
//! position. Particles close to the pointer are pushed further than ones
//! near the edge of the range, and a random draw per particle keeps the
//! displacement from looking robotic.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::field::ParticleField;
use crate::integrator;
use crate::pointer::PointerTracker;

/// Upper bound of the random displacement magnitude, in field units.
pub const MAX_DISPLACEMENT: f32 = 165.0;

/// Computes per-frame displacement targets and drives the integrator.
pub struct InfluenceEngine {
    rng: SmallRng,
}

impl InfluenceEngine {
    /// Engine with an entropy-seeded RNG.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Engine with a fixed seed, for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Recompute every particle's target for one pointer.
    ///
    /// `pointer_local` is the pointer position translated into field-local
    /// coordinates (window position minus the field anchor). Particles inside
    /// their influence range get a target pushed away from the pointer by up
    /// to [`MAX_DISPLACEMENT`] minus the current distance; everything else
    /// gets its original position back.
    pub fn retarget(&mut self, field: &mut ParticleField, pointer_local: Vec2) {
        for i in 0..field.len() {
            let position = field.positions[i];
            let to_particle = pointer_local - position;
            if to_particle.length_squared() < field.influence_range(i) {
                let magnitude =
                    self.rng.gen::<f32>() * MAX_DISPLACEMENT - to_particle.length();
                // A pointer sitting exactly on a particle has no direction to
                // push along; normalize_or_zero keeps the target finite.
                let movement = to_particle.normalize_or_zero() * magnitude;
                field.target_positions[i] = position - movement;
            } else {
                field.target_positions[i] = field.original_positions()[i];
            }
        }
    }

    /// Advance the field by one frame.
    ///
    /// For each active pointer, in the tracker's iteration order: retarget
    /// every particle, then integrate every particle. When several pointers
    /// claim the same particle the last one iterated decides its target for
    /// the frame. With no active pointers nothing moves.
    pub fn step(
        &mut self,
        field: &mut ParticleField,
        tracker: &PointerTracker,
        anchor: Vec2,
        delta_secs: f32,
    ) {
        let tick = integrator::tick_size(delta_secs);
        for (_, pointer) in tracker.iter() {
            self.retarget(field, pointer.current - anchor);
            integrator::advance(field, tick);
        }
    }
}

impl Default for InfluenceEngine {
    fn default() -> Self {
        Self::new()
    }
}

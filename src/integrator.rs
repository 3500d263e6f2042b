//! Spring/damping integration of particle state.
//!
//! Every particle is pulled toward its current target by a fixed spring
//! rule: the offset to the target feeds the velocity through a stiffness
//! factor, the velocity then decays by a damping factor, and the position
//! advances by the damped velocity scaled by the frame tick. There is no
//! terminal condition; at rest the update is numerically stationary.

use crate::field::ParticleField;

/// Attraction stiffness toward the target position.
pub const STIFFNESS: f32 = 0.02;

/// Velocity decay applied after the stiffness term each tick.
pub const DAMPING: f32 = 0.89;

/// Refresh rate the tick size is normalized against, so perceived particle
/// speed is independent of the actual display refresh rate.
pub const BASELINE_HZ: f32 = 144.0;

/// Convert elapsed frame time to the integration tick size.
#[inline]
pub fn tick_size(delta_secs: f32) -> f32 {
    delta_secs * BASELINE_HZ
}

/// Advance velocity and position for every particle by one tick.
pub fn advance(field: &mut ParticleField, tick: f32) {
    for i in 0..field.len() {
        let velocity = (field.velocities[i]
            + (field.target_positions[i] - field.positions[i]) * STIFFNESS)
            * DAMPING;
        field.velocities[i] = velocity;
        field.positions[i] += velocity * tick;
    }
}

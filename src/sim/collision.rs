//! Circle-circle collision between the puck and a mallet
//!
//! The mallet is treated as an effectively infinite-mass obstacle: the puck
//! reflects elastically off the contact normal, then picks up a fraction of
//! the mallet's own velocity so a moving mallet strikes harder than a
//! stationary one.

use glam::Vec2;

use super::state::{Mallet, Puck};
use crate::consts::MALLET_PUSH_FACTOR;

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Resolve overlap between the puck and one mallet.
///
/// No-op when the circles are separated, or when the centers coincide and no
/// contact normal exists (skipped rather than dividing by zero). Otherwise the
/// puck is pushed fully out of the mallet in one step and its velocity is
/// reflected about the contact normal plus the mallet push.
///
/// Returns whether a collision was resolved. Each mallet is resolved
/// independently against the current puck state; a puck overlapping both
/// mallets in the same tick resolves sequentially.
pub fn resolve_mallet_collision(puck: &mut Puck, mallet: &Mallet) -> bool {
    let d = puck.pos - mallet.pos;
    let distance = d.length();
    let min_distance = puck.radius + mallet.radius;

    if distance >= min_distance || distance <= 0.0 {
        return false;
    }

    let normal = d / distance;

    // Positional correction: fully clear the overlap, no sub-stepping
    puck.pos += normal * (min_distance - distance);

    puck.vel = reflect_velocity(puck.vel, normal) + mallet.vel * MALLET_PUSH_FACTOR;
    true
}

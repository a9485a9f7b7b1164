//! Flight control system: key state → smoothed rates → pose integration.

use glam::{DQuat, DVec3};
use hecs::World;

use skystrike_core::components::{Aircraft, FlightDynamics};
use skystrike_core::constants::*;
use skystrike_core::input::InputState;
use skystrike_core::types::{Orientation, Position};

/// Advance the aircraft one tick.
///
/// Every axis chases its target rate through the same exponential-smoothing
/// step; a released axis is additionally decayed multiplicatively so it
/// settles to rest instead of freezing at the last smoothed value.
pub fn run(world: &mut World, input: &InputState, dt: f64) {
    for (_entity, (_aircraft, dynamics, position, orientation)) in
        world.query_mut::<(&Aircraft, &mut FlightDynamics, &mut Position, &mut Orientation)>()
    {
        let target_pitch = input.pitch_axis() * PITCH_SPEED;
        let target_roll = input.roll_axis() * ROLL_SPEED;
        let target_yaw = input.yaw_axis() * YAW_SPEED;

        // Both throttle keys held applies both deltas (net = accel − decel).
        if input.throttle_up {
            dynamics.speed += ACCELERATION * dt;
        }
        if input.throttle_down {
            dynamics.speed -= DECELERATION * dt;
        }
        dynamics.speed = dynamics.speed.clamp(MIN_SPEED, MAX_SPEED);

        dynamics.pitch_rate += (target_pitch - dynamics.pitch_rate) * dt * CONTROL_LERP_FACTOR;
        dynamics.roll_rate += (target_roll - dynamics.roll_rate) * dt * CONTROL_LERP_FACTOR;
        dynamics.yaw_rate += (target_yaw - dynamics.yaw_rate) * dt * CONTROL_LERP_FACTOR;

        if input.pitch_idle() {
            dynamics.pitch_rate *= DAMPING;
        }
        if input.roll_idle() {
            dynamics.roll_rate *= DAMPING;
        }
        if input.yaw_idle() {
            dynamics.yaw_rate *= DAMPING;
        }

        // Yaw about the world vertical, then pitch and roll about the body
        // axes. The order is load-bearing.
        let mut q = orientation.0;
        q = DQuat::from_rotation_y(dynamics.yaw_rate * dt * TIME_SCALE) * q;
        q = q * DQuat::from_rotation_x(dynamics.pitch_rate * dt * TIME_SCALE);
        q = q * DQuat::from_rotation_z(dynamics.roll_rate * dt * TIME_SCALE);
        orientation.0 = q.normalize();

        let forward = orientation.0 * DVec3::NEG_Z;
        position.0 += forward * dynamics.speed * dt * TIME_SCALE;
    }
}

//! Simulation constants and tuning parameters.

use glam::DVec3;

// --- Control feel ---

/// Target pitch rate magnitude while a pitch key is held.
pub const PITCH_SPEED: f64 = 0.012;

/// Target roll rate magnitude while a roll key is held.
pub const ROLL_SPEED: f64 = 0.018;

/// Target yaw rate magnitude while a yaw key is held.
pub const YAW_SPEED: f64 = 0.005;

/// Exponential smoothing gain applied when chasing a target rate.
/// Each tick: `rate += (target - rate) * dt * CONTROL_LERP_FACTOR`.
pub const CONTROL_LERP_FACTOR: f64 = 7.0;

/// Per-tick multiplicative decay applied to an axis with no key held.
/// The smoothing alone never quite reaches zero after release.
pub const DAMPING: f64 = 0.96;

// --- Throttle ---

/// Speed gained per second while throttle-up is held.
pub const ACCELERATION: f64 = 0.07;

/// Speed lost per second while throttle-down is held.
pub const DECELERATION: f64 = 0.05;

/// Lower speed clamp — the aircraft never stalls to a standstill.
pub const MIN_SPEED: f64 = 0.1;

/// Upper speed clamp.
pub const MAX_SPEED: f64 = 1.6;

// --- Integration ---

/// Converts the small per-axis rate and speed units into visually adequate
/// angular and linear steps. The rate constants above are tuned against this
/// exact factor; changing one without the other wrecks the control feel.
pub const TIME_SCALE: f64 = 100.0;

/// Largest frame delta the integrator accepts (seconds). A stalled host
/// resumes with one bounded step instead of an integration blow-up.
pub const MAX_FRAME_DELTA: f64 = 0.1;

// --- Weapons ---

/// Projectile muzzle velocity magnitude (world units per second).
/// Projectiles do not inherit aircraft velocity.
pub const BULLET_SPEED: f64 = 3.8;

/// Seconds of simulated time a projectile lives before expiring.
pub const BULLET_LIFETIME: f64 = 3.0;

/// Projectile collision radius.
pub const BULLET_RADIUS: f64 = 0.4;

/// Minimum simulated-time interval between consecutive shots.
pub const SHOOT_COOLDOWN: f64 = 0.18;

/// Projectile spawn point in aircraft-local space (just past the nose,
/// slightly below the centerline), rotated into world space at fire time.
pub const MUZZLE_OFFSET: DVec3 = DVec3::new(0.0, -0.1, -3.5);

// --- Targets ---

/// Number of live drones maintained at all times.
pub const TARGET_COUNT: usize = 25;

/// Drone visual radius (world units).
pub const TARGET_SIZE: f64 = 15.0;

/// Drone collision radius, slightly inside the visual ring.
pub const TARGET_COLLISION_RADIUS: f64 = TARGET_SIZE * 0.9;

/// Drones spawn with |x| and |z| below this bound.
pub const TARGET_FIELD_HALF_EXTENT: f64 = 2_000.0;

/// Lowest drone spawn altitude above the ground base elevation.
pub const MIN_TARGET_ALTITUDE: f64 = 60.0;

/// Highest drone spawn altitude above the ground base elevation.
pub const MAX_TARGET_ALTITUDE: f64 = 400.0;

// --- World ---

/// Elevation of the ground plane the terrain relief is built on. Also the
/// ground-height fallback outside the terrain footprint.
pub const GROUND_BASE_ELEVATION: f64 = -25.0;

/// Half-extent of the square terrain footprint.
pub const TERRAIN_HALF_EXTENT: f64 = 2_500.0;

// --- Aircraft start state ---

/// Initial aircraft altitude.
pub const INITIAL_ALTITUDE: f64 = 100.0;

/// Initial forward speed.
pub const INITIAL_SPEED: f64 = 0.5;

// --- Display export ---

/// Chase-camera offset in aircraft-local space; the renderer rotates this
/// into world space behind the exported camera-follow pose.
pub const CAMERA_OFFSET: DVec3 = DVec3::new(0.0, 5.0, 18.0);

/// Multiplier from internal speed units to HUD display units.
pub const HUD_SPEED_FACTOR: f64 = 50.0;

//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, folds buffered input into a
//! once-per-tick snapshot, runs all systems in a fixed order, and produces a
//! `FrameSnapshot` each tick. Completely headless (no window, renderer, or
//! clock dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skystrike_core::constants::*;
use skystrike_core::events::SimEvent;
use skystrike_core::input::{InputEvent, InputState};
use skystrike_core::services::{GroundHeight, NullVisuals, VisualProxyService};
use skystrike_core::state::FrameSnapshot;
use skystrike_core::types::SimTime;
use skystrike_terrain::Heightfield;

use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same input script = same run.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    input: InputState,
    event_queue: VecDeque<InputEvent>,
    rng: ChaCha8Rng,
    score: u32,
    last_shot: Option<f64>,
    sim_events: Vec<SimEvent>,
    despawn_buffer: Vec<hecs::Entity>,
    pool_size: usize,
    ground: Box<dyn GroundHeight + Send>,
    visuals: Box<dyn VisualProxyService + Send>,
}

impl SimulationEngine {
    /// Create an engine wired to the given collaborators.
    pub fn new(
        config: SimConfig,
        ground: Box<dyn GroundHeight + Send>,
        mut visuals: Box<dyn VisualProxyService + Send>,
    ) -> Self {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        world_setup::setup_world(&mut world, &mut rng, visuals.as_mut());

        Self {
            world,
            time: SimTime::default(),
            input: InputState::default(),
            event_queue: VecDeque::new(),
            rng,
            score: 0,
            last_shot: None,
            sim_events: Vec::new(),
            despawn_buffer: Vec::new(),
            pool_size: TARGET_COUNT,
            ground,
            visuals,
        }
    }

    /// Engine over the default analytic terrain with no-op visuals.
    pub fn headless(config: SimConfig) -> Self {
        Self::new(
            config,
            Box::new(Heightfield::default()),
            Box::new(NullVisuals::default()),
        )
    }

    /// Buffer an input event for the next tick boundary.
    pub fn queue_event(&mut self, event: InputEvent) {
        self.event_queue.push_back(event);
    }

    /// Buffer multiple input events.
    pub fn queue_events(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        self.event_queue.extend(events);
    }

    /// Advance the simulation by one frame and return the resulting
    /// snapshot.
    ///
    /// `raw_dt` is the measured frame delta in seconds; it is capped to
    /// `MAX_FRAME_DELTA` before integration, and timers run on the
    /// accumulated capped time rather than wall clock.
    pub fn tick(&mut self, raw_dt: f64) -> FrameSnapshot {
        let dt = raw_dt.clamp(0.0, MAX_FRAME_DELTA);
        self.time.advance(dt);

        // Single consumption point: fold buffered events into the held
        // state, then take the coalesced fire request for this tick.
        while let Some(event) = self.event_queue.pop_front() {
            self.input.apply(event);
        }
        let fire_requested = self.input.take_fire();
        let input = self.input;

        systems::flight::run(&mut self.world, &input, dt);

        if fire_requested {
            systems::weapons::fire(
                &mut self.world,
                &mut self.last_shot,
                self.time.elapsed_secs,
                self.visuals.as_mut(),
                &mut self.sim_events,
            );
        }

        systems::weapons::advance(
            &mut self.world,
            dt,
            self.time.elapsed_secs,
            self.visuals.as_mut(),
            &mut self.despawn_buffer,
        );

        systems::collision::run(
            &mut self.world,
            &mut self.rng,
            &mut self.score,
            self.visuals.as_mut(),
            &mut self.sim_events,
        );

        systems::visuals::push_transforms(&self.world, self.visuals.as_mut());

        let events = std::mem::take(&mut self.sim_events);
        let snapshot = systems::snapshot::build(
            &self.world,
            &self.time,
            self.score,
            self.ground.as_ref(),
            events,
        );

        self.assert_invariants();
        snapshot
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Invariants only a programming error can break, checked after every
    /// tick in debug builds.
    #[cfg(debug_assertions)]
    fn assert_invariants(&mut self) {
        use skystrike_core::components::{Drone, FlightDynamics, Projectile};
        use skystrike_core::types::Position;

        for (_entity, (dynamics, position)) in
            self.world.query_mut::<(&FlightDynamics, &Position)>()
        {
            assert!(
                (MIN_SPEED..=MAX_SPEED).contains(&dynamics.speed),
                "Speed out of bounds: {}",
                dynamics.speed
            );
            assert!(position.0.is_finite(), "Non-finite position: {:?}", position);
        }

        let drones = self.world.query_mut::<&Drone>().into_iter().count();
        assert_eq!(drones, self.pool_size, "Target pool size drifted");

        for (_entity, projectile) in self.world.query_mut::<&Projectile>() {
            assert!(
                self.time.elapsed_secs - projectile.spawned_at <= BULLET_LIFETIME + 1e-9,
                "Projectile outlived its lifetime"
            );
        }
    }

    #[cfg(not(debug_assertions))]
    fn assert_invariants(&mut self) {}

    /// Spawn an extra drone at an exact position (for collision tests).
    #[cfg(test)]
    pub fn spawn_drone_at(&mut self, position: glam::DVec3) -> hecs::Entity {
        use skystrike_core::components::Drone;
        use skystrike_core::services::{Transform, VisualKind};
        use skystrike_core::types::{Orientation, Position};

        self.pool_size += 1;
        let handle = self
            .visuals
            .create_visual(VisualKind::Drone, &Transform::from_position(position));
        self.world.spawn((
            Drone {
                radius: TARGET_COLLISION_RADIUS,
            },
            Position(position),
            Orientation::default(),
            handle,
        ))
    }

    /// Teleport the aircraft (for HUD/terrain tests).
    #[cfg(test)]
    pub fn set_aircraft_position(&mut self, position: glam::DVec3) {
        use skystrike_core::components::Aircraft;
        use skystrike_core::types::Position;

        for (_entity, (_aircraft, pos)) in self.world.query_mut::<(&Aircraft, &mut Position)>() {
            pos.0 = position;
        }
    }

    /// Current aircraft flight dynamics (for control-feel tests).
    #[cfg(test)]
    pub fn dynamics(&self) -> skystrike_core::components::FlightDynamics {
        use skystrike_core::components::{Aircraft, FlightDynamics};

        let mut query = self.world.query::<(&Aircraft, &FlightDynamics)>();
        let (_entity, (_aircraft, dynamics)) = query.iter().next().expect("aircraft exists");
        *dynamics
    }
}

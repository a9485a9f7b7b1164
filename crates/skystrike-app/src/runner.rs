//! Runner thread — drives the simulation at a nominal frame rate.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. Input arrives via an `mpsc` channel and is forwarded to the
//! engine's event queue; snapshots are stored in shared state for
//! synchronous polling and mirrored to the HUD sink each frame.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use skystrike_core::services::HudSink;
use skystrike_sim::engine::{SimConfig, SimulationEngine};

use crate::state::{RunnerCommand, SharedSnapshot};

/// Nominal frames per second when no display-refresh signal drives us.
pub const FRAME_RATE: u32 = 60;

/// Nominal duration of one frame.
pub const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Spawn the runner in a new thread.
///
/// Returns the command sender for the host's input plumbing and the join
/// handle for shutdown.
pub fn spawn_runner(
    config: SimConfig,
    latest_snapshot: SharedSnapshot,
    hud: Box<dyn HudSink + Send>,
) -> (mpsc::Sender<RunnerCommand>, JoinHandle<()>) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<RunnerCommand>();

    let handle = std::thread::Builder::new()
        .name("skystrike-runner".into())
        .spawn(move || {
            run_loop(config, cmd_rx, &latest_snapshot, hud);
        })
        .expect("Failed to spawn runner thread");

    (cmd_tx, handle)
}

/// The frame loop. Runs until a Shutdown command or channel disconnect.
fn run_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<RunnerCommand>,
    latest_snapshot: &SharedSnapshot,
    mut hud: Box<dyn HudSink + Send>,
) {
    let mut engine = SimulationEngine::headless(config);
    let mut next_frame_time = Instant::now();
    let mut last_tick = Instant::now();

    loop {
        // 1. Drain all pending input
        loop {
            match cmd_rx.try_recv() {
                Ok(RunnerCommand::Input(event)) => engine.queue_event(event),
                Ok(RunnerCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one frame with the measured delta (the engine caps it)
        let now = Instant::now();
        let dt = now.duration_since(last_tick).as_secs_f64();
        last_tick = now;
        let snapshot = engine.tick(dt);

        // 3. Export HUD scalars
        hud.present(&snapshot.hud);

        // 4. Store the latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until the next frame slot
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind — reset to avoid a catch-up spiral
            next_frame_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hud::LogHudSink;
    use skystrike_core::input::InputEvent;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_frame_duration_constant() {
        // 60Hz = 16.666ms per frame
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(FRAME_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_runner_publishes_snapshots_and_shuts_down() {
        let latest: SharedSnapshot = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_runner(
            SimConfig::default(),
            Arc::clone(&latest),
            Box::new(LogHudSink::new(600)),
        );

        tx.send(RunnerCommand::Input(InputEvent::Fire)).unwrap();
        std::thread::sleep(Duration::from_millis(100));

        {
            let lock = latest.lock().unwrap();
            let snapshot = lock.as_ref().expect("Runner should have published");
            assert!(snapshot.time.tick > 0);
        }

        tx.send(RunnerCommand::Shutdown).unwrap();
        handle.join().expect("Runner thread should exit cleanly");
    }

    #[test]
    fn test_runner_exits_on_disconnect() {
        let latest: SharedSnapshot = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_runner(
            SimConfig::default(),
            Arc::clone(&latest),
            Box::new(LogHudSink::new(600)),
        );

        drop(tx);
        handle.join().expect("Runner should exit when the channel closes");
    }
}

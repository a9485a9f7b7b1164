//! Scripted demo flight: throttles up, climbs, banks, and fires for a few
//! seconds of real time, then reports the final score.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use skystrike_app::hud::LogHudSink;
use skystrike_app::runner::spawn_runner;
use skystrike_app::state::{RunnerCommand, SharedSnapshot};
use skystrike_core::input::{Control, InputEvent};
use skystrike_sim::engine::SimConfig;

fn main() {
    env_logger::init();

    let latest: SharedSnapshot = Arc::new(Mutex::new(None));
    let (tx, handle) = spawn_runner(
        SimConfig::default(),
        Arc::clone(&latest),
        Box::new(LogHudSink::new(30)),
    );

    let send = |event: InputEvent| {
        let _ = tx.send(RunnerCommand::Input(event));
    };

    // Throttle up and climb for a bit.
    send(InputEvent::Pressed {
        control: Control::ThrottleUp,
    });
    send(InputEvent::Pressed {
        control: Control::PitchUp,
    });
    std::thread::sleep(Duration::from_millis(1500));
    send(InputEvent::Released {
        control: Control::PitchUp,
    });

    // Bank right and spray a few bursts.
    send(InputEvent::Pressed {
        control: Control::RollRight,
    });
    for _ in 0..20 {
        send(InputEvent::Fire);
        std::thread::sleep(Duration::from_millis(100));
    }
    send(InputEvent::Released {
        control: Control::RollRight,
    });
    std::thread::sleep(Duration::from_millis(1000));

    let _ = tx.send(RunnerCommand::Shutdown);
    let _ = handle.join();

    if let Some(snapshot) = latest.lock().ok().and_then(|lock| lock.clone()) {
        log::info!(
            "demo complete: {} ticks, {:.1}s simulated, score {}",
            snapshot.time.tick,
            snapshot.time.elapsed_secs,
            snapshot.score
        );
    }
}

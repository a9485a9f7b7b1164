//! Log-backed HUD sink.

use log::info;

use skystrike_core::services::HudSink;
use skystrike_core::state::HudView;

/// Writes HUD scalars to the log at a fixed frame interval.
///
/// Stands in for the on-screen HUD renderer during headless runs.
pub struct LogHudSink {
    every: u64,
    frames: u64,
}

impl LogHudSink {
    /// Log one line every `every` presented frames.
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            frames: 0,
        }
    }
}

impl HudSink for LogHudSink {
    fn present(&mut self, hud: &HudView) {
        self.frames += 1;
        if self.frames % self.every == 0 {
            info!(
                "speed {:5.1}  alt {:5.0}  pitch {:4.0}  roll {:4.0}  score {}",
                hud.speed, hud.altitude, hud.pitch_deg, hud.roll_deg, hud.score
            );
        }
    }
}

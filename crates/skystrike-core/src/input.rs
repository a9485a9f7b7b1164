//! Player input model.
//!
//! The platform collaborator delivers `InputEvent`s asynchronously; the
//! engine buffers them and folds them into an `InputState` that is read
//! exactly once at the start of each tick. Fire requests are coalesced to a
//! level — cooldown gating, not queuing, throttles the fire rate.

use serde::{Deserialize, Serialize};

/// Logical flight controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Control {
    PitchUp,
    PitchDown,
    RollLeft,
    RollRight,
    YawLeft,
    YawRight,
    ThrottleUp,
    ThrottleDown,
}

/// Raw input signals from the platform event source.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    /// A control key went down.
    Pressed { control: Control },
    /// A control key went up.
    Released { control: Control },
    /// Mouse-down fire request, independent of key state.
    Fire,
}

/// Held-state of every control plus the coalesced fire request.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InputState {
    pub pitch_up: bool,
    pub pitch_down: bool,
    pub roll_left: bool,
    pub roll_right: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
    pub throttle_up: bool,
    pub throttle_down: bool,
    /// True if at least one fire request arrived since the last tick
    /// consumed it.
    pub fire_requested: bool,
}

impl InputState {
    /// Fold one event into the held state.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Pressed { control } => self.set(control, true),
            InputEvent::Released { control } => self.set(control, false),
            InputEvent::Fire => self.fire_requested = true,
        }
    }

    fn set(&mut self, control: Control, held: bool) {
        match control {
            Control::PitchUp => self.pitch_up = held,
            Control::PitchDown => self.pitch_down = held,
            Control::RollLeft => self.roll_left = held,
            Control::RollRight => self.roll_right = held,
            Control::YawLeft => self.yaw_left = held,
            Control::YawRight => self.yaw_right = held,
            Control::ThrottleUp => self.throttle_up = held,
            Control::ThrottleDown => self.throttle_down = held,
        }
    }

    /// Consume the coalesced fire request for this tick.
    pub fn take_fire(&mut self) -> bool {
        std::mem::take(&mut self.fire_requested)
    }

    /// Signed pitch axis: +1 nose-up, -1 nose-down, 0 when neither or both
    /// keys are held.
    pub fn pitch_axis(&self) -> f64 {
        axis(self.pitch_up, self.pitch_down)
    }

    /// Signed roll axis: +1 banks left, -1 banks right.
    pub fn roll_axis(&self) -> f64 {
        axis(self.roll_left, self.roll_right)
    }

    /// Signed yaw axis: +1 noses left, -1 noses right.
    pub fn yaw_axis(&self) -> f64 {
        axis(self.yaw_left, self.yaw_right)
    }

    /// No pitch key held — the axis decays toward rest.
    pub fn pitch_idle(&self) -> bool {
        !self.pitch_up && !self.pitch_down
    }

    pub fn roll_idle(&self) -> bool {
        !self.roll_left && !self.roll_right
    }

    pub fn yaw_idle(&self) -> bool {
        !self.yaw_left && !self.yaw_right
    }
}

/// Opposing keys cancel; a single held key gives its sign.
fn axis(positive: bool, negative: bool) -> f64 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}

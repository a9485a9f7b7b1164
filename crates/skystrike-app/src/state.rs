//! State shared between the runner thread and its host.

use std::sync::{Arc, Mutex};

use skystrike_core::input::InputEvent;
use skystrike_core::state::FrameSnapshot;

/// Commands sent from the host to the runner thread.
#[derive(Debug)]
pub enum RunnerCommand {
    /// An input signal to forward to the simulation engine.
    Input(InputEvent),
    /// Shut down the runner thread gracefully.
    Shutdown,
}

/// Latest snapshot published by the runner, for synchronous polling.
pub type SharedSnapshot = Arc<Mutex<Option<FrameSnapshot>>>;

#[cfg(test)]
mod tests {
    use super::*;
    use skystrike_core::input::Control;
    use std::sync::mpsc;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<RunnerCommand>();

        tx.send(RunnerCommand::Input(InputEvent::Pressed {
            control: Control::ThrottleUp,
        }))
        .unwrap();
        tx.send(RunnerCommand::Input(InputEvent::Fire)).unwrap();
        tx.send(RunnerCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            RunnerCommand::Input(InputEvent::Pressed {
                control: Control::ThrottleUp
            })
        ));
        assert!(matches!(commands[1], RunnerCommand::Input(InputEvent::Fire)));
        assert!(matches!(commands[2], RunnerCommand::Shutdown));
    }
}

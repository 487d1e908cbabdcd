//! Turns terminal key events into one `InputFrame` per tick.
//!
//! Many terminals never report key releases. There a first press counts for a
//! single tick; a key only stays held while auto-repeat keeps re-sending it,
//! and it is dropped once no repeat arrived within the release timeout. With
//! release reporting enabled, a pressed key is held until its release event.

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};
use log::trace;

use crate::map::map_key;
use crate::types::{Command, InputFrame, COMMAND_COUNT};

// A tap must not look held for longer than a typical auto-repeat gap.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeldKey {
    command: Command,
    /// Milliseconds since the last press/repeat of this key
    age_ms: u32,
    /// Seen more than once without a release (auto-repeat), or release events are reported
    sustained: bool,
}

/// Tracks held keys and pending one-shot commands between ticks.
#[derive(Debug, Clone)]
pub struct InputTracker {
    held: ArrayVec<HeldKey, COMMAND_COUNT>,
    edges: ArrayVec<Command, COMMAND_COUNT>,
    key_release_timeout_ms: u32,
    release_events: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self {
            held: ArrayVec::new(),
            edges: ArrayVec::new(),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            release_events: false,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    /// Declare that the terminal reports key releases (keyboard enhancement)
    pub fn with_release_events(mut self, enabled: bool) -> Self {
        self.release_events = enabled;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Feed one key event; returns the command it maps to, if any.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<Command> {
        let command = map_key(key)?;
        match key.kind {
            KeyEventKind::Press => self.press(command),
            KeyEventKind::Repeat => {
                if !command.is_edge() {
                    self.hold(command, true);
                }
            }
            KeyEventKind::Release => self.release(command),
        }
        Some(command)
    }

    pub fn press(&mut self, command: Command) {
        if command.is_edge() {
            if !self.edges.contains(&command) {
                let _ = self.edges.try_push(command);
            }
            return;
        }
        // A second press without a release in between is auto-repeat.
        let repeated = self.held.iter().any(|key| key.command == command);
        self.hold(command, repeated || self.release_events);
    }

    pub fn release(&mut self, command: Command) {
        self.held.retain(|key| key.command != command);
    }

    fn hold(&mut self, command: Command, sustained: bool) {
        if let Some(key) = self.held.iter_mut().find(|key| key.command == command) {
            key.age_ms = 0;
            key.sustained |= sustained;
        } else {
            let _ = self.held.try_push(HeldKey {
                command,
                age_ms: 0,
                sustained,
            });
        }
    }

    pub fn is_held(&self, command: Command) -> bool {
        self.held.iter().any(|key| key.command == command)
    }

    /// Build the frame for a tick lasting `elapsed_ms`, then age held keys.
    pub fn update(&mut self, elapsed_ms: u32) -> InputFrame {
        let mut frame = InputFrame::new();
        for key in &self.held {
            frame.push(key.command);
        }
        for command in self.edges.drain(..) {
            frame.push(command);
        }

        let timeout = self.key_release_timeout_ms;
        let release_events = self.release_events;
        self.held.retain(|key| {
            if !key.sustained {
                return false;
            }
            key.age_ms = key.age_ms.saturating_add(elapsed_ms);
            release_events || key.age_ms <= timeout
        });

        if !frame.is_empty() {
            trace!("input frame: {:?}", frame);
        }
        frame
    }

    pub fn reset(&mut self) {
        self.held.clear();
        self.edges.clear();
    }
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind)
    }

    #[test]
    fn test_tap_lasts_one_tick_without_release_events() {
        let mut tracker = InputTracker::new();
        tracker.handle_key_event(key(KeyCode::Left, KeyEventKind::Press));

        assert!(tracker.update(16).contains(Command::MoveLeft));
        assert!(tracker.update(16).is_empty());
    }

    #[test]
    fn test_auto_repeat_holds_until_timeout() {
        let mut tracker = InputTracker::new().with_key_release_timeout_ms(50);
        tracker.handle_key_event(key(KeyCode::Down, KeyEventKind::Press));
        tracker.handle_key_event(key(KeyCode::Down, KeyEventKind::Press));

        // Held across ticks while the gap stays within the timeout.
        assert!(tracker.update(16).contains(Command::SoftDrop));
        assert!(tracker.update(16).contains(Command::SoftDrop));
        assert!(tracker.update(16).contains(Command::SoftDrop));
        // 64ms without a repeat: gone.
        assert!(tracker.update(16).contains(Command::SoftDrop));
        assert!(!tracker.update(16).contains(Command::SoftDrop));
    }

    #[test]
    fn test_repeat_event_refreshes_age() {
        let mut tracker = InputTracker::new().with_key_release_timeout_ms(50);
        tracker.handle_key_event(key(KeyCode::Right, KeyEventKind::Press));
        tracker.handle_key_event(key(KeyCode::Right, KeyEventKind::Repeat));

        for _ in 0..10 {
            assert!(tracker.update(40).contains(Command::MoveRight));
            tracker.handle_key_event(key(KeyCode::Right, KeyEventKind::Repeat));
        }
    }

    #[test]
    fn test_release_events_hold_until_release() {
        let mut tracker = InputTracker::new()
            .with_key_release_timeout_ms(50)
            .with_release_events(true);
        tracker.handle_key_event(key(KeyCode::Left, KeyEventKind::Press));

        for _ in 0..10 {
            assert!(tracker.update(100).contains(Command::MoveLeft));
        }
        tracker.handle_key_event(key(KeyCode::Left, KeyEventKind::Release));
        assert!(tracker.update(16).is_empty());
    }

    #[test]
    fn test_edge_commands_fire_once_per_press() {
        let mut tracker = InputTracker::new();
        tracker.handle_key_event(key(KeyCode::Char('p'), KeyEventKind::Press));
        tracker.handle_key_event(key(KeyCode::Char('p'), KeyEventKind::Repeat));

        let frame = tracker.update(16);
        assert!(frame.contains(Command::PauseToggle));
        assert_eq!(frame.len(), 1);
        assert!(tracker.update(16).is_empty());
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        let mut tracker = InputTracker::new();
        assert_eq!(
            tracker.handle_key_event(key(KeyCode::Char('y'), KeyEventKind::Press)),
            None
        );
        assert!(tracker.update(16).is_empty());
    }

    #[test]
    fn test_default_key_release_timeout_is_non_zero() {
        let tracker = InputTracker::new();
        assert!(tracker.key_release_timeout_ms() > 0);
    }
}

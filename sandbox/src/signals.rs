//! Window event wiring.
//!
//! Maps winit window events onto the sandbox mouse handlers. Connection is
//! explicit and idempotent: a disconnected dispatcher never forwards
//! events, no matter how often connect/disconnect are repeated.

use marionette_core::input::{PointerButton, PointerPhase, PointerSample};
use marionette_core::math::Vec2;
use winit::event::{ElementState, MouseButton, WindowEvent};

use crate::sandbox::Sandbox;

/// Dispatches window pointer events into a [`Sandbox`].
///
/// The host forwards its [`WindowEvent`]s through [`process`](Self::process)
/// and uses the returned flag to decide whether to propagate the event
/// further.
#[derive(Debug)]
pub struct WindowSignals {
    connected: bool,
    cursor: Vec2,
}

impl Default for WindowSignals {
    fn default() -> Self {
        Self {
            connected: false,
            cursor: Vec2::new(0.0, 0.0),
        }
    }
}

impl WindowSignals {
    /// Creates a disconnected dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts forwarding events. Idempotent.
    pub fn connect(&mut self) {
        self.connected = true;
    }

    /// Stops forwarding events. Idempotent; no handler fires afterward.
    pub fn disconnect(&mut self) {
        self.connected = false;
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Translates a winit window event and forwards it to the sandbox.
    ///
    /// Returns `true` when the sandbox consumed the event. Cursor position
    /// is tracked even while disconnected so a later press lands in the
    /// right place.
    pub fn process(&mut self, sandbox: &mut Sandbox, event: &WindowEvent) -> bool {
        let Some(sample) = self.translate(event) else {
            return false;
        };
        self.apply(sandbox, sample)
    }

    fn translate(&mut self, event: &WindowEvent) -> Option<PointerSample> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
                Some(PointerSample {
                    position: self.cursor,
                    button: PointerButton::Primary,
                    phase: PointerPhase::Moved,
                })
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => Some(PointerSample {
                position: self.cursor,
                button: PointerButton::Primary,
                phase: match state {
                    ElementState::Pressed => PointerPhase::Pressed,
                    ElementState::Released => PointerPhase::Released,
                },
            }),
            _ => None,
        }
    }

    /// Applies an already-translated pointer sample.
    ///
    /// Split out from [`process`](Self::process) so the dispatch logic is
    /// testable without a window.
    pub fn apply(&mut self, sandbox: &mut Sandbox, sample: PointerSample) -> bool {
        if !self.connected || sample.button != PointerButton::Primary {
            return false;
        }
        match sample.phase {
            PointerPhase::Pressed => sandbox.mouse_down(sample.position),
            PointerPhase::Moved => sandbox.mouse_drag(sample.position),
            PointerPhase::Released => sandbox.mouse_up(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(at: Vec2) -> PointerSample {
        PointerSample {
            position: at,
            button: PointerButton::Primary,
            phase: PointerPhase::Pressed,
        }
    }

    fn release(at: Vec2) -> PointerSample {
        PointerSample {
            position: at,
            button: PointerButton::Primary,
            phase: PointerPhase::Released,
        }
    }

    fn sandbox_with_box(at: Vec2) -> Sandbox {
        let mut sandbox = Sandbox::new(Vec2::new(640.0, 480.0));
        sandbox.init(false);
        sandbox.create_box(at, Vec2::new(50.0, 50.0));
        sandbox
    }

    #[test]
    fn connected_press_grabs_body() {
        let pos = Vec2::new(200.0, 200.0);
        let mut sandbox = sandbox_with_box(pos);
        let mut signals = WindowSignals::new();
        signals.connect();

        assert!(signals.apply(&mut sandbox, press(pos)));
        assert!(sandbox.is_dragging());
        assert!(signals.apply(&mut sandbox, release(pos)));
        assert!(!sandbox.is_dragging());
    }

    #[test]
    fn disconnected_dispatcher_never_fires() {
        let pos = Vec2::new(200.0, 200.0);
        let mut sandbox = sandbox_with_box(pos);
        let mut signals = WindowSignals::new();

        assert!(!signals.apply(&mut sandbox, press(pos)));
        assert!(!sandbox.is_dragging());

        signals.connect();
        signals.disconnect();
        signals.disconnect();
        assert!(!signals.apply(&mut sandbox, press(pos)));
        assert!(!sandbox.is_dragging());
    }

    #[test]
    fn connect_is_idempotent() {
        let pos = Vec2::new(200.0, 200.0);
        let mut sandbox = sandbox_with_box(pos);
        let mut signals = WindowSignals::new();
        signals.connect();
        signals.connect();

        assert!(signals.apply(&mut sandbox, press(pos)));
        assert!(sandbox.is_dragging());
    }

    #[test]
    fn secondary_button_is_ignored() {
        let pos = Vec2::new(200.0, 200.0);
        let mut sandbox = sandbox_with_box(pos);
        let mut signals = WindowSignals::new();
        signals.connect();

        let sample = PointerSample {
            position: pos,
            button: PointerButton::Secondary,
            phase: PointerPhase::Pressed,
        };
        assert!(!signals.apply(&mut sandbox, sample));
        assert!(!sandbox.is_dragging());
    }
}

//! Pointer input: per-frame mouse sampling and event derivation

use macroquad::prelude::{is_mouse_button_down, is_mouse_button_pressed, is_mouse_button_released, mouse_position, MouseButton};

/// Which mouse button an event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Left button: pick up, drag, drop, choose a rating
    Primary,
    /// Right button: open the rating menu
    Secondary,
}

/// Pointer position for one event, sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
    /// Movement since the previous frame
    pub dx: f32,
    pub dy: f32,
}

impl Pointer {
    pub fn at(x: f32, y: f32) -> Self {
        Self { x, y, dx: 0.0, dy: 0.0 }
    }

    pub fn moved(x: f32, y: f32, dx: f32, dy: f32) -> Self {
        Self { x, y, dx, dy }
    }

    pub fn has_moved(&self) -> bool {
        self.dx != 0.0 || self.dy != 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Pointer moved with no button held
    Move,
    Press(PointerButton),
    /// Pointer moved while a button is held
    Drag(PointerButton),
    Release(PointerButton),
}

/// Raw mouse state for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseSnapshot {
    pub x: f32,
    pub y: f32,
    pub left_down: bool,
    pub right_down: bool,
    pub left_pressed: bool,   // Just pressed this frame
    pub right_pressed: bool,
    pub left_released: bool,  // Just released this frame
    pub right_released: bool,
}

/// Turn one frame of mouse state into ordered events.
///
/// Presses come first, then a single drag or move (only if the pointer moved),
/// then releases.
pub fn derive_events(mouse: &MouseSnapshot, pointer: &Pointer) -> Vec<PointerEvent> {
    let mut events = Vec::new();

    if mouse.left_pressed {
        events.push(PointerEvent::Press(PointerButton::Primary));
    }
    if mouse.right_pressed {
        events.push(PointerEvent::Press(PointerButton::Secondary));
    }

    if pointer.has_moved() {
        if mouse.left_down {
            events.push(PointerEvent::Drag(PointerButton::Primary));
        } else if mouse.right_down {
            events.push(PointerEvent::Drag(PointerButton::Secondary));
        } else {
            events.push(PointerEvent::Move);
        }
    }

    if mouse.left_released {
        events.push(PointerEvent::Release(PointerButton::Primary));
    }
    if mouse.right_released {
        events.push(PointerEvent::Release(PointerButton::Secondary));
    }

    events
}

/// Samples macroquad's mouse state and remembers last frame's position
pub struct PointerTracker {
    last: Option<(f32, f32)>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Sample the mouse for this frame
    pub fn poll(&mut self) -> (Pointer, Vec<PointerEvent>) {
        let (x, y) = mouse_position();
        let mouse = MouseSnapshot {
            x,
            y,
            left_down: is_mouse_button_down(MouseButton::Left),
            right_down: is_mouse_button_down(MouseButton::Right),
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
            right_pressed: is_mouse_button_pressed(MouseButton::Right),
            left_released: is_mouse_button_released(MouseButton::Left),
            right_released: is_mouse_button_released(MouseButton::Right),
        };
        self.advance(mouse)
    }

    fn advance(&mut self, mouse: MouseSnapshot) -> (Pointer, Vec<PointerEvent>) {
        let (px, py) = self.last.unwrap_or((mouse.x, mouse.y));
        self.last = Some((mouse.x, mouse.y));
        let pointer = Pointer::moved(mouse.x, mouse.y, mouse.x - px, mouse.y - py);
        let events = derive_events(&mouse, &pointer);
        (pointer, events)
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_still_pointer_emits_nothing() {
        let mouse = MouseSnapshot { x: 10.0, y: 10.0, ..Default::default() };
        assert!(derive_events(&mouse, &Pointer::at(10.0, 10.0)).is_empty());
    }

    #[test]
    fn test_move_vs_drag() {
        let pointer = Pointer::moved(12.0, 10.0, 2.0, 0.0);
        let idle = MouseSnapshot { x: 12.0, y: 10.0, ..Default::default() };
        assert_eq!(derive_events(&idle, &pointer), vec![PointerEvent::Move]);

        let held = MouseSnapshot { left_down: true, ..idle };
        assert_eq!(
            derive_events(&held, &pointer),
            vec![PointerEvent::Drag(PointerButton::Primary)]
        );
    }

    #[test]
    fn test_event_order_press_drag_release() {
        let pointer = Pointer::moved(5.0, 5.0, 1.0, 1.0);
        let mouse = MouseSnapshot {
            left_down: true,
            left_pressed: true,
            right_released: true,
            ..Default::default()
        };
        assert_eq!(
            derive_events(&mouse, &pointer),
            vec![
                PointerEvent::Press(PointerButton::Primary),
                PointerEvent::Drag(PointerButton::Primary),
                PointerEvent::Release(PointerButton::Secondary),
            ]
        );
    }

    #[test]
    fn test_tracker_delta_starts_at_zero() {
        let mut tracker = PointerTracker::new();
        let (first, _) = tracker.advance(MouseSnapshot { x: 50.0, y: 60.0, ..Default::default() });
        assert!(!first.has_moved());

        let (second, events) = tracker.advance(MouseSnapshot { x: 55.0, y: 58.0, ..Default::default() });
        assert_eq!((second.dx, second.dy), (5.0, -2.0));
        assert_eq!(events, vec![PointerEvent::Move]);
    }
}

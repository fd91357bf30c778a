//! Interactive objects: spatial hit testing plus hover/press/activate state

use crate::ui::{Canvas, Pointer, Rect};

/// Per-object pointer state flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interaction {
    pub hovered: bool,
    /// Transient pointer press
    pub pressed: bool,
    /// Selected as the current pointer target of its collection
    pub activated: bool,
}

impl Interaction {
    pub fn is_clear(&self) -> bool {
        *self == Self::default()
    }
}

/// Shared capability of books, slots and rating options.
///
/// Implementors supply geometry, state storage and drawing; hit testing and
/// the state transitions are provided.
pub trait Interactive {
    /// Bounding box in canvas space
    fn frame(&self) -> Rect;

    fn frame_mut(&mut self) -> &mut Rect;

    /// Extra margin around the frame that still counts as a hit
    fn hit_pad(&self) -> f32;

    fn interaction(&self) -> &Interaction;

    fn interaction_mut(&mut self) -> &mut Interaction;

    fn draw(&self, canvas: &mut dyn Canvas);

    /// Marked for removal on the next purge
    fn is_removed(&self) -> bool {
        false
    }

    /// Whether the object should render in its pressed tier
    fn looks_pressed(&self) -> bool {
        self.interaction().pressed
    }

    fn is_at(&self, pointer: &Pointer) -> bool {
        self.frame().grow(self.hit_pad()).contains_closed(pointer.x, pointer.y)
    }

    fn hover(&mut self) {
        self.interaction_mut().hovered = true;
    }

    fn unhover(&mut self) {
        self.interaction_mut().hovered = false;
    }

    fn press(&mut self) {
        self.interaction_mut().pressed = true;
    }

    fn release(&mut self) {
        self.interaction_mut().pressed = false;
    }

    fn is_activated(&self) -> bool {
        self.interaction().activated
    }

    /// Recenter without animation
    fn snap_to(&mut self, cx: f32, cy: f32) {
        let frame = self.frame().centered_on(cx, cy);
        *self.frame_mut() = frame;
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        let frame = self.frame().offset(dx, dy);
        *self.frame_mut() = frame;
    }
}

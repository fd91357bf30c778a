//! Slots: drop targets on the shelves, plus the trash

use macroquad::prelude::Color;

use crate::ui::{fill_for, text_for, Canvas, Pointer, Rect};

use super::{BookId, Collection, Interaction, Interactive};

/// Stable handle to a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub u32);

/// Accept policy of a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// Holds at most one book
    Storage,
    /// Destroys whatever is dropped in, never holds anything
    Trash,
}

#[derive(Debug, Clone)]
pub struct Slot {
    id: SlotId,
    kind: SlotKind,
    label: String,
    frame: Rect,
    hit_pad: f32,
    font_size: f32,
    interaction: Interaction,
    color: Color,
    /// Cover color a shelved book adopts
    book_color: Color,
    held: Option<BookId>,
}

impl Slot {
    pub fn new(id: SlotId, kind: SlotKind, label: impl Into<String>, frame: Rect, color: Color) -> Self {
        Self {
            id,
            kind,
            label: label.into(),
            frame,
            hit_pad: 15.0,
            font_size: 16.0,
            interaction: Interaction::default(),
            color,
            book_color: color,
            held: None,
        }
    }

    pub fn storage(id: SlotId, label: impl Into<String>, frame: Rect, color: Color, book_color: Color) -> Self {
        Self::new(id, SlotKind::Storage, label, frame, color).with_book_color(book_color)
    }

    pub fn trash(id: SlotId, label: impl Into<String>, frame: Rect, color: Color) -> Self {
        Self::new(id, SlotKind::Trash, label, frame, color)
    }

    pub fn with_book_color(mut self, book_color: Color) -> Self {
        self.book_color = book_color;
        self
    }

    pub fn with_hit_pad(mut self, hit_pad: f32) -> Self {
        self.hit_pad = hit_pad;
        self
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn id(&self) -> SlotId {
        self.id
    }

    pub fn kind(&self) -> SlotKind {
        self.kind
    }

    pub fn is_trash(&self) -> bool {
        self.kind == SlotKind::Trash
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn book_color(&self) -> Color {
        self.book_color
    }

    /// Where a shelved book is centered
    pub fn anchor(&self) -> (f32, f32) {
        self.frame.center()
    }

    pub fn held(&self) -> Option<BookId> {
        self.held
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_none()
    }

    /// Occupied is a fixed visual state, separate from a pointer press
    pub fn is_occupied(&self) -> bool {
        self.held.is_some()
    }

    /// Whether a drop here would be taken. Trash takes everything.
    pub fn accepts(&self) -> bool {
        match self.kind {
            SlotKind::Storage => self.is_empty(),
            SlotKind::Trash => true,
        }
    }

    /// Hold a book. Ignored by the trash and by an occupied slot.
    pub(super) fn accept(&mut self, book: BookId) -> bool {
        if self.kind == SlotKind::Trash || self.held.is_some() {
            return false;
        }
        self.held = Some(book);
        true
    }

    /// Let go of the held book and drop any pointer press
    pub(super) fn clear(&mut self) {
        self.held = None;
        self.release();
    }
}

impl Interactive for Slot {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn frame_mut(&mut self) -> &mut Rect {
        &mut self.frame
    }

    fn hit_pad(&self) -> f32 {
        self.hit_pad
    }

    fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    fn interaction_mut(&mut self) -> &mut Interaction {
        &mut self.interaction
    }

    fn looks_pressed(&self) -> bool {
        self.interaction.pressed || self.is_occupied()
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        let pressed = self.looks_pressed();
        canvas.fill_rect(self.frame, fill_for(self.color, pressed, self.interaction.hovered));
        let label_box = Rect::new(
            self.frame.x,
            self.frame.y,
            self.frame.w,
            self.frame.h - self.font_size * 0.5,
        );
        canvas.text_in_box(&self.label, label_box, self.font_size, text_for(pressed));
    }
}

impl Collection<Slot> {
    pub fn slot(&self, id: SlotId) -> Option<&Slot> {
        self.iter().find(|s| s.id == id)
    }

    pub fn slot_mut(&mut self, id: SlotId) -> Option<&mut Slot> {
        self.iter_mut().find(|s| s.id == id)
    }

    /// Topmost slot under the pointer, if it would take a drop
    pub fn accepting_at(&self, pointer: &Pointer) -> Option<SlotId> {
        self.topmost_at(pointer)
            .and_then(|index| self.get(index))
            .filter(|s| s.accepts())
            .map(|s| s.id)
    }
}

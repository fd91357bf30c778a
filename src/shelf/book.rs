//! Books: draggable items that can be shelved, trashed and rated

use macroquad::prelude::Color;

use crate::ui::{fill_for, text_for, Canvas, Rect};

use super::{Collection, Interaction, Interactive, SlotId};

/// Highest star rating a book can carry
pub const MAX_RATING: u8 = 5;

/// Star stamp size on a book cover
const STAR_WIDTH: f32 = 17.0;
const STAR_HEIGHT: f32 = 17.0;
/// Horizontal distance between consecutive stars
const STAR_PERIOD: f32 = STAR_WIDTH * 0.86;

/// Stable handle to a book, independent of draw order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookId(pub u32);

#[derive(Debug, Clone)]
pub struct Book {
    id: BookId,
    title: String,
    frame: Rect,
    hit_pad: f32,
    font_size: f32,
    interaction: Interaction,
    /// Cover color when not shelved
    default_cover: Color,
    /// Current cover color (a shelf may recolor it)
    cover: Color,
    /// 0 = unrated
    rating: u8,
    /// Slot currently holding this book
    slot: Option<SlotId>,
    removed: bool,
}

impl Book {
    pub fn new(id: BookId, title: impl Into<String>, frame: Rect, cover: Color) -> Self {
        Self {
            id,
            title: title.into(),
            frame,
            hit_pad: 2.0,
            font_size: 15.0,
            interaction: Interaction::default(),
            default_cover: cover,
            cover,
            rating: 0,
            slot: None,
            removed: false,
        }
    }

    pub fn with_hit_pad(mut self, hit_pad: f32) -> Self {
        self.hit_pad = hit_pad;
        self
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    /// Store a rating, clamped to `0..=MAX_RATING`
    pub fn set_rating(&mut self, stars: u8) {
        self.rating = stars.min(MAX_RATING);
    }

    pub fn slot(&self) -> Option<SlotId> {
        self.slot
    }

    pub fn is_placed(&self) -> bool {
        self.slot.is_some()
    }

    /// Record the slot holding this book. Only placement code keeps both sides in sync.
    pub(super) fn link_slot(&mut self, slot: Option<SlotId>) {
        self.slot = slot;
    }

    pub fn cover(&self) -> Color {
        self.cover
    }

    pub fn set_cover(&mut self, cover: Color) {
        self.cover = cover;
    }

    pub fn reset_cover(&mut self) {
        self.cover = self.default_cover;
    }

    /// Becomes trash on the next purge
    pub fn mark_removed(&mut self) {
        self.removed = true;
    }

    pub fn center(&self) -> (f32, f32) {
        self.frame.center()
    }

    fn draw_cover(&self, canvas: &mut dyn Canvas) {
        let fill = fill_for(self.cover, self.looks_pressed(), self.interaction.hovered);
        canvas.fill_rect(self.frame, fill);
    }

    fn draw_title(&self, canvas: &mut dyn Canvas) {
        let inset = self.frame.w * 0.1;
        let text_box = Rect::new(
            self.frame.x + inset,
            self.frame.y,
            self.frame.w - inset * 2.0,
            self.frame.h * 0.8,
        );
        canvas.text_in_box(&self.title, text_box, self.font_size, text_for(self.looks_pressed()));
    }

    fn draw_stars(&self, canvas: &mut dyn Canvas) {
        let y = self.frame.bottom() - STAR_HEIGHT;
        for i in 0..self.rating {
            let x = self.frame.x + STAR_PERIOD * i as f32;
            canvas.stamp_star(Rect::new(x, y, STAR_WIDTH, STAR_HEIGHT));
        }
    }
}

impl Interactive for Book {
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

    fn is_removed(&self) -> bool {
        self.removed
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        self.draw_cover(canvas);
        self.draw_title(canvas);
        self.draw_stars(canvas);
    }
}

impl Collection<Book> {
    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.iter().find(|b| b.id == id)
    }

    pub fn book_mut(&mut self, id: BookId) -> Option<&mut Book> {
        self.iter_mut().find(|b| b.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::canvas::{DrawCall, RecordingCanvas};
    use crate::ui::{rgb, Pointer};

    fn book() -> Book {
        Book::new(BookId(7), "Anathem", Rect::from_center(65.0, 75.0, 75.0, 100.0), rgb((173, 126, 90)))
    }

    #[test]
    fn test_rating_clamped() {
        let mut b = book();
        assert_eq!(b.rating(), 0);
        b.set_rating(3);
        assert_eq!(b.rating(), 3);
        b.set_rating(9);
        assert_eq!(b.rating(), MAX_RATING);
    }

    #[test]
    fn test_pickup_pad() {
        let b = book();
        // frame spans x 27.5..102.5, pad 2 extends it
        assert!(b.is_at(&Pointer::at(104.0, 75.0)));
        assert!(!b.is_at(&Pointer::at(105.0, 75.0)));
    }

    #[test]
    fn test_snap_to_recenters() {
        let mut b = book();
        b.snap_to(255.0, 205.0);
        assert_eq!(b.center(), (255.0, 205.0));
        assert_eq!(b.frame().w, 75.0);
    }

    #[test]
    fn test_cover_reset() {
        let mut b = book();
        b.set_cover(rgb((0, 225, 150)));
        assert_eq!(b.cover(), rgb((0, 225, 150)));
        b.reset_cover();
        assert_eq!(b.cover(), rgb((173, 126, 90)));
    }

    #[test]
    fn test_draw_unrated_has_no_stars() {
        let mut canvas = RecordingCanvas::new();
        book().draw(&mut canvas);
        assert_eq!(canvas.star_count(), 0);
        assert_eq!(canvas.texts(), vec!["Anathem"]);
    }

    #[test]
    fn test_draw_stars_along_bottom() {
        let mut b = book();
        b.set_rating(4);
        let mut canvas = RecordingCanvas::new();
        b.draw(&mut canvas);
        assert_eq!(canvas.star_count(), 4);

        let first = canvas.calls.iter().find_map(|c| match c {
            DrawCall::Star { rect } => Some(*rect),
            _ => None,
        });
        let first = first.unwrap();
        assert_eq!(first.x, b.frame().x);
        assert_eq!(first.bottom(), b.frame().bottom());
    }

    #[test]
    fn test_pressed_cover_is_darker() {
        let mut b = book();
        b.press();
        let mut canvas = RecordingCanvas::new();
        b.draw(&mut canvas);
        match &canvas.calls[0] {
            DrawCall::Rect { color, .. } => assert!(color.r < b.cover().r),
            other => panic!("expected cover rect, got {:?}", other),
        }
    }
}

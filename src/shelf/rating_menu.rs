//! Rating context menu
//!
//! Two states:
//! - Hidden: no book attached, options parked off-canvas
//! - Attached: options stacked near the press point, clamped to the canvas
//!
//! `commit_rating` is the only way out of Attached besides `detach`, and it
//! always ends Hidden.

use macroquad::prelude::Color;
use tracing::info;

use crate::ui::{fill_for, text_for, Canvas, Pointer, Rect};

use super::{Book, BookId, Collection, Interaction, Interactive, MAX_RATING};

/// Share of the menu width allowed to hang past the right canvas edge
const RIGHT_OVERHANG: f32 = 0.34;

/// One button in the menu, carrying a fixed star value
#[derive(Debug, Clone)]
pub struct RatingOption {
    stars: u8,
    label: String,
    frame: Rect,
    font_size: f32,
    color: Color,
    interaction: Interaction,
}

impl RatingOption {
    pub fn new(stars: u8, frame: Rect, color: Color, font_size: f32) -> Self {
        Self {
            stars,
            label: format!("{} Star", stars),
            frame,
            font_size,
            color,
            interaction: Interaction::default(),
        }
    }

    pub fn stars(&self) -> u8 {
        self.stars
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Interactive for RatingOption {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn frame_mut(&mut self) -> &mut Rect {
        &mut self.frame
    }

    fn hit_pad(&self) -> f32 {
        0.0
    }

    fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    fn interaction_mut(&mut self) -> &mut Interaction {
        &mut self.interaction
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

/// Menu appearance
#[derive(Debug, Clone, Copy)]
pub struct MenuStyle {
    pub option_width: f32,
    pub option_height: f32,
    pub font_size: f32,
    pub color: Color,
    /// Anchor while hidden, somewhere off-canvas
    pub hidden_at: (f32, f32),
}

#[derive(Debug, Clone)]
pub struct RatingMenu {
    options: Collection<RatingOption>,
    attached: Option<BookId>,
    anchor: (f32, f32),
    style: MenuStyle,
}

impl RatingMenu {
    /// Build the menu hidden, with options from `MAX_RATING` stars down to 1
    pub fn new(style: MenuStyle) -> Self {
        let mut options = Collection::new();
        for stars in (1..=MAX_RATING).rev() {
            let frame = Rect::new(0.0, 0.0, style.option_width, style.option_height);
            options.push(RatingOption::new(stars, frame, style.color, style.font_size));
        }
        let mut menu = Self {
            options,
            attached: None,
            anchor: style.hidden_at,
            style,
        };
        menu.layout_options();
        menu
    }

    pub fn options(&self) -> &Collection<RatingOption> {
        &self.options
    }

    pub fn anchor(&self) -> (f32, f32) {
        self.anchor
    }

    pub fn attached(&self) -> Option<BookId> {
        self.attached
    }

    pub fn is_attached(&self) -> bool {
        self.attached.is_some()
    }

    pub fn width(&self) -> f32 {
        self.style.option_width
    }

    pub fn height(&self) -> f32 {
        self.style.option_height * self.options.len() as f32
    }

    /// Pointer is over an option of a visible menu
    pub fn any_at(&self, pointer: &Pointer) -> bool {
        self.is_attached() && self.options.any_at(pointer)
    }

    /// Show the menu for `book` near the pointer, kept on the canvas
    pub fn attach_to(&mut self, book: &mut Book, pointer: &Pointer, canvas: (f32, f32)) {
        let (canvas_w, canvas_h) = canvas;
        let max_x = canvas_w - self.width() * (1.0 - RIGHT_OVERHANG);
        let max_y = canvas_h - self.height();
        self.anchor = (pointer.x.min(max_x), pointer.y.min(max_y));
        self.layout_options();
        self.attached = Some(book.id());
        book.unhover();
    }

    /// Hide the menu and forget the book
    pub fn detach(&mut self) {
        self.attached = None;
        self.options.reset_all();
        self.anchor = self.style.hidden_at;
        self.layout_options();
    }

    /// Select (activate + press) the option under the pointer, without committing
    pub fn select_option(&mut self, pointer: &Pointer) {
        self.options.select_topmost_at(pointer);
    }

    pub fn hover_option(&mut self, pointer: &Pointer) {
        self.options.hover_activated(pointer);
    }

    pub fn reset_options(&mut self) {
        self.options.reset_all();
    }

    /// Star value of the activated option
    pub fn selected_stars(&self) -> Option<u8> {
        self.options.active().map(|o| o.stars())
    }

    /// Apply the selected rating to the attached book and hide.
    ///
    /// No-op when nothing is attached or no option is selected.
    pub fn commit_rating(&mut self, books: &mut Collection<Book>) -> Option<(BookId, u8)> {
        let book_id = self.attached?;
        let stars = self.selected_stars()?;
        let committed = books.book_mut(book_id).map(|book| {
            book.set_rating(stars);
            info!(title = book.title(), stars, "book rated");
            (book_id, stars)
        });
        self.detach();
        committed
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        for option in self.options.iter() {
            option.draw(canvas);
        }
    }

    /// Stack option centers downward from the anchor
    fn layout_options(&mut self) {
        let (x, y) = self.anchor;
        let step = self.style.option_height;
        for (i, option) in self.options.iter_mut().enumerate() {
            option.snap_to(x, y + i as f32 * step);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::canvas::RecordingCanvas;
    use crate::ui::rgb;

    const CANVAS: (f32, f32) = (400.0, 400.0);

    fn style() -> MenuStyle {
        MenuStyle {
            option_width: 65.0,
            option_height: 29.0,
            font_size: 13.0,
            color: rgb((255, 175, 0)),
            hidden_at: (-200.0, 0.0),
        }
    }

    fn book() -> Book {
        Book::new(BookId(4), "Anathem", Rect::from_center(65.0, 75.0, 75.0, 100.0), rgb((173, 126, 90)))
    }

    #[test]
    fn test_starts_hidden_off_canvas() {
        let menu = RatingMenu::new(style());
        assert!(!menu.is_attached());
        assert_eq!(menu.anchor(), (-200.0, 0.0));
        assert!(menu.options().iter().all(|o| o.frame().right() < 0.0));
    }

    #[test]
    fn test_options_descend_from_five() {
        let menu = RatingMenu::new(style());
        let labels: Vec<_> = menu.options().iter().map(|o| o.label()).collect();
        assert_eq!(labels, vec!["5 Star", "4 Star", "3 Star", "2 Star", "1 Star"]);
    }

    #[test]
    fn test_attach_near_pointer() {
        let mut menu = RatingMenu::new(style());
        let mut b = book();
        b.hover();
        menu.attach_to(&mut b, &Pointer::at(65.0, 75.0), CANVAS);

        assert_eq!(menu.attached(), Some(BookId(4)));
        assert_eq!(menu.anchor(), (65.0, 75.0));
        assert!(!b.interaction().hovered);
        let third = menu.options().get(2).unwrap();
        assert_eq!(third.frame().center(), (65.0, 133.0));
    }

    #[test]
    fn test_attach_clamped_to_canvas() {
        let mut menu = RatingMenu::new(style());
        menu.attach_to(&mut book(), &Pointer::at(390.0, 390.0), CANVAS);
        let (x, y) = menu.anchor();
        assert!((x - (400.0 - 65.0 * 0.66)).abs() < 0.001);
        assert!((y - (400.0 - 145.0)).abs() < 0.001);
    }

    #[test]
    fn test_hidden_menu_never_hit() {
        let menu = RatingMenu::new(style());
        assert!(!menu.any_at(&Pointer::at(-200.0, 0.0)));
    }

    #[test]
    fn test_commit_applies_and_hides() {
        let mut books = Collection::new();
        books.push(book());
        let mut menu = RatingMenu::new(style());
        menu.attach_to(books.book_mut(BookId(4)).unwrap(), &Pointer::at(65.0, 75.0), CANVAS);

        menu.select_option(&Pointer::at(65.0, 133.0));
        assert_eq!(menu.selected_stars(), Some(3));

        assert_eq!(menu.commit_rating(&mut books), Some((BookId(4), 3)));
        assert_eq!(books.book(BookId(4)).unwrap().rating(), 3);
        assert!(!menu.is_attached());
        assert_eq!(menu.anchor(), (-200.0, 0.0));
        assert!(menu.options().iter().all(|o| o.interaction().is_clear()));
    }

    #[test]
    fn test_commit_without_selection_is_noop() {
        let mut books = Collection::new();
        books.push(book());
        let mut menu = RatingMenu::new(style());
        menu.attach_to(books.book_mut(BookId(4)).unwrap(), &Pointer::at(65.0, 75.0), CANVAS);

        assert_eq!(menu.commit_rating(&mut books), None);
        assert!(menu.is_attached());
        assert_eq!(books.book(BookId(4)).unwrap().rating(), 0);
    }

    #[test]
    fn test_commit_when_hidden_is_noop() {
        let mut books = Collection::new();
        books.push(book());
        let mut menu = RatingMenu::new(style());
        assert_eq!(menu.commit_rating(&mut books), None);
    }

    #[test]
    fn test_draws_all_five() {
        let menu = RatingMenu::new(style());
        let mut canvas = RecordingCanvas::new();
        menu.draw(&mut canvas);
        assert_eq!(canvas.texts().len(), 5);
    }
}

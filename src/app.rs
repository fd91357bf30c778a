//! Application state and pointer-event orchestration
//!
//! All three collections live here and are handed to the event handlers
//! explicitly. Precedence when deciding what an event targets:
//! rating menu (only while attached) > books > slots.

use macroquad::prelude::Color;
use macroquad::rand;
use tracing::{debug, info};

use crate::shelf::{
    place_into, remove_from_current_slot, Book, BookId, Collection, Interactive, MenuStyle,
    RatingMenu, ShelfLayout, Slot, SlotId,
};
use crate::ui::{rgb, Canvas, Pointer, PointerButton, PointerEvent, Rect};

pub struct AppState {
    pub books: Collection<Book>,
    pub slots: Collection<Slot>,
    pub menu: RatingMenu,
    /// Book picked up by the current primary press, if any
    dragging: Option<BookId>,
    /// Drawing surface size, used to keep the menu on screen
    canvas: (f32, f32),
    background: Color,
}

impl AppState {
    /// Build every book, slot and the menu from a layout
    pub fn new(layout: &ShelfLayout) -> Self {
        if let Some(seed) = layout.pile.seed {
            rand::srand(seed);
        }

        let mut books = Collection::new();
        let style = &layout.books;
        let spread = layout.pile.spread;
        let jitter = || if spread > 0.0 { rand::gen_range(-spread, spread) } else { 0.0 };
        for (i, title) in layout.sorted_titles().into_iter().enumerate() {
            let cx = layout.pile.center.0 + jitter();
            let cy = layout.pile.center.1 + jitter();
            let frame = Rect::from_center(cx, cy, style.width, style.height);
            books.push(
                Book::new(BookId(i as u32), title, frame, rgb(style.color))
                    .with_hit_pad(style.hit_pad)
                    .with_font_size(style.font_size),
            );
        }

        let mut slots = Collection::new();
        let mut next_id = 0u32;
        for row in &layout.shelves {
            for (cx, cy) in layout.row_centers(row) {
                let frame = Rect::from_center(cx, cy, layout.slots.width, layout.slots.height);
                slots.push(
                    Slot::storage(SlotId(next_id), row.label.clone(), frame, rgb(row.color), rgb(row.book_color))
                        .with_hit_pad(layout.slots.hit_pad)
                        .with_font_size(layout.slots.font_size),
                );
                next_id += 1;
            }
        }
        let trash = &layout.trash;
        let frame = Rect::from_center(trash.center.0, trash.center.1, trash.width, trash.height);
        slots.push(
            Slot::trash(SlotId(next_id), trash.label.clone(), frame, rgb(trash.color))
                .with_hit_pad(trash.hit_pad)
                .with_font_size(layout.slots.font_size),
        );

        let menu = RatingMenu::new(MenuStyle {
            option_width: layout.menu.option_width,
            option_height: layout.menu.option_height,
            font_size: layout.menu.font_size,
            color: rgb(layout.menu.color),
            hidden_at: layout.menu.hidden_at,
        });

        info!(books = books.len(), slots = slots.len(), "bookshelf ready");

        Self {
            books,
            slots,
            menu,
            dragging: None,
            canvas: (layout.canvas.width, layout.canvas.height),
            background: rgb(layout.background),
        }
    }

    /// Track the real surface size, which may differ from the layout's canvas
    pub fn set_canvas_size(&mut self, width: f32, height: f32) {
        self.canvas = (width, height);
    }

    /// Run one pointer event to completion
    pub fn handle(&mut self, event: PointerEvent, pointer: &Pointer) {
        match event {
            PointerEvent::Move => self.on_move(pointer),
            PointerEvent::Press(button) => self.on_press(button, pointer),
            PointerEvent::Drag(button) => self.on_drag(button, pointer),
            PointerEvent::Release(button) => self.on_release(button, pointer),
        }
    }

    fn on_move(&mut self, pointer: &Pointer) {
        let over_menu = self.menu.any_at(pointer);
        let over_book = self.books.any_at(pointer);

        self.slots.reset_all();
        if !over_menu {
            self.menu.reset_options();
        }
        if !over_book {
            self.books.reset_all();
        }

        if over_menu {
            self.menu.hover_option(pointer);
            self.books.reset_all();
        } else if over_book {
            self.books.hover_activated(pointer);
        }
    }

    fn on_press(&mut self, button: PointerButton, pointer: &Pointer) {
        let over_menu = self.menu.any_at(pointer);
        let over_book = self.books.any_at(pointer);

        match button {
            PointerButton::Primary if over_menu => {
                self.menu.select_option(pointer);
            }
            PointerButton::Primary => {
                self.menu.detach();
                self.pick_up_book(pointer);
                self.dragging = self.books.active().map(|b| b.id());
                self.unshelve_active_book();
                self.slots.hover_activated(pointer);
            }
            PointerButton::Secondary if over_book => {
                self.pick_up_book(pointer);
                let canvas = self.canvas;
                if let Some(book) = self.books.active_mut() {
                    self.menu.attach_to(book, pointer, canvas);
                }
                self.books.reset_all();
                self.menu.hover_option(pointer);
            }
            PointerButton::Secondary => {
                // Click-away dismiss
                self.menu.detach();
            }
        }
    }

    fn on_drag(&mut self, button: PointerButton, pointer: &Pointer) {
        if button != PointerButton::Primary {
            return;
        }
        if self.menu.is_attached() {
            self.menu.select_option(pointer);
        } else if self.books.any_active() {
            self.books.drag_activated(pointer.dx, pointer.dy);
            self.slots.hover_activated(pointer);
        }
    }

    fn on_release(&mut self, button: PointerButton, pointer: &Pointer) {
        if button != PointerButton::Primary {
            return;
        }
        let over_menu = self.menu.any_at(pointer);
        let over_book = self.books.any_at(pointer);
        let dragged = self.dragging.take();

        if over_menu {
            self.menu.commit_rating(&mut self.books);
        }
        if over_book {
            self.books.hover_activated(pointer);
        }
        // Drops land in the slot under the release point, never a stale activation
        let Some(book_id) = dragged else {
            return;
        };
        if over_menu || !self.slots.any_at(pointer) {
            return;
        }
        match (self.slots.accepting_at(pointer), self.books.book_mut(book_id)) {
            (Some(slot_id), Some(book)) if book.is_at(pointer) => {
                place_into(book, slot_id, &mut self.slots);
                self.slots.reset_all();
            }
            _ => debug!("drop ignored, no empty slot under pointer"),
        }
    }

    /// Select, press and raise the topmost book under the pointer
    fn pick_up_book(&mut self, pointer: &Pointer) {
        self.books.select_topmost_at(pointer);
        self.books.bring_activated_to_front();
    }

    fn unshelve_active_book(&mut self) {
        if let Some(book) = self.books.active_mut() {
            if book.is_placed() {
                remove_from_current_slot(book, &mut self.slots);
                book.reset_cover();
                debug!(title = book.title(), "book taken off shelf");
            }
        }
    }

    /// Draw one frame: background, slots, books (trashed ones purged first), menu
    pub fn draw(&mut self, canvas: &mut dyn Canvas) {
        canvas.clear(self.background);
        self.slots.draw_all(canvas);
        self.books.draw_all(canvas);
        self.menu.draw(canvas);
    }
}

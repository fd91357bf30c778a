//! Bookshelf engine: selection, hover and drag state
//!
//! Three independent collections share one set of mechanics:
//! - books (draggable, shelved or trashed)
//! - slots (drop targets, including the trash)
//! - rating options (inside the context menu)
//!
//! Books and slots reference each other by id, never by pointer.

#![allow(dead_code)]

mod interactive;
mod collection;
mod book;
mod slot;
mod placement;
mod rating_menu;
pub mod layout;

pub use interactive::{Interaction, Interactive};
pub use collection::Collection;
pub use book::{Book, BookId, MAX_RATING};
pub use slot::{Slot, SlotId, SlotKind};
pub use placement::{place_into, remove_from_current_slot, Placement};
pub use rating_menu::{MenuStyle, RatingMenu, RatingOption};
pub use layout::{LayoutError, ShelfLayout};

//! Moving books in and out of slots
//!
//! Books and slots live in separate collections and point at each other by id.
//! These functions are the only place either side of that link changes.

use tracing::{debug, info};

use super::{Book, Collection, Interactive, Slot, SlotId, SlotKind};

/// Outcome of dropping a book on a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Book now sits in this slot
    Shelved(SlotId),
    /// Book was unlinked and marked for removal
    Trashed,
    /// Slot missing or already occupied; nothing changed
    Rejected,
}

/// Drop `book` into the slot `slot_id`.
///
/// A storage slot takes the book only when empty: the book links to it, snaps
/// to its anchor and takes on its shelved color. The trash unlinks the book
/// from wherever it was and marks it removed.
pub fn place_into(book: &mut Book, slot_id: SlotId, slots: &mut Collection<Slot>) -> Placement {
    let Some(kind) = slots.slot(slot_id).map(|s| s.kind()) else {
        return Placement::Rejected;
    };

    match kind {
        SlotKind::Trash => {
            remove_from_current_slot(book, slots);
            book.mark_removed();
            info!(title = book.title(), "book trashed");
            Placement::Trashed
        }
        SlotKind::Storage => {
            if book.slot() == Some(slot_id) {
                return Placement::Shelved(slot_id);
            }
            let accepts = slots.slot(slot_id).is_some_and(|s| s.accepts());
            if !accepts {
                debug!(title = book.title(), slot = slot_id.0, "drop rejected, slot occupied");
                return Placement::Rejected;
            }

            remove_from_current_slot(book, slots);
            let Some(slot) = slots.slot_mut(slot_id) else {
                return Placement::Rejected;
            };
            slot.accept(book.id());
            book.link_slot(Some(slot_id));
            let (cx, cy) = slot.anchor();
            book.snap_to(cx, cy);
            book.set_cover(slot.book_color());
            info!(title = book.title(), shelf = slot.label(), "book shelved");
            Placement::Shelved(slot_id)
        }
    }
}

/// Take `book` off its slot, clearing both sides of the link. No-op if not placed.
pub fn remove_from_current_slot(book: &mut Book, slots: &mut Collection<Slot>) {
    let Some(slot_id) = book.slot() else {
        return;
    };
    if let Some(slot) = slots.slot_mut(slot_id) {
        if slot.held() == Some(book.id()) {
            slot.clear();
        }
    }
    book.link_slot(None);
}

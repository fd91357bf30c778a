//! Ordered container of interactive objects
//!
//! Sequence order is draw order: the last object is drawn on top and wins
//! hit-test ties. At most one object is activated at a time.

use crate::ui::{Canvas, Pointer};

use super::Interactive;

#[derive(Debug, Clone)]
pub struct Collection<T> {
    objects: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { objects: Vec::new() }
    }
}

impl<T: Interactive> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, object: T) {
        self.objects.push(object);
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.objects.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.objects.iter_mut()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.objects.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.objects.get_mut(index)
    }

    pub fn any_at(&self, pointer: &Pointer) -> bool {
        self.objects.iter().any(|o| o.is_at(pointer))
    }

    /// Index of the last (topmost) object under the pointer
    pub fn topmost_at(&self, pointer: &Pointer) -> Option<usize> {
        self.objects.iter().rposition(|o| o.is_at(pointer))
    }

    /// Activate the topmost object under the pointer. No-op when nothing is hit.
    pub fn activate_topmost_at(&mut self, pointer: &Pointer) {
        if let Some(index) = self.topmost_at(pointer) {
            self.deactivate_all();
            self.objects[index].interaction_mut().activated = true;
        }
    }

    pub fn active_index(&self) -> Option<usize> {
        self.objects.iter().position(|o| o.is_activated())
    }

    pub fn active(&self) -> Option<&T> {
        self.objects.iter().find(|o| o.is_activated())
    }

    pub fn active_mut(&mut self) -> Option<&mut T> {
        self.objects.iter_mut().find(|o| o.is_activated())
    }

    pub fn any_active(&self) -> bool {
        self.active_index().is_some()
    }

    /// Reset every flag, re-activate the topmost object under the pointer,
    /// and hover only that one
    pub fn hover_activated(&mut self, pointer: &Pointer) {
        self.reset_all();
        self.activate_topmost_at(pointer);
        for object in &mut self.objects {
            if object.is_activated() {
                object.hover();
            } else {
                object.unhover();
            }
        }
    }

    /// Press the activated object, release all others
    pub fn press_activated(&mut self) {
        for object in &mut self.objects {
            if object.is_activated() {
                object.press();
            } else {
                object.release();
            }
        }
    }

    /// Reset, activate the topmost object under the pointer and press it
    pub fn select_topmost_at(&mut self, pointer: &Pointer) {
        self.reset_all();
        self.activate_topmost_at(pointer);
        self.press_activated();
    }

    pub fn release_all(&mut self) {
        self.objects.iter_mut().for_each(|o| o.release());
    }

    pub fn unhover_all(&mut self) {
        self.objects.iter_mut().for_each(|o| o.unhover());
    }

    pub fn deactivate_all(&mut self) {
        self.objects
            .iter_mut()
            .for_each(|o| o.interaction_mut().activated = false);
    }

    /// Clear hover, press and activation on every object
    pub fn reset_all(&mut self) {
        self.release_all();
        self.unhover_all();
        self.deactivate_all();
    }

    /// Move the activated object to the end of the draw order
    pub fn bring_activated_to_front(&mut self) {
        if let Some(index) = self.active_index() {
            let object = self.objects.remove(index);
            self.objects.push(object);
        }
    }

    /// Apply a pointer delta to the activated object
    pub fn drag_activated(&mut self, dx: f32, dy: f32) {
        if let Some(object) = self.active_mut() {
            object.translate(dx, dy);
        }
    }

    /// Drop every object marked for removal
    pub fn purge_removed(&mut self) {
        self.objects.retain(|o| !o.is_removed());
    }

    /// Purge, then draw survivors in sequence order
    pub fn draw_all(&mut self, canvas: &mut dyn Canvas) {
        self.purge_removed();
        for object in &self.objects {
            object.draw(canvas);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shelf::Interaction;
    use crate::ui::canvas::RecordingCanvas;
    use crate::ui::{Rect, TEXT_DEFAULT};

    /// Minimal interactive object for exercising the collection alone
    struct Tile {
        name: &'static str,
        frame: Rect,
        interaction: Interaction,
        removed: bool,
    }

    impl Tile {
        fn new(name: &'static str, x: f32, y: f32) -> Self {
            Self {
                name,
                frame: Rect::new(x, y, 10.0, 10.0),
                interaction: Interaction::default(),
                removed: false,
            }
        }
    }

    impl Interactive for Tile {
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
        fn is_removed(&self) -> bool {
            self.removed
        }
        fn draw(&self, canvas: &mut dyn Canvas) {
            canvas.text_in_box(self.name, self.frame, 10.0, TEXT_DEFAULT);
        }
    }

    /// a and b overlap at (5,5); c sits apart
    fn tiles() -> Collection<Tile> {
        let mut c = Collection::new();
        c.push(Tile::new("a", 0.0, 0.0));
        c.push(Tile::new("b", 2.0, 2.0));
        c.push(Tile::new("c", 50.0, 50.0));
        c
    }

    fn names(c: &Collection<Tile>) -> Vec<&'static str> {
        c.iter().map(|t| t.name).collect()
    }

    #[test]
    fn test_topmost_wins_ties() {
        let mut c = tiles();
        c.activate_topmost_at(&Pointer::at(5.0, 5.0));
        assert_eq!(c.active().map(|t| t.name), Some("b"));
    }

    #[test]
    fn test_activate_miss_is_noop() {
        let mut c = tiles();
        c.activate_topmost_at(&Pointer::at(55.0, 55.0));
        c.activate_topmost_at(&Pointer::at(200.0, 200.0));
        assert_eq!(c.active().map(|t| t.name), Some("c"));
    }

    #[test]
    fn test_single_activation() {
        let mut c = tiles();
        c.activate_topmost_at(&Pointer::at(1.0, 1.0));
        c.activate_topmost_at(&Pointer::at(55.0, 55.0));
        assert_eq!(c.iter().filter(|t| t.is_activated()).count(), 1);
    }

    #[test]
    fn test_reset_all_clears_everything() {
        let mut c = tiles();
        c.select_topmost_at(&Pointer::at(5.0, 5.0));
        c.get_mut(2).unwrap().hover();
        c.reset_all();
        assert!(c.iter().all(|t| t.interaction().is_clear()));
        assert!(!c.any_active());
    }

    #[test]
    fn test_hover_activated_only_hovers_topmost() {
        let mut c = tiles();
        c.get_mut(2).unwrap().hover();
        c.get_mut(2).unwrap().press();
        c.hover_activated(&Pointer::at(5.0, 5.0));

        let hovered: Vec<_> = c.iter().filter(|t| t.interaction().hovered).map(|t| t.name).collect();
        assert_eq!(hovered, vec!["b"]);
        assert!(c.iter().all(|t| !t.interaction().pressed));
    }

    #[test]
    fn test_hover_activated_on_empty_space_clears() {
        let mut c = tiles();
        c.hover_activated(&Pointer::at(5.0, 5.0));
        c.hover_activated(&Pointer::at(300.0, 300.0));
        assert!(!c.any_active());
        assert!(c.iter().all(|t| !t.interaction().hovered));
    }

    #[test]
    fn test_press_activated() {
        let mut c = tiles();
        c.select_topmost_at(&Pointer::at(1.0, 1.0));
        let pressed: Vec<_> = c.iter().filter(|t| t.interaction().pressed).map(|t| t.name).collect();
        assert_eq!(pressed, vec!["a"]);
    }

    #[test]
    fn test_bring_to_front_preserves_others() {
        let mut c = tiles();
        c.activate_topmost_at(&Pointer::at(1.0, 1.0));
        c.bring_activated_to_front();
        assert_eq!(names(&c), vec!["b", "c", "a"]);
        assert!(c.get(2).unwrap().is_activated());
    }

    #[test]
    fn test_bring_to_front_without_active_is_noop() {
        let mut c = tiles();
        c.bring_activated_to_front();
        assert_eq!(names(&c), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_drag_moves_only_active() {
        let mut c = tiles();
        c.drag_activated(5.0, 5.0);
        assert_eq!(c.get(0).unwrap().frame().x, 0.0);

        c.activate_topmost_at(&Pointer::at(55.0, 55.0));
        c.drag_activated(-10.0, 4.0);
        let moved = c.get(2).unwrap().frame();
        assert_eq!((moved.x, moved.y), (40.0, 54.0));
        assert_eq!(c.get(1).unwrap().frame().x, 2.0);
    }

    #[test]
    fn test_draw_all_skips_removed() {
        let mut c = tiles();
        c.get_mut(1).unwrap().removed = true;
        let mut canvas = RecordingCanvas::new();
        c.draw_all(&mut canvas);
        assert_eq!(canvas.texts(), vec!["a", "c"]);
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn test_any_at_respects_closed_edges() {
        let c = tiles();
        assert!(c.any_at(&Pointer::at(60.0, 60.0)));
        assert!(!c.any_at(&Pointer::at(60.5, 60.0)));
    }
}

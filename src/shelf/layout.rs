//! Shelf layout loading
//!
//! Uses RON (Rusty Object Notation) for a human-readable layout file.
//! The default layout is compiled in; native builds may override it with a
//! file on disk.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ui::{Rect, Rgb};

use super::MAX_RATING;

/// Default layout, compiled into the binary
pub const BUILTIN_LAYOUT: &str = include_str!("../../assets/bookshelf.ron");

/// Validation limits to keep a hand-edited layout sane
pub mod limits {
    /// Maximum number of book titles
    pub const MAX_TITLES: usize = 64;
    /// Maximum number of shelf rows
    pub const MAX_SHELVES: usize = 16;
    /// Maximum slots in one row
    pub const MAX_SLOTS_PER_SHELF: usize = 16;
    /// Maximum length of a title or label
    pub const MAX_STRING_LEN: usize = 256;
    /// Maximum absolute coordinate or size
    pub const MAX_COORD: f32 = 100_000.0;
}

/// Error type for layout loading
#[derive(Debug)]
pub enum LayoutError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for LayoutError {
    fn from(e: std::io::Error) -> Self {
        LayoutError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for LayoutError {
    fn from(e: ron::error::SpannedError) -> Self {
        LayoutError::ParseError(e)
    }
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::IoError(e) => write!(f, "IO error: {}", e),
            LayoutError::ParseError(e) => write!(f, "Parse error: {}", e),
            LayoutError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for LayoutError {}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookStyle {
    pub width: f32,
    pub height: f32,
    pub hit_pad: f32,
    pub font_size: f32,
    pub color: Rgb,
}

/// Where books start out, before anything is shelved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pile {
    pub center: (f32, f32),
    /// Books scatter uniformly within ±spread of the center on each axis
    pub spread: f32,
    /// Fixed seed for the scatter; random per launch when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotStyle {
    pub width: f32,
    pub height: f32,
    pub hit_pad: f32,
    pub font_size: f32,
    /// Horizontal distance between slot centers in a row
    pub spacing: f32,
}

/// One row of identical slots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelfRow {
    pub label: String,
    /// Center of the leftmost slot
    pub origin: (f32, f32),
    pub count: usize,
    pub color: Rgb,
    /// Cover color of a book shelved here
    pub book_color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrashSpot {
    pub label: String,
    pub center: (f32, f32),
    pub width: f32,
    pub height: f32,
    pub hit_pad: f32,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuLayout {
    pub option_width: f32,
    pub option_height: f32,
    pub font_size: f32,
    pub color: Rgb,
    pub hidden_at: (f32, f32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelfLayout {
    pub canvas: CanvasSize,
    pub background: Rgb,
    pub books: BookStyle,
    pub pile: Pile,
    pub slots: SlotStyle,
    pub shelves: Vec<ShelfRow>,
    pub trash: TrashSpot,
    pub menu: MenuLayout,
    pub titles: Vec<String>,
}

impl ShelfLayout {
    /// The compiled-in default layout
    pub fn builtin() -> Result<Self, LayoutError> {
        Self::from_ron(BUILTIN_LAYOUT)
    }

    pub fn from_ron(source: &str) -> Result<Self, LayoutError> {
        let layout: ShelfLayout = ron::from_str(source)?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn load(path: &Path) -> Result<Self, LayoutError> {
        let source = fs::read_to_string(path)?;
        Self::from_ron(&source)
    }

    /// Titles in descending order; the first title alphabetically ends up on top of the pile
    pub fn sorted_titles(&self) -> Vec<String> {
        let mut titles = self.titles.clone();
        titles.sort_unstable_by(|a, b| b.cmp(a));
        titles
    }

    /// Slot centers of a row, left to right
    pub fn row_centers(&self, row: &ShelfRow) -> Vec<(f32, f32)> {
        (0..row.count)
            .map(|i| (row.origin.0 + i as f32 * self.slots.spacing, row.origin.1))
            .collect()
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        use limits::*;

        if self.titles.is_empty() {
            return invalid("no book titles".to_string());
        }
        if self.titles.len() > MAX_TITLES {
            return invalid(format!("too many titles ({} > {})", self.titles.len(), MAX_TITLES));
        }
        for title in &self.titles {
            check_text("title", title)?;
        }

        if self.shelves.len() > MAX_SHELVES {
            return invalid(format!("too many shelves ({} > {})", self.shelves.len(), MAX_SHELVES));
        }
        for row in &self.shelves {
            check_text("shelf label", &row.label)?;
            if row.count > MAX_SLOTS_PER_SHELF {
                return invalid(format!(
                    "shelf '{}': too many slots ({} > {})",
                    row.label, row.count, MAX_SLOTS_PER_SHELF
                ));
            }
            check_point(&format!("shelf '{}' origin", row.label), row.origin)?;
        }
        check_text("trash label", &self.trash.label)?;

        check_size("canvas", self.canvas.width, self.canvas.height)?;
        check_size("book", self.books.width, self.books.height)?;
        check_size("slot", self.slots.width, self.slots.height)?;
        check_size("trash", self.trash.width, self.trash.height)?;
        check_size("menu option", self.menu.option_width, self.menu.option_height)?;
        check_size("font", self.books.font_size, self.slots.font_size)?;
        check_size("menu font", self.menu.font_size, self.menu.font_size)?;

        check_coord("book hit pad", self.books.hit_pad)?;
        check_coord("slot hit pad", self.slots.hit_pad)?;
        check_coord("trash hit pad", self.trash.hit_pad)?;
        check_coord("pile spread", self.pile.spread)?;
        check_coord("slot spacing", self.slots.spacing)?;
        check_point("pile center", self.pile.center)?;
        check_point("trash center", self.trash.center)?;
        check_point("menu hidden position", self.menu.hidden_at)?;
        let canvas = Rect::new(0.0, 0.0, self.canvas.width, self.canvas.height);
        if self.hidden_menu_bounds().overlaps(&canvas) {
            return invalid(format!(
                "menu hidden position ({}, {}) is on the canvas",
                self.menu.hidden_at.0, self.menu.hidden_at.1
            ));
        }

        Ok(())
    }

    /// Area covered by the menu options while the menu is hidden
    pub fn hidden_menu_bounds(&self) -> Rect {
        let (x, y) = self.menu.hidden_at;
        let (w, h) = (self.menu.option_width, self.menu.option_height);
        Rect::new(x - w * 0.5, y - h * 0.5, w, h * MAX_RATING as f32)
    }
}

fn invalid(message: String) -> Result<(), LayoutError> {
    Err(LayoutError::ValidationError(message))
}

/// Check if a float is valid (finite and within bounds)
fn is_valid_float(f: f32) -> bool {
    f.is_finite() && f.abs() <= limits::MAX_COORD
}

fn check_text(what: &str, text: &str) -> Result<(), LayoutError> {
    if text.trim().is_empty() {
        return invalid(format!("{} is empty", what));
    }
    if text.len() > limits::MAX_STRING_LEN {
        return invalid(format!("{} too long ({} > {})", what, text.len(), limits::MAX_STRING_LEN));
    }
    Ok(())
}

fn check_size(what: &str, w: f32, h: f32) -> Result<(), LayoutError> {
    if !is_valid_float(w) || !is_valid_float(h) || w <= 0.0 || h <= 0.0 {
        return invalid(format!("{} size must be positive, got {}x{}", what, w, h));
    }
    Ok(())
}

fn check_coord(what: &str, v: f32) -> Result<(), LayoutError> {
    if !is_valid_float(v) || v < 0.0 {
        return invalid(format!("{} must be a non-negative number, got {}", what, v));
    }
    Ok(())
}

fn check_point(what: &str, (x, y): (f32, f32)) -> Result<(), LayoutError> {
    if !is_valid_float(x) || !is_valid_float(y) {
        return invalid(format!("{} out of range: ({}, {})", what, x, y));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_layout() {
        let layout = ShelfLayout::builtin().unwrap();
        assert_eq!(layout.canvas, CanvasSize { width: 400.0, height: 400.0 });
        assert_eq!(layout.titles.len(), 12);
        let labels: Vec<_> = layout.shelves.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Favorite", "Have Read", "Want to Read"]);
        assert!(layout.shelves.iter().all(|r| r.count == 3));
        assert_eq!(layout.trash.label, "Trash");
        assert_eq!(layout.pile.seed, None);
    }

    #[test]
    fn test_titles_sorted_descending() {
        let layout = ShelfLayout::builtin().unwrap();
        let titles = layout.sorted_titles();
        assert_eq!(titles.first().map(String::as_str), Some("The Name of the Wind"));
        assert_eq!(titles.last().map(String::as_str), Some("A Brief History of Time"));
    }

    #[test]
    fn test_row_centers() {
        let layout = ShelfLayout::builtin().unwrap();
        let centers = layout.row_centers(&layout.shelves[1]);
        assert_eq!(centers, vec![(165.0, 205.0), (255.0, 205.0), (345.0, 205.0)]);
    }

    #[test]
    fn test_rejects_empty_titles() {
        let mut layout = ShelfLayout::builtin().unwrap();
        layout.titles.clear();
        assert!(matches!(layout.validate(), Err(LayoutError::ValidationError(_))));
    }

    #[test]
    fn test_rejects_bad_sizes() {
        let mut layout = ShelfLayout::builtin().unwrap();
        layout.books.width = f32::NAN;
        assert!(layout.validate().is_err());

        let mut layout = ShelfLayout::builtin().unwrap();
        layout.slots.height = 0.0;
        assert!(layout.validate().is_err());

        let mut layout = ShelfLayout::builtin().unwrap();
        layout.shelves[0].count = limits::MAX_SLOTS_PER_SHELF + 1;
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_rejects_hidden_menu_on_canvas() {
        let mut layout = ShelfLayout::builtin().unwrap();
        layout.menu.hidden_at = (10.0, 10.0);
        assert!(matches!(layout.validate(), Err(LayoutError::ValidationError(_))));

        // Right edge of the options just pokes onto the canvas
        layout.menu.hidden_at = (-30.0, 0.0);
        assert!(layout.validate().is_err());

        layout.menu.hidden_at = (-32.5, 0.0);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_parse_error_reported() {
        let err = ShelfLayout::from_ron("(canvas: oops)").unwrap_err();
        assert!(matches!(err, LayoutError::ParseError(_)));
        assert!(err.to_string().starts_with("Parse error"));
    }

    #[test]
    fn test_load_from_file() {
        let mut layout = ShelfLayout::builtin().unwrap();
        layout.titles = vec!["Anathem".to_string()];
        layout.pile.seed = Some(7);
        let source = ron::ser::to_string_pretty(&layout, ron::ser::PrettyConfig::default()).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(source.as_bytes()).unwrap();

        let loaded = ShelfLayout::load(file.path()).unwrap();
        assert_eq!(loaded, layout);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ShelfLayout::load(&dir.path().join("missing.ron")).unwrap_err();
        assert!(matches!(err, LayoutError::IoError(_)));
    }
}

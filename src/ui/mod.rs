//! Thin rendering and input layer over macroquad
//!
//! - Rectangle geometry for hit tests
//! - Pointer sampling and event derivation
//! - Color tiers and text wrapping
//! - The `Canvas` trait the shelf engine draws through
//!
//! Note: some helpers are only exercised by tests.

#![allow(dead_code)]

mod rect;
mod input;
mod theme;
mod text;
pub mod canvas;

pub use rect::*;
pub use input::*;
pub use theme::*;
pub use canvas::{Canvas, ScreenCanvas};

//! Core types and traits for the dashlet widget toolkit.
//!
//! This crate provides the foundations shared by every dashlet widget:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`] with hex parsing/formatting
//! - The painting seam: [`Canvas`] and the [`RecordingCanvas`] test double
//! - The markup seam: [`Element`] for deterministic HTML/CSS emission
//! - Escaping: [`escape`] / [`unescape`] for data-derived text

mod canvas;
mod color;
mod element;
pub mod escape;
mod geometry;

pub use canvas::{Canvas, DrawCommand, RecordingCanvas, TextStyle};
pub use color::{Color, ColorParseError};
pub use element::Element;
pub use escape::{escape, unescape};
pub use geometry::{Point, Rect, Size};

//! Presentation layer for visual styling and color mapping.
//!
//! Maps model values (panel categories, notification kinds) onto theme
//! colors, keeping egui types out of the menu model.

pub mod color_mapping;

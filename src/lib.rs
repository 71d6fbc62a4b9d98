//! Placeholder "TK" monogram icon generator.
//!
//! Renders the launcher and web icon styles at every size the Android and web
//! asset folders expect and writes them as RGBA PNG files.

pub mod bitmap_font;
pub mod font;
pub mod icon_gen;
pub mod inspect;
pub mod render;
pub mod style;

//! Label variants and ZPL rendering
//!
//! A [`LabelVariant`] is a closed enumeration of the label layouts the shop
//! floor uses. Each variant owns its field requirements, its fixed geometry,
//! and its printer routing key; dispatch happens on the enum, never on raw
//! strings.

mod renderer;
mod variant;

pub use renderer::{LabelDocument, RenderError, render};
pub use variant::LabelVariant;

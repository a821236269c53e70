//! The color value type and its operations.
//!
//! A [`Color`] binds a registered [`ColorSpace`](crate::ColorSpace) to a
//! coordinate tuple and an alpha value, all stored as
//! [`Decimal`](crate::Decimal). Behaviour is grouped by capability:
//!
//! - construction and display: `color`
//! - conversion and per-model accessors: `convert`
//! - blending: `blend`
//! - lightness adjustment: `lighten`
//! - hex notation and byte channels: `hex`
//!
//! # Example
//!
//! ```
//! use chromakit_core::Color;
//!
//! let accent = Color::from_hex("#3366cc").unwrap();
//! let softer = accent.lighten(0.1).unwrap();
//! assert_eq!(softer.color_space().name(), "oklab");
//! assert_eq!(softer.to_srgb().unwrap().color_space().name(), "srgb");
//! ```

mod blend;
mod color;
mod convert;
mod hex;
mod lighten;

pub(crate) use blend::blend_colors;
pub use color::Color;
pub(crate) use lighten::clamp_unit;

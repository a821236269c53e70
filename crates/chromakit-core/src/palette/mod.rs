//! Ordered color collections.
//!
//! A [`Palette`] is a plain sequence of [`Color`](crate::Color)s, each in its
//! own space. On top of list access it offers aggregates (average, folded
//! blend), interpolation between neighbours, and Oklab lightness remapping.

mod interpolate;
mod luminance;
mod palette;

pub use palette::Palette;

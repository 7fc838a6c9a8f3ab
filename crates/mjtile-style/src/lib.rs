#![forbid(unsafe_code)]

//! Style vocabulary for mjtile.
//!
//! # Role in mjtile
//! Widgets describe their look with utility-class tokens. This crate holds
//! the pieces that decide which tokens: viewport tiers, per-tier values,
//! theme variants and the label palettes. It knows nothing about markup.
//!
//! # This crate provides
//! - [`Breakpoint`] and [`Breakpoints`] for viewport width tiers.
//! - [`Responsive`] for values that change per tier.
//! - [`ClassList`] for class-name composition.
//! - [`AdaptiveClass`] for light/dark class pairs.
//! - [`Palette`] for label colors, plus [`BoxSize`] for box dimensions.

/// Light/dark class pairs.
pub mod adaptive;
/// Viewport width tiers.
pub mod breakpoint;
/// Class-name composition.
pub mod class;
/// Label color palettes.
pub mod palette;
/// Breakpoint-aware values.
pub mod responsive;
/// Box dimensions.
pub mod size;

pub use adaptive::AdaptiveClass;
pub use breakpoint::{Breakpoint, Breakpoints};
pub use class::ClassList;
pub use mjtile_core::{ColorCategory, Theme};
pub use palette::{Palette, SLOT_BORDER, TEXT_STROKE};
pub use responsive::{ClassTokens, Responsive};
pub use size::BoxSize;

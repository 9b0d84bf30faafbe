//! # pipecheck-color
//!
//! Color science for pipeline verification: the fixed color space
//! matrices, sRGB transfer functions, tonemap operators, and the five
//! pipeline stage functions they compose into.
//!
//! # Pipeline stages
//!
//! The rendering pipeline under test exposes five numbered stages; each
//! is modeled here as a pure function of a color sample and a typed
//! settings struct:
//!
//! | Stage | Function | Transform |
//! |-------|----------|-----------|
//! | 4 | [`stages::input_convert`] | source gamut -> Linear Rec.709 |
//! | 5 | [`stages::color_grade`] | exposure scaling |
//! | 6 | [`stages::tonemap`] | HDR -> bounded range |
//! | 8 | [`stages::output_encode`] | linear -> display encoding |
//! | 9 | [`stages::display_remap`] | black/white level remap |
//!
//! Stages 0-3 and 7 exist in the pipeline but carry no verifiable math,
//! so they are deliberately out of scope.
//!
//! # Usage
//!
//! ```rust
//! use pipecheck_color::stages::{self, TonemapSettings};
//! use pipecheck_math::Rgb;
//!
//! let hdr = Rgb::new(5.0, 3.0, 1.0);
//! let settings = TonemapSettings { tonemap_op: 1, ..Default::default() };
//! let out = stages::tonemap(hdr, &settings);
//! assert!(out.r >= 0.0 && out.r <= 1.0);
//! ```

#![warn(missing_docs)]

pub mod matrices;
pub mod srgb;
pub mod stages;
pub mod tonemap;

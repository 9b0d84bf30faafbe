//! # pipecheck-math
//!
//! Math primitives for pipeline verification: RGB color triples and
//! row-major 3x3 matrices.
//!
//! Every color transform in the checker is either a per-channel curve or
//! a fixed 3x3 linear map, so this crate is intentionally small: [`Rgb`]
//! for the triple, [`Mat3`] for the map.
//!
//! # Usage
//!
//! ```rust
//! use pipecheck_math::{Mat3, Rgb};
//!
//! let m = Mat3::IDENTITY;
//! let c = Rgb::new(0.18, 0.18, 0.18);
//! assert_eq!(m * c, c);
//! ```

#![warn(missing_docs)]

mod mat3;
mod rgb;

pub use mat3::Mat3;
pub use rgb::Rgb;

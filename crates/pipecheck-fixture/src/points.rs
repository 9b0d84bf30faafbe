//! The fixed test-point table.
//!
//! Four representative samples probe the interesting regions of every
//! stage's math: middle gray, reference white, an out-of-range HDR value,
//! and a near-black value sitting on the sRGB curve's linear segment.
//!
//! The table is identical between generator and verifier by construction;
//! the verifier nevertheless reads its copy back out of the fixture so
//! the frozen document stays the single source of truth.

use crate::model::TestPoint;
use pipecheck_math::Rgb;
use std::collections::BTreeMap;

/// The fixed test points, in canonical order.
pub const TEST_POINTS: [(&str, Rgb); 4] = [
    ("midgray", Rgb::new(0.18, 0.18, 0.18)),
    ("white", Rgb::new(1.0, 1.0, 1.0)),
    ("bright_hdr", Rgb::new(5.0, 3.0, 1.0)),
    ("near_black", Rgb::new(0.01, 0.005, 0.008)),
];

/// Builds the test-point section of the fixture (A = 1 throughout).
pub fn test_point_table() -> BTreeMap<String, TestPoint> {
    TEST_POINTS
        .iter()
        .map(|&(name, c)| {
            (
                name.to_string(),
                TestPoint {
                    r: c.r,
                    g: c.g,
                    b: c.b,
                    a: 1.0,
                },
            )
        })
        .collect()
}

//! Rgba color record.

use serde::{Deserialize, Serialize};

/// The shared highlight color, a plain value with no identity.
///
/// Components carry no range constraints; any `f32` is accepted. The zero
/// color (`Default`) stands in for "never set". Missing JSON fields decode
/// to `0.0`, mirroring wholesale replacement of the value on write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

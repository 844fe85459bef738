// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Panel dimension resolution
//!
//! Derives a roof side's width, height and depth from the footprint bounds.
//! A non-zero ridge shift stretches or compresses the depth and produces the
//! Z offset that keeps the panel's anchor edge in place.

use nalgebra::Vector3;
use roofgen_model::Bounds;

/// Resolved size of one roof side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelDimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    /// Structure offset along Z, computed before rescaling
    pub offset_z: f64,
}

impl PanelDimensions {
    /// Structure offset as a vector
    pub fn structure_offset(&self) -> Vector3<f64> {
        Vector3::new(0.0, 0.0, self.offset_z)
    }
}

/// Linear interpolation without clamping `t`
#[inline]
pub fn lerp_unclamped(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Linear interpolation with `t` clamped to `[0, 1]`
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    lerp_unclamped(a, b, t.clamp(0.0, 1.0))
}

/// Resolve panel dimensions
///
/// # Arguments
/// * `bounds` - Footprint volume (X extent is width, Z extent is depth)
/// * `roof_height` - Effective roof height, overrides already applied
/// * `ridge_shift` - Signed asymmetry; values outside `[-1, 1]` extrapolate
/// * `rescale` - Per-axis scale applied after the ridge shift
pub fn resolve_dimensions(
    bounds: &Bounds,
    roof_height: f64,
    ridge_shift: f64,
    rescale: &Vector3<f64>,
) -> PanelDimensions {
    let width = bounds.width() * rescale.x;
    let height = roof_height * rescale.y;

    let base_depth = bounds.depth();
    let mut depth = base_depth;
    let mut offset_z = 0.0;

    if ridge_shift != 0.0 {
        depth = lerp_unclamped(base_depth, base_depth * 2.0, ridge_shift);
        // Offset comes from the unscaled delta; rescale is applied afterwards
        offset_z = -(depth - base_depth) / 2.0;
    }

    PanelDimensions {
        width,
        height,
        depth: depth * rescale.z,
        offset_z,
    }
}

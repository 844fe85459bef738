// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! UV tiling resolution
//!
//! Scales the base tiling so texture density stays tied to the reference cell
//! size instead of the panel size.

use crate::dimensions::{lerp, PanelDimensions};
use nalgebra::{Vector2, Vector3};

/// Weight of the depth ratio in the deep-slope blend
const DEPTH_RATIO_WEIGHT: f64 = 0.25;

/// Resolve per-axis UV tiling for a panel
///
/// Width and height larger than one cell multiply the base tiling by their
/// cell ratio. When the panel is deeper than both one cell and its own
/// height, the V tiling is replaced by a blend of the height and depth
/// ratios weighted by `height / depth`; this replaces the height scaling
/// rather than compounding it.
///
/// Cell components that are zero or negative cannot be used as divisors; the
/// adjustments depending on them are skipped with a warning.
pub fn resolve_uv_tiling(
    dims: &PanelDimensions,
    cell_size: &Vector3<f64>,
    base_tiling: &Vector2<f64>,
) -> Vector2<f64> {
    let PanelDimensions {
        width,
        height,
        depth,
        ..
    } = *dims;
    let mut tiling = *base_tiling;

    let cell_x = usable_cell(cell_size.x, 'x');
    let cell_y = usable_cell(cell_size.y, 'y');
    let cell_z = usable_cell(cell_size.z, 'z');

    if let Some(cell_x) = cell_x {
        if width > cell_x {
            tiling.x *= width / cell_x;
        }
    }

    if let Some(cell_y) = cell_y {
        if height > cell_y {
            tiling.y *= height / cell_y;
        }
    }

    if let (Some(cell_y), Some(cell_z)) = (cell_y, cell_z) {
        if depth > cell_z && depth > height && depth != 0.0 {
            let y_ratio = height / cell_y;
            let z_ratio = (depth / cell_z) * DEPTH_RATIO_WEIGHT;
            let height_depth = height / depth;
            tiling.y = base_tiling.y * lerp(z_ratio, y_ratio, height_depth);
        }
    }

    tiling
}

fn usable_cell(size: f64, axis: char) -> Option<f64> {
    if size > 0.0 {
        Some(size)
    } else {
        log::warn!(
            "Cell size {} on {} axis is not positive, skipping UV ratio",
            size,
            axis
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn dims(width: f64, height: f64, depth: f64) -> PanelDimensions {
        PanelDimensions {
            width,
            height,
            depth,
            offset_z: 0.0,
        }
    }

    fn unit_cell() -> Vector3<f64> {
        Vector3::new(1.0, 1.0, 1.0)
    }

    #[test]
    fn test_small_panel_keeps_base_tiling() {
        let base = Vector2::new(2.0, 3.0);
        let tiling = resolve_uv_tiling(&dims(0.5, 1.0, 0.75), &unit_cell(), &base);
        assert_eq!(tiling, base);
    }

    #[test]
    fn test_width_doubles_u() {
        let base = Vector2::new(1.5, 1.0);
        let tiling = resolve_uv_tiling(&dims(2.0, 0.5, 0.5), &unit_cell(), &base);
        assert_relative_eq!(tiling.x, 3.0);
        assert_relative_eq!(tiling.y, 1.0);
    }

    #[test]
    fn test_height_scales_v() {
        let base = Vector2::new(1.0, 2.0);
        let cell = Vector3::new(1.0, 0.5, 4.0);
        let tiling = resolve_uv_tiling(&dims(1.0, 2.0, 1.0), &cell, &base);
        assert_relative_eq!(tiling.y, 8.0);
    }

    #[test]
    fn test_deep_panel_blends_v() {
        let base = Vector2::new(1.0, 1.0);
        let tiling = resolve_uv_tiling(&dims(1.0, 1.0, 10.0), &unit_cell(), &base);
        // lerp(2.5, 1.0, 0.1)
        assert_relative_eq!(tiling.y, 2.35, epsilon = 1e-12);
    }

    #[test]
    fn test_deep_panel_overwrites_height_scaling() {
        let base = Vector2::new(1.0, 2.0);
        let tiling = resolve_uv_tiling(&dims(1.0, 2.0, 10.0), &unit_cell(), &base);

        let blended = lerp(10.0 * 0.25, 2.0, 2.0 / 10.0);
        assert_relative_eq!(blended, 2.4, epsilon = 1e-12);
        assert_relative_eq!(tiling.y, 2.0 * blended, epsilon = 1e-12);

        let compounded = 2.0 * (2.0 / 1.0) * blended;
        assert!((tiling.y - compounded).abs() > 1e-6);
    }

    #[test]
    fn test_deep_but_shorter_than_height_not_blended() {
        let base = Vector2::new(1.0, 1.0);
        let tiling = resolve_uv_tiling(&dims(1.0, 5.0, 3.0), &unit_cell(), &base);
        assert_relative_eq!(tiling.y, 5.0);
    }

    #[test]
    fn test_zero_cell_component_skips_ratio() {
        let base = Vector2::new(1.0, 1.0);
        let cell = Vector3::new(0.0, 1.0, 1.0);
        let tiling = resolve_uv_tiling(&dims(4.0, 2.0, 0.5), &cell, &base);
        assert_eq!(tiling.x, 1.0);
        assert_relative_eq!(tiling.y, 2.0);
        assert!(tiling.x.is_finite() && tiling.y.is_finite());
    }

    #[test]
    fn test_zero_depth_cell_skips_blend_only() {
        let base = Vector2::new(1.0, 1.0);
        let cell = Vector3::new(1.0, 1.0, 0.0);
        let tiling = resolve_uv_tiling(&dims(3.0, 2.0, 10.0), &cell, &base);
        assert_relative_eq!(tiling.x, 3.0);
        assert_relative_eq!(tiling.y, 2.0);
    }

    #[test]
    fn test_negative_cell_treated_as_unusable() {
        let base = Vector2::new(1.0, 1.0);
        let cell = Vector3::new(-1.0, -1.0, -1.0);
        let tiling = resolve_uv_tiling(&dims(3.0, 2.0, 10.0), &cell, &base);
        assert_eq!(tiling, base);
    }
}

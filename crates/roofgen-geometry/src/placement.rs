// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Panel placement math
//!
//! Frames are Y-up. The primary roof side faces back (-Z), the secondary side
//! faces forward (+Z).

use nalgebra::{Isometry3, Point3, Translation3, UnitQuaternion, Vector3};
use roofgen_model::{Bounds, ChildPlacement, Placement};
use std::f64::consts::{FRAC_PI_2, PI};

/// Which roof side a panel covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Faces -Z
    Back,
    /// Faces +Z
    Forward,
}

impl Side {
    /// Rotation turning +Z to face this side
    pub fn rotation(self) -> UnitQuaternion<f64> {
        match self {
            Side::Back => UnitQuaternion::from_axis_angle(&Vector3::y_axis(), PI),
            Side::Forward => UnitQuaternion::identity(),
        }
    }
}

/// Extra yaw applied to both panels when the roof is rotated by 90 degrees
pub fn extra_rotation(rotate_90: bool) -> UnitQuaternion<f64> {
    if rotate_90 {
        quarter_turn()
    } else {
        UnitQuaternion::identity()
    }
}

#[inline]
fn quarter_turn() -> UnitQuaternion<f64> {
    UnitQuaternion::from_axis_angle(&Vector3::y_axis(), FRAC_PI_2)
}

/// Axis-aligned bounds of the footprint after a 90 degree turn around Y
///
/// All eight corners are rotated about the bounds center and re-enclosed, so
/// the X and Z extents swap.
pub fn rotate_bounds_90(bounds: &Bounds) -> Bounds {
    let rotation = quarter_turn();
    let center = Point3::from(bounds.center);
    let (min, max) = (bounds.min, bounds.max);

    let mut lo = Vector3::repeat(f64::INFINITY);
    let mut hi = Vector3::repeat(f64::NEG_INFINITY);
    for &x in &[min[0], max[0]] {
        for &y in &[min[1], max[1]] {
            for &z in &[min[2], max[2]] {
                let corner = Point3::new(x, y, z);
                let rotated = center + rotation * (corner - center);
                lo = lo.inf(&rotated.coords);
                hi = hi.sup(&rotated.coords);
            }
        }
    }

    Bounds {
        center: bounds.center,
        min: lo.into(),
        max: hi.into(),
    }
}

/// Place a panel around the bounds center
///
/// Position is `center + side_rotation * offset`; rotation is
/// `extra * side_rotation`.
pub fn place_panel(
    center: &Point3<f64>,
    side: Side,
    offset: &Vector3<f64>,
    extra: &UnitQuaternion<f64>,
) -> Isometry3<f64> {
    let side_rotation = side.rotation();
    let position = center + side_rotation * offset;
    Isometry3::from_parts(Translation3::from(position.coords), extra * side_rotation)
}

/// Express a child's world transform relative to its parent
pub fn relative_to(parent: &Isometry3<f64>, child: &Isometry3<f64>) -> Isometry3<f64> {
    parent.inv_mul(child)
}

/// Convert to the plain placement record
pub fn to_placement(iso: &Isometry3<f64>) -> Placement {
    let q = iso.rotation.quaternion();
    Placement::new(iso.translation.vector.into(), [q.i, q.j, q.k, q.w])
}

/// Build a parented placement record
pub fn child_placement(parent: &Isometry3<f64>, child: &Isometry3<f64>) -> ChildPlacement {
    ChildPlacement {
        world: to_placement(child),
        relative: to_placement(&relative_to(parent, child)),
    }
}

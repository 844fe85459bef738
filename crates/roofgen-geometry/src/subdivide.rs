// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Midpoint subdivision of profile curves

use crate::profile::ProfilePair;
use nalgebra::Point2;
use roofgen_model::{ControlPoint, Curve};

/// Insert a midpoint into every gap of the curve, `times` times
///
/// Each pass splits every gap of the previous pass's result, so a single pass
/// over `k` points yields `k + (k - 1)` points and `times` passes yield
/// `1 + (k - 1) * 2^times`. Inserted points are smooth and white. Curves with
/// fewer than two points have no gaps and come back unchanged.
pub fn subdivide(curve: &Curve, times: u32) -> Curve {
    if times == 0 || !curve.is_set() {
        return curve.clone();
    }

    let mut points = curve.points().to_vec();
    for _ in 0..times {
        let mut next = Vec::with_capacity(points.len() * 2 - 1);
        for pair in points.windows(2) {
            next.push(pair[0]);
            next.push(midpoint(&pair[0], &pair[1]));
        }
        // windows(2) never yields the final point on its own
        if let Some(last) = points.last() {
            next.push(*last);
        }
        points = next;
    }

    Curve::from_points(points)
}

#[inline]
fn midpoint(a: &ControlPoint, b: &ControlPoint) -> ControlPoint {
    let pa = Point2::from(a.position);
    let pb = Point2::from(b.position);
    let mid = nalgebra::center(&pa, &pb);
    ControlPoint::new(mid.x, mid.y, true)
}

/// Apply the extra subdivision counts to a profile pair
///
/// `counts[0]` refines the horizontal curve, `counts[1]` the vertical one.
pub fn subdivide_pair(pair: &ProfilePair, counts: [u32; 2]) -> ProfilePair {
    ProfilePair {
        vertical: subdivide(&pair.vertical, counts[1]),
        horizontal: subdivide(&pair.horizontal, counts[0]),
    }
}

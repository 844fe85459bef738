// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for roof panel data
//!
//! Plain data shared between the generator and its collaborators. Vectors are
//! stored as fixed arrays so the types serialize without a math library.

use serde::{Deserialize, Serialize};
use std::fmt;

/// RGBA color [r, g, b, a] where values are 0.0-1.0
pub type Rgba = [f32; 4];

/// Opaque white, the color of a point nobody has painted
pub const WHITE: Rgba = [1.0, 1.0, 1.0, 1.0];

/// A single control point of a profile curve
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    /// Position in normalized curve space `[u, v]`
    pub position: [f64; 2],
    /// Vertex color carried through to downstream shading
    #[serde(default = "default_color")]
    pub color: Rgba,
    /// Whether the loft should smooth through this point
    #[serde(default)]
    pub smooth: bool,
}

fn default_color() -> Rgba {
    WHITE
}

impl ControlPoint {
    /// Create a white control point
    pub fn new(u: f64, v: f64, smooth: bool) -> Self {
        Self {
            position: [u, v],
            color: WHITE,
            smooth,
        }
    }

    /// Replace the color tag
    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    #[inline]
    pub fn u(&self) -> f64 {
        self.position[0]
    }

    #[inline]
    pub fn v(&self) -> f64 {
        self.position[1]
    }
}

/// Which cross-section of the panel a curve describes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveAxis {
    /// Slope profile ("curve1")
    Vertical,
    /// Ridge-line profile ("curve2")
    Horizontal,
}

impl fmt::Display for CurveAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveAxis::Vertical => write!(f, "vertical"),
            CurveAxis::Horizontal => write!(f, "horizontal"),
        }
    }
}

/// Ordered list of control points
///
/// Order defines the traversal along the profile. A curve with fewer than two
/// points is considered unset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Curve {
    points: Vec<ControlPoint>,
}

impl Curve {
    /// Create an empty curve
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a curve from points in traversal order
    pub fn from_points(points: Vec<ControlPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<ControlPoint> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Check whether the curve holds enough points to be lofted
    pub fn is_set(&self) -> bool {
        self.points.len() >= 2
    }

    pub fn first(&self) -> Option<&ControlPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&ControlPoint> {
        self.points.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ControlPoint> {
        self.points.iter()
    }

    pub fn push(&mut self, point: ControlPoint) {
        self.points.push(point);
    }

    /// Check that the primary (`u`) coordinate never decreases
    pub fn is_monotonic(&self) -> bool {
        self.points.windows(2).all(|w| w[0].u() <= w[1].u())
    }
}

impl From<Vec<ControlPoint>> for Curve {
    fn from(points: Vec<ControlPoint>) -> Self {
        Self::from_points(points)
    }
}

impl<'a> IntoIterator for &'a Curve {
    type Item = &'a ControlPoint;
    type IntoIter = std::slice::Iter<'a, ControlPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Axis-aligned bounding volume of the roof footprint
///
/// Only the X (width) and Z (depth) extents feed the panel dimensions; the
/// center anchors placement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub center: [f64; 3],
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl Bounds {
    /// Create bounds from two opposite corners
    pub fn from_min_max(min: [f64; 3], max: [f64; 3]) -> Self {
        Self {
            center: [
                (min[0] + max[0]) * 0.5,
                (min[1] + max[1]) * 0.5,
                (min[2] + max[2]) * 0.5,
            ],
            min,
            max,
        }
    }

    /// Create bounds from a center and full size
    pub fn from_center_size(center: [f64; 3], size: [f64; 3]) -> Self {
        let half = [size[0] * 0.5, size[1] * 0.5, size[2] * 0.5];
        Self {
            center,
            min: [center[0] - half[0], center[1] - half[1], center[2] - half[2]],
            max: [center[0] + half[0], center[1] + half[1], center[2] + half[2]],
        }
    }

    /// X extent
    pub fn width(&self) -> f64 {
        (self.min[0] - self.max[0]).abs()
    }

    /// Y extent
    pub fn height(&self) -> f64 {
        (self.min[1] - self.max[1]).abs()
    }

    /// Z extent
    pub fn depth(&self) -> f64 {
        (self.min[2] - self.max[2]).abs()
    }
}

/// Reference to a material asset owned by the host application
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialRef(pub String);

impl fmt::Display for MaterialRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MaterialRef {
    fn from(name: &str) -> Self {
        MaterialRef(name.to_string())
    }
}

/// Triangle mesh produced by a loft engine
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    /// Vertex positions as flattened [x, y, z, x, y, z, ...]
    pub positions: Vec<f32>,
    /// Vertex normals as flattened [nx, ny, nz, nx, ny, nz, ...]
    pub normals: Vec<f32>,
    /// Texture coordinates as flattened [u, v, u, v, ...]
    pub uvs: Vec<f32>,
    /// Vertex colors, one per vertex
    pub colors: Vec<Rgba>,
    /// Triangle indices
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if mesh is empty
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

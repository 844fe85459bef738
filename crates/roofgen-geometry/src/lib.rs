// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Roofgen Geometry
//!
//! Parametric generation of roof side panels. Given a footprint volume and a
//! handful of shape parameters, this crate prepares everything a loft engine
//! needs to build a pitched or gabled roof.
//!
//! ## Overview
//!
//! - **Profiles**: Vertical and horizontal profile curves with default shapes
//! - **Subdivision**: Midpoint refinement of profile curves
//! - **Dimensions**: Panel size from bounds, rescale and ridge shift
//! - **UV Tiling**: Texture tiling relative to a reference cell size
//! - **Generator**: Symmetric (mirrored) or asymmetric roof assembly
//!
//! Turning a [`PanelSpec`] into triangles is left to a
//! [`PanelLoft`](roofgen_model::PanelLoft) implementation supplied by the host.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use roofgen_geometry::{Bounds, RoofPlaneGenerator, RoofShapeParams};
//!
//! let params = RoofShapeParams {
//!     roof_height: 2.0,
//!     ridge_shift: 0.5,
//!     ..Default::default()
//! };
//! let bounds = Bounds::from_center_size([0.0, 0.0, 0.0], [4.0, 3.0, 4.0]);
//!
//! let roof = RoofPlaneGenerator::new(params).generate(&bounds)?;
//! println!("Primary depth: {}", roof.primary_panel().depth);
//! ```

pub mod dimensions;
pub mod error;
pub mod generator;
pub mod loft;
pub mod placement;
pub mod profile;
pub mod subdivide;
pub mod uv;

// Re-export nalgebra types for convenience
pub use nalgebra::{Isometry3, Point3, UnitQuaternion, Vector2, Vector3};

// Re-export model types used at the API surface
pub use roofgen_model::{
    Bounds, ControlPoint, Curve, CurveAxis, GeneratedRoof, ParameterOverrides, PanelSpec,
    Placement, RoofShapeParams, TileDesignPreset,
};

// Re-export main types
pub use dimensions::{lerp, lerp_unclamped, resolve_dimensions, PanelDimensions};
pub use error::{Error, Result};
pub use generator::RoofPlaneGenerator;
pub use loft::{loft_roof, RoofMeshes};
pub use placement::{rotate_bounds_90, Side};
pub use profile::{ensure_default_curve, DefaultCurveShape, ProfilePair};
pub use subdivide::{subdivide, subdivide_pair};
pub use uv::resolve_uv_tiling;

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Roofgen Model - Shared types for procedural roof panel generation
//!
//! This crate holds the plain data exchanged between the roof generator and
//! its collaborators. It has no math library dependency; vectors are stored as
//! fixed-size arrays so everything serializes cleanly.
//!
//! # Contents
//!
//! - [`Curve`] / [`ControlPoint`] - profile curves fed to the loft
//! - [`Bounds`] - footprint volume the roof is fitted to
//! - [`RoofShapeParams`], [`ParameterOverrides`], [`TileDesignPreset`] - inputs
//! - [`PanelSpec`], [`GeneratedRoof`] - outputs
//! - [`PanelLoft`] - the mesh engine boundary
//!
//! # Example
//!
//! ```ignore
//! use roofgen_model::RoofShapeParams;
//!
//! let params = RoofShapeParams::from_json_str(r#"{"roof_height": 2.0}"#)?;
//! assert_eq!(params.ridge_shift, 0.0);
//! ```

pub mod error;
pub mod geometry;
pub mod params;
pub mod traits;
pub mod types;

// Re-export all public types
pub use error::*;
pub use geometry::*;
pub use params::*;
pub use traits::*;
pub use types::*;

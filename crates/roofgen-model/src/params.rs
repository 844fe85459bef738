// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shape parameters, overrides and presets
//!
//! Everything the generator reads for a single request. All fields have
//! defaults so partial JSON documents are accepted.

use crate::{Curve, MaterialRef, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parameter set for one roof generation request
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoofShapeParams {
    /// Ridge height above the footprint
    pub roof_height: f64,
    /// Signed ridge shift; zero produces a symmetric gable
    pub ridge_shift: f64,
    /// Per-axis scale applied to the resolved dimensions
    pub rescale: [f64; 3],
    /// Additional offset applied in each panel's facing frame
    pub extra_offset: [f64; 3],
    /// Extra midpoint passes: `[horizontal curve, vertical curve]`
    pub extra_subdivisions: [u32; 2],
    /// Base texture tiling before cell-size scaling
    pub uv_tiling: [f64; 2],
    /// Rotate the footprint and both panels by 90 degrees around Y
    pub rotate_90: bool,
    /// Reference size of one grid cell
    pub cell_size: [f64; 3],
    /// Material assigned to the panels, overriding any preset material
    pub target_material: Option<MaterialRef>,
}

impl Default for RoofShapeParams {
    fn default() -> Self {
        Self {
            roof_height: 1.0,
            ridge_shift: 0.0,
            rescale: [1.0, 1.0, 1.0],
            extra_offset: [0.0, 0.0, 0.0],
            extra_subdivisions: [0, 0],
            uv_tiling: [1.0, 1.0],
            rotate_90: false,
            cell_size: [1.0, 1.0, 1.0],
            target_material: None,
        }
    }
}

impl RoofShapeParams {
    /// Parse parameters from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read parameters from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Roof height after applying an optional override
    pub fn effective_roof_height(&self, overrides: &ParameterOverrides) -> f64 {
        overrides.roof_height.unwrap_or(self.roof_height)
    }

    /// Ridge shift after applying an optional override
    pub fn effective_ridge_shift(&self, overrides: &ParameterOverrides) -> f64 {
        overrides.ridge_shift.unwrap_or(self.ridge_shift)
    }
}

/// Externally supplied values that take precedence over configured constants
///
/// `None` means "not overridden"; an explicit `Some(0.0)` is a real zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterOverrides {
    pub roof_height: Option<f64>,
    pub ridge_shift: Option<f64>,
}

impl ParameterOverrides {
    /// No overrides
    pub fn none() -> Self {
        Self::default()
    }

    /// Convert variable lookups that report zero when unset
    ///
    /// Hosts that cannot express "absent" hand back `0.0`; such values are
    /// treated as no override.
    pub fn from_legacy(roof_height: f64, ridge_shift: f64) -> Self {
        let present = |v: f64| if v == 0.0 { None } else { Some(v) };
        Self {
            roof_height: present(roof_height),
            ridge_shift: present(ridge_shift),
        }
    }
}

/// Reusable design seed carrying pre-authored curves and a material
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileDesignPreset {
    pub name: String,
    /// Slope profile ("curve1")
    pub vertical: Curve,
    /// Ridge-line profile ("curve2")
    pub horizontal: Curve,
    /// Material used when the parameters name none
    pub material: Option<MaterialRef>,
}

impl TileDesignPreset {
    /// Parse a preset from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ModelError;

    #[test]
    fn test_defaults() {
        let params = RoofShapeParams::default();
        assert_eq!(params.roof_height, 1.0);
        assert_eq!(params.ridge_shift, 0.0);
        assert_eq!(params.rescale, [1.0, 1.0, 1.0]);
        assert_eq!(params.cell_size, [1.0, 1.0, 1.0]);
        assert_eq!(params.extra_subdivisions, [0, 0]);
        assert!(!params.rotate_90);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let params =
            RoofShapeParams::from_json_str(r#"{"roof_height": 2.5, "rotate_90": true}"#).unwrap();
        assert_eq!(params.roof_height, 2.5);
        assert!(params.rotate_90);
        assert_eq!(params.uv_tiling, [1.0, 1.0]);
        assert!(params.target_material.is_none());
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = RoofShapeParams::from_json_str(r#"{"roof_height": "tall"}"#).unwrap_err();
        assert!(matches!(err, ModelError::Json(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = RoofShapeParams::from_json_file("/nonexistent/roof.json").unwrap_err();
        assert!(matches!(err, ModelError::Io(_)));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let params = RoofShapeParams {
            roof_height: 2.0,
            ridge_shift: 0.3,
            ..Default::default()
        };
        let overrides = ParameterOverrides {
            roof_height: Some(0.0),
            ridge_shift: None,
        };
        assert_eq!(params.effective_roof_height(&overrides), 0.0);
        assert_eq!(params.effective_ridge_shift(&overrides), 0.3);
    }

    #[test]
    fn test_legacy_zero_means_unset() {
        let overrides = ParameterOverrides::from_legacy(0.0, -0.5);
        assert_eq!(overrides.roof_height, None);
        assert_eq!(overrides.ridge_shift, Some(-0.5));
    }

    #[test]
    fn test_preset_from_json() {
        let preset = TileDesignPreset::from_json_str(
            r#"{
                "name": "Tiles",
                "vertical": [{"position": [0.0, 0.0]}, {"position": [1.0, 0.8], "smooth": true}],
                "material": "roof_tiles"
            }"#,
        )
        .unwrap();
        assert_eq!(preset.vertical.len(), 2);
        assert!(preset.horizontal.is_empty());
        assert_eq!(preset.material, Some(MaterialRef::from("roof_tiles")));
    }
}

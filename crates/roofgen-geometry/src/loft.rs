// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hand-off of generated panels to a loft engine

use crate::Result;
use roofgen_model::{ChildPlacement, GeneratedRoof, MeshData, PanelLoft, Placement};
use std::sync::Arc;

/// Lofted geometry for both roof sides
#[derive(Debug, Clone)]
pub struct RoofMeshes {
    pub primary: Arc<MeshData>,
    pub primary_placement: Placement,
    /// Same allocation as `primary` for symmetric roofs
    pub secondary: Arc<MeshData>,
    pub secondary_placement: ChildPlacement,
}

impl RoofMeshes {
    /// Check whether both sides share one mesh
    pub fn is_instanced(&self) -> bool {
        Arc::ptr_eq(&self.primary, &self.secondary)
    }

    /// Total triangle count of both sides
    pub fn triangle_count(&self) -> usize {
        self.primary.triangle_count() + self.secondary.triangle_count()
    }
}

/// Loft every distinct panel of a generated roof
///
/// A symmetric roof is lofted once and its mirror reuses the mesh.
pub fn loft_roof(roof: &GeneratedRoof, engine: &dyn PanelLoft) -> Result<RoofMeshes> {
    match roof {
        GeneratedRoof::Symmetric {
            panel,
            primary,
            mirror,
        } => {
            let mesh = Arc::new(engine.loft(panel)?);
            Ok(RoofMeshes {
                primary: Arc::clone(&mesh),
                primary_placement: *primary,
                secondary: mesh,
                secondary_placement: *mirror,
            })
        }
        GeneratedRoof::Asymmetric {
            primary_panel,
            primary,
            secondary_panel,
            secondary,
        } => Ok(RoofMeshes {
            primary: Arc::new(engine.loft(primary_panel)?),
            primary_placement: *primary,
            secondary: Arc::new(engine.loft(secondary_panel)?),
            secondary_placement: *secondary,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, RoofPlaneGenerator};
    use roofgen_model::{Bounds, ModelError, PanelSpec, RoofShapeParams};
    use std::cell::Cell;

    /// Emits one quad per panel and counts calls
    struct QuadEngine {
        calls: Cell<usize>,
    }

    impl QuadEngine {
        fn new() -> Self {
            Self {
                calls: Cell::new(0),
            }
        }
    }

    impl PanelLoft for QuadEngine {
        fn loft(&self, panel: &PanelSpec) -> roofgen_model::Result<MeshData> {
            self.calls.set(self.calls.get() + 1);
            if panel.is_degenerate() {
                return Ok(MeshData::new());
            }
            let (w, h, d) = (panel.width as f32, panel.height as f32, panel.depth as f32);
            Ok(MeshData {
                positions: vec![0.0, 0.0, 0.0, w, 0.0, 0.0, w, h, d, 0.0, h, d],
                normals: vec![0.0, 1.0, 0.0].repeat(4),
                uvs: vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0],
                colors: vec![[1.0; 4]; 4],
                indices: vec![0, 1, 2, 0, 2, 3],
            })
        }
    }

    fn footprint() -> Bounds {
        Bounds::from_center_size([0.0, 0.0, 0.0], [4.0, 2.0, 4.0])
    }

    #[test]
    fn test_symmetric_roof_lofted_once() {
        let roof = RoofPlaneGenerator::new(RoofShapeParams::default())
            .generate(&footprint())
            .unwrap();
        let engine = QuadEngine::new();

        let meshes = loft_roof(&roof, &engine).unwrap();
        assert_eq!(engine.calls.get(), 1);
        assert!(meshes.is_instanced());
        assert_eq!(meshes.triangle_count(), 4);
    }

    #[test]
    fn test_asymmetric_roof_lofted_twice() {
        let roof = RoofPlaneGenerator::new(RoofShapeParams {
            ridge_shift: 0.25,
            ..Default::default()
        })
        .generate(&footprint())
        .unwrap();
        let engine = QuadEngine::new();

        let meshes = loft_roof(&roof, &engine).unwrap();
        assert_eq!(engine.calls.get(), 2);
        assert!(!meshes.is_instanced());
        assert_eq!(meshes.primary_placement, roof.primary_placement());
    }

    #[test]
    fn test_degenerate_panel_reaches_engine() {
        let flat = Bounds::from_center_size([0.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
        let roof = RoofPlaneGenerator::new(RoofShapeParams::default())
            .generate(&flat)
            .unwrap();
        let engine = QuadEngine::new();

        let meshes = loft_roof(&roof, &engine).unwrap();
        assert_eq!(engine.calls.get(), 1);
        assert!(meshes.primary.is_empty());
    }

    #[test]
    fn test_engine_failure_propagates() {
        let roof = RoofPlaneGenerator::new(RoofShapeParams::default())
            .generate(&footprint())
            .unwrap();
        let failing = |panel: &PanelSpec| -> roofgen_model::Result<MeshData> {
            Err(ModelError::loft(panel.design_name.clone(), "no surface"))
        };

        let err = loft_roof(&roof, &failing).unwrap_err();
        assert!(matches!(err, Error::Model(ModelError::Loft { .. })));
        assert!(err.to_string().contains("Roof Side"));
    }
}

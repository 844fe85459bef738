// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Roof Plane Generator - assembles finished roof sides
//!
//! Sequences dimension resolution, profile curves, subdivision and UV tiling
//! into panel specifications, then decides between a symmetric gable (one
//! panel shown twice) and an asymmetric roof (two independently resolved
//! panels).

use crate::dimensions::resolve_dimensions;
use crate::placement::{
    child_placement, extra_rotation, place_panel, rotate_bounds_90, to_placement, Side,
};
use crate::profile::ProfilePair;
use crate::subdivide::subdivide_pair;
use crate::uv::resolve_uv_tiling;
use crate::Result;
use nalgebra::{Point3, Vector2, Vector3};
use roofgen_model::{
    Bounds, GeneratedRoof, LoftSettings, ParameterOverrides, PanelSpec, RoofShapeParams,
    TileDesignPreset, ROOF_SIDE_DESIGN,
};

/// Roof plane generator
///
/// Holds the immutable inputs of a generation request. The generator keeps no
/// state between calls; every [`generate`](Self::generate) builds fresh panels.
#[derive(Debug, Clone, Default)]
pub struct RoofPlaneGenerator {
    params: RoofShapeParams,
    overrides: ParameterOverrides,
    preset: Option<TileDesignPreset>,
}

impl RoofPlaneGenerator {
    /// Create a generator without overrides or preset
    pub fn new(params: RoofShapeParams) -> Self {
        Self {
            params,
            overrides: ParameterOverrides::none(),
            preset: None,
        }
    }

    /// Use externally supplied height / ridge shift values
    pub fn with_overrides(mut self, overrides: ParameterOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Seed profile curves and material from a preset
    pub fn with_preset(mut self, preset: TileDesignPreset) -> Self {
        self.preset = Some(preset);
        self
    }

    pub fn params(&self) -> &RoofShapeParams {
        &self.params
    }

    pub fn overrides(&self) -> &ParameterOverrides {
        &self.overrides
    }

    pub fn preset(&self) -> Option<&TileDesignPreset> {
        self.preset.as_ref()
    }

    /// Roof height after overrides
    pub fn roof_height(&self) -> f64 {
        self.params.effective_roof_height(&self.overrides)
    }

    /// Ridge shift after overrides
    pub fn ridge_shift(&self) -> f64 {
        self.params.effective_ridge_shift(&self.overrides)
    }

    /// Generate both roof sides for a footprint
    ///
    /// The primary side faces back and carries the generator-space
    /// coordinates; the secondary side faces forward and is recorded relative
    /// to the primary.
    pub fn generate(&self, bounds: &Bounds) -> Result<GeneratedRoof> {
        let roof_height = self.roof_height();
        let ridge_shift = self.ridge_shift();

        let center = Point3::from(bounds.center);
        let extra = extra_rotation(self.params.rotate_90);
        let extra_offset = Vector3::from(self.params.extra_offset);

        let primary_panel = self.prepare_panel(bounds, roof_height, ridge_shift)?;
        let primary_iso = place_panel(
            &center,
            Side::Back,
            &(extra_offset + Vector3::from(primary_panel.structure_offset)),
            &extra,
        );

        if ridge_shift == 0.0 {
            log::debug!(
                "Symmetric roof: {:.3} x {:.3} x {:.3}",
                primary_panel.width,
                primary_panel.height,
                primary_panel.depth
            );

            let mirror_iso = place_panel(
                &center,
                Side::Forward,
                &(extra_offset + Vector3::from(primary_panel.structure_offset)),
                &extra,
            );

            return Ok(GeneratedRoof::Symmetric {
                panel: primary_panel,
                primary: to_placement(&primary_iso),
                mirror: child_placement(&primary_iso, &mirror_iso),
            });
        }

        let secondary_panel = self.prepare_panel(bounds, roof_height, -ridge_shift)?;
        let secondary_iso = place_panel(
            &center,
            Side::Forward,
            &(extra_offset + Vector3::from(secondary_panel.structure_offset)),
            &extra,
        );

        log::debug!(
            "Asymmetric roof (shift {:.3}): depths {:.3} / {:.3}",
            ridge_shift,
            primary_panel.depth,
            secondary_panel.depth
        );

        Ok(GeneratedRoof::Asymmetric {
            primary_panel,
            primary: to_placement(&primary_iso),
            secondary_panel,
            secondary: child_placement(&primary_iso, &secondary_iso),
        })
    }

    /// Resolve one roof side
    ///
    /// # Arguments
    /// * `bounds` - Footprint volume, unrotated
    /// * `roof_height` - Effective roof height
    /// * `ridge_shift` - Ridge shift for this side (the caller negates it for
    ///   the opposite side)
    pub fn prepare_panel(
        &self,
        bounds: &Bounds,
        roof_height: f64,
        ridge_shift: f64,
    ) -> Result<PanelSpec> {
        let bounds = if self.params.rotate_90 {
            rotate_bounds_90(bounds)
        } else {
            *bounds
        };

        let rescale = Vector3::from(self.params.rescale);
        let dims = resolve_dimensions(&bounds, roof_height, ridge_shift, &rescale);

        let profiles = ProfilePair::from_preset(self.preset.as_ref());
        let profiles = subdivide_pair(&profiles, self.params.extra_subdivisions);
        profiles.validate()?;

        let tiling = resolve_uv_tiling(
            &dims,
            &Vector3::from(self.params.cell_size),
            &Vector2::from(self.params.uv_tiling),
        );

        let material = self
            .params
            .target_material
            .clone()
            .or_else(|| self.preset.as_ref().and_then(|p| p.material.clone()));

        Ok(PanelSpec {
            design_name: ROOF_SIDE_DESIGN.to_string(),
            material,
            loft: LoftSettings::default(),
            vertical: profiles.vertical,
            horizontal: profiles.horizontal,
            width: dims.width,
            height: dims.height,
            depth: dims.depth,
            uv_tiling: tiling.into(),
            structure_offset: dims.structure_offset().into(),
            ridge_shift,
        })
    }
}

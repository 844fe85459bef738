// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Resolved panel specifications and their placements
//!
//! These are the generator's outputs. They are produced fresh per request and
//! handed to the loft engine and placement collaborator.

use crate::{Curve, MaterialRef};
use serde::{Deserialize, Serialize};

/// Name given to every generated roof side design
pub const ROOF_SIDE_DESIGN: &str = "Roof Side";

/// Mesh generation technique requested from the loft engine
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenTechnique {
    /// Interpolate a surface between the two profile curves
    #[default]
    Loft,
}

/// Pivot of the generated mesh
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeshOrigin {
    Center,
    /// Bottom face, horizontally centered, back edge
    #[default]
    BottomCenterBack,
}

/// How texture coordinates are fitted to the surface
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UvFit {
    /// Stretch UVs over X and Y, then multiply by the panel's tiling
    #[default]
    FitXY,
}

/// Instructions for the loft engine carried with every panel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoftSettings {
    pub technique: GenTechnique,
    pub origin: MeshOrigin,
    pub uv_fit: UvFit,
    /// Force the lofted surface to span exactly the panel depth
    pub force_depth: bool,
}

impl Default for LoftSettings {
    fn default() -> Self {
        Self {
            technique: GenTechnique::Loft,
            origin: MeshOrigin::BottomCenterBack,
            uv_fit: UvFit::FitXY,
            force_depth: true,
        }
    }
}

/// One fully resolved roof side, ready for lofting
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PanelSpec {
    pub design_name: String,
    pub material: Option<MaterialRef>,
    pub loft: LoftSettings,
    /// Slope profile ("curve1")
    pub vertical: Curve,
    /// Ridge-line profile ("curve2")
    pub horizontal: Curve,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    /// Texture tiling `[u, v]`
    pub uv_tiling: [f64; 2],
    /// Compensation keeping the anchor edge fixed after a ridge shift
    pub structure_offset: [f64; 3],
    /// Ridge shift this panel was resolved with
    pub ridge_shift: f64,
}

impl PanelSpec {
    /// Check whether the panel spans no area
    ///
    /// Degenerate panels are still emitted; the loft engine decides whether to
    /// skip them.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0.0 || self.depth == 0.0
    }
}

/// Position plus rotation quaternion `[x, y, z, w]`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub position: [f64; 3],
    pub rotation: [f64; 4],
}

impl Placement {
    pub const IDENTITY: Placement = Placement {
        position: [0.0, 0.0, 0.0],
        rotation: [0.0, 0.0, 0.0, 1.0],
    };

    pub fn new(position: [f64; 3], rotation: [f64; 4]) -> Self {
        Self { position, rotation }
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Placement of a panel parented under the primary panel
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChildPlacement {
    /// Placement in generator space
    pub world: Placement,
    /// Transform relative to the primary panel
    pub relative: Placement,
}

/// Where the host keeps freshly generated geometry before use
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Staging {
    pub position: [f64; 3],
    pub active: bool,
    pub hidden: bool,
}

impl Default for Staging {
    fn default() -> Self {
        Self {
            position: [10000.0, 10000.0, 10000.0],
            active: false,
            hidden: true,
        }
    }
}

/// Output of one generation request
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GeneratedRoof {
    /// One panel plus a rotated instance of the same panel
    Symmetric {
        panel: PanelSpec,
        primary: Placement,
        mirror: ChildPlacement,
    },
    /// Two independently resolved panels
    Asymmetric {
        primary_panel: PanelSpec,
        primary: Placement,
        secondary_panel: PanelSpec,
        secondary: ChildPlacement,
    },
}

impl GeneratedRoof {
    pub fn is_symmetric(&self) -> bool {
        matches!(self, GeneratedRoof::Symmetric { .. })
    }

    /// Panel owning the primary placement
    pub fn primary_panel(&self) -> &PanelSpec {
        match self {
            GeneratedRoof::Symmetric { panel, .. } => panel,
            GeneratedRoof::Asymmetric { primary_panel, .. } => primary_panel,
        }
    }

    /// Panel shown on the opposite side; the same panel for symmetric roofs
    pub fn secondary_panel(&self) -> &PanelSpec {
        match self {
            GeneratedRoof::Symmetric { panel, .. } => panel,
            GeneratedRoof::Asymmetric {
                secondary_panel, ..
            } => secondary_panel,
        }
    }

    pub fn primary_placement(&self) -> Placement {
        match self {
            GeneratedRoof::Symmetric { primary, .. }
            | GeneratedRoof::Asymmetric { primary, .. } => *primary,
        }
    }

    pub fn secondary_placement(&self) -> ChildPlacement {
        match self {
            GeneratedRoof::Symmetric { mirror, .. } => *mirror,
            GeneratedRoof::Asymmetric { secondary, .. } => *secondary,
        }
    }

    /// Coordinates the host records for the generator itself
    pub fn generator_space(&self) -> Placement {
        self.primary_placement()
    }

    pub fn staging(&self) -> Staging {
        Staging::default()
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Collaborator traits
//!
//! The generator prepares loft inputs; turning them into geometry is the job
//! of whatever engine the host plugs in here.

use crate::{MeshData, PanelSpec, Result};

/// Mesh engine that lofts a finished panel into renderable geometry
///
/// Implementations interpolate a surface between the panel's two profile
/// curves, honoring its dimensions, UV tiling and [`LoftSettings`].
///
/// # Example
///
/// ```ignore
/// use roofgen_model::{MeshData, PanelLoft, PanelSpec, Result};
///
/// struct MyEngine;
///
/// impl PanelLoft for MyEngine {
///     fn loft(&self, panel: &PanelSpec) -> Result<MeshData> {
///         // Build the surface...
///         Ok(MeshData::new())
///     }
/// }
/// ```
///
/// [`LoftSettings`]: crate::LoftSettings
pub trait PanelLoft {
    /// Loft one panel
    ///
    /// Zero-area panels are passed through; the engine decides whether to
    /// return an empty mesh for them.
    fn loft(&self, panel: &PanelSpec) -> Result<MeshData>;
}

impl<F> PanelLoft for F
where
    F: Fn(&PanelSpec) -> Result<MeshData>,
{
    fn loft(&self, panel: &PanelSpec) -> Result<MeshData> {
        self(panel)
    }
}

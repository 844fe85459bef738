// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for roof generation

use roofgen_model::{CurveAxis, ModelError};
use thiserror::Error;

/// Roof generation result type
pub type Result<T> = std::result::Result<T, Error>;

/// Roof generation errors
#[derive(Error, Debug)]
pub enum Error {
    /// A profile curve reached the loft hand-off without enough points.
    /// The default-fill step makes this unreachable for any input, so seeing
    /// it means the curve builder is broken.
    #[error("Degenerate {axis} curve: {points} point(s), need at least 2")]
    DegenerateCurve { axis: CurveAxis, points: usize },

    /// Error raised by a collaborator (loft engine, config loading)
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl Error {
    /// Create a degenerate curve error
    pub fn degenerate_curve(axis: CurveAxis, points: usize) -> Self {
        Error::DegenerateCurve { axis, points }
    }
}

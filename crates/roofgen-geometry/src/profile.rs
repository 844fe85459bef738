// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Profile curve definitions and default shapes

use crate::error::{Error, Result};
use roofgen_model::{ControlPoint, Curve, CurveAxis, TileDesignPreset, WHITE};

/// Named default shape used when a profile curve is unset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultCurveShape {
    pub name: &'static str,
    /// Control point positions in traversal order
    pub points: [[f64; 2]; 4],
}

impl DefaultCurveShape {
    /// Straight diagonal ramp: a single-pitch slope
    pub const VERTICAL_RAMP: DefaultCurveShape = DefaultCurveShape {
        name: "vertical-ramp",
        points: [[0.0, 0.0], [0.25, 0.25], [0.75, 0.75], [1.0, 1.0]],
    };

    /// Flat ridge line
    pub const HORIZONTAL_RIDGE: DefaultCurveShape = DefaultCurveShape {
        name: "horizontal-ridge",
        points: [[0.0, 0.5], [0.35, 0.5], [0.65, 0.5], [1.0, 0.5]],
    };

    /// Default shape for a profile axis
    pub fn for_axis(axis: CurveAxis) -> Self {
        match axis {
            CurveAxis::Vertical => Self::VERTICAL_RAMP,
            CurveAxis::Horizontal => Self::HORIZONTAL_RIDGE,
        }
    }

    /// Build the curve, painting every point with `color`
    pub fn to_curve(&self, color: [f32; 4]) -> Curve {
        self.points
            .iter()
            .map(|p| ControlPoint::new(p[0], p[1], true).with_color(color))
            .collect::<Vec<_>>()
            .into()
    }
}

/// Fill an unset curve with a default shape
///
/// Curves with two or more points are returned untouched. Otherwise the
/// default shape is returned, colored with the first existing point's color so
/// a cleared curve keeps its paint (white when there was nothing to keep).
pub fn ensure_default_curve(curve: Curve, shape: &DefaultCurveShape) -> Curve {
    if curve.is_set() {
        return curve;
    }

    let color = curve.first().map(|p| p.color).unwrap_or(WHITE);
    shape.to_curve(color)
}

/// The two profile curves of a roof panel
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfilePair {
    /// Slope profile ("curve1")
    pub vertical: Curve,
    /// Ridge-line profile ("curve2")
    pub horizontal: Curve,
}

impl ProfilePair {
    /// Create a pair from explicit curves, filling unset ones with defaults
    pub fn new(vertical: Curve, horizontal: Curve) -> Self {
        Self {
            vertical: ensure_default_curve(vertical, &DefaultCurveShape::VERTICAL_RAMP),
            horizontal: ensure_default_curve(horizontal, &DefaultCurveShape::HORIZONTAL_RIDGE),
        }
    }

    /// Seed curves from a preset, or start from the default shapes
    pub fn from_preset(preset: Option<&TileDesignPreset>) -> Self {
        match preset {
            Some(preset) => Self::new(preset.vertical.clone(), preset.horizontal.clone()),
            None => Self::new(Curve::new(), Curve::new()),
        }
    }

    /// Get the curve for an axis
    pub fn curve(&self, axis: CurveAxis) -> &Curve {
        match axis {
            CurveAxis::Vertical => &self.vertical,
            CurveAxis::Horizontal => &self.horizontal,
        }
    }

    /// Verify both curves can be lofted
    pub fn validate(&self) -> Result<()> {
        for axis in [CurveAxis::Vertical, CurveAxis::Horizontal] {
            let curve = self.curve(axis);
            if !curve.is_set() {
                log::error!("{} profile curve has {} point(s)", axis, curve.len());
                return Err(Error::degenerate_curve(axis, curve.len()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

    fn positions(curve: &Curve) -> Vec<[f64; 2]> {
        curve.iter().map(|p| p.position).collect()
    }

    #[test]
    fn test_empty_curve_gets_white_default() {
        let curve = ensure_default_curve(Curve::new(), &DefaultCurveShape::VERTICAL_RAMP);
        assert_eq!(
            positions(&curve),
            vec![[0.0, 0.0], [0.25, 0.25], [0.75, 0.75], [1.0, 1.0]]
        );
        assert!(curve.iter().all(|p| p.color == WHITE && p.smooth));
    }

    #[test]
    fn test_single_point_keeps_its_color() {
        let single = Curve::from_points(vec![ControlPoint::new(0.3, 0.9, false).with_color(RED)]);
        let curve = ensure_default_curve(single, &DefaultCurveShape::HORIZONTAL_RIDGE);
        assert_eq!(
            positions(&curve),
            vec![[0.0, 0.5], [0.35, 0.5], [0.65, 0.5], [1.0, 0.5]]
        );
        assert!(curve.iter().all(|p| p.color == RED));
    }

    #[test]
    fn test_set_curve_untouched() {
        let original = Curve::from_points(vec![
            ControlPoint::new(0.0, 0.1, false).with_color(RED),
            ControlPoint::new(1.0, 0.9, false),
        ]);
        let curve = ensure_default_curve(original.clone(), &DefaultCurveShape::VERTICAL_RAMP);
        assert_eq!(curve, original);
    }

    #[test]
    fn test_default_shapes_are_monotonic() {
        for axis in [CurveAxis::Vertical, CurveAxis::Horizontal] {
            let curve = DefaultCurveShape::for_axis(axis).to_curve(WHITE);
            assert!(curve.is_monotonic());
            assert_eq!(curve.first().unwrap().u(), 0.0);
            assert_eq!(curve.last().unwrap().u(), 1.0);
        }
    }

    #[test]
    fn test_pair_from_preset() {
        let preset = TileDesignPreset {
            name: "Curved".to_string(),
            vertical: Curve::from_points(vec![
                ControlPoint::new(0.0, 0.0, true),
                ControlPoint::new(0.5, 0.8, true),
                ControlPoint::new(1.0, 1.0, true),
            ]),
            horizontal: Curve::from_points(vec![ControlPoint::new(0.5, 0.5, true).with_color(RED)]),
            material: None,
        };

        let pair = ProfilePair::from_preset(Some(&preset));
        assert_eq!(pair.vertical, preset.vertical);
        assert_eq!(pair.horizontal.len(), 4);
        assert!(pair.horizontal.iter().all(|p| p.color == RED));
        assert!(pair.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unset_curve() {
        let pair = ProfilePair {
            vertical: DefaultCurveShape::VERTICAL_RAMP.to_curve(WHITE),
            horizontal: Curve::new(),
        };
        let err = pair.validate().unwrap_err();
        assert!(matches!(
            err,
            Error::DegenerateCurve {
                axis: CurveAxis::Horizontal,
                points: 0
            }
        ));
    }
}

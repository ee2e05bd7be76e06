//! Left/right labelling of the two eyes.
//!
//! The heading circle is cut into four quarter-turn sectors centred on the
//! cardinal directions. Each sector carries a rule "the left eye is the blob
//! with the minimum/maximum x/y". The rules depend on how the camera looks at
//! the animal (top or bottom view, mirror in the light path), so they are
//! configuration rather than geometry. The default table assumes a dorsal
//! view and is keyed by the direction the body points on screen, so a rigid
//! rotation of the fish never swaps its labels. It has not been validated
//! against labelled data for every rig.

use crate::angle::{in_sector, mod2pi};
use crate::types::{EyeSide, Point2D};
use log::debug;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_4;

/// Image axis compared by a [`SideRule`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extremum {
    Min,
    Max,
}

/// "The left eye is the blob with the `pick` value along `axis`."
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideRule {
    pub axis: Axis,
    pub pick: Extremum,
}

impl SideRule {
    pub const fn new(axis: Axis, pick: Extremum) -> Self {
        Self { axis, pick }
    }

    /// Index (0 or 1) of the eye selected by this rule. Equal coordinates
    /// select the first eye.
    pub fn select(&self, eyes: &[Point2D; 2]) -> usize {
        let coord = |p: &Point2D| match self.axis {
            Axis::X => p.x,
            Axis::Y => p.y,
        };
        let (a, b) = (coord(&eyes[0]), coord(&eyes[1]));
        let second_wins = match self.pick {
            Extremum::Min => b < a,
            Extremum::Max => b > a,
        };
        usize::from(second_wins)
    }
}

/// Quarter-turn heading sector, named by its centre direction on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sector {
    /// [7π/4, π/4)
    Right,
    /// [π/4, 3π/4)
    Up,
    /// [3π/4, 5π/4)
    Left,
    /// [5π/4, 7π/4)
    Down,
}

impl Sector {
    pub fn from_heading(heading: f64) -> Self {
        let h = mod2pi(heading);
        if in_sector(h, FRAC_PI_4, 3.0 * FRAC_PI_4) {
            Sector::Up
        } else if in_sector(h, 3.0 * FRAC_PI_4, 5.0 * FRAC_PI_4) {
            Sector::Left
        } else if in_sector(h, 5.0 * FRAC_PI_4, 7.0 * FRAC_PI_4) {
            Sector::Down
        } else {
            Sector::Right
        }
    }
}

/// Sector → rule table used to pick the left eye.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SideAssignmentTable {
    pub right: SideRule,
    pub up: SideRule,
    pub left: SideRule,
    pub down: SideRule,
}

impl Default for SideAssignmentTable {
    fn default() -> Self {
        Self {
            right: SideRule::new(Axis::Y, Extremum::Min),
            up: SideRule::new(Axis::X, Extremum::Min),
            left: SideRule::new(Axis::Y, Extremum::Max),
            down: SideRule::new(Axis::X, Extremum::Max),
        }
    }
}

impl SideAssignmentTable {
    pub fn rule(&self, sector: Sector) -> SideRule {
        match sector {
            Sector::Right => self.right,
            Sector::Up => self.up,
            Sector::Left => self.left,
            Sector::Down => self.down,
        }
    }
}

/// Which input eye is left and which is right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SideAssignment {
    pub sector: Sector,
    /// Index into the eye pair passed to [`assign_sides`].
    pub left: usize,
    pub right: usize,
}

impl SideAssignment {
    pub fn index_of(&self, side: EyeSide) -> usize {
        match side {
            EyeSide::Left => self.left,
            EyeSide::Right => self.right,
        }
    }
}

/// Labels the eye pair using the rule of the sector `heading` falls in.
pub fn assign_sides(
    heading: f64,
    eyes: &[Point2D; 2],
    table: &SideAssignmentTable,
) -> SideAssignment {
    let sector = Sector::from_heading(heading);
    let left = table.rule(sector).select(eyes);
    debug!("sides: heading={heading:.3} sector={sector:?} left={left}");
    SideAssignment {
        sector,
        left,
        right: 1 - left,
    }
}

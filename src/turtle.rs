//! Turtle pose and the drawing alphabet.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// The walking cursor: a world-space position plus a unit heading.
///
/// The heading is a bare direction vector, not an oriented frame, and every
/// rotation happens about a fixed world axis. A consequence worth knowing:
/// rotating about the axis the heading already lies on changes nothing, so a
/// `+` issued while the heading still points up `+Z` is a no-op until some
/// pitch or roll tips the heading off that axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtlePose {
    /// Current position.
    pub position: Vec3,
    /// Current travel direction, unit length.
    pub heading: Vec3,
}

impl Default for TurtlePose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            heading: Vec3::Z,
        }
    }
}

impl TurtlePose {
    /// Moves `distance` along the heading.
    pub fn advance(&mut self, distance: f32) {
        self.position += self.heading * distance;
    }

    /// Pitches the heading about the world X axis by `angle` radians.
    pub fn rotate_x(&mut self, angle: f32) {
        self.heading = Quat::from_axis_angle(Vec3::X, angle) * self.heading;
    }

    /// Rolls the heading about the world Y axis by `angle` radians.
    pub fn rotate_y(&mut self, angle: f32) {
        self.heading = Quat::from_axis_angle(Vec3::Y, angle) * self.heading;
    }

    /// Yaws the heading about the world Z axis by `angle` radians.
    pub fn rotate_z(&mut self, angle: f32) {
        self.heading = Quat::from_axis_angle(Vec3::Z, angle) * self.heading;
    }
}

/// What a grammar symbol asks of the turtle.
///
/// Rotation variants carry the direction sign; the magnitude comes from the
/// instruction parameter or the configured default angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TurtleOp {
    /// Advance and record a stroke (`F`).
    Draw,
    /// Advance without drawing (`f`).
    Move,
    /// Rotate about world Z (`+` and `-`).
    Yaw(f32),
    /// Rotate about world X (`&` and `^`).
    Pitch(f32),
    /// Rotate about world Y (`<` and `>`).
    Roll(f32),
    /// Half turn about world Z (`|`); any parameter is ignored.
    TurnAround,
    /// Save the pose (`[`).
    Push,
    /// Restore the most recently saved pose (`]`).
    Pop,
    /// Symbol with no turtle meaning.
    Ignore,
}

impl TurtleOp {
    /// Classifies a grammar symbol.
    ///
    /// The interpreter consults its mesh dictionary before this table, so a
    /// dictionary entry shadows whatever is listed here.
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            'F' => Self::Draw,
            'f' => Self::Move,
            '+' => Self::Yaw(1.0),
            '-' => Self::Yaw(-1.0),
            '&' => Self::Pitch(1.0),
            '^' => Self::Pitch(-1.0),
            '<' => Self::Roll(1.0),
            '>' => Self::Roll(-1.0),
            '|' => Self::TurnAround,
            '[' => Self::Push,
            ']' => Self::Pop,
            _ => Self::Ignore,
        }
    }
}

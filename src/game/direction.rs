//! Directional cues and the fixed coordinate tables attached to them.

use serde::Serialize;

/// Horizontal and vertical step applied to the marker on every press.
const MARKER_STEP: i32 = 8;
/// Extra step applied on the vertical axis.
const VERTICAL_BONUS: i32 = 10;
/// Lower bound of a percentage coordinate.
const AXIS_MIN: i32 = 0;
/// Upper bound of a percentage coordinate.
const AXIS_MAX: i32 = 95;

/// Marker rest position, restored after every displacement.
pub const MARKER_REST: Position = Position { top: 60, left: 50 };
/// Spot position before the first cue has been placed.
pub const SPOT_ORIGIN: Position = Position { top: 50, left: 50 };

/// One of the four arrow keys the player can be asked to press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// `ArrowUp`.
    Up,
    /// `ArrowDown`.
    Down,
    /// `ArrowLeft`.
    Left,
    /// `ArrowRight`.
    Right,
}

impl Direction {
    /// Every direction, in control display order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Map a DOM-style key name onto a direction. Any other key yields `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }

    /// DOM-style key name for this direction.
    pub fn key(self) -> &'static str {
        match self {
            Direction::Up => "ArrowUp",
            Direction::Down => "ArrowDown",
            Direction::Left => "ArrowLeft",
            Direction::Right => "ArrowRight",
        }
    }

    /// Arrow glyph shown on the matching control.
    pub fn glyph(self) -> char {
        match self {
            Direction::Up => '⭡',
            Direction::Down => '⭣',
            Direction::Left => '⭠',
            Direction::Right => '⭢',
        }
    }

    /// Where the target spot sits while this direction is the active cue.
    pub fn spot(self) -> Position {
        match self {
            Direction::Up => Position { top: 20, left: 48 },
            Direction::Down => Position { top: 68, left: 48 },
            Direction::Left => Position { top: 42, left: 40 },
            Direction::Right => Position { top: 42, left: 55 },
        }
    }

    /// Move `from` one step towards this direction, clamped to the play area.
    ///
    /// Only the axis matching the direction changes.
    pub fn displace(self, from: Position) -> Position {
        match self {
            Direction::Up => Position {
                top: (from.top - MARKER_STEP - VERTICAL_BONUS).max(AXIS_MIN),
                ..from
            },
            Direction::Down => Position {
                top: (from.top + MARKER_STEP + VERTICAL_BONUS).min(AXIS_MAX),
                ..from
            },
            Direction::Left => Position {
                left: (from.left - MARKER_STEP).max(AXIS_MIN),
                ..from
            },
            Direction::Right => Position {
                left: (from.left + MARKER_STEP).min(AXIS_MAX),
                ..from
            },
        }
    }
}

/// Percentage coordinate of a sprite inside the game area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    /// Distance from the top edge, in percent.
    pub top: i32,
    /// Distance from the left edge, in percent.
    pub left: i32,
}
